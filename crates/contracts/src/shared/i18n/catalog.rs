use super::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    // Navigation
    ("appTitle", "Admin Console"),
    ("dashboard", "Dashboard"),
    ("masterData", "Master Data"),
    ("fieldManagement", "Field Management"),
    ("users", "Users"),
    ("settings", "Settings"),
    ("logout", "Logout"),
    // Authentication
    ("login", "Login"),
    ("email", "Email"),
    ("password", "Password"),
    ("welcomeBack", "Welcome Back"),
    ("pleaseSignIn", "Please sign in to your account"),
    ("emailRequired", "Email is required"),
    ("passwordRequired", "Password is required"),
    // CRUD operations
    ("create", "Create"),
    ("read", "Read"),
    ("update", "Update"),
    ("delete", "Delete"),
    ("search", "Search"),
    ("edit", "Edit"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("confirm", "Confirm"),
    // Common
    ("name", "Name"),
    ("description", "Description"),
    ("status", "Status"),
    ("actions", "Actions"),
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("type", "Type"),
    ("isRequired", "Required"),
    ("defaultValue", "Default Value"),
    ("yes", "Yes"),
    ("no", "No"),
    ("noResults", "No results found."),
    ("previous", "Previous"),
    ("next", "Next"),
    // Messages
    ("createSuccess", "Created successfully"),
    ("updateSuccess", "Updated successfully"),
    ("deleteSuccess", "Deleted successfully"),
    ("deleteConfirm", "Are you sure you want to delete this item?"),
    ("deleteIrreversible", "This action cannot be undone."),
    ("requiredField", "Name is required"),
    ("invalidStatus", "Unknown status"),
    ("invalidFieldType", "Unknown field type"),
    ("createMasterDataDescription", "Add a new master data item."),
    ("editMasterDataDescription", "Edit the master data item."),
    ("createFieldDescription", "Add a new field definition."),
    ("editFieldDescription", "Edit the field definition."),
    // Dashboard
    ("welcomeDashboard", "Welcome to your admin dashboard"),
    ("totalRecords", "Total records"),
    ("activeUsers", "Active users"),
    ("configurations", "Configurations"),
    ("quickActions", "Quick Actions"),
    ("quickActionsDescription", "Common administrative tasks"),
    ("addRecords", "Add new records"),
    ("findData", "Find existing data"),
    ("modifyRecords", "Modify records"),
    ("removeData", "Remove data"),
    // Settings
    ("settingsDescription", "Manage your application preferences."),
    ("appearance", "Appearance"),
    ("appearanceDescription", "Customize how the application looks."),
    ("darkMode", "Dark Mode"),
    ("darkModeDescription", "Toggle between light and dark theme"),
    ("language", "Language"),
    ("languageDescription", "Choose your preferred language."),
    ("currentLanguage", "Current Language"),
    ("notifications", "Notifications"),
    ("notificationsDescription", "Configure how you receive notifications."),
    ("emailNotifications", "Email Notifications"),
    ("emailNotificationsDescription", "Receive email notifications for important events"),
    ("pushNotifications", "Push Notifications"),
    ("pushNotificationsDescription", "Receive push notifications for important events"),
    ("system", "System"),
    ("systemDescription", "System-wide settings and options."),
    ("automaticUpdates", "Automatic Updates"),
    ("automaticUpdatesDescription", "Keep the application up-to-date automatically"),
    ("analytics", "Analytics"),
    ("analyticsDescription", "Help us improve by sharing usage data"),
    ("settingsSaved", "Settings saved"),
];

const TH: Table = &[
    ("appTitle", "คอนโซลผู้ดูแลระบบ"),
    ("dashboard", "แดชบอร์ด"),
    ("masterData", "ข้อมูลหลัก"),
    ("fieldManagement", "การจัดการฟิลด์"),
    ("users", "ผู้ใช้"),
    ("settings", "การตั้งค่า"),
    ("logout", "ออกจากระบบ"),
    ("login", "เข้าสู่ระบบ"),
    ("email", "อีเมล"),
    ("password", "รหัสผ่าน"),
    ("welcomeBack", "ยินดีต้อนรับกลับ"),
    ("pleaseSignIn", "กรุณาเข้าสู่ระบบ"),
    ("emailRequired", "กรุณากรอกอีเมล"),
    ("passwordRequired", "กรุณากรอกรหัสผ่าน"),
    ("create", "สร้าง"),
    ("read", "อ่าน"),
    ("update", "อัปเดต"),
    ("delete", "ลบ"),
    ("search", "ค้นหา"),
    ("edit", "แก้ไข"),
    ("save", "บันทึก"),
    ("cancel", "ยกเลิก"),
    ("confirm", "ยืนยัน"),
    ("name", "ชื่อ"),
    ("description", "คำอธิบาย"),
    ("status", "สถานะ"),
    ("actions", "การดำเนินการ"),
    ("active", "ใช้งาน"),
    ("inactive", "ไม่ใช้งาน"),
    ("type", "ประเภท"),
    ("isRequired", "จำเป็น"),
    ("defaultValue", "ค่าเริ่มต้น"),
    ("yes", "ใช่"),
    ("no", "ไม่"),
    ("noResults", "ไม่พบผลลัพธ์"),
    ("previous", "ก่อนหน้า"),
    ("next", "ถัดไป"),
    ("createSuccess", "สร้างสำเร็จ"),
    ("updateSuccess", "อัปเดตสำเร็จ"),
    ("deleteSuccess", "ลบสำเร็จ"),
    ("deleteConfirm", "คุณแน่ใจหรือไม่ว่าต้องการลบรายการนี้?"),
    ("deleteIrreversible", "การดำเนินการนี้ไม่สามารถย้อนกลับได้"),
    ("requiredField", "กรุณากรอกชื่อ"),
    ("invalidStatus", "สถานะไม่ถูกต้อง"),
    ("invalidFieldType", "ประเภทฟิลด์ไม่ถูกต้อง"),
    ("createMasterDataDescription", "เพิ่มรายการข้อมูลหลักใหม่"),
    ("editMasterDataDescription", "แก้ไขรายการข้อมูลหลัก"),
    ("createFieldDescription", "เพิ่มการกำหนดฟิลด์ใหม่"),
    ("editFieldDescription", "แก้ไขการกำหนดฟิลด์"),
    ("welcomeDashboard", "ยินดีต้อนรับสู่แดชบอร์ดผู้ดูแลระบบ"),
    ("totalRecords", "จำนวนระเบียนทั้งหมด"),
    ("activeUsers", "ผู้ใช้ที่ใช้งานอยู่"),
    ("configurations", "การกำหนดค่า"),
    ("quickActions", "การดำเนินการด่วน"),
    ("quickActionsDescription", "งานดูแลระบบที่ใช้บ่อย"),
    ("addRecords", "เพิ่มระเบียนใหม่"),
    ("findData", "ค้นหาข้อมูลที่มีอยู่"),
    ("modifyRecords", "แก้ไขระเบียน"),
    ("removeData", "ลบข้อมูล"),
    ("settingsDescription", "จัดการการตั้งค่าแอปพลิเคชันของคุณ"),
    ("appearance", "รูปลักษณ์"),
    ("appearanceDescription", "ปรับแต่งหน้าตาของแอปพลิเคชัน"),
    ("darkMode", "โหมดมืด"),
    ("darkModeDescription", "สลับระหว่างธีมสว่างและธีมมืด"),
    ("language", "ภาษา"),
    ("languageDescription", "เลือกภาษาที่คุณต้องการ"),
    ("currentLanguage", "ภาษาปัจจุบัน"),
    ("notifications", "การแจ้งเตือน"),
    ("notificationsDescription", "กำหนดวิธีรับการแจ้งเตือน"),
    ("emailNotifications", "การแจ้งเตือนทางอีเมล"),
    ("emailNotificationsDescription", "รับการแจ้งเตือนทางอีเมลสำหรับเหตุการณ์สำคัญ"),
    ("pushNotifications", "การแจ้งเตือนแบบพุช"),
    ("pushNotificationsDescription", "รับการแจ้งเตือนแบบพุชสำหรับเหตุการณ์สำคัญ"),
    ("system", "ระบบ"),
    ("systemDescription", "การตั้งค่าและตัวเลือกทั้งระบบ"),
    ("automaticUpdates", "อัปเดตอัตโนมัติ"),
    ("automaticUpdatesDescription", "อัปเดตแอปพลิเคชันให้เป็นปัจจุบันโดยอัตโนมัติ"),
    ("analytics", "การวิเคราะห์"),
    ("analyticsDescription", "ช่วยเราปรับปรุงโดยการแบ่งปันข้อมูลการใช้งาน"),
    ("settingsSaved", "บันทึกการตั้งค่าแล้ว"),
];

const JA: Table = &[
    ("appTitle", "管理コンソール"),
    ("dashboard", "ダッシュボード"),
    ("masterData", "マスターデータ"),
    ("fieldManagement", "フィールド管理"),
    ("users", "ユーザー"),
    ("settings", "設定"),
    ("logout", "ログアウト"),
    ("login", "ログイン"),
    ("email", "メール"),
    ("password", "パスワード"),
    ("welcomeBack", "おかえりなさい"),
    ("pleaseSignIn", "アカウントにサインインしてください"),
    ("emailRequired", "メールを入力してください"),
    ("passwordRequired", "パスワードを入力してください"),
    ("create", "作成"),
    ("read", "読み取り"),
    ("update", "更新"),
    ("delete", "削除"),
    ("search", "検索"),
    ("edit", "編集"),
    ("save", "保存"),
    ("cancel", "キャンセル"),
    ("confirm", "確認"),
    ("name", "名前"),
    ("description", "説明"),
    ("status", "ステータス"),
    ("actions", "アクション"),
    ("active", "アクティブ"),
    ("inactive", "非アクティブ"),
    ("type", "タイプ"),
    ("isRequired", "必須"),
    ("defaultValue", "デフォルト値"),
    ("yes", "はい"),
    ("no", "いいえ"),
    ("noResults", "結果が見つかりません。"),
    ("previous", "前へ"),
    ("next", "次へ"),
    ("createSuccess", "正常に作成されました"),
    ("updateSuccess", "正常に更新されました"),
    ("deleteSuccess", "正常に削除されました"),
    ("deleteConfirm", "この項目を削除してもよろしいですか？"),
    ("deleteIrreversible", "この操作は元に戻せません。"),
    ("requiredField", "名前は必須です"),
    ("invalidStatus", "不明なステータスです"),
    ("invalidFieldType", "不明なフィールドタイプです"),
    ("createMasterDataDescription", "新しいマスターデータ項目を追加します。"),
    ("editMasterDataDescription", "マスターデータ項目を編集します。"),
    ("createFieldDescription", "新しいフィールド定義を追加します。"),
    ("editFieldDescription", "フィールド定義を編集します。"),
    ("welcomeDashboard", "管理ダッシュボードへようこそ"),
    ("totalRecords", "総レコード数"),
    ("activeUsers", "アクティブユーザー"),
    ("configurations", "構成"),
    ("quickActions", "クイックアクション"),
    ("quickActionsDescription", "よく使う管理タスク"),
    ("addRecords", "新しいレコードを追加"),
    ("findData", "既存のデータを検索"),
    ("modifyRecords", "レコードを変更"),
    ("removeData", "データを削除"),
    ("settingsDescription", "アプリケーションの設定を管理します。"),
    ("appearance", "外観"),
    ("appearanceDescription", "アプリケーションの見た目をカスタマイズします。"),
    ("darkMode", "ダークモード"),
    ("darkModeDescription", "ライトテーマとダークテーマを切り替えます"),
    ("language", "言語"),
    ("languageDescription", "使用する言語を選択してください。"),
    ("currentLanguage", "現在の言語"),
    ("notifications", "通知"),
    ("notificationsDescription", "通知の受け取り方法を設定します。"),
    ("emailNotifications", "メール通知"),
    ("emailNotificationsDescription", "重要なイベントのメール通知を受け取る"),
    ("pushNotifications", "プッシュ通知"),
    ("pushNotificationsDescription", "重要なイベントのプッシュ通知を受け取る"),
    ("system", "システム"),
    ("systemDescription", "システム全体の設定とオプション。"),
    ("automaticUpdates", "自動更新"),
    ("automaticUpdatesDescription", "アプリケーションを自動的に最新の状態に保つ"),
    ("analytics", "アナリティクス"),
    ("analyticsDescription", "使用状況データを共有して改善に協力する"),
    ("settingsSaved", "設定を保存しました"),
];

const ZH: Table = &[
    ("appTitle", "管理控制台"),
    ("dashboard", "仪表板"),
    ("masterData", "主数据"),
    ("fieldManagement", "字段管理"),
    ("users", "用户"),
    ("settings", "设置"),
    ("logout", "登出"),
    ("login", "登录"),
    ("email", "邮箱"),
    ("password", "密码"),
    ("welcomeBack", "欢迎回来"),
    ("pleaseSignIn", "请登录您的账户"),
    ("emailRequired", "请输入邮箱"),
    ("passwordRequired", "请输入密码"),
    ("create", "创建"),
    ("read", "读取"),
    ("update", "更新"),
    ("delete", "删除"),
    ("search", "搜索"),
    ("edit", "编辑"),
    ("save", "保存"),
    ("cancel", "取消"),
    ("confirm", "确认"),
    ("name", "名称"),
    ("description", "描述"),
    ("status", "状态"),
    ("actions", "操作"),
    ("active", "活跃"),
    ("inactive", "非活跃"),
    ("type", "类型"),
    ("isRequired", "必填"),
    ("defaultValue", "默认值"),
    ("yes", "是"),
    ("no", "否"),
    ("noResults", "未找到结果。"),
    ("previous", "上一页"),
    ("next", "下一页"),
    ("createSuccess", "创建成功"),
    ("updateSuccess", "更新成功"),
    ("deleteSuccess", "删除成功"),
    ("deleteConfirm", "您确定要删除此项吗？"),
    ("deleteIrreversible", "此操作无法撤销。"),
    ("requiredField", "名称为必填项"),
    ("invalidStatus", "未知状态"),
    ("invalidFieldType", "未知字段类型"),
    ("createMasterDataDescription", "添加新的主数据项。"),
    ("editMasterDataDescription", "编辑主数据项。"),
    ("createFieldDescription", "添加新的字段定义。"),
    ("editFieldDescription", "编辑字段定义。"),
    ("welcomeDashboard", "欢迎使用管理仪表板"),
    ("totalRecords", "记录总数"),
    ("activeUsers", "活跃用户"),
    ("configurations", "配置项"),
    ("quickActions", "快捷操作"),
    ("quickActionsDescription", "常用管理任务"),
    ("addRecords", "添加新记录"),
    ("findData", "查找现有数据"),
    ("modifyRecords", "修改记录"),
    ("removeData", "删除数据"),
    ("settingsDescription", "管理您的应用偏好设置。"),
    ("appearance", "外观"),
    ("appearanceDescription", "自定义应用的外观。"),
    ("darkMode", "深色模式"),
    ("darkModeDescription", "在浅色和深色主题之间切换"),
    ("language", "语言"),
    ("languageDescription", "选择您偏好的语言。"),
    ("currentLanguage", "当前语言"),
    ("notifications", "通知"),
    ("notificationsDescription", "配置接收通知的方式。"),
    ("emailNotifications", "邮件通知"),
    ("emailNotificationsDescription", "接收重要事件的邮件通知"),
    ("pushNotifications", "推送通知"),
    ("pushNotificationsDescription", "接收重要事件的推送通知"),
    ("system", "系统"),
    ("systemDescription", "系统范围的设置和选项。"),
    ("automaticUpdates", "自动更新"),
    ("automaticUpdatesDescription", "自动保持应用为最新版本"),
    ("analytics", "分析"),
    ("analyticsDescription", "通过分享使用数据帮助我们改进"),
    ("settingsSaved", "设置已保存"),
];

static CATALOG: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    [
        (Language::En, EN),
        (Language::Th, TH),
        (Language::Ja, JA),
        (Language::Zh, ZH),
    ]
    .into_iter()
    .map(|(language, table)| (language, table.iter().copied().collect()))
    .collect()
});

pub(super) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    CATALOG
        .get(&language)
        .and_then(|table| table.get(key))
        .copied()
}

#[cfg(test)]
pub(super) fn keys(language: Language) -> Vec<&'static str> {
    CATALOG
        .get(&language)
        .map(|table| table.keys().copied().collect())
        .unwrap_or_default()
}
