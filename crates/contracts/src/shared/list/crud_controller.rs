//! State machine behind a CRUD screen: search query, page window, dialogs.
//!
//! The controller is a plain value. A rendering layer keeps one per screen,
//! forwards user events to it and draws whatever [`CrudController::view`]
//! returns.

use super::filter::filter_records;
use super::pagination::{page_markers, paginate, total_pages, PageMarker, PageState};
use super::record_store::RecordStore;
use crate::domain::common::{Record, RecordId, ValidationError};
use crate::shared::i18n::Translate;

/// Fire-and-forget surface for user-visible messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Messages emitted after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
}

impl Notice {
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::Created => "createSuccess",
            Notice::Updated => "updateSuccess",
            Notice::Deleted => "deleteSuccess",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Browsing,
    CreateDialogOpen,
    EditDialogOpen(RecordId),
    DeleteConfirmOpen(RecordId),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Browsing)
    }
}

/// Result of a dialog submission that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// The edited record disappeared while the dialog was open.
    TargetMissing,
    /// No form dialog was open.
    Ignored,
}

/// Everything a screen needs to draw its table and dialogs
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R> {
    pub items: Vec<R>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub markers: Vec<PageMarker>,
    pub show_pagination: bool,
    pub query: String,
    pub dialog: DialogState,
}

#[derive(Debug, Clone)]
pub struct CrudController<R: Record> {
    store: RecordStore<R>,
    query: String,
    page: PageState,
    dialog: DialogState,
}

impl<R: Record> CrudController<R> {
    pub fn new(store: RecordStore<R>, page_size: usize) -> Self {
        Self {
            store,
            query: String::new(),
            page: PageState::new(page_size),
            dialog: DialogState::Browsing,
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn filtered(&self) -> Vec<&R> {
        filter_records(self.store.all(), &self.query)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page.page_size())
    }

    // ------------------------------------------------------------------
    // Search and navigation
    // ------------------------------------------------------------------

    /// Any query edit sends the user back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.page.set_page(page, total);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.current_page().saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) -> bool {
        self.open(DialogState::CreateDialogOpen)
    }

    /// Returns `false` when another dialog is open or `id` is unknown.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        self.store.get(id).is_some() && self.open(DialogState::EditDialogOpen(id))
    }

    pub fn open_delete(&mut self, id: RecordId) -> bool {
        self.store.get(id).is_some() && self.open(DialogState::DeleteConfirmOpen(id))
    }

    fn open(&mut self, dialog: DialogState) -> bool {
        if self.dialog.is_open() {
            log::debug!("{}: {:?} refused, {:?} is open", R::collection_name(), dialog, self.dialog);
            return false;
        }
        self.dialog = dialog;
        true
    }

    /// Cancel button, close icon and outside click all land here.
    pub fn cancel(&mut self) {
        self.dialog = DialogState::Browsing;
    }

    /// Initial values of the edit dialog
    pub fn edit_form(&self) -> Option<R::Form> {
        match self.dialog {
            DialogState::EditDialogOpen(id) => self.store.get(id).map(R::to_form),
            _ => None,
        }
    }

    /// Record the open edit or delete dialog refers to
    pub fn dialog_target(&self) -> Option<&R> {
        match self.dialog {
            DialogState::EditDialogOpen(id) | DialogState::DeleteConfirmOpen(id) => {
                self.store.get(id)
            }
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Submits the open create or edit dialog.
    ///
    /// A validation failure leaves the dialog open and the store untouched.
    pub fn submit(
        &mut self,
        form: &R::Form,
        i18n: &impl Translate,
        notifier: &impl Notifier,
    ) -> Result<SubmitOutcome, ValidationError> {
        let target = match self.dialog {
            DialogState::CreateDialogOpen => None,
            DialogState::EditDialogOpen(id) => Some(id),
            other => {
                log::debug!("{}: submit ignored in {:?}", R::collection_name(), other);
                return Ok(SubmitOutcome::Ignored);
            }
        };

        let draft = R::validate_form(form)?;
        self.dialog = DialogState::Browsing;

        let outcome = match target {
            None => {
                let id = self.store.add(draft).id();
                notifier.notify(&i18n.t(Notice::Created.message_key()));
                SubmitOutcome::Created(id)
            }
            Some(id) => match self.store.update(id, R::patch_from_draft(draft)) {
                Some(_) => {
                    notifier.notify(&i18n.t(Notice::Updated.message_key()));
                    SubmitOutcome::Updated(id)
                }
                None => SubmitOutcome::TargetMissing,
            },
        };

        self.reconcile_page();
        Ok(outcome)
    }

    /// Performs the delete the confirmation dialog asked about.
    pub fn confirm_delete(&mut self, i18n: &impl Translate, notifier: &impl Notifier) -> Option<R> {
        let DialogState::DeleteConfirmOpen(id) = self.dialog else {
            return None;
        };
        self.dialog = DialogState::Browsing;

        let removed = self.store.remove(id);
        if removed.is_some() {
            notifier.notify(&i18n.t(Notice::Deleted.message_key()));
        }
        self.reconcile_page();
        removed
    }

    /// Keeps the current page inside the filtered result after a mutation.
    fn reconcile_page(&mut self) {
        let total = self.total_pages();
        if self.page.clamp(total) {
            log::debug!(
                "{}: page clamped to {}",
                R::collection_name(),
                self.page.current_page()
            );
        }
    }

    // ------------------------------------------------------------------
    // View model
    // ------------------------------------------------------------------

    pub fn view(&self) -> ListView<R> {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.page.page_size(), self.page.current_page());

        ListView {
            markers: page_markers(page.current_page, page.total_pages),
            show_pagination: page.show_controls(),
            items: page.items.into_iter().cloned().collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
            query: self.query.clone(),
            dialog: self.dialog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_master_data::aggregate::{
        seed_drafts, ItemStatus, MasterDataForm, MasterDataItem,
    };
    use crate::domain::a002_field_definition::aggregate::{self as fields, FieldDefinition};
    use crate::shared::i18n::Language;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    impl Recorder {
        fn messages(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    fn master_data() -> CrudController<MasterDataItem> {
        CrudController::new(RecordStore::seeded(seed_drafts()), 5)
    }

    fn names(view: &ListView<MasterDataItem>) -> Vec<&str> {
        view.items.iter().map(|i| i.name.as_str()).collect()
    }

    fn form(name: &str) -> MasterDataForm {
        MasterDataForm {
            name: name.to_string(),
            description: "created in test".to_string(),
            status: "inactive".to_string(),
        }
    }

    #[test]
    fn test_third_page_of_twelve() {
        let mut ctrl = master_data();
        ctrl.set_page(3);
        let view = ctrl.view();
        assert_eq!(names(&view), vec!["Field Type 11", "Field Type 12"]);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 3);
        assert!(view.show_pagination);
        assert_eq!(
            view.markers,
            vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)]
        );
    }

    #[test]
    fn test_query_resets_page() {
        let mut ctrl = master_data();
        ctrl.set_page(3);
        ctrl.set_query("field type 1");
        assert_eq!(ctrl.current_page(), 1);

        let view = ctrl.view();
        assert_eq!(
            names(&view),
            vec!["Field Type 1", "Field Type 10", "Field Type 11", "Field Type 12"]
        );
        assert_eq!(view.total_count, 4);
        assert!(!view.show_pagination);

        ctrl.set_page(2);
        assert_eq!(ctrl.current_page(), 1);
        ctrl.set_query("field type 1");
        assert_eq!(ctrl.current_page(), 1);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut ctrl = master_data();
        ctrl.prev_page();
        assert_eq!(ctrl.current_page(), 1);
        ctrl.next_page();
        ctrl.next_page();
        ctrl.next_page();
        assert_eq!(ctrl.current_page(), 3);
        ctrl.set_page(0);
        assert_eq!(ctrl.current_page(), 1);
    }

    #[test]
    fn test_create_with_empty_name_keeps_dialog_open() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        assert!(ctrl.open_create());

        let result = ctrl.submit(&form("   "), &Language::En, &notes);
        assert_eq!(result, Err(ValidationError::Required { field: "name" }));
        assert_eq!(ctrl.dialog(), DialogState::CreateDialogOpen);
        assert_eq!(ctrl.store().len(), 12);
        assert!(notes.messages().is_empty());
    }

    #[test]
    fn test_create_appends_and_notifies() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        ctrl.open_create();

        let outcome = ctrl.submit(&form("Region"), &Language::En, &notes).unwrap();
        let SubmitOutcome::Created(id) = outcome else {
            panic!("unexpected outcome {:?}", outcome);
        };
        assert_eq!(ctrl.dialog(), DialogState::Browsing);
        assert_eq!(ctrl.store().len(), 13);
        let last = ctrl.store().all().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.status, ItemStatus::Inactive);
        assert_eq!(notes.messages(), vec!["Created successfully"]);
    }

    #[test]
    fn test_create_does_not_move_page() {
        let mut ctrl = master_data();
        ctrl.set_page(2);
        ctrl.open_create();
        ctrl.submit(&form("Region"), &Language::En, &Recorder::default())
            .unwrap();
        assert_eq!(ctrl.current_page(), 2);
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let id = ctrl.store().all()[1].id;

        assert!(ctrl.open_edit(id));
        let mut edit = ctrl.edit_form().unwrap();
        assert_eq!(edit.name, "Field Type 2");
        assert_eq!(edit.status, "active");

        edit.name = "Renamed".into();
        let outcome = ctrl.submit(&edit, &Language::Ja, &notes).unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated(id));

        let item = ctrl.store().get(id).unwrap();
        assert_eq!(item.name, "Renamed");
        assert_eq!(item.description, "Description for field type 2");
        assert_eq!(ctrl.store().all()[1].id, id);
        assert_eq!(notes.messages(), vec!["正常に更新されました"]);
    }

    #[test]
    fn test_edit_of_vanished_record_is_silent() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let id = ctrl.store().all()[0].id;
        ctrl.open_edit(id);
        ctrl.store.remove(id);

        let outcome = ctrl.submit(&form("Ghost"), &Language::En, &notes).unwrap();
        assert_eq!(outcome, SubmitOutcome::TargetMissing);
        assert_eq!(ctrl.dialog(), DialogState::Browsing);
        assert_eq!(ctrl.store().len(), 11);
        assert!(notes.messages().is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let id = ctrl.store().all()[4].id;

        assert!(ctrl.open_delete(id));
        assert_eq!(ctrl.dialog_target().map(|i| i.name.as_str()), Some("Field Type 5"));
        ctrl.cancel();
        assert_eq!(ctrl.store().len(), 12);
        assert!(ctrl.confirm_delete(&Language::En, &notes).is_none());

        ctrl.open_delete(id);
        let removed = ctrl.confirm_delete(&Language::Th, &notes).unwrap();
        assert_eq!(removed.id, id);
        assert!(ctrl.store().get(id).is_none());
        assert_eq!(notes.messages(), vec!["ลบสำเร็จ"]);
    }

    #[test]
    fn test_delete_last_item_of_last_page_clamps() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let twelfth = ctrl.store().all()[11].id;
        ctrl.open_delete(twelfth);
        ctrl.confirm_delete(&Language::En, &notes);

        ctrl.set_page(3);
        assert_eq!(names(&ctrl.view()), vec!["Field Type 11"]);

        let eleventh = ctrl.store().all()[10].id;
        ctrl.open_delete(eleventh);
        ctrl.confirm_delete(&Language::En, &notes);

        let view = ctrl.view();
        assert_eq!(view.current_page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 5);
    }

    #[test]
    fn test_deleting_every_match_falls_back_to_page_one() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        ctrl.set_query("type 12");
        let id = ctrl.view().items[0].id;
        ctrl.open_delete(id);
        ctrl.confirm_delete(&Language::En, &notes);

        let view = ctrl.view();
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.markers, vec![PageMarker::Page(1)]);
    }

    #[test]
    fn test_dialogs_are_exclusive() {
        let mut ctrl = master_data();
        let first = ctrl.store().all()[0].id;
        assert!(ctrl.open_create());
        assert!(!ctrl.open_edit(first));
        assert!(!ctrl.open_delete(first));
        assert_eq!(ctrl.dialog(), DialogState::CreateDialogOpen);
        ctrl.cancel();
        assert!(!ctrl.open_edit(RecordId::new_v4()));
        assert_eq!(ctrl.dialog(), DialogState::Browsing);
    }

    #[test]
    fn test_cancel_create_leaves_store_untouched() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let before = ctrl.store().all().to_vec();

        assert!(ctrl.open_create());
        let _typed = form("Never saved");
        ctrl.cancel();

        assert_eq!(ctrl.dialog(), DialogState::Browsing);
        assert_eq!(ctrl.store().all(), before.as_slice());
        assert!(notes.messages().is_empty());
        let outcome = ctrl.submit(&form("Late"), &Language::En, &notes).unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(ctrl.store().all(), before.as_slice());
    }

    #[test]
    fn test_cancel_edit_discards_changes() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let before = ctrl.store().all().to_vec();
        let id = before[2].id;

        assert!(ctrl.open_edit(id));
        let mut edit = ctrl.edit_form().unwrap();
        edit.name = "Changed".into();
        edit.description = "changed too".into();
        edit.status = "inactive".into();
        ctrl.cancel();

        assert_eq!(ctrl.dialog(), DialogState::Browsing);
        assert_eq!(ctrl.store().all(), before.as_slice());
        assert_eq!(ctrl.store().get(id).map(|i| i.name.as_str()), Some("Field Type 3"));
        assert!(notes.messages().is_empty());

        assert!(ctrl.open_edit(id));
        assert_eq!(ctrl.edit_form().map(|f| f.name), Some("Field Type 3".to_string()));
    }

    #[test]
    fn test_submit_without_form_dialog_is_ignored() {
        let mut ctrl = master_data();
        let notes = Recorder::default();
        let outcome = ctrl.submit(&form("Nope"), &Language::En, &notes).unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);

        let id = ctrl.store().all()[0].id;
        ctrl.open_delete(id);
        let outcome = ctrl.submit(&form("Nope"), &Language::En, &notes).unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(ctrl.store().len(), 12);
        assert!(notes.messages().is_empty());
    }

    #[test]
    fn test_field_definitions_search_type_tag() {
        let mut ctrl: CrudController<FieldDefinition> =
            CrudController::new(RecordStore::seeded(fields::seed_drafts()), 5);
        ctrl.set_query("TEXT");
        let hits: Vec<String> = ctrl.view().items.into_iter().map(|f| f.name).collect();
        assert_eq!(hits, vec!["First Name", "Last Name"]);

        ctrl.set_query("tel");
        let hits: Vec<String> = ctrl.view().items.into_iter().map(|f| f.name).collect();
        assert_eq!(hits, vec!["Phone Number"]);
    }

    #[test]
    fn test_field_definition_create_defaults() {
        let mut ctrl: CrudController<FieldDefinition> =
            CrudController::new(RecordStore::new(), 5);
        let notes = Recorder::default();
        ctrl.open_create();
        let form = fields::FieldDefinitionForm {
            name: "Nickname".into(),
            ..Default::default()
        };
        ctrl.submit(&form, &Language::En, &notes).unwrap();

        let field = &ctrl.store().all()[0];
        assert_eq!(field.field_type, fields::FieldType::Text);
        assert!(!field.is_required);
        assert_eq!(field.default_value, "");
    }
}
