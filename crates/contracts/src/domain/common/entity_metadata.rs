use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Дата последнего обновления
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
