use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Уникальный идентификатор записи в хранилище.
///
/// Assigned once at creation and never reassigned. UUID v4 keeps two records
/// created in the same session from colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        assert_ne!(RecordId::new_v4(), RecordId::new_v4());
    }

    #[test]
    fn test_display_is_plain_uuid() {
        let id = RecordId::new_v4();
        assert_eq!(Uuid::parse_str(&id.to_string()).ok(), Some(id.0));
    }
}
