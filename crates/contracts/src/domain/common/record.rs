use super::{RecordId, ValidationError};
use crate::shared::list::Searchable;

/// A row of domain data owned by a [`RecordStore`](crate::shared::list::RecordStore).
///
/// Every record kind brings three companion types:
/// - `Draft`: validated attributes of a record that has no id yet
/// - `Patch`: a partial update, `None` fields are left untouched
/// - `Form`: raw dialog input as captured from the widgets
pub trait Record: Searchable + Clone + std::fmt::Debug {
    type Draft;
    type Patch;
    type Form: Clone + Default;

    fn id(&self) -> RecordId;

    /// Build the stored record from a draft and a freshly generated id.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Pre-fill values for the edit dialog.
    fn to_form(&self) -> Self::Form;

    fn validate_form(form: &Self::Form) -> Result<Self::Draft, ValidationError>;

    /// The edit dialog submits every attribute, so its patch sets them all.
    fn patch_from_draft(draft: Self::Draft) -> Self::Patch;

    fn collection_name() -> &'static str;
}
