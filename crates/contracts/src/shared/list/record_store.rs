use crate::domain::common::{Record, RecordId};

/// In-memory owner of the records of one screen.
///
/// Insertion order is the iteration order; edits keep a record in place.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(drafts: impl IntoIterator<Item = R::Draft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.add(draft);
        }
        store
    }

    /// Appends a record under a freshly generated id.
    pub fn add(&mut self, draft: R::Draft) -> &R {
        let record = R::from_draft(RecordId::new_v4(), draft);
        log::info!("{}: added {}", R::collection_name(), record.id());
        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// Applies `patch` to the record with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: RecordId, patch: R::Patch) -> Option<&R> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            log::debug!("{}: update of missing {} ignored", R::collection_name(), id);
            return None;
        };
        record.apply_patch(patch);
        log::info!("{}: updated {}", R::collection_name(), id);
        Some(&*record)
    }

    /// Removes the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            log::debug!("{}: removal of missing {} ignored", R::collection_name(), id);
            return None;
        };
        log::info!("{}: removed {}", R::collection_name(), id);
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_master_data::aggregate::{
        seed_drafts, ItemStatus, MasterDataDraft, MasterDataItem, MasterDataPatch,
    };

    fn draft(name: &str) -> MasterDataDraft {
        MasterDataDraft {
            name: name.to_string(),
            description: format!("{} description", name),
            status: ItemStatus::Active,
        }
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut store = RecordStore::<MasterDataItem>::new();
        let first = store.add(draft("A")).id;
        let second = store.add(draft("B")).id;
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insertion_order_survives_edits() {
        let mut store = RecordStore::<MasterDataItem>::seeded(seed_drafts());
        let third = store.all()[2].id;
        store.update(
            third,
            MasterDataPatch {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        );
        let names: Vec<&str> = store.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[1], "Field Type 2");
        assert_eq!(names[2], "Renamed");
        assert_eq!(names[3], "Field Type 4");
    }

    #[test]
    fn test_update_is_partial() {
        let mut store = RecordStore::<MasterDataItem>::new();
        let id = store.add(draft("A")).id;
        let updated = store
            .update(
                id,
                MasterDataPatch {
                    name: Some("X".into()),
                    ..Default::default()
                },
            )
            .cloned()
            .unwrap();
        assert_eq!(updated.name, "X");
        assert_eq!(updated.description, "A description");
        assert_eq!(updated.status, ItemStatus::Active);
        assert!(updated.metadata.updated_at >= updated.metadata.created_at);
    }

    #[test]
    fn test_delete_then_find() {
        let mut store = RecordStore::<MasterDataItem>::seeded(seed_drafts());
        let id = store.all()[5].id;

        assert!(store.remove(id).is_some());
        assert_eq!(store.len(), 11);
        assert!(store.all().iter().all(|r| r.id != id));
        assert!(store.get(id).is_none());

        let before = store.all().to_vec();
        assert!(store
            .update(
                id,
                MasterDataPatch {
                    name: Some("ghost".into()),
                    ..Default::default()
                }
            )
            .is_none());
        assert!(store.remove(id).is_none());
        assert_eq!(store.all(), before.as_slice());
    }
}
