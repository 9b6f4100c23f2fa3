use crate::domain::common::validation::require;
use crate::domain::common::{EntityMetadata, Record, RecordId, ValidationError};
use crate::shared::list::Searchable;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Status
// ============================================================================

/// Статус элемента справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
}

impl ItemStatus {
    /// Tag used in forms and also the translation key of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Inactive => "inactive",
        }
    }

    pub fn all() -> [ItemStatus; 2] {
        [ItemStatus::Active, ItemStatus::Inactive]
    }
}

impl FromStr for ItemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ItemStatus::Active),
            "inactive" => Ok(ItemStatus::Inactive),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Элемент справочника (master data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterDataItem {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub metadata: EntityMetadata,
}

/// Validated attributes of an item that is not stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterDataDraft {
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MasterDataPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ItemStatus>,
}

/// Raw dialog input. An empty `status` means the default one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MasterDataForm {
    pub name: String,
    pub description: String,
    pub status: String,
}

impl MasterDataForm {
    pub fn validate(&self) -> Result<MasterDataDraft, ValidationError> {
        let name = require(&self.name, "name")?;
        let status = if self.status.trim().is_empty() {
            ItemStatus::default()
        } else {
            self.status.trim().parse()?
        };

        Ok(MasterDataDraft {
            name,
            description: self.description.clone(),
            status,
        })
    }
}

impl Searchable for MasterDataItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Record for MasterDataItem {
    type Draft = MasterDataDraft;
    type Patch = MasterDataPatch;
    type Form = MasterDataForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: MasterDataDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            status: draft.status,
            metadata: EntityMetadata::new(),
        }
    }

    fn apply_patch(&mut self, patch: MasterDataPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.metadata.touch();
    }

    fn to_form(&self) -> MasterDataForm {
        MasterDataForm {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.as_str().to_string(),
        }
    }

    fn validate_form(form: &MasterDataForm) -> Result<MasterDataDraft, ValidationError> {
        form.validate()
    }

    fn patch_from_draft(draft: MasterDataDraft) -> MasterDataPatch {
        MasterDataPatch {
            name: Some(draft.name),
            description: Some(draft.description),
            status: Some(draft.status),
        }
    }

    fn collection_name() -> &'static str {
        "master_data"
    }
}

// ============================================================================
// Seed
// ============================================================================

/// Twelve demo items; every third one is inactive.
pub fn seed_drafts() -> Vec<MasterDataDraft> {
    (1..=12)
        .map(|n| MasterDataDraft {
            name: format!("Field Type {}", n),
            description: format!("Description for field type {}", n),
            status: if n % 3 == 0 {
                ItemStatus::Inactive
            } else {
                ItemStatus::Active
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let form = MasterDataForm {
            name: "Region".into(),
            ..Default::default()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Region");
        assert_eq!(draft.description, "");
    }

    #[test]
    fn test_form_keeps_description_as_entered() {
        let form = MasterDataForm {
            name: "  Region ".into(),
            description: "  north\n  and south ".into(),
            status: "active".into(),
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Region");
        assert_eq!(draft.description, "  north\n  and south ");
        assert_eq!(draft.status, ItemStatus::Active);
    }

    #[test]
    fn test_form_requires_name() {
        let form = MasterDataForm {
            name: "  ".into(),
            description: "orphan".into(),
            status: "inactive".into(),
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_form_rejects_unknown_status() {
        let form = MasterDataForm {
            name: "Region".into(),
            description: String::new(),
            status: "archived".into(),
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::UnknownStatus("archived".into()))
        );
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let mut item = MasterDataItem::from_draft(
            RecordId::new_v4(),
            MasterDataDraft {
                name: "Old".into(),
                description: "kept".into(),
                status: ItemStatus::Inactive,
            },
        );
        item.apply_patch(MasterDataPatch {
            name: Some("New".into()),
            ..Default::default()
        });
        assert_eq!(item.name, "New");
        assert_eq!(item.description, "kept");
        assert_eq!(item.status, ItemStatus::Inactive);
    }

    #[test]
    fn test_seed() {
        let seed = seed_drafts();
        assert_eq!(seed.len(), 12);
        assert_eq!(seed[0].name, "Field Type 1");
        assert_eq!(seed[11].description, "Description for field type 12");
        assert_eq!(seed[2].status, ItemStatus::Inactive);
        assert_eq!(seed[3].status, ItemStatus::Active);
    }

    #[test]
    fn test_serialized_shape() {
        let item = MasterDataItem::from_draft(RecordId::new_v4(), seed_drafts().remove(2));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["name"], "Field Type 3");
        assert!(json["metadata"]["createdAt"].is_string());
    }
}
