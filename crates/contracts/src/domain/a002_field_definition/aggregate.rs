use crate::domain::common::validation::require;
use crate::domain::common::{EntityMetadata, Record, RecordId, ValidationError};
use crate::shared::list::Searchable;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Field type
// ============================================================================

/// Тип поля формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Email,
    Tel,
    Date,
    Textarea,
    Select,
    Checkbox,
    Radio,
}

impl FieldType {
    /// Recognized tags in display order; the first one is the default.
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Email,
        FieldType::Tel,
        FieldType::Date,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Date => "date",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
        }
    }
}

impl FromStr for FieldType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownFieldType(s.to_string()))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Определение поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_required: bool,
    pub default_value: String,
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinitionDraft {
    pub name: String,
    pub field_type: FieldType,
    pub is_required: bool,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDefinitionPatch {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub is_required: Option<bool>,
    pub default_value: Option<String>,
}

/// Raw dialog input. An empty `field_type` selects [`FieldType::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDefinitionForm {
    pub name: String,
    pub field_type: String,
    pub is_required: bool,
    pub default_value: String,
}

impl FieldDefinitionForm {
    pub fn validate(&self) -> Result<FieldDefinitionDraft, ValidationError> {
        let name = require(&self.name, "name")?;
        let field_type = if self.field_type.trim().is_empty() {
            FieldType::default()
        } else {
            self.field_type.trim().parse()?
        };

        // default value is kept verbatim, whitespace may be meaningful
        Ok(FieldDefinitionDraft {
            name,
            field_type,
            is_required: self.is_required,
            default_value: self.default_value.clone(),
        })
    }
}

impl Searchable for FieldDefinition {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.field_type.as_str()]
    }
}

impl Record for FieldDefinition {
    type Draft = FieldDefinitionDraft;
    type Patch = FieldDefinitionPatch;
    type Form = FieldDefinitionForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: FieldDefinitionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            field_type: draft.field_type,
            is_required: draft.is_required,
            default_value: draft.default_value,
            metadata: EntityMetadata::new(),
        }
    }

    fn apply_patch(&mut self, patch: FieldDefinitionPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(is_required) = patch.is_required {
            self.is_required = is_required;
        }
        if let Some(default_value) = patch.default_value {
            self.default_value = default_value;
        }
        self.metadata.touch();
    }

    fn to_form(&self) -> FieldDefinitionForm {
        FieldDefinitionForm {
            name: self.name.clone(),
            field_type: self.field_type.as_str().to_string(),
            is_required: self.is_required,
            default_value: self.default_value.clone(),
        }
    }

    fn validate_form(form: &FieldDefinitionForm) -> Result<FieldDefinitionDraft, ValidationError> {
        form.validate()
    }

    fn patch_from_draft(draft: FieldDefinitionDraft) -> FieldDefinitionPatch {
        FieldDefinitionPatch {
            name: Some(draft.name),
            field_type: Some(draft.field_type),
            is_required: Some(draft.is_required),
            default_value: Some(draft.default_value),
        }
    }

    fn collection_name() -> &'static str {
        "field_definition"
    }
}

// ============================================================================
// Seed
// ============================================================================

pub fn seed_drafts() -> Vec<FieldDefinitionDraft> {
    let field = |name: &str, field_type, is_required, default_value: &str| FieldDefinitionDraft {
        name: name.to_string(),
        field_type,
        is_required,
        default_value: default_value.to_string(),
    };

    vec![
        field("First Name", FieldType::Text, true, ""),
        field("Last Name", FieldType::Text, true, ""),
        field("Email", FieldType::Email, true, ""),
        field("Phone Number", FieldType::Tel, false, ""),
        field("Age", FieldType::Number, false, "18"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_tags() {
        assert_eq!(FieldType::ALL[0], FieldType::default());
        for t in FieldType::ALL {
            assert_eq!(t.as_str().parse::<FieldType>(), Ok(t));
        }
        assert_eq!(
            "blob".parse::<FieldType>(),
            Err(ValidationError::UnknownFieldType("blob".into()))
        );
    }

    #[test]
    fn test_form_defaults() {
        let draft = FieldDefinitionForm {
            name: "Nickname".into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(draft.field_type, FieldType::Text);
        assert!(!draft.is_required);
        assert_eq!(draft.default_value, "");
    }

    #[test]
    fn test_form_requires_name() {
        let form = FieldDefinitionForm {
            name: String::new(),
            field_type: "number".into(),
            is_required: true,
            default_value: "18".into(),
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_search_fields_include_type_tag() {
        let field = FieldDefinition::from_draft(RecordId::new_v4(), seed_drafts().remove(3));
        assert_eq!(field.search_fields(), vec!["Phone Number", "tel"]);
    }

    #[test]
    fn test_serialized_shape() {
        let field = FieldDefinition::from_draft(RecordId::new_v4(), seed_drafts().remove(4));
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["isRequired"], false);
        assert_eq!(json["defaultValue"], "18");
    }
}
