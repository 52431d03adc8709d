//! Field descriptors as delivered by a schema provider.

use super::types::FieldType;
use serde::{Deserialize, Serialize};

/// A filterable or projectable field of the target object.
///
/// Descriptors are immutable once fetched; the builder only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// API name used in the generated query text.
    #[serde(rename = "apiName")]
    pub api_name: String,
    /// Human-readable label shown in rule summaries.
    pub label: String,
    /// Primitive data type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Allowed values for PICKLIST / MULTIPICKLIST fields, in display order.
    #[serde(rename = "picklistValues", default, skip_serializing_if = "Vec::is_empty")]
    pub picklist_values: Vec<String>,
}

impl FieldDescriptor {
    /// Create a descriptor without picklist values.
    pub fn new(
        api_name: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            label: label.into(),
            field_type,
            picklist_values: Vec::new(),
        }
    }

    /// Attach the allowed-value list for enumerated types.
    pub fn with_picklist_values(mut self, values: Vec<String>) -> Self {
        self.picklist_values = values;
        self
    }
}
