//! Primitive field type classification.

use serde::{Deserialize, Serialize};

/// Primitive data types a schema field can carry.
///
/// The classification drives operator legality, literal quoting, and
/// display formatting. The set is closed: schema providers must map
/// anything exotic onto one of these before handing fields to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    DateTime,
    Date,
    Time,
    Integer,
    Percent,
    Double,
    Long,
    Currency,
    Boolean,
    Email,
    Id,
    Location,
    Multipicklist,
    Picklist,
    Reference,
    String,
    Textarea,
    Url,
}

/// Types whose values order numerically and accept the relational operators.
pub const NUMERIC_TYPES: [FieldType; 8] = [
    FieldType::DateTime,
    FieldType::Currency,
    FieldType::Date,
    FieldType::Time,
    FieldType::Integer,
    FieldType::Percent,
    FieldType::Double,
    FieldType::Long,
];

/// Remaining (text-like and enumerated) types.
pub const OTHER_TYPES: [FieldType; 10] = [
    FieldType::Boolean,
    FieldType::Email,
    FieldType::Id,
    FieldType::Location,
    FieldType::Multipicklist,
    FieldType::Picklist,
    FieldType::Reference,
    FieldType::String,
    FieldType::Textarea,
    FieldType::Url,
];

impl FieldType {
    /// Check if literals of this type are emitted without single quotes.
    pub fn is_unquoted(&self) -> bool {
        matches!(
            self,
            FieldType::DateTime
                | FieldType::Date
                | FieldType::Time
                | FieldType::Integer
                | FieldType::Percent
                | FieldType::Double
                | FieldType::Long
                | FieldType::Currency
                | FieldType::Boolean
        )
    }

    /// Check if this type orders numerically (relational operators apply).
    pub fn is_numeric_like(&self) -> bool {
        NUMERIC_TYPES.contains(self)
    }

    /// Check if values of this type are sets rather than scalars.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, FieldType::Multipicklist)
    }

    /// Check if this type carries an enumerated allowed-value list.
    pub fn has_picklist_values(&self) -> bool {
        matches!(self, FieldType::Picklist | FieldType::Multipicklist)
    }

    /// The schema-facing name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::DateTime => "DATETIME",
            FieldType::Date => "DATE",
            FieldType::Time => "TIME",
            FieldType::Integer => "INTEGER",
            FieldType::Percent => "PERCENT",
            FieldType::Double => "DOUBLE",
            FieldType::Long => "LONG",
            FieldType::Currency => "CURRENCY",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Email => "EMAIL",
            FieldType::Id => "ID",
            FieldType::Location => "LOCATION",
            FieldType::Multipicklist => "MULTIPICKLIST",
            FieldType::Picklist => "PICKLIST",
            FieldType::Reference => "REFERENCE",
            FieldType::String => "STRING",
            FieldType::Textarea => "TEXTAREA",
            FieldType::Url => "URL",
        }
    }

    /// All field types, in catalog order.
    pub fn all() -> impl Iterator<Item = FieldType> {
        NUMERIC_TYPES.into_iter().chain(OTHER_TYPES)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
