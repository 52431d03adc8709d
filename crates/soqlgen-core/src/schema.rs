//! Schema provider seam.
//!
//! The builder never introspects the target object itself; it asks a
//! provider for named field sets, once for filterable fields and once for
//! the fields to project. Anything able to answer that lookup can sit
//! behind the trait (a live metadata API, a cached snapshot, a JSON file).

use crate::catalog::FieldDescriptor;
use crate::error::Error;
use std::collections::HashMap;

/// Supplies ordered field descriptors for an object's named field group.
pub trait SchemaProvider {
    /// Look up a field set on an object.
    fn field_set(&self, object: &str, field_set: &str) -> Result<Vec<FieldDescriptor>, Error>;
}

/// An in-memory provider, loadable from JSON.
///
/// JSON shape: `{ "Account": { "FilterFields": [ { "apiName": ..., "label":
/// ..., "type": ... } ] } }`.
#[derive(Debug, Default)]
pub struct StaticSchemaProvider {
    objects: HashMap<String, HashMap<String, Vec<FieldDescriptor>>>,
}

impl StaticSchemaProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field set.
    pub fn insert_field_set(
        &mut self,
        object: impl Into<String>,
        field_set: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) {
        self.objects
            .entry(object.into())
            .or_default()
            .insert(field_set.into(), fields);
    }

    /// Load a provider from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let objects = serde_json::from_str(json)?;
        Ok(Self { objects })
    }
}

impl SchemaProvider for StaticSchemaProvider {
    fn field_set(&self, object: &str, field_set: &str) -> Result<Vec<FieldDescriptor>, Error> {
        self.objects
            .get(object)
            .and_then(|sets| sets.get(field_set))
            .cloned()
            .ok_or_else(|| Error::FieldSetNotFound {
                object: object.to_string(),
                field_set: field_set.to_string(),
            })
    }
}
