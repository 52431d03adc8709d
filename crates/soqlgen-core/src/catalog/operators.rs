//! The comparison operator catalog and the per-type resolver.

use super::types::{FieldType, NUMERIC_TYPES, OTHER_TYPES};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Placeholder substituted with the formatted value at fragment-build time.
pub const KEY_PLACEHOLDER: &str = "KEY";

/// Language-independent operator identifiers.
///
/// Display labels live in [`crate::locale::Locale`], keyed by this enum, so
/// the catalog itself is translation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorId {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Contains,
    NotContains,
    StartsWith,
    NotStartsWith,
}

/// A catalog entry: how an operator renders and which types accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Stable identifier, also the localization key.
    pub id: OperatorId,
    /// Fragment template. Either a bare symbol (`=`) or a template
    /// containing [`KEY_PLACEHOLDER`] (`LIKE '%KEY%'`).
    pub symbol: &'static str,
    /// Override template for MULTIPICKLIST fields, where the value is a
    /// set and membership replaces pattern matching.
    pub multi_value_symbol: Option<&'static str>,
    /// Types this operator is legal for.
    pub applicable_types: Vec<FieldType>,
}

impl OperatorSpec {
    /// Check if this operator is legal for the given field type.
    pub fn applies_to(&self, field_type: FieldType) -> bool {
        self.applicable_types.contains(&field_type)
    }

    /// Look up the catalog entry for an operator id.
    pub fn get(id: OperatorId) -> &'static OperatorSpec {
        catalog()
            .iter()
            .find(|spec| spec.id == id)
            .unwrap_or_else(|| unreachable!("catalog covers every OperatorId"))
    }
}

fn all_scalar_types() -> Vec<FieldType> {
    NUMERIC_TYPES
        .into_iter()
        .chain(OTHER_TYPES)
        .filter(|ty| *ty != FieldType::Multipicklist)
        .collect()
}

fn numeric_types() -> Vec<FieldType> {
    NUMERIC_TYPES.to_vec()
}

fn other_types_except(excluded: &[FieldType]) -> Vec<FieldType> {
    OTHER_TYPES
        .into_iter()
        .filter(|ty| !excluded.contains(ty))
        .collect()
}

/// The full operator catalog, in fixed display order.
///
/// Ordering is part of the contract: resolvers must present operators in
/// this order, never alphabetically.
pub fn catalog() -> &'static [OperatorSpec] {
    static CATALOG: OnceLock<Vec<OperatorSpec>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            OperatorSpec {
                id: OperatorId::Equals,
                symbol: "=",
                multi_value_symbol: None,
                applicable_types: all_scalar_types(),
            },
            OperatorSpec {
                id: OperatorId::NotEquals,
                symbol: "!=",
                multi_value_symbol: None,
                applicable_types: all_scalar_types(),
            },
            OperatorSpec {
                id: OperatorId::GreaterThan,
                symbol: ">",
                multi_value_symbol: None,
                applicable_types: numeric_types(),
            },
            OperatorSpec {
                id: OperatorId::LessThan,
                symbol: "<",
                multi_value_symbol: None,
                applicable_types: numeric_types(),
            },
            OperatorSpec {
                id: OperatorId::GreaterOrEqual,
                symbol: ">=",
                multi_value_symbol: None,
                applicable_types: numeric_types(),
            },
            OperatorSpec {
                id: OperatorId::LessOrEqual,
                symbol: "<=",
                multi_value_symbol: None,
                applicable_types: numeric_types(),
            },
            // Partial-match operators. PICKLIST and BOOLEAN are exact-match
            // only, and REFERENCE text matching is ambiguous, so all three
            // are excluded. MULTIPICKLIST swaps LIKE for set membership.
            OperatorSpec {
                id: OperatorId::Contains,
                symbol: "LIKE '%KEY%'",
                multi_value_symbol: Some("includes ('KEY')"),
                applicable_types: other_types_except(&[
                    FieldType::Picklist,
                    FieldType::Boolean,
                    FieldType::Reference,
                ]),
            },
            OperatorSpec {
                id: OperatorId::NotContains,
                symbol: "NOT LIKE '%KEY%'",
                multi_value_symbol: Some("excludes ('KEY')"),
                applicable_types: other_types_except(&[
                    FieldType::Picklist,
                    FieldType::Boolean,
                    FieldType::Reference,
                ]),
            },
            OperatorSpec {
                id: OperatorId::StartsWith,
                symbol: "LIKE 'KEY%'",
                multi_value_symbol: None,
                applicable_types: other_types_except(&[
                    FieldType::Picklist,
                    FieldType::Multipicklist,
                    FieldType::Boolean,
                    FieldType::Reference,
                ]),
            },
            OperatorSpec {
                id: OperatorId::NotStartsWith,
                symbol: "NOT LIKE 'KEY%'",
                multi_value_symbol: None,
                applicable_types: other_types_except(&[
                    FieldType::Picklist,
                    FieldType::Multipicklist,
                    FieldType::Boolean,
                    FieldType::Reference,
                ]),
            },
        ]
    })
}

/// Resolve the operators legal for a field type, in catalog order.
pub fn operators_for(field_type: FieldType) -> Vec<&'static OperatorSpec> {
    catalog()
        .iter()
        .filter(|spec| spec.applies_to(field_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_matches_applicability_cross_product() {
        for ty in FieldType::all() {
            let resolved = operators_for(ty);
            for spec in catalog() {
                assert_eq!(
                    resolved.iter().any(|r| r.id == spec.id),
                    spec.applies_to(ty),
                    "operator {:?} vs type {}",
                    spec.id,
                    ty
                );
            }
        }
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let ids: Vec<OperatorId> = operators_for(FieldType::String)
            .iter()
            .map(|spec| spec.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                OperatorId::Equals,
                OperatorId::NotEquals,
                OperatorId::Contains,
                OperatorId::NotContains,
                OperatorId::StartsWith,
                OperatorId::NotStartsWith,
            ]
        );
    }

    #[test]
    fn test_multipicklist_gets_membership_not_like() {
        let ops = operators_for(FieldType::Multipicklist);
        let ids: Vec<OperatorId> = ops.iter().map(|spec| spec.id).collect();
        assert_eq!(ids, vec![OperatorId::Contains, OperatorId::NotContains]);
        for spec in ops {
            assert!(spec.multi_value_symbol.is_some());
        }
    }

    #[test]
    fn test_boolean_and_picklist_are_exact_match_only() {
        for ty in [FieldType::Boolean, FieldType::Picklist] {
            let ids: Vec<OperatorId> = operators_for(ty).iter().map(|spec| spec.id).collect();
            assert_eq!(ids, vec![OperatorId::Equals, OperatorId::NotEquals], "type {ty}");
        }
    }

    #[test]
    fn test_reference_excludes_partial_match() {
        let ids: Vec<OperatorId> = operators_for(FieldType::Reference)
            .iter()
            .map(|spec| spec.id)
            .collect();
        assert_eq!(ids, vec![OperatorId::Equals, OperatorId::NotEquals]);
    }

    #[test]
    fn test_numeric_types_get_relational_operators() {
        for ty in NUMERIC_TYPES {
            let ids: Vec<OperatorId> = operators_for(ty).iter().map(|spec| spec.id).collect();
            assert_eq!(
                ids,
                vec![
                    OperatorId::Equals,
                    OperatorId::NotEquals,
                    OperatorId::GreaterThan,
                    OperatorId::LessThan,
                    OperatorId::GreaterOrEqual,
                    OperatorId::LessOrEqual,
                ],
                "type {ty}"
            );
        }
    }

    #[test]
    fn test_spec_lookup_by_id() {
        let spec = OperatorSpec::get(OperatorId::Contains);
        assert_eq!(spec.symbol, "LIKE '%KEY%'");
        assert_eq!(spec.multi_value_symbol, Some("includes ('KEY')"));
    }
}
