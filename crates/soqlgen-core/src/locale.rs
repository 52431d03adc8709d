//! Display strings for operator labels and user-facing messages.
//!
//! The operator catalog is language-independent; a [`Locale`] maps
//! [`OperatorId`]s and message keys to translated text. Built-in tables
//! cover English and French; custom tables can be loaded from JSON.

use crate::catalog::OperatorId;
use serde::{Deserialize, Serialize};

/// Message key for a malformed custom logic expression.
pub const MSG_MALFORMED_EXPRESSION: &str = "wrongCustomLogicErrorMsg";
/// Message key for a rule index outside the rule set.
pub const MSG_INDEX_OUT_OF_RANGE: &str = "wrongCustomLogicNumbersErrorMsg";
/// Message key for rules missing from the custom logic expression.
pub const MSG_UNUSED_OR_MISSING_RULE: &str = "unusedFilterRulesInCustomLogicErrorMsg";

/// A translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub equals: String,
    pub not_equals: String,
    pub greater_than: String,
    pub less_than: String,
    pub greater_or_equal: String,
    pub less_or_equal: String,
    pub contains: String,
    pub not_contains: String,
    pub starts_with: String,
    pub not_starts_with: String,

    pub true_label: String,
    pub false_label: String,

    pub and_label: String,
    pub or_label: String,
    pub custom_logic_label: String,
    pub custom_logic_help_text: String,

    pub malformed_expression_msg: String,
    pub index_out_of_range_msg: String,
    pub unused_or_missing_rule_msg: String,
}

impl Locale {
    /// The English table.
    pub fn en() -> Self {
        Self {
            equals: "equals".into(),
            not_equals: "does not equal".into(),
            greater_than: "greater than".into(),
            less_than: "less than".into(),
            greater_or_equal: "greater or equal".into(),
            less_or_equal: "less or equal".into(),
            contains: "contains".into(),
            not_contains: "does not contain".into(),
            starts_with: "starts with".into(),
            not_starts_with: "does not start with".into(),
            true_label: "true".into(),
            false_label: "false".into(),
            and_label: "AND".into(),
            or_label: "OR".into(),
            custom_logic_label: "Custom logic".into(),
            custom_logic_help_text: "Combine rule numbers with AND, OR and parentheses, e.g. (1 AND 2) OR 3".into(),
            malformed_expression_msg: "The custom logic expression is not valid".into(),
            index_out_of_range_msg: "The custom logic references a rule number that does not exist".into(),
            unused_or_missing_rule_msg: "Every filter rule must be used in the custom logic".into(),
        }
    }

    /// The French table.
    pub fn fr() -> Self {
        Self {
            equals: "égal".into(),
            not_equals: "différent".into(),
            greater_than: "supérieur".into(),
            less_than: "inférieur".into(),
            greater_or_equal: "supérieur ou égal".into(),
            less_or_equal: "inférieur ou égal".into(),
            contains: "contient".into(),
            not_contains: "ne contient pas".into(),
            starts_with: "commence par".into(),
            not_starts_with: "ne commence pas par".into(),
            true_label: "vrai".into(),
            false_label: "faux".into(),
            and_label: "ET".into(),
            or_label: "OU".into(),
            custom_logic_label: "Logique personnalisée".into(),
            custom_logic_help_text: "Combinez les numéros de règles avec AND, OR et des parenthèses, ex. (1 AND 2) OR 3".into(),
            malformed_expression_msg: "L'expression de logique personnalisée n'est pas valide".into(),
            index_out_of_range_msg: "La logique personnalisée référence un numéro de règle inexistant".into(),
            unused_or_missing_rule_msg: "Chaque règle de filtre doit être utilisée dans la logique personnalisée".into(),
        }
    }

    /// Resolve a locale by language tag, falling back to English.
    pub fn for_lang(lang: &str) -> Self {
        match lang {
            "fr" => Self::fr(),
            _ => Self::en(),
        }
    }

    /// Label for an operator.
    pub fn operator_label(&self, id: OperatorId) -> &str {
        match id {
            OperatorId::Equals => &self.equals,
            OperatorId::NotEquals => &self.not_equals,
            OperatorId::GreaterThan => &self.greater_than,
            OperatorId::LessThan => &self.less_than,
            OperatorId::GreaterOrEqual => &self.greater_or_equal,
            OperatorId::LessOrEqual => &self.less_or_equal,
            OperatorId::Contains => &self.contains,
            OperatorId::NotContains => &self.not_contains,
            OperatorId::StartsWith => &self.starts_with,
            OperatorId::NotStartsWith => &self.not_starts_with,
        }
    }

    /// Display label for a boolean value.
    pub fn boolean_label(&self, value: bool) -> &str {
        if value {
            &self.true_label
        } else {
            &self.false_label
        }
    }

    /// Resolve a message by its localization key.
    pub fn message(&self, key: &str) -> Option<&str> {
        match key {
            MSG_MALFORMED_EXPRESSION => Some(&self.malformed_expression_msg),
            MSG_INDEX_OUT_OF_RANGE => Some(&self.index_out_of_range_msg),
            MSG_UNUSED_OR_MISSING_RULE => Some(&self.unused_or_missing_rule_msg),
            _ => None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_labels_differ_per_locale() {
        let en = Locale::en();
        let fr = Locale::fr();
        assert_eq!(en.operator_label(OperatorId::Equals), "equals");
        assert_eq!(fr.operator_label(OperatorId::Equals), "égal");
        assert_eq!(fr.operator_label(OperatorId::NotContains), "ne contient pas");
    }

    #[test]
    fn test_lang_fallback() {
        assert_eq!(Locale::for_lang("fr"), Locale::fr());
        assert_eq!(Locale::for_lang("de"), Locale::en());
    }

    #[test]
    fn test_message_key_lookup() {
        let en = Locale::en();
        assert!(en.message(MSG_MALFORMED_EXPRESSION).is_some());
        assert!(en.message(MSG_INDEX_OUT_OF_RANGE).is_some());
        assert!(en.message(MSG_UNUSED_OR_MISSING_RULE).is_some());
        assert!(en.message("unknownKey").is_none());
    }

    #[test]
    fn test_boolean_labels() {
        let fr = Locale::fr();
        assert_eq!(fr.boolean_label(true), "vrai");
        assert_eq!(fr.boolean_label(false), "faux");
    }
}
