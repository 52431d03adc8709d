//! The query-building session.
//!
//! One `QueryBuilder` per user session: it holds the two field sets
//! fetched from the schema provider, the confirmed rules, and the locale,
//! and it is the single writer of its rule set. Instances must not be
//! shared across concurrent sessions.

use soqlgen_core::{
    assemble, build_fragment, build_summary, combine, operators_for, Connective, Error as CoreError,
    FieldDescriptor, FilterRule, Locale, OperatorId, OperatorSpec, RuleSet, RuleSummary, RuleValue,
    SchemaProvider,
};
use soqlgen_lang::LogicError;
use thiserror::Error;

/// How confirmed rules combine into the WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logic {
    /// All fragments joined with `AND`.
    And,
    /// All fragments joined with `OR`.
    Or,
    /// A user-authored expression over rule numbers.
    Custom(String),
}

/// Errors surfaced by the builder session.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Catalog, clause, rule-set, schema, or assembly error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Custom logic error; carries the kind and localization key.
    #[error("custom logic error: {0}")]
    Logic(#[from] LogicError),

    /// A query was requested with no confirmed rules.
    #[error("no filter rules confirmed")]
    NoRules,
}

/// A field offered to the user, label first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption<'a> {
    pub label: &'a str,
    pub api_name: &'a str,
}

/// An operator offered for the selected field, with its localized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorOption<'a> {
    pub id: OperatorId,
    pub label: &'a str,
}

/// Incremental rule-to-query builder for one object.
#[derive(Debug)]
pub struct QueryBuilder {
    object_name: String,
    filter_fields: Vec<FieldDescriptor>,
    fields_to_query: Vec<String>,
    rules: RuleSet,
    locale: Locale,
}

impl QueryBuilder {
    /// Create a builder from already-fetched field sets.
    pub fn new(
        object_name: impl Into<String>,
        filter_fields: Vec<FieldDescriptor>,
        fields_to_query: Vec<String>,
        locale: Locale,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            filter_fields,
            fields_to_query,
            rules: RuleSet::new(),
            locale,
        }
    }

    /// Create a builder by fetching both field sets from a provider:
    /// one for filterable fields, one for the SELECT projection.
    pub fn from_provider(
        provider: &impl SchemaProvider,
        object_name: &str,
        filter_field_set: &str,
        query_field_set: &str,
        locale: Locale,
    ) -> Result<Self, BuilderError> {
        let filter_fields = provider.field_set(object_name, filter_field_set)?;
        let fields_to_query = provider
            .field_set(object_name, query_field_set)?
            .into_iter()
            .map(|field| field.api_name)
            .collect();
        tracing::debug!(object = object_name, "builder session created");
        Ok(Self::new(object_name, filter_fields, fields_to_query, locale))
    }

    /// The active locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Filterable fields as label/api-name options, in schema order.
    pub fn field_options(&self) -> Vec<FieldOption<'_>> {
        self.filter_fields
            .iter()
            .map(|field| FieldOption {
                label: &field.label,
                api_name: &field.api_name,
            })
            .collect()
    }

    /// Operators legal for a field, with localized labels, catalog order.
    pub fn operator_options(&self, field_api: &str) -> Result<Vec<OperatorOption<'_>>, BuilderError> {
        let field = self.descriptor(field_api)?;
        Ok(operators_for(field.field_type)
            .into_iter()
            .map(|spec| OperatorOption {
                id: spec.id,
                label: self.locale.operator_label(spec.id),
            })
            .collect())
    }

    /// Allowed values for a PICKLIST / MULTIPICKLIST field.
    pub fn picklist_options(&self, field_api: &str) -> Result<&[String], BuilderError> {
        Ok(&self.descriptor(field_api)?.picklist_values)
    }

    /// The localized true/false options for BOOLEAN fields, paired with
    /// the raw value the rule should carry.
    pub fn boolean_options(&self) -> [(&str, &str); 2] {
        [
            (self.locale.boolean_label(true), "true"),
            (self.locale.boolean_label(false), "false"),
        ]
    }

    /// Confirm a rule: resolve the field, check operator legality, build
    /// the fragment and summary, and append. Returns the display index.
    pub fn add_rule(
        &mut self,
        field_api: &str,
        operator: OperatorId,
        value: RuleValue,
    ) -> Result<usize, BuilderError> {
        let field = self.descriptor(field_api)?.clone();
        let spec = OperatorSpec::get(operator);
        let fragment = build_fragment(&field, spec, &value)?;
        let summary = build_summary(&field, operator, &value, &self.locale);
        let index = self.rules.append(FilterRule {
            field,
            operator,
            raw_value: value,
            summary,
            fragment,
        });
        Ok(index)
    }

    /// Remove the rule at a 1-based display index; later rules shift down.
    pub fn remove_rule(&mut self, index: usize) -> Result<(), BuilderError> {
        self.rules.remove_at(index)?;
        Ok(())
    }

    /// Discard all rules.
    pub fn reset(&mut self) {
        self.rules.reset();
    }

    /// Number of confirmed rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Display summaries in rule order.
    pub fn summaries(&self) -> Vec<&RuleSummary> {
        self.rules.summaries()
    }

    /// Compile the WHERE clause for the chosen logic.
    pub fn where_clause(&self, logic: &Logic) -> Result<String, BuilderError> {
        if self.rules.is_empty() {
            return Err(BuilderError::NoRules);
        }
        let fragments = self.rules.fragments();
        let clause = match logic {
            Logic::And => combine(&fragments, Connective::And),
            Logic::Or => combine(&fragments, Connective::Or),
            Logic::Custom(expression) => soqlgen_lang::compile(expression, &fragments)?,
        };
        Ok(clause)
    }

    /// Compile the full SELECT statement.
    pub fn build_query(&self, logic: &Logic) -> Result<String, BuilderError> {
        let clause = self.where_clause(logic)?;
        let query = assemble(&self.fields_to_query, &self.object_name, &clause)?;
        tracing::debug!(query = %query, "query assembled");
        Ok(query)
    }

    fn descriptor(&self, field_api: &str) -> Result<&FieldDescriptor, BuilderError> {
        self.filter_fields
            .iter()
            .find(|field| field.api_name == field_api)
            .ok_or_else(|| CoreError::UnknownField(field_api.to_string()).into())
    }
}
