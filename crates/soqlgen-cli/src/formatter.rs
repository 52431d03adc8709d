//! Table output for confirmed rules.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use soqlgen::core::RuleSummary;

/// Render the rule list as an ASCII table, numbered by display index.
pub fn summary_table(summaries: &[&RuleSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Field", "Operator", "Value"]);

    for (i, summary) in summaries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&summary.field),
            Cell::new(&summary.operator),
            Cell::new(&summary.value),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_rows() {
        let summary = RuleSummary {
            field: "Name".into(),
            operator: "equals".into(),
            value: "Acme".into(),
        };
        let rendered = summary_table(&[&summary]).to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("equals"));
        assert!(rendered.contains("Acme"));
        assert!(rendered.contains('1'));
    }
}
