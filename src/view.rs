//! Pure view-model for the rendered ledger
//!
//! Sorting, placeholders and number formatting live here so every surface
//! (HTML, terminal, GUI) shows exactly the same table.

use crate::types::Record;

/// Placeholder shown for empty optional fields
pub const EMPTY_FIELD: &str = "-";

/// Message shown when the ledger has no records
pub const EMPTY_MESSAGE: &str = "Aucune consommation enregistrée";

/// One displayable table row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Id of the backing record
    pub id: String,
    /// Position of the backing record in the unsorted, insertion-ordered
    /// ledger
    pub original_index: usize,
    pub date: String,
    pub quantity: String,
    pub cement_type: String,
    pub supplier: String,
    pub comment: String,
}

/// Sorted rows plus the running total, ready for an adapter to commit
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    /// Rows ordered by date descending; equal dates keep insertion order
    pub rows: Vec<Row>,
    /// Exact quantity sum over all records
    pub total: f64,
}

impl LedgerView {
    /// Build the view for a record slice
    pub fn build(records: &[Record]) -> Self {
        let mut indexed: Vec<(usize, &Record)> = records.iter().enumerate().collect();
        // Most recent first; sort_by is stable so ties keep insertion order
        indexed.sort_by(|a, b| b.1.date.cmp(&a.1.date));

        let rows = indexed
            .into_iter()
            .map(|(original_index, record)| Row {
                id: record.id.clone(),
                original_index,
                date: record.date.format("%Y-%m-%d").to_string(),
                quantity: format_quantity(record.quantity),
                cement_type: field_or_dash(&record.cement_type),
                supplier: field_or_dash(&record.supplier),
                comment: field_or_dash(&record.comment),
            })
            .collect();

        // fold from +0.0: the std f64 Sum identity is -0.0, which would
        // display as "-0.0" for an empty ledger
        let total = records.iter().fold(0.0, |acc, r| acc + r.quantity);

        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total formatted for display, always one decimal place
    pub fn formatted_total(&self) -> String {
        format!("{:.1}", self.total)
    }

    /// The full total line as displayed under the table
    pub fn total_label(&self) -> String {
        format!("Total sacs utilisés : {}", self.formatted_total())
    }
}

/// Quantity cell text. Whole numbers stay bare (`5`, not `5.0`); only the
/// total line gets the fixed one-decimal formatting.
fn format_quantity(quantity: f64) -> String {
    format!("{}", quantity)
}

fn field_or_dash(value: &str) -> String {
    if value.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, quantity: f64) -> Record {
        Record::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            quantity,
        )
    }

    #[test]
    fn test_rows_sort_by_date_descending() {
        let records = vec![
            record("2024-01-01", 1.0),
            record("2024-03-01", 1.0),
            record("2024-02-01", 1.0),
        ];
        let view = LedgerView::build(&records);
        let dates: Vec<&str> = view.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let mut first = record("2024-03-01", 1.0);
        first.comment = "premier".to_string();
        let mut second = record("2024-03-01", 2.0);
        second.comment = "second".to_string();

        let view = LedgerView::build(&[first, second]);
        assert_eq!(view.rows[0].comment, "premier");
        assert_eq!(view.rows[1].comment, "second");
    }

    #[test]
    fn test_rows_carry_original_indices() {
        let records = vec![record("2024-01-01", 1.0), record("2024-03-01", 1.0)];
        let view = LedgerView::build(&records);
        // Display order is reversed, indices still point into the ledger
        assert_eq!(view.rows[0].original_index, 1);
        assert_eq!(view.rows[1].original_index, 0);
        assert_eq!(view.rows[0].id, records[1].id);
    }

    #[test]
    fn test_empty_ledger_view() {
        let view = LedgerView::build(&[]);
        assert!(view.is_empty());
        // -0.0 compares equal to 0.0 but formats with the sign
        assert!(view.total.is_sign_positive());
        assert_eq!(view.formatted_total(), "0.0");
        assert_eq!(view.total_label(), "Total sacs utilisés : 0.0");
    }

    #[test]
    fn test_empty_optional_fields_show_a_dash() {
        let view = LedgerView::build(&[record("2024-03-01", 1.0)]);
        assert_eq!(view.rows[0].cement_type, "-");
        assert_eq!(view.rows[0].supplier, "-");
        assert_eq!(view.rows[0].comment, "-");
    }

    #[test]
    fn test_quantity_cells_keep_their_natural_form() {
        let view = LedgerView::build(&[record("2024-03-01", 5.0), record("2024-03-02", 2.5)]);
        let cells: Vec<&str> = view.rows.iter().map(|r| r.quantity.as_str()).collect();
        assert_eq!(cells, ["2.5", "5"]);
    }

    #[test]
    fn test_total_is_formatted_to_one_decimal() {
        let view = LedgerView::build(&[record("2024-03-01", 5.0)]);
        assert_eq!(view.formatted_total(), "5.0");

        let view = LedgerView::build(&[record("2024-03-01", 5.0), record("2024-03-02", 2.5)]);
        assert_eq!(view.total, 7.5);
        assert_eq!(view.total_label(), "Total sacs utilisés : 7.5");
    }

    #[test]
    fn test_build_is_pure() {
        let records = vec![record("2024-01-01", 5.0), record("2024-01-02", 3.0)];
        assert_eq!(LedgerView::build(&records), LedgerView::build(&records));
    }
}
