//! Core types for the cement-bag ledger

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Generate a fresh record identifier.
///
/// Also the serde default, so entries written before ids existed load
/// without a migration step.
fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One cement-usage entry.
///
/// Serialized field names keep the legacy wire layout (`type` on the
/// wire); `id` is assigned at creation and defaulted when absent in
/// stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable unique identifier
    #[serde(default = "new_record_id")]
    pub id: String,

    /// Day the bags were used
    pub date: NaiveDate,

    /// Bag count, fractional allowed, always finite and positive
    pub quantity: f64,

    /// Cement type (e.g. "CEM II 32,5"), empty when not given
    #[serde(rename = "type", default)]
    pub cement_type: String,

    /// Supplier name, empty when not given
    #[serde(default)]
    pub supplier: String,

    /// Free comment, empty when not given
    #[serde(default)]
    pub comment: String,
}

impl Record {
    /// Create a record with a fresh id. Optional fields start empty.
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self {
            id: new_record_id(),
            date,
            quantity,
            cement_type: String::new(),
            supplier: String::new(),
            comment: String::new(),
        }
    }

    pub fn with_cement_type(mut self, cement_type: String) -> Self {
        self.cement_type = cement_type;
        self
    }

    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = supplier;
        self
    }

    pub fn with_comment(mut self, comment: String) -> Self {
        self.comment = comment;
        self
    }
}

/// Raw field values as typed into an entry surface (CLI arguments or the
/// GUI form). Everything is text; validation turns it into a [`Record`].
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub date: String,
    pub quantity: String,
    pub cement_type: String,
    pub supplier: String,
    pub comment: String,
}

impl RecordForm {
    /// Validate the raw fields and build the record to store.
    ///
    /// `date` must be a non-empty calendar date and `quantity` must parse
    /// as a finite number greater than zero. `supplier` and `comment` are
    /// trimmed; `cement_type` is kept as typed.
    pub fn validate(&self) -> Result<Record, ValidationError> {
        if self.date.is_empty() {
            return Err(ValidationError::Date);
        }
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| ValidationError::Date)?;

        let quantity: f64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::Quantity)?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ValidationError::Quantity);
        }

        Ok(Record {
            id: new_record_id(),
            date,
            quantity,
            cement_type: self.cement_type.clone(),
            supplier: self.supplier.trim().to_string(),
            comment: self.comment.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RecordForm {
        RecordForm {
            date: "2024-03-15".to_string(),
            quantity: "12.5".to_string(),
            cement_type: "CEM II 32,5".to_string(),
            supplier: "Lafarge".to_string(),
            comment: "dalle garage".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_record() {
        let record = valid_form().validate().unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.quantity, 12.5);
        assert_eq!(record.cement_type, "CEM II 32,5");
        assert_eq!(record.supplier, "Lafarge");
        assert_eq!(record.comment, "dalle garage");
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_each_record_gets_a_distinct_id() {
        let a = valid_form().validate().unwrap();
        let b = valid_form().validate().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_empty_date_is_rejected() {
        let mut form = valid_form();
        form.date = String::new();
        assert_eq!(form.validate().unwrap_err(), ValidationError::Date);
    }

    #[test]
    fn test_rejections_display_the_blocking_notice() {
        let mut no_date = valid_form();
        no_date.date = String::new();
        let mut bad_quantity = valid_form();
        bad_quantity.quantity = "-1".to_string();

        for form in [no_date, bad_quantity] {
            assert_eq!(
                form.validate().unwrap_err().to_string(),
                "Veuillez remplir la date et une quantité valide."
            );
        }
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut form = valid_form();
        form.date = "15/03/2024".to_string();
        assert_eq!(form.validate().unwrap_err(), ValidationError::Date);
    }

    #[test]
    fn test_empty_quantity_is_rejected() {
        let mut form = valid_form();
        form.quantity = String::new();
        assert_eq!(form.validate().unwrap_err(), ValidationError::Quantity);
    }

    #[test]
    fn test_non_numeric_quantity_is_rejected() {
        let mut form = valid_form();
        form.quantity = "beaucoup".to_string();
        assert_eq!(form.validate().unwrap_err(), ValidationError::Quantity);
    }

    #[test]
    fn test_zero_and_negative_quantities_are_rejected() {
        for bad in ["0", "-3", "-0.5"] {
            let mut form = valid_form();
            form.quantity = bad.to_string();
            assert_eq!(form.validate().unwrap_err(), ValidationError::Quantity);
        }
    }

    #[test]
    fn test_non_finite_quantities_are_rejected() {
        for bad in ["inf", "NaN"] {
            let mut form = valid_form();
            form.quantity = bad.to_string();
            assert_eq!(form.validate().unwrap_err(), ValidationError::Quantity);
        }
    }

    #[test]
    fn test_quantity_with_surrounding_spaces_parses() {
        let mut form = valid_form();
        form.quantity = " 5 ".to_string();
        assert_eq!(form.validate().unwrap().quantity, 5.0);
    }

    #[test]
    fn test_supplier_and_comment_are_trimmed() {
        let mut form = valid_form();
        form.supplier = "  Vicat  ".to_string();
        form.comment = " mur nord ".to_string();
        let record = form.validate().unwrap();
        assert_eq!(record.supplier, "Vicat");
        assert_eq!(record.comment, "mur nord");
    }

    #[test]
    fn test_cement_type_is_kept_as_typed() {
        let mut form = valid_form();
        form.cement_type = " CEM I ".to_string();
        assert_eq!(form.validate().unwrap().cement_type, " CEM I ");
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = RecordForm {
            date: "2024-03-15".to_string(),
            quantity: "2".to_string(),
            ..Default::default()
        };
        let record = form.validate().unwrap();
        assert_eq!(record.cement_type, "");
        assert_eq!(record.supplier, "");
        assert_eq!(record.comment, "");
    }
}
