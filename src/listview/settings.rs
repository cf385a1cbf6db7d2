// List view settings for payment requests

use crate::indicator::{resolve, Indicator};
use crate::models::PaymentRequest;
use crate::translate::Translate;

/// List view configuration for the payment request record type
///
/// Declares which fields the list renderer needs fetched alongside each row,
/// and resolves the per-row status indicator. This is the contract the table
/// renderer consumes: one indicator per visible row.
pub struct PaymentRequestList;

impl PaymentRequestList {
    /// Fields that must be present on each row for rendering
    ///
    /// A static declaration, not a runtime query: exports produced for this
    /// list view are expected to include these columns.
    pub const ADD_FIELDS: &'static [&'static str] = &["status"];

    /// Resolve the indicator for one row
    pub fn get_indicator(record: &PaymentRequest, translator: &dyn Translate) -> Indicator {
        resolve(record.status.as_deref(), translator)
    }

    /// Declared fields absent from every record in an export
    ///
    /// A field missing everywhere means the export was produced without the
    /// columns this list view declared; the renderer warns but still renders
    /// (each row degrades to the default indicator).
    pub fn missing_fields(records: &[PaymentRequest]) -> Vec<&'static str> {
        if records.is_empty() {
            return Vec::new();
        }
        Self::ADD_FIELDS
            .iter()
            .copied()
            .filter(|field| records.iter().all(|r| !r.has_field(field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::Color;
    use crate::translate::Identity;

    #[test]
    fn test_add_fields_declaration() {
        assert_eq!(PaymentRequestList::ADD_FIELDS, &["status"]);
    }

    #[test]
    fn test_get_indicator_uses_row_status() {
        let mut record = PaymentRequest::new("PR-00001");
        record.status = Some("Paid".to_string());
        let ind = PaymentRequestList::get_indicator(&record, &Identity);
        assert_eq!(ind.color, Color::Blue);
        assert_eq!(ind.filter.to_wire(), "status,=,Paid");
    }

    #[test]
    fn test_get_indicator_defaults_without_status() {
        let record = PaymentRequest::new("PR-00002");
        let ind = PaymentRequestList::get_indicator(&record, &Identity);
        assert_eq!(ind.color, Color::Gray);
        assert_eq!(ind.label, "");
    }

    #[test]
    fn test_missing_fields_detects_truncated_export() {
        let records = vec![PaymentRequest::new("PR-1"), PaymentRequest::new("PR-2")];
        assert_eq!(PaymentRequestList::missing_fields(&records), vec!["status"]);

        let mut with_status = PaymentRequest::new("PR-3");
        with_status.status = Some("Draft".to_string());
        let mixed = vec![PaymentRequest::new("PR-1"), with_status];
        // One record carrying the field is enough
        assert!(PaymentRequestList::missing_fields(&mixed).is_empty());

        assert!(PaymentRequestList::missing_fields(&[]).is_empty());
    }
}
