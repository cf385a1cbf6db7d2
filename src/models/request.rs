use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment request record
///
/// Deserialized from the host system's export. Everything except `name` is
/// optional: exports are often trimmed to the columns a list view fetches,
/// and the status field in particular may be missing or carry a value
/// outside the known set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub name: String,
    pub transaction_date: Option<NaiveDate>,
    pub payment_request_type: Option<String>,
    pub party_type: Option<String>,
    pub party: Option<String>,
    pub reference_doctype: Option<String>,
    pub reference_name: Option<String>,
    pub grand_total: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
}

impl PaymentRequest {
    /// Create a bare record with only a name (used by tests)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transaction_date: None,
            payment_request_type: None,
            party_type: None,
            party: None,
            reference_doctype: None,
            reference_name: None,
            grand_total: None,
            currency: None,
            status: None,
        }
    }

    /// Look up a field value by its export name
    ///
    /// Returns `None` both for unknown field names and for fields that are
    /// absent on this record; quick filter evaluation treats the two the
    /// same way.
    pub fn field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "transaction_date" => self.transaction_date.map(|d| d.to_string()),
            "payment_request_type" => self.payment_request_type.clone(),
            "party_type" => self.party_type.clone(),
            "party" => self.party.clone(),
            "reference_doctype" => self.reference_doctype.clone(),
            "reference_name" => self.reference_name.clone(),
            "grand_total" => self.grand_total.map(|v| v.to_string()),
            "currency" => self.currency.clone(),
            "status" => self.status.clone(),
            _ => None,
        }
    }

    /// Whether this record carries any of the given fields
    pub fn has_field(&self, field: &str) -> bool {
        self.field(field).is_some()
    }
}
