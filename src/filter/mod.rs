//! Quick filter expressions
//!
//! The list view narrows records with a single equality condition over one
//! field, in the host's wire grammar: a three-part tuple `field,=,value`.
//! That is the whole grammar -- no comparison operators, no boolean
//! combinators. Indicators produce these expressions; the list view applies
//! them.
//!
//! # Examples
//!
//! ```text
//! // Wire form, as produced by an indicator
//! status,=,Paid
//!
//! // CLI shorthand, accepted interchangeably
//! status=Paid
//!
//! // Null literal: matches records with no status at all
//! status,=,
//! ```

use crate::models::PaymentRequest;

/// A single equality condition over one record field
///
/// `value` of `None` is the null literal: it matches records on which the
/// field is absent, and renders as an empty third part in the wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFilter {
    pub field: String,
    pub value: Option<String>,
}

impl QuickFilter {
    /// Build an equality condition over `field`
    pub fn equals(field: &str, value: Option<&str>) -> Self {
        Self {
            field: field.to_string(),
            value: value.map(|v| v.to_string()),
        }
    }

    /// Parse a filter token in either wire form (`status,=,Paid`) or CLI
    /// shorthand (`status=Paid`)
    ///
    /// Only the `=` operator exists in this grammar; anything else is
    /// rejected with a message naming the offending token.
    pub fn parse(token: &str) -> Result<Self, String> {
        // Wire form: field,=,value (value may be empty)
        if let Some((field, rest)) = token.split_once(',') {
            let (op, value) = rest
                .split_once(',')
                .ok_or_else(|| format!("Invalid filter expression: {}", token))?;
            if op != "=" {
                return Err(format!(
                    "Filter only supports the '=' operator, got '{}'",
                    op
                ));
            }
            if field.is_empty() {
                return Err(format!("Invalid filter expression: {}", token));
            }
            let value = if value.is_empty() { None } else { Some(value.to_string()) };
            return Ok(Self { field: field.to_string(), value });
        }

        // CLI shorthand: field=value
        if let Some((field, value)) = token.split_once('=') {
            if field.is_empty() {
                return Err(format!("Invalid filter expression: {}", token));
            }
            // Catch attempts at richer operators (>=, != and the like) before
            // they silently become field names
            if field.ends_with('>') || field.ends_with('<') || field.ends_with('!') {
                return Err(format!(
                    "Filter only supports the '=' operator, got '{}'",
                    token
                ));
            }
            let value = if value.is_empty() { None } else { Some(value.to_string()) };
            return Ok(Self { field: field.to_string(), value });
        }

        Err(format!(
            "Invalid filter token '{}'. Expected field=value or field,=,value",
            token
        ))
    }

    /// The host's wire form: `field,=,value`
    pub fn to_wire(&self) -> String {
        format!("{},=,{}", self.field, self.value.as_deref().unwrap_or(""))
    }

    /// Evaluate the condition against a record
    ///
    /// A `None` value matches records on which the field is absent; unknown
    /// field names match nothing with a concrete value.
    pub fn matches(&self, record: &PaymentRequest) -> bool {
        match (&self.value, record.field(&self.field)) {
            (Some(want), Some(have)) => *want == have,
            (Some(_), None) => false,
            (None, have) => have.is_none(),
        }
    }
}

impl std::fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_form() {
        let filter = QuickFilter::parse("status,=,Paid").unwrap();
        assert_eq!(filter.field, "status");
        assert_eq!(filter.value.as_deref(), Some("Paid"));
    }

    #[test]
    fn test_parse_cli_form() {
        let filter = QuickFilter::parse("status=Paid").unwrap();
        assert_eq!(filter.field, "status");
        assert_eq!(filter.value.as_deref(), Some("Paid"));
    }

    #[test]
    fn test_parse_value_with_space() {
        let filter = QuickFilter::parse("status,=,Partially Paid").unwrap();
        assert_eq!(filter.value.as_deref(), Some("Partially Paid"));
        let filter = QuickFilter::parse("status=Partially Paid").unwrap();
        assert_eq!(filter.value.as_deref(), Some("Partially Paid"));
    }

    #[test]
    fn test_parse_null_literal() {
        let filter = QuickFilter::parse("status,=,").unwrap();
        assert_eq!(filter.value, None);
        let filter = QuickFilter::parse("status=").unwrap();
        assert_eq!(filter.value, None);
    }

    #[test]
    fn test_parse_rejects_other_operators() {
        assert!(QuickFilter::parse("status,>,Paid").is_err());
        assert!(QuickFilter::parse("status,!=,Paid").is_err());
        assert!(QuickFilter::parse("status>=Paid").is_err());
        assert!(QuickFilter::parse("status!=Paid").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(QuickFilter::parse("Paid").is_err());
        assert!(QuickFilter::parse("=Paid").is_err());
        assert!(QuickFilter::parse(",=,Paid").is_err());
    }

    #[test]
    fn test_wire_roundtrip() {
        let filter = QuickFilter::equals("status", Some("Paid"));
        assert_eq!(filter.to_wire(), "status,=,Paid");
        assert_eq!(QuickFilter::parse(&filter.to_wire()).unwrap(), filter);

        let null_filter = QuickFilter::equals("status", None);
        assert_eq!(null_filter.to_wire(), "status,=,");
        assert_eq!(QuickFilter::parse(&null_filter.to_wire()).unwrap(), null_filter);
    }

    #[test]
    fn test_matches_status() {
        let mut record = PaymentRequest::new("PR-00001");
        record.status = Some("Paid".to_string());

        assert!(QuickFilter::equals("status", Some("Paid")).matches(&record));
        assert!(!QuickFilter::equals("status", Some("Failed")).matches(&record));
        assert!(!QuickFilter::equals("status", None).matches(&record));
    }

    #[test]
    fn test_matches_missing_field() {
        let record = PaymentRequest::new("PR-00002");

        // Null literal matches records with no status
        assert!(QuickFilter::equals("status", None).matches(&record));
        assert!(!QuickFilter::equals("status", Some("Paid")).matches(&record));
    }

    #[test]
    fn test_matches_unknown_field() {
        let record = PaymentRequest::new("PR-00003");
        assert!(!QuickFilter::equals("bogus", Some("x")).matches(&record));
        // An unknown field is indistinguishable from an absent one
        assert!(QuickFilter::equals("bogus", None).matches(&record));
    }
}
