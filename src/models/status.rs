use serde::{Deserialize, Serialize};

/// Payment request status (owned by the host domain model)
///
/// The known, closed set of statuses a payment request can carry. Exported
/// records are not guaranteed to hold one of these members, so records keep
/// their status as a raw string and this enum is only used where the known
/// set itself is needed (palette documentation, the `statuses` command).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Draft,
    Requested,
    Initiated,
    PartiallyPaid,
    Paid,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    /// All known statuses, in lifecycle order
    pub const ALL: [PaymentStatus; 7] = [
        PaymentStatus::Draft,
        PaymentStatus::Requested,
        PaymentStatus::Initiated,
        PaymentStatus::PartiallyPaid,
        PaymentStatus::Paid,
        PaymentStatus::Failed,
        PaymentStatus::Cancelled,
    ];

    /// The host's canonical spelling, as it appears in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Draft => "Draft",
            PaymentStatus::Requested => "Requested",
            PaymentStatus::Initiated => "Initiated",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Draft" => Some(PaymentStatus::Draft),
            "Requested" => Some(PaymentStatus::Requested),
            "Initiated" => Some(PaymentStatus::Initiated),
            "Partially Paid" => Some(PaymentStatus::PartiallyPaid),
            "Paid" => Some(PaymentStatus::Paid),
            "Failed" => Some(PaymentStatus::Failed),
            "Cancelled" => Some(PaymentStatus::Cancelled),
            _ => None,
        }
    }

    /// Terminal statuses: no further payment activity is expected
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Failed | Self::Cancelled)
    }
}
