// Fixed status-to-color palette for list view indicators

use serde::{Deserialize, Serialize};

/// Indicator color token
///
/// The closed palette a list view knows how to render. Unknown statuses
/// always fall back to [`Color::Gray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Gray,
    Blue,
    Green,
    Orange,
    Red,
    Yellow,
    Purple,
    Cyan,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Gray => "gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gray" => Some(Color::Gray),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "orange" => Some(Color::Orange),
            "red" => Some(Color::Red),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "cyan" => Some(Color::Cyan),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Gray
    }
}

/// Map a status to its indicator color
///
/// The static palette for payment request statuses. Lookup is exact and
/// case-sensitive, matching the host's canonical spellings; anything
/// unrecognized gets the default gray treatment.
pub fn status_color(status: &str) -> Color {
    match status {
        "Draft" => Color::Gray,
        "Requested" => Color::Green,
        "Initiated" => Color::Green,
        "Partially Paid" => Color::Orange,
        "Paid" => Color::Blue,
        "Failed" => Color::Red,
        "Cancelled" => Color::Red,
        _ => Color::Gray,
    }
}
