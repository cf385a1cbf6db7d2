//! Status indicator resolver
//!
//! Maps a record's status to the presentational bundle a list view needs:
//! a label (run through the translation catalog), a palette color, and the
//! quick filter that narrows the list to that status. The mapping is a pure,
//! total function -- any input, including a missing status, resolves to a
//! well-formed indicator.

use crate::filter::QuickFilter;
use crate::indicator::palette::{status_color, Color};
use crate::translate::Translate;
use serde::Serialize;

/// The presentational bundle for one record's status
///
/// Derived fresh on every render call and discarded once the list view has
/// consumed it; nothing here is ever persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    pub label: String,
    pub color: Color,
    #[serde(serialize_with = "serialize_filter")]
    pub filter: QuickFilter,
}

fn serialize_filter<S: serde::Serializer>(
    filter: &QuickFilter,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&filter.to_wire())
}

impl Indicator {
    /// The three-part tuple the list rendering contract expects:
    /// `[label, color token, filter expression]`
    pub fn parts(&self) -> (String, &'static str, String) {
        (self.label.clone(), self.color.as_str(), self.filter.to_wire())
    }
}

/// Resolve a status into its indicator
///
/// - Unknown or missing statuses resolve to gray.
/// - The label is the translated status; empty when the status is missing.
/// - The filter always carries the untranslated literal, including the null
///   literal for a missing status, so the host contract always receives
///   three parts.
pub fn resolve(status: Option<&str>, translator: &dyn Translate) -> Indicator {
    Indicator {
        label: status.map(|s| translator.translate(s)).unwrap_or_default(),
        color: status.map(status_color).unwrap_or_default(),
        filter: QuickFilter::equals("status", status),
    }
}
