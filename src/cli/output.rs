// Output formatting utilities

use crate::indicator::Color;
use crate::listview::PaymentRequestList;
use crate::models::PaymentRequest;
use crate::translate::Translate;
use crate::utils::format_money;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

// ANSI foreground colors (standard 16-color palette)
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";
const ANSI_FG_BRIGHT_YELLOW: &str = "\x1b[93m";

/// Map a palette color to its ANSI foreground code
///
/// Orange has no slot in the 16-color palette; yellow is the conventional
/// stand-in, with bright yellow covering the palette's own yellow.
pub fn color_fg(color: Color) -> &'static str {
    match color {
        Color::Gray => ANSI_FG_BRIGHT_BLACK,
        Color::Blue => ANSI_FG_BLUE,
        Color::Green => ANSI_FG_GREEN,
        Color::Orange => ANSI_FG_YELLOW,
        Color::Red => ANSI_FG_RED,
        Color::Yellow => ANSI_FG_BRIGHT_YELLOW,
        Color::Purple => ANSI_FG_MAGENTA,
        Color::Cyan => ANSI_FG_CYAN,
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Wrap padded text in a color code if in TTY mode
fn colorize_if_tty(text: &str, color: Color, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", color_fg(color), text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Color a piece of text for terminal output; pass-through when not a TTY
pub fn paint(text: &str, color: Color, is_tty: bool) -> String {
    colorize_if_tty(text, color, is_tty)
}

/// Format date for display
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format date as relative time (e.g., "2 days ago", "in 3 days", "today")
pub fn format_relative_date(date: NaiveDate) -> String {
    let today = Local::now().date_naive();
    let days_diff = (date - today).num_days();

    if days_diff == 0 {
        "today".to_string()
    } else if days_diff == 1 {
        "tomorrow".to_string()
    } else if days_diff == -1 {
        "yesterday".to_string()
    } else if days_diff < 0 && days_diff >= -365 {
        format!("{} days ago", -days_diff)
    } else if days_diff > 0 && days_diff <= 365 {
        format!("in {} days", days_diff)
    } else {
        // More than a year away in either direction - show absolute date
        format_date(date)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestListOptions {
    pub use_relative_time: bool,
    pub full_width: bool, // Show all columns regardless of terminal width
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RequestListColumn {
    Name,
    Date,
    Type,
    Party,
    Reference,
    Amount,
    Status,
}

const COLUMN_ORDER: [RequestListColumn; 7] = [
    RequestListColumn::Name,
    RequestListColumn::Date,
    RequestListColumn::Type,
    RequestListColumn::Party,
    RequestListColumn::Reference,
    RequestListColumn::Amount,
    RequestListColumn::Status,
];

fn column_label(column: RequestListColumn) -> &'static str {
    match column {
        RequestListColumn::Name => "Name",
        RequestListColumn::Date => "Date",
        RequestListColumn::Type => "Type",
        RequestListColumn::Party => "Party",
        RequestListColumn::Reference => "Reference",
        RequestListColumn::Amount => "Amount",
        RequestListColumn::Status => "Status",
    }
}

/// Column display priority for adaptive width (lower = more important)
///
/// Name and Status are never hidden; the status indicator is the point of
/// the list. Hide order (first to last): Type -> Reference -> Party ->
/// Amount -> Date
fn column_priority(column: RequestListColumn) -> u8 {
    match column {
        RequestListColumn::Name => 1,   // Never hide
        RequestListColumn::Status => 2, // Never hide
        RequestListColumn::Date => 4,   // Hidden last
        RequestListColumn::Amount => 5,
        RequestListColumn::Party => 6,
        RequestListColumn::Reference => 7,
        RequestListColumn::Type => 8, // Hidden first
    }
}

/// Minimum column width before hiding
fn column_min_width(column: RequestListColumn) -> usize {
    match column {
        RequestListColumn::Name => 8,
        RequestListColumn::Date => 10,
        RequestListColumn::Type => 7,
        RequestListColumn::Party => 8,
        RequestListColumn::Reference => 10,
        RequestListColumn::Amount => 8,
        RequestListColumn::Status => 7,
    }
}

struct RequestRow {
    values: HashMap<RequestListColumn, String>,
    status_color: Color,
    date_sort: Option<NaiveDate>,
}

/// Truncate a value to `width` characters, marking the cut with ".."
fn truncate_cell(value: &str, width: usize) -> String {
    let char_count = value.chars().count();
    if char_count <= width || width < 3 {
        return value.to_string();
    }
    let kept: String = value.chars().take(width - 2).collect();
    format!("{}..", kept)
}

/// Format the reference document cell ("Sales Order SO-0108")
fn format_reference(record: &PaymentRequest) -> String {
    match (&record.reference_doctype, &record.reference_name) {
        (Some(doctype), Some(name)) => format!("{} {}", doctype, name),
        (None, Some(name)) => name.clone(),
        _ => String::new(),
    }
}

/// Format the payment request list as a table
///
/// One indicator is resolved per visible row; the status cell carries the
/// indicator's label and, in TTY mode, its color.
pub fn format_request_list_table(
    records: &[PaymentRequest],
    options: &RequestListOptions,
    translator: &dyn Translate,
) -> String {
    if records.is_empty() {
        return "No payment requests found.".to_string();
    }

    let mut rows: Vec<RequestRow> = Vec::new();
    for record in records {
        let indicator = PaymentRequestList::get_indicator(record, translator);

        let date = match record.transaction_date {
            Some(d) if options.use_relative_time => format_relative_date(d),
            Some(d) => format_date(d),
            None => String::new(),
        };

        let mut values = HashMap::new();
        values.insert(RequestListColumn::Name, record.name.clone());
        values.insert(RequestListColumn::Date, date);
        values.insert(
            RequestListColumn::Type,
            record.payment_request_type.clone().unwrap_or_default(),
        );
        values.insert(
            RequestListColumn::Party,
            record.party.clone().unwrap_or_default(),
        );
        values.insert(RequestListColumn::Reference, format_reference(record));
        values.insert(
            RequestListColumn::Amount,
            format_money(record.grand_total, record.currency.as_deref()),
        );
        values.insert(RequestListColumn::Status, indicator.label.clone());

        rows.push(RequestRow {
            values,
            status_color: indicator.color,
            date_sort: record.transaction_date,
        });
    }

    // Newest first, records without a date last, ties broken by name
    rows.sort_by(|a, b| {
        b.date_sort
            .cmp(&a.date_sort)
            .then_with(|| a.values[&RequestListColumn::Name].cmp(&b.values[&RequestListColumn::Name]))
    });

    let tty_mode = is_tty();
    let mut columns: Vec<RequestListColumn> = COLUMN_ORDER.to_vec();

    // Calculate column widths
    let mut column_widths: HashMap<RequestListColumn, usize> = HashMap::new();
    for column in &columns {
        let label = column_label(*column);
        column_widths.insert(*column, label.chars().count().max(4));
    }
    for row in &rows {
        for column in &columns {
            if let Some(value) = row.values.get(column) {
                let entry = column_widths.entry(*column).or_insert(4);
                *entry = (*entry).max(value.chars().count());
            }
        }
    }

    // Adaptive width: truncate wide text columns first, then hide
    // low-priority columns if the terminal is still too narrow
    if !options.full_width {
        let target_width = get_terminal_width();

        fn calc_total_width(
            columns: &[RequestListColumn],
            column_widths: &HashMap<RequestListColumn, usize>,
        ) -> usize {
            let content_width: usize = columns
                .iter()
                .map(|c| column_widths.get(c).copied().unwrap_or(4))
                .sum();
            content_width + columns.len().saturating_sub(1)
        }

        for column in [RequestListColumn::Party, RequestListColumn::Reference] {
            let current_total = calc_total_width(&columns, &column_widths);
            if current_total > target_width {
                if let Some(width) = column_widths.get_mut(&column) {
                    let excess = current_total - target_width;
                    *width = (*width).saturating_sub(excess).max(column_min_width(column));
                }
            }
        }

        while calc_total_width(&columns, &column_widths) > target_width && columns.len() > 2 {
            let hide_candidate = columns
                .iter()
                .filter(|c| column_priority(**c) > 3)
                .max_by_key(|c| column_priority(**c))
                .copied();
            match hide_candidate {
                Some(col_to_hide) => {
                    columns.retain(|c| *c != col_to_hide);
                    column_widths.remove(&col_to_hide);
                }
                None => break,
            }
        }
    }

    // Header and separator
    let mut header_line = String::new();
    for (idx, column) in columns.iter().enumerate() {
        let width = *column_widths.get(column).unwrap_or(&4);
        if idx == columns.len() - 1 {
            header_line.push_str(&format!("{:<width$}", column_label(*column), width = width));
        } else {
            header_line.push_str(&format!("{:<width$} ", column_label(*column), width = width));
        }
    }
    let separator_line = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let width = *column_widths.get(column).unwrap_or(&4);
            if idx == columns.len() - 1 {
                "─".repeat(width)
            } else {
                format!("{} ", "─".repeat(width))
            }
        })
        .collect::<String>();

    let mut output = String::new();
    output.push_str(&bold_if_tty(&header_line, tty_mode));
    output.push('\n');
    output.push_str(&separator_line);
    output.push('\n');

    for row in &rows {
        for (idx, column) in columns.iter().enumerate() {
            let width = *column_widths.get(column).unwrap_or(&4);
            let value = row.values.get(column).cloned().unwrap_or_default();
            let cell = truncate_cell(&value, width);
            let padded = format!("{:<width$}", cell, width = width);
            let rendered = if *column == RequestListColumn::Status {
                colorize_if_tty(&padded, row.status_color, tty_mode)
            } else {
                padded
            };
            output.push_str(&rendered);
            if idx < columns.len() - 1 {
                output.push(' ');
            }
        }
        // Trailing spaces on the last column don't survive; trim them
        while output.ends_with(' ') {
            output.pop();
        }
        output.push('\n');
    }

    output
}

/// Format a detail card for a single payment request
pub fn format_request_summary(record: &PaymentRequest, translator: &dyn Translate) -> String {
    let tty_mode = is_tty();
    let indicator = PaymentRequestList::get_indicator(record, translator);

    let title = format!("Payment Request {}", record.name);
    let mut output = String::new();
    output.push_str(&bold_if_tty(&title, tty_mode));
    output.push('\n');
    output.push_str(&"─".repeat(title.chars().count()));
    output.push('\n');

    let status_cell = if indicator.label.is_empty() {
        colorize_if_tty("●", indicator.color, tty_mode)
    } else {
        colorize_if_tty(&format!("● {}", indicator.label), indicator.color, tty_mode)
    };
    output.push_str(&format!("Status:     {}\n", status_cell));

    if let Some(ref req_type) = record.payment_request_type {
        output.push_str(&format!("Type:       {}\n", req_type));
    }
    match (&record.party_type, &record.party) {
        (Some(party_type), Some(party)) => {
            output.push_str(&format!("Party:      {} {}\n", party_type, party));
        }
        (None, Some(party)) => {
            output.push_str(&format!("Party:      {}\n", party));
        }
        _ => {}
    }
    let reference = format_reference(record);
    if !reference.is_empty() {
        output.push_str(&format!("Reference:  {}\n", reference));
    }
    if let Some(date) = record.transaction_date {
        output.push_str(&format!("Date:       {}\n", format_date(date)));
    }
    let amount = format_money(record.grand_total, record.currency.as_deref());
    if !amount.is_empty() {
        output.push_str(&format!("Amount:     {}\n", amount));
    }
    output.push_str(&format!("Filter:     {}\n", indicator.filter.to_wire()));

    output
}
