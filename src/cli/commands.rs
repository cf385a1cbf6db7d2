use crate::cli::error::{user_error, validate_record_name};
use crate::cli::output::{
    format_request_list_table, format_request_summary, is_tty, paint, RequestListOptions,
};
use crate::filter::QuickFilter;
use crate::indicator::{resolve, Indicator};
use crate::listview::PaymentRequestList;
use crate::models::{PaymentRequest, PaymentStatus};
use crate::store::RequestStore;
use crate::translate::{Catalog, Translate};
use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "payreq")]
#[command(about = "Payment request list viewer - colored status indicators and quick filters")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List payment requests
    List {
        /// Quick filter (e.g. "status=Paid" or "status,=,Paid")
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        filter: Vec<String>,
        /// Output in JSON format (records with resolved indicators)
        #[arg(long)]
        json: bool,
        /// Show dates as relative time (e.g., "3 days ago")
        #[arg(long)]
        relative: bool,
        /// Show all columns regardless of terminal width
        #[arg(long)]
        full_width: bool,
        /// Read records from this export file instead of the configured one
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Show one payment request in detail
    Show {
        /// Record name (e.g. "PR-00042")
        name: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Read records from this export file instead of the configured one
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Resolve the indicator for a status value
    Indicator {
        /// Status value; omit to resolve a missing status
        status: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List the known statuses with their colors and quick filters
    Statuses {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// A record paired with its resolved indicator, for JSON output
#[derive(Serialize)]
struct RowWithIndicator<'a> {
    #[serde(flatten)]
    record: &'a PaymentRequest,
    indicator: Indicator,
}

#[derive(Serialize)]
struct StatusEntry {
    status: &'static str,
    label: String,
    color: &'static str,
    filter: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { filter, json, relative, full_width, input } => {
            handle_list(filter, json, relative, full_width, input.as_deref())
        }
        Commands::Show { name, json, input } => handle_show(&name, json, input.as_deref()),
        Commands::Indicator { status, json } => handle_indicator(status.as_deref(), json),
        Commands::Statuses { json } => handle_statuses(json),
    }
}

fn load_records(input: Option<&Path>) -> Result<Vec<PaymentRequest>> {
    let records = match input {
        Some(path) => RequestStore::load_from(path)?,
        None => RequestStore::load()?,
    };
    for field in PaymentRequestList::missing_fields(&records) {
        log::warn!("export is missing declared list field '{}'", field);
    }
    Ok(records)
}

/// Collapse filter tokens into a single quick filter
///
/// An unquoted value with spaces ("status=Partially Paid") arrives as
/// several tokens; rejoin them as long as only the first looks like a
/// condition. Anything that amounts to more than one condition is rejected.
fn parse_filter_tokens(tokens: &[String]) -> Result<Option<QuickFilter>> {
    match tokens.len() {
        0 => Ok(None),
        1 => QuickFilter::parse(&tokens[0]).map(Some).map_err(|e| anyhow!(e)),
        _ => {
            if tokens[1..].iter().any(|t| t.contains('=')) {
                bail!("Only a single equality filter is supported (e.g. status=Paid)");
            }
            let joined = tokens.join(" ");
            QuickFilter::parse(&joined).map(Some).map_err(|e| anyhow!(e))
        }
    }
}

fn handle_list(
    filter_tokens: Vec<String>,
    json: bool,
    relative: bool,
    full_width: bool,
    input: Option<&Path>,
) -> Result<()> {
    let translator = Catalog::load()?;
    let mut records = load_records(input)?;

    if let Some(filter) = parse_filter_tokens(&filter_tokens)? {
        records.retain(|r| filter.matches(r));
    }

    if json {
        let rows: Vec<RowWithIndicator> = records
            .iter()
            .map(|record| RowWithIndicator {
                record,
                indicator: PaymentRequestList::get_indicator(record, &translator),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let options = RequestListOptions {
        use_relative_time: relative,
        full_width,
    };
    let table = format_request_list_table(&records, &options, &translator);
    if table.ends_with('\n') {
        print!("{}", table);
    } else {
        println!("{}", table);
    }
    Ok(())
}

fn handle_show(name: &str, json: bool, input: Option<&Path>) -> Result<()> {
    if let Err(msg) = validate_record_name(name) {
        user_error(&msg);
    }

    let translator = Catalog::load()?;
    let records = load_records(input)?;
    let record = match records.iter().find(|r| r.name == name) {
        Some(record) => record,
        None => user_error(&format!("No payment request named '{}'", name)),
    };

    if json {
        let row = RowWithIndicator {
            record,
            indicator: PaymentRequestList::get_indicator(record, &translator),
        };
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        print!("{}", format_request_summary(record, &translator));
    }
    Ok(())
}

fn handle_indicator(status: Option<&str>, json: bool) -> Result<()> {
    let translator = Catalog::load()?;
    let indicator = resolve(status, &translator);

    if json {
        println!("{}", serde_json::to_string_pretty(&indicator)?);
        return Ok(());
    }

    let (label, color, filter) = indicator.parts();
    println!("Label:  {}", paint(&label, indicator.color, is_tty()));
    println!("Color:  {}", color);
    println!("Filter: {}", filter);
    Ok(())
}

fn handle_statuses(json: bool) -> Result<()> {
    let translator = Catalog::load()?;

    let entries: Vec<StatusEntry> = PaymentStatus::ALL
        .iter()
        .map(|status| {
            let indicator = resolve(Some(status.as_str()), &translator);
            StatusEntry {
                status: status.as_str(),
                label: translator.translate(status.as_str()),
                color: indicator.color.as_str(),
                filter: indicator.filter.to_wire(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let tty = is_tty();
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(6)
        .max("Status".len());

    println!("{:<label_width$} {:<7} Filter", "Status", "Color");
    println!("{} {} {}", "─".repeat(label_width), "─".repeat(7), "─".repeat(24));
    for entry in &entries {
        let padded = format!("{:<label_width$}", entry.label);
        let color = crate::indicator::status_color(entry.status);
        println!("{} {:<7} {}", paint(&padded, color, tty), entry.color, entry.filter);
    }
    Ok(())
}
