//! Payreq - a terminal list viewer for payment request records
//!
//! This library provides the core functionality for Payreq, including:
//! - Data models for payment request records and their status set
//! - The status indicator resolver and its fixed color palette
//! - Quick filter expressions in the host's `field,=,value` grammar
//! - List view settings and table rendering
//! - Translation catalog for indicator labels
//! - Record export loading and configuration
//!
//! # Example
//!
//! ```no_run
//! use payreq::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod filter;
pub mod indicator;
pub mod listview;
pub mod models;
pub mod store;
pub mod translate;
pub mod utils;
