//! Output formatting for subnet reports.
//!
//! This module handles formatting and outputting calculation results:
//! - [`display`] - Named display fields for a report
//! - [`terminal`] - Terminal output with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output formatting

mod csv;
mod display;
mod json;
mod terminal;

pub use csv::{csv_error_row, csv_header, csv_row};
pub use display::{
    address_type_badge, format_address_range, format_host_count, format_report, group_thousands,
    network_class_badge, significant_mask_bits, Badge, DisplayFields, FIELD_KEYS,
};
pub use json::{json_entry, json_error_entry};
pub use terminal::{render_error, render_report};
