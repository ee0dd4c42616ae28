//! Output formatting for calculation results.
//!
//! - [`terminal`] - aligned text output with colors
//! - [`json`] - JSON output

mod json;
mod terminal;

pub use json::{network_info_json, print_network_info_json};
pub use terminal::{
    format_field, format_network_info, print_conversion, print_network_info, report_rows,
};
