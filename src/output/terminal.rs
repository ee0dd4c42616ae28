//! Terminal output utilities.
//!
//! Renders a [`NetworkInfo`] as right-aligned labels next to their values,
//! in the same order the calculator window lays them out.

use crate::models::{format_address, Notation};
use crate::processing::NetworkInfo;
use colored::Colorize;
use std::net::Ipv4Addr;

/// Width of the label column.
const LABEL_WIDTH: usize = 22;

/// Format a value right-aligned to at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

fn render_addr(addr: Ipv4Addr, notation: Notation) -> String {
    format_address(addr.octets(), notation)
}

/// Label/value pairs of the report, without colour.
pub fn report_rows(info: &NetworkInfo, notation: Notation) -> Vec<(&'static str, String)> {
    let usable_range = match (info.first_usable, info.last_usable) {
        (Some(first), Some(last)) => format!(
            "{} - {}",
            render_addr(first, notation),
            render_addr(last, notation)
        ),
        _ => "none".to_string(),
    };
    vec![
        ("IP Address:", render_addr(info.address, notation)),
        (
            "Subnet Mask:",
            format!("{} /{}", render_addr(info.mask, notation), info.prefix),
        ),
        ("Network Address:", render_addr(info.network, notation)),
        ("Broadcast Address:", render_addr(info.broadcast, notation)),
        ("Useful Address Range:", usable_range),
        ("Usable Hosts:", info.usable_hosts.to_string()),
        ("Total Addresses:", info.total_addresses.to_string()),
    ]
}

/// The full coloured report, one row per line.
pub fn format_network_info(info: &NetworkInfo, notation: Notation) -> String {
    report_rows(info, notation)
        .into_iter()
        .map(|(label, value)| {
            format!("{} {}", format_field(label, LABEL_WIDTH).cyan(), value)
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Print the report in decimal, followed by the binary view.
pub fn print_network_info(info: &NetworkInfo) {
    log::info!("print_network_info({})", info.cidr);
    println!("{}", "Network Information".bold());
    println!("{}", format_network_info(info, Notation::Decimal));
    println!();
    println!("{}", "Binary".bold());
    println!("{}", format_network_info(info, Notation::Binary));
}

/// Print one address conversion as `input <-> output`.
pub fn print_conversion(input: &str, output: &str) {
    println!("{input} {} {output}", "<->".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "      test");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 4), "test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "    42");
    }

    #[test]
    fn test_report_rows_decimal() {
        let info = NetworkInfo::parse("192.168.1.10/24").unwrap();
        let rows = report_rows(&info, Notation::Decimal);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("IP Address:", "192.168.1.10".to_string()));
        assert_eq!(rows[1], ("Subnet Mask:", "255.255.255.0 /24".to_string()));
        assert_eq!(
            rows[4],
            ("Useful Address Range:", "192.168.1.1 - 192.168.1.254".to_string())
        );
    }

    #[test]
    fn test_report_rows_binary_and_no_range() {
        let info = NetworkInfo::parse("10.0.0.1/32").unwrap();
        let rows = report_rows(&info, Notation::Binary);
        assert_eq!(rows[0].1, "00001010.00000000.00000000.00000001");
        assert_eq!(rows[4].1, "none");
    }

    #[test]
    fn test_format_network_info_contains_values() {
        let info = NetworkInfo::parse("172.16.5.4 255.255.240.0").unwrap();
        let text = format_network_info(&info, Notation::Decimal);
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("172.16.0.0"));
        assert!(text.contains("172.16.15.255"));
        assert!(text.contains("4094"));
    }
}
