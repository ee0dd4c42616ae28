//! Dotted IPv4 address validation and text conversion.

use super::octet::{is_valid_octet, is_valid_octet_text, parse_valid_octet, serialize_octet, Notation};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Number of octets in an IPv4 address.
pub const ADDR_SIZE: usize = 4;

/// An IPv4 address or mask, most significant octet first.
pub type Octets = [u8; ADDR_SIZE];

/// Pack octets into a u32 in network byte order.
pub fn octets_to_u32(octets: Octets) -> u32 {
    u32::from(Ipv4Addr::from(octets))
}

/// Unpack a u32 in network byte order.
pub fn u32_to_octets(bits: u32) -> Octets {
    Ipv4Addr::from(bits).octets()
}

/// True iff there are exactly 4 values and each is a valid octet.
pub fn is_valid_address(octets: &[i64]) -> bool {
    octets.len() == ADDR_SIZE && octets.iter().all(|&o| is_valid_octet(o))
}

/// True iff `text` has exactly 4 dot separated valid octets.
pub fn is_valid_address_text(text: &str, notation: Notation) -> bool {
    let segments: Vec<&str> = text.split('.').collect();
    segments.len() == ADDR_SIZE
        && segments
            .iter()
            .all(|segment| is_valid_octet_text(segment, notation))
}

/// Parse dotted text into octets.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::{parse_address_text, Notation};
/// assert_eq!(parse_address_text("10.0.0.1", Notation::Decimal), Some([10, 0, 0, 1]));
/// assert_eq!(parse_address_text("10.0.0", Notation::Decimal), None);
/// ```
pub fn parse_address_text(text: &str, notation: Notation) -> Option<Octets> {
    let mut octets = [0u8; ADDR_SIZE];
    let mut segments = text.split('.');
    for slot in octets.iter_mut() {
        *slot = parse_valid_octet(segments.next()?, notation)?;
    }
    if segments.next().is_some() {
        log::debug!("parse_address_text({text:?}) has more than {ADDR_SIZE} segments");
        return None;
    }
    Some(octets)
}

/// Join octets with `.` in the given notation.
pub fn format_address(octets: Octets, notation: Notation) -> String {
    octets
        .iter()
        .map(|&octet| serialize_octet(octet, notation))
        .join(".")
}
