//! Subnet mask validation and prefix length conversion.

use super::address::{parse_address_text, Octets, ADDR_SIZE};
use super::octet::Notation;

/// Maximum prefix length of an IPv4 mask.
pub const MAX_LENGTH: u8 = 32;

/// Network bits carried by a single full octet.
pub const OCTET_BITS: u8 = 8;

/// Every value a mask octet may hold, most network bits first.
pub const VALID_MASK_OCTETS: [i64; 9] = [255, 254, 252, 248, 240, 224, 192, 128, 0];

/// True iff `octet` is a left-justified run of 1 bits.
pub fn is_valid_subnet_mask_octet_value(octet: i64) -> bool {
    VALID_MASK_OCTETS.contains(&octet)
}

/// True iff `octets` is a contiguous prefix mask.
///
/// Once an octet is not 255 every later octet must be 0.
pub fn is_valid_subnet_mask(octets: &[i64]) -> bool {
    if octets.len() != ADDR_SIZE {
        return false;
    }
    let mut partial_seen = false;
    for &octet in octets {
        if !is_valid_subnet_mask_octet_value(octet) {
            return false;
        }
        if partial_seen && octet != 0 {
            return false;
        }
        if octet != 255 {
            partial_seen = true;
        }
    }
    true
}

/// Leading 1 bits of a valid mask octet, computed as `8 - log2(256 - octet)`.
pub fn network_bits_in_octet_value(octet: i64) -> Option<u8> {
    if !is_valid_subnet_mask_octet_value(octet) {
        return None;
    }
    // 256 - octet is a power of two for every valid value
    let host_bits = (256 - octet).trailing_zeros() as u8;
    Some(OCTET_BITS - host_bits)
}

/// Prefix length of a 4 octet mask.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::network_bits_in_subnet_mask;
/// assert_eq!(network_bits_in_subnet_mask(&[255, 255, 255, 0]), Some(24));
/// assert_eq!(network_bits_in_subnet_mask(&[255, 0, 255, 0]), None);
/// ```
pub fn network_bits_in_subnet_mask(octets: &[i64]) -> Option<u8> {
    if octets.len() != ADDR_SIZE {
        return None;
    }
    let mut total = 0;
    let mut previous = OCTET_BITS;
    for &octet in octets {
        let bits = network_bits_in_octet_value(octet)?;
        if previous < OCTET_BITS && bits > 0 {
            log::debug!("mask {octets:?} is not left-justified");
            return None;
        }
        total += bits;
        previous = bits;
    }
    Some(total)
}

/// Mask octet with `bits` leading 1 bits, `256 - 2^(8 - bits)`.
pub fn network_bits_to_octet_value(bits: u32) -> Option<u8> {
    if bits > OCTET_BITS as u32 {
        return None;
    }
    Some((256 - (1u32 << (OCTET_BITS as u32 - bits))) as u8)
}

/// Build the 4 octet mask for a prefix length.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::subnet_mask_from_prefix_length;
/// assert_eq!(subnet_mask_from_prefix_length(20), Some([255, 255, 240, 0]));
/// assert_eq!(subnet_mask_from_prefix_length(33), None);
/// ```
pub fn subnet_mask_from_prefix_length(prefix_length: u32) -> Option<Octets> {
    if prefix_length > MAX_LENGTH as u32 {
        return None;
    }
    let mut mask = [0u8; ADDR_SIZE];
    let full_octets = (prefix_length / OCTET_BITS as u32) as usize;
    for octet in mask.iter_mut().take(full_octets) {
        *octet = 255;
    }
    if full_octets < ADDR_SIZE {
        mask[full_octets] = network_bits_to_octet_value(prefix_length % OCTET_BITS as u32)?;
    }
    Some(mask)
}

/// Prefix length of a mask given as `/24`, `24` or `255.255.255.0`.
pub fn parse_mask_text(text: &str) -> Option<u8> {
    let text = text.trim();
    if text.contains('.') {
        let octets = parse_address_text(text, Notation::Decimal)?;
        return network_bits_in_subnet_mask(&octets.map(i64::from));
    }
    let prefix: u8 = text.strip_prefix('/').unwrap_or(text).parse().ok()?;
    if prefix > MAX_LENGTH {
        log::debug!("prefix /{prefix} is too long");
        return None;
    }
    Some(prefix)
}
