//! Value types and pure conversions for IPv4 addresses and masks.
//!
//! - [`octet`] - single octet parsing, formatting and range checks
//! - [`address`] - 4 octet addresses as text and integers
//! - [`mask`] - subnet mask validation and prefix length conversion
//! - [`Ipv4Net`] - address with prefix length in CIDR notation

mod address;
mod mask;
mod network;
mod octet;

// Re-export public types
pub use address::{
    format_address, is_valid_address, is_valid_address_text, octets_to_u32, parse_address_text,
    u32_to_octets, Octets, ADDR_SIZE,
};
pub use mask::{
    is_valid_subnet_mask, is_valid_subnet_mask_octet_value, network_bits_in_octet_value,
    network_bits_in_subnet_mask, network_bits_to_octet_value, parse_mask_text,
    subnet_mask_from_prefix_length, MAX_LENGTH, VALID_MASK_OCTETS,
};
pub use network::Ipv4Net;
pub use octet::{
    convert_octet_text, is_valid_octet, is_valid_octet_text, parse_octet, parse_valid_octet,
    serialize_octet, try_serialize_octet, Notation,
};
