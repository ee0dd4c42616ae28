//! Subnet calculations built on the [`crate::models`] value types.
//!
//! - [`arithmetic`] - network, broadcast and usable range arithmetic
//! - [`convert`] - decimal/binary address conversion
//! - [`network_info`] - the full report for an address and mask

mod arithmetic;
mod convert;
mod network_info;

// Re-export public functions
pub use arithmetic::{
    address_count, address_range_size, broadcast_address, first_and_last_usable_address,
    network_address, usable_host_count,
};
pub use convert::convert_address;
pub use network_info::{split_address_and_mask, NetworkInfo};
