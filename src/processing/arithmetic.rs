//! Network, broadcast and usable range arithmetic.
//!
//! Addresses are packed into a u32 in network byte order wherever ordering
//! or counting matters.

use crate::models::{octets_to_u32, u32_to_octets, Octets, MAX_LENGTH};

/// Octet-wise `ip & mask`.
pub fn network_address(ip: Octets, mask: Octets) -> Octets {
    let mut network = [0u8; 4];
    for (i, octet) in network.iter_mut().enumerate() {
        *octet = ip[i] & mask[i];
    }
    network
}

/// Octet-wise `ip | (255 - mask)`.
pub fn broadcast_address(ip: Octets, mask: Octets) -> Octets {
    let mut broadcast = [0u8; 4];
    for (i, octet) in broadcast.iter_mut().enumerate() {
        *octet = ip[i] | (255 - mask[i]);
    }
    broadcast
}

/// First and last host address between a network and its broadcast.
///
/// Returns `None` when fewer than two addresses separate them (/31, /32, or
/// a broadcast below the network), so the pair is always `first <= last`.
///
/// # Examples
/// ```
/// use ip_subnet_calc::processing::first_and_last_usable_address;
/// assert_eq!(
///     first_and_last_usable_address([10, 0, 0, 0], [10, 0, 0, 3]),
///     Some(([10, 0, 0, 1], [10, 0, 0, 2]))
/// );
/// assert_eq!(first_and_last_usable_address([10, 0, 0, 0], [10, 0, 0, 1]), None);
/// ```
pub fn first_and_last_usable_address(
    network: Octets,
    broadcast: Octets,
) -> Option<(Octets, Octets)> {
    let network_bits = octets_to_u32(network);
    let broadcast_bits = octets_to_u32(broadcast);
    match broadcast_bits.checked_sub(network_bits) {
        Some(span) if span >= 2 => Some((
            u32_to_octets(network_bits + 1),
            u32_to_octets(broadcast_bits - 1),
        )),
        _ => {
            log::debug!("no usable range between {network:?} and {broadcast:?}");
            None
        }
    }
}

/// Number of addresses from `low` to `high` inclusive, `None` if `high < low`.
pub fn address_range_size(low: Octets, high: Octets) -> Option<u64> {
    let low = octets_to_u32(low);
    let high = octets_to_u32(high);
    high.checked_sub(low).map(|span| span as u64 + 1)
}

/// Total addresses covered by a prefix, network and broadcast included.
pub fn address_count(prefix: u8) -> u64 {
    1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH))
}

/// Host addresses in a prefix, 0 for /31 and /32.
pub fn usable_host_count(prefix: u8) -> u64 {
    if prefix >= MAX_LENGTH - 1 {
        0
    } else {
        address_count(prefix) - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_address() {
        assert_eq!(
            network_address([192, 168, 1, 10], [255, 255, 255, 0]),
            [192, 168, 1, 0]
        );
        assert_eq!(
            network_address([10, 11, 12, 200], [255, 255, 240, 0]),
            [10, 11, 0, 0]
        );
        assert_eq!(network_address([10, 1, 2, 3], [0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_broadcast_address() {
        assert_eq!(
            broadcast_address([192, 168, 1, 10], [255, 255, 255, 0]),
            [192, 168, 1, 255]
        );
        assert_eq!(
            broadcast_address([10, 11, 12, 200], [255, 255, 240, 0]),
            [10, 11, 15, 255]
        );
        assert_eq!(
            broadcast_address([10, 1, 2, 3], [255, 255, 255, 255]),
            [10, 1, 2, 3]
        );
    }

    #[test]
    fn test_first_and_last_usable_address() {
        assert_eq!(
            first_and_last_usable_address([192, 168, 1, 0], [192, 168, 1, 255]),
            Some(([192, 168, 1, 1], [192, 168, 1, 254]))
        );
        // carries across octets
        assert_eq!(
            first_and_last_usable_address([10, 0, 0, 0], [10, 0, 255, 255]),
            Some(([10, 0, 0, 1], [10, 0, 255, 254]))
        );
        assert_eq!(
            first_and_last_usable_address([0, 0, 0, 0], [255, 255, 255, 255]),
            Some(([0, 0, 0, 1], [255, 255, 255, 254]))
        );
    }

    #[test]
    fn test_first_and_last_usable_address_no_hosts() {
        // /32
        assert_eq!(
            first_and_last_usable_address([10, 0, 0, 5], [10, 0, 0, 5]),
            None
        );
        // /31
        assert_eq!(
            first_and_last_usable_address([10, 0, 0, 4], [10, 0, 0, 5]),
            None
        );
        // inverted
        assert_eq!(
            first_and_last_usable_address([10, 0, 1, 0], [10, 0, 0, 255]),
            None
        );
    }

    #[test]
    fn test_address_range_size() {
        assert_eq!(
            address_range_size([192, 168, 1, 1], [192, 168, 1, 254]),
            Some(254)
        );
        assert_eq!(address_range_size([10, 0, 0, 1], [10, 0, 0, 1]), Some(1));
        assert_eq!(
            address_range_size([0, 0, 0, 0], [255, 255, 255, 255]),
            Some(4_294_967_296)
        );
        assert_eq!(address_range_size([10, 0, 0, 2], [10, 0, 0, 1]), None);
    }

    #[test]
    fn test_host_counts() {
        assert_eq!(address_count(0), 4_294_967_296);
        assert_eq!(address_count(24), 256);
        assert_eq!(address_count(32), 1);
        assert_eq!(usable_host_count(24), 254);
        assert_eq!(usable_host_count(30), 2);
        assert_eq!(usable_host_count(31), 0);
        assert_eq!(usable_host_count(32), 0);
        assert_eq!(usable_host_count(0), 4_294_967_294);
    }
}
