//! IPv4 address with a prefix length, in CIDR notation.
//!
//! Provides [`Ipv4Net`] for representing an address inside its subnet, with
//! serde support using the `a.b.c.d/n` string form.

use super::address::{parse_address_text, Octets};
use super::mask::{parse_mask_text, subnet_mask_from_prefix_length, MAX_LENGTH};
use super::octet::Notation;
use crate::error::{CalcError, CalcResult};
use crate::processing::{broadcast_address, network_address};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 address together with the prefix length of its subnet.
///
/// The prefix is always 0-32; the only constructors are [`Ipv4Net::new`] and
/// [`Ipv4Net::from_parts`], which check it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Net {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Net {
    /// Create a new [`Ipv4Net`] from a CIDR string (e.g. "10.0.0.1/24").
    ///
    /// The mask part may also be dotted, e.g. "10.0.0.1/255.255.255.0".
    pub fn new(addr_cidr: &str) -> CalcResult<Ipv4Net> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CalcError::InvalidAddress(addr_cidr.to_string()))?;
        let octets = parse_address_text(addr, Notation::Decimal)
            .ok_or_else(|| CalcError::InvalidAddress(addr.to_string()))?;
        let prefix =
            parse_mask_text(mask).ok_or_else(|| CalcError::InvalidMask(mask.to_string()))?;
        Ipv4Net::from_parts(octets, prefix)
    }

    /// Build from address octets and a prefix length.
    pub fn from_parts(octets: Octets, prefix: u8) -> CalcResult<Ipv4Net> {
        if prefix > MAX_LENGTH {
            return Err(CalcError::InvalidPrefix(prefix as u32));
        }
        Ok(Ipv4Net {
            addr: Ipv4Addr::from(octets),
            prefix,
        })
    }

    /// The address as entered, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Address octets.
    pub fn octets(&self) -> Octets {
        self.addr.octets()
    }

    /// The dotted subnet mask for this prefix.
    pub fn mask(&self) -> Octets {
        // prefix is checked on construction
        subnet_mask_from_prefix_length(self.prefix as u32).unwrap_or([0; 4])
    }

    /// The network address of the subnet.
    pub fn network(&self) -> Octets {
        network_address(self.octets(), self.mask())
    }

    /// The broadcast address of the subnet.
    pub fn broadcast(&self) -> Octets {
        broadcast_address(self.octets(), self.mask())
    }
}

impl FromStr for Ipv4Net {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Net::new(s)
    }
}

impl Serialize for Ipv4Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Net::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl std::fmt::Display for Ipv4Net {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let net = Ipv4Net::new("192.168.1.10/24").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(net.prefix(), 24);
        assert_eq!(net.to_string(), "192.168.1.10/24");
        assert_eq!(Ipv4Net::new("192.168.1.10/255.255.255.0").unwrap(), net);
        assert!(Ipv4Net::new("192.168.1.10").is_err());
        assert!(Ipv4Net::new("192.168.1/24").is_err());
        assert_eq!(
            Ipv4Net::new("192.168.1.10/33"),
            Err(CalcError::InvalidMask("33".to_string()))
        );
    }

    #[test]
    fn test_new_accepts_leading_zeros() {
        // same octet grammar as parse_address_text
        let net = Ipv4Net::new("010.0.0.001/24").unwrap();
        assert_eq!(net.octets(), [10, 0, 0, 1]);
        assert_eq!(
            "010.0.0.001/24".parse::<Ipv4Net>().unwrap(),
            Ipv4Net::new("10.0.0.1/24").unwrap()
        );
    }

    #[test]
    fn test_from_parts_rejects_long_prefix() {
        assert_eq!(
            Ipv4Net::from_parts([10, 0, 0, 1], 33),
            Err(CalcError::InvalidPrefix(33))
        );
    }

    #[test]
    fn test_network_broadcast() {
        let net = Ipv4Net::new("10.2.3.4/16").unwrap();
        assert_eq!(net.mask(), [255, 255, 0, 0]);
        assert_eq!(net.network(), [10, 2, 0, 0]);
        assert_eq!(net.broadcast(), [10, 2, 255, 255]);

        let host = Ipv4Net::new("10.2.3.4/32").unwrap();
        assert_eq!(host.network(), host.broadcast());

        let all = Ipv4Net::new("10.2.3.4/0").unwrap();
        assert_eq!(all.network(), [0, 0, 0, 0]);
        assert_eq!(all.broadcast(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_serde_string_form() {
        let net = Ipv4Net::new("172.16.5.4/20").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"172.16.5.4/20\"");
        let back: Ipv4Net = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<Ipv4Net>("\"172.16.5.4\"").is_err());
        let padded: Ipv4Net = serde_json::from_str("\"172.016.5.4/20\"").unwrap();
        assert_eq!(padded, net);
    }
}
