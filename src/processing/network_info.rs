//! Network information for an address and its subnet mask.

use super::arithmetic::{address_range_size, first_and_last_usable_address, usable_host_count};
use crate::error::{CalcError, CalcResult};
use crate::models::{parse_address_text, parse_mask_text, Ipv4Net, Notation};
use regex::Regex;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Regex for `addr/mask` or `addr mask` input, mask either dotted or a prefix.
static ADDR_MASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_addr_mask_regex() -> &'static Regex {
    ADDR_MASK_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<addr>[0-9.]+)\s*(?:/|\s)\s*(?P<mask>[0-9.]+)\s*$")
            .expect("Invalid Regex")
    })
}

/// Split `"10.0.0.1/24"` or `"10.0.0.1 255.0.0.0"` into address and mask text.
pub fn split_address_and_mask(input: &str) -> Option<(&str, &str)> {
    let caps = get_addr_mask_regex().captures(input)?;
    Some((caps.name("addr")?.as_str(), caps.name("mask")?.as_str()))
}

/// Everything known about the subnet an address sits in.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Address and prefix as entered.
    pub cidr: Ipv4Net,
    /// The address as entered.
    pub address: Ipv4Addr,
    /// Dotted subnet mask.
    pub mask: Ipv4Addr,
    /// Network bits in the mask.
    pub prefix: u8,
    /// Network address.
    pub network: Ipv4Addr,
    /// Broadcast address.
    pub broadcast: Ipv4Addr,
    /// First host address, none for /31 and /32.
    pub first_usable: Option<Ipv4Addr>,
    /// Last host address, none for /31 and /32.
    pub last_usable: Option<Ipv4Addr>,
    /// Number of host addresses.
    pub usable_hosts: u64,
    /// Number of addresses from network to broadcast.
    pub total_addresses: u64,
}

impl NetworkInfo {
    /// Calculate from decimal address text and mask text (`/24`, `24` or `255.255.255.0`).
    pub fn calculate(address_text: &str, mask_text: &str) -> CalcResult<NetworkInfo> {
        let address_text = address_text.trim();
        let ip = parse_address_text(address_text, Notation::Decimal)
            .ok_or_else(|| CalcError::InvalidAddress(address_text.to_string()))?;
        let prefix = parse_mask_text(mask_text)
            .ok_or_else(|| CalcError::InvalidMask(mask_text.trim().to_string()))?;
        let cidr = Ipv4Net::from_parts(ip, prefix)?;
        Ok(NetworkInfo::from_net(cidr))
    }

    /// Calculate from a single `addr/mask` or `addr mask` string.
    pub fn parse(input: &str) -> CalcResult<NetworkInfo> {
        let (address_text, mask_text) = split_address_and_mask(input).ok_or_else(|| {
            CalcError::Usage(format!("Expected <address>/<mask>, got: {}", input.trim()))
        })?;
        NetworkInfo::calculate(address_text, mask_text)
    }

    /// Calculate for an already parsed [`Ipv4Net`].
    pub fn from_net(cidr: Ipv4Net) -> NetworkInfo {
        let mask = cidr.mask();
        let network = cidr.network();
        let broadcast = cidr.broadcast();
        let usable = first_and_last_usable_address(network, broadcast);
        log::debug!("NetworkInfo::from_net({cidr}) network={network:?} broadcast={broadcast:?}");

        NetworkInfo {
            cidr,
            address: cidr.addr(),
            mask: Ipv4Addr::from(mask),
            prefix: cidr.prefix(),
            network: Ipv4Addr::from(network),
            broadcast: Ipv4Addr::from(broadcast),
            first_usable: usable.map(|(first, _)| Ipv4Addr::from(first)),
            last_usable: usable.map(|(_, last)| Ipv4Addr::from(last)),
            usable_hosts: usable_host_count(cidr.prefix()),
            // network <= broadcast always holds here
            total_addresses: address_range_size(network, broadcast).unwrap_or(0),
        }
    }
}
