//! JSON output for network information.

use crate::processing::NetworkInfo;
use std::error::Error;

/// Pretty printed JSON for a [`NetworkInfo`].
pub fn network_info_json(info: &NetworkInfo) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(info).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print the JSON report to stdout.
pub fn print_network_info_json(info: &NetworkInfo) -> Result<(), Box<dyn Error>> {
    log::info!("print_network_info_json({})", info.cidr);
    println!("{}", network_info_json(info)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_info_json() {
        let info = NetworkInfo::parse("192.168.1.10/24").unwrap();
        let json = network_info_json(&info).expect("Error serializing");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "192.168.1.10/24");
        assert_eq!(value["mask"], "255.255.255.0");
        assert_eq!(value["prefix"], 24);
        assert_eq!(value["network"], "192.168.1.0");
        assert_eq!(value["broadcast"], "192.168.1.255");
        assert_eq!(value["first_usable"], "192.168.1.1");
        assert_eq!(value["last_usable"], "192.168.1.254");
        assert_eq!(value["usable_hosts"], 254);
        assert_eq!(value["total_addresses"], 256);
    }

    #[test]
    fn test_network_info_json_no_range() {
        let info = NetworkInfo::parse("10.0.0.4/31").unwrap();
        let json = network_info_json(&info).expect("Error serializing");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["first_usable"].is_null());
        assert!(value["last_usable"].is_null());
        assert_eq!(value["usable_hosts"], 0);
    }
}
