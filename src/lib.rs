// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnet calculator.
//!
//! Octet and address conversion between decimal and binary notation, subnet
//! mask validation, prefix length conversion and network/broadcast/usable
//! range arithmetic.
//!
//! ```
//! use ip_subnet_calc::processing::NetworkInfo;
//! let info = NetworkInfo::parse("192.168.1.10/24").unwrap();
//! assert_eq!(info.broadcast.to_string(), "192.168.1.255");
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CalcError, CalcResult};
