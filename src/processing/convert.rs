//! Whole address conversion between decimal and binary notation.

use crate::error::{CalcError, CalcResult};
use crate::models::{format_address, parse_address_text, Notation};

/// Convert a dotted address written in `from` notation into the other one.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::Notation;
/// use ip_subnet_calc::processing::convert_address;
/// assert_eq!(
///     convert_address("10.0.0.255", Notation::Decimal).unwrap(),
///     "00001010.00000000.00000000.11111111"
/// );
/// ```
pub fn convert_address(text: &str, from: Notation) -> CalcResult<String> {
    let text = text.trim();
    let octets = parse_address_text(text, from).ok_or_else(|| {
        log::debug!("convert_address: {text:?} is not a {from} address");
        CalcError::InvalidAddress(text.to_string())
    })?;
    Ok(format_address(octets, from.other()))
}
