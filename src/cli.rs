//! Command line parsing and dispatch.

use crate::config::{Config, OutputFormat};
use crate::error::{CalcError, CalcResult};
use crate::models::{format_address, parse_mask_text, subnet_mask_from_prefix_length, Notation, Octets};
use crate::output::{print_conversion, print_network_info, print_network_info_json};
use crate::processing::{convert_address, NetworkInfo};
use colored::Colorize;
use std::error::Error;

pub const USAGE: &str = "\
Usage:
  ip-subnet-calc info <address>/<prefix> [--json|--text]
  ip-subnet-calc info <address> <mask|/prefix> [--json|--text]
  ip-subnet-calc convert <address> [--from-binary|--from-decimal]
  ip-subnet-calc mask <prefix|mask>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Info {
        input: String,
        output: Option<OutputFormat>,
    },
    Convert {
        address: String,
        from: Option<Notation>,
    },
    Mask {
        mask: String,
    },
}

/// Parse arguments, without the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> CalcResult<Command> {
    let (flags, positional): (Vec<&str>, Vec<&str>) = args
        .iter()
        .map(|a| a.as_ref())
        .partition(|a| a.starts_with("--"));
    log::trace!("parse_args flags={flags:?} positional={positional:?}");

    let usage = || CalcError::Usage(USAGE.to_string());
    let (command, rest) = positional.split_first().ok_or_else(usage)?;

    let mut output = None;
    let mut from = None;
    for flag in &flags {
        match (*command, *flag) {
            ("info", "--json") => output = Some(OutputFormat::Json),
            ("info", "--text") => output = Some(OutputFormat::Text),
            ("convert", "--from-binary") => from = Some(Notation::Binary),
            ("convert", "--from-decimal") => from = Some(Notation::Decimal),
            _ => return Err(CalcError::Usage(format!("Unknown option {flag}\n{USAGE}"))),
        }
    }

    match (*command, rest) {
        ("info", [cidr]) => Ok(Command::Info {
            input: cidr.to_string(),
            output,
        }),
        ("info", [address, mask]) => Ok(Command::Info {
            input: format!("{address} {mask}"),
            output,
        }),
        ("convert", [address]) => Ok(Command::Convert {
            address: address.to_string(),
            from,
        }),
        ("mask", [mask]) => Ok(Command::Mask {
            mask: mask.to_string(),
        }),
        _ => Err(usage()),
    }
}

/// Mask octets and prefix length for `/n`, `n` or dotted mask text.
pub fn describe_mask(text: &str) -> CalcResult<(Octets, u8)> {
    let prefix = parse_mask_text(text).ok_or_else(|| CalcError::InvalidMask(text.to_string()))?;
    let mask = subnet_mask_from_prefix_length(prefix as u32)
        .ok_or(CalcError::InvalidPrefix(prefix as u32))?;
    Ok((mask, prefix))
}

/// Run a command, printing to stdout.
pub fn run(command: Command, config: &Config) -> Result<(), Box<dyn Error>> {
    log::info!("run({command:?})");
    match command {
        Command::Info { input, output } => {
            let info = NetworkInfo::parse(&input)?;
            match output.unwrap_or(config.output) {
                OutputFormat::Text => print_network_info(&info),
                OutputFormat::Json => print_network_info_json(&info)?,
            }
        }
        Command::Convert { address, from } => {
            let converted = convert_address(&address, from.unwrap_or(config.notation))?;
            print_conversion(address.trim(), &converted);
        }
        Command::Mask { mask } => {
            let (octets, prefix) = describe_mask(&mask)?;
            println!(
                "{} /{prefix}",
                format_address(octets, Notation::Decimal).cyan()
            );
            println!("{}", format_address(octets, Notation::Binary));
        }
    }
    Ok(())
}
