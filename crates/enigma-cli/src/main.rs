//! Enigma command-line driver.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt a message under a daily key, choosing message key XWB
//! enigma --rotors "I II V" --rings "06 22 14" \
//!        --plugboard "PO ML IU KJ NH YT GB VF RE DC" \
//!        --indicator "EHZ XWB" "MEET ME AT THE STATION AT 1830 HRS"
//!
//! # Decrypt with the transmitted indicator groups
//! enigma --decode --rotors "I II V" --rings "06 22 14" \
//!        --plugboard "PO ML IU KJ NH YT GB VF RE DC" \
//!        --indicator "EHZ TBS" "EBAFZ OYUXV LCITC CXPFG ..."
//! ```

#![allow(clippy::print_stdout)]

use std::io::Read;

use clap::Parser;
use enigma_codec::{format_blocks, normalize, to_plain_text};
use enigma_core::Machine;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Width of the ciphertext display blocks.
const BLOCK_WIDTH: usize = 5;

/// Enigma rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Enigma rotor cipher machine")]
#[command(version)]
struct Args {
    /// Rotor order, left to right (Roman numerals I-V)
    #[arg(long, default_value = "I II III")]
    rotors: String,

    /// Ring settings, one per rotor (numbers 1-26 or letters)
    #[arg(long, default_value = "")]
    rings: String,

    /// Plugboard pairs (e.g. "PO ML IU")
    #[arg(long, default_value = "")]
    plugboard: String,

    /// Starting rotor positions, one letter per rotor; ignored when an
    /// indicator is given
    #[arg(long, default_value = "")]
    positions: String,

    /// Indicator groups: day setting and message key (e.g. "EHZ XWB")
    #[arg(long)]
    indicator: Option<String>,

    /// Decode instead of encode
    #[arg(long)]
    decode: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Message text; read from stdin when omitted
    text: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        },
    };

    let mut machine = Machine::new(&args.rotors, &args.positions, &args.rings, &args.plugboard)?;
    tracing::debug!(windows = %machine.rotor_positions(), "machine ready");

    if args.decode {
        if let Some(indicator) = &args.indicator {
            let (group_setting, encrypted_indicator) = split_indicator(indicator)?;
            machine.establish_decrypt_indicator(group_setting, encrypted_indicator)?;
            tracing::info!(windows = %machine.rotor_positions(), "message key established");
        }
        let decoded = machine.encode(&text);
        println!("{decoded}");
        println!();
        println!("{}", to_plain_text(&decoded));
    } else {
        if let Some(indicator) = &args.indicator {
            let (group_setting, chosen_indicator) = split_indicator(indicator)?;
            let header = machine.establish_encrypt_indicator(group_setting, chosen_indicator)?;
            tracing::info!(windows = %machine.rotor_positions(), "message key established");
            println!("= {header} =");
        }
        let ciphertext = machine.encode(&normalize(&text));
        println!("{}", format_blocks(&ciphertext, BLOCK_WIDTH));
    }

    Ok(())
}

/// Split an indicator argument into its two groups.
fn split_indicator(indicator: &str) -> Result<(&str, &str), String> {
    let mut groups = indicator.split_whitespace();
    match (groups.next(), groups.next(), groups.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(format!("indicator {indicator:?} must be two groups, e.g. \"EHZ XWB\"")),
    }
}
