use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::fs::File;
use std::io;
use std::io::Write;

use hdlc_crc::{Variant, checksum_reader};

#[derive(Parser, Debug)]
#[command(name = "hdlc-crc", about = "CRC-16/CCITT checksums of files or stdin")]
struct Args {
    /// Input files; '-' reads stdin
    #[arg(value_name = "FILE", default_value = "-")]
    files: Vec<String>,

    /// CRC convention: ccitt (LSB-first) or ccitt-false (MSB-first)
    #[arg(
        long,
        value_name = "VARIANT",
        env = "HDLC_CRC_VARIANT",
        default_value = "ccitt-false"
    )]
    variant: Variant,

    /// Initial accumulator value (hex with 0x prefix, or decimal).
    /// Defaults to the variant's reference seed.
    #[arg(long, value_name = "SEED", env = "HDLC_CRC_SEED", value_parser = parse_u16)]
    seed: Option<u16>,

    /// Expected checksum; exit with status 1 if any input differs
    #[arg(long, value_name = "CRC", env = "HDLC_CRC_CHECK", value_parser = parse_u16)]
    check: Option<u16>,
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("'{s}' is not a 16-bit value: {e}"))
}

fn log_filters(rust_log: Option<String>) -> String {
    rust_log.unwrap_or_else(|| concat!(env!("CARGO_CRATE_NAME"), "=info").to_string())
}

fn setup_logger() {
    let filters = log_filters(std::env::var("RUST_LOG").ok());
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filters)
        .init();
}

fn checksum_path(path: &str, variant: Variant, seed: u16) -> Result<u16> {
    if path == "-" {
        let stdin = io::stdin();
        return checksum_reader(variant, seed, stdin.lock()).context("Failed to read stdin");
    }

    let file = File::open(path).with_context(|| format!("Failed to open '{path}'"))?;
    checksum_reader(variant, seed, file).with_context(|| format!("Failed to read '{path}'"))
}

/// Checksum every input, one `XXXX  name` line each. Returns how many
/// inputs differ from `--check` (always 0 without it).
fn run(args: &Args, out: &mut impl Write) -> Result<usize> {
    let variant = args.variant;
    let seed = args.seed.unwrap_or(variant.init());
    debug!("variant={variant} seed=0x{seed:04X} inputs={}", args.files.len());

    let mut mismatches = 0usize;

    for path in &args.files {
        let crc = checksum_path(path, variant, seed)?;
        writeln!(out, "{crc:04X}  {path}")?;

        if let Some(expected) = args.check {
            if crc != expected {
                warn!("{path}: got 0x{crc:04X}, expected 0x{expected:04X}");
                mismatches += 1;
            }
        }
    }

    Ok(mismatches)
}

fn main() -> Result<()> {
    setup_logger();

    let args = Args::parse();
    let stdout = io::stdout();
    let mismatches = run(&args, &mut stdout.lock())?;

    if let Some(expected) = args.check {
        if mismatches > 0 {
            eprintln!(
                "{mismatches} of {} input(s) did not match 0x{expected:04X}",
                args.files.len()
            );
            std::process::exit(1);
        }
        info!("all inputs match 0x{expected:04X}");
    }

    Ok(())
}
