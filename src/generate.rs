//! Generate command runner.

use anyhow::Context;
use clap::Args;
use phone_generator::{PhoneGenerator, DEFAULT_PHONE_COUNT, DEFAULT_SEED};
use std::io::Write;

/// Arguments for printing a batch without a database.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of phone records to generate
    #[arg(long, default_value_t = DEFAULT_PHONE_COUNT)]
    pub count: u32,

    /// Random seed for deterministic generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Write the batch as a JSON array.
pub fn run_generate<W: Write>(args: &GenerateArgs, mut out: W) -> anyhow::Result<()> {
    let records = PhoneGenerator::new(args.seed).generate(args.count);
    tracing::debug!("Generated {} phone records (seed={})", records.len(), args.seed);

    let written = if args.pretty {
        serde_json::to_writer_pretty(&mut out, &records)
    } else {
        serde_json::to_writer(&mut out, &records)
    };
    written.context("Failed to serialize phone records")?;

    writeln!(out).context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn args(count: u32, pretty: bool) -> GenerateArgs {
        GenerateArgs {
            count,
            seed: DEFAULT_SEED,
            pretty,
        }
    }

    #[test]
    fn test_generate_writes_json_array() {
        let mut out = Vec::new();
        run_generate(&args(3, false), &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0]["id"].as_str().unwrap().ends_with("-x1-pro"));
        assert!(records[2]["specs"]["battery"]["capacitymAh"].is_i64());
    }

    #[test]
    fn test_generate_pretty_output() {
        let mut out = Vec::new();
        run_generate(&args(1, true), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"carrierCompatibility\""));
    }

    #[test]
    fn test_generate_empty_batch() {
        let mut out = Vec::new();
        run_generate(&args(0, false), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
