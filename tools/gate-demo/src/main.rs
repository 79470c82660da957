//! Gate-Demo: Bloom-Gate comparison harness
//!
//! Loads a simulated user table into a Bloom-gated store and an ungated one,
//! probes both with the given usernames, and reports how much exact-lookup
//! work the gate avoided.

mod harness;
mod users;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bloom_gate::BloomConfig;

use crate::harness::{Probe, Report};

/// Gate-Demo: gated vs. direct lookups over a simulated user table
#[derive(Parser, Debug)]
#[command(name = "gate-demo")]
#[command(about = "Compare Bloom-gated and direct lookups over a simulated user table")]
struct Args {
    /// Number of generated accounts added after the five named ones
    #[arg(short, long, default_value_t = users::DEFAULT_GENERATED_USERS)]
    users: usize,

    /// JSON file with a Bloom filter config ({"size_bits": .., "hash_count": ..})
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter size in bits (overrides the config file)
    #[arg(long)]
    size_bits: Option<usize>,

    /// Hash probes per key (overrides the config file)
    #[arg(long)]
    hash_count: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Usernames to probe, as `name` or `name:password`
    #[arg(default_values_t = vec!["admin:admin123".to_string(), "nonexistent_user_42".to_string(), "user5000".to_string()])]
    probes: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr keeps --json output clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&args)?;
    let probes: Vec<Probe> = args.probes.iter().map(|raw| Probe::parse(raw)).collect();
    let report = harness::run(&config, users::reference_table(args.users), &probes)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Config file (or defaults), then command-line overrides
fn resolve_config(args: &Args) -> Result<BloomConfig> {
    let base = match &args.config {
        Some(path) => harness::load_config(path)?,
        None => BloomConfig::default(),
    };

    let config = BloomConfig::new(
        args.size_bits.unwrap_or(base.size_bits),
        args.hash_count.unwrap_or(base.hash_count),
    )?;
    Ok(config)
}

fn print_report(report: &Report) {
    let filter = &report.filter;
    println!("Bloom filter");
    println!("  size:            {} bits", filter.size_bits);
    println!("  hash functions:  {}", filter.hash_count);
    println!("  users in filter: {}", filter.keys_inserted);
    println!(
        "  bits set:        {} ({:.2}%)",
        filter.bits_set,
        filter.fill_ratio * 100.0
    );
    println!(
        "  estimated FPR:   {:.2}%",
        filter.estimated_false_positive_rate * 100.0
    );
    println!();

    for probe in &report.probes {
        let auth = match probe.authenticated {
            Some(true) => "login ok",
            Some(false) => "bad password",
            None => "-",
        };
        println!(
            "{:<24} gate={:<22} gated_scanned={:<8} ({:>8.1}us) direct_scanned={:<8} ({:>8.1}us) {}",
            probe.username,
            probe.gate_outcome,
            probe.gated_records_scanned,
            probe.gated_micros,
            probe.direct_records_scanned,
            probe.direct_micros,
            auth
        );
    }
    println!();

    println!(
        "gated:  checks={} lookups={} scanned={} false_positives={}",
        report.gated.gate_checks,
        report.gated.exact_lookups,
        report.gated.records_scanned,
        report.gated.false_positives
    );
    println!(
        "direct: lookups={} scanned={}",
        report.direct.exact_lookups, report.direct.records_scanned
    );
}
