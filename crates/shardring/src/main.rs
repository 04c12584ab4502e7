//! `shardring` — route identifiers to weighted shards.
//!
//! Command-line front end for the consistent hashing ring: routes identifier
//! files the way an application's session or cache client would, and reports
//! how a shard configuration spreads and moves keys.
//!
//! # Usage
//!
//! ```text
//! shardring -c shards.toml route -i input.txt -o output.txt
//! shardring -c shards.toml lookup user-1 user-2
//! shardring hash user-1                      # raw and Java-long hash values
//! shardring -c shards.toml stats -n 100000   # per-shard share of a sample
//! shardring -c shards.toml diff --to grown.toml
//! ```

mod config;
mod route;
mod telemetry;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use rand::distr::Alphanumeric;
use shardring_hash::HashValue;
use shardring_placement::Ring;
use shardring_types::ShardSpec;
use tracing::info;

use config::CliConfig;

// -----------------------------------------------------------------------
// CLI definition
// -----------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "shardring",
    version,
    about = "Consistent hashing shard router"
)]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long, global = true, env = "SHARDRING_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route identifiers, one per line, to their shards.
    Route {
        /// Read identifiers from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write `identifier<TAB>shard` lines to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the shard owning each identifier.
    Lookup {
        /// Identifiers to look up.
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// Print the hash of each input: raw hex, signed decimal, and split form.
    Hash {
        /// Strings to hash.
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Route a random sample and compare each shard's share to its weight.
    Stats {
        /// Number of random identifiers (defaults to `[sample] size`).
        #[arg(short = 'n', long)]
        sample: Option<usize>,
    },

    /// Measure how many identifiers move to a different shard under another config.
    Diff {
        /// Config file with the other shard list.
        #[arg(long)]
        to: PathBuf,

        /// Number of random identifiers (defaults to `[sample] size`).
        #[arg(short = 'n', long)]
        sample: Option<usize>,
    },
}

// -----------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("failed to load config")?;

    telemetry::init(&config.log.level);

    match cli.command {
        Commands::Route { input, output } => cmd_route(&config, input, output),
        Commands::Lookup { identifiers } => cmd_lookup(&config, &identifiers),
        Commands::Hash { inputs } => cmd_hash(&inputs),
        Commands::Stats { sample } => {
            cmd_stats(&config, sample.unwrap_or_else(|| config.sample_size()))
        }
        Commands::Diff { to, sample } => {
            cmd_diff(&config, &to, sample.unwrap_or_else(|| config.sample_size()))
        }
    }
}

// -----------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------

fn cmd_route(config: &CliConfig, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let ring = config.build_ring()?;

    let reader: Box<dyn io::BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = route::route_lines(&ring, reader, writer)?;
    info!(routed = summary.routed, "routing complete");
    for (index, count) in summary.per_shard.iter().enumerate() {
        info!(shard = %ring.shards()[index].label(index), count, "shard total");
    }
    Ok(())
}

fn cmd_lookup(config: &CliConfig, identifiers: &[String]) -> Result<()> {
    let ring = config.build_ring()?;
    let mut out = io::stdout().lock();
    for identifier in identifiers {
        let index = ring.shard_index_for(identifier);
        writeln!(out, "{identifier}\t{}", ring.shards()[index].label(index))?;
    }
    Ok(())
}

fn cmd_hash(inputs: &[String]) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "input\traw\tsigned\thigh\tlow")?;
    for input in inputs {
        let value = HashValue::of(input);
        let split = value.split();
        writeln!(
            out,
            "{input}\t{}\t{value}\t{}\t{}",
            value.to_hex(),
            split.high(),
            split.low()
        )?;
    }
    Ok(())
}

fn cmd_stats(config: &CliConfig, sample: usize) -> Result<()> {
    let ring = config.build_ring()?;
    let identifiers = random_identifiers(sample);
    let counts = ring.distribution(&identifiers);
    let total_weight: u64 = ring.shards().iter().map(|s| u64::from(s.weight())).sum();

    info!(sample, shards = ring.shard_count(), "routing sample");

    let mut out = io::stdout().lock();
    writeln!(out, "shard\tweight\tcount\tshare\texpected")?;
    for (index, (shard, count)) in ring.shards().iter().zip(&counts).enumerate() {
        let share = *count as f64 / sample.max(1) as f64;
        let expected = f64::from(shard.weight()) / total_weight as f64;
        writeln!(
            out,
            "{}\t{}\t{count}\t{:.2}%\t{:.2}%",
            shard.label(index),
            shard.weight(),
            share * 100.0,
            expected * 100.0
        )?;
    }
    Ok(())
}

fn cmd_diff(config: &CliConfig, to: &Path, sample: usize) -> Result<()> {
    let old = config.build_ring()?;
    let new = CliConfig::load(Some(to))
        .context("failed to load target config")?
        .build_ring()?;

    let identifiers = random_identifiers(sample);
    let moved = Ring::diff(&old, &new, &identifiers);

    let mut arrivals = vec![0usize; new.shard_count()];
    for m in &moved {
        arrivals[m.to] += 1;
    }

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "moved {} of {sample} identifiers ({:.2}%)",
        moved.len(),
        moved.len() as f64 / sample.max(1) as f64 * 100.0
    )?;
    for (index, count) in arrivals.iter().enumerate().filter(|(_, c)| **c > 0) {
        writeln!(out, "  -> {}\t{count}", new.shards()[index].label(index))?;
    }
    Ok(())
}

/// Random 24-character alphanumeric identifiers, like session tokens.
fn random_identifiers(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(24)
                .map(char::from)
                .collect::<String>()
        })
        .collect()
}
