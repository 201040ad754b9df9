//! Grantscout CLI - run the extraction pipeline over a saved model transcript.
//!
//! Reads raw model output from a file (or stdin), recovers the normalized
//! grant records, and prints them as JSON. This binary is the composition
//! root: it owns the pipeline and the admission limiter and performs no
//! network I/O itself.

use anyhow::Context;
use clap::Parser;
use grantscout_extractor::{ExtractConfig, RecordPipeline};
use grantscout_gatekeeper::{AdmissionConfig, SlidingWindowLimiter};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "grantscout",
    about = "Recover structured grant records from raw model output",
    version
)]
struct Cli {
    /// Transcript file to parse (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Maximum number of records to return
    #[arg(long, default_value_t = 10)]
    top_k: usize,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Print the admission limiter state instead of parsing anything
    #[arg(long)]
    check_admission: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.check_admission {
        let config = AdmissionConfig::from_env();
        config.validate().map_err(anyhow::Error::msg)?;
        let limiter = SlidingWindowLimiter::new(config.per_window);
        let admission = limiter.allow();
        println!(
            "permitted={} remaining={} capacity={}",
            admission.permitted,
            admission.remaining,
            limiter.capacity()
        );
        return Ok(());
    }

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let pipeline = RecordPipeline::new(ExtractConfig::default())?;
    let records = pipeline.run(&text, cli.top_k)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{}", output);

    Ok(())
}
