//! `phishguard-cli` — the thin host application for this exercise. Plays
//! the role the mobile/QR-scanning app plays in production: read a URL,
//! call `analyze`, print the result. This binary is the crate's only
//! filesystem surface (`--policy`) and the only place `tracing-subscriber`
//! is initialized.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phishguard::Pipeline;

/// Classify a URL (typically decoded from a QR code) as SAFE, SUSPICIOUS,
/// MALICIOUS or UNKNOWN, entirely offline.
#[derive(Parser, Debug)]
#[command(name = "phishguard-cli", version, about)]
struct Args {
    /// The URL (or non-URL payload) to analyze. Reads from stdin if omitted.
    url: Option<String>,

    /// Emit the full Assessment as JSON instead of a formatted summary.
    #[arg(long)]
    json: bool,

    /// Path to an organizational policy file (JSON), evaluated before the
    /// full pipeline.
    #[arg(long)]
    policy: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phishguard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let url = match args.url {
        Some(url) => url,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_line(&mut buf)
                .context("reading URL from stdin")?;
            buf.trim().to_string()
        }
    };

    let pipeline = Pipeline::new().context("building analysis pipeline")?;

    let assessment = match args.policy {
        Some(path) => {
            let policy = phishguard::config::load_policy(&path)?;
            pipeline.analyze_with_policy(&url, &policy)
        }
        None => pipeline.analyze(&url),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_summary(&assessment);
    }

    Ok(())
}

fn print_summary(assessment: &phishguard::Assessment) {
    println!("{}", assessment.url);
    println!("  verdict:    {:?}", assessment.verdict);
    println!("  score:      {}/100", assessment.final_score);
    println!("  confidence: {}/4", assessment.confidence);
    println!(
        "  components: heuristic={} ml={} brand={} tld={}",
        assessment.components.heuristic,
        assessment.components.ml,
        assessment.components.brand,
        assessment.components.tld
    );
    if assessment.signals.is_empty() {
        println!("  signals:    none");
    } else {
        println!("  signals:");
        for signal in &assessment.signals {
            println!("    - {} ({}): {}", signal.id, signal.weight, signal.explanation);
        }
    }
    if !assessment.obfuscations.is_empty() {
        println!("  obfuscations: {:?}", assessment.obfuscations);
    }
}
