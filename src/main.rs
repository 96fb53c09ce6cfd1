use std::fs::File;
use std::io::Read as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use log::{debug, info};

mod checker;
mod config;
mod input;
mod messages;
mod report;
mod request;

/// Checks whether MAC addresses are registered in the NAC inventory.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// File with one MAC address per line (`#` starts a comment)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for found.txt / missing.txt / report.txt
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// MAC addresses to check; falls back to [[devices]] from the config
    macs: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut file = File::open(&args.config)
        .with_context(|| format!("opening config {}", args.config.display()))?;
    let mut config_contents = String::new();
    file.read_to_string(&mut config_contents)?;
    let config: config::AppConfig = toml::de::from_str(&config_contents)?;

    let entries = input::assemble(&args.macs, args.input.as_deref(), &config)?;
    debug!(
        "Checking {} address(es) against {}",
        entries.len(),
        config.server.url
    );

    let checker = checker::MacChecker::new(&config)?;
    let results = checker.check_all(&entries).await;

    let summary = report::summarize(&entries, &results);
    if let Some(dir) = &args.output {
        report::write_files(&summary, dir)?;
        info!("Report files written to {}", dir.display());
    }
    println!(
        "Done. Found: {}, Missing: {}, Errors: {}",
        summary.found.len(),
        summary.missing.len(),
        summary.errors.len()
    );

    Ok(())
}
