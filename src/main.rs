//! `lethe-sweep`: dispose of an explicit list of files under the configured
//! disposal policy.
//!
//! Intended for operational cleanup of an engine directory, e.g. sweeping
//! leftover artifacts after a crash or pruning a copied-aside data dir.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lethe::{CleanerConfig, CleanerMode, FileKind, LocalVfs};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "lethe-sweep",
    about = "Dispose of obsolete storage engine files",
    version
)]
struct Args {
    #[arg(long, help = "Configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Disposal strategy (delete, archive or delayed)")]
    mode: Option<CleanerMode>,

    #[arg(long, help = "Paced-delete flush interval in seconds")]
    interval_secs: Option<u64>,

    #[arg(long, help = "Show effective configuration as JSON and exit")]
    show_config: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, help = "Enable quiet mode (minimal output)")]
    quiet: bool,

    #[arg(help = "Paths to dispose of")]
    paths: Vec<PathBuf>,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        "warn"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    // SAFETY: nothing else is reading the environment this early.
    unsafe {
        std::env::set_var("RUST_LOG", level);
    }
    tracing_subscriber::fmt::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let mut config = match &args.config {
        Some(path) => CleanerConfig::load_from(path).context("Failed to load configuration")?,
        None => CleanerConfig::load().context("Failed to load configuration")?,
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(secs) = args.interval_secs {
        config.interval = Duration::from_secs(secs);
    }

    if args.show_config {
        let json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize configuration to JSON")?;
        println!("{json}");
        return Ok(());
    }

    if args.paths.is_empty() {
        warn!("No paths given, nothing to do");
        return Ok(());
    }

    if config.mode == CleanerMode::Delayed {
        warn!(
            "Delayed mode paces removals across future calls; a one-shot sweep \
             exits before buffered paths are actually removed"
        );
    }

    let cleaner = config.build(Arc::new(LocalVfs::new()));
    info!(
        strategy = cleaner.name(),
        paths = args.paths.len(),
        "Starting sweep"
    );

    let mut failures = 0usize;
    for path in &args.paths {
        let kind = FileKind::from_path(path);
        match cleaner.clean(kind, path).await {
            Ok(()) => info!(kind = %kind, path = %path.display(), "Disposed"),
            Err(err) => {
                failures += 1;
                error!(kind = %kind, path = %path.display(), error = %err, "Disposal failed");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} path(s) failed", args.paths.len());
    }
    Ok(())
}
