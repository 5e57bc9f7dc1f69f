//! Simple Browser - a minimal desktop browser shell.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use browser::config::CONFIG_FILE;
use browser::logging::{init_logging, APP_LOG};
use browser::visit_log::LOG_DIR;
use browser::{headless, retention, ConfigStore, LaunchPlan, VisitLog};

/// Simple Browser - a minimal desktop browser shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to open instead of the homepage
    url: Option<String>,

    /// Settings file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Directory for the per-day visit logs
    #[arg(long, default_value = LOG_DIR)]
    log_dir: PathBuf,

    /// Application log file
    #[arg(long, default_value = APP_LOG)]
    app_log: PathBuf,

    /// Run without a window, reading toolbar commands from stdin
    #[arg(long)]
    headless: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.app_log, args.verbose) {
        eprintln!("Logging disabled: {:#}", e);
    }
    info!("Simple Browser v{}", browser::VERSION);

    retention::sweep_old_logs(&args.log_dir);
    let config = ConfigStore::new(&args.config).load();
    let plan = LaunchPlan::from_config(&config, args.url.as_deref());
    let visit_log = VisitLog::new(&args.log_dir);

    if args.headless || !cfg!(feature = "webview") {
        if !args.headless {
            info!("Built without window support, running headless");
        }
        headless::run(config, plan, visit_log, io::stdin().lock())?;
        info!("Browser shutdown complete");
        return Ok(());
    }

    #[cfg(feature = "webview")]
    browser::shell::run(config, plan, visit_log)?;

    Ok(())
}
