use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use reverie_ctl::host::{SimulatedBackend, SimulatedViewport};
use reverie_ctl::{PageManifest, Session, inspect, manifest};

#[derive(Parser)]
#[command(
    name = "reverie-ctl",
    version,
    about = "Drive a Reverie page headlessly from a manifest"
)]
struct Cli {
    /// Log reverie modules at trace level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mount a page and replay an interaction script
    Run {
        /// Page manifest (TOML)
        #[arg(long, env = "REVERIE_MANIFEST")]
        manifest: PathBuf,
        /// Script with one command per line; stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,
        /// Keep transitions running until an explicit `settle`
        #[arg(long)]
        manual_settle: bool,
    },
    /// Print the carousel geometry a manifest produces
    Inspect {
        /// Page manifest (TOML)
        #[arg(long, env = "REVERIE_MANIFEST")]
        manifest: PathBuf,
    },
}

fn init_logger(verbose: bool) {
    let reverie_level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("reverie_player", reverie_level)
        .filter_module("reverie_ctl", reverie_level)
        .init();
}

fn main() -> Result<()> {
    // Before clap so `.env` can supply REVERIE_MANIFEST
    let env_file = manifest::load_env_file();

    let cli = Cli::parse();
    if std::env::var("RUST_LOG").is_err() {
        init_logger(cli.verbose);
    } else {
        env_logger::Builder::from_default_env()
            .target(Target::Stderr)
            .init();
    }

    match env_file {
        Ok(Some(path)) => log::debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(err) => log::warn!("Ignoring unreadable .env: {}", err),
    }

    match cli.command {
        Command::Run {
            manifest,
            script,
            manual_settle,
        } => run(manifest, script, manual_settle),
        Command::Inspect { manifest } => {
            let manifest = PageManifest::load(&manifest)?;
            for line in inspect::report(&manifest)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn run(manifest: PathBuf, script: Option<PathBuf>, manual_settle: bool) -> Result<()> {
    let manifest = PageManifest::load(&manifest)?;
    let spec = manifest
        .page_spec()
        .context("manifest does not describe a valid page")?;
    let mut session = Session::new(
        spec,
        SimulatedViewport::new(manifest.viewport.width),
        SimulatedBackend::new(manifest.unavailable_tracks())
            .with_stalled(manifest.stalled_tracks()),
        manual_settle,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run_script(BufReader::new(file), &mut out)?
        }
        None => session.run_script(io::stdin().lock(), &mut out)?,
    };

    log::info!(
        "Script finished: {} executed, {} failed",
        summary.executed,
        summary.failed
    );
    if summary.failed > 0 {
        bail!("{} script line(s) could not be parsed", summary.failed);
    }
    Ok(())
}
