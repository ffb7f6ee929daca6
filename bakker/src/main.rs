//! Commandline front end: resolves settings, then invokes the toggle
//! processor once per filename.
//!
//! A failure on one file is reported on stderr and does not abort the
//! remaining files; the resulting path of each processed file is printed on
//! stdout, one per line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bakker::core::types::{Action, Mode};
use bakker::exit_codes;
use bakker::io::config::{Settings, load_settings};
use bakker::process::process_with;

#[derive(Parser)]
#[command(
    name = "bakker",
    version,
    about = "Toggle files between their plain and extension-marked names for quick backups"
)]
struct Cli {
    /// Files to process; each may be given in marked or unmarked form.
    #[arg(required = true)]
    files: Vec<String>,

    /// Extension used to derive the marked name [default: .bak]
    #[arg(short, long, env = "BAKKER_EXTENSION")]
    extension: Option<String>,

    /// Whether a transfer happens: toggle, add or remove [default: toggle]
    #[arg(short, long, env = "BAKKER_MODE")]
    mode: Option<Mode>,

    /// How a transfer is performed: move or copy [default: move]
    #[arg(short, long, env = "BAKKER_ACTION")]
    action: Option<Action>,

    /// Optional TOML settings file.
    #[arg(long, env = "BAKKER_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    bakker::logging::init();
    let cli = Cli::parse();

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    };

    let mut failed = false;
    for file in &cli.files {
        match process_with(file, &settings) {
            Ok(path) => println!("{}", path.display()),
            Err(err) => {
                failed = true;
                eprintln!("{file}: {err}");
            }
        }
    }

    if failed {
        std::process::exit(exit_codes::TOGGLE_FAILED);
    }
}

/// Commandline beats environment (clap folds the `BAKKER_*` variables into
/// the flags), which beats the optional settings file, which beats built-in
/// defaults.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let base = match &cli.config {
        Some(path) => load_settings(path).context("load settings file")?,
        None => Settings::default(),
    };
    let settings = Settings {
        extension: cli.extension.clone().unwrap_or(base.extension),
        mode: cli.mode.unwrap_or(base.mode),
        action: cli.action.unwrap_or(base.action),
    };
    settings.validate()?;
    Ok(settings)
}
