//! # Card CLI
//!
//! Terminal host for the `cardcraft` card flow.
//!
//! Reads one command per line (from stdin or a script file), feeds them to
//! `card-core` and prints each screen as it mounts. Cosmetic delays run on
//! the tokio clock, multiplexed with input.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p card-cli
//! ```
//!
//! ## Scripted, without delays:
//!
//! ```bash
//! cargo run -p card-cli -- --instant --json --script card.txt
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - Timing and output options derived from the arguments
//! - `Session` - Event loop driving `CardApp`
//! - `FsPicker` - Image picker backed by the local filesystem

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub mod command;
pub mod picker;
pub mod render;
mod session;

pub use command::{Command, CommandError};
pub use picker::FsPicker;
pub use session::{PickerFactory, Session};

use std::path::PathBuf;

use card_core::app::{DEFAULT_BUSY_DELAY_MS, DEFAULT_SPLASH_DELAY_MS};
use card_core::AppConfig;
use clap::Parser;

/// Command-line arguments for cardcraft.
#[derive(Debug, Clone, Parser)]
#[command(name = "cardcraft")]
#[command(about = "Compose a greeting card from the terminal")]
#[command(version)]
pub struct CliArgs {
    /// How long the splash screen stays up, in milliseconds
    #[arg(long, env = "CARDCRAFT_SPLASH_MS", default_value_t = DEFAULT_SPLASH_DELAY_MS)]
    pub splash_ms: u64,

    /// How long the loading spinner shows before navigating, in milliseconds
    #[arg(long, env = "CARDCRAFT_BUSY_MS", default_value_t = DEFAULT_BUSY_DELAY_MS)]
    pub busy_ms: u64,

    /// Skip every cosmetic delay
    #[arg(long)]
    pub instant: bool,

    /// Print the previewed card as JSON
    #[arg(long)]
    pub json: bool,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Timing handed to the app.
    pub app: AppConfig,
    /// Print the previewed card as JSON.
    pub json: bool,
    /// Command file; stdin when `None`.
    pub script: Option<PathBuf>,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let app = if args.instant {
            AppConfig::instant()
        } else {
            AppConfig {
                splash_delay_ms: args.splash_ms,
                busy_delay_ms: args.busy_ms,
            }
        };
        Self {
            app,
            json: args.json,
            script: args.script,
        }
    }
}
