//! CLI argument parsing and plain-text reports
//!
//! Uses clap for argument parsing with derive macros. The non-TUI
//! subcommands print from the same content store the dashboard uses.

use crate::content::{ContentEntry, ContentStore};
use crate::errors::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fmt::Write;
use std::io;
use std::path::PathBuf;

/// Terminal dashboard for GRS certification in garment factories
#[derive(Parser, Debug)]
#[command(name = "grs-dashboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/grs-dashboard/config.toml)
    #[arg(short, long, env = "GRS_DASHBOARD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Frame rate cap in frames per second (default: 30.0)
    #[arg(short = 'F', long, default_value_t = 30.0, global = true)]
    pub frame_rate: f64,

    /// Do not capture the mouse (overrides the config file)
    #[arg(long, default_value_t = false, global = true)]
    pub no_mouse: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every topic key and title
    Topics,

    /// Print one topic
    Show {
        /// Topic key (see `topics`)
        key: String,

        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the whole topic table as JSON
    Export,

    /// Print an example config file
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "grs-dashboard", &mut io::stdout());
}

/// Two-column key/title listing
pub fn format_topics(content: &ContentStore) -> String {
    let width = content.iter().map(|e| e.key.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in content.iter() {
        let _ = writeln!(out, "{:<width$}  {}", entry.key, entry.title);
    }
    out
}

/// A single topic as text or JSON
pub fn format_entry(entry: &ContentEntry, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(entry)?);
    }
    Ok(format!("{}\n\n{}", entry.title, entry.body))
}

/// The whole table as a JSON array
pub fn export_json(content: &ContentStore) -> Result<String> {
    let entries: Vec<&ContentEntry> = content.iter().collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
