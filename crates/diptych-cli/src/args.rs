//! Command-line argument definitions for the Diptych CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each [`Command`] is one explicit conversion; configuration
//! file selection and logging verbosity apply to all of them.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Diptych diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// The conversion to run.
///
/// Engines are named by tag: `mermaid`, `plantuml`, `graphviz` or `d2`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse diagram text and write it out in another language
    Convert {
        /// Path to the input diagram
        input: String,

        /// Language of the input; guessed from the file extension when omitted
        #[arg(long)]
        from: Option<String>,

        /// Language to write
        #[arg(long)]
        to: String,

        /// Output path; standard output when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse diagram text and save it as a JSON snapshot
    Export {
        /// Path to the input diagram
        input: String,

        /// Language of the input; guessed from the file extension when omitted
        #[arg(long)]
        engine: Option<String>,

        /// Output path; standard output when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Load a JSON snapshot and write diagram text generated from its graph
    Import {
        /// Path to the snapshot file
        snapshot: String,

        /// Language to write; the snapshot's own engine when omitted
        #[arg(long)]
        engine: Option<String>,

        /// Output path; standard output when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}
