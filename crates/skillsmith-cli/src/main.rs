//! skillsmith command-line interface.
//!
//! Thin I/O wrapper around the converter core: reads a source document
//! from disk or stdin, runs a conversion, and either prints the SKILL.md
//! document or writes the packaged directory tree.
//!
//! # Examples
//!
//! ```bash
//! # Print the SKILL.md for an OpenAPI spec
//! skillsmith convert --source-type openapi petstore.json
//!
//! # Write the packaged skill directory
//! skillsmith convert --source-type rest-api config.json --out ./skills
//!
//! # Validate an existing skill document
//! skillsmith validate ./skills/petstore/SKILL.md
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Convert API descriptions into Claude Code skills.
#[derive(Parser, Debug)]
#[command(name = "skillsmith")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an API description into a skill.
    ///
    /// Reads a JSON source document (MCP manifest, REST API config, or
    /// OpenAPI spec) and prints the generated SKILL.md, or writes the
    /// packaged skill directory when --out is given.
    Convert {
        /// Path to the source document; reads stdin when omitted
        source: Option<PathBuf>,

        /// Source format: mcp, rest-api, or openapi
        #[arg(short = 't', long = "source-type")]
        source_type: String,

        /// Write the packaged skill directory under this path instead of
        /// printing SKILL.md
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the full conversion envelope as JSON
        #[arg(long)]
        json: bool,

        /// Skip supporting documentation files
        #[arg(long)]
        no_docs: bool,
    },

    /// Validate an existing SKILL.md document.
    Validate {
        /// Path to the SKILL.md file
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            source,
            source_type,
            out,
            json,
            no_docs,
        } => commands::convert::run(source.as_deref(), &source_type, out.as_deref(), json, no_docs),
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
