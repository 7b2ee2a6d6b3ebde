//! msgbind CLI - Rust bindings for RPC schemas
//!
//! Commands:
//! - `msgbind generate` - Generate declarations for a service description
//! - `msgbind check` - Validate a service description without writing anything

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "msgbind")]
#[command(author, version, about = "Rust bindings for RPC schemas", long_about = None)]
struct Cli {
    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust declarations for a service
    Generate {
        /// Service description (JSON field tree)
        #[arg(short, long)]
        schema: PathBuf,

        /// Enum code maps (JSON)
        #[arg(short, long)]
        meta: Option<PathBuf>,

        /// Output path for the generated Rust file
        #[arg(short, long)]
        output: PathBuf,

        /// Generator configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a service description
    Check {
        /// Service description (JSON field tree)
        #[arg(short, long)]
        schema: PathBuf,

        /// Enum code maps (JSON)
        #[arg(short, long)]
        meta: Option<PathBuf>,

        /// Generator configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Generate {
            schema,
            meta,
            output,
            config,
        } => {
            let command_line: Vec<String> = std::env::args().collect();
            generate::run(
                &generate::Inputs::load(&schema, meta.as_deref(), config.as_deref())?,
                &output,
                &command_line.join(" "),
            )?;
        }
        Commands::Check {
            schema,
            meta,
            config,
        } => {
            generate::check(&generate::Inputs::load(
                &schema,
                meta.as_deref(),
                config.as_deref(),
            )?)?;
        }
    }

    Ok(())
}
