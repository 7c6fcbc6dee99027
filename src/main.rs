//! Typography Tokens CLI - Main Entry Point
//!
//! Looks up and exports the typography design tokens.

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use typography_tokens::config::{ExportConfig, run_export};
use typography_tokens::export::Format;
use typography_tokens::{Result, Section, typography};

/// Typography design tokens: lookup and export
#[derive(Parser)]
#[command(name = "typography-tokens")]
#[command(author, version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single token value, e.g. `size.2xl`
    Get {
        /// Token path as <section>.<key>
        path: String,
    },

    /// List tokens as `section.key = value`
    List {
        /// Only list one section (size, weight, lineHeight)
        #[arg(long)]
        section: Option<Section>,
    },

    /// Export the token table
    Export(ExportArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Output format (json, toml, css, schema)
    #[arg(short, long)]
    format: Option<Format>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export config file; defaults to the platform config directory
    #[arg(short, long, env = "TYPOGRAPHY_TOKENS_CONFIG")]
    config: Option<PathBuf>,

    /// Prefix for CSS custom property names
    #[arg(long)]
    prefix: Option<String>,

    /// Single-line output
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so exported output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Get { path } => {
            println!("{}", typography().lookup(&path)?);
        }
        Commands::List { section } => {
            for (s, key, value) in typography().entries() {
                if section.is_none_or(|wanted| wanted == s) {
                    println!("{s}.{key} = {value}");
                }
            }
        }
        Commands::Export(args) => {
            let mut config = match &args.config {
                Some(path) => ExportConfig::load(path)?,
                None => ExportConfig::try_load_default()?,
            };

            config.apply_overrides(args.format, args.output, args.prefix, args.compact);

            let rendered = run_export(&config)?;
            if config.output.is_none() {
                print!("{rendered}");
                if !rendered.ends_with('\n') {
                    println!();
                }
            }
        }
    }

    Ok(())
}
