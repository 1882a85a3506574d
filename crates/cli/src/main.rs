//! FFIScope CLI — thin shell over the [`ffiscope_core`] library crate.
//!
//! Checks one Rust source file's `extern "C"` declarations against the libc
//! and Rust primitive vocabularies and exits non-zero on the first fatal
//! finding. Warnings stream through tracing (colored by level) and never
//! change the exit status.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use ffiscope_core::error::CheckError;
use ffiscope_core::{build_checker, check_file, load_config, CheckConfig};

// ---------------------------------------------------------------------------
// CLI definition (clap derive)
// ---------------------------------------------------------------------------

/// Static checker for hand-written extern "C" declarations.
#[derive(Parser)]
#[command(name = "ffiscope", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a Rust source file's extern "C" declarations
    Check {
        /// Source file to check
        file: PathBuf,

        /// Directory holding .ffiscope.toml (default: the file's directory)
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
    /// List the built-in type vocabularies
    Types,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ffiscope=info".parse().unwrap())
                .add_directive("ffiscope_core=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, config_dir } => {
            let dir = config_dir
                .or_else(|| file.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));
            let config = load_config(&dir);

            let report = match check_file(&file, &config) {
                Ok(report) => report,
                Err(err) => {
                    tracing::error!("{err}");
                    let code = match err {
                        CheckError::SourceUnavailable { .. } => 2,
                        _ => 1,
                    };
                    std::process::exit(code);
                }
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else {
                for sig in &report.functions {
                    let ret = sig.return_type.as_deref().unwrap_or("()");
                    println!("{:<32} ({}) -> {}", sig.name, sig.arg_types.join(", "), ret);
                }
                if report.is_clean() {
                    tracing::info!("Success: {} declarations checked", report.functions.len());
                } else {
                    tracing::info!(
                        "Success: {} declarations checked, {} warnings",
                        report.functions.len(),
                        report.warnings.len()
                    );
                }
            }
        }
        Commands::Types => {
            let checker = build_checker(&CheckConfig::default());
            if cli.json {
                let output = serde_json::json!({
                    "libc": checker.libc_vocabulary().sorted_names(),
                    "rust": checker.rust_vocabulary().sorted_names(),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!("libc types ({}):", checker.libc_vocabulary().len());
                for name in checker.libc_vocabulary().sorted_names() {
                    println!("  {name}");
                }
                println!("\nRust types ({}):", checker.rust_vocabulary().len());
                for name in checker.rust_vocabulary().sorted_names() {
                    println!("  {name}");
                }
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
