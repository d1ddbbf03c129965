use anyhow::Result;
use bundlesize_entry_size::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bundlesize")]
#[command(about = "Size reports for bundler build output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report the transitive raw and brotli size of each entry bundle
    EntrySize(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::EntrySize(cfg) => {
            info!("Running entry size report with prefix '{}'", cfg.prefix);
            debug!("Config: manifest={:?}, root={:?}", cfg.manifest, cfg.root);

            let report = bundlesize_entry_size::run_entry_size_report(&cfg)?;
            debug!("Sized {} chunks", report.sized_chunks);

            match cfg.format {
                OutputFormat::Json => {
                    bundlesize_entry_size::print_report_json(&mut stdout, &report)?;
                }
                OutputFormat::Text => {
                    bundlesize_entry_size::print_report(&mut stdout, &report)?;
                    stdout.flush()?;

                    // stdout carries only the report, the footer goes to stderr
                    let elapsed_ms = start.elapsed().as_millis();
                    eprintln!(
                        "\n{} Finished in {}ms on {} entries.",
                        "●".bright_blue(),
                        elapsed_ms.to_string().cyan(),
                        report.entries_measured.to_string().cyan()
                    );
                }
            }

            Ok(())
        }
    }
}
