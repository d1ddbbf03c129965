//! Entry bundle size reporting for bundler build manifests.
//!
//! For every chunk a manifest flags as an entry, this crate sums the raw and
//! brotli-compressed size of the entry's artifact and everything it statically
//! imports. Chunks shared between entries are read and compressed once.
//!
//! # Examples
//!
//! ```no_run
//! use bundlesize_entry_size::{Config, OutputFormat, run_entry_size_report};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     manifest: Some(std::path::PathBuf::from("dist/.vite/manifest.json")),
//!     root: None,
//!     prefix: "src/".to_string(),
//!     format: OutputFormat::Text,
//!     quality: 11,
//! };
//!
//! let report = run_entry_size_report(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! bundlesize_entry_size::print_report(&mut stdout, &report)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod checker;
mod config;
mod reporter;
#[cfg(test)]
mod testing;
mod types;

// Re-export public API
pub use aggregator::{SizeCache, SizeContext, compute_size};
pub use checker::{measure_entries, run_entry_size_report};
pub use config::{Config, OutputFormat};
pub use reporter::{print_report, print_report_json};
pub use types::{EntrySize, SizeReport};
