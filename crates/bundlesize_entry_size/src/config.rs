use anyhow::Result;
use bundlesize_core::DEFAULT_BROTLI_QUALITY;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "entry-size")]
#[command(about = "Report the transitive raw and brotli size of each entry bundle")]
pub struct Config {
    /// Path to the bundler manifest (searched for under --root when omitted)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Directory to search for a manifest (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Only entries whose id starts with this prefix are reported
    #[arg(long, default_value = "src/")]
    pub prefix: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Brotli quality used for the compressed estimate
    #[arg(long, default_value_t = DEFAULT_BROTLI_QUALITY, value_parser = clap::value_parser!(u32).range(0..=11))]
    pub quality: u32,
}

impl Config {
    /// Resolve the manifest path, discovering it when none was given
    pub fn manifest_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.manifest {
            debug!("Using provided manifest: {:?}", path);
            return Ok(path.clone());
        }

        let root = if let Some(r) = &self.root {
            debug!("Using provided root directory: {:?}", r);
            r.clone()
        } else {
            debug!("No root provided, searching for git root");
            match bundlesize_core::find_git_root() {
                Ok(root) => root,
                Err(e) => {
                    warn!("{}, searching the current directory instead", e);
                    env::current_dir()?
                }
            }
        };
        info!("Searching for manifest under {}", root.display());

        bundlesize_core::find_manifest(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("entry-size").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&[]);
        assert_eq!(cfg.prefix, "src/");
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.quality, 11);
        assert!(cfg.manifest.is_none());
    }

    #[test]
    fn test_quality_out_of_range_is_rejected() {
        assert!(Config::try_parse_from(["entry-size", "--quality", "12"]).is_err());
    }

    #[test]
    fn test_json_format() {
        let cfg = parse(&["--format", "json", "--prefix", "app/"]);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.prefix, "app/");
    }

    #[test]
    fn test_manifest_path_prefers_explicit_manifest() {
        let cfg = parse(&["--manifest", "build/manifest.json", "--root", "/nowhere"]);
        assert_eq!(cfg.manifest_path().unwrap(), PathBuf::from("build/manifest.json"));
    }

    #[test]
    fn test_manifest_path_discovers_under_root() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("dist/.vite");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("manifest.json"), "{}").unwrap();

        let root = temp_dir.path().to_string_lossy().to_string();
        let cfg = parse(&["--root", &root]);
        assert_eq!(cfg.manifest_path().unwrap(), dir.join("manifest.json"));
    }
}
