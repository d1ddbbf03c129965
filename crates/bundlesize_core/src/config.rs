use anyhow::{Result, anyhow};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::manifest::Manifest;

const MANIFEST_FILE: &str = "manifest.json";
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

pub fn find_git_root() -> Result<PathBuf> {
    find_git_root_from(&env::current_dir()?)
}

pub fn find_git_root_from(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = start.to_path_buf();
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}

/// Finds a bundler manifest below `root`.
///
/// Build output is usually gitignored, so ignore files are not honoured here.
/// `.vite/manifest.json` beats a bare `manifest.json`, and shallower paths win
/// within each kind. A `manifest.json` that does not parse as a build manifest
/// (a web app manifest, say) is skipped.
pub fn find_manifest(root: &Path) -> Result<PathBuf> {
    debug!("Searching for build manifest under {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| {
            !entry.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name))
        })
        .build();

    let mut candidates: Vec<(u8, usize, PathBuf)> = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.file_name().and_then(|n| n.to_str()) != Some(MANIFEST_FILE) || !path.is_file() {
            continue;
        }

        if !looks_like_build_manifest(path) {
            trace!("Skipping non-build manifest: {}", path.display());
            continue;
        }

        let in_vite_dir = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .is_some_and(|n| n == ".vite");
        let rank = if in_vite_dir { 0 } else { 1 };
        trace!("Found manifest candidate (rank {}): {}", rank, path.display());
        candidates.push((rank, entry.depth(), path.to_path_buf()));
    }

    candidates.sort();
    match candidates.into_iter().next() {
        Some((_, _, path)) => {
            debug!("Using manifest at {}", path.display());
            Ok(path)
        }
        None => Err(anyhow!("No build manifest found under {}", root.display())),
    }
}

fn looks_like_build_manifest(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => Manifest::from_json(&content, PathBuf::new()).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BUILD_MANIFEST: &str = r#"{ "src/main.ts": { "file": "assets/main.js", "isEntry": true } }"#;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_find_git_root_from_subdir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let subdir = root.join("src").join("components");
        fs::create_dir_all(&subdir).unwrap();

        let git_root = find_git_root_from(&subdir).unwrap();
        assert_eq!(git_root, root);
    }

    #[test]
    fn test_find_manifest_prefers_vite_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "dist/manifest.json", BUILD_MANIFEST);
        let vite = create_test_file(root, "dist/.vite/manifest.json", BUILD_MANIFEST);

        assert_eq!(find_manifest(root).unwrap(), vite);
    }

    #[test]
    fn test_find_manifest_prefers_shallow_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "packages/app/dist/manifest.json", BUILD_MANIFEST);
        let shallow = create_test_file(root, "dist/manifest.json", BUILD_MANIFEST);

        assert_eq!(find_manifest(root).unwrap(), shallow);
    }

    #[test]
    fn test_find_manifest_includes_gitignored_output() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        create_test_file(root, ".gitignore", "dist\n");
        let manifest = create_test_file(root, "dist/.vite/manifest.json", BUILD_MANIFEST);

        assert_eq!(find_manifest(root).unwrap(), manifest);
    }

    #[test]
    fn test_find_manifest_skips_web_app_manifest_and_node_modules() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "public/manifest.json", r#"{ "name": "App", "icons": [] }"#);
        create_test_file(root, "node_modules/pkg/dist/.vite/manifest.json", BUILD_MANIFEST);

        assert!(find_manifest(root).is_err());
    }
}
