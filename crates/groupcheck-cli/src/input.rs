//! Input discovery: files, directories, changed-file lists and stdin.

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Label used for SQL read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Raw SQL source, not yet decoded.
#[derive(Debug, Clone)]
pub struct SqlSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Paths selected for checking.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Listed in a changed-file list but no longer on disk (deleted files).
    pub missing: Vec<PathBuf>,
}

/// Returns true if the path has a `.sql` extension (any case).
pub fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
}

/// Resolves positional paths and an optional changed-file list to SQL files.
///
/// Explicit files are kept whatever their extension; directories are walked
/// recursively for `.sql` files; changed-file entries are kept only when
/// they end in `.sql`. Duplicates are dropped, first occurrence wins.
pub fn discover(paths: &[PathBuf], files_from: Option<&Path>) -> Result<Discovery> {
    let mut discovery = Discovery::default();

    if let Some(list_path) = files_from {
        let list = std::fs::read_to_string(list_path)
            .with_context(|| format!("Failed to read file list: {}", list_path.display()))?;
        for path in changed_sql_paths(&list) {
            if path.is_file() {
                discovery.files.push(path);
            } else {
                discovery.missing.push(path);
            }
        }
    }

    for path in paths {
        if path.is_dir() {
            discovery.files.extend(walk_sql_files(path)?);
        } else {
            discovery.files.push(path.clone());
        }
    }

    let mut seen = std::collections::HashSet::new();
    discovery.files.retain(|path| seen.insert(path.clone()));
    Ok(discovery)
}

/// Picks the `.sql` entries out of a newline-separated changed-file list.
pub fn changed_sql_paths(list: &str) -> Vec<PathBuf> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .filter(|path| is_sql_file(path))
        .collect()
}

fn walk_sql_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if entry.file_type().is_file() && is_sql_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Reads every discovered file.
pub fn read_files(files: &[PathBuf]) -> Result<Vec<SqlSource>> {
    files
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;

            Ok(SqlSource {
                name: path.display().to_string(),
                bytes,
            })
        })
        .collect()
}

/// Read SQL from stdin
pub fn read_stdin() -> Result<SqlSource> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read from stdin")?;

    Ok(SqlSource {
        name: STDIN_NAME.to_string(),
        bytes,
    })
}
