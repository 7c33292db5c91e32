//! Input ordering strategies.
//!
//! The collage places images strictly in the order produced here, so the
//! order is explicit rather than whatever the file system happens to list.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::scan::is_supported;
use crate::{Result, SourceError};

static RE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+|\D+").unwrap());

/// How the scanned files are ordered before layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrderStrategy {
    /// Byte-wise file name order.
    #[default]
    Lexicographic,
    /// Digit runs compared by numeric value: `2.jpg` before `10.jpg`.
    Natural,
    /// Explicit list of file names, one per line or a JSON array.
    Manifest(PathBuf),
}

/// Order `files` (found in `dir`) according to `strategy`.
pub fn order_files(
    mut files: Vec<PathBuf>,
    dir: &Path,
    strategy: &OrderStrategy,
) -> Result<Vec<PathBuf>> {
    match strategy {
        OrderStrategy::Lexicographic => {
            files.sort_by(|a, b| file_name(a).cmp(&file_name(b)));
            Ok(files)
        }
        OrderStrategy::Natural => {
            files.sort_by(|a, b| {
                let (a, b) = (file_name(a), file_name(b));
                natural_cmp(&a, &b).then_with(|| a.cmp(&b))
            });
            Ok(files)
        }
        OrderStrategy::Manifest(manifest) => {
            let entries = read_manifest(manifest)?;
            Ok(apply_manifest(files, dir, &entries))
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compare names run by run, treating digit runs as numbers.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = RE_RUNS.find_iter(a).map(|m| m.as_str());
    let mut right = RE_RUNS.find_iter(b).map(|m| m.as_str());

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (is_digits(l), is_digits(r)) {
                    (true, true) => numeric_cmp(l, r),
                    _ => l.cmp(r),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Compare arbitrarily long digit strings without parsing them.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Read manifest entries: a JSON array for `.json` files, otherwise one
/// name per line with blank lines and `#` comments ignored.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries = if is_json {
        serde_json::from_str::<Vec<String>>(&content).map_err(|e| SourceError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect()
    };

    debug!(path = %path.display(), entries = entries.len(), "Loaded manifest");
    Ok(entries)
}

/// Keep only manifest-listed files, in manifest order.
fn apply_manifest(files: Vec<PathBuf>, dir: &Path, entries: &[String]) -> Vec<PathBuf> {
    let available: HashSet<PathBuf> = files.into_iter().collect();
    let mut used = HashSet::new();
    let mut ordered = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = dir.join(entry.trim_start_matches("./"));
        if !is_supported(&path) {
            warn!(entry = %entry, "Manifest entry has an unsupported format, skipping");
            continue;
        }
        if !available.contains(&path) {
            warn!(entry = %entry, "Manifest entry not found in input directory, skipping");
            continue;
        }
        if !used.insert(path.clone()) {
            warn!(entry = %entry, "Duplicate manifest entry, skipping");
            continue;
        }
        ordered.push(path);
    }

    for path in available.difference(&used) {
        debug!(path = %path.display(), "File not listed in manifest, excluded");
    }
    ordered
}
