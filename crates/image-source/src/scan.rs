//! Directory scanning and extension filtering.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Result, SourceError};

/// File extensions accepted as input, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tif", "tiff"];

/// Files found in an input directory, in directory-listing order.
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    pub images: Vec<PathBuf>,
    /// Regular files skipped because of their extension.
    pub unsupported: Vec<PathBuf>,
}

/// Whether `path` has a supported image extension.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// List supported image files directly inside `dir`.
///
/// Subdirectories and hidden files are ignored. Files with other extensions
/// are logged and returned in [`ScanResult::unsupported`].
pub fn scan_directory(dir: &Path) -> Result<ScanResult> {
    if !dir.is_dir() {
        return Err(SourceError::DirectoryNotFound(dir.to_path_buf()));
    }

    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut result = ScanResult::default();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();

        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden || !path.is_file() {
            debug!(path = %path.display(), "Skipping non-image entry");
            continue;
        }

        if is_supported(&path) {
            result.images.push(path);
        } else {
            warn!(path = %path.display(), "Skipping file with unsupported format");
            result.unsupported.push(path);
        }
    }

    debug!(
        dir = %dir.display(),
        images = result.images.len(),
        unsupported = result.unsupported.len(),
        "Scanned input directory"
    );
    Ok(result)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fresh, empty directory under the system temp dir.
    pub(crate) fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "image-source-test-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_is_supported_case_insensitive() {
        assert!(is_supported(Path::new("a.jpg")));
        assert!(is_supported(Path::new("a.JPEG")));
        assert!(is_supported(Path::new("dir/b.Png")));
        assert!(is_supported(Path::new("c.webp")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("noext")));
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = temp_dir("scan");
        for name in ["1.jpg", "2.PNG", "readme.txt", ".hidden.png"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("sub.png")).unwrap();

        let result = scan_directory(&dir).unwrap();
        assert_eq!(names(&result.images), vec!["1.jpg", "2.PNG"]);
        assert_eq!(names(&result.unsupported), vec!["readme.txt"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = std::env::temp_dir().join("image-source-test-does-not-exist");
        let err = scan_directory(&dir).unwrap_err();
        assert!(matches!(err, SourceError::DirectoryNotFound(_)));
    }
}
