use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

/// Case-insensitive match of the file extension against `extensions`
/// (lower-case, without dots).
pub fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Fails with [`Error::NotADirectory`] unless `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory(path.to_path_buf()))
    }
}

/// Recursively collect the audio files under `root`, in traversal order.
///
/// Entries that cannot be read are skipped.
pub fn scan_audio_files(root: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let extensions = settings.normalized_extensions();

    let mut walker = WalkDir::new(root).follow_links(settings.follow_links);
    if settings.sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        // Reports the link target only when links are followed.
        if entry.file_type().is_file() && is_audio_file(entry.path(), &extensions) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "scanned audio files");
    files
}

/// Immediate child directories of `root` (not recursive).
pub fn list_subfolders(root: &Path, settings: &LibrarySettings) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(root).map_err(|source| Error::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut folders: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| settings.include_hidden || !is_hidden(path))
        .collect();

    if settings.sorted {
        folders.sort();
    }
    Ok(folders)
}

/// `path` relative to `base`.
///
/// Tries a lexical strip first, then again with both paths canonicalized.
/// When `base` is not an ancestor of `path` at all, the absolute path is
/// returned and a warning is logged.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    if let Ok(rel) = path.strip_prefix(base) {
        return rel.to_path_buf();
    }

    let canonical_path = path.canonicalize();
    if let (Ok(p), Ok(b)) = (&canonical_path, base.canonicalize()) {
        if let Ok(rel) = p.strip_prefix(&b) {
            return rel.to_path_buf();
        }
    }

    warn!(
        path = %path.display(),
        base = %base.display(),
        "file is outside the base directory; using its absolute path"
    );
    canonical_path.unwrap_or_else(|_| path.to_path_buf())
}
