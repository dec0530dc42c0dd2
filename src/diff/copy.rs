use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::library::ensure_directory;
use crate::progress::{CancelToken, Progress};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
}

/// Copy each relative path from `src_root` to `dst_root`, creating parent
/// directories and overwriting existing files.
///
/// Stops at the first failure; files already copied stay in place.
pub(crate) fn copy_missing(
    missing: &[PathBuf],
    src_root: &Path,
    dst_root: &Path,
    cancel: &CancelToken,
    progress: &mut dyn Progress,
) -> Result<CopyReport> {
    ensure_directory(src_root)?;

    let total = missing.len();
    let mut report = CopyReport::default();

    for (index, relative) in missing.iter().enumerate() {
        cancel.check()?;

        let from = src_root.join(relative);
        let to = dst_root.join(relative);
        copy_file(&from, &to).map_err(|source| Error::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        if let Err(err) = copy_timestamps(&from, &to) {
            warn!(path = %to.display(), error = %err, "could not preserve timestamps");
        }

        debug!(from = %from.display(), to = %to.display(), "copied");
        report.copied += 1;
        progress.advance(index + 1, total);
    }

    info!(copied = report.copied, destination = %dst_root.display(), "copied missing files");
    Ok(report)
}

fn copy_file(from: &Path, to: &Path) -> io::Result<u64> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)
}

fn copy_timestamps(from: &Path, to: &Path) -> io::Result<()> {
    let meta = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    open_for_times(to)?.set_times(times)
}

/// The copy carries the source's permission bits, which may be read-only.
/// The owner can set times through a read-only descriptor on Unix.
#[cfg(unix)]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(not(unix))]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::options().write(true).open(path)
}
