use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LibrarySettings;
use crate::error::Result;
use crate::library::{ensure_directory, scan_audio_files};
use crate::progress::{CancelToken, Progress};

use super::copy::{CopyReport, copy_missing};

/// Relative paths present on one side only, each list sorted by path string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderDiff {
    pub only_in_a: Vec<PathBuf>,
    pub only_in_b: Vec<PathBuf>,
}

impl FolderDiff {
    pub fn is_in_sync(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }

    /// The files a copy in `direction` would bring across.
    pub fn missing_for(&self, direction: SyncDirection) -> &[PathBuf] {
        match direction {
            SyncDirection::AToB => &self.only_in_a,
            SyncDirection::BToA => &self.only_in_b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Copy files only in A into B.
    AToB,
    /// Copy files only in B into A.
    BToA,
}

/// Compares two music trees by relative path and copies the difference.
///
/// Only presence is compared; two files with the same relative path are
/// equal whatever their content.
pub struct FolderDiffer<'a> {
    library: &'a LibrarySettings,
    cancel: CancelToken,
}

impl<'a> FolderDiffer<'a> {
    pub fn new(library: &'a LibrarySettings) -> Self {
        Self {
            library,
            cancel: CancelToken::default(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Audio files under `root`, relative to `root`.
    pub fn index_tree(&self, root: &Path) -> Result<BTreeSet<PathBuf>> {
        ensure_directory(root)?;
        let index: BTreeSet<PathBuf> = scan_audio_files(root, self.library)
            .into_iter()
            .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect();
        debug!(root = %root.display(), files = index.len(), "indexed tree");
        Ok(index)
    }

    /// Both directories are checked before either is walked.
    pub fn diff(&self, folder_a: &Path, folder_b: &Path) -> Result<FolderDiff> {
        ensure_directory(folder_a)?;
        ensure_directory(folder_b)?;

        let set_a = self.index_tree(folder_a)?;
        let set_b = self.index_tree(folder_b)?;

        let diff = FolderDiff {
            only_in_a: sorted_by_path_string(set_a.difference(&set_b)),
            only_in_b: sorted_by_path_string(set_b.difference(&set_a)),
        };
        info!(
            only_in_a = diff.only_in_a.len(),
            only_in_b = diff.only_in_b.len(),
            "compared folders"
        );
        Ok(diff)
    }

    pub fn copy_missing(
        &self,
        missing: &[PathBuf],
        src_root: &Path,
        dst_root: &Path,
        progress: &mut dyn Progress,
    ) -> Result<CopyReport> {
        copy_missing(missing, src_root, dst_root, &self.cancel, progress)
    }

    /// Copy one side's missing files into the other folder.
    pub fn reconcile(
        &self,
        diff: &FolderDiff,
        folder_a: &Path,
        folder_b: &Path,
        direction: SyncDirection,
        progress: &mut dyn Progress,
    ) -> Result<CopyReport> {
        let (src, dst) = match direction {
            SyncDirection::AToB => (folder_a, folder_b),
            SyncDirection::BToA => (folder_b, folder_a),
        };
        self.copy_missing(diff.missing_for(direction), src, dst, progress)
    }
}

fn sorted_by_path_string<'p>(paths: impl Iterator<Item = &'p PathBuf>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = paths.cloned().collect();
    paths.sort_by(|x, y| x.as_os_str().cmp(y.as_os_str()));
    paths
}
