use std::fmt;
use std::path::Path;

use super::differ::FolderDiff;

/// Human-readable listing of a [`FolderDiff`].
///
/// ```text
/// Files only in Folder A (/media/walkman):
/// Album/01.mp3
///
/// Files only in Folder B (/home/me/Music):
/// Other/02.flac
/// ```
pub struct DiffReport<'a> {
    diff: &'a FolderDiff,
    folder_a: &'a Path,
    folder_b: &'a Path,
}

impl<'a> DiffReport<'a> {
    pub fn new(diff: &'a FolderDiff, folder_a: &'a Path, folder_b: &'a Path) -> Self {
        Self {
            diff,
            folder_a,
            folder_b,
        }
    }
}

impl fmt::Display for DiffReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Files only in Folder A ({}):", self.folder_a.display())?;
        for path in &self.diff.only_in_a {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;
        writeln!(f, "Files only in Folder B ({}):", self.folder_b.display())?;
        for path in &self.diff.only_in_b {
            writeln!(f, "{}", path.display())?;
        }
        Ok(())
    }
}
