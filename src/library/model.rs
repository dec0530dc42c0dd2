use std::path::{Path, PathBuf};

use crate::metadata::{TrackInfo, file_stem_title};

use super::scan::relative_path;

/// One audio file as seen by a playlist build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrackRecord {
    pub path: PathBuf,
    /// Playlist entry and folder-diff identity key.
    pub relative_path: PathBuf,
    /// `None` when the file could not be decoded.
    pub duration_secs: Option<u64>,
    pub artist: String,
    pub title: String,
}

impl AudioTrackRecord {
    pub fn new(path: &Path, base: &Path, info: Option<TrackInfo>, unknown_artist: &str) -> Self {
        let relative_path = relative_path(path, base);
        match info {
            Some(info) => Self {
                path: path.to_path_buf(),
                relative_path,
                duration_secs: Some(info.duration_secs),
                artist: info.artist,
                title: info.title,
            },
            None => Self {
                path: path.to_path_buf(),
                relative_path,
                duration_secs: None,
                artist: unknown_artist.to_string(),
                title: file_stem_title(path),
            },
        }
    }

    pub fn is_decoded(&self) -> bool {
        self.duration_secs.is_some()
    }
}
