use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{LibrarySettings, PathStyle, PlaylistSettings};
use crate::error::{Error, Result};
use crate::library::{AudioTrackRecord, ensure_directory, list_subfolders, scan_audio_files};
use crate::metadata::MetadataSource;
use crate::progress::{CancelToken, Progress, silent};

use super::filter::TitleFilter;
use super::m3u::{
    PLAYLIST_EXTENSION, PlaylistDocument, PlaylistEntry, with_playlist_extension, write_playlist,
};

/// One playlist for a whole tree.
#[derive(Debug, Clone)]
pub struct PlaylistRequest {
    /// Directory to scan.
    pub root: PathBuf,
    /// Directory the entries are relative to; the scanned root when `None`.
    pub base_dir: Option<PathBuf>,
    /// Playlist file; `.m3u8` is appended when missing.
    pub output: PathBuf,
    pub exclude_instrumental: bool,
}

/// One playlist per immediate subfolder of `root`, written to `output_dir`.
#[derive(Debug, Clone)]
pub struct SubfolderRequest {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub exclude_instrumental: bool,
}

#[derive(Debug, Clone)]
pub enum PlaylistJob {
    Single(PlaylistRequest),
    PerSubfolder(SubfolderRequest),
}

/// What was written for one playlist file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub path: PathBuf,
    /// Audio files found for this playlist.
    pub scanned: usize,
    /// Entries written (decoded and not excluded).
    pub entries: usize,
}

pub struct PlaylistBuilder<'a> {
    metadata: &'a dyn MetadataSource,
    library: &'a LibrarySettings,
    exclusions: TitleFilter,
    unknown_artist: String,
    path_style: PathStyle,
    cancel: CancelToken,
}

impl<'a> PlaylistBuilder<'a> {
    pub fn new(
        metadata: &'a dyn MetadataSource,
        library: &'a LibrarySettings,
        playlist: &PlaylistSettings,
    ) -> Self {
        Self {
            metadata,
            library,
            exclusions: TitleFilter::from_settings(playlist),
            unknown_artist: playlist.unknown_artist.clone(),
            path_style: playlist.path_style,
            cancel: CancelToken::default(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Audio files under `root`, in traversal order.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        scan_audio_files(root, self.library)
    }

    /// Turn `files` into a playlist relative to `base`.
    ///
    /// Undecodable files are dropped, as are excluded titles when
    /// `exclude_instrumental` is set. `progress` sees every file, kept or not.
    pub fn build(
        &self,
        files: &[PathBuf],
        base: &Path,
        exclude_instrumental: bool,
        progress: &mut dyn Progress,
    ) -> Result<PlaylistDocument> {
        let total = files.len();
        let mut document = PlaylistDocument::new();

        for (index, file) in files.iter().enumerate() {
            self.cancel.check()?;

            let info = self.metadata.read_metadata(file);
            let record = AudioTrackRecord::new(file, base, info, &self.unknown_artist);

            if exclude_instrumental && record.is_decoded() && self.exclusions.matches(&record.title)
            {
                debug!(path = %file.display(), title = %record.title, "excluded by title");
            } else if let Some(entry) = PlaylistEntry::from_record(&record, self.path_style) {
                document.push(entry);
            }

            progress.advance(index + 1, total);
        }

        Ok(document)
    }

    pub fn write_single(
        &self,
        request: &PlaylistRequest,
        progress: &mut dyn Progress,
    ) -> Result<PlaylistSummary> {
        if request.output.as_os_str().is_empty() {
            return Err(Error::MissingInput("playlist file"));
        }
        ensure_directory(&request.root)?;
        let base = request.base_dir.as_deref().unwrap_or(&request.root);
        ensure_directory(base)?;

        self.cancel.check()?;
        let output = with_playlist_extension(&request.output);
        let files = self.scan(&request.root);
        let document = self.build(&files, base, request.exclude_instrumental, progress)?;
        self.write(&document, &output, files.len())
    }

    /// Playlists for every subfolder that holds at least one audio file.
    ///
    /// Entries are relative to their own subfolder. `progress` counts
    /// subfolders, not files.
    pub fn write_per_subfolder(
        &self,
        request: &SubfolderRequest,
        progress: &mut dyn Progress,
    ) -> Result<Vec<PlaylistSummary>> {
        if request.output_dir.as_os_str().is_empty() {
            return Err(Error::MissingInput("output directory"));
        }
        ensure_directory(&request.root)?;
        ensure_directory(&request.output_dir)?;
        self.cancel.check()?;

        let mut qualifying = Vec::new();
        for folder in list_subfolders(&request.root, self.library)? {
            let files = self.scan(&folder);
            if files.is_empty() {
                debug!(folder = %folder.display(), "no audio files; skipping");
            } else {
                qualifying.push((folder, files));
            }
        }

        let total = qualifying.len();
        let mut summaries = Vec::with_capacity(total);
        for (index, (folder, files)) in qualifying.iter().enumerate() {
            self.cancel.check()?;

            let mut file_name = folder.file_name().unwrap_or_default().to_os_string();
            file_name.push(".");
            file_name.push(PLAYLIST_EXTENSION);
            let output = request.output_dir.join(file_name);

            let document = self.build(files, folder, request.exclude_instrumental, &mut silent)?;
            summaries.push(self.write(&document, &output, files.len())?);

            progress.advance(index + 1, total);
        }

        Ok(summaries)
    }

    pub fn run(&self, job: &PlaylistJob, progress: &mut dyn Progress) -> Result<Vec<PlaylistSummary>> {
        match job {
            PlaylistJob::Single(request) => Ok(vec![self.write_single(request, progress)?]),
            PlaylistJob::PerSubfolder(request) => self.write_per_subfolder(request, progress),
        }
    }

    fn write(&self, document: &PlaylistDocument, output: &Path, scanned: usize) -> Result<PlaylistSummary> {
        write_playlist(document, output).map_err(|source| Error::PlaylistWrite {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            path = %output.display(),
            scanned,
            entries = document.len(),
            "wrote playlist"
        );

        Ok(PlaylistSummary {
            path: output.to_path_buf(),
            scanned,
            entries: document.len(),
        })
    }
}
