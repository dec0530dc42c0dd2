use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::config::PathStyle;
use crate::library::AudioTrackRecord;

/// First line of every playlist.
pub const HEADER: &str = "#EXTM3U";

/// Extension given to every playlist file.
pub const PLAYLIST_EXTENSION: &str = "m3u8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub duration_secs: u64,
    pub artist: String,
    pub title: String,
    /// Path line, relative to the playlist's base directory.
    pub location: String,
}

impl PlaylistEntry {
    /// `None` for records whose metadata could not be decoded.
    pub fn from_record(record: &AudioTrackRecord, style: PathStyle) -> Option<Self> {
        let duration_secs = record.duration_secs?;
        Some(Self {
            duration_secs,
            artist: record.artist.clone(),
            title: record.title.clone(),
            location: format_location(&record.relative_path, style),
        })
    }

    /// `#EXTINF:<seconds>,<artist> - <title>`
    pub fn extinf_line(&self) -> String {
        format!("#EXTINF:{},{} - {}", self.duration_secs, self.artist, self.title)
    }
}

/// An ordered M3U8 playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDocument {
    entries: Vec<PlaylistEntry>,
}

impl PlaylistDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PlaylistEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header, then one metadata line and one path line per entry, `\n` terminated.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{HEADER}")?;
        for entry in &self.entries {
            writeln!(out, "{}", entry.extinf_line())?;
            writeln!(out, "{}", entry.location)?;
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Create or truncate `path` and write `doc` through one buffered handle.
///
/// An error part way through leaves a truncated file behind.
pub fn write_playlist(doc: &PlaylistDocument, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    doc.write_to(&mut out)?;
    out.flush()
}

/// `path` with `.m3u8` appended unless it already ends in it (any case).
pub fn with_playlist_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(PLAYLIST_EXTENSION))
        .unwrap_or(false);

    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(PLAYLIST_EXTENSION);
        PathBuf::from(name)
    }
}

pub fn format_location(relative: &Path, style: PathStyle) -> String {
    let text = relative.to_string_lossy();
    match style {
        PathStyle::Native => text.into_owned(),
        PathStyle::Forward => text.replace(MAIN_SEPARATOR, "/"),
    }
}
