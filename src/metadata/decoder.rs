use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

use lofty::file::FileType;
use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use lofty::probe::Probe;

use super::error::MetadataError;

/// Duration and tags as found in the file, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAudioInfo {
    pub duration: Duration,
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// One format's way of reading duration and tags.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<RawAudioInfo, MetadataError>;
}

/// Decoder backed by lofty.
///
/// With a file type hint the matching lofty reader is used directly;
/// without one the format is sniffed from the file content.
#[derive(Debug, Clone, Copy)]
pub struct LoftyDecoder {
    file_type: Option<FileType>,
}

impl LoftyDecoder {
    pub fn new(file_type: FileType) -> Self {
        Self {
            file_type: Some(file_type),
        }
    }

    pub fn sniffing() -> Self {
        Self { file_type: None }
    }
}

impl AudioDecoder for LoftyDecoder {
    fn decode(&self, path: &Path) -> Result<RawAudioInfo, MetadataError> {
        let probe = Probe::open(path)?;
        let probe = match self.file_type {
            Some(file_type) => probe.set_file_type(file_type),
            None => probe.guess_file_type()?,
        };

        if probe.file_type().is_none() {
            return Err(MetadataError::Unsupported(path.display().to_string()));
        }

        let tagged = probe.read()?;
        let duration = tagged.properties().duration();

        let (artist, title) = match tagged.primary_tag().or_else(|| tagged.first_tag()) {
            Some(tag) => (non_blank(tag.artist()), non_blank(tag.title())),
            None => (None, None),
        };

        Ok(RawAudioInfo {
            duration,
            artist,
            title,
        })
    }
}

fn non_blank(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.into_owned())
}
