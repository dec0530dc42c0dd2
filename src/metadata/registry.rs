use std::collections::HashMap;
use std::path::Path;

use lofty::file::FileType;
use tracing::{debug, warn};

use crate::config::PlaylistSettings;

use super::asf::AsfDecoder;
use super::decoder::{AudioDecoder, LoftyDecoder, RawAudioInfo};
use super::error::MetadataError;

/// Metadata for one playable track, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Whole seconds, truncated.
    pub duration_secs: u64,
    pub artist: String,
    pub title: String,
}

/// Where the playlist builder gets track metadata from.
///
/// `None` means the file could not be decoded and must be left out.
pub trait MetadataSource {
    fn read_metadata(&self, path: &Path) -> Option<TrackInfo>;
}

/// Maps lower-case file extensions to decoders.
///
/// New formats are added with [`register`](Self::register); files whose
/// extension has no entry go to the fallback decoder, if any.
pub struct DecoderRegistry {
    decoders: HashMap<String, Box<dyn AudioDecoder>>,
    fallback: Option<Box<dyn AudioDecoder>>,
    unknown_artist: String,
}

impl DecoderRegistry {
    /// A registry with no decoders at all.
    pub fn empty(unknown_artist: impl Into<String>) -> Self {
        Self {
            decoders: HashMap::new(),
            fallback: None,
            unknown_artist: unknown_artist.into(),
        }
    }

    /// lofty readers for every recognized extension, content sniffing for the
    /// rest. `.wma` goes to [`AsfDecoder`] since lofty has no ASF reader.
    pub fn standard(unknown_artist: impl Into<String>) -> Self {
        let mut registry = Self::empty(unknown_artist);
        registry
            .register("mp3", LoftyDecoder::new(FileType::Mpeg))
            .register("flac", LoftyDecoder::new(FileType::Flac))
            .register("wav", LoftyDecoder::new(FileType::Wav))
            .register("m4a", LoftyDecoder::new(FileType::Mp4))
            .register("ogg", LoftyDecoder::new(FileType::Vorbis))
            .register("aac", LoftyDecoder::sniffing())
            .register("wma", AsfDecoder::new())
            .set_fallback(LoftyDecoder::sniffing());
        registry
    }

    pub fn from_settings(settings: &PlaylistSettings) -> Self {
        Self::standard(settings.unknown_artist.clone())
    }

    pub fn register<D>(&mut self, extension: &str, decoder: D) -> &mut Self
    where
        D: AudioDecoder + 'static,
    {
        let key = extension.trim_start_matches('.').to_ascii_lowercase();
        self.decoders.insert(key, Box::new(decoder));
        self
    }

    pub fn set_fallback<D>(&mut self, decoder: D) -> &mut Self
    where
        D: AudioDecoder + 'static,
    {
        self.fallback = Some(Box::new(decoder));
        self
    }

    /// Registered extensions in sorted order.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    pub fn decoder_for(&self, path: &Path) -> Option<&dyn AudioDecoder> {
        let ext = extension_of(path);
        self.decoders
            .get(&ext)
            .or(self.fallback.as_ref())
            .map(|d| &**d)
    }

    /// Decode without applying defaults.
    pub fn decode(&self, path: &Path) -> Result<RawAudioInfo, MetadataError> {
        let decoder = self
            .decoder_for(path)
            .ok_or_else(|| MetadataError::Unsupported(format!(".{}", extension_of(path))))?;
        decoder.decode(path)
    }

    fn resolve(&self, path: &Path, raw: RawAudioInfo) -> TrackInfo {
        TrackInfo {
            duration_secs: raw.duration.as_secs(),
            artist: raw
                .artist
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| self.unknown_artist.clone()),
            title: raw
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| file_stem_title(path)),
        }
    }
}

impl MetadataSource for DecoderRegistry {
    fn read_metadata(&self, path: &Path) -> Option<TrackInfo> {
        match self.decode(path) {
            Ok(raw) => {
                let info = self.resolve(path, raw);
                debug!(path = %path.display(), duration = info.duration_secs, "read audio metadata");
                Some(info)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping undecodable audio file");
                None
            }
        }
    }
}

/// The file name without its extension, used when a track has no title tag.
pub fn file_stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}
