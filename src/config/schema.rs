use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/wpass/config.toml` or `~/.config/wpass/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `WPASS__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playlist: PlaylistSettings,
    pub logging: LoggingSettings,
}

/// Extensions recognized as audio when nothing else is configured.
pub const DEFAULT_EXTENSIONS: [&str; 7] = ["mp3", "flac", "wav", "m4a", "wma", "ogg", "aac"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, leading dot optional).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Visit directory entries sorted by file name.
    ///
    /// With this off the order is whatever the filesystem returns.
    pub sorted: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_links: false,
            include_hidden: true,
            sorted: true,
        }
    }
}

impl LibrarySettings {
    /// Configured extensions, lower-cased and without leading dots.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Title substrings (case-insensitive) dropped when exclusion is requested.
    pub exclude_patterns: Vec<String>,
    /// Artist written for tracks without an artist tag.
    pub unknown_artist: String,
    /// How relative paths are written into the playlist.
    pub path_style: PathStyle,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            exclude_patterns: vec!["instrumental".to_string(), "karaoke".to_string()],
            unknown_artist: "Unknown Artist".to_string(),
            path_style: PathStyle::Native,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStyle {
    /// Platform separator (`\` on Windows, `/` elsewhere).
    #[serde(alias = "platform", alias = "os")]
    Native,
    /// Always `/`, which most portable players expect.
    #[serde(alias = "slash", alias = "unix", alias = "posix")]
    Forward,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    ///
    /// Example: "info" or "wpass=debug"
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
