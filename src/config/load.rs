use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `WPASS__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and the default config file location.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from environment and an explicit (optional) config file.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("WPASS")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.library.normalized_extensions().is_empty() {
            return Err("library.extensions must name at least one extension".to_string());
        }
        if self.playlist.exclude_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err("playlist.exclude_patterns must not contain empty patterns".to_string());
        }
        if self.playlist.unknown_artist.trim().is_empty() {
            return Err("playlist.unknown_artist must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `WPASS_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("WPASS_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/wpass/config.toml`
/// or `~/.config/wpass/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("wpass").join("config.toml"))
}
