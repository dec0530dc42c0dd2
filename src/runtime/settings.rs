use std::path::Path;

use wpass::config::Settings;

/// Load and validate settings; the error message explains why defaults are needed.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, String> {
    let loaded = match config_path {
        Some(path) => Settings::load_from(Some(path)),
        None => Settings::load(),
    };

    let settings = loaded.map_err(|e| format!("failed to load config: {e}"))?;
    settings
        .validate()
        .map_err(|msg| format!("invalid config: {msg}"))?;
    Ok(settings)
}
