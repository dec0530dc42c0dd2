use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_wpass_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("WPASS_CONFIG_PATH", "/tmp/wpass-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/wpass-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("wpass")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("wpass")
            .join("config.toml")
    );
}

#[test]
fn defaults_recognize_the_standard_audio_extensions() {
    let s = Settings::default();
    assert_eq!(
        s.library.normalized_extensions(),
        vec!["mp3", "flac", "wav", "m4a", "wma", "ogg", "aac"]
    );
    assert_eq!(s.playlist.exclude_patterns, vec!["instrumental", "karaoke"]);
    assert_eq!(s.playlist.unknown_artist, "Unknown Artist");
    assert_eq!(s.playlist.path_style, PathStyle::Native);
    assert!(s.validate().is_ok());
}

#[test]
fn normalized_extensions_strip_dots_and_case() {
    let lib = LibrarySettings {
        extensions: vec![".MP3".into(), " flac ".into(), "".into(), ".".into()],
        ..LibrarySettings::default()
    };
    assert_eq!(lib.normalized_extensions(), vec!["mp3", "flac"]);
}

#[test]
fn validate_rejects_empty_extensions_and_patterns() {
    let mut s = Settings::default();
    s.library.extensions = vec![".".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playlist.exclude_patterns = vec!["karaoke".into(), "  ".into()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playlist.unknown_artist = String::new();
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("WPASS__PLAYLIST__UNKNOWN_ARTIST");

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extensions = ["mp3", ".FLAC"]
follow_links = true
include_hidden = false
sorted = false

[playlist]
exclude_patterns = ["live"]
unknown_artist = "Various"
path_style = "slash"

[logging]
level = "wpass=debug"
"#,
    )
    .unwrap();

    let s = Settings::load_from(Some(cfg_path.as_path())).unwrap();
    assert_eq!(s.library.normalized_extensions(), vec!["mp3", "flac"]);
    assert!(s.library.follow_links);
    assert!(!s.library.include_hidden);
    assert!(!s.library.sorted);
    assert_eq!(s.playlist.exclude_patterns, vec!["live".to_string()]);
    assert_eq!(s.playlist.unknown_artist, "Various");
    assert_eq!(s.playlist.path_style, PathStyle::Forward);
    assert_eq!(s.logging.level, "wpass=debug");
}

#[test]
fn settings_load_tolerates_missing_file() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();

    let s = Settings::load_from(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(s.playlist.unknown_artist, "Unknown Artist");
    assert!(s.library.sorted);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playlist]
unknown_artist = "From File"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("WPASS__PLAYLIST__UNKNOWN_ARTIST", "From Env");

    let s = Settings::load_from(Some(cfg_path.as_path())).unwrap();
    assert_eq!(s.playlist.unknown_artist, "From Env");
}

#[test]
fn settings_serialize_back_to_toml() {
    let text = toml::to_string_pretty(&Settings::default()).unwrap();
    assert!(text.contains("[playlist]"));
    assert!(text.contains("path_style = \"native\""));
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed.library.extensions.len(), 7);
}
