use super::*;
use crate::config::LibrarySettings;
use crate::error::Error;
use crate::metadata::TrackInfo;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn exts() -> Vec<String> {
    LibrarySettings::default().normalized_extensions()
}

fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn is_audio_file_matches_recognized_extensions_case_insensitive() {
    let exts = exts();
    for name in ["a.mp3", "a.MP3", "a.flac", "a.wav", "a.M4A", "a.wma", "a.ogg", "a.aac"] {
        assert!(is_audio_file(Path::new(name), &exts), "{name}");
    }
    assert!(!is_audio_file(Path::new("/tmp/notes.txt"), &exts));
    assert!(!is_audio_file(Path::new("/tmp/a"), &exts));
    assert!(!is_audio_file(Path::new("/tmp/mp3"), &exts));
}

#[test]
fn scan_filters_non_audio_and_recurses_in_sorted_order() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("Album");
    fs::create_dir_all(&sub).unwrap();
    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("a.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();
    fs::write(sub.join("01.flac"), b"not a real flac").unwrap();
    fs::write(sub.join("cover.jpg"), b"ignore me").unwrap();

    let files = scan_audio_files(dir.path(), &LibrarySettings::default());
    assert_eq!(names(&files, dir.path()), vec!["Album/01.flac", "a.ogg", "b.MP3"]);
}

#[test]
fn scan_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    let hidden_dir = dir.path().join(".trash");
    fs::create_dir_all(&hidden_dir).unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
    fs::write(hidden_dir.join("inside.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

    let settings = LibrarySettings {
        include_hidden: false,
        ..LibrarySettings::default()
    };
    let files = scan_audio_files(dir.path(), &settings);
    assert_eq!(names(&files, dir.path()), vec!["visible.mp3"]);

    let all = scan_audio_files(dir.path(), &LibrarySettings::default());
    assert_eq!(all.len(), 3);
}

#[cfg(unix)]
#[test]
fn scan_lists_symlinked_files_only_when_following_links() {
    let dir = tempdir().unwrap();
    let outside = tempdir().unwrap();
    let target = outside.path().join("elsewhere.mp3");
    fs::write(&target, b"not real").unwrap();
    fs::write(dir.path().join("real.mp3"), b"not real").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("linked.mp3")).unwrap();

    let files = scan_audio_files(dir.path(), &LibrarySettings::default());
    assert_eq!(names(&files, dir.path()), vec!["real.mp3"]);

    let following = LibrarySettings {
        follow_links: true,
        ..LibrarySettings::default()
    };
    let files = scan_audio_files(dir.path(), &following);
    assert_eq!(names(&files, dir.path()), vec!["linked.mp3", "real.mp3"]);
}

#[test]
fn scan_uses_configured_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("b.opus"), b"x").unwrap();

    let settings = LibrarySettings {
        extensions: vec![".OPUS".into()],
        ..LibrarySettings::default()
    };
    let files = scan_audio_files(dir.path(), &settings);
    assert_eq!(names(&files, dir.path()), vec!["b.opus"]);
}

#[test]
fn list_subfolders_is_not_recursive() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("B").join("Nested")).unwrap();
    fs::create_dir_all(dir.path().join("A")).unwrap();
    fs::write(dir.path().join("loose.mp3"), b"x").unwrap();

    let folders = list_subfolders(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(names(&folders, dir.path()), vec!["A", "B"]);
}

#[test]
fn list_subfolders_reports_unreadable_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = list_subfolders(&missing, &LibrarySettings::default()).unwrap_err();
    assert!(matches!(err, Error::ReadDir { .. }));
}

#[test]
fn ensure_directory_rejects_files_and_missing_paths() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.mp3");
    fs::write(&file, b"x").unwrap();

    assert!(ensure_directory(dir.path()).is_ok());
    assert!(matches!(ensure_directory(&file), Err(Error::NotADirectory(_))));
    assert!(matches!(
        ensure_directory(&dir.path().join("nope")),
        Err(Error::NotADirectory(_))
    ));
}

#[test]
fn relative_path_strips_base_and_falls_back_to_absolute() {
    let dir = tempdir().unwrap();
    let music = dir.path().join("music");
    let other = dir.path().join("other");
    fs::create_dir_all(music.join("Album")).unwrap();
    fs::create_dir_all(&other).unwrap();
    let track = music.join("Album").join("01.mp3");
    fs::write(&track, b"x").unwrap();

    assert_eq!(relative_path(&track, &music), Path::new("Album").join("01.mp3"));
    assert_eq!(relative_path(&track, dir.path()), Path::new("music").join("Album").join("01.mp3"));

    let outside = relative_path(&track, &other);
    assert!(outside.is_absolute());
    assert!(outside.ends_with(Path::new("Album").join("01.mp3")));
}

#[test]
fn relative_path_handles_non_lexical_ancestors() {
    let dir = tempdir().unwrap();
    let music = dir.path().join("music");
    fs::create_dir_all(&music).unwrap();
    let track = music.join("a.mp3");
    fs::write(&track, b"x").unwrap();

    let roundabout = music.join("..").join("music");
    assert_eq!(relative_path(&track, &roundabout), PathBuf::from("a.mp3"));
}

#[test]
fn record_uses_defaults_when_undecoded() {
    let base = Path::new("/music");
    let path = Path::new("/music/Album/Track Name.flac");

    let decoded = AudioTrackRecord::new(
        path,
        base,
        Some(TrackInfo {
            duration_secs: 200,
            artist: "Band".into(),
            title: "Song".into(),
        }),
        "Unknown Artist",
    );
    assert!(decoded.is_decoded());
    assert_eq!(decoded.relative_path, Path::new("Album").join("Track Name.flac"));
    assert_eq!(decoded.title, "Song");

    let undecoded = AudioTrackRecord::new(path, base, None, "Unknown Artist");
    assert!(!undecoded.is_decoded());
    assert_eq!(undecoded.artist, "Unknown Artist");
    assert_eq!(undecoded.title, "Track Name");
}
