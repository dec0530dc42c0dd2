//! Library scanning: finds audio files under a directory and expresses them
//! relative to a base directory.

mod model;
mod scan;

pub use model::AudioTrackRecord;
pub use scan::{ensure_directory, is_audio_file, list_subfolders, relative_path, scan_audio_files};

#[cfg(test)]
mod tests;
