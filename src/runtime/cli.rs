use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wpass::diff::SyncDirection;

#[derive(Debug, Parser)]
#[command(name = "wpass", version)]
#[command(about = "Build M3U8 playlists from music folders and compare two music folders", long_about = None)]
pub struct Cli {
    /// Config file (default: $WPASS_CONFIG_PATH or ~/.config/wpass/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate playlist(s) from a music folder
    Playlist(PlaylistArgs),
    /// List audio files present in only one of two folders, optionally copying them across
    Diff(DiffArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Args)]
pub struct PlaylistArgs {
    /// Music folder to scan
    pub music_dir: PathBuf,

    /// Playlist file to write; `.m3u8` is appended when missing
    #[arg(short, long, conflicts_with = "per_subfolder")]
    pub output: Option<PathBuf>,

    /// Directory the entries are relative to (default: MUSIC_DIR)
    #[arg(long, conflicts_with = "per_subfolder")]
    pub base_dir: Option<PathBuf>,

    /// Write one playlist per immediate subfolder instead
    #[arg(long)]
    pub per_subfolder: bool,

    /// Directory receiving the per-subfolder playlists
    #[arg(long, requires = "per_subfolder")]
    pub output_dir: Option<PathBuf>,

    /// Leave out tracks whose title mentions instrumental or karaoke
    #[arg(short = 'x', long)]
    pub exclude_instrumental: bool,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Folder A (e.g. the Walkman)
    pub folder_a: PathBuf,

    /// Folder B (e.g. the music library)
    pub folder_b: PathBuf,

    /// After reporting, copy the missing files in this direction
    #[arg(long, value_enum)]
    pub copy: Option<CopyDirection>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CopyDirection {
    /// Files only in A are copied into B
    AToB,
    /// Files only in B are copied into A
    BToA,
}

impl From<CopyDirection> for SyncDirection {
    fn from(direction: CopyDirection) -> Self {
        match direction {
            CopyDirection::AToB => SyncDirection::AToB,
            CopyDirection::BToA => SyncDirection::BToA,
        }
    }
}
