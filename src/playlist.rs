//! M3U8 playlist assembly.
//!
//! A build walks a directory, reads metadata for every audio file, drops
//! undecodable files (and, on request, instrumental/karaoke titles) and
//! writes one `#EXTINF` + path pair per surviving track under a single
//! `#EXTM3U` header.

mod builder;
mod filter;
mod m3u;

pub use builder::{PlaylistBuilder, PlaylistJob, PlaylistRequest, PlaylistSummary, SubfolderRequest};
pub use filter::TitleFilter;
pub use m3u::{
    HEADER, PLAYLIST_EXTENSION, PlaylistDocument, PlaylistEntry, format_location,
    with_playlist_extension, write_playlist,
};
