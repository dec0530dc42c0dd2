//! Audio metadata: duration, artist and title per file.
//!
//! Decoders are looked up by file extension in a [`DecoderRegistry`]. Decode
//! failures are logged and reported as "no metadata", never as an error, so
//! one corrupt file cannot abort a playlist build.

mod asf;
mod decoder;
mod error;
mod registry;

pub use asf::AsfDecoder;
pub use decoder::{AudioDecoder, LoftyDecoder, RawAudioInfo};
pub use error::MetadataError;
pub use registry::{DecoderRegistry, MetadataSource, TrackInfo, file_stem_title};
