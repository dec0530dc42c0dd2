//! Windows Media (ASF) header reader for `.wma` files.
//!
//! Only the top-level header object is read: the File Properties object for
//! the play duration and the Content Description object for title and
//! author. Media data after the header is never touched.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Duration;

use super::decoder::{AudioDecoder, RawAudioInfo};
use super::error::MetadataError;

/// GUIDs as stored on disk (first three fields little-endian).
pub(crate) const HEADER_OBJECT: [u8; 16] = [
    0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];
pub(crate) const FILE_PROPERTIES_OBJECT: [u8; 16] = [
    0xA1, 0xDC, 0xAB, 0x8C, 0x47, 0xA9, 0xCF, 0x11, 0x8E, 0xE4, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65,
];
pub(crate) const CONTENT_DESCRIPTION_OBJECT: [u8; 16] = [
    0x33, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];

/// GUID, object size, child count and two reserved bytes.
const HEADER_PREFIX_LEN: usize = 30;
/// GUID and object size, common to every object.
const OBJECT_PREFIX_LEN: usize = 24;
/// Header objects larger than this are treated as corrupt.
const MAX_HEADER_LEN: u64 = 16 * 1024 * 1024;

/// Decoder for ASF containers (`.wma`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AsfDecoder;

impl AsfDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl AudioDecoder for AsfDecoder {
    fn decode(&self, path: &Path) -> Result<RawAudioInfo, MetadataError> {
        let mut reader = BufReader::new(File::open(path)?);

        let mut prefix = [0u8; HEADER_PREFIX_LEN];
        reader.read_exact(&mut prefix)?;
        if prefix[..16] != HEADER_OBJECT {
            return Err(MetadataError::Unsupported(path.display().to_string()));
        }

        let header_len = read_u64(&prefix, 16).unwrap_or(0);
        if header_len < HEADER_PREFIX_LEN as u64 || header_len > MAX_HEADER_LEN {
            return Err(malformed("header object size out of range"));
        }
        let child_count = read_u32(&prefix, 24).unwrap_or(0);

        let mut body = vec![0u8; (header_len as usize) - HEADER_PREFIX_LEN];
        reader.read_exact(&mut body)?;

        parse_header_objects(&body, child_count)
    }
}

fn parse_header_objects(body: &[u8], child_count: u32) -> Result<RawAudioInfo, MetadataError> {
    let mut duration = None;
    let mut artist = None;
    let mut title = None;

    let mut offset = 0;
    for _ in 0..child_count {
        if offset == body.len() {
            break;
        }
        let guid = body
            .get(offset..offset + 16)
            .ok_or_else(|| malformed("truncated object"))?;
        let size = read_u64(body, offset + 16).ok_or_else(|| malformed("truncated object"))?;
        let size = usize::try_from(size).map_err(|_| malformed("object size out of range"))?;
        if size < OBJECT_PREFIX_LEN || offset + size > body.len() {
            return Err(malformed("object size out of range"));
        }
        let object = &body[offset..offset + size];

        if guid == FILE_PROPERTIES_OBJECT {
            duration = Some(play_duration(object)?);
        } else if guid == CONTENT_DESCRIPTION_OBJECT {
            let (t, a) = content_description(object)?;
            title = t;
            artist = a;
        }

        offset += size;
    }

    let duration = duration.ok_or_else(|| malformed("missing file properties object"))?;
    Ok(RawAudioInfo {
        duration,
        artist,
        title,
    })
}

/// Play duration (100 ns units) minus preroll (ms), clamped at zero.
fn play_duration(object: &[u8]) -> Result<Duration, MetadataError> {
    // File ID, file size, creation date and packet count precede it.
    let play_100ns =
        read_u64(object, OBJECT_PREFIX_LEN + 40).ok_or_else(|| malformed("short file properties"))?;
    let preroll_ms =
        read_u64(object, OBJECT_PREFIX_LEN + 56).ok_or_else(|| malformed("short file properties"))?;

    let play = Duration::from_nanos(play_100ns.saturating_mul(100));
    Ok(play.saturating_sub(Duration::from_millis(preroll_ms)))
}

/// Title and author; copyright, description and rating are skipped.
fn content_description(object: &[u8]) -> Result<(Option<String>, Option<String>), MetadataError> {
    let short = || malformed("short content description");
    let title_len = read_u16(object, OBJECT_PREFIX_LEN).ok_or_else(short)? as usize;
    let author_len = read_u16(object, OBJECT_PREFIX_LEN + 2).ok_or_else(short)? as usize;

    let title_start = OBJECT_PREFIX_LEN + 10;
    let author_start = title_start + title_len;
    let title = object
        .get(title_start..author_start)
        .ok_or_else(short)?;
    let author = object
        .get(author_start..author_start + author_len)
        .ok_or_else(short)?;

    Ok((utf16_field(title), utf16_field(author)))
}

/// UTF-16LE with an optional NUL terminator; `None` when blank.
fn utf16_field(bytes: &[u8]) -> Option<String> {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16_lossy(&units);
    let text = text.trim_end_matches('\0').trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn malformed(reason: &str) -> MetadataError {
    MetadataError::Malformed(format!("asf: {reason}"))
}

fn read_u16(bytes: &[u8], at: usize) -> Option<u16> {
    let raw = bytes.get(at..at + 2)?;
    Some(u16::from_le_bytes([raw[0], raw[1]]))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let raw: [u8; 4] = bytes.get(at..at + 4)?.try_into().ok()?;
    Some(u32::from_le_bytes(raw))
}

fn read_u64(bytes: &[u8], at: usize) -> Option<u64> {
    let raw: [u8; 8] = bytes.get(at..at + 8)?.try_into().ok()?;
    Some(u64::from_le_bytes(raw))
}
