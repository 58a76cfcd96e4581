// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video file inspection.
//!
//! This module opens a user-selected video file and reads what the
//! segmenter needs from it: name, size and total duration. Duration comes
//! from the `mvhd` box of ISO base media files (MP4, MOV, M4V). With the
//! `video-opencv` feature, OpenCV is asked as a fallback for other
//! containers.

use crate::error::MediaError;
use crate::models::video::VideoFile;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Open a video file and probe its duration.
///
/// An unreadable header is not an error; the duration is simply unknown.
pub fn probe_video(path: &Path) -> Result<VideoFile, MediaError> {
    let io_err = |source| MediaError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let size_bytes = file.metadata().map_err(io_err)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let duration_secs = match mp4_duration(&mut file, size_bytes) {
        Ok(duration) => duration,
        Err(e) => {
            log::warn!("Could not read container header of {}: {}", path.display(), e);
            None
        }
    };

    #[cfg(feature = "video-opencv")]
    let duration_secs = match duration_secs {
        Some(d) => Some(d),
        None => opencv_duration(path)?,
    };

    match duration_secs {
        Some(d) => log::info!("Opened video {} ({:.1}s, {} bytes)", name, d, size_bytes),
        None => log::warn!("Opened video {} but its duration is unknown", name),
    }

    Ok(VideoFile {
        path: path.to_path_buf(),
        name,
        size_bytes,
        duration_secs,
    })
}

/// Read the movie duration in seconds from an ISO base media stream.
pub fn mp4_duration<R: Read + Seek>(reader: &mut R, len: u64) -> io::Result<Option<f64>> {
    let Some((moov_start, moov_end)) = find_box(reader, 0, len, b"moov")? else {
        return Ok(None);
    };
    let Some((mvhd_start, _)) = find_box(reader, moov_start, moov_end, b"mvhd")? else {
        return Ok(None);
    };

    reader.seek(SeekFrom::Start(mvhd_start))?;
    let mut version_flags = [0u8; 4];
    reader.read_exact(&mut version_flags)?;

    let (timescale, duration) = if version_flags[0] == 1 {
        // creation and modification times are 64-bit
        reader.seek(SeekFrom::Current(16))?;
        let timescale = read_u32(reader)?;
        (timescale, read_u64(reader)?)
    } else {
        reader.seek(SeekFrom::Current(8))?;
        let timescale = read_u32(reader)?;
        let duration = read_u32(reader)?;
        if duration == u32::MAX {
            return Ok(None);
        }
        (timescale, duration as u64)
    };

    if timescale == 0 {
        return Ok(None);
    }
    Ok(Some(duration as f64 / timescale as f64))
}

/// Locate a child box of `kind` between `start` and `end`; returns its payload range.
fn find_box<R: Read + Seek>(
    reader: &mut R,
    start: u64,
    end: u64,
    kind: &[u8; 4],
) -> io::Result<Option<(u64, u64)>> {
    let mut pos = start;
    while pos + 8 <= end {
        reader.seek(SeekFrom::Start(pos))?;
        let size = read_u32(reader)? as u64;
        let mut box_type = [0u8; 4];
        reader.read_exact(&mut box_type)?;

        let (header_len, box_len) = match size {
            0 => (8, end - pos),
            1 => (16, read_u64(reader)?),
            n => (8, n),
        };
        if box_len < header_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("box at offset {} has invalid size {}", pos, box_len),
            ));
        }

        let box_end = pos.saturating_add(box_len).min(end);
        if &box_type == kind {
            return Ok(Some((pos + header_len, box_end)));
        }
        pos = box_end;
    }
    Ok(None)
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

#[cfg(feature = "video-opencv")]
fn opencv_duration(path: &Path) -> Result<Option<f64>, MediaError> {
    use opencv::prelude::*;
    use opencv::videoio;

    let cap = videoio::VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)?;
    if !cap.is_opened()? {
        return Ok(None);
    }
    let frames = cap.get(videoio::CAP_PROP_FRAME_COUNT)?;
    let fps = cap.get(videoio::CAP_PROP_FPS)?;
    if frames > 0.0 && fps > 0.0 {
        Ok(Some(frames / fps))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn boxed(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
        out.extend_from_slice(kind);
        out.extend_from_slice(payload);
        out
    }

    fn mvhd_v0(timescale: u32, duration: u32) -> Vec<u8> {
        let mut payload = vec![0u8; 4 + 8];
        payload.extend_from_slice(&timescale.to_be_bytes());
        payload.extend_from_slice(&duration.to_be_bytes());
        payload.extend_from_slice(&[0u8; 80]);
        boxed(b"mvhd", &payload)
    }

    fn mvhd_v1(timescale: u32, duration: u64) -> Vec<u8> {
        let mut payload = vec![1u8, 0, 0, 0];
        payload.extend_from_slice(&[0u8; 16]);
        payload.extend_from_slice(&timescale.to_be_bytes());
        payload.extend_from_slice(&duration.to_be_bytes());
        payload.extend_from_slice(&[0u8; 80]);
        boxed(b"mvhd", &payload)
    }

    /// A minimal MP4 byte stream: ftyp, a free box, then moov with mvhd.
    fn tiny_mp4(timescale: u32, duration: u32) -> Vec<u8> {
        let mut data = boxed(b"ftyp", b"isom\0\0\0\0isomiso2");
        data.extend(boxed(b"free", &[0u8; 16]));
        let mut moov_payload = boxed(b"udta", &[0u8; 4]);
        moov_payload.extend(mvhd_v0(timescale, duration));
        data.extend(boxed(b"moov", &moov_payload));
        data
    }

    fn duration_of(bytes: Vec<u8>) -> Option<f64> {
        let len = bytes.len() as u64;
        mp4_duration(&mut Cursor::new(bytes), len).unwrap()
    }

    #[test]
    fn test_version0_duration() {
        assert_eq!(duration_of(tiny_mp4(1000, 30_500)), Some(30.5));
    }

    #[test]
    fn test_version1_duration() {
        let data = boxed(b"moov", &mvhd_v1(600, 600 * 90));
        assert_eq!(duration_of(data), Some(90.0));
    }

    #[test]
    fn test_moov_after_mdat() {
        let mut data = boxed(b"ftyp", b"isom");
        data.extend(boxed(b"mdat", &[7u8; 256]));
        data.extend(boxed(b"moov", &mvhd_v0(25, 250)));
        assert_eq!(duration_of(data), Some(10.0));
    }

    #[test]
    fn test_unknown_duration() {
        assert_eq!(duration_of(boxed(b"moov", &mvhd_v0(1000, u32::MAX))), None);
        assert_eq!(duration_of(boxed(b"moov", &mvhd_v0(0, 100))), None);
        assert_eq!(duration_of(boxed(b"ftyp", b"isom")), None);
        assert_eq!(duration_of(Vec::new()), None);
    }

    #[test]
    fn test_corrupt_box_size_is_error() {
        let mut data = 4u32.to_be_bytes().to_vec();
        data.extend_from_slice(b"junk");
        let len = data.len() as u64;
        assert!(mp4_duration(&mut Cursor::new(data), len).is_err());
    }

    #[test]
    fn test_probe_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gait.mp4");
        let bytes = tiny_mp4(1000, 12_000);
        std::fs::write(&path, &bytes).unwrap();

        let video = probe_video(&path).unwrap();
        assert_eq!(video.name, "gait.mp4");
        assert_eq!(video.size_bytes, bytes.len() as u64);
        assert_eq!(video.duration_secs, Some(12.0));
    }

    #[test]
    fn test_probe_non_mp4_has_unknown_duration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.webm");
        std::fs::write(&path, [0x1A, 0x45, 0xDF, 0xA3, 0, 0, 0, 0]).unwrap();
        let video = probe_video(&path).unwrap();
        #[cfg(not(feature = "video-opencv"))]
        assert_eq!(video.duration_secs, None);
        assert_eq!(video.duration(), video.duration_secs.unwrap_or(0.0));
    }

    #[test]
    fn test_probe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(probe_video(&dir.path().join("missing.mp4")).is_err());
    }
}
