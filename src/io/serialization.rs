// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session export to JSON.
//!
//! The exported document holds the saved profile and the saved video
//! segments. The video file itself is never written out.

use crate::error::ExportError;
use crate::models::{profile::ProfileData, segment::VideoSegment, session::AppData};
use serde::Serialize;
use std::path::Path;

/// Name used when the user leaves the file name blank.
pub const DEFAULT_FILE_STEM: &str = "patient_data";

/// The JSON document written by [`export_json`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub profile: &'a ProfileData,
    pub video_segments: &'a [VideoSegment],
}

impl<'a> ExportDocument<'a> {
    /// Check the save precondition and borrow the exportable parts.
    pub fn from_session(data: &'a AppData) -> Result<Self, ExportError> {
        let profile = data.profile_data.as_ref().ok_or(ExportError::MissingProfile)?;
        if data.video_segments.is_empty() {
            return Err(ExportError::MissingSegments);
        }
        Ok(Self {
            profile,
            video_segments: &data.video_segments,
        })
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// File name offered in the save dialog: `<stem or default>.json`.
///
/// The stem is used as typed, without sanitizing.
pub fn export_file_name(stem: &str, default_stem: &str) -> String {
    if stem.is_empty() {
        format!("{}.json", default_stem)
    } else {
        format!("{}.json", stem)
    }
}

/// Validate the session and write it to `path` as JSON.
pub fn export_json(data: &AppData, path: &Path) -> Result<(), ExportError> {
    let json = ExportDocument::from_session(data)?.to_json()?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Exported profile and {} segment(s) to {}",
        data.video_segments.len(),
        path.display()
    );
    Ok(())
}
