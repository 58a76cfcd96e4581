// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Handle to a local video file selected by the user.

use std::path::PathBuf;

/// A video file on disk plus what was learned about it when it was opened.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFile {
    pub path: PathBuf,
    /// File name shown in the UI.
    pub name: String,
    pub size_bytes: u64,
    /// Total duration in seconds, if the container header could be read.
    pub duration_secs: Option<f64>,
}

impl VideoFile {
    /// Duration in seconds, or 0 when unknown.
    pub fn duration(&self) -> f64 {
        self.duration_secs.unwrap_or(0.0)
    }
}
