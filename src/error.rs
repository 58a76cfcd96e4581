// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for import, export, media probing and settings.

use std::path::PathBuf;

/// Failure to import a patient profile from a CSV file.
#[derive(Debug, thiserror::Error)]
pub enum CsvImportError {
    /// The file could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has a header but no data row.
    #[error("missing data row: expected a header on line 1 and patient data on line 2")]
    MissingDataRow,

    /// The data row ends before all seven profile fields are present.
    #[error("line {line}: missing field '{field}' (found {found} of 7 fields)")]
    MissingField {
        field: &'static str,
        line: usize,
        found: usize,
    },
}

/// Failure to export the session to JSON.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("profile has not been saved")]
    MissingProfile,

    #[error("no video segments have been saved")]
    MissingSegments,

    #[error("failed to serialize session: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Whether this error comes from the save precondition rather than I/O.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::MissingProfile | Self::MissingSegments)
    }
}

/// Failure to open or inspect a video file.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "video-opencv")]
    #[error("opencv: {0}")]
    OpenCv(#[from] opencv::Error),
}

/// Failure to load the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
