// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Save page: check the session is complete and write it out as JSON.

use crate::io::serialization::{self, ExportDocument};
use crate::models::session::AppData;
use std::path::{Path, PathBuf};

/// Blocking message shown when the session is incomplete.
pub const INCOMPLETE_MESSAGE: &str =
    "Please complete both Profile and Upload sections before saving.";

/// Completion of the two exported sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveStatus {
    pub profile: bool,
    pub segments: bool,
}

impl SaveStatus {
    pub fn of(data: &AppData) -> Self {
        Self {
            profile: data.has_profile(),
            segments: data.has_segments(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.profile && self.segments
    }
}

/// What pressing "Save All Data" leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    /// Incomplete session; the blocking message is now showing.
    Blocked,
    /// Ask the user where to write, suggesting this file name.
    ChooseLocation { file_name: String },
}

/// Outcome of the last write, shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveNotice {
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug)]
pub struct SavePage {
    /// File name as typed, without extension.
    pub file_name: String,
    default_stem: String,
    alert: Option<&'static str>,
    notice: Option<SaveNotice>,
}

impl SavePage {
    pub fn new(default_stem: &str) -> Self {
        Self {
            file_name: String::new(),
            default_stem: default_stem.to_string(),
            alert: None,
            notice: None,
        }
    }

    /// Modal message waiting to be dismissed.
    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn notice(&self) -> Option<&SaveNotice> {
        self.notice.as_ref()
    }

    /// Name offered in the save dialog.
    pub fn suggested_file_name(&self) -> String {
        serialization::export_file_name(&self.file_name, &self.default_stem)
    }

    /// "Save All Data" was pressed.
    pub fn request(&mut self, data: &AppData) -> SaveRequest {
        match ExportDocument::from_session(data) {
            Ok(_) => SaveRequest::ChooseLocation {
                file_name: self.suggested_file_name(),
            },
            Err(e) => {
                log::warn!("Save blocked: {}", e);
                self.alert = Some(INCOMPLETE_MESSAGE);
                SaveRequest::Blocked
            }
        }
    }

    /// Write the session to the chosen path. The outcome is kept as a notice
    /// or alert for the view.
    pub fn write(&mut self, data: &AppData, path: &Path) {
        match serialization::export_json(data, path) {
            Ok(()) => self.notice = Some(SaveNotice::Saved(path.to_path_buf())),
            Err(e) if e.is_incomplete() => self.alert = Some(INCOMPLETE_MESSAGE),
            Err(e) => {
                log::error!("Failed to save session: {}", e);
                self.notice = Some(SaveNotice::Failed(e.to_string()));
            }
        }
    }
}
