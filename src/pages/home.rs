// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Patient intake: start a new patient or load an existing one from CSV.

use crate::io::patient_csv;
use crate::models::session::SessionStore;
use std::path::Path;

/// Where the shell should go after an intake action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeOutcome {
    Stay,
    OpenProfile,
}

/// Home page state: only the last import error survives between frames.
#[derive(Debug, Default)]
pub struct HomePage {
    import_error: Option<String>,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything in the session. No confirmation.
    pub fn new_patient(&mut self, store: &mut SessionStore) {
        self.import_error = None;
        store.reset();
    }

    /// Import a profile from `path` into the session.
    ///
    /// On failure the session is left as it was and the error is kept for
    /// display.
    pub fn import_existing(&mut self, store: &mut SessionStore, path: &Path) -> HomeOutcome {
        match patient_csv::import_profile(path) {
            Ok(profile) => {
                self.import_error = None;
                store.set_profile(profile);
                HomeOutcome::OpenProfile
            }
            Err(e) => {
                log::error!("Patient import failed: {}", e);
                self.import_error = Some(e.to_string());
                HomeOutcome::Stay
            }
        }
    }

    pub fn import_error(&self) -> Option<&str> {
        self.import_error.as_deref()
    }
}
