// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings come from an optional `paids.yaml` in the working directory.
//! Missing keys take their defaults; a missing file means all defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "paids.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
    /// Interval between severity samples, in milliseconds.
    pub sample_period_ms: u64,
    /// Severity samples kept for the chart.
    pub buffer_capacity: usize,
    /// File name used when the save form is left blank.
    pub default_export_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 720.0],
            sample_period_ms: 1000,
            buffer_capacity: 50,
            default_export_name: "patient_data".to_string(),
        }
    }
}

impl AppConfig {
    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_period_ms)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`AppConfig::load`], but logs problems and falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}
