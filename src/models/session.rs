// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state shared by every page.
//!
//! One [`SessionStore`] exists for the lifetime of the window. Pages receive
//! it by reference and write back only on explicit user actions. Updates
//! replace whole fields; nothing is merged below the field level.

use super::{profile::ProfileData, segment::VideoSegment, video::VideoFile};

/// Everything entered during one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppData {
    pub profile_data: Option<ProfileData>,
    pub video_segments: Vec<VideoSegment>,
    pub video_file: Option<VideoFile>,
}

impl AppData {
    pub fn has_profile(&self) -> bool {
        self.profile_data.is_some()
    }

    pub fn has_segments(&self) -> bool {
        !self.video_segments.is_empty()
    }
}

/// Partial update: `Some` fields replace the stored field wholesale.
#[derive(Debug, Clone, Default)]
pub struct AppPatch {
    pub profile_data: Option<Option<ProfileData>>,
    pub video_segments: Option<Vec<VideoSegment>>,
    pub video_file: Option<Option<VideoFile>>,
}

/// An update passed to [`SessionStore::set`].
pub enum Update {
    /// Replace the whole record.
    Replace(AppData),
    /// Compute a patch from the previous state.
    With(Box<dyn FnOnce(&AppData) -> AppPatch>),
}

impl Update {
    /// Convenience for a reducer closure.
    pub fn with(f: impl FnOnce(&AppData) -> AppPatch + 'static) -> Self {
        Self::With(Box::new(f))
    }
}

/// Owner of the session's [`AppData`].
#[derive(Debug, Default)]
pub struct SessionStore {
    data: AppData,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn get(&self) -> &AppData {
        &self.data
    }

    /// Apply an update.
    pub fn set(&mut self, update: Update) {
        match update {
            Update::Replace(data) => self.data = data,
            Update::With(reducer) => {
                let patch = reducer(&self.data);
                self.apply(patch);
            }
        }
    }

    fn apply(&mut self, patch: AppPatch) {
        if let Some(profile) = patch.profile_data {
            self.data.profile_data = profile;
        }
        if let Some(segments) = patch.video_segments {
            self.data.video_segments = segments;
        }
        if let Some(file) = patch.video_file {
            self.data.video_file = file;
        }
    }

    /// Back to the empty initial state ("New Patient").
    pub fn reset(&mut self) {
        self.set(Update::Replace(AppData::default()));
        log::info!("Session reset for new patient");
    }

    pub fn set_profile(&mut self, profile: ProfileData) {
        self.set(Update::with(move |_| AppPatch {
            profile_data: Some(Some(profile)),
            ..Default::default()
        }));
    }

    pub fn set_segments(&mut self, segments: Vec<VideoSegment>) {
        self.set(Update::with(move |_| AppPatch {
            video_segments: Some(segments),
            ..Default::default()
        }));
    }

    pub fn set_video_file(&mut self, file: VideoFile) {
        self.set(Update::with(move |_| AppPatch {
            video_file: Some(Some(file)),
            ..Default::default()
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn video() -> VideoFile {
        VideoFile {
            path: PathBuf::from("/tmp/walk.mp4"),
            name: "walk.mp4".into(),
            size_bytes: 1024,
            duration_secs: Some(30.0),
        }
    }

    fn segment(start: f64, end: f64) -> VideoSegment {
        VideoSegment {
            start,
            end,
            label: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let store = SessionStore::new();
        assert_eq!(store.get(), &AppData::default());
        assert!(!store.get().has_profile());
        assert!(!store.get().has_segments());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = SessionStore::new();
        store.set_profile(ProfileData::default());
        store.set_segments(vec![segment(1.0, 2.0)]);
        store.set_video_file(video());

        store.reset();

        let data = store.get();
        assert!(data.profile_data.is_none());
        assert!(data.video_segments.is_empty());
        assert!(data.video_file.is_none());
    }

    #[test]
    fn test_field_setters_leave_other_fields_alone() {
        let mut store = SessionStore::new();
        store.set_video_file(video());
        store.set_segments(vec![segment(1.0, 2.0)]);
        store.set_profile(ProfileData {
            first_name: "A".into(),
            ..Default::default()
        });

        let data = store.get();
        assert_eq!(data.video_file, Some(video()));
        assert_eq!(data.video_segments, vec![segment(1.0, 2.0)]);
        assert_eq!(data.profile_data.as_ref().unwrap().first_name, "A");
    }

    #[test]
    fn test_segments_replace_wholesale() {
        let mut store = SessionStore::new();
        store.set_segments(vec![segment(1.0, 2.0), segment(3.0, 4.0)]);
        store.set_segments(vec![segment(5.0, 6.0)]);
        assert_eq!(store.get().video_segments, vec![segment(5.0, 6.0)]);
    }

    #[test]
    fn test_reducer_sees_previous_state() {
        let mut store = SessionStore::new();
        store.set_segments(vec![segment(1.0, 2.0)]);
        store.set(Update::with(|prev| {
            let mut segments = prev.video_segments.clone();
            segments.push(segment(3.0, 4.0));
            AppPatch {
                video_segments: Some(segments),
                ..Default::default()
            }
        }));
        assert_eq!(store.get().video_segments.len(), 2);
    }

    #[test]
    fn test_replace_overwrites_all_fields() {
        let mut store = SessionStore::new();
        store.set_video_file(video());
        store.set(Update::Replace(AppData {
            profile_data: Some(ProfileData::default()),
            ..Default::default()
        }));
        assert!(store.get().video_file.is_none());
        assert!(store.get().has_profile());
    }
}
