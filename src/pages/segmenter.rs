// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video segmenter: load a video, mark labeled time ranges, commit them.
//!
//! The segmenter moves through three states:
//!
//! - no video loaded
//! - video loaded, [`MarkState::Idle`]
//! - video loaded, [`MarkState::Marking`] with a pending start time
//!
//! Selecting a file commits it to the session straight away. Segments stay
//! in a draft [`SegmentList`] until "Save Segments".

use crate::io::handles::{MediaUrls, PlaybackUrl};
use crate::models::{
    segment::{DraftSegment, SegmentId, VideoSegment},
    session::SessionStore,
    video::VideoFile,
};
use crate::util::playback::{PlaybackClock, PlaybackEvent};
use crate::util::timeline;
use std::collections::BTreeSet;
use std::time::Duration;

/// Two-phase segment marking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MarkState {
    #[default]
    Idle,
    Marking {
        start: f64,
    },
}

impl MarkState {
    pub fn is_marking(&self) -> bool {
        matches!(self, Self::Marking { .. })
    }

    /// Label for the mark button.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Mark Segment",
            Self::Marking { .. } => "End Segment",
        }
    }
}

/// Draft segments with multi-selection.
#[derive(Debug, Default)]
pub struct SegmentList {
    segments: Vec<DraftSegment>,
    selected: BTreeSet<SegmentId>,
    next_id: u64,
}

impl SegmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment with an empty label.
    pub fn push(&mut self, start: f64, end: f64) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.segments.push(DraftSegment {
            id,
            segment: VideoSegment {
                start,
                end,
                label: String::new(),
            },
        });
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraftSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Option<&DraftSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Mutable label for binding to a text field.
    pub fn label_mut(&mut self, id: SegmentId) -> Option<&mut String> {
        self.segments
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.segment.label)
    }

    pub fn is_selected(&self, id: SegmentId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Check or uncheck one segment.
    pub fn toggle_selected(&mut self, id: SegmentId) {
        if self.get(id).is_none() {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// True when the list is non-empty and every segment is selected.
    pub fn all_selected(&self) -> bool {
        !self.segments.is_empty() && self.selected.len() == self.segments.len()
    }

    /// "Select All": deselects only when everything is already selected.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.segments.iter().map(|s| s.id).collect();
        }
    }

    pub fn can_delete(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Remove the selected segments and clear the selection. Returns how many went.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.segments.len();
        let selected = std::mem::take(&mut self.selected);
        self.segments.retain(|s| !selected.contains(&s.id));
        before - self.segments.len()
    }

    /// The committed form of the list, in order, without ids.
    pub fn to_committed(&self) -> Vec<VideoSegment> {
        self.segments.iter().map(DraftSegment::to_committed).collect()
    }
}

/// A video that has been opened in the segmenter.
#[derive(Debug)]
pub struct LoadedVideo {
    pub file: VideoFile,
    pub url: PlaybackUrl,
    pub clock: PlaybackClock,
}

#[derive(Debug)]
pub struct Segmenter {
    urls: MediaUrls,
    video: Option<LoadedVideo>,
    mark: MarkState,
    pub segments: SegmentList,
}

impl Segmenter {
    pub fn new(urls: MediaUrls) -> Self {
        Self {
            urls,
            video: None,
            mark: MarkState::Idle,
            segments: SegmentList::new(),
        }
    }

    pub fn video(&self) -> Option<&LoadedVideo> {
        self.video.as_ref()
    }

    pub fn mark_state(&self) -> MarkState {
        self.mark
    }

    /// Open `file` and commit it to the session.
    ///
    /// Any previously loaded video is released along with its draft segments.
    pub fn load_video(&mut self, store: &mut SessionStore, file: VideoFile) {
        // Release the old handle before acquiring the new one.
        self.video = None;
        let url = self.urls.acquire(&file);
        let clock = PlaybackClock::new(file.duration());
        log::info!("Loaded {} for segmentation at {}", file.name, url.as_str());

        store.set_video_file(file.clone());
        self.video = Some(LoadedVideo { file, url, clock });
        self.mark = MarkState::Idle;
        self.segments = SegmentList::new();
    }

    pub fn current_time(&self) -> f64 {
        self.video.as_ref().map_or(0.0, |v| v.clock.position())
    }

    pub fn duration(&self) -> f64 {
        self.video.as_ref().map_or(0.0, |v| v.clock.duration())
    }

    /// Playhead position as a fraction of the timeline.
    pub fn progress(&self) -> f64 {
        timeline::progress_fraction(self.current_time(), self.duration())
    }

    pub fn is_playing(&self) -> bool {
        self.video.as_ref().is_some_and(|v| v.clock.is_playing())
    }

    pub fn toggle_playback(&mut self) {
        if let Some(video) = &mut self.video {
            video.clock.toggle();
        }
    }

    /// Advance playback by one frame's worth of time.
    pub fn update(&mut self, elapsed: Duration) {
        if let Some(video) = &mut self.video {
            if video.clock.advance(elapsed) == PlaybackEvent::Ended {
                log::debug!("Playback reached end of {}", video.file.name);
            }
        }
    }

    pub fn seek(&mut self, time: f64) {
        if let Some(video) = &mut self.video {
            video.clock.seek(time);
        }
    }

    /// Seek to where the timeline was clicked.
    pub fn seek_click(&mut self, x: f32, width: f32) {
        if let Some(time) = timeline::seek_time(x, width, self.duration()) {
            self.seek(time);
        }
    }

    /// "Mark Segment" / "End Segment".
    ///
    /// Returns the id of the segment closed by this press, if any.
    pub fn toggle_mark(&mut self) -> Option<SegmentId> {
        self.video.as_ref()?;
        let now = self.current_time();
        match self.mark {
            MarkState::Idle => {
                self.mark = MarkState::Marking { start: now };
                None
            }
            MarkState::Marking { start } => {
                self.mark = MarkState::Idle;
                let id = self.segments.push(start, now);
                log::info!(
                    "Marked segment {} - {} ({} total)",
                    timeline::format_time(start),
                    timeline::format_time(now),
                    self.segments.len()
                );
                Some(id)
            }
        }
    }

    /// Segment being marked, from its start to the playhead.
    pub fn pending_segment(&self) -> Option<VideoSegment> {
        match self.mark {
            MarkState::Idle => None,
            MarkState::Marking { start } => Some(VideoSegment {
                start,
                end: self.current_time(),
                label: String::new(),
            }),
        }
    }

    pub fn can_save(&self) -> bool {
        !self.segments.is_empty()
    }

    /// "Save Segments": replace the session's segments with the draft.
    pub fn save(&self, store: &mut SessionStore) -> bool {
        if !self.can_save() {
            return false;
        }
        store.set_segments(self.segments.to_committed());
        log::info!("Saved {} segment(s)", self.segments.len());
        true
    }

    pub fn delete_selected(&mut self) -> usize {
        let removed = self.segments.delete_selected();
        if removed > 0 {
            log::info!("Deleted {} segment(s), {} left", removed, self.segments.len());
        }
        removed
    }
}
