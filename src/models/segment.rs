// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video segment records.
//!
//! A [`DraftSegment`] lives in the segmenter's working list and carries a
//! [`SegmentId`] for selection bookkeeping. Committing strips the id and
//! yields plain [`VideoSegment`]s.

use serde::{Deserialize, Serialize};

/// A labeled time interval within a video, in seconds.
///
/// `start <= end` is expected but not enforced; seeking backwards while
/// marking produces a reversed segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSegment {
    pub start: f64,
    pub end: f64,
    pub label: String,
}

impl VideoSegment {
    /// Lower and upper bound regardless of marking direction.
    pub fn bounds(&self) -> (f64, f64) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

/// Handle for a segment inside one draft list. Never reused within that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) u64);

/// A segment still being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSegment {
    pub id: SegmentId,
    pub segment: VideoSegment,
}

impl DraftSegment {
    /// The committed shape, without the draft handle.
    pub fn to_committed(&self) -> VideoSegment {
        self.segment.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_reversed_segment() {
        let seg = VideoSegment {
            start: 12.0,
            end: 5.0,
            label: String::new(),
        };
        assert_eq!(seg.bounds(), (5.0, 12.0));
    }

    #[test]
    fn test_committed_json_has_no_id() {
        let draft = DraftSegment {
            id: SegmentId(7),
            segment: VideoSegment {
                start: 5.0,
                end: 12.0,
                label: "tremor".into(),
            },
        };
        let json = serde_json::to_value(draft.to_committed()).unwrap();
        assert_eq!(json, serde_json::json!({"start": 5.0, "end": 12.0, "label": "tremor"}));
    }
}
