// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scoped playback handles for local media.
//!
//! A page that plays a video acquires a [`PlaybackUrl`] from the shared
//! [`MediaUrls`] registry. The handle is released when it is dropped, so
//! replacing the video or leaving the page never leaves a stale entry
//! behind.

use crate::models::video::VideoFile;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: HashMap<u64, PathBuf>,
}

/// Issues and tracks playback handles. Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct MediaUrls {
    inner: Rc<RefCell<Registry>>,
}

impl MediaUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `file` and return a handle that unregisters on drop.
    pub fn acquire(&self, file: &VideoFile) -> PlaybackUrl {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.live.insert(id, file.path.clone());
        let url = format!("media://{}/{}", id, file.name);
        log::debug!("Acquired {}", url);
        PlaybackUrl {
            id,
            url,
            registry: Rc::clone(&self.inner),
        }
    }

    /// Number of handles not yet released.
    pub fn live_count(&self) -> usize {
        self.inner.borrow().live.len()
    }
}

/// A live playback handle for one video file.
#[derive(Debug)]
pub struct PlaybackUrl {
    id: u64,
    url: String,
    registry: Rc<RefCell<Registry>>,
}

impl PlaybackUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PlaybackUrl {
    fn drop(&mut self) {
        self.registry.borrow_mut().live.remove(&self.id);
        log::debug!("Released {}", self.url);
    }
}
