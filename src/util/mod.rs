// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timing and timeline helpers.

pub mod interval;
pub mod playback;
pub mod timeline;
