// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page state for each route.
//!
//! Each page owns its drafts and transient state. A page is created when its
//! route is entered and dropped when the user navigates away.

pub mod evaluation;
pub mod home;
pub mod profile;
pub mod save;
pub mod segmenter;
