// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: patient profile, video segments and the session store.

pub mod profile;
pub mod segment;
pub mod session;
pub mod video;
