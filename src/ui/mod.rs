// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the PAIDS application.

pub mod chart;
pub mod evaluate;
pub mod home;
pub mod navbar;
pub mod profile;
pub mod save;
pub mod timeline;
pub mod upload;
