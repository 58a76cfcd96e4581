// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: patient CSV import, JSON export and media files.

pub mod handles;
pub mod media;
pub mod patient_csv;
pub mod serialization;
