// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Patient profile record.

use serde::{Deserialize, Serialize};

/// Demographic and medical details for one patient.
///
/// Every field is free text. Nothing is validated beyond the presence
/// check performed before export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth as entered, e.g. `2000-01-01`.
    pub dob: String,
    pub hobbies: String,
    pub preexisting_conditions: String,
    pub allergies: String,
    pub medication: String,
}

/// Names of the profile fields in CSV column order.
pub const FIELD_ORDER: [&str; 7] = [
    "firstName",
    "lastName",
    "dob",
    "hobbies",
    "preexistingConditions",
    "allergies",
    "medication",
];

impl ProfileData {
    /// Build a profile from seven values in [`FIELD_ORDER`].
    pub fn from_fields(fields: [String; 7]) -> Self {
        let [first_name, last_name, dob, hobbies, preexisting_conditions, allergies, medication] =
            fields;
        Self {
            first_name,
            last_name,
            dob,
            hobbies,
            preexisting_conditions,
            allergies,
            medication,
        }
    }

    /// Full name as shown on the review page.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
