// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Three-step profile wizard.
//!
//! Edits go to a local draft. The session only changes when "Save Profile"
//! is pressed on the review page.

use crate::models::{profile::ProfileData, session::SessionStore};

/// Wizard step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardPage {
    /// Photo, name, date of birth, hobbies.
    #[default]
    Identity,
    /// Conditions, allergies, medication.
    Medical,
    /// Read-only summary.
    Review,
}

impl WizardPage {
    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Medical => 2,
            Self::Review => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::Medical),
            Self::Medical => Some(Self::Review),
            Self::Review => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::Medical => Some(Self::Identity),
            Self::Review => Some(Self::Medical),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileEditor {
    pub draft: ProfileData,
    page: WizardPage,
}

impl ProfileEditor {
    /// Mount the editor with an empty draft on the first page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> WizardPage {
        self.page
    }

    pub fn can_go_back(&self) -> bool {
        self.page.prev().is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.page.next().is_some()
    }

    /// "→": clamped at the review page.
    pub fn forward(&mut self) {
        if let Some(next) = self.page.next() {
            self.page = next;
        }
    }

    /// "←": clamped at the first page.
    pub fn back(&mut self) {
        if let Some(prev) = self.page.prev() {
            self.page = prev;
        }
    }

    /// "Save Profile" is only offered on the review page.
    pub fn can_save(&self) -> bool {
        self.page == WizardPage::Review
    }

    /// Copy the draft into the session. Returns false when not on the review page.
    pub fn save(&self, store: &mut SessionStore) -> bool {
        if !self.can_save() {
            return false;
        }
        store.set_profile(self.draft.clone());
        log::info!("Saved profile for {}", self.draft.display_name().trim());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_clamps_at_review() {
        let mut editor = ProfileEditor::new();
        assert_eq!(editor.page().number(), 1);
        assert!(!editor.can_go_back());

        editor.forward();
        editor.forward();
        assert_eq!(editor.page(), WizardPage::Review);
        assert!(!editor.can_go_forward());

        editor.forward();
        assert_eq!(editor.page(), WizardPage::Review);
    }

    #[test]
    fn test_back_clamps_at_identity() {
        let mut editor = ProfileEditor::new();
        editor.forward();
        editor.forward();

        editor.back();
        editor.back();
        assert_eq!(editor.page(), WizardPage::Identity);
        editor.back();
        assert_eq!(editor.page(), WizardPage::Identity);
    }

    #[test]
    fn test_save_only_from_review() {
        let mut store = SessionStore::new();
        let mut editor = ProfileEditor::new();
        editor.draft.first_name = "Ada".into();

        assert!(!editor.save(&mut store));
        editor.forward();
        assert!(!editor.save(&mut store));
        assert!(store.get().profile_data.is_none());

        editor.forward();
        assert!(editor.save(&mut store));
        assert_eq!(store.get().profile_data.as_ref().unwrap().first_name, "Ada");
    }

    #[test]
    fn test_unsaved_edits_are_discarded() {
        let mut store = SessionStore::new();
        store.set_profile(ProfileData {
            first_name: "Saved".into(),
            ..Default::default()
        });

        {
            let mut editor = ProfileEditor::new();
            editor.draft.first_name = "Unsaved".into();
        }

        assert_eq!(store.get().profile_data.as_ref().unwrap().first_name, "Saved");
        let editor = ProfileEditor::new();
        assert_eq!(editor.draft, ProfileData::default());
    }
}
