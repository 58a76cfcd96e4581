// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile wizard view.
//!
//! Text fields bind straight to the editor's draft. Navigation and saving
//! are reported back as a [`ProfileAction`].

use crate::models::profile::ProfileData;
use crate::pages::profile::{ProfileEditor, WizardPage};

pub enum ProfileAction {
    None,
    Back,
    Forward,
    Save,
}

pub fn show(ui: &mut egui::Ui, editor: &mut ProfileEditor) -> ProfileAction {
    let mut action = ProfileAction::None;

    ui.heading("Patient Information");
    ui.label(egui::RichText::new(format!("Step {} of 3", editor.page().number())).weak());
    ui.separator();

    match editor.page() {
        WizardPage::Identity => identity_fields(ui, &mut editor.draft),
        WizardPage::Medical => medical_fields(ui, &mut editor.draft),
        WizardPage::Review => review(ui, &editor.draft),
    }

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        if editor.can_go_back() && ui.button("←").clicked() {
            action = ProfileAction::Back;
        }
        if editor.can_go_forward() && ui.button("→").clicked() {
            action = ProfileAction::Forward;
        }
        if editor.can_save() && ui.button("Save Profile").clicked() {
            action = ProfileAction::Save;
        }
    });

    action
}

fn identity_fields(ui: &mut egui::Ui, draft: &mut ProfileData) {
    ui.horizontal(|ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(egui::vec2(120.0, 120.0));
            ui.vertical_centered(|ui| {
                ui.label("Patient Photo");
                // Photo upload is not wired up yet.
                ui.add_enabled(false, egui::Button::new("Choose..."));
            });
        });

        egui::Grid::new("identity_fields")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("First name:");
                ui.text_edit_singleline(&mut draft.first_name);
                ui.end_row();

                ui.label("Last name:");
                ui.text_edit_singleline(&mut draft.last_name);
                ui.end_row();

                ui.label("DOB:");
                ui.add(egui::TextEdit::singleline(&mut draft.dob).hint_text("YYYY-MM-DD"));
                ui.end_row();
            });
    });

    ui.add_space(8.0);
    ui.label("Hobbies:");
    ui.add(
        egui::TextEdit::multiline(&mut draft.hobbies)
            .hint_text("Enter patient's hobbies...")
            .desired_rows(3),
    );
}

fn medical_fields(ui: &mut egui::Ui, draft: &mut ProfileData) {
    let fields = [
        ("Preexisting conditions:", "Enter any preexisting conditions...", &mut draft.preexisting_conditions),
        ("Allergies:", "Enter any allergies...", &mut draft.allergies),
        ("Medication:", "Enter current medications...", &mut draft.medication),
    ];
    for (label, hint, value) in fields {
        ui.label(label);
        ui.add(egui::TextEdit::multiline(value).hint_text(hint).desired_rows(3));
        ui.add_space(6.0);
    }
}

fn review(ui: &mut egui::Ui, draft: &ProfileData) {
    ui.label(egui::RichText::new("Review Information").strong());
    egui::Grid::new("profile_review")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            let rows = [
                ("Name:", draft.display_name()),
                ("DOB:", draft.dob.clone()),
                ("Hobbies:", draft.hobbies.clone()),
                ("Preexisting Conditions:", draft.preexisting_conditions.clone()),
                ("Allergies:", draft.allergies.clone()),
                ("Medication:", draft.medication.clone()),
            ];
            for (label, value) in rows {
                ui.label(egui::RichText::new(label).strong());
                ui.label(value);
                ui.end_row();
            }
        });
}
