// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Home page: title, intake buttons and instructions.

use crate::pages::home::HomePage;

/// Result of home page interaction.
pub enum HomeAction {
    None,
    NewPatient,
    UploadExisting,
}

const INSTRUCTIONS: [&str; 5] = [
    "Choose new or existing patient",
    "Fill out profile",
    "Upload and submit if necessary",
    "Start Evaluation",
    "Save all patient data",
];

pub fn show(ui: &mut egui::Ui, page: &HomePage) -> HomeAction {
    let mut action = HomeAction::None;

    ui.columns(2, |cols| {
        cols[0].vertical(|ui| {
            ui.add_space(40.0);
            ui.heading(
                egui::RichText::new("Parkinson AI Diagnostic System (PAIDS)")
                    .size(28.0)
                    .strong(),
            );
            ui.add_space(10.0);
            ui.label("Capture a patient profile, segment a recorded examination and review a severity estimate.");
            ui.add_space(40.0);
            ui.label(egui::RichText::new("Developed by UF SmartSystem Labs").weak());
        });

        cols[1].vertical_centered(|ui| {
            ui.add_space(40.0);
            if ui
                .add_sized([240.0, 40.0], egui::Button::new("Upload Existing Patient"))
                .clicked()
            {
                action = HomeAction::UploadExisting;
            }
            ui.label(egui::RichText::new("Upload a CSV file with patient information").weak());

            if let Some(error) = page.import_error() {
                ui.add_space(6.0);
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
            }

            ui.add_space(20.0);
            if ui
                .add_sized([240.0, 40.0], egui::Button::new("New Patient"))
                .clicked()
            {
                action = HomeAction::NewPatient;
            }

            ui.add_space(30.0);
            ui.label(egui::RichText::new("Instructions").strong());
            for (i, step) in INSTRUCTIONS.iter().enumerate() {
                ui.label(format!("{}. {}", i + 1, step));
            }
        });
    });

    action
}
