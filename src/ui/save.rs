// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Save page view.

use crate::pages::save::{SaveNotice, SavePage, SaveStatus};

pub enum SaveAction {
    None,
    Save,
}

pub fn show(ui: &mut egui::Ui, page: &mut SavePage, status: SaveStatus) -> SaveAction {
    let mut action = SaveAction::None;

    ui.label(
        egui::RichText::new(
            "Disclaimer: All data will be saved in a single JSON file containing both profile and video segment information.",
        )
        .italics(),
    );
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label("File Name:");
        ui.add(egui::TextEdit::singleline(&mut page.file_name).hint_text("Enter file name"));
        if ui
            .add_enabled(status.is_complete(), egui::Button::new("Save All Data"))
            .clicked()
        {
            action = SaveAction::Save;
        }
    });

    ui.add_space(12.0);
    status_item(ui, "Profile Data", status.profile);
    status_item(ui, "Video Segments", status.segments);

    match page.notice() {
        Some(SaveNotice::Saved(path)) => {
            ui.add_space(8.0);
            ui.label(format!("Saved to {}", path.display()));
        }
        Some(SaveNotice::Failed(error)) => {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
        }
        None => {}
    }

    action
}

fn status_item(ui: &mut egui::Ui, name: &str, done: bool) {
    let (text, color) = if done {
        ("✓", egui::Color32::from_rgb(76, 175, 80))
    } else {
        ("Pending", egui::Color32::from_rgb(230, 160, 40))
    };
    ui.horizontal(|ui| {
        ui.label(format!("{}:", name));
        ui.colored_label(color, text);
    });
}

/// Blocking message window. Returns true once dismissed.
pub fn show_alert(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new("Cannot save")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    dismissed
}
