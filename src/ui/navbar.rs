// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top navigation bar.
//!
//! One entry per route plus the lab badge on the right. Returns the route
//! the user picked, if it differs from the current one.

use crate::app::Route;

/// Display the navigation bar.
pub fn show(ui: &mut egui::Ui, current: Route) -> Option<Route> {
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for route in Route::ALL {
            if ui.selectable_label(current == route, route.title()).clicked() && route != current {
                picked = Some(route);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("UF")
                    .strong()
                    .color(egui::Color32::from_rgb(250, 70, 22)),
            );
            ui.separator();
            ui.label(egui::RichText::new(current.path()).weak().monospace());
        });
    });

    picked
}
