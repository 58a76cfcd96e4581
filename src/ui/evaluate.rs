// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Evaluation page: playback area, start/stop button, gauge and chart.

use crate::pages::evaluation::EvaluationRunner;
use crate::ui::chart;
use crate::util::timeline::format_time;
use rand::Rng;

pub enum EvaluateAction {
    None,
    Toggle,
}

pub fn show<R: Rng>(ui: &mut egui::Ui, runner: &EvaluationRunner<R>) -> EvaluateAction {
    let mut action = EvaluateAction::None;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            let size = egui::vec2(ui.available_width() * 0.45, 260.0);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 4.0, egui::Color32::BLACK);
            let text = if runner.can_run() {
                format!(
                    "{} / {}",
                    format_time(runner.position()),
                    format_time(runner.duration())
                )
            } else {
                "No video available for evaluation".to_string()
            };
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(200),
            );

            ui.add_space(8.0);
            if ui
                .add_enabled(runner.can_run(), egui::Button::new(runner.button_label()))
                .clicked()
            {
                action = EvaluateAction::Toggle;
            }
        });

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(runner.buffer().average_label()).size(20.0).strong());
            chart::show_gauge(ui, runner.buffer(), egui::vec2(28.0, 240.0));
        });

        ui.vertical(|ui| {
            let width = ui.available_width();
            chart::show_chart(ui, runner.buffer(), egui::vec2(width, 260.0));

            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(egui::RichText::new("Evaluation Results").strong());
                if runner.is_running() {
                    ui.label("Analysis in progress...");
                } else if runner.buffer().is_empty() {
                    ui.label("Start the analysis to collect severity samples.");
                } else {
                    ui.label(format!(
                        "{} sample(s), average severity {}",
                        runner.buffer().len(),
                        runner.buffer().average_label()
                    ));
                }
                if let Some(latest) = runner.buffer().latest() {
                    ui.label(format!(
                        "Latest: {} at {}",
                        latest.value,
                        format_time(latest.time)
                    ));
                }
            });
        });
    });

    action
}
