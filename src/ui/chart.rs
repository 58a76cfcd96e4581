// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Severity chart and gauge drawing.
//!
//! Both work in the 0..=100 chart space produced by [`SeverityBuffer`] and
//! scale it to the allocated rectangle.

use crate::pages::evaluation::{SeverityBuffer, GAUGE_DIVISIONS, GRID_LINES};

const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

/// Map a chart-space point into `rect`.
fn to_screen(rect: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + rect.width() * (x / 100.0) as f32,
        rect.min.y + rect.height() * (y / 100.0) as f32,
    )
}

/// Line chart of buffered severity samples.
pub fn show_chart(ui: &mut egui::Ui, buffer: &SeverityBuffer, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(30));

    if buffer.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Analysis data will appear here",
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(150),
        );
        return;
    }

    for y in GRID_LINES {
        painter.line_segment(
            [to_screen(rect, 0.0, y), to_screen(rect, 100.0, y)],
            egui::Stroke::new(0.5, egui::Color32::from_gray(90)),
        );
    }

    let points: Vec<egui::Pos2> = buffer
        .chart_points()
        .into_iter()
        .map(|(x, y)| to_screen(rect, x, y))
        .collect();
    painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, LINE_COLOR)));
    for point in points {
        painter.circle_filled(point, 2.0, LINE_COLOR);
    }

    painter.text(
        rect.left_top() + egui::vec2(4.0, 4.0),
        egui::Align2::LEFT_TOP,
        "Severity (1-10)",
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(170),
    );
    painter.text(
        rect.center_bottom() - egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_BOTTOM,
        "Time (seconds)",
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(170),
    );
}

/// Vertical gauge filled to the average severity, with a marker line.
pub fn show_gauge(ui: &mut egui::Ui, buffer: &SeverityBuffer, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(45));

    if !buffer.is_empty() {
        let fill = (buffer.gauge_fill_percent() / 100.0) as f32;
        let fill_rect = egui::Rect::from_min_max(
            egui::pos2(rect.min.x, rect.max.y - rect.height() * fill),
            rect.max,
        );
        painter.rect_filled(fill_rect, 2.0, LINE_COLOR.gamma_multiply(0.7));
    }

    for i in 1..GAUGE_DIVISIONS {
        let y = rect.min.y + rect.height() * i as f32 / GAUGE_DIVISIONS as f32;
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, egui::Color32::from_gray(80)),
        );
    }

    if !buffer.is_empty() {
        let y = rect.min.y + rect.height() * (buffer.marker_top_percent() / 100.0) as f32 - 1.0;
        painter.line_segment(
            [egui::pos2(rect.min.x - 4.0, y), egui::pos2(rect.max.x + 4.0, y)],
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }
}
