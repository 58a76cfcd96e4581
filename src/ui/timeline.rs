// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video timeline scrubber control.
//!
//! Draws playback progress, saved draft segments and the segment being
//! marked. A click reports its horizontal offset so the caller can seek.

use crate::models::segment::VideoSegment;
use crate::util::timeline::{format_time, progress_fraction, segment_span};

const HEIGHT: f32 = 28.0;

/// Where the timeline was clicked, in widget-local pixels.
pub struct TimelineClick {
    pub x: f32,
    pub width: f32,
}

pub fn show<'a>(
    ui: &mut egui::Ui,
    current_time: f64,
    duration: f64,
    segments: impl Iterator<Item = &'a VideoSegment>,
    pending: Option<&VideoSegment>,
) -> Option<TimelineClick> {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, HEIGHT), egui::Sense::click());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(60));

    let progress = progress_fraction(current_time, duration) as f32;
    let progress_rect = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * progress, rect.height()));
    painter.rect_filled(progress_rect, 4.0, egui::Color32::from_gray(110));

    for segment in segments {
        draw_span(&painter, rect, segment, duration, egui::Color32::from_rgba_unmultiplied(255, 200, 0, 160));
        if response.hovered() {
            if let Some(pos) = response.hover_pos() {
                let (left, span) = segment_span(segment, duration);
                let x = (pos.x - rect.min.x) / rect.width();
                if (x as f64) >= left && (x as f64) <= left + span {
                    response.clone().on_hover_text(format!(
                        "{} - {}: {}",
                        format_time(segment.start),
                        format_time(segment.end),
                        segment.label
                    ));
                }
            }
        }
    }

    if let Some(segment) = pending {
        draw_span(&painter, rect, segment, duration, egui::Color32::from_rgba_unmultiplied(255, 80, 80, 170));
    }

    // Playhead
    let x = rect.min.x + rect.width() * progress;
    painter.line_segment(
        [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
        egui::Stroke::new(2.0, egui::Color32::WHITE),
    );

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return Some(TimelineClick {
                x: pos.x - rect.min.x,
                width: rect.width(),
            });
        }
    }
    None
}

fn draw_span(
    painter: &egui::Painter,
    rect: egui::Rect,
    segment: &VideoSegment,
    duration: f64,
    color: egui::Color32,
) {
    let (left, span) = segment_span(segment, duration);
    let min = egui::pos2(rect.min.x + rect.width() * left as f32, rect.min.y + 4.0);
    // Keep zero-length segments visible.
    let w = (rect.width() * span as f32).max(2.0);
    painter.rect_filled(
        egui::Rect::from_min_size(min, egui::vec2(w, rect.height() - 8.0)),
        2.0,
        color,
    );
}
