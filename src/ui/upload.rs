// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload page: video preview, timeline and the segment list.

use crate::models::segment::{SegmentId, VideoSegment};
use crate::pages::segmenter::Segmenter;
use crate::ui::timeline;
use crate::util::timeline::format_time;

/// Result of upload page interaction.
pub enum UploadAction {
    None,
    PickVideo,
    TogglePlayback,
    Seek { x: f32, width: f32 },
    ToggleMark,
    ToggleSelected(SegmentId),
    ToggleSelectAll,
    DeleteSelected,
    SaveSegments,
}

pub fn show(ui: &mut egui::Ui, segmenter: &mut Segmenter) -> UploadAction {
    let Some(video) = segmenter.video() else {
        return upload_prompt(ui);
    };
    let mut action = UploadAction::None;

    let name = video.file.name.clone();
    let url = video.url.as_str().to_string();
    let current = segmenter.current_time();
    let duration = segmenter.duration();

    // Preview area
    let preview_height = (ui.available_height() * 0.45).max(160.0);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), preview_height),
        egui::Sense::click(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::BLACK);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{}\n{}", name, url),
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(200),
    );
    if response.clicked() {
        action = UploadAction::TogglePlayback;
    }

    ui.add_space(6.0);
    if let Some(click) = timeline::show(
        ui,
        current,
        duration,
        segmenter.segments.iter().map(|s| &s.segment),
        segmenter.pending_segment().as_ref(),
    ) {
        action = UploadAction::Seek {
            x: click.x,
            width: click.width,
        };
    }

    ui.horizontal(|ui| {
        let play_label = if segmenter.is_playing() { "⏸" } else { "▶" };
        if ui.button(play_label).clicked() {
            action = UploadAction::TogglePlayback;
        }

        let mark = segmenter.mark_state();
        let mut button = egui::Button::new(mark.button_label());
        if mark.is_marking() {
            button = button.fill(egui::Color32::from_rgb(180, 50, 50));
        }
        if ui.add(button).clicked() {
            action = UploadAction::ToggleMark;
        }

        ui.label(format!("{} / {}", format_time(current), format_time(duration)));

        ui.separator();
        if ui.button("Change Video...").clicked() {
            action = UploadAction::PickVideo;
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(segmenter.segments.can_delete(), egui::Button::new("Delete Selected"))
            .clicked()
        {
            action = UploadAction::DeleteSelected;
        }
        if ui
            .add_enabled(segmenter.can_save(), egui::Button::new("Save Segments"))
            .clicked()
        {
            action = UploadAction::SaveSegments;
        }
    });

    let mut all = segmenter.segments.all_selected();
    if ui.checkbox(&mut all, "Select All").changed() {
        action = UploadAction::ToggleSelectAll;
    }

    let rows: Vec<(SegmentId, VideoSegment)> = segmenter
        .segments
        .iter()
        .map(|s| (s.id, s.segment.clone()))
        .collect();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (id, segment) in rows {
            ui.horizontal(|ui| {
                let mut checked = segmenter.segments.is_selected(id);
                if ui.checkbox(&mut checked, "").changed() {
                    action = UploadAction::ToggleSelected(id);
                }
                ui.label(
                    egui::RichText::new(format!(
                        "{} - {}",
                        format_time(segment.start),
                        format_time(segment.end)
                    ))
                    .monospace(),
                );
                if let Some(label) = segmenter.segments.label_mut(id) {
                    ui.add(
                        egui::TextEdit::singleline(label)
                            .hint_text("Enter segment label")
                            .desired_width(f32::INFINITY),
                    );
                }
            });
        }
    });

    action
}

fn upload_prompt(ui: &mut egui::Ui) -> UploadAction {
    let mut action = UploadAction::None;
    ui.centered_and_justified(|ui| {
        if ui
            .add(egui::Button::new(egui::RichText::new("↑\nUpload Video").size(24.0)).frame(false))
            .clicked()
        {
            action = UploadAction::PickVideo;
        }
    });
    action
}
