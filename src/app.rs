// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application shell: it owns the session store,
//! tracks the current route, mounts the page for that route and dispatches
//! the actions each page view reports back.

use crate::config::AppConfig;
use crate::io::{handles::MediaUrls, media};
use crate::models::session::SessionStore;
use crate::pages::{
    evaluation::EvaluationRunner,
    home::{HomeOutcome, HomePage},
    profile::ProfileEditor,
    save::{SavePage, SaveRequest, SaveStatus},
    segmenter::Segmenter,
};
use crate::ui::{evaluate, home, navbar, profile, save, upload};
use std::time::Instant;

/// Navigation target. Exactly one page is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile,
    Upload,
    Evaluate,
    Save,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Profile,
        Route::Upload,
        Route::Evaluate,
        Route::Save,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Upload => "/upload",
            Route::Evaluate => "/evaluate",
            Route::Save => "/save",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Upload => "Upload",
            Route::Evaluate => "Evaluate",
            Route::Save => "Save",
        }
    }
}

/// State of the mounted page.
enum ActivePage {
    Home(HomePage),
    Profile(ProfileEditor),
    Upload(Segmenter),
    Evaluate(EvaluationRunner),
    Save(SavePage),
}

/// Main application state.
pub struct PaidsApp {
    config: AppConfig,

    /// Everything entered this session
    store: SessionStore,

    /// Playback handle registry shared by the upload and evaluate pages
    urls: MediaUrls,

    route: Route,
    page: ActivePage,

    /// Time of the previous frame, for advancing playback
    last_frame: Instant,
}

impl PaidsApp {
    /// Create a new application instance on the home page.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: SessionStore::new(),
            urls: MediaUrls::new(),
            route: Route::Home,
            page: ActivePage::Home(HomePage::new()),
            last_frame: Instant::now(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Switch to `route`, dropping the current page and its drafts.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        // Unmount first so handles and timers are released before the next page mounts.
        self.page = ActivePage::Home(HomePage::new());
        self.page = self.mount(route);
        self.route = route;
        log::info!("Navigated to {}", route.path());
    }

    fn mount(&self, route: Route) -> ActivePage {
        match route {
            Route::Home => ActivePage::Home(HomePage::new()),
            Route::Profile => ActivePage::Profile(ProfileEditor::new()),
            Route::Upload => ActivePage::Upload(Segmenter::new(self.urls.clone())),
            Route::Evaluate => ActivePage::Evaluate(EvaluationRunner::new(
                &self.store,
                &self.urls,
                self.config.sample_period(),
                self.config.buffer_capacity,
                rand::thread_rng(),
            )),
            Route::Save => ActivePage::Save(SavePage::new(&self.config.default_export_name)),
        }
    }

    fn show_page(&mut self, ui: &mut egui::Ui, now: Instant) -> Option<Route> {
        let mut next_route = None;

        match &mut self.page {
            ActivePage::Home(page) => match home::show(ui, page) {
                home::HomeAction::NewPatient => page.new_patient(&mut self.store),
                home::HomeAction::UploadExisting => {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                    {
                        if page.import_existing(&mut self.store, &path) == HomeOutcome::OpenProfile {
                            next_route = Some(Route::Profile);
                        }
                    }
                }
                home::HomeAction::None => {}
            },

            ActivePage::Profile(editor) => match profile::show(ui, editor) {
                profile::ProfileAction::Back => editor.back(),
                profile::ProfileAction::Forward => editor.forward(),
                profile::ProfileAction::Save => {
                    editor.save(&mut self.store);
                }
                profile::ProfileAction::None => {}
            },

            ActivePage::Upload(segmenter) => match upload::show(ui, segmenter) {
                upload::UploadAction::PickVideo => {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Video", &["mp4", "m4v", "mov", "webm", "mkv", "avi"])
                        .pick_file()
                    {
                        match media::probe_video(&path) {
                            Ok(file) => segmenter.load_video(&mut self.store, file),
                            Err(e) => log::error!("Failed to open video: {}", e),
                        }
                    }
                }
                upload::UploadAction::TogglePlayback => segmenter.toggle_playback(),
                upload::UploadAction::Seek { x, width } => segmenter.seek_click(x, width),
                upload::UploadAction::ToggleMark => {
                    segmenter.toggle_mark();
                }
                upload::UploadAction::ToggleSelected(id) => segmenter.segments.toggle_selected(id),
                upload::UploadAction::ToggleSelectAll => segmenter.segments.toggle_select_all(),
                upload::UploadAction::DeleteSelected => {
                    segmenter.delete_selected();
                }
                upload::UploadAction::SaveSegments => {
                    segmenter.save(&mut self.store);
                }
                upload::UploadAction::None => {}
            },

            ActivePage::Evaluate(runner) => match evaluate::show(ui, runner) {
                evaluate::EvaluateAction::Toggle => runner.toggle(now),
                evaluate::EvaluateAction::None => {}
            },

            ActivePage::Save(page) => {
                let status = SaveStatus::of(self.store.get());
                if let save::SaveAction::Save = save::show(ui, page, status) {
                    if let SaveRequest::ChooseLocation { file_name } = page.request(self.store.get()) {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_file_name(file_name)
                            .save_file()
                        {
                            page.write(self.store.get(), &path);
                        }
                    }
                }
            }
        }

        next_route
    }

    /// Advance time-driven page state and schedule the next repaint.
    fn tick(&mut self, ctx: &egui::Context, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        match &mut self.page {
            ActivePage::Upload(segmenter) => {
                segmenter.update(elapsed);
                if segmenter.is_playing() {
                    ctx.request_repaint();
                }
            }
            ActivePage::Evaluate(runner) => {
                runner.update(now, elapsed);
                if runner.is_running() {
                    // Keep the playback readout moving between samples.
                    ctx.request_repaint();
                }
                if let Some(deadline) = runner.next_deadline() {
                    ctx.request_repaint_after(deadline.saturating_duration_since(now));
                }
            }
            _ => {}
        }
    }
}

impl eframe::App for PaidsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(ctx, now);

        // Navigation bar
        let picked = egui::TopBottomPanel::top("navbar")
            .show(ctx, |ui| navbar::show(ui, self.route))
            .inner;
        if let Some(route) = picked {
            self.navigate(route);
        }

        // Blocking alert from the save page
        let mut alert_dismissed = false;
        if let ActivePage::Save(page) = &self.page {
            if let Some(message) = page.alert() {
                alert_dismissed = save::show_alert(ctx, message);
            }
        }
        if alert_dismissed {
            if let ActivePage::Save(page) = &mut self.page {
                page.dismiss_alert();
            }
        }

        let next_route = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(!self.has_alert(), |ui| self.show_page(ui, now))
                    .inner
            })
            .inner;
        if let Some(route) = next_route {
            self.navigate(route);
        }
    }
}

impl PaidsApp {
    fn has_alert(&self) -> bool {
        matches!(&self.page, ActivePage::Save(page) if page.alert().is_some())
    }
}
