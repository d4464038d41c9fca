use std::time::Duration;

use eframe::egui;

use super::{
    consultant::ConsultantView,
    dashboard::Dashboard,
    doc_review::DocReviewView,
    error_modal::ErrorModal,
    nav::{
        NavAction,
        NavShell,
    },
    scholarships::ScholarshipView,
    settings::{
        SettingsData,
        SettingsModal,
    },
    setup_banner::SetupBanner,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        models::AppView,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    gemini::GeminiClient,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";

pub struct StudyWiseApp {
    // UI State
    view: AppView,
    theme: Theme,

    // Views
    consultant: ConsultantView,
    scholarships: ScholarshipView,
    doc_review: DocReviewView,

    // Modals
    settings_modal: SettingsModal,
    error_modal: ErrorModal,

    // Configuration
    settings_data: SettingsData,

    // External Services
    client: GeminiClient,
    task_manager: TaskManager,
}

impl StudyWiseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let client = settings_data.build_client();
        let theme = Theme::studywise();

        set_theme(&cc.egui_ctx, &theme);
        apply_dark_mode(&cc.egui_ctx, settings_data.dark_mode);

        Self {
            view: AppView::Dashboard,
            theme,
            consultant: ConsultantView::new(),
            scholarships: ScholarshipView::new(),
            doc_review: DocReviewView::new(),
            settings_modal: SettingsModal::new(),
            error_modal: ErrorModal::new(),
            settings_data,
            client,
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ConsultantReply(result) => {
                self.consultant.apply_reply(result);
            }
            TaskResult::ScholarshipResults(result) => {
                if let Some(notice) = self.scholarships.apply_results(result) {
                    self.error_modal.show_error("Search Error", notice);
                }
            }
            TaskResult::DocumentFeedback(result) => {
                if let Some(notice) = self.doc_review.finish_analysis(result) {
                    self.error_modal.show_error("Analysis Error", notice);
                }
            }
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        self.settings_data = settings;
        self.client = self.settings_data.build_client();
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("[Settings] Failed to save settings: {}", e);
        }
    }

    fn request_pending(&self) -> bool {
        self.consultant.awaiting_reply || self.scholarships.searching || self.doc_review.analyzing
    }
}

impl eframe::App for StudyWiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) =
            NavShell::show(ctx, &mut self.view, &self.theme, self.settings_data.dark_mode)
        {
            match action {
                NavAction::OpenSettings => {
                    self.settings_modal.open_settings(self.settings_data.clone());
                }
                NavAction::ToggleDarkMode => {
                    self.settings_data.dark_mode = !self.settings_data.dark_mode;
                    apply_dark_mode(ctx, self.settings_data.dark_mode);
                    self.save_settings();
                }
            }
        }

        if SetupBanner::show(ctx, self.client.has_key()) {
            self.settings_modal.open_settings(self.settings_data.clone());
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            AppView::Dashboard => {
                if let Some(destination) = Dashboard::show(ui, &self.theme) {
                    self.view = destination;
                }
            }
            AppView::Consultant => {
                if let Some(transcript) = self.consultant.show(ui, &self.theme) {
                    self.task_manager.request_consultation(self.client.clone(), transcript);
                }
            }
            AppView::Scholarships => {
                if let Some(filters) = self.scholarships.show(ui, &self.theme) {
                    self.task_manager.search_scholarships(self.client.clone(), filters);
                }
            }
            AppView::DocReview => {
                if let Some((draft, kind)) = self.doc_review.show(ui, &self.theme) {
                    self.task_manager.review_document(self.client.clone(), draft, kind);
                }
            }
        });

        self.error_modal.show(ctx);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(settings);
        }

        // Keep polling the task channel while a reply is outstanding.
        if self.request_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });

    ctx.options_mut(|o| {
        o.theme_preference =
            if dark_mode { egui::ThemePreference::Dark } else { egui::ThemePreference::Light };
    });
}
