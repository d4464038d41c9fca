use eframe::egui;

use super::theme::Theme;
use crate::core::models::AppView;

/// Side rail on wide windows, bottom bar on narrow ones.
const WIDE_BREAKPOINT: f32 = 720.0;

const NAV_ITEMS: [(AppView, &str, &str); 4] = [
    (AppView::Dashboard, "🏠", "Home"),
    (AppView::Consultant, "🎓", "Study AI"),
    (AppView::Scholarships, "💰", "Scholarships"),
    (AppView::DocReview, "✍", "SOP/LOR Expert"),
];

pub enum NavAction {
    OpenSettings,
    ToggleDarkMode,
}

pub struct NavShell;

impl NavShell {
    pub fn show(
        ctx: &egui::Context,
        current: &mut AppView,
        theme: &Theme,
        dark_mode: bool,
    ) -> Option<NavAction> {
        let wide = ctx.screen_rect().width() >= WIDE_BREAKPOINT;

        if wide {
            Self::side_rail(ctx, current, theme, dark_mode)
        } else {
            Self::bottom_bar(ctx, current, theme)
        }
    }

    fn side_rail(
        ctx: &egui::Context,
        current: &mut AppView,
        theme: &Theme,
        dark_mode: bool,
    ) -> Option<NavAction> {
        let mut action = None;

        egui::SidePanel::left("nav_rail").exact_width(200.0).resizable(false).show(ctx, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("StudyWise AI")
                        .size(20.0)
                        .strong()
                        .color(theme.accent(ui.ctx())),
                );
                ui.label(
                    egui::RichText::new("Global Ed-Tech Assistant")
                        .small()
                        .color(theme.subtle(ui.ctx())),
                );
            });
            ui.add_space(20.0);

            for (view, glyph, label) in NAV_ITEMS {
                let selected = *current == view;
                let text = format!("{}  {}", glyph, label);
                let rich = if selected {
                    egui::RichText::new(text).color(theme.accent(ui.ctx())).strong()
                } else {
                    egui::RichText::new(text)
                };

                if ui.selectable_label(selected, rich).clicked() {
                    *current = view;
                }
                ui.add_space(4.0);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("⚙ Settings").clicked() {
                        action = Some(NavAction::OpenSettings);
                    }
                    let mode_glyph = if dark_mode { "☀" } else { "🌙" };
                    if ui.button(mode_glyph).on_hover_text("Switch theme").clicked() {
                        action = Some(NavAction::ToggleDarkMode);
                    }
                });
            });
        });

        action
    }

    fn bottom_bar(
        ctx: &egui::Context,
        current: &mut AppView,
        theme: &Theme,
    ) -> Option<NavAction> {
        let mut action = None;

        egui::TopBottomPanel::bottom("nav_bar").exact_height(52.0).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                for (view, glyph, label) in NAV_ITEMS {
                    let selected = *current == view;
                    let text = format!("{} {}", glyph, label);
                    let rich = if selected {
                        egui::RichText::new(text).color(theme.accent(ui.ctx())).strong()
                    } else {
                        egui::RichText::new(text).small()
                    };

                    if ui.selectable_label(selected, rich).clicked() {
                        *current = view;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").clicked() {
                        action = Some(NavAction::OpenSettings);
                    }
                });
            });
        });

        action
    }
}
