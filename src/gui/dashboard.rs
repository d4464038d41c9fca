use eframe::egui;

use super::theme::Theme;
use crate::core::models::AppView;

const HERO_SUBTITLE: &str = "Expert-level study abroad guidance for Indian students. From \
                             scholarship matching to SOP drafting, we manage the complexity so \
                             you can focus on your future.";

const WHY_POINTS: &[&str] = &[
    "Zero Commission Bias: No paid university tie-ups.",
    "Focus on ROI: Find the best education at the lowest cost.",
    "Admissions Expert: AI trained on top university acceptance data.",
    "Document Refinement: Line-by-line expert editing tips.",
];

pub struct Dashboard;

impl Dashboard {
    /// Static landing content; returns the view the user navigated to.
    pub fn show(ui: &mut egui::Ui, theme: &Theme) -> Option<AppView> {
        let mut navigate = None;

        egui::ScrollArea::vertical().id_salt("dashboard_scroll").auto_shrink([false, false]).show(
            ui,
            |ui| {
                // Hero
                egui::Frame::new()
                    .fill(theme.bubble_user(ui.ctx()))
                    .corner_radius(16.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            egui::RichText::new("Dreams without Borders.")
                                .size(30.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(HERO_SUBTITLE)
                                .size(15.0)
                                .color(egui::Color32::from_gray(230)),
                        );
                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            if ui.button("Start Free Consultation").clicked() {
                                navigate = Some(AppView::Consultant);
                            }
                            if ui.button("Review my SOP/LOR").clicked() {
                                navigate = Some(AppView::DocReview);
                            }
                        });
                    });

                ui.add_space(16.0);
                ui.label(theme.heading(ui.ctx(), "Expert Toolset"));
                ui.add_space(6.0);

                let cards: [(&str, &str, &str, AppView); 3] = [
                    (
                        "🤖",
                        "Smart Counselor",
                        "Personalized university matching based on your GPA, budget, and \
                         career goals.",
                        AppView::Consultant,
                    ),
                    (
                        "💰",
                        "Scholarship Radar",
                        "Real-time tracking of funding for Indian students with verified links.",
                        AppView::Scholarships,
                    ),
                    (
                        "✍",
                        "SOP/LOR Expert",
                        "Deep analysis and structural improvements for your application \
                         documents.",
                        AppView::DocReview,
                    ),
                ];

                ui.columns(3, |columns| {
                    for (column, (glyph, title, blurb, view)) in columns.iter_mut().zip(cards) {
                        if tool_card(column, theme, glyph, title, blurb) {
                            navigate = Some(view);
                        }
                    }
                });

                ui.add_space(16.0);

                egui::Frame::new()
                    .fill(theme.card(ui.ctx()))
                    .stroke(egui::Stroke::new(1.0, theme.card_border(ui.ctx())))
                    .corner_radius(12.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(theme.heading(ui.ctx(), "Why StudyWise AI?"));
                        ui.add_space(6.0);
                        for point in WHY_POINTS {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new("✔").color(theme.green(ui.ctx())),
                                );
                                ui.label(*point);
                            });
                        }
                    });
            },
        );

        navigate
    }
}

fn tool_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    glyph: &str,
    title: &str,
    blurb: &str,
) -> bool {
    let response = egui::Frame::new()
        .fill(theme.card(ui.ctx()))
        .stroke(egui::Stroke::new(1.0, theme.card_border(ui.ctx())))
        .corner_radius(12.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(glyph).size(26.0));
            ui.label(egui::RichText::new(title).strong());
            ui.label(egui::RichText::new(blurb).small().color(theme.subtle(ui.ctx())));
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}
