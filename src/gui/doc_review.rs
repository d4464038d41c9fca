use eframe::egui;

use super::theme::Theme;
use crate::core::{
    models::DocumentKind,
    templates::{
        templates_for,
        tips_for,
    },
};

pub const ANALYSIS_FAILED: &str = "Analysis failed. Please try again.";

const REPLACE_PROMPT: &str =
    "Choosing a template will replace your current text. Do you want to continue?";
const CLEAR_PROMPT: &str = "Clear all text?";

/// Drafts longer than this require confirmation before a template
/// overwrites them.
const REPLACE_CONFIRM_THRESHOLD: usize = 50;

pub struct DocReviewView {
    pub kind: DocumentKind,
    pub draft: String,
    pub analysis: Option<String>,
    pub analyzing: bool,
    /// Template index awaiting replace confirmation.
    pub pending_template: Option<usize>,
    pub confirm_clear: bool,
}

impl Default for DocReviewView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocReviewView {
    pub fn new() -> Self {
        Self {
            kind: DocumentKind::Sop,
            draft: String::new(),
            analysis: None,
            analyzing: false,
            pending_template: None,
            confirm_clear: false,
        }
    }

    /// Clears draft and analysis even when the selected kind is already
    /// active.
    pub fn select_kind(&mut self, kind: DocumentKind) {
        self.kind = kind;
        self.draft.clear();
        self.analysis = None;
        self.pending_template = None;
    }

    /// A template over a short or blank draft applies immediately; a draft
    /// worth keeping asks first.
    pub fn template_action(&mut self, index: usize) {
        if !self.draft.trim().is_empty() && self.draft.len() > REPLACE_CONFIRM_THRESHOLD {
            self.pending_template = Some(index);
        } else {
            self.apply_template(index);
        }
    }

    pub fn apply_template(&mut self, index: usize) {
        if let Some(template) = templates_for(self.kind).get(index) {
            self.draft = template.content.to_string();
            self.analysis = None;
        }
        self.pending_template = None;
    }

    pub fn decline_template(&mut self) {
        self.pending_template = None;
    }

    /// Clears the draft text only; any analysis stays on screen.
    pub fn clear_draft(&mut self) {
        self.draft.clear();
        self.confirm_clear = false;
    }

    /// Returns the draft and kind to dispatch; blank drafts and in-flight
    /// requests are inert.
    pub fn begin_analysis(&mut self) -> Option<(String, DocumentKind)> {
        if self.analyzing || self.draft.trim().is_empty() {
            return None;
        }

        self.analyzing = true;
        Some((self.draft.clone(), self.kind))
    }

    /// Failure keeps the prior analysis (if any) and returns the notice to
    /// raise.
    pub fn finish_analysis(&mut self, result: Result<String, String>) -> Option<&'static str> {
        self.analyzing = false;

        match result {
            Ok(text) => {
                self.analysis = Some(text);
                None
            }
            Err(e) => {
                eprintln!("[Gemini] Document analysis failed: {}", e);
                Some(ANALYSIS_FAILED)
            }
        }
    }

    pub fn return_to_tips(&mut self) {
        self.analysis = None;
    }

    pub fn word_count(&self) -> usize {
        self.draft.split_whitespace().count()
    }

    /// Returns the draft to dispatch when the user requested analysis.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<(String, DocumentKind)> {
        let mut request = None;

        ui.vertical_centered(|ui| {
            ui.heading(theme.heading(ui.ctx(), "SOP & LOR Expert"));
            ui.label(
                egui::RichText::new(
                    "Industry-standard document preparation for international admissions",
                )
                .color(theme.subtle(ui.ctx())),
            );
        });
        ui.add_space(8.0);

        self.toolbar(ui, theme);
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            request = self.editor_panel(&mut columns[0], theme);
            self.feedback_panel(&mut columns[1], theme);
        });

        self.confirm_dialogs(ui.ctx());

        request
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        ui.horizontal(|ui| {
            for kind in [DocumentKind::Sop, DocumentKind::Lor] {
                let selected = self.kind == kind;
                let label = if selected {
                    egui::RichText::new(kind.label()).color(theme.accent(ui.ctx())).strong()
                } else {
                    egui::RichText::new(kind.label())
                };

                // Clicking always resets, even on the active kind.
                if ui.selectable_label(selected, label).clicked() {
                    self.select_kind(kind);
                }
            }

            ui.separator();

            ui.menu_button(format!("{} Templates ⏷", self.kind.label()), |ui| {
                ui.set_min_width(260.0);
                ui.label(
                    egui::RichText::new("Select a structure to populate")
                        .small()
                        .color(theme.subtle(ui.ctx())),
                );
                ui.separator();

                let mut chosen = None;
                for (i, template) in templates_for(self.kind).iter().enumerate() {
                    let clicked = ui
                        .vertical(|ui| {
                            let response = ui.selectable_label(false, template.name);
                            ui.label(
                                egui::RichText::new(template.category)
                                    .small()
                                    .color(theme.accent(ui.ctx())),
                            );
                            response
                        })
                        .inner
                        .clicked();

                    if clicked {
                        chosen = Some(i);
                    }
                }

                if let Some(i) = chosen {
                    self.template_action(i);
                    ui.close();
                }
            });
        });
    }

    fn editor_panel(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<(String, DocumentKind)> {
        let mut request = None;

        card_frame(ui, theme).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(theme.heading(ui.ctx(), "Document Workspace"));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} WORDS", self.word_count()))
                            .small()
                            .color(theme.subtle(ui.ctx())),
                    );

                    if !self.draft.is_empty() {
                        let clear = ui.add(
                            egui::Button::new(
                                egui::RichText::new("CLEAR ALL")
                                    .small()
                                    .color(theme.red(ui.ctx())),
                            )
                            .frame(false),
                        );
                        if clear.clicked() {
                            self.confirm_clear = true;
                        }
                    }
                });
            });

            ui.add_space(6.0);

            let hint = format!(
                "Paste your {} here or select a template from the menu above to get started...",
                self.kind.label()
            );

            egui::ScrollArea::vertical().id_salt("doc_editor").max_height(360.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.draft)
                        .hint_text(hint)
                        .desired_width(ui.available_width())
                        .desired_rows(18),
                );
            });

            ui.add_space(8.0);

            let can_analyze = !self.analyzing && !self.draft.trim().is_empty();

            let button = if self.analyzing {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.add_enabled(false, egui::Button::new("CONSULTING AI EXPERT..."))
                })
                .inner
            } else {
                ui.add_enabled(
                    can_analyze,
                    egui::Button::new(egui::RichText::new("RUN EXPERT ANALYSIS").strong())
                        .min_size(egui::vec2(ui.available_width(), 36.0)),
                )
            };

            if button.clicked() {
                request = self.begin_analysis();
            }
        });

        request
    }

    fn feedback_panel(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        card_frame(ui, theme).show(ui, |ui| {
            ui.set_width(ui.available_width());

            match self.analysis.clone() {
                Some(analysis) => {
                    ui.horizontal(|ui| {
                        ui.label(theme.heading(ui.ctx(), "AI Expert Feedback"));

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(egui::RichText::new("RETURN TO TIPS").small()).clicked()
                            {
                                self.return_to_tips();
                            }
                        });
                    });
                    ui.add_space(6.0);

                    egui::ScrollArea::vertical()
                        .id_salt("doc_feedback")
                        .max_height(400.0)
                        .show(ui, |ui| {
                            ui.label(analysis);
                        });
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.label(theme.heading(ui.ctx(), "Document Review Portal"));
                        ui.label(
                            egui::RichText::new(
                                "Provide your draft to unlock comprehensive structural \
                                 feedback, line-by-line grammar improvements, and \
                                 university-standard tone adjustments.",
                            )
                            .color(theme.subtle(ui.ctx())),
                        );
                    });

                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("CORE STRUCTURAL TIPS")
                            .small()
                            .color(theme.subtle(ui.ctx())),
                    );
                    ui.add_space(4.0);

                    for (i, tip) in tips_for(self.kind).iter().enumerate() {
                        egui::Frame::new()
                            .fill(ui.visuals().faint_bg_color)
                            .corner_radius(8.0)
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(format!("{:02}", i + 1))
                                            .color(theme.accent(ui.ctx()))
                                            .strong(),
                                    );
                                    ui.label(egui::RichText::new(tip.title).strong());
                                });
                                ui.label(
                                    egui::RichText::new(tip.content)
                                        .small()
                                        .color(theme.subtle(ui.ctx())),
                                );
                            });
                        ui.add_space(6.0);
                    }
                }
            }
        });
    }

    fn confirm_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(index) = self.pending_template {
            match confirm_modal(ctx, "template_replace_confirm", REPLACE_PROMPT) {
                Some(true) => self.apply_template(index),
                Some(false) => self.decline_template(),
                None => {}
            }
        }

        if self.confirm_clear {
            match confirm_modal(ctx, "clear_draft_confirm", CLEAR_PROMPT) {
                Some(true) => self.clear_draft(),
                Some(false) => self.confirm_clear = false,
                None => {}
            }
        }
    }
}

fn card_frame(ui: &egui::Ui, theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card(ui.ctx()))
        .stroke(egui::Stroke::new(1.0, theme.card_border(ui.ctx())))
        .corner_radius(12.0)
        .inner_margin(14.0)
}

/// Blocking yes/no prompt. Dismissing the modal counts as a decline.
fn confirm_modal(ctx: &egui::Context, id: &str, message: &str) -> Option<bool> {
    let mut choice = None;

    let modal = egui::Modal::new(egui::Id::new(id)).show(ctx, |ui| {
        ui.set_width(340.0);
        ui.label(message);
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Yes").clicked() {
                choice = Some(true);
                ui.close();
            }
            if ui.button("No").clicked() {
                choice = Some(false);
                ui.close();
            }
        });
    });

    if modal.should_close() && choice.is_none() {
        choice = Some(false);
    }

    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::LOR_TEMPLATES;

    #[test]
    fn switching_kind_always_resets_draft_and_analysis() {
        let mut view = DocReviewView::new();
        view.draft = "half-written essay".to_string();
        view.analysis = Some("feedback".to_string());

        view.select_kind(DocumentKind::Lor);

        assert_eq!(view.kind, DocumentKind::Lor);
        assert!(view.draft.is_empty());
        assert!(view.analysis.is_none());

        // Re-selecting the active kind resets too.
        view.draft = "new letter".to_string();
        view.select_kind(DocumentKind::Lor);
        assert!(view.draft.is_empty());
    }

    #[test]
    fn template_over_empty_draft_applies_without_confirmation() {
        let mut view = DocReviewView::new();

        view.template_action(0);

        assert!(view.pending_template.is_none());
        assert_eq!(view.draft, templates_for(DocumentKind::Sop)[0].content);
    }

    #[test]
    fn template_over_a_long_draft_requires_confirmation() {
        let mut view = DocReviewView::new();
        let long_draft = "x".repeat(51);
        view.draft = long_draft.clone();

        view.template_action(1);

        assert_eq!(view.pending_template, Some(1));
        assert_eq!(view.draft, long_draft, "draft untouched until confirmed");

        view.decline_template();
        assert!(view.pending_template.is_none());
        assert_eq!(view.draft, long_draft, "declining leaves the draft unchanged");

        view.template_action(1);
        view.apply_template(1);
        assert_eq!(view.draft, templates_for(DocumentKind::Sop)[1].content);
    }

    #[test]
    fn short_or_whitespace_drafts_skip_the_confirmation() {
        let mut view = DocReviewView::new();

        view.draft = "short".to_string();
        view.template_action(0);
        assert!(view.pending_template.is_none());

        // 60 spaces: long but blank, so no prompt either.
        view.draft = " ".repeat(60);
        view.template_action(0);
        assert!(view.pending_template.is_none());
    }

    #[test]
    fn applying_a_template_clears_any_analysis() {
        let mut view = DocReviewView::new();
        view.analysis = Some("old feedback".to_string());

        view.apply_template(0);

        assert!(view.analysis.is_none());
    }

    #[test]
    fn academic_lor_template_lands_verbatim() {
        let mut view = DocReviewView::new();
        view.select_kind(DocumentKind::Lor);

        let index = LOR_TEMPLATES
            .iter()
            .position(|t| t.name == "Academic (Technical Professor)")
            .expect("catalog should contain the academic template");
        view.template_action(index);

        assert_eq!(view.draft, LOR_TEMPLATES[index].content);
        assert!(view.analysis.is_none());
    }

    #[test]
    fn clear_draft_keeps_the_analysis() {
        let mut view = DocReviewView::new();
        view.draft = "some text".to_string();
        view.analysis = Some("feedback".to_string());

        view.clear_draft();

        assert!(view.draft.is_empty());
        assert_eq!(view.analysis.as_deref(), Some("feedback"));
    }

    #[test]
    fn blank_drafts_cannot_be_analyzed() {
        let mut view = DocReviewView::new();

        assert!(view.begin_analysis().is_none());

        view.draft = "   \n  ".to_string();
        assert!(view.begin_analysis().is_none());
    }

    #[test]
    fn analysis_round_trip() {
        let mut view = DocReviewView::new();
        view.draft = "My statement of purpose.".to_string();

        let (draft, kind) = view.begin_analysis().expect("non-blank draft should dispatch");
        assert_eq!(draft, "My statement of purpose.");
        assert_eq!(kind, DocumentKind::Sop);
        assert!(view.analyzing);

        // A second request while one is in flight is inert.
        assert!(view.begin_analysis().is_none());

        assert!(view.finish_analysis(Ok("Structured feedback".to_string())).is_none());
        assert_eq!(view.analysis.as_deref(), Some("Structured feedback"));
        assert!(!view.analyzing);
    }

    #[test]
    fn failed_analysis_keeps_the_prior_one_and_raises_one_notice() {
        let mut view = DocReviewView::new();
        view.draft = "draft v2".to_string();
        view.analysis = Some("earlier feedback".to_string());

        assert!(view.begin_analysis().is_some());
        let notice = view.finish_analysis(Err("timeout".to_string()));

        assert_eq!(notice, Some(ANALYSIS_FAILED));
        assert_eq!(view.analysis.as_deref(), Some("earlier feedback"));
        assert!(!view.analyzing);
    }

    #[test]
    fn return_to_tips_clears_only_the_analysis() {
        let mut view = DocReviewView::new();
        view.draft = "kept".to_string();
        view.analysis = Some("feedback".to_string());

        view.return_to_tips();

        assert!(view.analysis.is_none());
        assert_eq!(view.draft, "kept");
    }

    #[test]
    fn word_count_is_whitespace_delimited() {
        let mut view = DocReviewView::new();
        assert_eq!(view.word_count(), 0);

        view.draft = "  one   two\nthree\t".to_string();
        assert_eq!(view.word_count(), 3);
    }
}
