use eframe::egui;

use super::theme::Theme;
use crate::core::models::{
    ScholarshipFilters,
    SearchOutcome,
};

pub const SEARCH_FAILED: &str = "Failed to fetch scholarships. Please try again.";

const NO_LINKS: &str = "No direct links found. Please check university official sites.";

pub struct ScholarshipView {
    pub filters: ScholarshipFilters,
    pub results: Option<SearchOutcome>,
    pub searching: bool,
}

impl Default for ScholarshipView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScholarshipView {
    pub fn new() -> Self {
        Self { filters: ScholarshipFilters::default(), results: None, searching: false }
    }

    /// Returns the filters to dispatch. Blank filters are legal; only an
    /// in-flight search suppresses another one.
    pub fn begin_search(&mut self) -> Option<ScholarshipFilters> {
        if self.searching {
            return None;
        }

        self.searching = true;
        Some(self.filters.clone())
    }

    /// Success replaces the result slot wholesale. Failure leaves any prior
    /// results on screen and returns the notice to raise.
    pub fn apply_results(
        &mut self,
        result: Result<SearchOutcome, String>,
    ) -> Option<&'static str> {
        self.searching = false;

        match result {
            Ok(outcome) => {
                self.results = Some(outcome);
                None
            }
            Err(e) => {
                eprintln!("[Gemini] Scholarship search failed: {}", e);
                Some(SEARCH_FAILED)
            }
        }
    }

    /// Returns the filters to dispatch when the user started a search.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<ScholarshipFilters> {
        let mut request = None;

        ui.vertical_centered(|ui| {
            ui.heading(theme.heading(ui.ctx(), "Scholarship Radar"));
            ui.label(
                egui::RichText::new("Find real-time funding opportunities across the globe")
                    .color(theme.subtle(ui.ctx())),
            );
        });
        ui.add_space(10.0);

        egui::ScrollArea::vertical().id_salt("scholarship_scroll").auto_shrink([false, false]).show(
            ui,
            |ui| {
                card_frame(ui, theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    filter_field(
                        ui,
                        "Destination Country",
                        "e.g. UK, Germany, USA",
                        &mut self.filters.country,
                    );
                    filter_field(
                        ui,
                        "Your Course/Field",
                        "e.g. MBA, CS, Arts",
                        &mut self.filters.course,
                    );
                    filter_field(
                        ui,
                        "Other Criteria",
                        "e.g. 80% marks, women only",
                        &mut self.filters.eligibility,
                    );

                    ui.add_space(10.0);

                    let button = if self.searching {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new().size(16.0));
                            ui.add_enabled(
                                false,
                                egui::Button::new("Scanning the Web for Scholarships..."),
                            )
                        })
                        .inner
                    } else {
                        ui.add_sized(
                            [ui.available_width(), 36.0],
                            egui::Button::new("Search Scholarships"),
                        )
                    };

                    if button.clicked() {
                        request = self.begin_search();
                    }
                });

                ui.add_space(12.0);

                match &self.results {
                    Some(outcome) => results_section(ui, theme, outcome),
                    None => {
                        if !self.searching {
                            ui.add_space(40.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new("Enter your details to start searching")
                                        .size(16.0)
                                        .color(theme.subtle(ui.ctx())),
                                );
                            });
                        }
                    }
                }
            },
        );

        request
    }
}

fn filter_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(egui::RichText::new(label).small().strong());
    ui.add(
        egui::TextEdit::singleline(value).hint_text(hint).desired_width(ui.available_width()),
    );
    ui.add_space(6.0);
}

fn results_section(ui: &mut egui::Ui, theme: &Theme, outcome: &SearchOutcome) {
    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(theme.heading(ui.ctx(), "Top Matches for You"));
        ui.add_space(6.0);
        ui.label(&outcome.text);
    });

    ui.add_space(10.0);

    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(theme.heading(ui.ctx(), "Official Application Links"));
        ui.add_space(6.0);

        if outcome.urls.is_empty() {
            ui.label(egui::RichText::new(NO_LINKS).italics().color(theme.subtle(ui.ctx())));
        } else {
            ui.horizontal_wrapped(|ui| {
                for (i, url) in outcome.urls.iter().enumerate() {
                    ui.hyperlink_to(format!("Source {}: {}", i + 1, hostname_of(url)), url);
                }
            });
        }
    });
}

fn card_frame(ui: &egui::Ui, theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card(ui.ctx()))
        .stroke(egui::Stroke::new(1.0, theme.card_border(ui.ctx())))
        .corner_radius(12.0)
        .inner_margin(14.0)
}

/// Link chips are labeled by host rather than the full URI.
fn hostname_of(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(text: &str, urls: &[&str]) -> SearchOutcome {
        SearchOutcome {
            text: text.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn search_is_legal_with_blank_filters() {
        let mut view = ScholarshipView::new();

        let filters = view.begin_search().expect("blank filters are a valid search");

        assert_eq!(filters, ScholarshipFilters::default());
        assert!(view.searching);
    }

    #[test]
    fn only_one_search_runs_at_a_time() {
        let mut view = ScholarshipView::new();

        view.begin_search().expect("first search should dispatch");
        assert!(view.begin_search().is_none());
    }

    #[test]
    fn success_replaces_results_wholesale() {
        let mut view = ScholarshipView::new();

        view.begin_search();
        assert!(view.apply_results(Ok(outcome("old", &["https://a.example"]))).is_none());

        view.begin_search();
        assert!(view.apply_results(Ok(outcome("new", &[]))).is_none());

        let results = view.results.expect("results should be present");
        assert_eq!(results.text, "new");
        assert!(results.urls.is_empty());
        assert!(!view.searching);
    }

    #[test]
    fn failure_keeps_prior_results_and_raises_one_notice() {
        let mut view = ScholarshipView::new();

        view.begin_search();
        view.apply_results(Ok(outcome("stale but kept", &["https://daad.de"])));

        view.begin_search();
        let notice = view.apply_results(Err("503".to_string()));

        assert_eq!(notice, Some(SEARCH_FAILED));
        assert_eq!(view.results.as_ref().map(|r| r.text.as_str()), Some("stale but kept"));
        assert!(!view.searching);
    }

    #[test]
    fn hostnames_label_the_link_chips() {
        assert_eq!(hostname_of("https://www.daad.de/en/scholarships"), "www.daad.de");
        assert_eq!(hostname_of("https://chevening.org"), "chevening.org");
        // Unparseable input falls back to the raw string.
        assert_eq!(hostname_of("not a url"), "not a url");
    }
}
