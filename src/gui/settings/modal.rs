use eframe::egui;

use super::data::SettingsData;

pub struct SettingsModal {
    open: bool,
    temp: SettingsData,
    original: SettingsData,
    show_key: bool,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            temp: SettingsData::default(),
            original: SettingsData::default(),
            show_key: false,
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.temp = current_settings.clone();
        self.original = current_settings;
        self.show_key = false;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn is_dirty(&self) -> bool {
        self.temp != self.original
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(440.0);

            ui.heading("Settings");
            ui.add_space(10.0);

            ui.label("Gemini API Key");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.temp.api_key)
                        .password(!self.show_key)
                        .hint_text("Leave empty to use GEMINI_API_KEY from the environment")
                        .desired_width(360.0),
                );
                ui.checkbox(&mut self.show_key, "Show");
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label("Models");
            egui::Grid::new("settings_models_grid").num_columns(2).spacing([10.0, 6.0]).show(
                ui,
                |ui| {
                    ui.label("Consultant chat:");
                    ui.text_edit_singleline(&mut self.temp.chat_model);
                    ui.end_row();

                    ui.label("Scholarship search:");
                    ui.text_edit_singleline(&mut self.temp.search_model);
                    ui.end_row();

                    ui.label("Document review:");
                    ui.text_edit_singleline(&mut self.temp.review_model);
                    ui.end_row();
                },
            );

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.is_dirty();

            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.colored_label(egui::Color32::TRANSPARENT, "⚠");
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    // dark_mode is toggled from the nav rail, not this modal
                    self.temp.dark_mode = self.original.dark_mode;
                    self.original = self.temp.clone();
                    result = Some(self.temp.clone());
                    ui.close();
                } else if cancel_clicked {
                    self.temp = self.original.clone();
                } else if reset_clicked {
                    let dark_mode = self.temp.dark_mode;
                    self.temp = SettingsData { dark_mode, ..SettingsData::default() };
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
