use eframe::egui;

pub struct SetupBanner;

impl SetupBanner {
    /// Warning strip shown while no API key resolves. Returns true when
    /// clicked so the caller can open Settings.
    pub fn show(ctx: &egui::Context, has_key: bool) -> bool {
        if has_key {
            return false;
        }

        let mut clicked = false;

        egui::TopBottomPanel::top("setup_banner").exact_height(30.0).show(ctx, |ui| {
            let banner_color = egui::Color32::from_rgb(180, 140, 0);
            let frame = egui::Frame::new().fill(banner_color);

            frame.show(ui, |ui| {
                ui.vertical_centered_justified(|ui| {
                    let text = "⚠ No Gemini API key configured - Click to open Settings";
                    let response = ui.add(
                        egui::Label::new(
                            egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE),
                        )
                        .sense(egui::Sense::click()),
                    );

                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }

                    if response.clicked() {
                        clicked = true;
                    }
                });
            });
        });

        clicked
    }
}
