#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use studywise::gui::StudyWiseApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 780.0])
            .with_min_inner_size([680.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native("StudyWise", options, Box::new(|cc| Ok(Box::new(StudyWiseApp::new(cc)))))
}
