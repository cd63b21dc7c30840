use egui::{Color32, RichText};

use crate::gui::styles;

pub struct ErrorPanel;

impl ErrorPanel {
    /// Centered error message with a "Try Again" button. Returns true when
    /// the user asked to retry.
    pub fn show(ui: &mut egui::Ui, message: &str) -> bool {
        let mut retry = false;

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            egui::Frame::none()
                .fill(Color32::WHITE)
                .stroke(egui::Stroke::new(1.0, styles::CARD_BORDER))
                .rounding(egui::Rounding::same(10.0))
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_max_width(360.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("⚠").size(36.0).color(styles::ERROR_RED));
                        ui.label(RichText::new("Error").size(20.0).strong());
                        ui.label(RichText::new(message).color(styles::TEXT_SECONDARY));
                        ui.add_space(12.0);
                        if ui.button(RichText::new("Try Again").size(15.0)).clicked() {
                            retry = true;
                        }
                    });
                });
        });

        retry
    }

    pub fn loading(ui: &mut egui::Ui, what: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.add(egui::Spinner::new().size(36.0));
            ui.label(RichText::new(format!("Loading {}...", what)).strong());
        });
    }
}
