use chrono::Local;
use egui::{Color32, RichText, Vec2};

use crate::format::{format_date, format_inr, short_id};
use crate::gui::styles;
use crate::records::UserRecord;

pub struct UserCard;

impl UserCard {
    pub const WIDTH: f32 = 250.0;

    pub fn show(ui: &mut egui::Ui, user: &UserRecord) {
        egui::Frame::none()
            .fill(styles::CARD_BG)
            .stroke(egui::Stroke::new(1.0, styles::CARD_BORDER))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(Self::WIDTH - 28.0, 150.0));
                ui.set_max_width(Self::WIDTH - 28.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("👤").size(18.0).color(styles::SAFFRON));
                    ui.label(
                        RichText::new(&user.full_name)
                            .size(16.0)
                            .strong()
                            .color(Color32::from_rgb(31, 41, 55)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        egui::Frame::none()
                            .fill(styles::SAFFRON_LIGHT)
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(short_id(&user.id))
                                        .size(11.0)
                                        .color(styles::SAFFRON_DARK),
                                );
                            });
                    });
                });

                ui.add_space(6.0);
                ui.label(RichText::new(format!("📞 {}", user.phone)).size(13.0));
                ui.label(
                    RichText::new(format!("💰 {}", format_inr(user.money)))
                        .size(13.0)
                        .strong(),
                );
                ui.label(RichText::new(format!("{} bets placed", user.total_bets)).size(13.0));

                ui.separator();
                ui.label(
                    RichText::new(match &user.created_at {
                        Some(created) => format!("Joined: {}", format_date(&created.with_timezone(&Local))),
                        None => "Joined: -".to_string(),
                    })
                    .size(11.0)
                    .color(styles::TEXT_SECONDARY),
                );
            });
    }
}
