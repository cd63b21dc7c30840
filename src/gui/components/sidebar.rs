use egui::{Button, RichText, Vec2};

use crate::gui::app::Screen;
use crate::gui::styles;

pub enum SidebarAction {
    Navigate(Screen),
    Logout,
}

pub struct Sidebar;

impl Sidebar {
    pub const EXPANDED_WIDTH: f32 = 220.0;
    pub const COLLAPSED_WIDTH: f32 = 64.0;

    pub fn show(
        ui: &mut egui::Ui,
        current: Screen,
        operator: Option<&str>,
        collapsed: &mut bool,
    ) -> Option<SidebarAction> {
        let mut action = None;

        ui.vertical(|ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("🏏").size(26.0));
                if !*collapsed {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Saffron Exch").size(18.0).strong().color(egui::Color32::WHITE));
                        ui.label(RichText::new("Admin Panel").size(12.0).color(styles::SAFFRON_LIGHT));
                    });
                }
            });

            ui.add_space(6.0);
            let toggle = if *collapsed { "»" } else { "«" };
            if ui.small_button(toggle).on_hover_text("Toggle sidebar").clicked() {
                *collapsed = !*collapsed;
            }

            if let (Some(phone), false) = (operator, *collapsed) {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("👤 {}", phone))
                        .size(13.0)
                        .color(egui::Color32::WHITE),
                );
            }

            ui.add_space(16.0);

            let width = if *collapsed {
                Self::COLLAPSED_WIDTH - 16.0
            } else {
                Self::EXPANDED_WIDTH - 16.0
            };

            for screen in Screen::ALL {
                let is_active = screen == current;
                let text = if *collapsed {
                    screen.icon().to_string()
                } else {
                    format!("{}  {}", screen.icon(), screen.title())
                };
                let label = RichText::new(text).size(15.0).color(if is_active {
                    styles::SAFFRON_DARK
                } else {
                    egui::Color32::WHITE
                });
                let mut button = Button::new(label).min_size(Vec2::new(width, 36.0));
                button = if is_active {
                    button.fill(egui::Color32::WHITE)
                } else {
                    button.fill(styles::SAFFRON)
                };

                let response = ui.add(button);
                let response = if *collapsed {
                    response.on_hover_text(screen.title())
                } else {
                    response
                };
                if response.clicked() && !is_active {
                    action = Some(SidebarAction::Navigate(screen));
                }
            }

            ui.add_space(16.0);
            let logout = Button::new(RichText::new(if *collapsed { "⎋" } else { "⎋  Logout" }).size(15.0).color(egui::Color32::WHITE))
                .fill(styles::SAFFRON_DARK)
                .min_size(Vec2::new(width, 36.0));
            if ui.add(logout).clicked() {
                action = Some(SidebarAction::Logout);
            }
        });

        action
    }
}
