use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::light(),
        ..Default::default()
    };

    // Saffron theme: warm panels, orange accents
    style.visuals.window_fill = Color32::WHITE;
    style.visuals.panel_fill = Color32::from_rgb(255, 247, 237);
    style.visuals.faint_bg_color = Color32::from_rgb(255, 237, 213);
    style.visuals.extreme_bg_color = Color32::from_rgb(249, 250, 251);

    style.visuals.override_text_color = Some(Color32::from_rgb(31, 41, 55));

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(254, 215, 170);
    style.visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(254, 215, 170);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(154, 52, 18));
    style.visuals.widgets.inactive.rounding = Rounding::same(6.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(253, 186, 116);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(253, 186, 116);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::from_rgb(124, 45, 18));
    style.visuals.widgets.hovered.rounding = Rounding::same(6.0);

    style.visuals.widgets.active.bg_fill = SAFFRON;
    style.visuals.widgets.active.weak_bg_fill = SAFFRON;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(6.0);

    style.visuals.selection.bg_fill = SAFFRON;
    style.visuals.selection.stroke = Stroke::new(1.5, SAFFRON_DARK);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

pub const SAFFRON: Color32 = Color32::from_rgb(249, 115, 22);
pub const SAFFRON_DARK: Color32 = Color32::from_rgb(194, 65, 12);
pub const SAFFRON_LIGHT: Color32 = Color32::from_rgb(255, 237, 213);
pub const CARD_BG: Color32 = Color32::from_rgb(255, 251, 245);
pub const CARD_BORDER: Color32 = Color32::from_rgb(254, 215, 170);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(22, 163, 74);
pub const ERROR_RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const INFO_BLUE: Color32 = Color32::from_rgb(37, 99, 235);
pub const WARN_AMBER: Color32 = Color32::from_rgb(217, 119, 6);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
