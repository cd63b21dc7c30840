use egui::{Color32, RichText};

use crate::gui::styles;
use crate::records::{BetStatus, Outcome, TransactionKind};

fn pill(ui: &mut egui::Ui, text: &str, fg: Color32, bg: Color32) {
    egui::Frame::none()
        .fill(bg)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(fg));
        });
}

pub fn bet_status(ui: &mut egui::Ui, status: BetStatus) {
    let (icon, fg, bg) = match status {
        BetStatus::Won => ("🏆", styles::SUCCESS_GREEN, Color32::from_rgb(220, 252, 231)),
        BetStatus::Lost => ("✖", styles::ERROR_RED, Color32::from_rgb(254, 226, 226)),
        BetStatus::Refunded => ("↺", styles::INFO_BLUE, Color32::from_rgb(219, 234, 254)),
        BetStatus::Current => ("⏱", styles::WARN_AMBER, Color32::from_rgb(254, 243, 199)),
    };
    pill(ui, &format!("{} {}", icon, status.label()), fg, bg);
}

pub fn outcome(ui: &mut egui::Ui, outcome: Outcome) {
    match outcome {
        Outcome::Profit => pill(ui, "📈 Profit", styles::SUCCESS_GREEN, Color32::from_rgb(220, 252, 231)),
        Outcome::Loss => pill(ui, "📉 Loss", styles::ERROR_RED, Color32::from_rgb(254, 226, 226)),
    }
}

pub fn transaction(ui: &mut egui::Ui, label: &str, kind: TransactionKind) {
    let (icon, fg, bg) = match kind {
        TransactionKind::Credit => ("⬆", styles::SUCCESS_GREEN, Color32::from_rgb(220, 252, 231)),
        TransactionKind::Debit => ("⬇", styles::ERROR_RED, Color32::from_rgb(254, 226, 226)),
        TransactionKind::Other => ("⏱", styles::TEXT_SECONDARY, Color32::from_rgb(243, 244, 246)),
    };
    pill(ui, &format!("{} {}", icon, label), fg, bg);
}

pub fn amount_color(kind: TransactionKind) -> Color32 {
    match kind {
        TransactionKind::Credit => styles::SUCCESS_GREEN,
        TransactionKind::Debit => styles::ERROR_RED,
        TransactionKind::Other => Color32::from_rgb(31, 41, 55),
    }
}
