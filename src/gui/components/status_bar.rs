use egui::RichText;

use crate::gui::styles;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A dismissible notification shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn from_error(title: impl Into<String>, error: &Error) -> Self {
        match error {
            Error::Validation(e) => Self::error(e.title(), e.to_string()),
            other => Self::error(title, other.display_message()),
        }
    }
}

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, notice: &Notice, on_clear: &mut bool) {
        let color = match notice.level {
            NoticeLevel::Success => styles::SUCCESS_GREEN,
            NoticeLevel::Error => styles::ERROR_RED,
            NoticeLevel::Info => styles::INFO_BLUE,
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(&notice.title).size(14.0).strong().color(color));
            if let Some(detail) = &notice.detail {
                ui.label(RichText::new(detail).size(13.0).color(styles::TEXT_SECONDARY));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("Dismiss").size(12.0)).clicked() {
                    *on_clear = true;
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_validation_error_notice() {
        let err: Error = ValidationError::InvalidPhone.into();
        let notice = Notice::from_error("Transaction Failed", &err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Invalid Phone Number");
    }

    #[test]
    fn test_api_error_notice_keeps_title() {
        let err = Error::Api("Insufficient balance".to_string());
        let notice = Notice::from_error("Transaction Failed", &err);
        assert_eq!(notice.title, "Transaction Failed");
        assert_eq!(notice.detail.as_deref(), Some("Insufficient balance"));
    }
}
