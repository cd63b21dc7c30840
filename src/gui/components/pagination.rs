use egui::{Button, RichText, Vec2};

use crate::gui::styles;
use crate::listing::{Listing, PageView, Searchable};

/// Page navigation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    Goto(usize),
}

impl PageAction {
    pub fn apply<R: Searchable>(self, listing: &mut Listing<R>) {
        match self {
            PageAction::Previous => listing.previous_page(),
            PageAction::Next => listing.next_page(),
            PageAction::Goto(page) => listing.set_page(page),
        }
    }
}

pub struct Pagination;

impl Pagination {
    pub fn show<R>(ui: &mut egui::Ui, view: &PageView<'_, R>) -> Option<PageAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.has_previous, Button::new("◀ Previous"))
                .clicked()
            {
                action = Some(PageAction::Previous);
            }

            ui.add_space(10.0);

            for page in view.page_numbers.clone() {
                let is_current = page == view.current_page;
                let label = RichText::new(page.to_string()).strong();
                let mut button = Button::new(if is_current {
                    label.color(egui::Color32::WHITE)
                } else {
                    label
                })
                .min_size(Vec2::new(32.0, 28.0));
                if is_current {
                    button = button.fill(styles::SAFFRON);
                }

                if ui.add(button).clicked() && !is_current {
                    action = Some(PageAction::Goto(page));
                }
            }

            ui.add_space(10.0);

            if ui.add_enabled(view.has_next, Button::new("Next ▶")).clicked() {
                action = Some(PageAction::Next);
            }

            ui.add_space(15.0);
            ui.label(
                RichText::new(format!("Page {} of {}", view.current_page, view.total_pages))
                    .color(styles::TEXT_SECONDARY),
            );
        });

        action
    }
}
