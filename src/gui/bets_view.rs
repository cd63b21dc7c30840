use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::format::format_inr;
use crate::listing::Listing;
use crate::records::{sample_bets, BetRecord};

use super::components::{badges, Pagination, SearchBar};
use super::styles;

pub struct BetsView {
    listing: Listing<BetRecord>,
}

impl BetsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            listing: Listing::with_records(sample_bets(), page_size),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut search = self.listing.search_term().to_string();
        if SearchBar::show(ui, "Bet History", "Search by ID...", &mut search) {
            self.listing.set_search_term(search);
        }
        ui.label(RichText::new("Track your betting journey").color(styles::TEXT_SECONDARY));
        ui.add_space(12.0);

        let view = self.listing.render();

        if view.rows.is_empty() {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No records found matching your search criteria")
                        .color(styles::TEXT_SECONDARY),
                );
            });
            ui.add_space(30.0);
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(80.0))
                .column(Column::auto().at_least(80.0))
                .column(Column::auto().at_least(90.0))
                .column(Column::remainder().at_least(160.0))
                .column(Column::auto().at_least(90.0))
                .column(Column::auto().at_least(110.0))
                .header(28.0, |mut header| {
                    for title in ["ID", "Sports", "Event", "Option", "Amount", "Status"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for bet in &view.rows {
                        body.row(30.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(&bet.id).strong().color(styles::SAFFRON_DARK));
                            });
                            row.col(|ui| {
                                ui.label(&bet.sport);
                            });
                            row.col(|ui| {
                                ui.label(&bet.event);
                            });
                            row.col(|ui| {
                                ui.label(&bet.option);
                            });
                            row.col(|ui| {
                                ui.label(RichText::new(format_inr(bet.amount)).strong());
                            });
                            row.col(|ui| {
                                badges::bet_status(ui, bet.status);
                            });
                        });
                    }
                });
        }

        ui.add_space(12.0);
        if let Some(action) = Pagination::show(ui, &view) {
            action.apply(&mut self.listing);
        }
    }
}
