use egui::RichText;
use egui_extras::{Column, TableBuilder};

use crate::format::format_inr;
use crate::listing::Listing;
use crate::records::{sample_ledger, LedgerRow, LedgerTab};

use super::components::{badges, Pagination, SearchBar};
use super::styles;

pub struct LedgerView {
    listing: Listing<LedgerRow>,
}

impl LedgerView {
    pub fn new(page_size: usize) -> Self {
        Self {
            listing: Listing::with_records(sample_ledger(), page_size),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut search = self.listing.search_term().to_string();
        if SearchBar::show(ui, "Transaction History", "Search by ID", &mut search) {
            self.listing.set_search_term(search);
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for tab in LedgerTab::ALL {
                let selected = self.listing.category() == tab;
                if ui
                    .selectable_label(selected, RichText::new(tab.label()).size(14.0))
                    .clicked()
                    && !selected
                {
                    self.listing.set_category(tab);
                }
            }
        });
        ui.add_space(12.0);

        let view = self.listing.render();

        if view.rows.is_empty() {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No matching records found").color(styles::TEXT_SECONDARY));
            });
            ui.add_space(30.0);
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(90.0))
                .columns(Column::auto().at_least(100.0), 4)
                .column(Column::remainder().at_least(100.0))
                .header(28.0, |mut header| {
                    for title in ["ID", "Deposit", "Bet", "Withdraw", "Holding", "Status"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for row_data in &view.rows {
                        body.row(30.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(&row_data.id).strong().color(styles::SAFFRON_DARK));
                            });
                            for amount in [row_data.deposit, row_data.bet, row_data.withdraw, row_data.holding] {
                                row.col(|ui| {
                                    ui.label(format_inr(amount));
                                });
                            }
                            row.col(|ui| {
                                badges::outcome(ui, row_data.outcome);
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
