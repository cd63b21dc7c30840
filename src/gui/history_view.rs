use chrono::Local;
use egui::RichText;
use egui_extras::{Column, TableBuilder};
use poll_promise::Promise;

use crate::api::AdminClient;
use crate::format::{format_datetime, format_inr};
use crate::listing::{FetchState, RemoteListing};
use crate::records::AccountHistoryEntry;
use crate::Result;

use super::components::{badges, ErrorPanel, Pagination, SearchBar};
use super::styles;

pub struct HistoryView {
    history: RemoteListing<AccountHistoryEntry>,
    promise: Option<Promise<Result<Vec<AccountHistoryEntry>>>>,
}

impl HistoryView {
    pub fn new(page_size: usize) -> Self {
        Self {
            history: RemoteListing::new(page_size),
            promise: None,
        }
    }

    fn spawn(&mut self, client: &AdminClient) {
        let client = client.clone();
        self.promise = Some(Promise::spawn_async(async move {
            client.account_history().await
        }));
    }

    fn poll(&mut self) {
        if !self.promise.as_ref().is_some_and(|p| p.ready().is_some()) {
            return;
        }
        if let Some(promise) = self.promise.take() {
            self.history.finish_fetch(promise.block_and_take());
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &AdminClient) {
        if self.history.needs_fetch() && self.history.start_fetch() {
            self.spawn(client);
        }
        self.poll();

        if let FetchState::Failed(message) = self.history.state() {
            let message = message.clone();
            if ErrorPanel::show(ui, &message) && self.history.retry() {
                self.spawn(client);
            }
            return;
        }
        if self.history.state() != &FetchState::Ready {
            ErrorPanel::loading(ui, "account history");
            return;
        }

        let listing = &mut self.history.listing;
        let mut search = listing.search_term().to_string();
        if SearchBar::show(ui, "User Account History", "Search users...", &mut search) {
            listing.set_search_term(search);
        }
        ui.add_space(12.0);

        let view = listing.render();

        if view.rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(RichText::new("No results found").color(styles::TEXT_SECONDARY));
            });
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(90.0))
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(110.0))
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(100.0))
                .column(Column::remainder().at_least(170.0))
                .header(28.0, |mut header| {
                    for title in ["User ID", "Name", "Phone", "Type", "Amount", "Date"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for entry in &view.rows {
                        let kind = entry.kind();
                        body.row(30.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(&entry.user_id).monospace());
                            });
                            row.col(|ui| {
                                ui.label(RichText::new(&entry.full_name).strong());
                            });
                            row.col(|ui| {
                                ui.label(&entry.phone);
                            });
                            row.col(|ui| {
                                badges::transaction(ui, &entry.transaction.kind, kind);
                            });
                            row.col(|ui| {
                                ui.label(
                                    RichText::new(format_inr(entry.transaction.amount))
                                        .strong()
                                        .color(badges::amount_color(kind)),
                                );
                            });
                            row.col(|ui| {
                                let created = entry.transaction.created_at.with_timezone(&Local);
                                ui.label(
                                    RichText::new(format_datetime(&created))
                                        .color(styles::TEXT_SECONDARY),
                                );
                            });
                        });
                    }
                });
        }

        ui.add_space(12.0);
        if let Some(action) = Pagination::show(ui, &view) {
            action.apply(listing);
        }
    }
}
