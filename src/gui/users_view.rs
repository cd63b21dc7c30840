use egui::{RichText, ScrollArea};
use poll_promise::Promise;

use crate::api::AdminClient;
use crate::listing::{FetchState, RemoteListing};
use crate::records::UserRecord;
use crate::Result;

use super::components::{ErrorPanel, Pagination, SearchBar, UserCard};
use super::styles;

pub struct UsersView {
    users: RemoteListing<UserRecord>,
    promise: Option<Promise<Result<Vec<UserRecord>>>>,
}

impl UsersView {
    pub fn new(page_size: usize) -> Self {
        Self {
            users: RemoteListing::new(page_size),
            promise: None,
        }
    }

    fn spawn(&mut self, client: &AdminClient) {
        let client = client.clone();
        self.promise = Some(Promise::spawn_async(async move { client.list_users().await }));
    }

    fn poll(&mut self) {
        if !self.promise.as_ref().is_some_and(|p| p.ready().is_some()) {
            return;
        }
        if let Some(promise) = self.promise.take() {
            self.users.finish_fetch(promise.block_and_take());
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &AdminClient) {
        if self.users.needs_fetch() && self.users.start_fetch() {
            self.spawn(client);
        }
        self.poll();

        match self.users.state() {
            FetchState::Idle | FetchState::Loading => {
                ErrorPanel::loading(ui, "users");
                return;
            }
            FetchState::Failed(message) => {
                let message = message.clone();
                if ErrorPanel::show(ui, &message) && self.users.retry() {
                    self.spawn(client);
                }
                return;
            }
            FetchState::Ready => {}
        }

        let listing = &mut self.users.listing;
        let mut search = listing.search_term().to_string();
        if SearchBar::show(ui, "Registered Users", "Search users...", &mut search) {
            listing.set_search_term(search);
        }

        let view = listing.render();
        let shown = match view.visible_range {
            Some((first, last)) => format!("Showing {}-{} of {} users", first, last, view.filtered_count),
            None => format!("Showing 0 of {} users", view.filtered_count),
        };
        ui.label(RichText::new(shown).color(styles::TEXT_SECONDARY));
        ui.add_space(12.0);

        let mut action = None;

        ScrollArea::vertical().show(ui, |ui| {
            if view.rows.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(RichText::new("No users found").size(18.0).strong());
                    ui.label(RichText::new("Try a different search term").color(styles::TEXT_SECONDARY));
                });
            } else {
                let spacing = 14.0;
                let per_row = (ui.available_width() / (UserCard::WIDTH + spacing))
                    .floor()
                    .max(1.0) as usize;

                for chunk in view.rows.chunks(per_row) {
                    ui.horizontal(|ui| {
                        for user in chunk {
                            UserCard::show(ui, user);
                            ui.add_space(spacing);
                        }
                    });
                    ui.add_space(spacing);
                }
            }

            ui.add_space(8.0);
            action = Pagination::show(ui, &view);
        });

        if let Some(action) = action {
            action.apply(listing);
        }
    }
}
