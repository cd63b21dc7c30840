use egui::RichText;
use poll_promise::Promise;

use crate::api::AdminClient;
use crate::validation::SignupRequest;
use crate::Result;

use super::styles;

#[derive(Default)]
pub struct AddPlayerView {
    full_name: String,
    phone: String,
    password: String,
    referral_code: String,
    error: String,
    success: String,
    pending: Option<Promise<Result<String>>>,
}

impl AddPlayerView {
    fn reset_form(&mut self) {
        self.full_name.clear();
        self.phone.clear();
        self.password.clear();
        self.referral_code.clear();
    }

    fn submit(&mut self, client: &AdminClient) {
        self.error.clear();
        self.success.clear();

        let referral = Some(self.referral_code.as_str()).filter(|c| !c.trim().is_empty());
        let request = match SignupRequest::new(&self.full_name, &self.phone, &self.password, referral) {
            Ok(request) => request,
            Err(e) => {
                self.error = e.to_string();
                return;
            }
        };

        let client = client.clone();
        self.pending = Some(Promise::spawn_async(async move {
            client.signup(&request).await
        }));
    }

    fn poll(&mut self) {
        if !self.pending.as_ref().is_some_and(|p| p.ready().is_some()) {
            return;
        }
        if let Some(promise) = self.pending.take() {
            match promise.block_and_take() {
                Ok(message) => {
                    log::info!("Player registered: {}", message);
                    self.success = "Player added successfully!".to_string();
                    self.reset_form();
                }
                Err(e) => self.error = e.display_message(),
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &AdminClient) {
        self.poll();
        let is_loading = self.pending.is_some();

        ui.heading(RichText::new("Add New Player").size(24.0).strong());
        ui.label(RichText::new("Register a player for the IPL 2025 season").color(styles::TEXT_SECONDARY));
        ui.add_space(20.0);

        egui::Grid::new("add_player_form")
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                ui.label("Full Name");
                ui.add(
                    egui::TextEdit::singleline(&mut self.full_name)
                        .hint_text("Enter player's full name")
                        .desired_width(300.0),
                );
                ui.end_row();

                ui.label("Phone Number");
                ui.add(
                    egui::TextEdit::singleline(&mut self.phone)
                        .hint_text("Enter 10-digit mobile number")
                        .desired_width(300.0),
                );
                ui.end_row();

                ui.label("Password");
                ui.add(
                    egui::TextEdit::singleline(&mut self.password)
                        .password(true)
                        .hint_text("Create a secure password")
                        .desired_width(300.0),
                );
                ui.end_row();

                ui.label("Referral Code (Optional)");
                ui.add(
                    egui::TextEdit::singleline(&mut self.referral_code)
                        .hint_text("Enter referral code if available")
                        .desired_width(300.0),
                );
                ui.end_row();
            });

        ui.add_space(12.0);

        if !self.error.is_empty() {
            ui.colored_label(styles::ERROR_RED, format!("⚠ {}", self.error));
        }
        if !self.success.is_empty() {
            ui.colored_label(styles::SUCCESS_GREEN, format!("✔ {}", self.success));
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.reset_form();
                self.error.clear();
                self.success.clear();
            }

            let label = if is_loading { "Adding Player..." } else { "Add Player" };
            if ui
                .add_enabled(!is_loading, egui::Button::new(RichText::new(label).strong()))
                .clicked()
            {
                self.submit(client);
            }
        });
    }
}
