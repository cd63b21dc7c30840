use egui::{Align, Layout, RichText};
use poll_promise::Promise;

use crate::api::AdminClient;
use crate::auth::AuthToken;
use crate::validation::LoginRequest;
use crate::Result;

use super::styles;

pub struct LoginSuccess {
    pub token: AuthToken,
    pub remember: bool,
}

#[derive(Default)]
pub struct LoginView {
    phone_input: String,
    password_input: String,
    remember: bool,
    show_password: bool,
    error: String,
    pending: Option<(String, Promise<Result<String>>)>,
}

impl LoginView {
    fn submit(&mut self, client: &AdminClient) {
        self.error.clear();

        let request = match LoginRequest::new(&self.phone_input, &self.password_input) {
            Ok(request) => request,
            Err(e) => {
                self.error = e.to_string();
                return;
            }
        };

        let client = client.clone();
        let phone = request.phone().to_string();
        let promise = Promise::spawn_async(async move { client.login(&request).await });
        self.pending = Some((phone, promise));
    }

    fn poll(&mut self) -> Option<LoginSuccess> {
        let ready = matches!(&self.pending, Some((_, p)) if p.ready().is_some());
        if !ready {
            return None;
        }

        let (phone, promise) = self.pending.take()?;
        match promise.block_and_take() {
            Ok(token) => {
                self.password_input.clear();
                Some(LoginSuccess {
                    token: AuthToken::new(token, &phone),
                    remember: self.remember,
                })
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                self.error = e.display_message();
                None
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &AdminClient) -> Option<LoginSuccess> {
        let success = self.poll();
        let is_loading = self.pending.is_some();

        ui.vertical_centered(|ui| {
            ui.add_space(50.0);

            ui.label(RichText::new("🏏").size(48.0));
            ui.heading(RichText::new("Saffron Exch").size(32.0).color(styles::SAFFRON_DARK));
            ui.add_space(6.0);
            ui.label(RichText::new("Sign in to the admin dashboard").size(16.0));

            ui.add_space(30.0);

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.set_max_width(400.0);

                ui.label("Phone Number");
                let phone_response = ui.add(
                    egui::TextEdit::singleline(&mut self.phone_input)
                        .hint_text("Enter your phone number"),
                );

                ui.add_space(12.0);

                ui.label("Password");
                let mut password_lost_focus = false;
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.password_input)
                            .password(!self.show_password)
                            .hint_text("Enter your password"),
                    );
                    password_lost_focus = response.lost_focus();
                    let eye = if self.show_password { "🙈" } else { "👁" };
                    if ui.small_button(eye).on_hover_text("Show password").clicked() {
                        self.show_password = !self.show_password;
                    }
                });

                ui.add_space(8.0);
                ui.checkbox(&mut self.remember, "Remember me");

                ui.add_space(20.0);

                let button_enabled = !self.phone_input.is_empty()
                    && !self.password_input.is_empty()
                    && !is_loading;

                let mut should_login = false;
                ui.add_enabled_ui(button_enabled, |ui| {
                    let text = if is_loading {
                        "Logging in..."
                    } else {
                        "Login to Dashboard"
                    };
                    if ui.button(RichText::new(text).size(16.0)).clicked() {
                        should_login = true;
                    }
                });

                if (phone_response.lost_focus() || password_lost_focus)
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && button_enabled
                {
                    should_login = true;
                }

                if should_login {
                    self.submit(client);
                }

                if !self.error.is_empty() {
                    ui.add_space(12.0);
                    ui.colored_label(styles::ERROR_RED, &self.error);
                }
            });
        });

        success
    }
}
