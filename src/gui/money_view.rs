use egui::RichText;
use poll_promise::Promise;

use crate::api::{AdminClient, FundsReceipt};
use crate::format::format_inr;
use crate::validation::{sanitize_phone_input, FundsRequest};
use crate::{Error, Result};

use super::components::Notice;
use super::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoneyMode {
    #[default]
    Add,
    Withdraw,
}

impl MoneyMode {
    fn title(&self) -> &'static str {
        match self {
            MoneyMode::Add => "Add Money",
            MoneyMode::Withdraw => "Withdraw Money",
        }
    }
}

#[derive(Default)]
pub struct MoneyView {
    mode: MoneyMode,
    phone: String,
    amount: String,
    pending: Option<(MoneyMode, Promise<Result<FundsReceipt>>)>,
    receipt: Option<(MoneyMode, FundsReceipt)>,
}

impl MoneyView {
    fn submit(&mut self, client: &AdminClient) -> Option<Notice> {
        let request = match FundsRequest::new(&self.phone, &self.amount) {
            Ok(request) => request,
            Err(e) => return Some(Notice::from_error("Transaction Failed", &Error::from(e))),
        };

        let client = client.clone();
        let mode = self.mode;
        let promise = Promise::spawn_async(async move {
            match mode {
                MoneyMode::Add => client.add_money(&request).await,
                MoneyMode::Withdraw => client.withdraw_money(&request).await,
            }
        });
        self.pending = Some((mode, promise));
        Some(Notice::info("Processing transaction..."))
    }

    fn poll(&mut self) -> Option<Notice> {
        let ready = matches!(&self.pending, Some((_, p)) if p.ready().is_some());
        if !ready {
            return None;
        }

        let (mode, promise) = self.pending.take()?;
        match promise.block_and_take() {
            Ok(receipt) => {
                self.phone.clear();
                self.amount.clear();
                self.receipt = Some((mode, receipt));
                Some(Notice::success(match mode {
                    MoneyMode::Add => "Money added successfully!",
                    MoneyMode::Withdraw => "Money withdrawn successfully!",
                }))
            }
            Err(e) => {
                log::error!("{} failed: {}", mode.title(), e);
                Some(Notice::from_error("Transaction Failed", &e))
            }
        }
    }

    fn receipt_popup(&mut self, ctx: &egui::Context) {
        let Some((mode, receipt)) = &self.receipt else {
            return;
        };

        let mut close = false;
        let heading = match mode {
            MoneyMode::Add => "Howzat! Money Added!",
            MoneyMode::Withdraw => "Withdrawal Complete",
        };

        egui::Window::new(heading)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("✔").size(40.0).color(styles::SUCCESS_GREEN));
                    ui.label("The transaction was successful");
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            format_inr(receipt.amount),
                            if *mode == MoneyMode::Add { "Added" } else { "Withdrawn" }
                        ))
                        .size(20.0)
                        .strong()
                        .color(styles::SAFFRON_DARK),
                    );
                    ui.label(
                        RichText::new(format!("New Balance: {}", format_inr(receipt.new_balance)))
                            .color(styles::SUCCESS_GREEN),
                    );
                    ui.add_space(10.0);
                    if ui.button("Done").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.receipt = None;
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, client: &AdminClient) -> Option<Notice> {
        let mut notice = self.poll();
        self.receipt_popup(ui.ctx());
        let is_processing = self.pending.is_some();

        ui.horizontal(|ui| {
            for mode in [MoneyMode::Add, MoneyMode::Withdraw] {
                if ui
                    .selectable_label(self.mode == mode, RichText::new(mode.title()).size(15.0))
                    .clicked()
                {
                    self.mode = mode;
                }
            }
        });

        ui.add_space(12.0);
        ui.heading(RichText::new(self.mode.title()).size(26.0).strong().color(styles::SAFFRON_DARK));
        ui.add_space(16.0);

        ui.label("Phone Number");
        let phone_response = ui.add(
            egui::TextEdit::singleline(&mut self.phone)
                .hint_text("Enter 10-digit phone number")
                .desired_width(320.0),
        );
        if phone_response.changed() {
            self.phone = sanitize_phone_input(&self.phone);
        }

        ui.add_space(12.0);
        ui.label("Amount (₹)");
        ui.add(
            egui::TextEdit::singleline(&mut self.amount)
                .hint_text("Enter amount")
                .desired_width(320.0),
        );

        ui.add_space(20.0);
        let enabled = !is_processing && !self.phone.is_empty() && !self.amount.is_empty();
        let label = if is_processing {
            "Processing...".to_string()
        } else {
            format!("{} →", self.mode.title())
        };
        if ui
            .add_enabled(
                enabled,
                egui::Button::new(RichText::new(label).size(16.0).strong())
                    .min_size(egui::vec2(320.0, 40.0)),
            )
            .clicked()
        {
            notice = self.submit(client).or(notice);
        }

        notice
    }
}
