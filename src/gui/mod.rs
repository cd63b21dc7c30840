mod add_player_view;
mod app;
mod bets_view;
mod components;
mod history_view;
mod ledger_view;
mod login_view;
mod money_view;
mod styles;
mod users_view;

pub use app::{AdminApp, Screen};
