pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod gui;
pub mod listing;
pub mod records;
pub mod validation;

pub use error::{Error, Result};
