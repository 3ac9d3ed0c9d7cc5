//! Core domain + application logic for the numerology bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! messaging port (trait) implemented in the adapter crate.

pub mod bot;
pub mod config;
pub mod consultation;
pub mod descriptions;
pub mod domain;
pub mod errors;
pub mod flow;
pub mod logging;
pub mod menu;
pub mod messaging;
pub mod reducer;

pub use errors::{Error, Result};
