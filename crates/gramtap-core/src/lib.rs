//! Core logic for gramtap, a Telegram API credential and session manager.
//!
//! Owns config persistence and input validation. The interactive prompt and the
//! Telegram protocol library live behind ports (traits) implemented elsewhere.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod login;
pub mod paths;
pub mod ports;
pub mod validation;

pub use errors::{Error, Result};
