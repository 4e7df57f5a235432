//! Core types for the Telegram Bot API client.
//!
//! This crate is transport-agnostic: it holds the domain model, the wire result
//! objects, the error taxonomy and the ambient config/logging setup. HTTP lives
//! in `tgb-api`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod objects;

pub use errors::{Error, Result};
