//! Telegram Bot API client.
//!
//! Pure request builders (`commands`, `media_edit`) produce an [`ApiRequest`];
//! a [`Transport`] executes it; the `envelope` module turns the body into a
//! typed value or a typed error. [`BotClient`] wires the three together and adds
//! the two-step file download flow.

pub mod client;
pub mod commands;
pub mod envelope;
pub mod files;
pub mod identity;
pub mod media_edit;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::BotClient;
pub use commands::{ApiRequest, UpdatesQuery, Verb};
pub use envelope::Envelope;
pub use files::Download;
pub use identity::Identity;
pub use media_edit::MediaEdit;
pub use transport::{HttpTransport, RawResponse, Transport};
