//! Outgoing message building blocks: keyboards, chat actions, parse modes, media kinds.

pub mod types;
