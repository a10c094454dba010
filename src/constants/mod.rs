//! Application constants module.
//!
//! Centralizes the literal strings used throughout the application: the
//! client-visible error and confirmation messages, and collection names.

pub mod collections;
pub mod errors;
pub mod messages;

pub use collections::*;
pub use errors::*;
pub use messages::*;
