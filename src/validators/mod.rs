//! Validation utilities shared by the handlers.

pub mod user;

pub use user::*;
