//! Data models: the stored user document, request payloads, and response shapes.

pub mod requests;
pub mod responses;
pub mod user;

pub use requests::*;
pub use responses::*;
pub use user::*;
