//! `turnstile-core` — domain primitives shared by the auth kernel and the API.
//!
//! This crate contains **pure domain** types (no transport, no crypto).

pub mod access;
pub mod error;
pub mod id;

pub use access::AccessLevel;
pub use error::{DomainError, DomainResult};
pub use id::UserId;
