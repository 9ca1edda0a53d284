//! `turnstile-auth` — pure authentication/authorization kernel.
//!
//! This crate is intentionally decoupled from HTTP: it mints and verifies
//! bearer tokens, looks users up, and decides access. Expected failures
//! (bad credentials, invalid or expired tokens) are `None`, never errors.

pub mod claims;
pub mod directory;
pub mod gate;
pub mod service;
pub mod token;
pub mod user;

pub use claims::{Bearer, JwtClaims, TokenValidationError, validate_claims};
pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use gate::{AccessDenied, authorize, effective_level, is_allowed};
pub use service::AuthService;
pub use token::{DEFAULT_TOKEN_TTL, Hs256TokenCodec, TokenCodec, TokenError};
pub use user::User;

pub use turnstile_core::{AccessLevel, UserId};
