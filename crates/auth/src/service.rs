//! Login and identity resolution.

use std::sync::Arc;
use std::time::Duration;

use crate::{Bearer, DEFAULT_TOKEN_TTL, TokenCodec, User, UserDirectory};

/// Ties the directory to the token codec.
///
/// Both collaborators are injected so tests (and alternative stores) can
/// swap them out. Cloning is cheap.
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<dyn UserDirectory>,
    codec: Arc<dyn TokenCodec>,
    ttl: Duration,
}

impl AuthService {
    pub fn new(directory: Arc<dyn UserDirectory>, codec: Arc<dyn TokenCodec>) -> Self {
        Self {
            directory,
            codec,
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Issue a token for matching credentials.
    ///
    /// Unknown user and wrong password are the same `None`.
    pub fn login(&self, username: &str, password: &str) -> Option<String> {
        let user = self.directory.find_by_credentials(username, password)?;

        match self.codec.encode(&Bearer::from(&user), self.ttl) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "failed to encode bearer token");
                None
            }
        }
    }

    /// Map a token back to the directory's current record for its subject.
    ///
    /// `None` when the token is invalid or the user no longer exists.
    pub fn resolve_identity(&self, token: &str) -> Option<User> {
        let bearer = self.codec.decode(token)?;
        let user = self.directory.find_by_id(&bearer.id);
        if user.is_none() {
            tracing::debug!(user_id = %bearer.id, "token subject no longer in directory");
        }
        user
    }
}
