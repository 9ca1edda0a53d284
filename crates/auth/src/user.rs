//! User records held by the directory.

use turnstile_core::{AccessLevel, UserId};

/// A user account.
///
/// The password is kept in plaintext and only ever compared, never
/// serialized; `User` deliberately has no `Serialize` impl. Use
/// [`crate::Bearer`] for anything that leaves the process.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub access_level: AccessLevel,
    pub password: String,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        access_level: AccessLevel,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            access_level,
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison.
    ///
    /// Not constant-time and not hashed: a known security gap kept as-is.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl core::fmt::Debug for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("access_level", &self.access_level)
            .field("password", &"<hidden>")
            .finish()
    }
}
