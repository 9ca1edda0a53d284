//! User lookup.

use std::collections::HashSet;

use turnstile_core::{AccessLevel, DomainError, DomainResult, UserId};

use crate::User;

/// Read-only source of user accounts.
///
/// Implementations must be safe to share across request workers.
pub trait UserDirectory: Send + Sync {
    /// Exact, case-sensitive match on both name and password.
    fn find_by_credentials(&self, name: &str, password: &str) -> Option<User>;

    fn find_by_id(&self, id: &UserId) -> Option<User>;
}

/// Fixed list of users, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    /// Build a directory, rejecting duplicate ids/names and `Anonymous` accounts.
    pub fn new(users: Vec<User>) -> DomainResult<Self> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for user in &users {
            if user.access_level == AccessLevel::Anonymous {
                return Err(DomainError::validation(format!(
                    "user '{}' cannot hold the Anonymous access level",
                    user.id
                )));
            }
            if !ids.insert(user.id.as_str()) {
                return Err(DomainError::invalid_id(format!("duplicate user id '{}'", user.id)));
            }
            if !names.insert(user.name.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate user name '{}'",
                    user.name
                )));
            }
        }

        Ok(Self { users })
    }

    /// The two built-in accounts: `root` (Admin) and `Foo` (User).
    pub fn with_default_users() -> Self {
        Self {
            users: vec![
                User::new("root", "root", AccessLevel::Admin, "Banana1"),
                User::new("foo", "Foo", AccessLevel::User, "Bar"),
            ],
        }
    }

    /// A copy of this directory without the given user.
    pub fn without(&self, id: &UserId) -> Self {
        Self {
            users: self.users.iter().filter(|u| &u.id != id).cloned().collect(),
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_credentials(&self, name: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.name == name && u.password_matches(password))
            .cloned()
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.users.iter().find(|u| &u.id == id).cloned()
    }
}
