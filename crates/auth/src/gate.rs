//! Access-level gate.
//!
//! One stateless decision, shared by every guard style in the API.

use thiserror::Error;

use turnstile_core::AccessLevel;

use crate::User;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("access denied")]
pub struct AccessDenied {
    pub actual: AccessLevel,
}

/// The level a request acts under: the user's own, or `Anonymous`.
pub fn effective_level(identity: Option<&User>) -> AccessLevel {
    identity.map_or(AccessLevel::Anonymous, |u| u.access_level)
}

pub fn is_allowed(identity: Option<&User>, required: &[AccessLevel]) -> bool {
    required.contains(&effective_level(identity))
}

/// Same decision as [`is_allowed`], shaped for `?`.
pub fn authorize(identity: Option<&User>, required: &[AccessLevel]) -> Result<(), AccessDenied> {
    if is_allowed(identity, required) {
        Ok(())
    } else {
        Err(AccessDenied {
            actual: effective_level(identity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: AccessLevel = AccessLevel::Admin;
    const USER: AccessLevel = AccessLevel::User;
    const ANONYMOUS: AccessLevel = AccessLevel::Anonymous;

    fn account(level: AccessLevel) -> User {
        User::new("u", "u", level, "pw")
    }

    #[test]
    fn user_level() {
        let u = account(USER);
        assert!(is_allowed(Some(&u), &[USER, ADMIN]));
        assert!(!is_allowed(Some(&u), &[ADMIN]));
    }

    #[test]
    fn admin_level() {
        let a = account(ADMIN);
        assert!(is_allowed(Some(&a), &[ADMIN]));
        assert!(!is_allowed(Some(&a), &[USER]));
    }

    #[test]
    fn anonymous_needs_explicit_grant() {
        assert!(!is_allowed(None, &[USER, ADMIN]));
        assert!(is_allowed(None, &[ANONYMOUS]));
        assert!(is_allowed(None, &[ANONYMOUS, ADMIN]));
    }

    #[test]
    fn authenticated_user_is_not_anonymous() {
        assert!(!is_allowed(Some(&account(USER)), &[ANONYMOUS]));
    }

    #[test]
    fn empty_requirement_denies_everyone() {
        assert!(!is_allowed(None, &[]));
        assert!(!is_allowed(Some(&account(ADMIN)), &[]));
    }

    #[test]
    fn authorize_reports_effective_level() {
        assert_eq!(authorize(None, &[ADMIN]), Err(AccessDenied { actual: ANONYMOUS }));
        assert_eq!(authorize(Some(&account(USER)), &[USER]), Ok(()));
    }

    #[test]
    fn denial_message_is_generic() {
        let denied = authorize(Some(&account(USER)), &[ADMIN]).unwrap_err();
        assert_eq!(denied.to_string(), "access denied");
        assert_eq!(denied.actual, USER);
    }
}
