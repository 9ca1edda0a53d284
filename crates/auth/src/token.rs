//! Bearer token codec (HS256 JWT).

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{Bearer, JwtClaims, TokenValidationError, validate_claims};

/// Lifetime of a freshly issued token: ten hours.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600 * 10);

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing secret is missing or empty")]
    MissingSecret,

    #[error("token ttl out of range")]
    TtlOutOfRange,

    #[error("jwt rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("claims rejected: {0}")]
    Claims(#[from] TokenValidationError),
}

/// Mints and verifies bearer tokens.
pub trait TokenCodec: Send + Sync {
    /// Sign `bearer` with a validity window starting at `issued_at`.
    fn encode_at(
        &self,
        bearer: &Bearer,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError>;

    /// Verify signature and time window, reporting why a token was rejected.
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError>;

    fn encode(&self, bearer: &Bearer, ttl: Duration) -> Result<String, TokenError> {
        self.encode_at(bearer, Utc::now(), ttl)
    }

    /// Fail-closed decode: any rejection is `None`.
    fn decode(&self, token: &str) -> Option<Bearer> {
        match self.validate(token, Utc::now()) {
            Ok(claims) => Some(claims.bearer),
            Err(e) => {
                tracing::debug!(error = %e, "bearer token rejected");
                None
            }
        }
    }
}

/// HMAC-SHA256 codec keyed by a process-wide secret.
#[derive(Clone)]
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn encode_at(
        &self,
        bearer: &Bearer,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let ttl = i64::try_from(ttl.as_secs()).map_err(|_| TokenError::TtlOutOfRange)?;
        let iat = issued_at.timestamp();
        let exp = iat.checked_add(ttl).ok_or(TokenError::TtlOutOfRange)?;

        let claims = JwtClaims {
            bearer: bearer.clone(),
            iat,
            exp,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding, &self.validation)?;
        // jsonwebtoken treats `exp == now` as valid; we do not.
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use proptest::prelude::*;
    use turnstile_core::{AccessLevel, UserId};

    const SECRET: &str = "test-secret";

    fn codec() -> Hs256TokenCodec {
        Hs256TokenCodec::new(SECRET).unwrap()
    }

    fn bearer() -> Bearer {
        Bearer {
            id: UserId::new("foo"),
            name: "Foo".to_string(),
            access_level: AccessLevel::User,
        }
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(Hs256TokenCodec::new(""), Err(TokenError::MissingSecret)));
    }

    #[test]
    fn decode_returns_original_claims() {
        let codec = codec();
        let token = codec.encode(&bearer(), DEFAULT_TOKEN_TTL).unwrap();
        assert_eq!(codec.decode(&token), Some(bearer()));
    }

    #[test]
    fn default_ttl_is_ten_hours() {
        let codec = codec();
        let now = Utc::now();
        let token = codec.encode_at(&bearer(), now, DEFAULT_TOKEN_TTL).unwrap();
        let claims = codec.validate(&token, now).unwrap();
        assert_eq!(claims.exp - claims.iat, 36_000);
    }

    #[test]
    fn zero_ttl_never_decodes() {
        let codec = codec();
        let token = codec.encode(&bearer(), Duration::ZERO).unwrap();
        assert_eq!(codec.decode(&token), None);
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = codec();
        let issued = Utc::now() - ChronoDuration::hours(2);
        let token = codec
            .encode_at(&bearer(), issued, Duration::from_secs(3600))
            .unwrap();
        assert_eq!(codec.decode(&token), None);
        assert!(codec.validate(&token, Utc::now()).is_err());
    }

    #[test]
    fn token_from_clock_ahead_still_decodes() {
        let codec = codec();
        let issued = Utc::now() + ChronoDuration::seconds(2);
        let token = codec.encode_at(&bearer(), issued, DEFAULT_TOKEN_TTL).unwrap();
        assert!(codec.validate(&token, Utc::now()).is_ok());
        assert_eq!(codec.decode(&token), Some(bearer()));
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = codec().encode(&bearer(), DEFAULT_TOKEN_TTL).unwrap();
        let other = Hs256TokenCodec::new("another-secret").unwrap();
        assert_eq!(other.decode(&token), None);
    }

    #[test]
    fn garbage_is_rejected() {
        let codec = codec();
        for token in ["", "not-a-jwt", "a.b.c", "...."] {
            assert_eq!(codec.decode(token), None, "accepted {token:?}");
        }
    }

    #[test]
    fn unsigned_token_is_rejected() {
        let codec = codec();
        let token = codec.encode(&bearer(), DEFAULT_TOKEN_TTL).unwrap();
        let unsigned = token.rsplit_once('.').map(|(head, _)| format!("{head}.")).unwrap();
        assert_eq!(codec.decode(&unsigned), None);
    }

    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";

    fn access_level() -> impl Strategy<Value = AccessLevel> {
        prop_oneof![
            Just(AccessLevel::Admin),
            Just(AccessLevel::User),
            Just(AccessLevel::Anonymous),
        ]
    }

    proptest! {
        #[test]
        fn any_claims_survive_encoding(
            id in "[a-zA-Z0-9_-]{1,24}",
            name in ".{0,32}",
            level in access_level(),
            ttl in 60u64..1_000_000,
        ) {
            let codec = codec();
            let bearer = Bearer { id: UserId::new(id), name, access_level: level };
            let token = codec.encode(&bearer, Duration::from_secs(ttl)).unwrap();
            prop_assert_eq!(codec.decode(&token), Some(bearer));
        }

        #[test]
        fn any_single_character_mutation_is_detected(
            position in any::<prop::sample::Index>(),
            replacement in any::<prop::sample::Index>(),
        ) {
            let codec = codec();
            let token = codec.encode(&bearer(), DEFAULT_TOKEN_TTL).unwrap();
            let mut bytes = token.clone().into_bytes();
            let at = position.index(bytes.len());
            let mut with = ALPHABET[replacement.index(ALPHABET.len())];
            if with == bytes[at] {
                with = if with == b'A' { b'B' } else { b'A' };
            }
            bytes[at] = with;
            let tampered = String::from_utf8(bytes).unwrap();
            prop_assert_ne!(&tampered, &token);
            prop_assert_eq!(codec.decode(&tampered), None);
        }
    }
}
