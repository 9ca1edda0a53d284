use serde::{Deserialize, Deserializer, Serialize};

// -------------------------
// Request DTOs
// -------------------------

/// Login body (JSON or urlencoded).
///
/// Missing or non-string fields read as empty strings, so they fail the
/// credential check instead of the body parse.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub password: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(s),
        _ => Ok(String::new()),
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct RootResponse {
    #[serde(rename = "Foo")]
    pub foo: &'static str,

    #[serde(rename = "Time")]
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct PongResponse {
    #[serde(rename = "Pong")]
    pub pong: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "Success")]
    pub success: bool,

    #[serde(rename = "JWT", skip_serializing_if = "Option::is_none")]
    pub jwt: Option<String>,
}

impl LoginResponse {
    pub fn issued(token: String) -> Self {
        Self {
            success: true,
            jwt: Some(token),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            jwt: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserNameResponse {
    #[serde(rename = "UserName")]
    pub user_name: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    #[serde(rename = "Success")]
    pub success: bool,
}

/// Body of every access-gate denial. Field order is part of the contract.
#[derive(Debug, Serialize)]
pub struct DenialBody {
    #[serde(rename = "Success")]
    pub success: bool,

    #[serde(rename = "Error")]
    pub error: &'static str,
}

impl DenialBody {
    pub fn access_denied() -> Self {
        Self {
            success: false,
            error: "Access denied",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: &'static str,
}
