//! Wire DTOs for the login handshake with the GameVault backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Only `firstName` and
//! `coins` are read from the user object; anything else the backend sends
//! is ignored so additive backend changes never break login.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Opaque Telegram `initData` string, forwarded untouched.
    #[serde(rename = "initData")]
    pub init_data: String,
}

impl LoginRequest {
    pub fn new(init_data: impl Into<String>) -> Self {
        Self { init_data: init_data.into() }
    }
}

/// Successful response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
}

/// The authenticated user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Telegram first name, used in the welcome line.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Coin balance. Non-negative by convention; not enforced.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub coins: i64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
