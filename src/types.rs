//! Core types for signup-api

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// Longest email accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LEN: usize = 254;

/// Longest display name accepted
pub const MAX_NAME_LEN: usize = 200;

/// Store-assigned identifier of a user row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated user ready to be written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
}

/// Raw signup body as sent by the client
///
/// Both fields are optional at the wire level so that a missing field is a
/// validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignupRequest {
    /// Email address of the new user
    #[schema(example = "a@example.com")]
    pub email: Option<String>,
    /// Display name (optional)
    #[schema(example = "Alice")]
    pub name: Option<String>,
}

impl SignupRequest {
    /// Check the request and turn it into a [`NewUser`]
    pub fn validate(self) -> Result<NewUser> {
        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::Validation("email is required".into()))?;

        if email.len() > MAX_EMAIL_LEN {
            return Err(Error::Validation(format!(
                "email must be at most {} characters",
                MAX_EMAIL_LEN
            )));
        }
        if !is_valid_email(email) {
            return Err(Error::Validation(format!("invalid email address: {}", email)));
        }

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        if let Some(n) = &name {
            if n.chars().count() > MAX_NAME_LEN {
                return Err(Error::Validation(format!(
                    "name must be at most {} characters",
                    MAX_NAME_LEN
                )));
            }
        }

        Ok(NewUser {
            email: normalize_email(email),
            name,
        })
    }
}

/// Lowercase the domain; the local part is kept as sent
fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_ascii_lowercase()),
        None => email.to_string(),
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
