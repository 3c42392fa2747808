//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a registered user.
///
/// The password hash is opaque to this crate; hashing and verification
/// happen at the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub risk_profile: String,
    pub kyc_status: String,
    pub created_at: NaiveDateTime,
}

/// Input model for registering a new user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub risk_profile: Option<String>,
}

/// Explicit patch for profile updates. Every updatable field is named;
/// `None` leaves the current value untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub risk_profile: Option<String>,
}

impl UserUpdate {
    /// Merges this patch into an existing user.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(risk_profile) = &self.risk_profile {
            user.risk_profile = risk_profile.clone();
        }
    }
}
