//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use wealthtrack_core::users::{NewUser, User};

/// Database model for users
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub risk_profile: String,
    pub kyc_status: String,
    pub created_at: NaiveDateTime,
}

/// Database model for registering a new user
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub risk_profile: String,
    pub kyc_status: String,
}

// Conversion to domain models
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            risk_profile: db.risk_profile,
            kyc_status: db.kyc_status,
            created_at: db.created_at,
        }
    }
}

impl From<&User> for UserDB {
    fn from(domain: &User) -> Self {
        Self {
            id: domain.id.clone(),
            name: domain.name.clone(),
            email: domain.email.clone(),
            password_hash: domain.password_hash.clone(),
            risk_profile: domain.risk_profile.clone(),
            kyc_status: domain.kyc_status.clone(),
            created_at: domain.created_at,
        }
    }
}

impl NewUserDB {
    pub fn from_domain(id: String, domain: NewUser, default_risk: &str, kyc_status: &str) -> Self {
        Self {
            id,
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            risk_profile: domain
                .risk_profile
                .unwrap_or_else(|| default_risk.to_string()),
            kyc_status: kyc_status.to_string(),
        }
    }
}
