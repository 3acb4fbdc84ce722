//! User and doctor models.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Doctor,
    Patient,
}

/// An authenticated user. Created at login, dropped at logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Session-scoped user ID, derived from role and email
    pub id: String,
    /// Login email
    pub email: String,
    /// Role, inferred at login
    pub role: UserRole,
    /// Display name
    pub name: String,
}

/// A doctor account. The role is fixed by the type.
///
/// `is_subscribed` is the only mutable field; it gates patient capacity
/// and is toggled by an admin action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Doctor ID (referenced by `Patient::doctor_id`)
    pub id: String,
    /// Login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Whether the doctor is on the paid tier (unlimited patients)
    pub is_subscribed: bool,
    /// Contact phone
    pub phone: String,
    /// National identity number
    pub cnic: String,
}

impl Doctor {
    /// Create a new doctor on the free tier.
    pub fn new(name: String, email: String, phone: String, cnic: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name,
            is_subscribed: false,
            phone,
            cnic,
        }
    }

    /// View this doctor as a plain user.
    pub fn as_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            role: UserRole::Doctor,
            name: self.name.clone(),
        }
    }
}
