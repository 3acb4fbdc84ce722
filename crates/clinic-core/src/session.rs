//! Mock session handling.
//!
//! There is no credential validation yet: the role is inferred from the
//! email text, matching the demo accounts the login screen advertises
//! (admin@hospital.com, dr.smith@hospital.com, alice@email.com). A real
//! auth backend replaces this module wholesale; the rest of the crate
//! only ever sees the resulting [`User`].

use crate::models::{User, UserRole};

/// Infer a role from an email address.
///
/// "admin" anywhere in the email wins, then the "dr." doctor prefix;
/// everything else is a patient.
pub fn infer_role(email: &str) -> UserRole {
    if email.contains("admin") {
        UserRole::Admin
    } else if email.contains("dr.") {
        UserRole::Doctor
    } else {
        UserRole::Patient
    }
}

/// Build a user deterministically from an email and role.
///
/// The display name is the email local part with dots spaced out
/// ("dr.smith@hospital.com" becomes "dr smith").
fn user_from_email(email: &str, role: UserRole) -> User {
    let local = email.split('@').next().unwrap_or(email);
    let role_tag = match role {
        UserRole::Admin => "admin",
        UserRole::Doctor => "doctor",
        UserRole::Patient => "patient",
    };
    User {
        id: format!("{}-{}", role_tag, local),
        email: email.to_string(),
        role,
        name: local.replace('.', " "),
    }
}

/// One user's login session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Start with nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in with an email; the role is inferred from the text.
    pub fn login(&mut self, email: &str) -> &User {
        let user = user_from_email(email, infer_role(email));
        self.user.insert(user)
    }

    /// Sign up with an explicit role (the signup form asks for it).
    pub fn signup(&mut self, name: &str, email: &str, role: UserRole) -> &User {
        let mut user = user_from_email(email, role);
        user.name = name.to_string();
        self.user.insert(user)
    }

    /// Drop the current user.
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
