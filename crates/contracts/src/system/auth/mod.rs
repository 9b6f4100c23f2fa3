//! Session gate in front of the console.
//!
//! There is no account backend: any non-empty email and password open a
//! session that lives until logout or page reload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("email is required")]
    MissingEmail,
    #[error("password is required")]
    MissingPassword,
}

impl AuthError {
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthError::MissingEmail => "emailRequired",
            AuthError::MissingPassword => "passwordRequired",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    session: Option<Session>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<&Session, AuthError> {
        let email = credentials.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if credentials.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        log::info!("session opened for {}", email);
        Ok(self.session.insert(Session {
            email: email.to_string(),
            signed_in_at: Utc::now(),
        }))
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("session closed for {}", session.email);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_and_logout() {
        let mut gate = SessionGate::new();
        assert!(!gate.is_authenticated());

        let session = gate.login(&credentials(" admin@example.com ", "secret")).unwrap();
        assert_eq!(session.email, "admin@example.com");
        assert!(gate.is_authenticated());

        gate.logout();
        assert!(gate.session().is_none());
    }

    #[test]
    fn test_missing_fields() {
        let mut gate = SessionGate::new();
        assert_eq!(
            gate.login(&credentials("  ", "secret")).unwrap_err(),
            AuthError::MissingEmail
        );
        assert_eq!(
            gate.login(&credentials("admin@example.com", "")).unwrap_err(),
            AuthError::MissingPassword
        );
        assert!(!gate.is_authenticated());
        assert_eq!(AuthError::MissingPassword.message_key(), "passwordRequired");
    }
}
