use serde::Deserialize;
use thiserror::Error;

use crate::backend::AuthRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Signup,
}

/// Checked in declaration order; the first failure wins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthFormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter your name")]
    MissingName,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthForm {
    /// Validates the form for `mode` and builds the backend request.
    /// The name is only sent when signing up.
    pub fn validate(&self, mode: AuthMode) -> Result<AuthRequest, AuthFormError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(AuthFormError::MissingFields);
        }

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        if mode == AuthMode::Signup && name.is_none() {
            return Err(AuthFormError::MissingName);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthFormError::PasswordTooShort);
        }

        Ok(AuthRequest {
            email: email.to_string(),
            password: self.password.clone(),
            name: match mode {
                AuthMode::Signup => name.map(str::to_string),
                AuthMode::Login => None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, name: Option<&str>) -> AuthForm {
        AuthForm {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_email_or_password() {
        assert_eq!(
            form("", "secret1", None).validate(AuthMode::Login),
            Err(AuthFormError::MissingFields)
        );
        assert_eq!(
            form("a@b.com", "", None).validate(AuthMode::Login),
            Err(AuthFormError::MissingFields)
        );
    }

    #[test]
    fn test_signup_requires_name() {
        assert_eq!(
            form("a@b.com", "secret1", None).validate(AuthMode::Signup),
            Err(AuthFormError::MissingName)
        );
        assert_eq!(
            form("a@b.com", "secret1", Some("   ")).validate(AuthMode::Signup),
            Err(AuthFormError::MissingName)
        );
    }

    #[test]
    fn test_login_does_not_need_name() {
        let request = form("a@b.com", "secret1", Some("Asha"))
            .validate(AuthMode::Login)
            .unwrap();
        assert_eq!(request.name, None);
    }

    #[test]
    fn test_short_password_rejected() {
        assert_eq!(
            form("a@b.com", "12345", None).validate(AuthMode::Login),
            Err(AuthFormError::PasswordTooShort)
        );
        assert_eq!(
            AuthFormError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_missing_fields_checked_before_name() {
        assert_eq!(
            form("", "", None).validate(AuthMode::Signup),
            Err(AuthFormError::MissingFields)
        );
    }

    #[test]
    fn test_name_checked_before_password_length() {
        assert_eq!(
            form("a@b.com", "123", None).validate(AuthMode::Signup),
            Err(AuthFormError::MissingName)
        );
    }

    #[test]
    fn test_valid_signup_builds_request() {
        let request = form(" a@b.com ", "secret1", Some(" Asha "))
            .validate(AuthMode::Signup)
            .unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.name.as_deref(), Some("Asha"));
    }
}
