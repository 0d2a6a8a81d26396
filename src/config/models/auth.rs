//! Authentication configuration

use std::fmt;

/// The admin shared secret used both for credential checks and as the
/// session-token signing key.
///
/// Tagged rather than silently optional so the unconfigured case stays
/// visible at the type level: credential verification always fails without a
/// secret, while token issuance degrades to a fallback signing key.
#[derive(Clone, PartialEq, Eq)]
pub enum AdminSecret {
    /// Secret loaded from the environment
    Configured(String),
    /// No secret configured; the dashboard is effectively locked out
    Unconfigured,
}

impl AdminSecret {
    /// Build from an optional environment value; empty strings count as
    /// unconfigured.
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(s) if !s.is_empty() => AdminSecret::Configured(s),
            _ => AdminSecret::Unconfigured,
        }
    }

    /// The configured secret, if any
    pub fn as_configured(&self) -> Option<&str> {
        match self {
            AdminSecret::Configured(s) => Some(s.as_str()),
            AdminSecret::Unconfigured => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, AdminSecret::Configured(_))
    }
}

impl fmt::Debug for AdminSecret {
    // Never print the secret itself
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminSecret::Configured(_) => write!(f, "AdminSecret::Configured(***)"),
            AdminSecret::Unconfigured => write!(f, "AdminSecret::Unconfigured"),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Admin shared secret
    pub secret: AdminSecret,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: AdminSecret::Unconfigured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_unconfigured() {
        assert_eq!(
            AdminSecret::from_option(Some(String::new())),
            AdminSecret::Unconfigured
        );
        assert_eq!(AdminSecret::from_option(None), AdminSecret::Unconfigured);
    }

    #[test]
    fn test_configured_secret() {
        let secret = AdminSecret::from_option(Some("hunter2".into()));
        assert!(secret.is_configured());
        assert_eq!(secret.as_configured(), Some("hunter2"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let secret = AdminSecret::Configured("hunter2".into());
        assert_eq!(format!("{:?}", secret), "AdminSecret::Configured(***)");
    }
}
