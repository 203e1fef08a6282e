use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::CredentialsError;

/// API credentials used to sign requests. Secret material never appears in
/// Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Resolves credentials from explicit material or the process environment
/// (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, optional
/// `AWS_SESSION_TOKEN`). The first successful environment resolution is
/// cached.
pub struct CredentialsProvider {
    explicit: Option<Credentials>,
    cached: RwLock<Option<Credentials>>,
}

impl CredentialsProvider {
    /// A provider that always returns the given credentials.
    pub fn from_static(credentials: Credentials) -> Self {
        Self {
            explicit: Some(credentials),
            cached: RwLock::new(None),
        }
    }

    /// A provider that resolves from the process environment on first use.
    pub fn from_env() -> Self {
        Self {
            explicit: None,
            cached: RwLock::new(None),
        }
    }

    pub fn resolve(&self) -> Result<Credentials, CredentialsError> {
        if let Some(credentials) = &self.explicit {
            return Ok(credentials.clone());
        }
        if let Some(credentials) = self.cached.read().clone() {
            return Ok(credentials);
        }

        let credentials = lookup(|key| std::env::var(key).ok())?;
        debug!(access_key_id = %credentials.access_key_id, "resolved credentials from environment");
        *self.cached.write() = Some(credentials.clone());
        Ok(credentials)
    }
}

/// Environment lookup, parameterized over the variable source so it can be
/// tested without touching the process environment.
fn lookup(get: impl Fn(&str) -> Option<String>) -> Result<Credentials, CredentialsError> {
    let access_key_id = get("AWS_ACCESS_KEY_ID").filter(|v| !v.is_empty());
    let secret_access_key = get("AWS_SECRET_ACCESS_KEY").filter(|v| !v.is_empty());

    match (access_key_id, secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => Ok(Credentials {
            access_key_id,
            secret_access_key,
            session_token: get("AWS_SESSION_TOKEN").filter(|v| !v.is_empty()),
        }),
        (Some(_), None) => Err(CredentialsError::Incomplete("AWS_SECRET_ACCESS_KEY")),
        (None, Some(_)) => Err(CredentialsError::Incomplete("AWS_ACCESS_KEY_ID")),
        (None, None) => Err(CredentialsError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_complete_environment() {
        let vars = env(&[
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "token"),
        ]);
        let credentials = lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(credentials.access_key_id, "AKIDEXAMPLE");
        assert_eq!(credentials.secret_access_key, "secret");
        assert_eq!(credentials.session_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_lookup_without_session_token() {
        let vars = env(&[
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]);
        let credentials = lookup(|k| vars.get(k).cloned()).unwrap();
        assert!(credentials.session_token.is_none());
    }

    #[test]
    fn test_lookup_missing_secret() {
        let vars = env(&[("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")]);
        let err = lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(
            err,
            CredentialsError::Incomplete("AWS_SECRET_ACCESS_KEY")
        ));
    }

    #[test]
    fn test_lookup_empty_values_count_as_missing() {
        let vars = env(&[
            ("AWS_ACCESS_KEY_ID", ""),
            ("AWS_SECRET_ACCESS_KEY", ""),
        ]);
        assert!(matches!(
            lookup(|k| vars.get(k).cloned()),
            Err(CredentialsError::NotFound)
        ));
    }

    #[test]
    fn test_static_provider() {
        let provider = CredentialsProvider::from_static(
            Credentials::new("AKIDEXAMPLE", "secret").with_session_token("token"),
        );
        let credentials = provider.resolve().unwrap();
        assert_eq!(credentials.access_key_id, "AKIDEXAMPLE");
        assert_eq!(credentials.session_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_debug_redacts_secret_material() {
        let credentials =
            Credentials::new("AKIDEXAMPLE", "very-secret").with_session_token("also-secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("also-secret"));
    }
}
