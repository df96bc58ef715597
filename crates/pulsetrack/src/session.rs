//! Session gate for remote operations.
//!
//! Identity is delegated to an external provider; this module only models the
//! observed sign-in state. The session is an explicitly passed context: every
//! remote call takes the credentials from a [`Session`] value rather than
//! from ambient global state.

use crate::config::Config;
use crate::error::{Error, Result};

/// Credentials of a signed-in caregiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Identity of the signed-in user.
    pub user_id: String,
    /// Bearer token presented to the remote API and object storage.
    token: String,
}

impl Session {
    /// Create a session from a user id and bearer token.
    #[must_use]
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }

    /// The bearer token for outgoing requests.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// The observed sign-in state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No credentials are available; remote screens are gated off.
    SignedOut,
    /// A caregiver is signed in.
    SignedIn(Session),
}

impl AuthState {
    /// Resolve the sign-in state from configuration.
    ///
    /// The external identity provider hands the application a token out of
    /// band; here it arrives through the `auth` section of the configuration
    /// (file or `PULSETRACK_AUTH_*` environment variables).
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match (&config.auth.user, &config.auth.token) {
            (Some(user_id), Some(token)) if !token.is_empty() => {
                Self::SignedIn(Session::new(user_id.clone(), token.clone()))
            }
            _ => Self::SignedOut,
        }
    }

    /// Require a signed-in session, failing with a typed error otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSignedIn`] when signed out.
    pub fn require_signed_in(&self) -> Result<&Session> {
        match self {
            Self::SignedIn(session) => Ok(session),
            Self::SignedOut => Err(Error::not_signed_in(
                "set auth.user and auth.token in the config file \
                 or the PULSETRACK_AUTH_USER / PULSETRACK_AUTH_TOKEN environment variables",
            )),
        }
    }

    /// Whether a caregiver is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
