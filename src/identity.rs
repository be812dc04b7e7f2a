use async_trait::async_trait;

use crate::error::{PortalError, Result};

/// The third-party sign-in service as seen by the portal.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Whether a user is currently signed in.
    fn is_signed_in(&self) -> bool;

    /// Issue a fresh bearer token for the current session.
    ///
    /// Any failure, including "no token available", must surface as
    /// [`PortalError::TokenUnavailable`].
    async fn session_token(&self) -> Result<String>;
}

/// Identity with a fixed sign-in state and token, for hosts that obtain the
/// token out of band.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    token: Option<String>,
}

impl StaticIdentity {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    async fn session_token(&self) -> Result<String> {
        self.token
            .clone()
            .ok_or_else(|| PortalError::TokenUnavailable("no active session".to_string()))
    }
}
