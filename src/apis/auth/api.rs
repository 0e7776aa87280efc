use crate::{
    apis::{
        auth::{AccessToken, TokenKind},
        IopayClientInner,
    },
    Error,
};
use std::sync::Arc;

/// IoPay authentication API client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    inner: Arc<IopayClientInner>,
}

impl AuthApi {
    pub(crate) fn new(inner: Arc<IopayClientInner>) -> Self {
        Self { inner }
    }

    /// Returns the current [`AccessToken`](crate::apis::auth::AccessToken) of the given kind.
    /// If there's no valid token of that kind yet, a new login request
    /// using the configured credentials will be fired.
    pub async fn get_access_token(&self, kind: TokenKind) -> Result<AccessToken, Error> {
        // Just delegate to the authenticator
        self.inner.token_manager.get_access_token(kind).await
    }
}
