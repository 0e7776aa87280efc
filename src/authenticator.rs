use crate::{
    apis::auth::{AccessToken, Credentials, TokenKind},
    common::{LOGIN_PATH, SPECIAL_LOGIN_PATH, TOKEN_EXPIRY_SKEW_SECONDS},
    error::Error,
};
use anyhow::anyhow;
use chrono::{Duration, TimeZone, Utc};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tokio::sync::{mpsc, oneshot};

type Reply = oneshot::Sender<Result<AccessToken, Error>>;

/// Holds the two independent access tokens of a client.
///
/// Standard and special tokens are cached, expired and renewed separately:
/// a login for one kind never blocks or invalidates the other.
#[derive(Debug, Clone)]
pub struct TokenManager {
    standard: Authenticator,
    special: Authenticator,
}

impl TokenManager {
    pub fn new(client: ClientWithMiddleware, base_url: Url, credentials: Credentials) -> Self {
        Self {
            standard: Authenticator::new(
                client.clone(),
                base_url.clone(),
                TokenKind::Standard,
                credentials.clone(),
            ),
            special: Authenticator::new(client, base_url, TokenKind::Special, credentials),
        }
    }

    /// Returns a valid access token of the requested kind, logging in again if needed.
    pub async fn get_access_token(&self, kind: TokenKind) -> Result<AccessToken, Error> {
        match kind {
            TokenKind::Standard => self.standard.get_access_token().await,
            TokenKind::Special => self.special.get_access_token().await,
        }
    }
}

/// Manager for the access token of a single [`TokenKind`](crate::apis::auth::TokenKind).
#[derive(Debug, Clone)]
pub struct Authenticator {
    tx: mpsc::UnboundedSender<Reply>,
    kind: TokenKind,
}

impl Authenticator {
    /// Starts a new authenticator logging in with the given credentials.
    pub fn new(
        client: ClientWithMiddleware,
        base_url: Url,
        kind: TokenKind,
        credentials: Credentials,
    ) -> Self {
        let state = AuthenticatorState {
            client,
            base_url,
            kind,
            credentials,
            access_token: None,
        };

        // Spawn a long running task which will running forever until the authenticator is dropped
        let (tx, rx) = mpsc::unbounded_channel();
        #[cfg(test)]
        tests::mocked_time::spawn(async move {
            // We need to propagate the mocked time task-local in order to control time in the tests
            process_loop(state, rx).await;
        });
        #[cfg(not(test))]
        tokio::spawn(async move {
            process_loop(state, rx).await;
        });

        Self { tx, kind }
    }

    /// Returns the current access token.
    /// If there's no access token available, or the available one is about to expire,
    /// a new one will be requested from the server using the original credentials.
    ///
    /// Concurrent calls to `get_access_token` are batched into one single login request.
    pub async fn get_access_token(&self) -> Result<AccessToken, Error> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(tx)
            .map_err(|_| Error::Other(anyhow!("The {} authenticator has stopped", self.kind)))?;

        rx.await.map_err(|_| {
            Error::Other(anyhow!(
                "The {} authenticator dropped the request",
                self.kind
            ))
        })?
    }
}

/// Internal state of the authenticator.
struct AuthenticatorState {
    client: ClientWithMiddleware,
    base_url: Url,
    kind: TokenKind,
    credentials: Credentials,
    access_token: Option<AccessToken>,
}

async fn process_loop(mut state: AuthenticatorState, mut rx: mpsc::UnboundedReceiver<Reply>) {
    // Infinite loop waiting for commands from the main client
    while let Some(reply) = rx.recv().await {
        if reply
            .send(process_get_access_token(&mut state).await)
            .is_err()
        {
            tracing::warn!("Receiver dropped before the reply");
        }
    }
}

#[tracing::instrument(
    name = "Get Access Token",
    level = "debug",
    skip(state),
    fields(kind = %state.kind)
)]
async fn process_get_access_token(state: &mut AuthenticatorState) -> Result<AccessToken, Error> {
    // If we are already authenticated, do nothing
    if let Some(token) = &state.access_token {
        if !should_refresh_token(token) {
            tracing::debug!("Reusing existing access token");
            return Ok(token.clone());
        }
    }

    let token = login(state).await.map_err(|e| Error::Authentication {
        kind: state.kind,
        source: Box::new(e),
    })?;

    // Overwrite whatever token we had before
    state.access_token = Some(token.clone());

    tracing::info!(expires_at = %token.expires_at, "Got new access token");

    Ok(token)
}

async fn login(state: &AuthenticatorState) -> Result<AccessToken, Error> {
    let path = match state.kind {
        TokenKind::Standard => LOGIN_PATH,
        TokenKind::Special => SPECIAL_LOGIN_PATH,
    };
    let url = state
        .base_url
        .join(path)
        .map_err(|e| Error::Other(e.into()))?;

    let res: RawLoginResponse = state
        .client
        .post(url)
        .json(&state.credentials)
        .send()
        .await?
        .json()
        .await?;

    if res.access_token.is_empty() {
        return Err(Error::Other(anyhow!(
            "The login response did not contain an access token"
        )));
    }

    if !res.token_type.eq_ignore_ascii_case("bearer") {
        tracing::warn!(token_type = %res.token_type, "Unexpected access token type");
    }

    let expires_at = Utc
        .timestamp_opt(res.expires_at, 0)
        .single()
        .ok_or_else(|| Error::Other(anyhow!("Invalid token expiration: {}", res.expires_at)))?;

    Ok(AccessToken {
        kind: state.kind,
        token: res.access_token.into(),
        token_type: res.token_type,
        expires_at,
    })
}

/// Returns `true` if the token is expired or within the skew window of its expiration.
fn should_refresh_token(token: &AccessToken) -> bool {
    now() >= token.expires_at - Duration::seconds(TOKEN_EXPIRY_SKEW_SECONDS)
}

// Select an implementation of `now()` depending on whether we are testing or not
#[cfg(not(test))]
fn now() -> chrono::DateTime<Utc> {
    Utc::now()
}
#[cfg(test)]
use tests::mocked_time::now;

/// Successful response of a login request, once unwrapped from its envelope.
#[derive(serde::Deserialize)]
struct RawLoginResponse {
    access_token: String,
    #[serde(default)]
    token_type: String,
    /// Unix timestamp, in seconds.
    expires_at: i64,
}
