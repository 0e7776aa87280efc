use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref};

/// Credentials used to authenticate against IoPay's APIs.
///
/// The same credentials are used for both the standard and the special token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    /// API secret key.
    pub secret: Token,
    /// Email of the account owning the secret.
    pub email: String,
    /// Identifier of the seller the client acts for.
    pub io_seller_id: String,
}

/// Kind of access token needed by an endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Token for the general customer, transaction and seller endpoints.
    Standard,
    /// Token for the card-privileged endpoints.
    Special,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Standard => write!(f, "standard"),
            TokenKind::Special => write!(f, "special"),
        }
    }
}

/// Bearer token issued by the IoPay login endpoints.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub(crate) kind: TokenKind,
    pub(crate) token: Token,
    pub(crate) token_type: String,
    pub(crate) expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Which login endpoint issued this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Actual token contents held by this `AccessToken` instance.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Token type reported by the server, usually `bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Expiration date of the token.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl Deref for AccessToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        self.token()
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use iopay_rust::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`...
/// assert_eq!(token.expose_secret(), "supersecret");
///
/// // ... Or if serialized with Serde
/// let serialized = serde_json::to_string(&token).unwrap();
/// assert!(serialized.contains("supersecret"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
