//! Clients for the various IoPay APIs.

use crate::{apis::auth::TokenKind, authenticator::TokenManager, client::Environment, Error};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use urlencoding::encode;

pub mod auth;
pub mod customers;
pub mod sellers;
pub mod tokenize;
pub mod transactions;

pub(crate) struct IopayClientInner {
    /// Adapter authenticated with the standard token.
    pub(crate) client: ClientWithMiddleware,
    /// Adapter authenticated with the special token.
    pub(crate) special_client: ClientWithMiddleware,
    pub(crate) token_manager: TokenManager,
    pub(crate) environment: Environment,
}

impl IopayClientInner {
    /// Returns the adapter bound to the given token kind.
    pub(crate) fn client(&self, kind: TokenKind) -> &ClientWithMiddleware {
        match kind {
            TokenKind::Standard => &self.client,
            TokenKind::Special => &self.special_client,
        }
    }

    /// Builds the URL of an endpoint from its path prefix and its percent-encoded segments.
    pub(crate) fn url(&self, prefix: &str, segments: &[&str]) -> Result<Url, Error> {
        let mut path = prefix.to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&encode(segment));
        }

        self.environment
            .base_url()
            .join(&path)
            .map_err(|e| Error::Other(e.into()))
    }
}

impl Debug for IopayClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IopayClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Page of results returned by the IoPay list endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct List<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total: Option<u64>,
    pub query_count: Option<u64>,
    pub sort: Option<String>,
}

/// Sort order of list endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Sort {
    #[serde(rename = "time-descending")]
    TimeDescending,
    #[serde(rename = "time-ascending")]
    TimeAscending,
}

/// Response of the delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Deleted {
    pub deleted: bool,
}
