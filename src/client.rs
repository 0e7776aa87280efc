//! Module containing the main IoPay API client.

use crate::{
    apis::{
        auth::{AuthApi, Credentials, TokenKind},
        customers::CustomersApi,
        sellers::SellersApi,
        tokenize::TokenizeApi,
        transactions::TransactionsApi,
        IopayClientInner,
    },
    authenticator::TokenManager,
    common::{DEFAULT_PRODUCTION_URL, DEFAULT_SANDBOX_URL, DEFAULT_TIMEOUT},
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_defaults::InjectDefaultsMiddleware,
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use serde::{Deserialize, Deserializer};
use std::{str::FromStr, sync::Arc, time::Duration};

/// Client for IoPay public APIs.
///
/// Cloning the client is cheap, and all clones share the same cached access tokens.
#[derive(Debug, Clone)]
pub struct IopayClient {
    /// Authentication APIs client.
    pub auth: AuthApi,
    /// Customers and customer cards APIs client.
    pub customers: CustomersApi,
    /// Card tokenization APIs client.
    pub tokenize: TokenizeApi,
    /// Transactions APIs client.
    pub transactions: TransactionsApi,
    /// Sellers APIs client.
    pub sellers: SellersApi,
}

impl IopayClient {
    /// Builds a new [`IopayClient`](crate::client::IopayClient) with the default configuration.
    pub fn new(credentials: Credentials) -> IopayClient {
        IopayClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`IopayClient`](crate::client::IopayClient).
    pub fn builder(credentials: Credentials) -> IopayClientBuilder {
        IopayClientBuilder::new(credentials)
    }
}

/// Builder for a [`IopayClient`](crate::client::IopayClient).
#[derive(Debug)]
pub struct IopayClientBuilder {
    client: reqwest::Client,
    timeout: Duration,
    credentials: Credentials,
    environment: Environment,
}

impl IopayClientBuilder {
    /// Creates a new builder to configure a [`IopayClient`](crate::client::IopayClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
            credentials,
            environment: Environment::Production,
        }
    }

    /// Consumes the builder and builds a new [`IopayClient`](crate::client::IopayClient).
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> IopayClient {
        let base_url = self.environment.base_url();

        // Build the token manager, which logs in without any authentication middleware
        let token_manager = TokenManager::new(
            build_client_with_middleware(self.client.clone(), &base_url, self.timeout, None),
            base_url.clone(),
            self.credentials,
        );

        // One adapter per token kind
        let adapter = |kind| {
            build_client_with_middleware(
                self.client.clone(),
                &base_url,
                self.timeout,
                Some(AuthenticationMiddleware {
                    token_manager: token_manager.clone(),
                    kind,
                }),
            )
        };

        let inner = Arc::new(IopayClientInner {
            client: adapter(TokenKind::Standard),
            special_client: adapter(TokenKind::Special),
            token_manager: token_manager.clone(),
            environment: self.environment.clone(),
        });

        IopayClient {
            auth: AuthApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            tokenize: TokenizeApi::new(inner.clone()),
            transactions: TransactionsApi::new(inner.clone()),
            sellers: SellersApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the timeout applied to every request.
    ///
    /// Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Production`](crate::client::Environment::Production).
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// IoPay environment to which a `IopayClient` connects.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Environment {
    /// IoPay production environment.
    Production,
    /// IoPay sandbox environment.
    Sandbox,
    /// Custom environment, served from a single base URL.
    ///
    /// Mostly useful for tests and proxies.
    Custom(Url),
}

impl Environment {
    /// Builds a custom environment from a single base URL.
    ///
    /// A trailing slash is appended to the path if missing, so that endpoint paths are
    /// resolved under it.
    pub fn from_single_url(url: &Url) -> Environment {
        let mut url = url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Environment::Custom(url)
    }

    /// Base URL of all the API endpoints of this environment.
    pub fn base_url(&self) -> Url {
        match self {
            Environment::Production => Url::parse(DEFAULT_PRODUCTION_URL).unwrap(),
            Environment::Sandbox => Url::parse(DEFAULT_SANDBOX_URL).unwrap(),
            Environment::Custom(url) => url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    /// Parses an environment key: `production` or `sandbox`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(crate::Error::Other(anyhow::anyhow!(
                "Unknown IoPay environment: {}",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    base_url: &Url,
    timeout: Duration,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::default())
        .with(InjectDefaultsMiddleware::new(timeout))
        .with(ErrorHandlingMiddleware::new(base_url.clone()));

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}
