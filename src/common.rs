use std::time::Duration;

// Default URLs
pub static DEFAULT_PRODUCTION_URL: &str = "https://api.iopay.com.br/api/";
pub static DEFAULT_SANDBOX_URL: &str = "https://sandbox.api.iopay.com.br/api/";

// Login endpoints, relative to the environment base URL
pub static LOGIN_PATH: &str = "auth/login";
pub static SPECIAL_LOGIN_PATH: &str = "v1/card/authentication";

pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Tokens are considered expired this many seconds before their actual expiration.
pub const TOKEN_EXPIRY_SKEW_SECONDS: i64 = 10;
