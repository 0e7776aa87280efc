use crate::common::{DEFAULT_TIMEOUT, USER_AGENT};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use std::time::Duration;
use task_local_extensions::Extensions;

/// Middleware to inject the `User-Agent` and `Content-Type` headers and a timeout
/// into all outgoing requests.
pub struct InjectDefaultsMiddleware {
    user_agent: HeaderValue,
    timeout: Duration,
}

impl InjectDefaultsMiddleware {
    pub fn new(timeout: Duration) -> Self {
        Self {
            user_agent: HeaderValue::from_static(USER_AGENT),
            timeout,
        }
    }
}

impl Default for InjectDefaultsMiddleware {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Middleware for InjectDefaultsMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(USER_AGENT_HEADER, self.user_agent.clone());
        req.headers_mut()
            .entry(CONTENT_TYPE)
            .or_insert_with(|| HeaderValue::from_static("application/json"));

        // Requests may override the timeout on their own
        req.timeout_mut().get_or_insert(self.timeout);

        next.run(req, extensions).await
    }
}
