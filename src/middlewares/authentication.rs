use crate::{apis::auth::TokenKind, authenticator::TokenManager};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject an access token of a fixed kind into outgoing HTTP requests.
/// When no valid token of that kind is cached, an additional login request is fired first.
pub struct AuthenticationMiddleware {
    pub(crate) token_manager: TokenManager,
    pub(crate) kind: TokenKind,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Request an access token from the token manager
        let access_token = self.token_manager.get_access_token(self.kind).await?;

        // Inject the access token as a header
        let mut header_value =
            HeaderValue::from_str(&format!("Bearer {}", access_token.expose_secret()))
                .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, header_value);

        //Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
