use crate::common::test_context::TestContext;
use iopay_rust::{
    apis::auth::{Credentials, TokenKind},
    Error, IopayClient,
};

#[tokio::test]
async fn get_access_tokens() {
    let ctx = TestContext::start().await;

    let standard = ctx
        .client
        .auth
        .get_access_token(TokenKind::Standard)
        .await
        .unwrap();
    let special = ctx
        .client
        .auth
        .get_access_token(TokenKind::Special)
        .await
        .unwrap();

    assert!(!standard.expose_secret().is_empty());
    assert!(!special.expose_secret().is_empty());
    assert_ne!(standard.expose_secret(), special.expose_secret());
}

#[tokio::test]
async fn access_tokens_are_cached() {
    let ctx = TestContext::start().await;

    let first = ctx
        .client
        .auth
        .get_access_token(TokenKind::Standard)
        .await
        .unwrap();
    let second = ctx
        .client
        .auth
        .get_access_token(TokenKind::Standard)
        .await
        .unwrap();

    assert_eq!(first.expose_secret(), second.expose_secret());
    assert_eq!(first.expires_at(), second.expires_at());

    #[cfg(not(feature = "acceptance-tests"))]
    {
        assert_eq!(ctx.mock_server.login_count("/auth/login").await, 1);
        assert_eq!(ctx.mock_server.login_count("/v1/card/authentication").await, 0);
    }
}

#[tokio::test]
async fn invalid_credentials() {
    let ctx = TestContext::start().await;

    // Create a new client with a set of invalid credentials pointing to the same server
    let client = IopayClient::builder(Credentials {
        secret: "invalid".into(),
        email: "invalid@email.com".to_string(),
        io_seller_id: ctx.io_seller_id.clone(),
    })
    .with_environment(ctx.environment())
    .build();

    // Make the request and assert that we got an error
    let err = client
        .auth
        .get_access_token(TokenKind::Special)
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::Authentication { kind: TokenKind::Special, .. }));
    assert_eq!(err.api_error().map(|e| e.status), Some(401));

    // Resource calls fail the same way, before reaching the endpoint
    let err = client
        .customers
        .get_by_id("some-customer-id")
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::Authentication { kind: TokenKind::Standard, .. }));
}
