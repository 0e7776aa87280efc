use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{create_customer, create_customer_with_card, customer_details},
};
use iopay_rust::{apis::customers::CustomerStatus, Error};

#[tokio::test]
async fn create_and_get_customer() {
    let ctx = TestContext::start().await;

    let details = customer_details();
    let created = ctx.client.customers.create(&details).await.unwrap();
    assert_eq!(created.status, CustomerStatus::Active);
    assert_eq!(created.details.email, details.email);

    let fetched = ctx.client.customers.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.details.address.city, "São Paulo");
}

#[tokio::test]
async fn get_non_existing_customer_returns_api_error() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .customers
        .get_by_id("non-existing-customer")
        .await
        .unwrap_err();

    match err {
        Error::ApiError(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.request.method, "GET");
            assert_eq!(e.request.url, "v1/customer/get/non-existing-customer");
        }
        e => panic!("Unexpected error: {}", e),
    }
}

#[tokio::test]
async fn associate_and_list_cards() {
    let ctx = TestContext::start().await;

    let (customer, card) = create_customer_with_card(&ctx).await.unwrap();
    assert_eq!(card.id_customer, customer.id);
    assert_eq!(card.last4_digits, "1111");

    let cards = ctx.client.customers.list_cards(&customer.id).await.unwrap();
    assert_eq!(cards.id_customer, customer.id);
    assert_eq!(cards.items, vec![card.clone()]);
    assert_eq!(cards.default_debit, Some(card));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn card_tokens_are_single_use() {
    let ctx = TestContext::start().await;

    let customer = create_customer(&ctx).await.unwrap();
    let token = ctx
        .client
        .tokenize
        .card(&crate::integration_tests::helpers::raw_card())
        .await
        .unwrap();
    ctx.client
        .customers
        .associate_card_token(&customer.id, &token.id)
        .await
        .unwrap();

    // The second association is rejected inside a successful response
    let err = ctx
        .client
        .customers
        .associate_card_token(&customer.id, &token.id)
        .await
        .unwrap_err();

    let api_error = err.api_error().unwrap();
    assert_eq!(api_error.status, 200);
    assert_eq!(api_error.data["code"], "token_used");
}
