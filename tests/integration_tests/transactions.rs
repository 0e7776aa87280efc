use crate::{
    common::test_context::TestContext,
    integration_tests::helpers::{create_customer, create_customer_with_card, credit_transaction},
};
use iopay_rust::apis::transactions::{
    CreatePixTransaction, CreateTransactionRequest, Currency, Transaction, TransactionDetails,
    TransactionStatus,
};
use test_case::test_case;

#[test_case(true, TransactionStatus::Succeeded ; "captured immediately")]
#[test_case(false, TransactionStatus::PreAuthorized ; "pre-authorized only")]
#[tokio::test]
async fn create_credit_transaction(capture: bool, expected_status: TransactionStatus) {
    let ctx = TestContext::start().await;
    let (customer, card) = create_customer_with_card(&ctx).await.unwrap();

    let created = ctx
        .client
        .transactions
        .create(&customer.id, &credit_transaction(&ctx, &card.id_card, capture))
        .await
        .unwrap();
    assert_eq!(created.status(), expected_status);

    let fetched = ctx
        .client
        .transactions
        .get_by_id(created.id())
        .await
        .unwrap();
    assert_eq!(fetched.status(), expected_status);
    match fetched {
        Transaction::Credit(credit) => {
            assert_eq!(credit.payment_method.last4_digits, "1111");
            assert_eq!(credit.summary.captured, capture);
        }
        other => panic!("Unexpected transaction: {:?}", other),
    }
}

#[tokio::test]
async fn capture_then_void() {
    let ctx = TestContext::start().await;
    let (customer, card) = create_customer_with_card(&ctx).await.unwrap();

    let created = ctx
        .client
        .transactions
        .create(&customer.id, &credit_transaction(&ctx, &card.id_card, false))
        .await
        .unwrap();

    let captured = ctx
        .client
        .transactions
        .capture(created.id(), 1500)
        .await
        .unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].status(), TransactionStatus::Succeeded);

    let voided = ctx
        .client
        .transactions
        .void(created.id(), 1500)
        .await
        .unwrap();
    assert_eq!(voided.status(), TransactionStatus::Canceled);
    assert!(voided.summary().voided);

    #[cfg(not(feature = "acceptance-tests"))]
    assert_eq!(
        ctx.mock_server.stored_transaction(created.id()).unwrap()["status"],
        "canceled"
    );
}

#[tokio::test]
async fn create_pix_transaction() {
    let ctx = TestContext::start().await;
    let customer = create_customer(&ctx).await.unwrap();

    let created = ctx
        .client
        .transactions
        .create(
            &customer.id,
            &CreateTransactionRequest::Pix(CreatePixTransaction {
                details: TransactionDetails {
                    amount: 990,
                    currency: Currency::Brl,
                    description: "Integration test pix".to_string(),
                    statement_descriptor: "IOPAY TEST".to_string(),
                    io_seller_id: ctx.io_seller_id.clone(),
                    reference_id: None,
                    antifraud_sessid: None,
                    split_rules: None,
                },
            }),
        )
        .await
        .unwrap();

    assert_eq!(created.status(), TransactionStatus::Pending);
    match created {
        Transaction::Pix(pix) => assert!(pix.payment_method.qr_code.is_some()),
        other => panic!("Unexpected transaction: {:?}", other),
    }
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn capturing_a_captured_transaction_fails() {
    let ctx = TestContext::start().await;
    let (customer, card) = create_customer_with_card(&ctx).await.unwrap();

    let created = ctx
        .client
        .transactions
        .create(&customer.id, &credit_transaction(&ctx, &card.id_card, true))
        .await
        .unwrap();

    let err = ctx
        .client
        .transactions
        .capture(created.id(), 1500)
        .await
        .unwrap_err();

    let api_error = err.api_error().unwrap();
    assert_eq!(api_error.status, 200);
    assert_eq!(api_error.data["code"], "invalid_status");
    assert_eq!(api_error.request.method, "POST");
}
