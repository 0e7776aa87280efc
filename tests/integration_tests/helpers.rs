use crate::common::test_context::TestContext;
use iopay_rust::apis::{
    customers::{Card, Customer, CustomerAddress, CustomerDetails, CustomerType},
    tokenize::{RawCard, TokenizedCard},
    transactions::{
        CreateCreditTransaction, CreateTransactionRequest, Currency, InstallmentPlan,
        TransactionDetails,
    },
};
use uuid::Uuid;

pub fn customer_details() -> CustomerDetails {
    CustomerDetails {
        first_name: "Some".to_string(),
        last_name: Some("One".to_string()),
        email: format!("{}@email.com", Uuid::new_v4()),
        taxpayer_id: "12345678909".to_string(),
        phone_number: Some("(11)999999999".to_string()),
        customer_type: CustomerType::PersonNatural,
        gender: None,
        address: CustomerAddress {
            line1: Some("Rua Augusta".to_string()),
            line2: Some(100),
            neighborhood: Some("Consolação".to_string()),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            postal_code: Some("01305-000".to_string()),
            ..Default::default()
        },
    }
}

pub fn raw_card() -> RawCard {
    RawCard {
        holder_name: "SOME ONE".to_string(),
        expiration_month: "12".to_string(),
        expiration_year: "2030".to_string(),
        card_number: "4111111111111111".into(),
        security_code: "123".into(),
    }
}

pub async fn create_customer(ctx: &TestContext) -> anyhow::Result<Customer> {
    let customer = ctx.client.customers.create(&customer_details()).await?;
    Ok(customer)
}

pub async fn tokenize_card(ctx: &TestContext) -> anyhow::Result<TokenizedCard> {
    let token = ctx.client.tokenize.card(&raw_card()).await?;
    Ok(token)
}

pub async fn create_customer_with_card(ctx: &TestContext) -> anyhow::Result<(Customer, Card)> {
    let customer = create_customer(ctx).await?;
    let token = tokenize_card(ctx).await?;
    let card = ctx
        .client
        .customers
        .associate_card_token(&customer.id, &token.id)
        .await?;

    Ok((customer, card))
}

pub fn credit_transaction(ctx: &TestContext, id_card: &str, capture: bool) -> CreateTransactionRequest {
    CreateTransactionRequest::Credit(CreateCreditTransaction {
        details: TransactionDetails {
            amount: 1500,
            currency: Currency::Brl,
            description: "Integration test order".to_string(),
            statement_descriptor: "IOPAY TEST".to_string(),
            io_seller_id: ctx.io_seller_id.clone(),
            reference_id: Some(Uuid::new_v4().to_string()),
            antifraud_sessid: None,
            split_rules: None,
        },
        token: None,
        id_card: Some(id_card.to_string()),
        capture,
        transaction_fee: None,
        installment_plan: InstallmentPlan {
            number_installments: 1,
        },
        products: None,
    })
}
