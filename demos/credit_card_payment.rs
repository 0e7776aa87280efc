use anyhow::Context;
use iopay_rust::{
    apis::{
        auth::Credentials,
        tokenize::RawCard,
        transactions::{
            CreateCreditTransaction, CreateTransactionRequest, Currency, InstallmentPlan,
            TransactionDetails,
        },
    },
    client::Environment,
    IopayClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    secret: String,
    email: String,
    io_seller_id: String,
    #[serde(default = "default_environment")]
    environment: Environment,
    /// Existing customer paying for the order.
    customer_id: String,
}

fn default_environment() -> Environment {
    Environment::Sandbox
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("IOPAY"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup IoPay client
    let iopay = IopayClient::builder(Credentials {
        secret: config.secret.into(),
        email: config.email,
        io_seller_id: config.io_seller_id.clone(),
    })
    .with_environment(config.environment)
    .build();

    // Tokenize a test card and store it on the customer
    let token = iopay
        .tokenize
        .card(&RawCard {
            holder_name: "SOME ONE".to_string(),
            expiration_month: "12".to_string(),
            expiration_year: "2030".to_string(),
            card_number: "4111111111111111".into(),
            security_code: "123".into(),
        })
        .await?;
    let card = iopay
        .customers
        .associate_card_token(&config.customer_id, &token.id)
        .await?;

    tracing::info!("Stored card ending in {}", card.last4_digits);

    // Pre-authorize 15.00 BRL on the card
    let transaction = iopay
        .transactions
        .create(
            &config.customer_id,
            &CreateTransactionRequest::Credit(CreateCreditTransaction {
                details: TransactionDetails {
                    amount: 1500,
                    currency: Currency::Brl,
                    description: "Demo order".to_string(),
                    statement_descriptor: "IOPAY DEMO".to_string(),
                    io_seller_id: config.io_seller_id,
                    reference_id: None,
                    antifraud_sessid: None,
                    split_rules: None,
                },
                token: None,
                id_card: Some(card.id_card),
                capture: false,
                transaction_fee: None,
                installment_plan: InstallmentPlan {
                    number_installments: 1,
                },
                products: None,
            }),
        )
        .await?;

    tracing::info!(
        "Created transaction {} with status {:?}",
        transaction.id(),
        transaction.status()
    );

    // Capture the full amount
    let captured = iopay
        .transactions
        .capture(transaction.id(), 1500)
        .await?;
    let captured = captured
        .first()
        .context("Capture returned no transaction")?;

    tracing::info!("{:#?}", captured);

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
