use anyhow::Context;
use iopay_rust::{
    apis::{
        auth::Credentials,
        customers::{CustomerAddress, CustomerDetails, CustomerListParamsBuilder, CustomerType},
        Sort,
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
        io_seller_id: config.io_seller_id,
    })
    .with_environment(config.environment)
    .build();

    // Create a new customer
    let customer = iopay
        .customers
        .create(&CustomerDetails {
            first_name: "Some".to_string(),
            last_name: Some("One".to_string()),
            email: "some.one@email.com".to_string(),
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
        })
        .await?;

    tracing::info!("Created new customer: {}", customer.id);

    // List the most recent customers
    let customers = iopay
        .customers
        .list(
            &CustomerListParamsBuilder::default()
                .sort(Sort::TimeDescending)
                .limit(5)
                .build()?,
        )
        .await?;
    for customer in &customers.items {
        tracing::info!(
            "Customer {}: {} <{}>",
            customer.id,
            customer.details.first_name,
            customer.details.email
        );
    }

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
