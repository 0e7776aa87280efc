use iopay_rust::{apis::auth::Credentials, client::Environment, IopayClient};

pub struct TestContext {
    pub client: IopayClient,
    pub io_seller_id: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let secret = std::env::var("ACCEPTANCE_TESTS_SECRET").unwrap();
        let email = std::env::var("ACCEPTANCE_TESTS_EMAIL").unwrap();
        let io_seller_id = std::env::var("ACCEPTANCE_TESTS_IO_SELLER_ID").unwrap();

        // Configure a new IopayClient to point to Sandbox
        let client = IopayClient::builder(Credentials {
            secret: secret.into(),
            email,
            io_seller_id: io_seller_id.clone(),
        })
        .with_environment(Environment::Sandbox)
        .build();

        Self {
            client,
            io_seller_id,
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::Sandbox
    }
}
