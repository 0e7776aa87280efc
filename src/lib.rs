//! Async Rust client for the [IoPay](https://iopay.com.br) payments APIs.
//!
//! The client takes care of authentication: it logs in with your credentials on the first
//! request, caches the issued bearer tokens and logs in again when they are about to expire.
//! Responses are unwrapped from the IoPay `{ "success": ... }` envelope, and every failure
//! reported by the API is surfaced as a structured [`ApiError`](crate::error::ApiError).
//!
//! # Usage
//!
//! ## Initialize a new `IopayClient`
//!
//! ```rust,no_run
//! # use iopay_rust::{IopayClient, apis::auth::Credentials, client::Environment};
//! let iopay = IopayClient::builder(Credentials {
//!     secret: "some-secret".into(),
//!     email: "someone@example.com".into(),
//!     io_seller_id: "some-seller-id".into(),
//! })
//! .with_environment(Environment::Sandbox)
//! .build();
//! ```
//!
//! By default, an `IopayClient` connects to the Production environment.
//!
//! ## Create a customer
//!
//! ```rust,no_run
//! # use iopay_rust::{IopayClient, Error, apis::customers::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let iopay: IopayClient = unreachable!();
//! #
//! let customer = iopay
//!     .customers
//!     .create(&CustomerDetails {
//!         first_name: "Some".to_string(),
//!         last_name: Some("One".to_string()),
//!         email: "some.one@email.com".to_string(),
//!         taxpayer_id: "12345678909".to_string(),
//!         phone_number: None,
//!         customer_type: CustomerType::PersonNatural,
//!         gender: None,
//!         address: CustomerAddress {
//!             city: "São Paulo".to_string(),
//!             state: "SP".to_string(),
//!             ..Default::default()
//!         },
//!     })
//!     .await?;
//!
//! println!("Created new customer: {}", customer.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! ```rust,no_run
//! # use iopay_rust::{IopayClient, Error};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let iopay: IopayClient = unreachable!();
//! #
//! match iopay.transactions.get_by_id("some-transaction-id").await {
//!     Ok(transaction) => println!("Status: {:?}", transaction.status()),
//!     Err(Error::ApiError(e)) => println!("IoPay said {}: {}", e.status, e.data),
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! ```shell
//! cargo run --example create_customer
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::IopayClient;
pub use error::Error;
