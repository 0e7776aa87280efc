//! APIs and models related to sellers, their bank accounts, digital accounts and transfers.

mod api;
mod model;

pub use api::SellersApi;
pub use model::*;
