//! APIs and models related to authentication.

mod api;
mod model;

pub use api::AuthApi;
pub use model::*;
