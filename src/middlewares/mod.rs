pub mod authentication;
pub mod error_handling;
pub mod inject_defaults;
