use crate::apis::auth::Token;
use serde::{Deserialize, Serialize};

/// Raw card data to tokenize.
///
/// The card number and security code are redacted from `Debug` output.
#[derive(Serialize, Debug, Clone)]
pub struct RawCard {
    pub holder_name: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub card_number: Token,
    pub security_code: Token,
}

/// Single-use token standing for a card.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TokenizedCard {
    pub id: String,
    #[serde(default)]
    pub used: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub card: TokenizedCardDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TokenizedCardDetails {
    pub id: String,
    pub holder_name: String,
    pub card_brand: String,
    pub first4_digits: String,
    pub last4_digits: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
