use crate::apis::Sort;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Customer data sent when creating or updating a customer.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerDetails {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub taxpayer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub customer_type: CustomerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub address: CustomerAddress,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    PersonNatural,
    PersonLegal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct CustomerAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub status: CustomerStatus,
    pub description: Option<String>,
    #[serde(default)]
    pub delinquent: bool,
    pub payment_methods: Option<serde_json::Value>,
    pub default_debit: Option<String>,
    pub default_credit: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub details: CustomerDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// Query parameters of the customers list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(strip_option))]
pub struct CustomerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Only customers created at or after this unix timestamp.
    #[serde(rename = "created_at[gte]", skip_serializing_if = "Option::is_none")]
    pub created_at_gte: Option<i64>,
    /// Only customers created at or before this unix timestamp.
    #[serde(rename = "created_at[lte]", skip_serializing_if = "Option::is_none")]
    pub created_at_lte: Option<i64>,
}

/// Card associated with a customer.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Card {
    pub id_card: String,
    pub id_customer: String,
    pub holder_name: String,
    pub card_brand: String,
    pub first4_digits: String,
    pub last4_digits: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CustomerCardList {
    pub id_customer: String,
    pub default_debit: Option<Card>,
    pub items: Vec<Card>,
}

#[derive(Serialize, Debug)]
pub(crate) struct AssociateCardTokenRequest<'a> {
    pub id_customer: &'a str,
    pub token: &'a str,
}

#[derive(Serialize, Debug)]
pub(crate) struct SetDefaultCardRequest<'a> {
    pub id_card: &'a str,
}
