use crate::apis::{auth::Token, Sort};
use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Seller to create, either a natural person or a company.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum CreateSellerRequest {
    Individual(CreateIndividualSeller),
    Business(CreateBusinessSeller),
}

impl CreateSellerRequest {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            CreateSellerRequest::Individual(_) => INDIVIDUALS_PATH_SEGMENT,
            CreateSellerRequest::Business(_) => BUSINESSES_PATH_SEGMENT,
        }
    }
}

/// New details of an existing seller.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum UpdateSellerRequest {
    Individual(UpdateIndividualSeller),
    Business(UpdateBusinessSeller),
}

impl UpdateSellerRequest {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            UpdateSellerRequest::Individual(_) => INDIVIDUALS_PATH_SEGMENT,
            UpdateSellerRequest::Business(_) => BUSINESSES_PATH_SEGMENT,
        }
    }
}

const INDIVIDUALS_PATH_SEGMENT: &str = "individuals";
const BUSINESSES_PATH_SEGMENT: &str = "businesses";

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct CreateIndividualSeller {
    /// Whether IoPay emails the seller a link to set up the digital account password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_welcome_email: Option<bool>,
    /// Merchant category code, see [`SellersApi::mcc_list`](crate::apis::sellers::SellersApi::mcc_list).
    pub mcc: u32,
    pub revenue: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Formatted as `(00)000000000`.
    pub phone_number: String,
    pub cpf: String,
    /// Formatted as `YYYY-MM-DD`.
    pub birthdate: String,
    pub statement_descriptor: String,
    pub address: SellerAddress,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct CreateBusinessSeller {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_welcome_email: Option<bool>,
    pub mcc: u32,
    pub revenue: u64,
    pub statement_descriptor: String,
    pub business: Business,
    pub owner: BusinessOwner,
    pub business_address: SellerAddress,
    pub owner_address: SellerAddress,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Business {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub cnpj: String,
    /// Formatted as `YYYY-MM-DD`.
    pub opening_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Majority partner, representative or director of a business.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct BusinessOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub cpf: String,
    pub birthdate: String,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct SellerAddress {
    pub line1: String,
    /// Street number, 0 when there is none.
    pub line2: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    /// Formatted as `00000-000`.
    pub zip_code: String,
    pub country_code: CountryCode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CountryCode {
    #[default]
    #[serde(rename = "BR")]
    Br,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateIndividualSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birthdate: String,
    pub statement_descriptor: String,
    pub address: UpdateSellerAddress,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateBusinessSeller {
    pub statement_descriptor: String,
    pub business: UpdateBusiness,
    pub owner: BusinessOwner,
    pub business_address: UpdateSellerAddress,
    pub owner_address: UpdateSellerAddress,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateBusiness {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub opening_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Same as [`SellerAddress`], except that updates take the street number as a string.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct UpdateSellerAddress {
    pub line1: String,
    pub line2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country_code: CountryCode,
}

/// Seller returned by IoPay, tagged by its type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seller {
    Individual(SellerProfile),
    Business(BusinessSellerProfile),
}

impl Seller {
    pub fn profile(&self) -> &SellerProfile {
        match self {
            Seller::Individual(profile) => profile,
            Seller::Business(business) => &business.profile,
        }
    }

    pub fn io_seller_id(&self) -> &str {
        &self.profile().io_seller_id
    }
}

/// Fields shared by individual and business sellers.
///
/// For businesses, `first_name` holds the company name, `birthdate` its opening date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SellerProfile {
    pub io_seller_id: String,
    pub id: Option<u64>,
    pub taxpayer_id: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub revenue: Option<f64>,
    pub email: String,
    pub phone_number: Option<String>,
    /// Reported either as a number or as a string depending on the endpoint.
    #[serde(deserialize_with = "string_or_number")]
    pub mcc: String,
    pub birthdate: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country_code: Option<String>,
    pub website: Option<String>,
    pub online_payments: Option<serde_json::Value>,
    pub plan_type: Option<String>,
    pub enable_credit: Option<String>,
    pub enable_boleto: Option<String>,
    pub enable_pix: Option<String>,
    pub credit_max_installments: Option<u32>,
    pub statement_descriptor: Option<String>,
    pub url_notify: Option<String>,
    pub url_allow_from: Option<String>,
    pub url_logo: Option<String>,
    pub max_transaction_amount: Option<u64>,
    pub allow_register_seller: Option<u32>,
    pub sub_arrangement_id: Option<u64>,
    pub status: String,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BusinessSellerProfile {
    #[serde(flatten)]
    pub profile: SellerProfile,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_tel: Option<String>,
    pub owner_taxpayer_id: Option<String>,
    pub owner_birthdate: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SellerType {
    Individual,
    Business,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SellerDeleted {
    /// Identifier of the deleted seller.
    pub id: String,
    #[serde(rename = "type")]
    pub seller_type: SellerType,
    pub deleted: bool,
}

/// Query parameters of the sellers list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(strip_option))]
pub struct SellerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Merchant category code.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Mcc {
    pub code: String,
    pub category: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SellerBalances {
    pub current_balance: String,
    pub account_balance: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SellerBalancesResponse {
    pub items: SellerBalances,
}

/// User to grant access to the digital account of a seller.
#[derive(Serialize, Debug, Clone)]
pub struct DigitalAccountLogin {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_welcome_email: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DigitalAccountLoginResponse {
    pub user_full_name: String,
    pub email: String,
    #[serde(default)]
    pub send_welcome_email: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct DigitalAccountUser {
    pub name: String,
    pub email: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct AuthorizeSharedCustomersRequest<'a> {
    pub io_seller_id: &'a str,
}

/// Bank account details to tokenize.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct RawBankAccount {
    pub holder_name: String,
    pub bank_code: String,
    pub routing_number: String,
    pub account_number: String,
    /// CNPJ of a business account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ein: Option<String>,
    /// CPF of an individual account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxpayer_id: Option<String>,
    #[serde(rename = "type")]
    pub account_type: BankAccountType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountType {
    Checking,
    Savings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub id: String,
    pub holder_name: String,
    pub taxpayer_id: Option<String>,
    pub description: Option<String>,
    pub bank_name: Option<String>,
    pub bank_code: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub account_number: Option<String>,
    pub last4_digits: Option<String>,
    pub country_code: Option<String>,
    pub routing_number: String,
    pub routing_check_digit: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub debitable: bool,
    pub customer: Option<String>,
    pub fingerprint: Option<String>,
    pub address: Option<serde_json::Value>,
    pub verification_checklist: Option<serde_json::Value>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Single-use token standing for a bank account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenizedBankAccount {
    pub id: String,
    #[serde(default)]
    pub used: bool,
    pub bank_account: BankAccount,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Debug)]
pub(crate) struct AssociateBankAccountRequest<'a> {
    pub token: &'a str,
}

/// Transfer of funds from the balance of a seller to its bank account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreateTransferRequest {
    /// Amount in cents, as a string.
    pub amount: String,
    pub statement_descriptor: String,
    pub description: String,
}
