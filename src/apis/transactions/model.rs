use crate::apis::Sort;
use derive_builder::Builder;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Transaction to create, tagged by its payment type.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "payment_type", rename_all = "snake_case")]
pub enum CreateTransactionRequest {
    Credit(CreateCreditTransaction),
    Boleto(CreateBoletoTransaction),
    Pix(CreatePixTransaction),
}

/// Fields shared by every kind of transaction request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    /// Amount in cents.
    pub amount: u64,
    pub currency: Currency,
    pub description: String,
    /// Text printed on the customer's statement.
    pub statement_descriptor: String,
    pub io_seller_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antifraud_sessid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_rules: Option<Vec<SplitRule>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateCreditTransaction {
    #[serde(flatten)]
    pub details: TransactionDetails,
    /// Card token, alternative to `id_card`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Card already associated with the customer, alternative to `token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    /// Whether to capture immediately or only pre-authorize.
    #[serde(serialize_with = "serialize_bool_as_int")]
    pub capture: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_fee: Option<InstallmentMode>,
    pub installment_plan: InstallmentPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateBoletoTransaction {
    #[serde(flatten)]
    pub details: TransactionDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_limit_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<BoletoInterest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_fee: Option<BoletoLateFee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreatePixTransaction {
    #[serde(flatten)]
    pub details: TransactionDetails,
}

fn serialize_bool_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Currency {
    #[default]
    #[serde(rename = "BRL")]
    Brl,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentMode {
    InterestFree,
    WithInterest,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct InstallmentPlan {
    pub number_installments: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Product {
    pub name: String,
    pub code: String,
    pub amount: String,
    pub quantity: u32,
}

/// Interest charged after a boleto expires.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoletoInterest {
    pub mode: BoletoInterestMode,
    /// Cents for `DailyAmount`, a percentage otherwise.
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BoletoInterestMode {
    DailyAmount,
    DailyPercentage,
    MonthlyPercentage,
}

/// Fee charged once after a boleto expires.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoletoLateFee {
    pub mode: BoletoLateFeeMode,
    /// Cents for `Amount`, a percentage otherwise.
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BoletoLateFeeMode {
    Amount,
    Percentage,
}

/// Rule splitting the amount of a transaction with another seller.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SplitRule {
    pub receiver: String,
    pub receiver_fee_type: ReceiverFeeType,
    pub split_type: SplitType,
    /// Between 1 and 100 for `Percent`, cents for `Fixed`.
    pub split_value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_liable: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverFeeType {
    Proportional,
    Full,
    Free,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    Percent,
    Fixed,
}

/// Transaction returned by IoPay, tagged by its payment type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "payment_type", rename_all = "snake_case")]
pub enum Transaction {
    Credit(CreditTransaction),
    Boleto(BoletoTransaction),
    Pix(PixTransaction),
}

impl Transaction {
    /// Fields shared by every payment type.
    pub fn summary(&self) -> &TransactionSummary {
        match self {
            Transaction::Credit(t) => &t.summary,
            Transaction::Boleto(t) => &t.summary,
            Transaction::Pix(t) => &t.summary,
        }
    }

    pub fn id(&self) -> &str {
        &self.summary().id
    }

    pub fn status(&self) -> TransactionStatus {
        self.summary().status
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    pub id: String,
    pub status: TransactionStatus,
    pub confirmed: Option<String>,
    pub amount: String,
    pub original_amount: Option<String>,
    #[serde(default)]
    pub currency: Currency,
    pub description: Option<String>,
    pub refunds: Option<String>,
    pub rewards: Option<String>,
    pub discounts: Option<String>,
    pub sales_receipt: Option<String>,
    pub customer: Option<String>,
    pub statement_descriptor: Option<String>,
    #[serde(default)]
    pub refunded: bool,
    #[serde(default)]
    pub voided: bool,
    #[serde(default)]
    pub captured: bool,
    pub fees: Option<String>,
    #[serde(default)]
    pub fee_details: Vec<Fee>,
    pub location_latitude: Option<String>,
    pub location_longitude: Option<String>,
    pub expected_on: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub voided_at: Option<String>,
    pub reference_id: Option<String>,
    pub history: Option<Vec<History>>,
    #[serde(rename = "antifraud_packageID")]
    pub antifraud_package_id: Option<String>,
    pub antifraud_code: Option<String>,
    pub antifraud_status: Option<String>,
    pub antifraud_type: Option<String>,
    pub split_rules: Option<Vec<SplitRule>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditTransaction {
    #[serde(flatten)]
    pub summary: TransactionSummary,
    pub payment_method: CardPaymentMethod,
    pub installment_plan: Option<CreditInstallmentPlan>,
    pub payment_authorization: Option<PaymentAuthorization>,
    pub transaction_number: Option<String>,
    pub gateway_authorizer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoletoTransaction {
    #[serde(flatten)]
    pub summary: TransactionSummary,
    pub payment_method: BoletoPaymentMethod,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PixTransaction {
    #[serde(flatten)]
    pub summary: TransactionSummary,
    pub payment_method: PixPaymentMethod,
    pub pix_qrcode_url: Option<String>,
    pub qrcode_link: Option<String>,
    #[serde(default)]
    pub existing_transaction: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreditInstallmentPlan {
    pub number_installments: String,
    pub mode: InstallmentMode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PaymentAuthorization {
    pub authorizer_id: String,
    pub authorization_code: String,
    pub authorization_nsu: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    PreAuthorized,
    Succeeded,
    Failed,
    Canceled,
    Reversed,
    Refunded,
    Pending,
    New,
    PartialRefunded,
    Dispute,
    ChargedBack,
}

/// Fee charged on a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Fee {
    pub amount: String,
    #[serde(default)]
    pub prepaid: bool,
    pub currency: String,
    #[serde(rename = "type")]
    pub fee_type: String,
    #[serde(default)]
    pub is_gateway_fee: bool,
    pub description: Option<String>,
}

/// Operation recorded in the history of a transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct History {
    pub id: String,
    pub transaction: String,
    pub amount: String,
    pub operation_type: OperationType,
    pub status: HistoryStatus,
    pub response_code: Option<String>,
    pub response_message: Option<String>,
    pub authorization_code: Option<String>,
    pub authorizer_id: Option<String>,
    pub authorization_nsu: Option<String>,
    #[serde(rename = "gatewayResponseTime")]
    pub gateway_response_time: Option<String>,
    pub authorizer: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Created,
    PreAuthorization,
    Paid,
    Canceled,
    Capture,
    Void,
    VoidPartial,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    Succeeded,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardPaymentMethod {
    pub id: String,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub fingerprint: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
    pub uri: Option<String>,
    pub card_brand: String,
    pub first4_digits: String,
    pub last4_digits: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub holder_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub is_verified: bool,
    pub verification_checklist: Option<serde_json::Value>,
    pub amount: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoletoPaymentMethod {
    pub id: String,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
    pub url: String,
    pub reference_number: Option<String>,
    pub document_number: Option<String>,
    pub expiration_date: Option<String>,
    pub payment_limit_date: Option<String>,
    pub recipient: Option<String>,
    pub bank_code: Option<String>,
    pub sequence: Option<String>,
    pub barcode: String,
    pub status: BoletoStatus,
    pub accepted: Option<bool>,
    pub printed: Option<bool>,
    pub downloaded: Option<bool>,
    pub paid_at: Option<String>,
    pub billing_instructions: Option<serde_json::Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BoletoStatus {
    Paid,
    NotPaid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PixPaymentMethod {
    pub id: String,
    pub provider: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub pix_type: Option<String>,
    #[serde(default)]
    pub reusable: bool,
    #[serde(default)]
    pub allow_update: bool,
    pub expiration_date: Option<String>,
    pub key: Option<PixKey>,
    pub pix_link: Option<String>,
    pub qr_code: Option<PixQrCode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PixKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PixQrCode {
    pub emv: String,
}

/// Query parameters of the transactions list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(strip_option))]
pub struct TransactionListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Only transactions created at or after this unix timestamp.
    #[serde(rename = "data_range[gte]", skip_serializing_if = "Option::is_none")]
    pub date_range_gte: Option<i64>,
    /// Only transactions created at or before this unix timestamp.
    #[serde(rename = "data_range[lte]", skip_serializing_if = "Option::is_none")]
    pub date_range_lte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Credit,
    Debit,
    Boleto,
    Pix,
}

/// Notification sent by IoPay to the seller's webhook URL.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct WebhookEvent {
    pub id: String,
    pub reference_id: String,
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WebhookEventType {
    #[serde(rename = "transaction.created")]
    TransactionCreated,
    #[serde(rename = "transaction.canceled")]
    TransactionCanceled,
    #[serde(rename = "transaction.capture.failed")]
    TransactionCaptureFailed,
    #[serde(rename = "transaction.capture.succeeded")]
    TransactionCaptureSucceeded,
    #[serde(rename = "transaction.charged_back")]
    TransactionChargedBack,
    #[serde(rename = "transaction.commission.succeeded")]
    TransactionCommissionSucceeded,
    #[serde(rename = "transaction.disputed")]
    TransactionDisputed,
    #[serde(rename = "transaction.dispute.succeeded")]
    TransactionDisputeSucceeded,
    #[serde(rename = "transaction.pre_authorization.failed")]
    TransactionPreAuthorizationFailed,
    #[serde(rename = "transaction.pre_authorization.succeeded")]
    TransactionPreAuthorizationSucceeded,
    #[serde(rename = "transaction.pre_authorized")]
    TransactionPreAuthorized,
    #[serde(rename = "transaction.reversed")]
    TransactionReversed,
    #[serde(rename = "transaction.succeeded")]
    TransactionSucceeded,
    #[serde(rename = "transaction.updated")]
    TransactionUpdated,
    #[serde(rename = "transaction.void.failed")]
    TransactionVoidFailed,
    #[serde(rename = "transaction.void.succeeded")]
    TransactionVoidSucceeded,
    #[serde(rename = "transaction.failed")]
    TransactionFailed,
}

#[derive(Serialize, Debug)]
pub(crate) struct AmountRequest {
    pub amount: u64,
}
