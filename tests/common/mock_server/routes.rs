use crate::common::mock_server::{MockServerConfiguration, MockServerStorage};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::{Request, Respond, ResponseTemplate};

fn success(payload: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": payload }))
}

/// The API also reports errors on 200 responses, inside the envelope.
fn envelope_error(code: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "error": { "code": code, "message": message }
    }))
}

fn not_found(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({ "message": message }))
}

fn bad_request() -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({ "message": "Malformed body" }))
}

fn body(request: &Request) -> Option<Value> {
    serde_json::from_slice(&request.body).ok()
}

fn last_path_segment(request: &Request) -> String {
    request
        .url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or_default()
        .to_string()
}

fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// POST /auth/login and POST /v1/card/authentication
pub(super) struct Login {
    pub(super) configuration: MockServerConfiguration,
    pub(super) token: String,
}

impl Respond for Login {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = match body(request) {
            Some(body) => body,
            None => return bad_request(),
        };

        if body["secret"] == self.configuration.secret.as_str()
            && body["email"] == self.configuration.email.as_str()
            && body["io_seller_id"] == self.configuration.io_seller_id.as_str()
        {
            success(json!({
                "access_token": self.token,
                "token_type": "bearer",
                "expires_at": Utc::now().timestamp() + 3600
            }))
        } else {
            ResponseTemplate::new(401).set_body_json(json!({
                "error": { "code": "invalid_credentials", "message": "Invalid credentials" }
            }))
        }
    }
}

/// POST /v1/customer/new
pub(super) struct CreateCustomer(pub(super) MockServerStorage);

impl Respond for CreateCustomer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut customer = match body(request) {
            Some(Value::Object(customer)) => customer,
            _ => return bad_request(),
        };

        let id = Uuid::new_v4().to_string();
        customer.insert("id".into(), json!(id));
        customer.insert("status".into(), json!("active"));
        customer.insert("resource".into(), json!("buyer"));
        customer.insert("delinquent".into(), json!(false));
        customer.insert("created_at".into(), json!(Utc::now().to_rfc3339()));
        let customer = Value::Object(customer);

        self.0
            .write()
            .unwrap()
            .customers
            .insert(id, customer.clone());

        success(customer)
    }
}

/// GET /v1/customer/get/{id}
pub(super) struct GetCustomer(pub(super) MockServerStorage);

impl Respond for GetCustomer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_path_segment(request);

        self.0
            .read()
            .unwrap()
            .customers
            .get(&id)
            .map_or_else(|| not_found("Customer not found"), |c| success(c.clone()))
    }
}

/// POST /v1/card/tokenize/token
pub(super) struct TokenizeCard(pub(super) MockServerStorage);

impl Respond for TokenizeCard {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = match body(request) {
            Some(body) => body,
            None => return bad_request(),
        };
        let card_number = match body["card_number"].as_str() {
            Some(number) if number.len() >= 8 => number,
            _ => return envelope_error("invalid_card_number", "Invalid card number"),
        };

        let card = json!({
            "id": Uuid::new_v4().to_string(),
            "resource": "card",
            "holder_name": body["holder_name"],
            "card_brand": "Visa",
            "first4_digits": &card_number[..4],
            "last4_digits": &card_number[card_number.len() - 4..],
            "expiration_month": body["expiration_month"],
            "expiration_year": body["expiration_year"]
        });
        let token = json!({
            "id": Uuid::new_v4().to_string(),
            "resource": "token",
            "used": false,
            "type": "card",
            "card": card
        });

        self.0.write().unwrap().card_tokens.insert(
            token["id"].as_str().unwrap_or_default().to_string(),
            card,
        );

        success(token)
    }
}

/// POST /v1/card/associate_token_with_customer
pub(super) struct AssociateCardToken(pub(super) MockServerStorage);

impl Respond for AssociateCardToken {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = match body(request) {
            Some(body) => body,
            None => return bad_request(),
        };
        let customer_id = body["id_customer"].as_str().unwrap_or_default();
        let token = body["token"].as_str().unwrap_or_default();

        let mut storage = self.0.write().unwrap();
        if !storage.customers.contains_key(customer_id) {
            return not_found("Customer not found");
        }
        let tokenized = match storage.card_tokens.remove(token) {
            Some(card) => card,
            None => return envelope_error("token_used", "Token not found or already used"),
        };

        let card = json!({
            "id_card": tokenized["id"],
            "id_customer": customer_id,
            "holder_name": tokenized["holder_name"],
            "card_brand": tokenized["card_brand"],
            "first4_digits": tokenized["first4_digits"],
            "last4_digits": tokenized["last4_digits"],
            "expiration_month": tokenized["expiration_month"],
            "expiration_year": tokenized["expiration_year"]
        });
        storage
            .cards
            .entry(customer_id.to_string())
            .or_default()
            .push(card.clone());

        success(card)
    }
}

/// GET /v1/card/list/{customer_id}
pub(super) struct ListCards(pub(super) MockServerStorage);

impl Respond for ListCards {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let customer_id = last_path_segment(request);

        let storage = self.0.read().unwrap();
        if !storage.customers.contains_key(&customer_id) {
            return not_found("Customer not found");
        }
        let cards = storage.cards.get(&customer_id).cloned().unwrap_or_default();

        success(json!({
            "id_customer": customer_id,
            "resource": "cards",
            "default_debit": cards.first(),
            "items": cards
        }))
    }
}

/// POST /v1/transaction/new/{customer_id}
pub(super) struct CreateTransaction(pub(super) MockServerStorage);

impl Respond for CreateTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let customer_id = last_path_segment(request);
        let body = match body(request) {
            Some(body) => body,
            None => return bad_request(),
        };
        let amount = match body["amount"].as_u64() {
            Some(amount) => amount,
            None => return bad_request(),
        };

        let mut storage = self.0.write().unwrap();
        if !storage.customers.contains_key(&customer_id) {
            return not_found("Customer not found");
        }

        let id = Uuid::new_v4().to_string();
        let mut transaction = json!({
            "id": id,
            "resource": "transaction",
            "amount": format_amount(amount),
            "original_amount": format_amount(amount),
            "currency": "BRL",
            "description": body["description"],
            "payment_type": body["payment_type"],
            "statement_descriptor": body["statement_descriptor"],
            "customer": customer_id,
            "reference_id": body["reference_id"],
            "refunded": false,
            "voided": false,
            "captured": false,
            "fees": "0.00",
            "fee_details": [],
            "created_at": Utc::now().to_rfc3339()
        });

        match body["payment_type"].as_str() {
            Some("credit") => {
                // Pay with a stored card or consume a card token
                let card = match (body["id_card"].as_str(), body["token"].as_str()) {
                    (Some(id_card), _) => storage
                        .cards
                        .get(&customer_id)
                        .and_then(|cards| cards.iter().find(|c| c["id_card"] == id_card))
                        .map(|c| {
                            let mut card = c.clone();
                            card["id"] = card["id_card"].clone();
                            card
                        }),
                    (None, Some(token)) => storage.card_tokens.remove(token),
                    (None, None) => None,
                };
                let mut card = match card {
                    Some(card) => card,
                    None => return envelope_error("card_not_found", "Card not found"),
                };
                card["resource"] = json!("card");
                card["is_active"] = json!(true);
                card["is_valid"] = json!(true);
                card["is_verified"] = json!(true);

                let captured = body["capture"].as_u64() == Some(1);
                transaction["status"] = json!(if captured {
                    "succeeded"
                } else {
                    "pre_authorized"
                });
                transaction["captured"] = json!(captured);
                transaction["payment_method"] = card;
                transaction["installment_plan"] = json!({
                    "number_installments": body["installment_plan"]["number_installments"]
                        .as_u64()
                        .unwrap_or(1)
                        .to_string(),
                    "mode": "interest_free"
                });
            }
            Some("boleto") => {
                transaction["status"] = json!("pending");
                transaction["payment_method"] = json!({
                    "id": Uuid::new_v4().to_string(),
                    "resource": "boleto",
                    "url": format!("https://boleto.mock/{}", id),
                    "barcode": "23790000000000000000000000000000000000000000",
                    "expiration_date": body["expiration_date"],
                    "status": "not_paid"
                });
            }
            Some("pix") => {
                transaction["status"] = json!("pending");
                transaction["payment_method"] = json!({
                    "id": Uuid::new_v4().to_string(),
                    "provider": "mock",
                    "version": "v2",
                    "type": "dynamic",
                    "reusable": false,
                    "allow_update": false,
                    "key": { "type": "evp", "value": Uuid::new_v4().to_string() },
                    "qr_code": { "emv": format!("00020101021226{}", id) }
                });
                transaction["pix_qrcode_url"] = json!(format!("https://pix.mock/{}.png", id));
                transaction["existing_transaction"] = json!(false);
            }
            _ => return envelope_error("invalid_payment_type", "Invalid payment type"),
        }

        storage.transactions.insert(id, transaction.clone());

        success(transaction)
    }
}

/// GET /v1/transaction/get/{id}
pub(super) struct GetTransaction(pub(super) MockServerStorage);

impl Respond for GetTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_path_segment(request);

        self.0
            .read()
            .unwrap()
            .transactions
            .get(&id)
            .map_or_else(|| not_found("Transaction not found"), |t| success(t.clone()))
    }
}

/// POST /v1/transaction/capture/{id}
pub(super) struct CaptureTransaction(pub(super) MockServerStorage);

impl Respond for CaptureTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_path_segment(request);

        let mut storage = self.0.write().unwrap();
        let transaction = match storage.transactions.get_mut(&id) {
            Some(transaction) => transaction,
            None => return not_found("Transaction not found"),
        };
        if transaction["status"] != "pre_authorized" {
            return envelope_error("invalid_status", "Transaction is not pre-authorized");
        }

        transaction["status"] = json!("succeeded");
        transaction["captured"] = json!(true);

        success(json!([transaction.clone()]))
    }
}

/// POST /v1/transaction/void/{id}
pub(super) struct VoidTransaction(pub(super) MockServerStorage);

impl Respond for VoidTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_path_segment(request);

        let mut storage = self.0.write().unwrap();
        let transaction = match storage.transactions.get_mut(&id) {
            Some(transaction) => transaction,
            None => return not_found("Transaction not found"),
        };
        if transaction["status"] == "canceled" {
            return envelope_error("already_voided", "Transaction already voided");
        }

        transaction["status"] = json!("canceled");
        transaction["voided"] = json!(true);
        transaction["voided_at"] = json!(Utc::now().to_rfc3339());

        success(transaction.clone())
    }
}
