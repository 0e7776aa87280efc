use crate::{
    apis::{
        auth::TokenKind,
        customers::{
            AssociateCardTokenRequest, Card, Customer, CustomerCardList, CustomerDetails,
            CustomerListParams, SetDefaultCardRequest,
        },
        Deleted, IopayClientInner, List,
    },
    Error,
};
use std::sync::Arc;

/// IoPay customers APIs client.
///
/// Customer endpoints use the standard token, card endpoints the special one.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<IopayClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<IopayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new customer.
    #[tracing::instrument(
        name = "Create Customer",
        skip(self, customer),
        fields(customer_type = ?customer.customer_type)
    )]
    pub async fn create(&self, customer: &CustomerDetails) -> Result<Customer, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .post(self.inner.url("v1/customer/new", &[])?)
            .json(customer)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the details of an existing customer.
    #[tracing::instrument(name = "Get Customer by ID", skip(self))]
    pub async fn get_by_id(&self, customer_id: &str) -> Result<Customer, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .get(self.inner.url("v1/customer/get", &[customer_id])?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists customers, one page at a time.
    #[tracing::instrument(name = "List Customers", skip(self))]
    pub async fn list(&self, params: &CustomerListParams) -> Result<List<Customer>, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .get(self.inner.url("v1/customer/list", &[])?)
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Replaces the details of an existing customer.
    #[tracing::instrument(name = "Update Customer", skip(self, customer))]
    pub async fn update(
        &self,
        customer_id: &str,
        customer: &CustomerDetails,
    ) -> Result<Customer, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .post(self.inner.url("v1/customer/update", &[customer_id])?)
            .json(customer)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Associates a card token, obtained from [`TokenizeApi::card`](crate::apis::tokenize::TokenizeApi::card),
    /// with a customer.
    #[tracing::instrument(name = "Associate Card Token", skip(self, card_token))]
    pub async fn associate_card_token(
        &self,
        customer_id: &str,
        card_token: &str,
    ) -> Result<Card, Error> {
        let res = self
            .inner
            .client(TokenKind::Special)
            .post(self.inner.url("v1/card/associate_token_with_customer", &[])?)
            .json(&AssociateCardTokenRequest {
                id_customer: customer_id,
                token: card_token,
            })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the cards of a customer.
    #[tracing::instrument(name = "List Customer Cards", skip(self))]
    pub async fn list_cards(&self, customer_id: &str) -> Result<CustomerCardList, Error> {
        let res = self
            .inner
            .client(TokenKind::Special)
            .get(self.inner.url("v1/card/list", &[customer_id])?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Sets the card used by default for the payments of a customer.
    #[tracing::instrument(name = "Set Default Card", skip(self))]
    pub async fn set_default_card(
        &self,
        customer_id: &str,
        card_id: &str,
    ) -> Result<Customer, Error> {
        let res = self
            .inner
            .client(TokenKind::Special)
            .post(self.inner.url("v1/card/set_default", &[customer_id])?)
            .json(&SetDefaultCardRequest { id_card: card_id })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Deletes one card of a customer.
    #[tracing::instrument(name = "Delete Card", skip(self))]
    pub async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<Deleted, Error> {
        let res = self
            .inner
            .client(TokenKind::Special)
            .delete(self.inner.url("v1/card/delete", &[customer_id, card_id])?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Deletes all the cards of a customer.
    #[tracing::instrument(name = "Delete All Cards", skip(self))]
    pub async fn delete_all_cards(&self, customer_id: &str) -> Result<Deleted, Error> {
        let res = self
            .inner
            .client(TokenKind::Special)
            .delete(self.inner.url("v1/card/delete_all", &[customer_id])?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
