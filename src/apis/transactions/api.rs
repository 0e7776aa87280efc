use crate::{
    apis::{
        auth::TokenKind,
        transactions::{AmountRequest, CreateTransactionRequest, Transaction, TransactionListParams},
        IopayClientInner, List,
    },
    Error,
};
use std::sync::Arc;

/// IoPay transactions APIs client.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    inner: Arc<IopayClientInner>,
}

impl TransactionsApi {
    pub(crate) fn new(inner: Arc<IopayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new transaction paid by the given customer.
    #[tracing::instrument(name = "Create Transaction", skip(self, transaction))]
    pub async fn create(
        &self,
        customer_id: &str,
        transaction: &CreateTransactionRequest,
    ) -> Result<Transaction, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .post(self.inner.url("v1/transaction/new", &[customer_id])?)
            .json(transaction)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Transaction by ID", skip(self))]
    pub async fn get_by_id(&self, transaction_id: &str) -> Result<Transaction, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .get(self.inner.url("v1/transaction/get", &[transaction_id])?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "List Transactions", skip(self))]
    pub async fn list(&self, params: &TransactionListParams) -> Result<List<Transaction>, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .get(self.inner.url("v1/transaction/list", &[])?)
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Captures a pre-authorized credit transaction, fully or partially.
    ///
    /// `amount` is in cents. IoPay replies with every transaction touched by the capture.
    #[tracing::instrument(name = "Capture Transaction", skip(self))]
    pub async fn capture(
        &self,
        transaction_id: &str,
        amount: u64,
    ) -> Result<Vec<Transaction>, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .post(self.inner.url("v1/transaction/capture", &[transaction_id])?)
            .json(&AmountRequest { amount })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Cancels a transaction, fully or partially. `amount` is in cents.
    #[tracing::instrument(name = "Void Transaction", skip(self))]
    pub async fn void(&self, transaction_id: &str, amount: u64) -> Result<Transaction, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .post(self.inner.url("v1/transaction/void", &[transaction_id])?)
            .json(&AmountRequest { amount })
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
