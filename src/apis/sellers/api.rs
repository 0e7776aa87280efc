use crate::{
    apis::{
        auth::TokenKind,
        sellers::{
            AssociateBankAccountRequest, AuthorizeSharedCustomersRequest, BankAccount,
            CreateSellerRequest, CreateTransferRequest, DigitalAccountLogin,
            DigitalAccountLoginResponse, DigitalAccountUser, Mcc, RawBankAccount, Seller,
            SellerBalances, SellerBalancesResponse, SellerDeleted, SellerListParams,
            TokenizedBankAccount, UpdateSellerRequest,
        },
        Deleted, IopayClientInner, List,
    },
    Error,
};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// IoPay sellers APIs client.
///
/// Covers sellers themselves along with their digital accounts, shared customers,
/// bank accounts and transfers. Every endpoint uses the standard token.
#[derive(Clone, Debug)]
pub struct SellersApi {
    inner: Arc<IopayClientInner>,
}

impl SellersApi {
    pub(crate) fn new(inner: Arc<IopayClientInner>) -> Self {
        Self { inner }
    }

    async fn send<T, B>(
        &self,
        method: Method,
        prefix: &str,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .inner
            .client(TokenKind::Standard)
            .request(method, self.inner.url(prefix, segments)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let res = request.send().await?.json().await?;
        Ok(res)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        prefix: &str,
        segments: &[&str],
    ) -> Result<T, Error> {
        self.send::<T, ()>(Method::GET, prefix, segments, None)
            .await
    }

    async fn delete_json<T: DeserializeOwned>(
        &self,
        prefix: &str,
        segments: &[&str],
    ) -> Result<T, Error> {
        self.send::<T, ()>(Method::DELETE, prefix, segments, None)
            .await
    }

    /// Creates a new individual or business seller.
    #[tracing::instrument(
        name = "Create Seller",
        skip(self, seller),
        fields(seller_type = seller.path_segment())
    )]
    pub async fn create(&self, seller: &CreateSellerRequest) -> Result<Seller, Error> {
        self.send(
            Method::POST,
            "v1/sellers/create",
            &[seller.path_segment()],
            Some(seller),
        )
        .await
    }

    #[tracing::instrument(name = "Update Seller", skip(self, seller))]
    pub async fn update(
        &self,
        io_seller_id: &str,
        seller: &UpdateSellerRequest,
    ) -> Result<Seller, Error> {
        self.send(
            Method::PATCH,
            "v1/sellers/update",
            &[seller.path_segment(), io_seller_id],
            Some(seller),
        )
        .await
    }

    #[tracing::instrument(name = "Get Seller by ID", skip(self))]
    pub async fn get_by_id(&self, io_seller_id: &str) -> Result<Seller, Error> {
        self.get_json("v1/sellers/get", &[io_seller_id]).await
    }

    /// Looks a seller up by its CPF or CNPJ.
    #[tracing::instrument(name = "Search Seller by Taxpayer ID", skip(self))]
    pub async fn search_by_taxpayer_id(&self, taxpayer_id: &str) -> Result<Seller, Error> {
        self.get_json("v1/sellers/search", &[taxpayer_id]).await
    }

    #[tracing::instrument(name = "List Sellers", skip(self))]
    pub async fn list(&self, params: &SellerListParams) -> Result<List<Seller>, Error> {
        let res = self
            .inner
            .client(TokenKind::Standard)
            .get(self.inner.url("v1/sellers/list", &[])?)
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the merchant category codes accepted when creating sellers.
    #[tracing::instrument(name = "List MCCs", skip(self))]
    pub async fn mcc_list(&self) -> Result<List<Mcc>, Error> {
        self.get_json("v1/sellers/mcc_list", &[]).await
    }

    #[tracing::instrument(name = "Get Seller Balances", skip(self))]
    pub async fn balances(&self, io_seller_id: &str) -> Result<SellerBalances, Error> {
        let res: SellerBalancesResponse = self
            .get_json("v1/sellers/get", &[io_seller_id, "balances"])
            .await?;
        Ok(res.items)
    }

    #[tracing::instrument(name = "Delete Seller", skip(self))]
    pub async fn delete(&self, io_seller_id: &str) -> Result<SellerDeleted, Error> {
        self.delete_json("v1/sellers/delete", &[io_seller_id]).await
    }

    /// Grants a user access to the digital account of a seller.
    #[tracing::instrument(name = "Digital Account Login", skip(self, login))]
    pub async fn digital_account_login(
        &self,
        io_seller_id: &str,
        login: &DigitalAccountLogin,
    ) -> Result<DigitalAccountLoginResponse, Error> {
        self.send(
            Method::POST,
            "v1/sellers/digital_account/login",
            &[io_seller_id],
            Some(login),
        )
        .await
    }

    #[tracing::instrument(name = "List Digital Account Users", skip(self))]
    pub async fn list_digital_account_users(
        &self,
        io_seller_id: &str,
    ) -> Result<List<DigitalAccountUser>, Error> {
        self.get_json("v1/sellers/digital_account/list", &[io_seller_id])
            .await
    }

    #[tracing::instrument(name = "Delete Digital Account User", skip(self))]
    pub async fn delete_digital_account_user(
        &self,
        io_seller_id: &str,
        email: &str,
    ) -> Result<Deleted, Error> {
        self.delete_json("v1/sellers/digital_account/delete", &[io_seller_id, email])
            .await
    }

    /// Lets another seller use the customers of this seller.
    #[tracing::instrument(name = "Authorize Shared Customers", skip(self))]
    pub async fn authorize_shared_customers(
        &self,
        io_seller_id: &str,
        target_io_seller_id: &str,
    ) -> Result<serde_json::Value, Error> {
        self.send(
            Method::POST,
            "v1/sellers/shared_customers/authorize",
            &[io_seller_id],
            Some(&AuthorizeSharedCustomersRequest {
                io_seller_id: target_io_seller_id,
            }),
        )
        .await
    }

    #[tracing::instrument(name = "List Shared Customers", skip(self))]
    pub async fn list_shared_customers(
        &self,
        io_seller_id: &str,
    ) -> Result<serde_json::Value, Error> {
        self.get_json("v1/sellers/shared_customers/list", &[io_seller_id])
            .await
    }

    #[tracing::instrument(name = "Delete Shared Customers", skip(self))]
    pub async fn delete_shared_customers(
        &self,
        io_seller_id: &str,
        target_io_seller_id: &str,
    ) -> Result<serde_json::Value, Error> {
        self.delete_json(
            "v1/sellers/shared_customers/delete",
            &[io_seller_id, target_io_seller_id],
        )
        .await
    }

    /// Exchanges bank account details for a single-use bank account token.
    #[tracing::instrument(name = "Tokenize Bank Account", skip(self, bank_account))]
    pub async fn tokenize_bank_account(
        &self,
        bank_account: &RawBankAccount,
    ) -> Result<TokenizedBankAccount, Error> {
        self.send(
            Method::POST,
            "v1/sellers/bank_accounts/tokenize",
            &[],
            Some(bank_account),
        )
        .await
    }

    #[tracing::instrument(name = "Associate Bank Account", skip(self, token))]
    pub async fn associate_bank_account(
        &self,
        io_seller_id: &str,
        token: &str,
    ) -> Result<BankAccount, Error> {
        self.send(
            Method::POST,
            "v1/sellers/bank_accounts/associate",
            &[io_seller_id],
            Some(&AssociateBankAccountRequest { token }),
        )
        .await
    }

    #[tracing::instrument(name = "List Bank Accounts", skip(self))]
    pub async fn list_bank_accounts(
        &self,
        io_seller_id: &str,
    ) -> Result<List<BankAccount>, Error> {
        self.get_json("v1/sellers/bank_accounts/list", &[io_seller_id])
            .await
    }

    #[tracing::instrument(name = "Get Bank Account", skip(self))]
    pub async fn get_bank_account(
        &self,
        io_seller_id: &str,
        bank_account_id: &str,
    ) -> Result<BankAccount, Error> {
        self.get_json(
            "v1/sellers/bank_accounts/get",
            &[io_seller_id, bank_account_id],
        )
        .await
    }

    #[tracing::instrument(name = "Delete Bank Account", skip(self))]
    pub async fn delete_bank_account(
        &self,
        io_seller_id: &str,
        bank_account_id: &str,
    ) -> Result<Deleted, Error> {
        self.delete_json(
            "v1/sellers/bank_accounts/delete",
            &[io_seller_id, bank_account_id],
        )
        .await
    }

    /// Transfers funds from the balance of a seller to its bank account.
    #[tracing::instrument(name = "Create Transfer", skip(self, transfer))]
    pub async fn create_transfer(
        &self,
        io_seller_id: &str,
        transfer: &CreateTransferRequest,
    ) -> Result<serde_json::Value, Error> {
        self.send(
            Method::POST,
            "v1/sellers/transfers/create",
            &[io_seller_id],
            Some(transfer),
        )
        .await
    }

    #[tracing::instrument(name = "List Transfers", skip(self))]
    pub async fn list_transfers(&self, io_seller_id: &str) -> Result<serde_json::Value, Error> {
        self.get_json("v1/sellers/transfers/list", &[io_seller_id]).await
    }

    #[tracing::instrument(name = "Get Transfer", skip(self))]
    pub async fn get_transfer(
        &self,
        io_seller_id: &str,
        transfer_id: &str,
    ) -> Result<serde_json::Value, Error> {
        self.get_json("v1/sellers/transfers/get", &[io_seller_id, transfer_id])
            .await
    }

    #[tracing::instrument(name = "List Transfer Transactions", skip(self))]
    pub async fn list_transfer_transactions(
        &self,
        io_seller_id: &str,
        transfer_id: &str,
    ) -> Result<serde_json::Value, Error> {
        self.get_json(
            "v1/sellers/transfers/transactions",
            &[io_seller_id, transfer_id],
        )
        .await
    }
}
