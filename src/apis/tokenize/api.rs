use crate::{
    apis::{
        auth::TokenKind,
        tokenize::{RawCard, TokenizedCard},
        IopayClientInner,
    },
    Error,
};
use std::sync::Arc;

/// IoPay card tokenization APIs client.
#[derive(Clone, Debug)]
pub struct TokenizeApi {
    inner: Arc<IopayClientInner>,
}

impl TokenizeApi {
    pub(crate) fn new(inner: Arc<IopayClientInner>) -> Self {
        Self { inner }
    }

    /// Exchanges raw card data for a single-use card token.
    ///
    /// The token can then be associated with a customer or used to pay for a credit transaction.
    #[tracing::instrument(name = "Tokenize Card", skip(self, card))]
    pub async fn card(&self, card: &RawCard) -> Result<TokenizedCard, Error> {
        let res = self
            .inner
            .client(TokenKind::Special)
            .post(self.inner.url("v1/card/tokenize/token", &[])?)
            .json(card)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
