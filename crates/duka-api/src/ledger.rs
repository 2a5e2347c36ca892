//! # Ledger Client
//!
//! Writing settled sales to the transaction ledger and reading them back.
//!
//! `submit` is the one call in the system with money on the line: the till
//! calls it exactly once per prepared request (the checkout coordinator's
//! `Submitting` state enforces the "once"), and whatever comes back is
//! reported to [`Checkout::resolve`](duka_core::Checkout::resolve).

use tracing::{debug, info};

use duka_core::{Transaction, TransactionReceipt, TransactionRequest};

use crate::config::{build_client, ApiConfig};
use crate::error::ApiResult;
use crate::http;
use crate::session::SessionContext;
use crate::wire::{
    TransactionAck, TransactionBody, TransactionDetailResponse, TransactionsResponse,
};

/// Default page size for history listings.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Client for the transaction ledger endpoints.
pub struct LedgerClient {
    config: ApiConfig,
    client: reqwest::Client,
    session: SessionContext,
}

impl LedgerClient {
    pub fn new(config: ApiConfig, session: SessionContext) -> ApiResult<Self> {
        let client = build_client(&config)?;
        Ok(LedgerClient {
            config,
            client,
            session,
        })
    }

    /// Submits a prepared transaction to the ledger.
    ///
    /// ## Returns
    /// The ledger's receipt; its `change` figure is authoritative and may
    /// differ from any client-side preview.
    pub async fn submit(&self, request: &TransactionRequest) -> ApiResult<TransactionReceipt> {
        let url = self.config.endpoint("/transactions");
        let body = TransactionBody::from(request);

        info!(
            url = %url,
            total = body.total_amount,
            method = ?request.payment_method,
            items = body.items.len(),
            "Submitting transaction"
        );

        let ack: TransactionAck = http::execute(
            self.client
                .post(&url)
                .bearer_auth(&self.session.token)
                .json(&body),
        )
        .await?;

        info!(change = ack.change, code = ?ack.transaction_code, "Transaction committed");
        Ok(ack.into())
    }

    /// Recent settled transactions, newest first.
    pub async fn recent(&self, limit: u32, offset: u32) -> ApiResult<Vec<Transaction>> {
        let url = self.config.endpoint("/transactions");
        debug!(url = %url, limit, offset, "Fetching transaction history");

        let body: TransactionsResponse = http::execute(
            self.client
                .get(&url)
                .query(&[("limit", limit), ("offset", offset)])
                .bearer_auth(&self.session.token),
        )
        .await?;

        Ok(body.transactions.into_iter().map(Into::into).collect())
    }

    /// A single settled transaction, line items included.
    pub async fn by_id(&self, id: i64) -> ApiResult<Transaction> {
        let url = self.config.endpoint(&format!("/transactions/{id}"));
        debug!(url = %url, "Fetching transaction");

        let body: TransactionDetailResponse =
            http::execute(self.client.get(&url).bearer_auth(&self.session.token)).await?;

        Ok(body.transaction.into())
    }
}
