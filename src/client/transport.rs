//! Collaborators the caller provides for network access.
//!
//! Nothing in this crate talks to the network. Implementations wrap their
//! transport failures with [`Error::network`](crate::Error::network); the
//! crate passes them through unchanged and never retries.

use crate::auth::AuthHeaders;
use crate::error::Result;
use crate::types::{ApiCreds, OrderBookSummary, PostOrderResponse, TickSize, TokenId};
use async_trait::async_trait;

/// Per-market lookups used to resolve order fields the caller left out
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// `GET /tick-size`
    async fn tick_size(&self, token_id: &TokenId) -> Result<TickSize>;

    /// `GET /neg-risk`
    async fn neg_risk(&self, token_id: &TokenId) -> Result<bool>;

    /// `GET /fee-rate`, in basis points
    async fn fee_rate_bps(&self, token_id: &TokenId) -> Result<u32>;

    /// `GET /book`
    async fn order_book(&self, token_id: &TokenId) -> Result<OrderBookSummary>;
}

/// API-key endpoints, called with L1 headers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// `GET /auth/derive-api-key`
    async fn derive_api_key(&self, headers: AuthHeaders) -> Result<ApiCreds>;

    /// `POST /auth/api-key`
    async fn create_api_key(&self, headers: AuthHeaders) -> Result<ApiCreds>;
}

/// Order submission, called with L2 headers over the exact `body`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderTransport: Send + Sync {
    async fn post_order(
        &self,
        path: &str,
        body: String,
        headers: AuthHeaders,
    ) -> Result<PostOrderResponse>;

    async fn post_orders(
        &self,
        path: &str,
        body: String,
        headers: AuthHeaders,
    ) -> Result<Vec<PostOrderResponse>>;
}
