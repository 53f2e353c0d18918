//! # polymarket-order-signer
//!
//! Order construction, signing and request authentication for the Polymarket
//! CLOB (Central Limit Order Book).
//!
//! This library provides:
//! - EIP-712 hashing and secp256k1 signing of exchange orders
//! - L1 (wallet signature) and L2 (HMAC) authentication headers
//! - Decimal rounding that matches the exchange's precision rules
//! - Market order pricing by sweeping the order book
//!
//! The crate performs no network I/O. Market lookups, API-key requests and
//! order submission go through the [`MarketDataSource`], [`AuthTransport`]
//! and [`OrderTransport`] traits, which the caller implements.
//!
//! ## Example
//!
//! ```no_run
//! use polymarket_order_signer::{OrderArgs, OrderBuilder, OrderSigner, Side};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> polymarket_order_signer::Result<()> {
//! let signer = OrderSigner::from_private_key("0x...")?;
//! let builder = OrderBuilder::new(signer, None, None);
//!
//! let args = OrderArgs::new("71321045679252212594626385532706912750332728571942532289631379312455583992563",
//!     Decimal::new(5, 1), Decimal::from(10), Side::Buy);
//! let order = builder.create_order_with(&args, false)?;
//! println!("{}", serde_json::to_string(&order).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod signing;
pub mod types;

mod utils;

// Re-export commonly used types
pub use alloy_primitives::Address;
pub use alloy_signer_local::PrivateKeySigner;
pub use config::ExchangeConfig;
pub use error::{Error, Result};
pub use types::{
    ApiCreds, CreateOrderOptions, MarketOrderArgs, OrderArgs, OrderBookSummary, OrderType,
    PostOrder, PostOrderResponse, PriceLevel, Side, SignatureType, SignedOrder, TickSize,
    TokenId,
};

// Re-export clients and collaborator traits
pub use client::{
    AuthTransport, AuthenticatedClient, MarketDataSource, OrderTransport, TradingClient,
};

// Re-export order builder and signer
pub use auth::AuthHeaders;
pub use orders::OrderBuilder;
pub use signing::OrderSigner;
