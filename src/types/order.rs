use super::serde_helpers::{string_as_u64, u64_or_string};
use super::{OrderType, Side, SignatureType, TickSize, TokenId};
use crate::error::{Error, Result};
use crate::signing::to_checksum_address;
use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Limit order intent
#[derive(Debug, Clone)]
pub struct OrderArgs {
    pub token_id: TokenId,
    pub price: Decimal,
    pub size: Decimal,
    pub side: Side,
    pub fee_rate_bps: u32,
    pub nonce: u64,
    /// Unix seconds; 0 means no expiration
    pub expiration: u64,
    pub taker: Address,
}

impl OrderArgs {
    pub fn new(token_id: impl Into<TokenId>, price: Decimal, size: Decimal, side: Side) -> Self {
        Self {
            token_id: token_id.into(),
            price,
            size,
            side,
            fee_rate_bps: 0,
            nonce: 0,
            expiration: 0,
            taker: Address::ZERO,
        }
    }

    pub fn fee_rate_bps(mut self, fee_rate_bps: u32) -> Self {
        self.fee_rate_bps = fee_rate_bps;
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn expiration(mut self, expiration: u64) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn taker(mut self, taker: Address) -> Self {
        self.taker = taker;
        self
    }
}

/// Market order intent
///
/// `amount` is USDC notional for BUY orders and shares for SELL orders.
#[derive(Debug, Clone)]
pub struct MarketOrderArgs {
    pub token_id: TokenId,
    pub amount: Decimal,
    pub side: Side,
    pub order_type: OrderType,
    /// Worst acceptable price; swept from the book when absent
    pub price: Option<Decimal>,
    pub fee_rate_bps: u32,
    pub nonce: u64,
    pub expiration: u64,
    pub taker: Address,
}

impl MarketOrderArgs {
    pub fn new(token_id: impl Into<TokenId>, amount: Decimal, side: Side) -> Self {
        Self {
            token_id: token_id.into(),
            amount,
            side,
            order_type: OrderType::Fok,
            price: None,
            fee_rate_bps: 0,
            nonce: 0,
            expiration: 0,
            taker: Address::ZERO,
        }
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn fee_rate_bps(mut self, fee_rate_bps: u32) -> Self {
        self.fee_rate_bps = fee_rate_bps;
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn expiration(mut self, expiration: u64) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn taker(mut self, taker: Address) -> Self {
        self.taker = taker;
        self
    }
}

/// Per-market values supplied by the caller instead of being looked up
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateOrderOptions {
    pub tick_size: Option<TickSize>,
    pub neg_risk: Option<bool>,
    pub fee_rate_bps: Option<u32>,
}

impl CreateOrderOptions {
    pub fn tick_size(mut self, tick_size: TickSize) -> Self {
        self.tick_size = Some(tick_size);
        self
    }

    pub fn neg_risk(mut self, neg_risk: bool) -> Self {
        self.neg_risk = Some(neg_risk);
        self
    }

    pub fn fee_rate_bps(mut self, fee_rate_bps: u32) -> Self {
        self.fee_rate_bps = Some(fee_rate_bps);
        self
    }
}

/// Unsigned order, field for field the `Order` struct the exchange verifies
#[derive(Debug, Clone, PartialEq)]
pub struct OrderData {
    pub maker: Address,
    pub signer: Address,
    pub taker: Address,
    pub token_id: TokenId,
    /// Integer string scaled by 10^6
    pub maker_amount: String,
    /// Integer string scaled by 10^6
    pub taker_amount: String,
    pub side: Side,
    pub fee_rate_bps: u32,
    pub nonce: u64,
    pub expiration: u64,
    pub signature_type: SignatureType,
}

/// A signed order in the exchange's wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    #[serde(serialize_with = "string_as_u64", deserialize_with = "u64_or_string")]
    pub salt: String,
    pub maker: String,
    pub signer: String,
    pub taker: String,
    pub token_id: String,
    pub maker_amount: String,
    pub taker_amount: String,
    pub side: Side,
    pub expiration: String,
    pub nonce: String,
    pub fee_rate_bps: String,
    pub signature_type: SignatureType,
    pub signature: String,
}

impl SignedOrder {
    pub fn from_order_data(order: &OrderData, salt: String, signature: String) -> Self {
        Self {
            salt,
            maker: to_checksum_address(&order.maker),
            signer: to_checksum_address(&order.signer),
            taker: to_checksum_address(&order.taker),
            token_id: order.token_id.as_str().to_string(),
            maker_amount: order.maker_amount.clone(),
            taker_amount: order.taker_amount.clone(),
            side: order.side,
            expiration: order.expiration.to_string(),
            nonce: order.nonce.to_string(),
            fee_rate_bps: order.fee_rate_bps.to_string(),
            signature_type: order.signature_type,
            signature,
        }
    }
}

/// `POST /order` request envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOrder {
    pub order: SignedOrder,
    /// API key of the order owner
    pub owner: String,
    pub order_type: OrderType,
    pub defer_exec: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
}

impl PostOrder {
    pub fn new(order: SignedOrder, owner: String, order_type: OrderType) -> Self {
        Self {
            order,
            owner,
            order_type,
            defer_exec: false,
            post_only: None,
        }
    }

    /// Mark the order maker-only. Only resting order types may be post-only.
    pub fn post_only(mut self, post_only: bool) -> Result<Self> {
        if post_only && !self.order_type.is_resting() {
            return Err(Error::InvalidOrder(format!(
                "postOnly is only supported for GTC and GTD orders, got {}",
                self.order_type
            )));
        }
        self.post_only = post_only.then_some(true);
        Ok(self)
    }
}

/// Response to `POST /order`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_msg: Option<String>,
    #[serde(default, rename = "orderID")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub making_amount: Option<String>,
    #[serde(default)]
    pub taking_amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub transactions_hashes: Option<Vec<String>>,
}
