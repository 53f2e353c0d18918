use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minimum price increment of a market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSize {
    /// 0.1
    Tenth,
    /// 0.01
    Hundredth,
    /// 0.001
    Thousandth,
    /// 0.0001
    TenThousandth,
}

impl TickSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickSize::Tenth => "0.1",
            TickSize::Hundredth => "0.01",
            TickSize::Thousandth => "0.001",
            TickSize::TenThousandth => "0.0001",
        }
    }

    pub fn as_decimal(&self) -> Decimal {
        match self {
            TickSize::Tenth => Decimal::new(1, 1),
            TickSize::Hundredth => Decimal::new(1, 2),
            TickSize::Thousandth => Decimal::new(1, 3),
            TickSize::TenThousandth => Decimal::new(1, 4),
        }
    }
}

impl FromStr for TickSize {
    type Err = Error;

    /// Accepts any decimal spelling of a supported tick, e.g. `"0.010"`.
    fn from_str(s: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedTickSize {
            tick_size: s.to_string(),
        };
        let value = Decimal::from_str(s.trim()).map_err(|_| unsupported())?;

        match value.normalize().to_string().as_str() {
            "0.1" => Ok(TickSize::Tenth),
            "0.01" => Ok(TickSize::Hundredth),
            "0.001" => Ok(TickSize::Thousandth),
            "0.0001" => Ok(TickSize::TenThousandth),
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Display for TickSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TickSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// The API has returned the tick both as a string and as a JSON number.
impl<'de> Deserialize<'de> for TickSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(f64),
        }

        let raw = match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Num(n) => n.to_string(),
        };
        TickSize::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

/// A single price level of the order book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Decimal,
    pub size: Decimal,
}

impl PriceLevel {
    pub fn new(price: Decimal, size: Decimal) -> Self {
        Self { price, size }
    }
}

/// Order book snapshot for one token
///
/// Each side is ordered best to worst.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBookSummary {
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl OrderBookSummary {
    /// The side a taker of `side` consumes: asks for BUY, bids for SELL
    pub fn opposing_levels(&self, side: crate::types::Side) -> &[PriceLevel] {
        match side {
            crate::types::Side::Buy => &self.asks,
            crate::types::Side::Sell => &self.bids,
        }
    }
}

/// `GET /tick-size` response
#[derive(Debug, Clone, Deserialize)]
pub struct TickSizeResponse {
    pub minimum_tick_size: TickSize,
}

/// `GET /neg-risk` response
#[derive(Debug, Clone, Deserialize)]
pub struct NegRiskResponse {
    pub neg_risk: bool,
}

/// `GET /fee-rate` response
#[derive(Debug, Clone, Deserialize)]
pub struct FeeRateResponse {
    #[serde(default)]
    pub base_fee: u32,
}
