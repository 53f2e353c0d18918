use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for order-signing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for order construction, signing and authentication
#[derive(Error, Debug)]
pub enum Error {
    /// Private key material is malformed
    #[error("Key error: {0}")]
    Key(String),

    /// Signing operation failed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Tick size is not one of the supported values
    #[error("Unsupported tick size: {tick_size}")]
    UnsupportedTickSize { tick_size: String },

    /// Price falls outside [tick, 1 - tick]
    #[error("Invalid price ({price}), min: {min} - max: {max}")]
    InvalidPrice {
        price: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// Caller fee rate disagrees with the market's fee rate
    #[error("Invalid fee rate ({provided}), current market's taker fee: {market}")]
    InvalidFeeRate { provided: u32, market: u32 },

    /// The order book cannot fill the requested amount
    #[error("No match: book cannot fill {side} amount {amount}")]
    NoMatch { side: String, amount: Decimal },

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// API credential bootstrap or HMAC keying failed
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// A transport collaborator failed
    #[error("Network error during {operation}: {message}")]
    Network { operation: String, message: String },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid order configuration
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal error: {0}")]
    Decimal(#[from] rust_decimal::Error),
}

impl Error {
    /// Wrap a transport failure for the given collaborator operation
    pub fn network(operation: impl Into<String>, message: impl ToString) -> Self {
        Error::Network {
            operation: operation.into(),
            message: message.to_string(),
        }
    }
}

impl From<alloy_signer::Error> for Error {
    fn from(err: alloy_signer::Error) -> Self {
        Error::Signing(err.to_string())
    }
}
