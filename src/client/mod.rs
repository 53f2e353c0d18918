mod authenticated;
mod trading;
mod transport;

pub use authenticated::AuthenticatedClient;
pub use trading::TradingClient;
pub use transport::{AuthTransport, MarketDataSource, OrderTransport};

#[cfg(test)]
pub use transport::{MockAuthTransport, MockMarketDataSource, MockOrderTransport};
