mod builder;
mod price;
mod rounding;

pub use builder::{OrderBuilder, ResolvedMarket, MAX_SALT};
pub use price::calculate_market_price;
pub use rounding::{
    decimal_places, fix_amount_rounding, limit_order_amounts, market_order_amounts,
    price_valid, round_down, round_normal, round_up, to_wei, validate_price, RoundConfig,
};
