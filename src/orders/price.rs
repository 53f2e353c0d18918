use crate::error::{Error, Result};
use crate::types::{OrderType, PriceLevel, Side};
use rust_decimal::Decimal;

/// Price a market order by sweeping the opposing side of the book.
///
/// `levels` are ordered best to worst. They are walked from the worst level
/// inward, accumulating notional (`size * price`) for BUY or size for SELL,
/// and the price of the level at which the sum first covers `amount` is
/// returned. When the book never covers it, FOK fails and every other order
/// type falls back to the best price.
pub fn calculate_market_price(
    levels: &[PriceLevel],
    amount: Decimal,
    side: Side,
    order_type: OrderType,
) -> Result<Decimal> {
    let no_match = || Error::NoMatch {
        side: side.to_string(),
        amount,
    };

    let best = levels.first().ok_or_else(no_match)?;

    let mut sum = Decimal::ZERO;
    let cutoff = levels.iter().rev().find_map(|level| {
        sum += match side {
            Side::Buy => level.size * level.price,
            Side::Sell => level.size,
        };
        (sum >= amount).then_some(level.price)
    });

    match cutoff {
        Some(price) => Ok(price),
        None if order_type == OrderType::Fok => Err(no_match()),
        None => Ok(best.price),
    }
}
