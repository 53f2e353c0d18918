use crate::error::{Error, Result};
use crate::types::{Side, TickSize};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::{
    MidpointAwayFromZero, ToNegativeInfinity, ToPositiveInfinity, ToZero,
};

/// Fractional digits counted by [`decimal_places`]
const PRECISION_WINDOW: u32 = 12;

/// Fractional digits [`to_wei`] normalises to before scaling
const WEI_NORMALIZE_DP: u32 = 10;

/// Rounding configuration for a specific tick size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub price: u32,
    pub size: u32,
    pub amount: u32,
}

impl TickSize {
    /// Decimal places the exchange accepts for price, size and amount.
    pub fn round_config(&self) -> RoundConfig {
        let (price, size, amount) = match self {
            TickSize::Tenth => (1, 2, 3),
            TickSize::Hundredth => (2, 2, 4),
            TickSize::Thousandth => (3, 2, 5),
            TickSize::TenThousandth => (4, 2, 6),
        };
        RoundConfig {
            price,
            size,
            amount,
        }
    }
}

/// Significant fractional digits of `x`, counted inside a 12-digit window.
pub fn decimal_places(x: Decimal) -> u32 {
    x.round_dp_with_strategy(PRECISION_WINDOW, MidpointAwayFromZero)
        .normalize()
        .scale()
}

/// Floor at `dp` places; unchanged if `x` already fits.
pub fn round_down(x: Decimal, dp: u32) -> Decimal {
    if decimal_places(x) <= dp {
        return x;
    }
    x.round_dp_with_strategy(dp, ToNegativeInfinity)
}

/// Ceil at `dp` places; unchanged if `x` already fits.
pub fn round_up(x: Decimal, dp: u32) -> Decimal {
    if decimal_places(x) <= dp {
        return x;
    }
    x.round_dp_with_strategy(dp, ToPositiveInfinity)
}

/// Round half-up at `dp` places; unchanged if `x` already fits.
pub fn round_normal(x: Decimal, dp: u32) -> Decimal {
    if decimal_places(x) <= dp {
        return x;
    }
    x.round_dp_with_strategy(dp, MidpointAwayFromZero)
}

/// Whether `tick <= price <= 1 - tick`.
pub fn price_valid(price: Decimal, tick_size: TickSize) -> bool {
    let tick = tick_size.as_decimal();
    price >= tick && price <= Decimal::ONE - tick
}

pub fn validate_price(price: Decimal, tick_size: TickSize) -> Result<()> {
    if price_valid(price, tick_size) {
        return Ok(());
    }
    let tick = tick_size.as_decimal();
    Err(Error::InvalidPrice {
        price,
        min: tick,
        max: Decimal::ONE - tick,
    })
}

/// Scale `amount` by `10^decimals` into an integer string.
///
/// The amount is first cut to 10 fractional digits (floored when
/// `round_down`, half-up otherwise), then the digit string is padded or
/// truncated to `decimals` places and stripped of leading zeros.
pub fn to_wei(amount: Decimal, decimals: u32, round_down: bool) -> Result<String> {
    if amount.is_zero() {
        return Ok("0".to_string());
    }
    if amount.is_sign_negative() {
        return Err(Error::InvalidParameter(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }

    let strategy = if round_down { ToZero } else { MidpointAwayFromZero };
    let normalized = amount.round_dp_with_strategy(WEI_NORMALIZE_DP, strategy);
    let text = normalized.to_string();

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let width = decimals as usize;
    let mut digits = String::with_capacity(int_part.len() + width);
    digits.push_str(int_part);
    if frac_part.len() >= width {
        digits.push_str(&frac_part[..width]);
    } else {
        digits.push_str(frac_part);
        digits.extend(std::iter::repeat('0').take(width - frac_part.len()));
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        Ok("0".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Fix amount rounding to ensure proper precision
///
/// Rounds up at `amount + 4` places; if that still leaves more than `amount`
/// places, rounds down to `amount`.
pub fn fix_amount_rounding(mut amt: Decimal, round_config: &RoundConfig) -> Decimal {
    if decimal_places(amt) > round_config.amount {
        amt = round_up(amt, round_config.amount + 4);
        if decimal_places(amt) > round_config.amount {
            amt = round_down(amt, round_config.amount);
        }
    }
    amt
}

/// Maker and taker amounts of a limit order, before scaling.
///
/// The price must lie strictly between 0 and 1.
pub fn limit_order_amounts(
    side: Side,
    size: Decimal,
    price: Decimal,
) -> Result<(Decimal, Decimal)> {
    if price <= Decimal::ZERO || price >= Decimal::ONE {
        return Err(Error::InvalidPrice {
            price,
            min: Decimal::ZERO,
            max: Decimal::ONE,
        });
    }
    let notional = size
        .checked_mul(price)
        .ok_or_else(|| Error::InvalidParameter(format!("{} * {} overflows", size, price)))?;

    Ok(match side {
        Side::Buy => (notional, size),
        Side::Sell => (size, notional),
    })
}

/// Maker and taker amounts of a market order, before scaling.
///
/// `amount` is USDC for BUY and shares for SELL.
pub fn market_order_amounts(
    side: Side,
    amount: Decimal,
    price: Decimal,
    round_config: &RoundConfig,
) -> Result<(Decimal, Decimal)> {
    let price = round_normal(price, round_config.price);
    let maker = round_down(amount, round_config.size);

    let raw_taker = match side {
        Side::Buy => {
            if price.is_zero() {
                return Err(Error::InvalidParameter("price must be non-zero".to_string()));
            }
            maker.checked_div(price).ok_or_else(|| {
                Error::InvalidParameter(format!("{} / {} overflows", maker, price))
            })?
        }
        Side::Sell => maker.checked_mul(price).ok_or_else(|| {
            Error::InvalidParameter(format!("{} * {} overflows", maker, price))
        })?,
    };

    Ok((maker, fix_amount_rounding(raw_taker, round_config)))
}
