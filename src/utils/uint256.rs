//! ABI encoding of string-valued integers into 32-byte words.
//!
//! Token ids and wei-scaled amounts routinely exceed `u128`, so decimal
//! strings are converted by long division over their digits rather than by
//! parsing into a native integer first.

use crate::error::{Error, Result};
use alloy_primitives::{Address, B256};

/// Encode an integer string as a big-endian 32-byte word.
///
/// - empty string: zero
/// - `0x`/`0X` prefix: raw big-endian hex bytes, left-padded
/// - all digits: decimal integer
pub fn encode_uint256(value: &str) -> Result<B256> {
    if value.is_empty() {
        return Ok(B256::ZERO);
    }

    if let Some(digits) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        return encode_hex(value, digits);
    }

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidParameter(format!(
            "'{}' is neither a decimal nor a 0x-prefixed hex integer",
            value
        )));
    }

    encode_decimal(value)
}

/// Left-pad a 20-byte address to a 32-byte word.
pub fn encode_address(address: &Address) -> B256 {
    B256::left_padding_from(address.as_slice())
}

fn encode_hex(value: &str, digits: &str) -> Result<B256> {
    if digits.is_empty() {
        return Ok(B256::ZERO);
    }

    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };

    let bytes = hex::decode(&padded)
        .map_err(|e| Error::InvalidParameter(format!("invalid hex integer '{}': {}", value, e)))?;

    let first_significant = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_significant..];
    if significant.len() > 32 {
        return Err(Error::InvalidParameter(format!(
            "hex integer '{}' does not fit in 256 bits",
            value
        )));
    }

    Ok(B256::left_padding_from(significant))
}

// Repeated division of the decimal digit string by 256; each remainder is the
// next least-significant output byte.
fn encode_decimal(value: &str) -> Result<B256> {
    let mut digits: Vec<u8> = value
        .bytes()
        .map(|b| b - b'0')
        .skip_while(|d| *d == 0)
        .collect();

    let mut out = [0u8; 32];
    let mut idx = out.len();

    while !digits.is_empty() {
        if idx == 0 {
            return Err(Error::InvalidParameter(format!(
                "decimal integer '{}' does not fit in 256 bits",
                value
            )));
        }

        let mut remainder: u32 = 0;
        let mut quotient = Vec::with_capacity(digits.len());
        for &digit in &digits {
            let acc = remainder * 10 + u32::from(digit);
            let q = acc / 256;
            if !quotient.is_empty() || q > 0 {
                quotient.push(q as u8);
            }
            remainder = acc % 256;
        }

        idx -= 1;
        out[idx] = remainder as u8;
        digits = quotient;
    }

    Ok(B256::from(out))
}
