//! EIP-712 typed-data hashing for CTF Exchange orders and CLOB auth messages.
//!
//! Every word is laid out by hand: type hash first, then each member encoded
//! to 32 bytes in declaration order. The exchange contract recomputes the same
//! digest on-chain, so field order and padding must not drift.

use crate::error::Result;
use crate::types::OrderData;
use crate::utils::{encode_address, encode_uint256};
use alloy_primitives::{keccak256, Address, B256, U256};

/// Domain name of both CTF Exchange contracts
pub const EXCHANGE_DOMAIN_NAME: &str = "Polymarket CTF Exchange";
pub const EXCHANGE_DOMAIN_VERSION: &str = "1";

/// Domain used only for L1 API-key authentication
pub const AUTH_DOMAIN_NAME: &str = "ClobAuthDomain";
pub const AUTH_DOMAIN_VERSION: &str = "1";

/// Fixed attestation text embedded in every `ClobAuth` message
pub const CLOB_AUTH_MESSAGE: &str = "This message attests that I control the given wallet";

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

const AUTH_DOMAIN_TYPE: &[u8] = b"EIP712Domain(string name,string version,uint256 chainId)";

const ORDER_TYPE: &[u8] = b"Order(uint256 salt,address maker,address signer,address taker,uint256 tokenId,uint256 makerAmount,uint256 takerAmount,uint256 expiration,uint256 nonce,uint256 feeRateBps,uint8 side,uint8 signatureType)";

const CLOB_AUTH_TYPE: &[u8] =
    b"ClobAuth(address address,string timestamp,uint256 nonce,string message)";

/// Domain separator for a contract-bound domain.
pub fn hash_domain(
    name: &str,
    version: &str,
    chain_id: u64,
    verifying_contract: &Address,
) -> B256 {
    let mut encoded = Vec::with_capacity(32 * 5);
    encoded.extend_from_slice(keccak256(DOMAIN_TYPE).as_slice());
    encoded.extend_from_slice(keccak256(name.as_bytes()).as_slice());
    encoded.extend_from_slice(keccak256(version.as_bytes()).as_slice());
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    encoded.extend_from_slice(encode_address(verifying_contract).as_slice());
    keccak256(&encoded)
}

/// Struct hash of an exchange `Order`.
///
/// `salt` and the string-valued amounts go through the arbitrary-precision
/// encoder, so values wider than 64 bits hash correctly.
pub fn hash_order_struct(order: &OrderData, salt: &str) -> Result<B256> {
    let words: [B256; 13] = [
        keccak256(ORDER_TYPE),
        encode_uint256(salt)?,
        encode_address(&order.maker),
        encode_address(&order.signer),
        encode_address(&order.taker),
        encode_uint256(order.token_id.as_str())?,
        encode_uint256(&order.maker_amount)?,
        encode_uint256(&order.taker_amount)?,
        encode_uint256(&order.expiration.to_string())?,
        encode_uint256(&order.nonce.to_string())?,
        encode_uint256(&order.fee_rate_bps.to_string())?,
        small_uint(order.side.as_u8()),
        small_uint(order.signature_type.as_u8()),
    ];

    let mut encoded = Vec::with_capacity(32 * words.len());
    for word in &words {
        encoded.extend_from_slice(word.as_slice());
    }
    Ok(keccak256(&encoded))
}

/// Final digest to sign: `keccak256(0x19 ‖ 0x01 ‖ domain ‖ struct)`.
pub fn encode_eip712(domain_hash: &B256, struct_hash: &B256) -> B256 {
    let mut encoded = Vec::with_capacity(2 + 64);
    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_hash.as_slice());
    encoded.extend_from_slice(struct_hash.as_slice());
    keccak256(&encoded)
}

/// Domain separator of `ClobAuthDomain` (no verifying contract).
pub fn hash_auth_domain(chain_id: u64) -> B256 {
    let mut encoded = Vec::with_capacity(32 * 4);
    encoded.extend_from_slice(keccak256(AUTH_DOMAIN_TYPE).as_slice());
    encoded.extend_from_slice(keccak256(AUTH_DOMAIN_NAME.as_bytes()).as_slice());
    encoded.extend_from_slice(keccak256(AUTH_DOMAIN_VERSION.as_bytes()).as_slice());
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    keccak256(&encoded)
}

/// Struct hash of a `ClobAuth` message. The timestamp is hashed as a string.
pub fn hash_auth_struct(address: &Address, timestamp: &str, nonce: u64) -> B256 {
    let mut encoded = Vec::with_capacity(32 * 5);
    encoded.extend_from_slice(keccak256(CLOB_AUTH_TYPE).as_slice());
    encoded.extend_from_slice(encode_address(address).as_slice());
    encoded.extend_from_slice(keccak256(timestamp.as_bytes()).as_slice());
    encoded.extend_from_slice(&U256::from(nonce).to_be_bytes::<32>());
    encoded.extend_from_slice(keccak256(CLOB_AUTH_MESSAGE.as_bytes()).as_slice());
    keccak256(&encoded)
}

/// Digest a maker signs for `order` on the exchange at `exchange`.
pub fn order_digest(
    order: &OrderData,
    salt: &str,
    exchange: &Address,
    chain_id: u64,
) -> Result<B256> {
    let domain = hash_domain(
        EXCHANGE_DOMAIN_NAME,
        EXCHANGE_DOMAIN_VERSION,
        chain_id,
        exchange,
    );
    let struct_hash = hash_order_struct(order, salt)?;
    Ok(encode_eip712(&domain, &struct_hash))
}

/// Digest signed for L1 authentication headers.
pub fn auth_digest(address: &Address, timestamp: &str, nonce: u64, chain_id: u64) -> B256 {
    encode_eip712(
        &hash_auth_domain(chain_id),
        &hash_auth_struct(address, timestamp, nonce),
    )
}

fn small_uint(value: u8) -> B256 {
    let mut word = B256::ZERO;
    word[31] = value;
    word
}
