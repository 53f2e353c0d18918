//! secp256k1 key handling and recoverable signing.

use crate::error::{Error, Result};
use crate::signing::eip712::{auth_digest, order_digest};
use crate::types::{OrderData, SignedOrder};
use alloy_primitives::{keccak256, Address, B256};
use alloy_signer::k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use alloy_signer::k256::elliptic_curve::sec1::ToEncodedPoint;
use alloy_signer::k256::AffinePoint;
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use std::fmt;

/// Holds the private key and signs EIP-712 digests with it.
///
/// The address is derived once at construction. The signer is immutable and
/// `Send + Sync`; share it behind an `Arc` to sign from several threads.
#[derive(Clone)]
pub struct OrderSigner {
    signer: PrivateKeySigner,
    address: Address,
    checksum_address: String,
}

impl OrderSigner {
    /// Parse a 32-byte hex private key, with or without `0x`.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let trimmed = private_key.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 64 {
            return Err(Error::Key(format!(
                "private key must be 32 bytes (64 hex digits), got {} digits",
                digits.len()
            )));
        }

        let bytes = hex::decode(digits)
            .map_err(|e| Error::Key(format!("private key is not valid hex: {}", e)))?;
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|_| Error::Key("private key is not a valid secp256k1 scalar".to_string()))?;

        Ok(Self::from_signing_key(signing_key))
    }

    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = derive_address(signing_key.verifying_key());
        Self {
            checksum_address: to_checksum_address(&address),
            address,
            signer: PrivateKeySigner::from_signing_key(signing_key),
        }
    }

    pub fn new(signer: PrivateKeySigner) -> Self {
        Self::from_signing_key(signer.credential().clone())
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// EIP-55 mixed-case address string
    pub fn checksum_address(&self) -> &str {
        &self.checksum_address
    }

    /// Deterministic (RFC 6979) recoverable signature `r ‖ s ‖ v`, v = recovery id + 27.
    pub fn sign_hash(&self, digest: &B256) -> Result<[u8; 65]> {
        let signature = self.signer.sign_hash_sync(digest)?;
        let mut bytes = signature.as_bytes();
        if bytes[64] < 27 {
            bytes[64] += 27;
        }
        Ok(bytes)
    }

    /// [`sign_hash`](Self::sign_hash) rendered as `0x`-prefixed hex
    pub fn sign_hash_hex(&self, digest: &B256) -> Result<String> {
        Ok(format!("0x{}", hex::encode(self.sign_hash(digest)?)))
    }

    /// Sign `order` for the exchange contract at `exchange`.
    pub fn sign_order(
        &self,
        order: &OrderData,
        salt: String,
        exchange: &Address,
        chain_id: u64,
    ) -> Result<SignedOrder> {
        let digest = order_digest(order, &salt, exchange, chain_id)?;
        let signature = self.sign_hash_hex(&digest)?;
        Ok(SignedOrder::from_order_data(order, salt, signature))
    }

    /// Sign a `ClobAuth` message for L1 authentication.
    pub fn sign_auth(&self, timestamp: &str, nonce: u64, chain_id: u64) -> Result<String> {
        let digest = auth_digest(&self.address, timestamp, nonce, chain_id);
        self.sign_hash_hex(&digest)
    }
}

impl fmt::Debug for OrderSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderSigner")
            .field("address", &self.checksum_address)
            .finish()
    }
}

/// Ethereum address of a public key: last 20 bytes of keccak256 over the
/// uncompressed point without its `0x04` prefix.
pub fn derive_address(public_key: &VerifyingKey) -> Address {
    let affine: &AffinePoint = public_key.as_ref();
    let encoded = affine.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// EIP-55 checksum encoding.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address.as_slice());
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Recover the signer address from a 65-byte `r ‖ s ‖ v` signature.
pub fn recover_address(digest: &B256, signature: &[u8]) -> Result<Address> {
    if signature.len() != 65 {
        return Err(Error::Signing(format!(
            "signature must be 65 bytes, got {}",
            signature.len()
        )));
    }

    let v = signature[64];
    let recovery_id = RecoveryId::from_byte(if v >= 27 { v - 27 } else { v })
        .ok_or_else(|| Error::Signing(format!("invalid recovery byte {}", v)))?;
    let sig = EcdsaSignature::from_slice(&signature[..64])
        .map_err(|e| Error::Signing(format!("malformed signature: {}", e)))?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
        .map_err(|e| Error::Signing(format!("signature recovery failed: {}", e)))?;

    Ok(derive_address(&key))
}

/// [`recover_address`] for a `0x`-prefixed hex signature.
pub fn recover_address_hex(digest: &B256, signature: &str) -> Result<Address> {
    let bytes = hex::decode(signature.trim_start_matches("0x"))
        .map_err(|e| Error::Signing(format!("signature is not valid hex: {}", e)))?;
    recover_address(digest, &bytes)
}
