use crate::error::{Error, Result};
use crate::signing::OrderSigner;
use crate::types::ApiCreds;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub const POLY_ADDRESS: &str = "POLY_ADDRESS";
pub const POLY_SIGNATURE: &str = "POLY_SIGNATURE";
pub const POLY_TIMESTAMP: &str = "POLY_TIMESTAMP";
pub const POLY_NONCE: &str = "POLY_NONCE";
pub const POLY_API_KEY: &str = "POLY_API_KEY";
pub const POLY_PASSPHRASE: &str = "POLY_PASSPHRASE";

/// Authentication headers for a single request
///
/// L1 proves control of the wallet and is only used to derive or create API
/// credentials. L2 signs the request itself with the API secret.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthHeaders {
    L1 {
        address: String,
        signature: String,
        timestamp: String,
        nonce: u64,
    },
    L2 {
        address: String,
        signature: String,
        timestamp: String,
        api_key: String,
        passphrase: String,
    },
}

impl AuthHeaders {
    /// Header name/value pairs in wire order
    pub fn to_headers(&self) -> Vec<(&'static str, String)> {
        match self {
            AuthHeaders::L1 {
                address,
                signature,
                timestamp,
                nonce,
            } => vec![
                (POLY_ADDRESS, address.clone()),
                (POLY_SIGNATURE, signature.clone()),
                (POLY_TIMESTAMP, timestamp.clone()),
                (POLY_NONCE, nonce.to_string()),
            ],
            AuthHeaders::L2 {
                address,
                signature,
                timestamp,
                api_key,
                passphrase,
            } => vec![
                (POLY_ADDRESS, address.clone()),
                (POLY_SIGNATURE, signature.clone()),
                (POLY_TIMESTAMP, timestamp.clone()),
                (POLY_API_KEY, api_key.clone()),
                (POLY_PASSPHRASE, passphrase.clone()),
            ],
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            AuthHeaders::L1 { timestamp, .. } | AuthHeaders::L2 { timestamp, .. } => timestamp,
        }
    }

    pub fn signature(&self) -> &str {
        match self {
            AuthHeaders::L1 { signature, .. } | AuthHeaders::L2 { signature, .. } => signature,
        }
    }
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthHeaders::L1 {
                address,
                timestamp,
                nonce,
                ..
            } => f
                .debug_struct("L1")
                .field("address", address)
                .field("timestamp", timestamp)
                .field("nonce", nonce)
                .finish_non_exhaustive(),
            AuthHeaders::L2 {
                address, timestamp, ..
            } => f
                .debug_struct("L2")
                .field("address", address)
                .field("timestamp", timestamp)
                .finish_non_exhaustive(),
        }
    }
}

fn current_timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// Create L1 headers stamped with the current time.
pub fn create_l1_headers(signer: &OrderSigner, chain_id: u64, nonce: u64) -> Result<AuthHeaders> {
    create_l1_headers_at(signer, chain_id, nonce, &current_timestamp())
}

/// Create L1 headers by signing a `ClobAuth` message for `timestamp`.
pub fn create_l1_headers_at(
    signer: &OrderSigner,
    chain_id: u64,
    nonce: u64,
    timestamp: &str,
) -> Result<AuthHeaders> {
    let signature = signer.sign_auth(timestamp, nonce, chain_id)?;

    Ok(AuthHeaders::L1 {
        address: signer.checksum_address().to_string(),
        signature,
        timestamp: timestamp.to_string(),
        nonce,
    })
}

/// Create L2 headers stamped with the current time.
///
/// `body` must be the exact bytes sent on the wire.
pub fn create_l2_headers(
    signer: &OrderSigner,
    creds: &ApiCreds,
    method: &str,
    request_path: &str,
    body: Option<&str>,
) -> Result<AuthHeaders> {
    create_l2_headers_at(
        signer,
        creds,
        method,
        request_path,
        body,
        &current_timestamp(),
    )
}

pub fn create_l2_headers_at(
    signer: &OrderSigner,
    creds: &ApiCreds,
    method: &str,
    request_path: &str,
    body: Option<&str>,
    timestamp: &str,
) -> Result<AuthHeaders> {
    let signature = build_hmac_signature(&creds.api_secret, timestamp, method, request_path, body)?;

    Ok(AuthHeaders::L2 {
        address: signer.checksum_address().to_string(),
        signature,
        timestamp: timestamp.to_string(),
        api_key: creds.api_key.clone(),
        passphrase: creds.api_passphrase.clone(),
    })
}

/// HMAC-SHA256 over `timestamp + method + path [+ body]`, URL-safe base64.
pub fn build_hmac_signature(
    secret: &str,
    timestamp: &str,
    method: &str,
    request_path: &str,
    body: Option<&str>,
) -> Result<String> {
    let mut message = format!("{}{}{}", timestamp, method, request_path);
    if let Some(body) = body {
        message.push_str(body);
    }

    let key = URL_SAFE
        .decode(secret)
        .or_else(|_| STANDARD.decode(secret))
        .map_err(|e| Error::Authentication {
            message: format!("API secret is not valid base64: {}", e),
        })?;

    let mut mac = Hmac::<Sha256>::new_from_slice(&key).map_err(|e| Error::Authentication {
        message: format!("invalid HMAC key: {}", e),
    })?;
    mac.update(message.as_bytes());

    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}
