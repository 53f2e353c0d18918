//! Request authentication for the CLOB API.

mod headers;

pub use headers::{
    build_hmac_signature, create_l1_headers, create_l1_headers_at, create_l2_headers,
    create_l2_headers_at, AuthHeaders, POLY_ADDRESS, POLY_API_KEY, POLY_NONCE, POLY_PASSPHRASE,
    POLY_SIGNATURE, POLY_TIMESTAMP,
};
