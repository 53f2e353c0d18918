mod eip712;
mod signer;

pub use eip712::{
    auth_digest, encode_eip712, hash_auth_domain, hash_auth_struct, hash_domain,
    hash_order_struct, order_digest, AUTH_DOMAIN_NAME, AUTH_DOMAIN_VERSION, CLOB_AUTH_MESSAGE,
    EXCHANGE_DOMAIN_NAME, EXCHANGE_DOMAIN_VERSION,
};
pub use signer::{
    derive_address, recover_address, recover_address_hex, to_checksum_address, OrderSigner,
};
