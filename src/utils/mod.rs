mod uint256;

pub use uint256::{encode_address, encode_uint256};
