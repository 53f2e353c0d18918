mod auth;
mod enums;
mod market;
mod order;
mod primitives;
mod serde_helpers;

// Re-export all types
pub use auth::*;
pub use enums::*;
pub use market::*;
pub use order::*;
pub use primitives::*;
