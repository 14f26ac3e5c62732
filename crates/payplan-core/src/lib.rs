pub mod error;
pub mod types;

#[cfg(feature = "payoff")]
pub mod payoff;

pub use error::PayplanError;
pub use types::*;

/// Standard result type for all payplan operations
pub type PayplanResult<T> = Result<T, PayplanError>;
