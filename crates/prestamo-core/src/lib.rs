pub mod error;
pub mod estimator;
pub mod types;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "dominican_id")]
pub mod dominican_id;

pub use error::PrestamoError;
pub use types::*;

/// Standard result type for all prestamo operations
pub type PrestamoResult<T> = Result<T, PrestamoError>;
