//! pk-core: stable foundation for portkin.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + cycle wrap helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PkError, PkResult};
pub use numeric::*;
pub use units::*;
