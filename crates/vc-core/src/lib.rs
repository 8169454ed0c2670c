//! vc-core: stable foundation for ventctl.
//!
//! Contains:
//! - numeric (Precision + tolerances + float helpers)
//! - units (airway quantity types, SI interop via uom)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::VcError;
pub use numeric::*;
pub use units::*;
