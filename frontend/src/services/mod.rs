//! Backend services.
//!
//! # Services
//!
//! - [`intake`] - application submission and status lookup

pub mod intake;

pub use intake::*;
