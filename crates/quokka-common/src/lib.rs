//! Common utilities for the Quokka style resolver.
//!
//! This crate provides shared infrastructure used by all resolver components:
//! - **Warning System** - deduplicated colored terminal output for tolerated
//!   bad input (unknown or uncoercible raw properties)
//! - **Seal Discipline** - the freeze primitive enforcing the single-writer /
//!   many-reader immutability contract on props snapshots
//! - **Raw Value Errors** - the typed diagnostic produced when a loosely-typed
//!   raw value cannot be coerced (always recovered from with a default)

pub mod error;
pub mod seal;
pub mod warning;

pub use error::RawValueError;
pub use seal::Seal;
