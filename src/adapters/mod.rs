//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! - Converter adapters: Hex256 (base-256, hex symbols)
//! - Python bindings (when enabled)
//!
//! Adapters can be swapped without changing the engine.

pub mod converter;

#[cfg(feature = "python")]
pub mod python;
