//! # Converter Adapters
//!
//! Implementations of the [`SymbolConverter`](crate::ports::SymbolConverter) port.
//!
//! Available adapters:
//! - `Hex256Converter` - base-256, two hex characters per symbol (default)

mod hex256;

pub use hex256::Hex256Converter;
