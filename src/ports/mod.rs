//! # Ports
//!
//! Trait contracts the engine depends on.
//!
//! There is one port: [`SymbolConverter`], which turns words into integers
//! and back. The engine never parses a word itself; swapping the converter
//! swaps the alphabet and radix without touching the arithmetic.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors a converter reports while decoding a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Value is empty.")]
    Empty,

    /// The word length is not a whole number of fixed-width symbols
    #[error("Invalid value \"{value}\" does not fit the symbol size {size}.")]
    SymbolSize { value: String, size: usize },

    #[error("Invalid value \"{0}\" contains unknown symbols.")]
    UnknownSymbols(String),
}

/// Result type for converter operations
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Converts between words and the non-negative integers they encode
///
/// Implementations must be stateless: the engine shares one converter
/// across every call and every thread.
pub trait SymbolConverter: Send + Sync {
    /// The ordered alphabet. Index 0 is the minimum symbol.
    ///
    /// Read once, when the engine is built. An empty string in a slot
    /// counts as an undefined symbol.
    fn alphabet(&self) -> &[String];

    /// Number of symbols in the alphabet
    fn radix(&self) -> usize {
        self.alphabet().len()
    }

    /// Decode a word to its integer value
    ///
    /// Fails if the word is empty or structurally malformed.
    fn to_integer(&self, word: &str) -> ConvertResult<BigUint>;

    /// Encode an integer as the shortest word representing it
    ///
    /// No padding beyond what the alphabet's structure requires.
    fn from_integer(&self, value: &BigUint) -> String;

    /// Approximate number of symbols in a raw string
    ///
    /// Rounds up for malformed lengths. Only used to compare against the
    /// spread level, so it must be cheap.
    fn symbol_count(&self, value: &str) -> usize;
}
