//! # Hex-256 Converter
//!
//! Base-256 alphabet where each symbol is one byte written as two lowercase
//! hex characters: `00`, `01`, ... `ff`.
//!
//! Because every symbol has the same width and `0-9` sorts before `a-f`,
//! comparing words as plain strings agrees with comparing their values.

use num_bigint::BigUint;

use crate::ports::{ConvertError, ConvertResult, SymbolConverter};

/// Symbols in the alphabet
pub const RADIX: usize = 256;

/// Characters per symbol
pub const SYMBOL_SIZE: usize = 2;

/// Base-256 converter with two-character hex symbols
#[derive(Debug, Clone)]
pub struct Hex256Converter {
    symbols: Vec<String>,
}

impl Hex256Converter {
    /// Create the converter, materializing its 256 symbols
    pub fn new() -> Self {
        let symbols = (0..RADIX).map(|i| format!("{:02x}", i)).collect();
        Self { symbols }
    }
}

impl Default for Hex256Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolConverter for Hex256Converter {
    fn alphabet(&self) -> &[String] {
        &self.symbols
    }

    fn to_integer(&self, word: &str) -> ConvertResult<BigUint> {
        if word.is_empty() {
            return Err(ConvertError::Empty);
        }

        if word.len() % SYMBOL_SIZE != 0 {
            return Err(ConvertError::SymbolSize {
                value: word.to_string(),
                size: SYMBOL_SIZE,
            });
        }

        // parse_bytes tolerates `+` and `_`, which are not symbols here
        if !word.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConvertError::UnknownSymbols(word.to_string()));
        }

        BigUint::parse_bytes(word.as_bytes(), 16)
            .ok_or_else(|| ConvertError::UnknownSymbols(word.to_string()))
    }

    fn from_integer(&self, value: &BigUint) -> String {
        let digits = value.to_str_radix(16);

        // Round up to a whole number of symbols
        let full_length = digits.len().div_ceil(SYMBOL_SIZE) * SYMBOL_SIZE;
        format!("{:0>width$}", digits, width = full_length)
    }

    fn symbol_count(&self, value: &str) -> usize {
        value.len().div_ceil(SYMBOL_SIZE)
    }
}
