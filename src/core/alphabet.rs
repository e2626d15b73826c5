//! # Alphabet
//!
//! The sentinel symbols an engine needs, plus three structural matchers
//! compiled once from the converter's alphabet:
//!
//! ```text
//! valid      ^(?:s0|s1|...|sN)+$      one or more known symbols
//! overflow   ^(?:last)+$              numerically saturated high
//! underflow  ^(?:zero)*first$         smallest non-zero value for its length
//! ```
//!
//! Symbols may be longer than one character, so every symbol is escaped
//! before it goes into a pattern.

use regex::Regex;
use tracing::warn;

use super::error::{LexOrderError, Result, SymbolLookup};

/// Sentinel symbols and compiled matchers for one alphabet
#[derive(Debug, Clone)]
pub struct Alphabet {
    zero: String,
    first: String,
    median: String,
    last: String,
    radix: usize,
    valid: Regex,
    overflow: Regex,
    underflow: Regex,
}

impl Alphabet {
    /// Derive sentinels and compile matchers from an ordered symbol list
    ///
    /// An empty slot is treated as undefined.
    pub fn from_symbols(symbols: &[String]) -> Result<Self> {
        let radix = symbols.len();
        if radix < 2 {
            return Err(LexOrderError::TooFewSymbols);
        }

        let lookup = |index: usize, what: SymbolLookup| -> Result<String> {
            symbols
                .get(index)
                .filter(|s| !s.is_empty())
                .cloned()
                .ok_or(LexOrderError::UndefinedSymbol(what))
        };

        let zero = lookup(0, SymbolLookup::Zero)?;
        let first = lookup(1, SymbolLookup::First)?;
        // round(n / 2), halves up
        let median = lookup(radix.div_ceil(2), SymbolLookup::Median)?;
        let last = lookup(radix - 1, SymbolLookup::Last)?;

        let mut alternatives: Vec<&str> = symbols
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();
        if alternatives.len() != radix {
            warn!(
                radix,
                defined = alternatives.len(),
                "alphabet has undefined symbols; they will never validate"
            );
        }
        // Longest first so a short symbol never shadows a longer one sharing its prefix
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()));

        let escaped: Vec<String> = alternatives.iter().map(|s| regex::escape(s)).collect();
        let valid = Regex::new(&format!("^(?:{})+$", escaped.join("|")))?;
        let overflow = Regex::new(&format!("^(?:{})+$", regex::escape(&last)))?;
        let underflow = Regex::new(&format!(
            "^(?:{})*{}$",
            regex::escape(&zero),
            regex::escape(&first)
        ))?;

        Ok(Self {
            zero,
            first,
            median,
            last,
            radix,
            valid,
            overflow,
            underflow,
        })
    }

    /// Minimum symbol, the identity
    pub fn zero(&self) -> &str {
        &self.zero
    }

    /// Smallest non-zero symbol
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Middle symbol, the seed key
    pub fn median(&self) -> &str {
        &self.median
    }

    /// Maximum symbol
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Number of symbols
    pub fn radix(&self) -> usize {
        self.radix
    }

    /// Whether the word is one or more known symbols
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid.is_match(word)
    }

    /// Whether the word is made only of the last symbol
    pub fn is_overflow(&self, word: &str) -> bool {
        self.overflow.is_match(word)
    }

    /// Whether the word is a zero run followed by exactly the first symbol
    pub fn is_underflow(&self, word: &str) -> bool {
        self.underflow.is_match(word)
    }

    /// Remove any trailing run of the zero symbol
    pub fn strip_zeros<'a>(&self, word: &'a str) -> &'a str {
        let mut rest = word;
        while let Some(stripped) = rest.strip_suffix(self.zero.as_str()) {
            rest = stripped;
        }
        rest
    }

    /// Left-pad with the zero symbol until `word` is at least `length` long
    pub fn pad_start(&self, word: &str, length: usize) -> String {
        let mut padding = String::new();
        while padding.len() + word.len() < length {
            padding.push_str(&self.zero);
        }
        padding.push_str(word);
        padding
    }

    /// Right-pad with `symbol` until `word` is at least `length` long
    pub fn pad_end(&self, word: &str, symbol: &str, length: usize) -> String {
        let mut padded = word.to_string();
        while padded.len() < length {
            padded.push_str(symbol);
        }
        padded
    }
}
