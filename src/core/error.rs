//! # Errors
//!
//! Everything the engine can fail with.
//!
//! Three families:
//! - Configuration: raised once, at construction
//! - Validation: a malformed word was passed to an operation
//! - Equality: `intermediate` was asked for a midpoint between a key and itself
//!
//! The `Display` strings are part of the public contract.

use std::fmt;

use thiserror::Error;

use crate::ports::ConvertError;

/// Which sentinel lookup came back undefined during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolLookup {
    /// `symbols[0]`, the zero symbol
    Zero,
    /// `symbols[1]`, the first symbol
    First,
    /// `symbols[round(n / 2)]`
    Median,
    /// `symbols[n - 1]`
    Last,
}

impl fmt::Display for SymbolLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolLookup::Zero => write!(f, "reading symbols[0]"),
            SymbolLookup::First => write!(f, "reading symbols[1]"),
            SymbolLookup::Median => write!(f, "calculating median symbol"),
            SymbolLookup::Last => write!(f, "reading last symbol"),
        }
    }
}

/// Errors raised by [`LexOrder`](crate::LexOrder)
#[derive(Debug, Error)]
pub enum LexOrderError {
    #[error("The spreadLevel must be at least 1.")]
    SpreadLevelTooLow,

    #[error("There must be at least 2 symbols.")]
    TooFewSymbols,

    #[error("Got undefined when {0}.")]
    UndefinedSymbol(SymbolLookup),

    /// Carries the word exactly as the caller passed it
    #[error("Argument \"{0}\" is invalid.")]
    InvalidArgument(String),

    #[error("Both arguments are equal.")]
    EqualArguments,

    #[error("Failed to compile symbol matcher: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl LexOrderError {
    /// True for errors that can only come from constructor parameters
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LexOrderError::SpreadLevelTooLow
                | LexOrderError::TooFewSymbols
                | LexOrderError::UndefinedSymbol(_)
                | LexOrderError::InvalidPattern(_)
        )
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, LexOrderError>;
