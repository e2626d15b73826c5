//! # Core
//!
//! Pure domain types, no I/O.
//!
//! - `alphabet` - sentinel symbols and the matchers compiled from them
//! - `config` - engine parameters
//! - `error` - error taxonomy

pub mod alphabet;
pub mod config;
pub mod error;

pub use alphabet::Alphabet;
pub use config::{LexOrderConfig, DEFAULT_SPREAD_LEVEL};
pub use error::{LexOrderError, Result, SymbolLookup};
