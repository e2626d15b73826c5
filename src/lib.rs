//! # lexorder - Order keys you can always insert between
//!
//! Generates **order keys**: strings over a fixed symbol alphabet whose plain
//! string order is the order of the items they label. Give it the keys on
//! either side of a gap and it returns a key that sorts strictly inside the
//! gap. No previously issued key ever has to change.
//!
//! ## Philosophy
//!
//! - **Keys are numbers** - a word is an unbounded-precision integer in the alphabet's radix
//! - **Grow, never wrap** - saturated keys get longer instead of overflowing
//! - **One spelling per position** - trailing zero symbols are always stripped
//! - **Pure core, swappable adapters** - the alphabet lives behind a trait
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        LEXORDER                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure, no I/O)                                         │
//! │    Alphabet, LexOrderConfig, LexOrderError                   │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    SymbolConverter                                           │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                        │
//! │    Converter: Hex256                                         │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    LexOrder - the main entry point                           │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use lexorder::LexOrder;
//!
//! let order = LexOrder::with_defaults()?;
//!
//! // Seed an empty list
//! let first = order.get(None, None)?;
//! assert_eq!(first, "80");
//!
//! // Append, prepend, insert between
//! let after = order.get(Some(&first), None)?;
//! let before = order.get(None, Some(&first))?;
//! let between = order.get(Some(&before), Some(&first))?;
//!
//! assert!(before < between && between < first && first < after);
//! # Ok::<(), lexorder::LexOrderError>(())
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure, no I/O
/// Contains: Alphabet, LexOrderConfig, LexOrderError
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: SymbolConverter trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: converter, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: LexOrder main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{LexOrderConfig, LexOrderError, Result, SymbolLookup, DEFAULT_SPREAD_LEVEL};

// Port traits
pub use crate::ports::{ConvertError, ConvertResult, SymbolConverter};

// Adapters
pub use crate::adapters::converter::Hex256Converter;

// Engine
pub use crate::engine::LexOrder;

// Integer type the converter contract is expressed in
pub use num_bigint::BigUint;
