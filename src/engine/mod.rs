//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is validated
//! - The converter is connected to the port
//! - The key-generation API is exposed

mod lex_order;

pub use lex_order::LexOrder;
