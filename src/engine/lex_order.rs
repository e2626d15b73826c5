//! # LexOrder Engine
//!
//! Derives new order keys from their neighbours.
//!
//! This struct wires together:
//! - A converter (SymbolConverter port)
//! - The alphabet's sentinels and matchers
//! - Configuration
//!
//! Every operation is a pure function of its arguments. The engine holds no
//! mutable state, so one instance can be shared across threads.

use std::cmp::max;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::adapters::converter::Hex256Converter;
use crate::core::{Alphabet, LexOrderConfig, LexOrderError, Result};
use crate::ports::SymbolConverter;

/// The order-key engine
pub struct LexOrder {
    /// Configuration
    config: LexOrderConfig,

    /// Word <-> integer conversion (SymbolConverter port)
    converter: Box<dyn SymbolConverter>,

    /// Sentinels and compiled matchers
    alphabet: Alphabet,
}

impl LexOrder {
    /// Create an engine with the hex converter and the default spread level
    pub fn with_defaults() -> Result<Self> {
        Self::new(LexOrderConfig::default())
    }

    /// Create an engine with the hex converter
    pub fn new(config: LexOrderConfig) -> Result<Self> {
        Self::with_converter(Box::new(Hex256Converter::new()), config)
    }

    /// Create an engine with a custom converter
    pub fn with_converter(
        converter: Box<dyn SymbolConverter>,
        config: LexOrderConfig,
    ) -> Result<Self> {
        if config.spread_level < 1 {
            return Err(LexOrderError::SpreadLevelTooLow);
        }

        let alphabet = Alphabet::from_symbols(converter.alphabet())?;

        debug!(
            radix = alphabet.radix(),
            spread_level = config.spread_level,
            zero = alphabet.zero(),
            first = alphabet.first(),
            median = alphabet.median(),
            last = alphabet.last(),
            "lex order engine ready"
        );

        Ok(Self {
            config,
            converter,
            alphabet,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &LexOrderConfig {
        &self.config
    }

    pub fn spread_level(&self) -> usize {
        self.config.spread_level
    }

    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    pub fn zero(&self) -> &str {
        self.alphabet.zero()
    }

    pub fn first(&self) -> &str {
        self.alphabet.first()
    }

    /// The seed key for an empty collection
    pub fn median(&self) -> &str {
        self.alphabet.median()
    }

    pub fn last(&self) -> &str {
        self.alphabet.last()
    }

    // ========================================================================
    // CANONICALIZATION
    // ========================================================================

    /// Canonicalize a word
    ///
    /// Strips the trailing zero run, then requires what is left to be one or
    /// more known symbols. An all-zero word becomes the empty word.
    pub fn validate(&self, word: &str) -> Result<String> {
        let stripped = self.alphabet.strip_zeros(word);

        if stripped.is_empty() {
            return Ok(String::new());
        }

        if !self.alphabet.is_valid(stripped) {
            return Err(LexOrderError::InvalidArgument(word.to_string()));
        }

        Ok(stripped.to_string())
    }

    /// Validate a word and return the integer it encodes
    ///
    /// The empty word decodes to zero.
    pub fn decode(&self, word: &str) -> Result<BigUint> {
        let word = self.validate(word)?;

        if word.is_empty() {
            return Ok(BigUint::zero());
        }

        Ok(self.converter.to_integer(&word)?)
    }

    /// Render `value` left-padded to `length`, in canonical form
    pub fn encode(&self, value: &BigUint, length: usize) -> String {
        let padded = self.render(value, length);
        self.alphabet.strip_zeros(&padded).to_string()
    }

    /// Render `value` left-padded to `length`, keeping trailing zeros
    fn render(&self, value: &BigUint, length: usize) -> String {
        self.alphabet
            .pad_start(&self.converter.from_integer(value), length)
    }

    // ========================================================================
    // KEY GENERATION
    // ========================================================================

    /// Derive a key from whichever neighbours exist
    ///
    /// | a | b | result |
    /// |---|---|---|
    /// | some | some | `intermediate(a, b)` |
    /// | some | none | `next(a)` |
    /// | none | some | `previous(b)` |
    /// | none | none | the median symbol |
    pub fn get(&self, a: Option<&str>, b: Option<&str>) -> Result<String> {
        match (a, b) {
            (Some(a), Some(b)) => self.intermediate(a, b),
            (Some(a), None) => self.next(a),
            (None, Some(b)) => self.previous(b),
            (None, None) => Ok(self.median().to_string()),
        }
    }

    /// A key strictly between `a` and `b`, in either argument order
    pub fn intermediate(&self, a: &str, b: &str) -> Result<String> {
        let a = self.validate(a)?;
        let b = self.validate(b)?;

        if a == b {
            return Err(LexOrderError::EqualArguments);
        }

        let length = max(a.len(), b.len());
        let zero = self.alphabet.zero();

        let a_value = self
            .converter
            .to_integer(&self.alphabet.pad_end(&a, zero, length))?;
        let b_value = self
            .converter
            .to_integer(&self.alphabet.pad_end(&b, zero, length))?;

        let sum = a_value + b_value;
        let half = &sum / 2u32;

        if (&sum % 2u32).is_zero() {
            return Ok(self.encode(&half, length));
        }

        // Half-integer average: the median symbol stands in for the .5
        let mut result = self.render(&half, length);
        result.push_str(self.median());
        Ok(result)
    }

    /// A key strictly after `word`
    pub fn next(&self, word: &str) -> Result<String> {
        let word = self.validate(word)?;
        let depth = self.converter.symbol_count(&word);
        let spread_level = self.config.spread_level;

        if depth < spread_level || self.alphabet.is_overflow(&word) {
            trace!(word = %word, depth, spread_level, "next: growing instead of incrementing");

            // Fill with zeros to one below the spread level, then step up by one
            let mut result = word;
            for _ in (depth + 1)..spread_level {
                result.push_str(self.alphabet.zero());
            }
            result.push_str(self.alphabet.first());
            return Ok(result);
        }

        let value = self.converter.to_integer(&word)? + BigUint::one();
        Ok(self.encode(&value, word.len()))
    }

    /// A key strictly before `word`
    ///
    /// Fails for the empty word, which nothing sorts before.
    pub fn previous(&self, word: &str) -> Result<String> {
        let original = word;
        let word = self.validate(word)?;

        if self.alphabet.is_underflow(&word) {
            trace!(word = %word, "previous: underflow, growing on the low side");

            let mut result = self.alphabet.pad_start("", word.len());
            result.push_str(self.alphabet.last());
            return Ok(result);
        }

        if word.is_empty() {
            return Err(LexOrderError::InvalidArgument(original.to_string()));
        }

        let depth = self.converter.symbol_count(&word);
        let spread_level = self.config.spread_level;
        let value = self.converter.to_integer(&word)? - BigUint::one();

        if depth < spread_level {
            trace!(word = %word, depth, spread_level, "previous: widening below spread level");

            // Keep the decremented digits as-is and fill up to the spread level
            // with the last symbol, leaving room below for later inserts
            let mut result = self.render(&value, word.len());
            for _ in depth..spread_level {
                result.push_str(self.alphabet.last());
            }
            return Ok(result);
        }

        Ok(self.encode(&value, word.len()))
    }
}

impl std::fmt::Debug for LexOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexOrder")
            .field("config", &self.config)
            .field("alphabet", &self.alphabet)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ports::{ConvertError, ConvertResult};

    /// Single-character octal alphabet with honest arithmetic
    struct OctalConverter {
        symbols: Vec<String>,
    }

    impl OctalConverter {
        fn new(chars: &str) -> Self {
            Self {
                symbols: chars.chars().map(|c| c.to_string()).collect(),
            }
        }
    }

    impl SymbolConverter for OctalConverter {
        fn alphabet(&self) -> &[String] {
            &self.symbols
        }

        fn to_integer(&self, word: &str) -> ConvertResult<BigUint> {
            if word.is_empty() {
                return Err(ConvertError::Empty);
            }
            BigUint::parse_bytes(word.as_bytes(), 8)
                .ok_or_else(|| ConvertError::UnknownSymbols(word.to_string()))
        }

        fn from_integer(&self, value: &BigUint) -> String {
            value.to_str_radix(8)
        }

        fn symbol_count(&self, value: &str) -> usize {
            value.len()
        }
    }

    fn octal(spread_level: usize) -> LexOrder {
        LexOrder::with_converter(
            Box::new(OctalConverter::new("01234567")),
            LexOrderConfig::new(spread_level),
        )
        .unwrap()
    }

    fn hex(spread_level: usize) -> LexOrder {
        LexOrder::new(LexOrderConfig::new(spread_level)).unwrap()
    }

    #[test]
    fn test_create_with_defaults() {
        let engine = LexOrder::with_defaults().unwrap();

        assert_eq!(engine.spread_level(), 2);
        assert_eq!(engine.radix(), 256);
        assert_eq!(engine.zero(), "00");
        assert_eq!(engine.first(), "01");
        assert_eq!(engine.median(), "80");
        assert_eq!(engine.last(), "ff");
    }

    #[test]
    fn test_spread_level_lower_limit() {
        assert!(LexOrder::new(LexOrderConfig::new(1)).is_ok());

        let err = LexOrder::new(LexOrderConfig::new(0)).unwrap_err();
        assert!(matches!(err, LexOrderError::SpreadLevelTooLow));
        assert_eq!(err.to_string(), "The spreadLevel must be at least 1.");
    }

    #[test]
    fn test_symbol_count_lower_limit() {
        let ok = LexOrder::with_converter(
            Box::new(OctalConverter::new("01")),
            LexOrderConfig::default(),
        );
        assert!(ok.is_ok());

        let err = LexOrder::with_converter(
            Box::new(OctalConverter {
                symbols: vec!["one".to_string()],
            }),
            LexOrderConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "There must be at least 2 symbols.");
    }

    #[test]
    fn test_spread_level_checked_before_symbols() {
        let err = LexOrder::with_converter(
            Box::new(OctalConverter::new("0")),
            LexOrderConfig::new(0),
        )
        .unwrap_err();
        assert!(matches!(err, LexOrderError::SpreadLevelTooLow));
    }

    #[test]
    fn test_undefined_symbol_reported() {
        let mut converter = OctalConverter::new("0123");
        converter.symbols[1].clear();

        let err = LexOrder::with_converter(Box::new(converter), LexOrderConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Got undefined when reading symbols[1].");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validate() {
        let engine = octal(2);

        assert_eq!(engine.validate("42").unwrap(), "42");
        assert_eq!(engine.validate("4200").unwrap(), "42");
        assert_eq!(engine.validate("000").unwrap(), "");
        assert_eq!(engine.validate("").unwrap(), "");
    }

    #[test]
    fn test_validate_echoes_original_input() {
        let engine = octal(2);

        let err = engine.validate("4x20").unwrap_err();
        assert_eq!(err.to_string(), "Argument \"4x20\" is invalid.");

        let err = hex(2).validate("abc").unwrap_err();
        assert_eq!(err.to_string(), "Argument \"abc\" is invalid.");
    }

    #[test]
    fn test_decode() {
        let engine = octal(2);

        assert_eq!(engine.decode("42").unwrap(), BigUint::from(34u32));
        assert_eq!(engine.decode("420").unwrap(), BigUint::from(34u32));
        assert_eq!(engine.decode("0").unwrap(), BigUint::zero());
        assert!(matches!(
            engine.decode("4x2"),
            Err(LexOrderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_encode() {
        let engine = octal(2);

        assert_eq!(engine.encode(&BigUint::from(34u32), 2), "42");
        assert_eq!(engine.encode(&BigUint::from(34u32), 3), "042");
        // Trailing zeros never survive
        assert_eq!(engine.encode(&BigUint::from(32u32), 2), "4");
        assert_eq!(engine.encode(&BigUint::zero(), 3), "");
    }

    #[test]
    fn test_get_dispatch() {
        let engine = hex(2);

        assert_eq!(engine.get(None, None).unwrap(), "80");
        assert_eq!(engine.get(Some("dd4b"), Some("dd4c")).unwrap(), "dd4b80");
        assert_eq!(engine.get(Some("ff"), None).unwrap(), "ff01");
        assert_eq!(engine.get(None, Some("01")).unwrap(), "00ff");
    }

    #[test]
    fn test_next_increments() {
        let engine = octal(2);

        assert_eq!(engine.next("51").unwrap(), "52");
        assert_eq!(engine.next("57").unwrap(), "6");
    }

    #[test]
    fn test_next_appends_below_spread_level() {
        assert_eq!(octal(2).next("5").unwrap(), "51");
        assert_eq!(octal(3).next("5").unwrap(), "501");
        assert_eq!(octal(3).next("54").unwrap(), "541");
    }

    #[test]
    fn test_next_appends_on_overflow() {
        let engine = octal(2);

        assert_eq!(engine.next("77").unwrap(), "771");
        assert_eq!(engine.next("777").unwrap(), "7771");
    }

    #[test]
    fn test_previous_decrements() {
        let engine = octal(2);

        assert_eq!(engine.previous("47").unwrap(), "46");
        assert_eq!(engine.previous("41").unwrap(), "4");
    }

    #[test]
    fn test_previous_widens_below_spread_level() {
        assert_eq!(octal(2).previous("5").unwrap(), "47");
        assert_eq!(octal(3).previous("5").unwrap(), "477");
        assert_eq!(octal(3).previous("51").unwrap(), "507");
    }

    #[test]
    fn test_previous_on_underflow() {
        let engine = octal(2);

        assert_eq!(engine.previous("01").unwrap(), "007");
        assert_eq!(engine.previous("1").unwrap(), "07");
    }

    #[test]
    fn test_previous_of_empty_word_fails() {
        let engine = hex(2);

        let err = engine.previous("0000").unwrap_err();
        assert_eq!(err.to_string(), "Argument \"0000\" is invalid.");
    }

    #[test]
    fn test_next_of_empty_word() {
        assert_eq!(hex(2).next("").unwrap(), "0001");
        assert_eq!(hex(1).next("00").unwrap(), "01");
    }

    #[test]
    fn test_intermediate_with_empty_word() {
        let engine = hex(2);

        // 0x00 + 0x01 is odd: floor is 00, plus the median
        assert_eq!(engine.intermediate("", "01").unwrap(), "0080");
    }

    #[test]
    fn test_intermediate_equal_arguments() {
        let engine = hex(2);

        let err = engine.intermediate("42", "42").unwrap_err();
        assert!(matches!(err, LexOrderError::EqualArguments));
        assert_eq!(err.to_string(), "Both arguments are equal.");

        // Equal after canonicalization
        assert!(matches!(
            engine.intermediate("42", "4200"),
            Err(LexOrderError::EqualArguments)
        ));
    }

    #[test]
    fn test_intermediate_rejects_invalid_arguments() {
        let engine = hex(2);

        let err = engine.intermediate("42", "4g").unwrap_err();
        assert_eq!(err.to_string(), "Argument \"4g\" is invalid.");
    }
}
