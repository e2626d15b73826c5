//! # Python Bindings
//!
//! PyO3 bindings for the hex-alphabet engine.
//!
//! ## Python API
//!
//! ```python
//! from lexorder import LexOrder
//!
//! order = LexOrder()              # spread_level=2
//! first = order.get()             # "80"
//! after = order.get(first)        # "8001"
//! before = order.get(None, first) # "7fff"
//! between = order.intermediate(before, first)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{LexOrderConfig, LexOrderError, DEFAULT_SPREAD_LEVEL};
use crate::engine::LexOrder;

fn to_py_err(err: LexOrderError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the engine
#[pyclass(name = "LexOrder")]
pub struct PyLexOrder {
    inner: LexOrder,
}

#[pymethods]
impl PyLexOrder {
    /// Create an engine with the hex alphabet
    ///
    /// Args:
    ///     spread_level: Depth below which keys grow by appending (default: 2)
    #[new]
    #[pyo3(signature = (spread_level = DEFAULT_SPREAD_LEVEL))]
    fn new(spread_level: usize) -> PyResult<Self> {
        let inner = LexOrder::new(LexOrderConfig::new(spread_level)).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Key between, after, or before the given neighbours
    ///
    /// Args:
    ///     a: Key before the new one, or None
    ///     b: Key after the new one, or None
    #[pyo3(signature = (a = None, b = None))]
    fn get(&self, a: Option<&str>, b: Option<&str>) -> PyResult<String> {
        self.inner.get(a, b).map_err(to_py_err)
    }

    fn next(&self, word: &str) -> PyResult<String> {
        self.inner.next(word).map_err(to_py_err)
    }

    fn previous(&self, word: &str) -> PyResult<String> {
        self.inner.previous(word).map_err(to_py_err)
    }

    fn intermediate(&self, a: &str, b: &str) -> PyResult<String> {
        self.inner.intermediate(a, b).map_err(to_py_err)
    }

    /// Canonical form of a word (trailing zero symbols removed)
    fn validate(&self, word: &str) -> PyResult<String> {
        self.inner.validate(word).map_err(to_py_err)
    }

    #[getter]
    fn median(&self) -> String {
        self.inner.median().to_string()
    }

    #[getter]
    fn spread_level(&self) -> usize {
        self.inner.spread_level()
    }

    fn __repr__(&self) -> String {
        format!(
            "LexOrder(radix={}, spread_level={})",
            self.inner.radix(),
            self.inner.spread_level()
        )
    }
}

/// lexorder Python module
#[pymodule]
fn lexorder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLexOrder>()?;

    m.add("__doc__", "Order keys you can always insert between")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
