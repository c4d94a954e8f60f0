// src/params.rs
//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de analytics-engine.

use pyo3::prelude::*;

/// Afstembare besturingselementen voor de traversal-primitieven en de
/// propagatielus.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Params {
    /// Frontiers kleiner dan deze drempel worden sequentieel afgehandeld,
    /// ook als de `parallel`-feature aanstaat.
    #[pyo3(get, set)]
    pub min_parallel: usize,
    /// Veiligheidsklep op het aantal propagatierondes; 0 betekent onbegrensd.
    #[pyo3(get, set)]
    pub max_rounds: usize,
}

#[pymethods]
impl Params {
    #[new]
    #[pyo3(signature = (
        min_parallel = 1_024,
        max_rounds = 0,
    ))]
    pub fn new(min_parallel: usize, max_rounds: usize) -> Self {
        Self {
            min_parallel,
            max_rounds,
        }
    }

    /// Methode om een kopie te maken, blootgesteld aan Python.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            min_parallel: 1_024,
            max_rounds: 0,
        }
    }
}

impl Params {
    /// Dwingt volledig sequentiële uitvoering af, handig voor deterministische
    /// vergelijkingen in tests en benchmarks.
    pub fn sequential(&mut self) -> &mut Self {
        self.min_parallel = usize::MAX;
        self
    }
}
