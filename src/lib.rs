// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod atomics;
pub mod components;
pub mod frontier;
pub mod graph;
pub mod maintain;
pub mod params;
pub mod stream;
pub mod traverse;
pub mod triangles;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use frontier::Frontier;
pub use graph::Graph;
pub use params::Params;

use pyo3::prelude::*;
use std::fs::File;
use std::io::BufReader;
use stream::StreamError;

fn open_graph(instance_path: &str) -> PyResult<Graph> {
    let file = File::open(instance_path)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
    Graph::parse_dimacs(BufReader::new(file))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

fn stream_err(e: StreamError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Python-binding voor de componentenkernel met optionele editstroom.
/// Geeft de uiteindelijke labels en het aantal verwerkte edits terug.
#[pyfunction]
#[pyo3(signature = (instance_path, edits_path, py_params))]
fn components_py(
    instance_path: String,
    edits_path: Option<String>,
    py_params: Py<Params>,
) -> PyResult<(Vec<usize>, usize)> {
    let mut graph = open_graph(&instance_path)?;

    let p = Python::with_gil(|py| {
        let p_ref = py_params.borrow(py);
        Params::new(p_ref.min_parallel, p_ref.max_rounds)
    });

    match edits_path {
        None => {
            let state = maintain::cc_from_scratch(&graph, &p);
            Ok((state.labels.to_vec(), 0))
        }
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
            let mut reports = 0usize;
            let state =
                maintain::drive_components(&mut graph, BufReader::new(file), &p, |_labels| {
                    reports += 1;
                })
                .map_err(stream_err)?;
            // De eerste rapportage hoort bij de startrun, niet bij een edit.
            Ok((state.labels.to_vec(), reports.saturating_sub(1)))
        }
    }
}

/// Python-binding voor de driehoekkernel met optionele editstroom.
/// Geeft de per-knoop tellingen, het totaal en het aantal verwerkte edits
/// terug.
#[pyfunction]
#[pyo3(signature = (instance_path, edits_path, py_params))]
fn triangles_py(
    instance_path: String,
    edits_path: Option<String>,
    py_params: Py<Params>,
) -> PyResult<(Vec<i64>, i64, usize)> {
    let mut graph = open_graph(&instance_path)?;

    let p = Python::with_gil(|py| {
        let p_ref = py_params.borrow(py);
        Params::new(p_ref.min_parallel, p_ref.max_rounds)
    });

    match edits_path {
        None => {
            let state = maintain::tri_from_scratch(&graph, &p);
            Ok((state.counts, state.total, 0))
        }
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
            let mut reports = 0usize;
            let state =
                maintain::drive_triangles(&mut graph, BufReader::new(file), &p, |_counts, _t| {
                    reports += 1;
                })
                .map_err(stream_err)?;
            Ok((state.counts, state.total, reports.saturating_sub(1)))
        }
    }
}

/// Helperfunctie om een DIMACS-bestand te parsen en (n, m) terug te geven.
#[pyfunction]
fn parse_dimacs_py(instance_path: String) -> PyResult<(usize, usize)> {
    let graph = open_graph(&instance_path)?;
    Ok((graph.n(), graph.m()))
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Params>()?;
    m.add_function(wrap_pyfunction!(components_py, m)?)?;
    m.add_function(wrap_pyfunction!(triangles_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_dimacs_py, m)?)?;
    Ok(())
}
