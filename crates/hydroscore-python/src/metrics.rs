use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use hydroscore_core::{EvalError, PerformanceReport, WarmupPolicy, WarmupError};
use crate::convert::contiguous_slice;

create_exception!(
    metrics,
    DimensionMismatchError,
    PyValueError,
    "Observed and simulated series differ in length."
);
create_exception!(
    metrics,
    NoValidDataError,
    PyValueError,
    "No observed value is left after dropping NaNs."
);

fn eval_err(e: EvalError) -> PyErr {
    match e {
        EvalError::DimensionMismatch { .. } => DimensionMismatchError::new_err(e.to_string()),
        EvalError::NoValidData => NoValidDataError::new_err(e.to_string()),
    }
}

fn warmup_err(e: WarmupError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Goodness-of-fit statistics. An undefined statistic is `None`.
#[pyclass(frozen, name = "PerformanceReport")]
pub struct PyPerformanceReport {
    inner: PerformanceReport,
}

#[pymethods]
impl PyPerformanceReport {
    #[getter]
    fn n(&self) -> usize {
        self.inner.n
    }

    #[getter]
    fn nse(&self) -> Option<f64> {
        self.inner.nse.value()
    }

    #[getter]
    fn kge(&self) -> Option<f64> {
        self.inner.kge.value()
    }

    #[getter]
    fn pbias(&self) -> Option<f64> {
        self.inner.pbias.value()
    }

    #[getter]
    fn rmse(&self) -> Option<f64> {
        self.inner.rmse.value()
    }

    #[getter]
    fn rsr(&self) -> Option<f64> {
        self.inner.rsr.value()
    }

    #[getter]
    fn r(&self) -> Option<f64> {
        self.inner.r.value()
    }

    /// Fixed-width text block, `n/a` for undefined statistics.
    fn summary(&self) -> String {
        self.inner.to_string()
    }

    /// `{"n": ..., "NSE": ..., ...}` with `None` for undefined statistics.
    fn as_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("n", self.inner.n)?;
        for (name, stat) in self.inner.iter() {
            dict.set_item(name, stat.value())?;
        }
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        let fields: Vec<String> = self
            .inner
            .iter()
            .map(|(name, stat)| format!("{}={}", name, stat))
            .collect();
        format!("PerformanceReport(n={}, {})", self.inner.n, fields.join(", "))
    }
}

/// Score simulated discharge against observations.
///
/// Raises DimensionMismatchError or NoValidDataError when no score can be computed.
#[pyfunction]
fn evaluate(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<PyPerformanceReport> {
    let obs = contiguous_slice(&observed, "observed")?;
    let sim = contiguous_slice(&simulated, "simulated")?;
    let inner = hydroscore_core::evaluate(obs, sim).map_err(eval_err)?;
    Ok(PyPerformanceReport { inner })
}

/// Cut the warm-up period from a series.
#[pyfunction]
#[pyo3(signature = (series, warmup_steps=365, min_length=730))]
fn trim_warmup<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<'py, f64>,
    warmup_steps: usize,
    min_length: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let policy = WarmupPolicy::new(warmup_steps, min_length).map_err(warmup_err)?;
    let slice = contiguous_slice(&series, "series")?;
    Ok(PyArray1::from_slice(py, policy.trim(slice)))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "metrics")?;
    m.add_class::<PyPerformanceReport>()?;
    m.add_function(wrap_pyfunction!(evaluate, &m)?)?;
    m.add_function(wrap_pyfunction!(trim_warmup, &m)?)?;
    m.add("DimensionMismatchError", py.get_type::<DimensionMismatchError>())?;
    m.add("NoValidDataError", py.get_type::<NoValidDataError>())?;
    parent.add_submodule(&m)?;
    Ok(())
}
