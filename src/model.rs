use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_polars::PyDataFrame;

use crate::config::{FishCostConfig, FixedCosts, VegetableCostConfig};
use crate::input::ProductionInput;
use crate::report::{self, ProductionReport};
use crate::species::{FishSpecies, VegetableSpecies};
use crate::{fish, vegetable};

/// Result of one calculation, as handed to the Python form UI.
#[pyclass(name = "ProductionReport")]
pub struct PyProductionReport {
    inner: ProductionReport,
}

#[pymethods]
impl PyProductionReport {
    #[getter]
    fn title(&self) -> String {
        self.inner.title.clone()
    }

    /// Ordered mapping of metric label to display string.
    #[getter]
    fn metrics<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for m in &self.inner.metrics {
            dict.set_item(&m.label, &m.display)?;
        }
        Ok(dict)
    }

    /// Ordered mapping of metric label to unrounded value.
    /// Undefined ratios are NaN.
    #[getter]
    fn values<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for m in &self.inner.metrics {
            dict.set_item(&m.label, m.value)?;
        }
        Ok(dict)
    }

    #[getter]
    fn monthly_df(&self) -> PyDataFrame {
        PyDataFrame(self.inner.monthly.frame().clone())
    }

    fn to_html(&self) -> PyResult<String> {
        Ok(report::render_html(&self.inner)?)
    }

    fn to_text(&self) -> PyResult<String> {
        Ok(report::render_text(&self.inner)?)
    }

    fn write_monthly_csv(&self, path: &str) -> PyResult<()> {
        Ok(self.inner.monthly.write_csv(path)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "ProductionReport(title='{}', metrics={}, months={})",
            self.inner.title,
            self.inner.metrics.len(),
            self.inner.monthly.len()
        )
    }
}

// ── Calculations ────────────────────────────────────────────────────────────

/// Fish production costs, revenue and monthly feed table.
///
/// Args:
///     species: "Tilapia" or "Trout"
///     count: Number of fry stocked
///     unit_cost: Cost per fry (S/)
///     sale_price: Sale price per kg (S/)
///     overhead_fraction: Share of feed + fry cost added as overhead (default: 0.10)
///     feed_model: "conversion_ratio" or "monthly_curve" (default: "conversion_ratio")
///     labor, energy, irrigation: Fixed costs per cycle (default: 0.0)
#[pyfunction]
#[pyo3(signature = (
    species,
    count,
    unit_cost,
    sale_price,
    overhead_fraction = 0.10,
    feed_model = "conversion_ratio",
    labor = 0.0,
    energy = 0.0,
    irrigation = 0.0,
))]
#[allow(clippy::too_many_arguments)]
fn calculate_fish_production(
    species: &str,
    count: u64,
    unit_cost: f64,
    sale_price: f64,
    overhead_fraction: f64,
    feed_model: &str,
    labor: f64,
    energy: f64,
    irrigation: f64,
) -> PyResult<PyProductionReport> {
    let config = FishCostConfig {
        overhead_fraction,
        feed_model: feed_model.parse()?,
        fixed: FixedCosts {
            labor,
            energy,
            irrigation,
        },
    };
    let input = ProductionInput {
        count,
        unit_cost,
        sale_price,
    };
    let production = fish::calculate_fish_production_with(species.parse()?, input, &config)?;
    Ok(PyProductionReport {
        inner: production.report()?,
    })
}

/// Vegetable production costs, revenue and monthly water/nutrient table.
///
/// Args:
///     species: "Lettuce" or "Spinach"
///     count: Number of seeds or seedlings
///     unit_cost: Cost per seed (S/)
///     sale_price: Sale price per plant (S/)
///     prorate_nutrients: Scale nutrient cost by production days / 30 (default: False)
///     labor, energy, irrigation: Fixed costs per cycle (default: 0.0)
#[pyfunction]
#[pyo3(signature = (
    species,
    count,
    unit_cost,
    sale_price,
    prorate_nutrients = false,
    labor = 0.0,
    energy = 0.0,
    irrigation = 0.0,
))]
#[allow(clippy::too_many_arguments)]
fn calculate_vegetable_production(
    species: &str,
    count: u64,
    unit_cost: f64,
    sale_price: f64,
    prorate_nutrients: bool,
    labor: f64,
    energy: f64,
    irrigation: f64,
) -> PyResult<PyProductionReport> {
    let config = VegetableCostConfig {
        prorate_nutrients,
        fixed: FixedCosts {
            labor,
            energy,
            irrigation,
        },
    };
    let input = ProductionInput {
        count,
        unit_cost,
        sale_price,
    };
    let production =
        vegetable::calculate_vegetable_production_with(species.parse()?, input, &config)?;
    Ok(PyProductionReport {
        inner: production.report()?,
    })
}

/// Supported species tags for "fish" or "vegetable", in display order.
#[pyfunction]
fn species_names(kind: &str) -> PyResult<Vec<&'static str>> {
    match kind {
        "fish" => Ok(FishSpecies::ALL.iter().map(|s| s.name()).collect()),
        "vegetable" => Ok(VegetableSpecies::ALL.iter().map(|s| s.name()).collect()),
        _ => Err(PyValueError::new_err(format!(
            "Invalid kind: '{}'. Must be 'fish' or 'vegetable'",
            kind
        ))),
    }
}

/// Install a stderr log subscriber, e.g. `init_logging("_core=debug")`.
#[pyfunction]
#[pyo3(signature = (filter = "info"))]
fn init_logging(filter: &str) -> PyResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .map_err(|e| PyValueError::new_err(format!("Invalid log filter: {e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyProductionReport>()?;
    m.add_function(wrap_pyfunction!(calculate_fish_production, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_vegetable_production, m)?)?;
    m.add_function(wrap_pyfunction!(species_names, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
