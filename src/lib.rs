//! Production cost calculator for aquaponic fish and vegetable crops.
//!
//! The calculators are pure functions over a fixed species table. With the
//! `python` feature the crate builds the `_core` extension module used by the
//! form UI.

pub mod config;
pub mod error;
pub mod fish;
pub mod format;
pub mod input;
pub mod monthly;
pub mod report;
pub mod schema;
pub mod species;
pub mod vegetable;

#[cfg(feature = "python")]
mod model;

pub use config::{FeedModel, FishCostConfig, FixedCosts, VegetableCostConfig};
pub use error::CalcError;
pub use fish::{calculate_fish_production, calculate_fish_production_with, FishProduction};
pub use input::ProductionInput;
pub use monthly::{MonthlyRow, MonthlyTable, TableKind};
pub use report::{render_html, render_text, Metric, ProductionReport};
pub use species::{FishSpecies, VegetableSpecies};
pub use vegetable::{
    calculate_vegetable_production, calculate_vegetable_production_with, VegetableProduction,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Export monthly-table column names as a Python submodule
#[cfg(feature = "python")]
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let columns = PyModule::new(m.py(), "columns")?;
    columns.add("MONTH", schema::monthly::MONTH)?;
    columns.add("FEED_KG", schema::monthly::FEED_KG)?;
    columns.add("FEED_COST", schema::monthly::FEED_COST)?;
    columns.add("WATER_L", schema::monthly::WATER_L)?;
    columns.add("NUTRIENT_COST", schema::monthly::NUTRIENT_COST)?;
    m.add_submodule(&columns)?;
    Ok(())
}

#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    model::register(m)?;
    add_schema_exports(m)?;
    Ok(())
}
