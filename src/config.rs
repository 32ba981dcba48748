use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// How total fish feed is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedModel {
    /// Harvested biomass times the feed conversion ratio.
    #[default]
    ConversionRatio,
    /// Stocked fry times the sum of the per-month feed curve.
    MonthlyCurve,
}

impl FeedModel {
    pub fn name(self) -> &'static str {
        match self {
            Self::ConversionRatio => "conversion_ratio",
            Self::MonthlyCurve => "monthly_curve",
        }
    }
}

impl fmt::Display for FeedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeedModel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conversion_ratio" => Ok(Self::ConversionRatio),
            "monthly_curve" => Ok(Self::MonthlyCurve),
            _ => Err(CalcError::InvalidConfig(format!(
                "Invalid feed_model: '{}'. Must be 'conversion_ratio' or 'monthly_curve'",
                s
            ))),
        }
    }
}

/// Fixed per-cycle costs (S/) added on top of the variable costs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedCosts {
    pub labor: f64,
    pub energy: f64,
    pub irrigation: f64,
}

impl FixedCosts {
    pub fn total(&self) -> f64 {
        self.labor + self.energy + self.irrigation
    }

    fn validate(&self) -> Result<(), CalcError> {
        for (name, value) in [
            ("labor", self.labor),
            ("energy", self.energy),
            ("irrigation", self.irrigation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::InvalidConfig(format!(
                    "{name} cost must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Cost policy for fish production runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishCostConfig {
    /// Share of feed + fry cost charged as overhead (electricity, labour, ...)
    pub overhead_fraction: f64,
    pub feed_model: FeedModel,
    pub fixed: FixedCosts,
}

impl Default for FishCostConfig {
    fn default() -> Self {
        Self {
            overhead_fraction: 0.10,
            feed_model: FeedModel::default(),
            fixed: FixedCosts::default(),
        }
    }
}

impl FishCostConfig {
    pub fn validate(&self) -> Result<(), CalcError> {
        if !(0.0..=1.0).contains(&self.overhead_fraction) {
            return Err(CalcError::InvalidConfig(format!(
                "overhead_fraction must be within [0, 1], got {}",
                self.overhead_fraction
            )));
        }
        self.fixed.validate()
    }
}

/// Cost policy for vegetable production runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VegetableCostConfig {
    /// Scale the per-plant nutrient cost by production_days / 30.
    pub prorate_nutrients: bool,
    pub fixed: FixedCosts,
}

impl VegetableCostConfig {
    pub fn validate(&self) -> Result<(), CalcError> {
        self.fixed.validate()
    }
}
