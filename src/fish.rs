use crate::config::{FeedModel, FishCostConfig};
use crate::error::CalcError;
use crate::input::ProductionInput;
use crate::monthly::{CurveSpread, MonthlyTable};
use crate::species::{FishProfile, FishSpecies};

/// Outcome of one fish production run. All values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct FishProduction {
    pub species: FishSpecies,
    pub input: ProductionInput,
    pub config: FishCostConfig,
    pub sellable_fish: f64,
    pub total_weight_kg: f64,
    pub feed_kg: f64,
    pub feed_cost: f64,
    pub fry_cost: f64,
    pub overhead_cost: f64,
    pub fixed_cost: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Fish production under the default cost policy.
pub fn calculate_fish_production(
    species: &str,
    count: u64,
    unit_cost: f64,
    sale_price: f64,
) -> Result<FishProduction, CalcError> {
    let species: FishSpecies = species.parse()?;
    calculate_fish_production_with(
        species,
        ProductionInput {
            count,
            unit_cost,
            sale_price,
        },
        &FishCostConfig::default(),
    )
}

pub fn calculate_fish_production_with(
    species: FishSpecies,
    input: ProductionInput,
    config: &FishCostConfig,
) -> Result<FishProduction, CalcError> {
    config.validate()?;
    let p = species.profile();
    let count = input.count as f64;

    let sellable_fish = count * (1.0 - p.mortality_rate);
    let total_weight_kg = sellable_fish * p.avg_weight_kg;

    let feed_kg = match config.feed_model {
        FeedModel::ConversionRatio => total_weight_kg * p.feed_conversion_ratio,
        FeedModel::MonthlyCurve => p.monthly_feed_kg.iter().map(|kg| count * kg).sum::<f64>(),
    };
    let feed_cost = feed_kg * p.feed_cost_per_kg;
    let fry_cost = count * input.unit_cost;
    let overhead_cost = config.overhead_fraction * (feed_cost + fry_cost);
    let fixed_cost = config.fixed.total();
    let total_cost = feed_cost + fry_cost + overhead_cost + fixed_cost;

    let revenue = total_weight_kg * input.sale_price;
    let profit = revenue - total_cost;

    tracing::debug!(
        species = %species,
        count = input.count,
        feed_model = %config.feed_model,
        feed_kg,
        total_cost,
        revenue,
        profit,
        "fish production calculated"
    );

    Ok(FishProduction {
        species,
        input,
        config: *config,
        sellable_fish,
        total_weight_kg,
        feed_kg,
        feed_cost,
        fry_cost,
        overhead_cost,
        fixed_cost,
        total_cost,
        revenue,
        profit,
    })
}

impl FishProduction {
    pub fn profile(&self) -> &'static FishProfile {
        self.species.profile()
    }

    /// Feed and feed cost per production month.
    ///
    /// Under the conversion-ratio model the aggregate feed is distributed
    /// along the species' feed curve, so the table always sums to `feed_kg`
    /// and `feed_cost`.
    pub fn monthly_table(&self) -> Result<MonthlyTable, CalcError> {
        let p = self.profile();
        let spread = match self.config.feed_model {
            FeedModel::ConversionRatio => CurveSpread::Distribute(self.feed_kg),
            FeedModel::MonthlyCurve => CurveSpread::Scale(self.input.count as f64),
        };
        MonthlyTable::from_feed_curve(p.monthly_feed_kg, spread, p.feed_cost_per_kg)
    }

    /// Profit per sol spent; `None` when nothing was spent.
    pub fn return_on_cost(&self) -> Option<f64> {
        (self.total_cost > 0.0).then(|| self.profit / self.total_cost)
    }

    /// Sale price per kg at which profit is zero.
    pub fn break_even_price(&self) -> Option<f64> {
        (self.total_weight_kg > 0.0).then(|| self.total_cost / self.total_weight_kg)
    }
}
