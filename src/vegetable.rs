use crate::config::VegetableCostConfig;
use crate::error::CalcError;
use crate::input::ProductionInput;
use crate::monthly::MonthlyTable;
use crate::species::{VegetableProfile, VegetableSpecies};

const DAYS_PER_MONTH: f64 = 30.0;

/// Outcome of one vegetable production run. All values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct VegetableProduction {
    pub species: VegetableSpecies,
    pub input: ProductionInput,
    pub config: VegetableCostConfig,
    pub sellable_plants: f64,
    pub water_l: f64,
    pub nutrient_cost: f64,
    pub seed_cost: f64,
    pub fixed_cost: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Vegetable production under the default cost policy.
pub fn calculate_vegetable_production(
    species: &str,
    count: u64,
    unit_cost: f64,
    sale_price: f64,
) -> Result<VegetableProduction, CalcError> {
    let species: VegetableSpecies = species.parse()?;
    calculate_vegetable_production_with(
        species,
        ProductionInput {
            count,
            unit_cost,
            sale_price,
        },
        &VegetableCostConfig::default(),
    )
}

pub fn calculate_vegetable_production_with(
    species: VegetableSpecies,
    input: ProductionInput,
    config: &VegetableCostConfig,
) -> Result<VegetableProduction, CalcError> {
    config.validate()?;
    let p = species.profile();
    let count = input.count as f64;
    let days = p.production_days as f64;

    let sellable_plants = count * (1.0 - p.loss_rate);
    let water_l = count * p.water_l_per_day * days;

    let mut nutrient_cost = count * p.nutrient_cost_per_plant;
    if config.prorate_nutrients {
        nutrient_cost *= days / DAYS_PER_MONTH;
    }
    let seed_cost = count * input.unit_cost;
    let fixed_cost = config.fixed.total();
    let total_cost = nutrient_cost + seed_cost + fixed_cost;

    let revenue = sellable_plants * input.sale_price;
    let profit = revenue - total_cost;

    tracing::debug!(
        species = %species,
        count = input.count,
        water_l,
        total_cost,
        revenue,
        profit,
        "vegetable production calculated"
    );

    Ok(VegetableProduction {
        species,
        input,
        config: *config,
        sellable_plants,
        water_l,
        nutrient_cost,
        seed_cost,
        fixed_cost,
        total_cost,
        revenue,
        profit,
    })
}

impl VegetableProduction {
    pub fn profile(&self) -> &'static VegetableProfile {
        self.species.profile()
    }

    /// Whole months in the cycle, rounded down.
    pub fn production_months(&self) -> u32 {
        self.profile().production_days / DAYS_PER_MONTH as u32
    }

    /// Water and nutrient cost split evenly across the production months.
    pub fn monthly_table(&self) -> Result<MonthlyTable, CalcError> {
        MonthlyTable::even_split(self.production_months(), self.water_l, self.nutrient_cost)
    }

    pub fn return_on_cost(&self) -> Option<f64> {
        (self.total_cost > 0.0).then(|| self.profit / self.total_cost)
    }

    /// Sale price per plant at which profit is zero.
    pub fn break_even_price(&self) -> Option<f64> {
        (self.sellable_plants > 0.0).then(|| self.total_cost / self.sellable_plants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixedCosts;
    use approx::assert_relative_eq;

    #[test]
    fn test_lettuce_reference_run() {
        let r = calculate_vegetable_production("Lettuce", 500, 0.3, 2.0).unwrap();

        assert_relative_eq!(r.seed_cost, 150.0, epsilon = 1e-9);
        assert_relative_eq!(r.nutrient_cost, 100.0, epsilon = 1e-9);
        assert_relative_eq!(r.total_cost, 250.0, epsilon = 1e-9);
        assert_relative_eq!(r.sellable_plants, 475.0, epsilon = 1e-9);
        assert_relative_eq!(r.revenue, 950.0, epsilon = 1e-9);
        assert_relative_eq!(r.profit, 700.0, epsilon = 1e-9);
        // 500 plants * 0.25 L/day * 60 days
        assert_relative_eq!(r.water_l, 7500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_prorated_nutrients() {
        let config = VegetableCostConfig {
            prorate_nutrients: true,
            ..Default::default()
        };
        let input = ProductionInput {
            count: 500,
            unit_cost: 0.3,
            sale_price: 2.0,
        };
        let r = calculate_vegetable_production_with(VegetableSpecies::Spinach, input, &config)
            .unwrap();

        // 500 * 0.25 * 45 / 30
        assert_relative_eq!(r.nutrient_cost, 187.5, epsilon = 1e-9);
        assert_relative_eq!(r.total_cost, 187.5 + 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_costs_added() {
        let config = VegetableCostConfig {
            fixed: FixedCosts {
                labor: 30.0,
                energy: 10.0,
                irrigation: 5.0,
            },
            ..Default::default()
        };
        let input = ProductionInput {
            count: 500,
            unit_cost: 0.3,
            sale_price: 2.0,
        };
        let r = calculate_vegetable_production_with(VegetableSpecies::Lettuce, input, &config)
            .unwrap();
        assert_relative_eq!(r.total_cost, 295.0, epsilon = 1e-9);
        assert_relative_eq!(r.profit, 655.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monthly_breakdown_rows() {
        let lettuce = calculate_vegetable_production("Lettuce", 500, 0.3, 2.0).unwrap();
        let table = lettuce.monthly_table().unwrap();
        assert_eq!(lettuce.production_months(), 2);
        assert_eq!(table.len(), 2);
        let rows = table.rows().unwrap();
        assert_relative_eq!(rows[0].cost, 50.0, epsilon = 1e-9);
        assert_relative_eq!(rows[1].consumption, 3750.0, epsilon = 1e-9);

        // 45 days rounds down to one month
        let spinach = calculate_vegetable_production("Spinach", 100, 0.2, 1.5).unwrap();
        let table = spinach.monthly_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_relative_eq!(table.total_cost().unwrap(), spinach.nutrient_cost, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_species() {
        assert!(matches!(
            calculate_vegetable_production("Tomato", 10, 0.1, 1.0),
            Err(CalcError::InvalidSpecies(_))
        ));
    }

    #[test]
    fn test_break_even_price() {
        let r = calculate_vegetable_production("Lettuce", 500, 0.3, 2.0).unwrap();
        assert_relative_eq!(r.break_even_price().unwrap(), 250.0 / 475.0, epsilon = 1e-12);
        assert_relative_eq!(r.return_on_cost().unwrap(), 2.8, epsilon = 1e-9);

        let empty = calculate_vegetable_production("Lettuce", 0, 0.3, 2.0).unwrap();
        assert_eq!(empty.break_even_price(), None);
        assert_eq!(empty.return_on_cost(), None);
    }
}
