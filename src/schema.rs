/// Column-name and metric-label constants for aqua-prodcalc.
/// Single source of truth - column names are exported to Python via PyO3.

// ── Monthly table columns ───────────────────────────────────────────────────
pub mod monthly {
    pub const MONTH: &str = "month";

    /// Per-unit curve value, only present while a fish table is being built.
    pub const CURVE: &str = "curve_kg_per_unit";

    pub const FEED_KG: &str = "feed_kg";
    pub const FEED_COST: &str = "feed_cost";

    pub const WATER_L: &str = "water_l";
    pub const NUTRIENT_COST: &str = "nutrient_cost";
}

// ── Human-readable column headers ───────────────────────────────────────────
pub mod header {
    pub const MONTH: &str = "Month";
    pub const FEED_KG: &str = "Feed (kg)";
    pub const FEED_COST: &str = "Monthly Feed Cost (S/)";
    pub const WATER_L: &str = "Water (L)";
    pub const NUTRIENT_COST: &str = "Monthly Nutrient Cost (S/)";
}

// ── Result labels ───────────────────────────────────────────────────────────
pub mod metric {
    pub const SELLABLE_FISH: &str = "Sellable Fish";
    pub const TOTAL_WEIGHT_KG: &str = "Total Sellable Weight (kg)";
    pub const FEED_KG: &str = "Total Feed Consumption (kg)";
    pub const FEED_COST: &str = "Total Feed Cost";
    pub const FRY_COST: &str = "Total Fry Cost";

    pub const SELLABLE_PLANTS: &str = "Sellable Plants";
    pub const WATER_L: &str = "Total Water Consumption (L)";
    pub const NUTRIENT_COST: &str = "Total Nutrient Cost";
    pub const SEED_COST: &str = "Total Seed Cost";

    /// Prefix; the overhead percentage is appended, e.g. "Other Costs (10%)".
    pub const OVERHEAD: &str = "Other Costs";
    pub const FIXED_COSTS: &str = "Fixed Costs";
    pub const TOTAL_COST: &str = "Total Production Cost";
    pub const REVENUE: &str = "Estimated Revenue";
    pub const PROFIT: &str = "Estimated Profit";
    pub const RETURN_ON_COST: &str = "Return on Cost";
    pub const BREAK_EVEN_PER_KG: &str = "Break-even Price per kg";
    pub const BREAK_EVEN_PER_PLANT: &str = "Break-even Price per Plant";
}
