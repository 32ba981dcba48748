/// User-entered quantities for one production run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionInput {
    /// Fry or seedlings stocked
    pub count: u64,
    /// S/ per fry or seed
    pub unit_cost: f64,
    /// S/ per kg (fish) or per plant (vegetables)
    pub sale_price: f64,
}
