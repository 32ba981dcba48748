use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Closed numeric interval, used for descriptive growing conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Biological and economic constants for one farmed fish species.
#[derive(Debug, PartialEq)]
pub struct FishProfile {
    /// Market weight per fish at harvest (kg)
    pub avg_weight_kg: f64,
    /// Fraction of stocked fry lost before sale (0-1)
    pub mortality_rate: f64,
    /// kg of feed per kg of harvested biomass
    pub feed_conversion_ratio: f64,
    /// S/ per kg of feed
    pub feed_cost_per_kg: f64,
    pub production_months: u32,
    /// Feed per stocked fish for each production month (kg)
    pub monthly_feed_kg: &'static [f64],
}

static TILAPIA: FishProfile = FishProfile {
    avg_weight_kg: 0.52,
    mortality_rate: 0.073,
    feed_conversion_ratio: 1.23,
    feed_cost_per_kg: 6.30,
    production_months: 6,
    monthly_feed_kg: &[0.2, 0.4, 0.6, 0.8, 1.0, 1.2],
};

static TROUT: FishProfile = FishProfile {
    avg_weight_kg: 0.6,
    mortality_rate: 0.15,
    feed_conversion_ratio: 1.4,
    feed_cost_per_kg: 4.00,
    production_months: 8,
    monthly_feed_kg: &[0.3, 0.5, 0.7, 0.9, 1.1, 1.3, 1.5, 1.7],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FishSpecies {
    Tilapia,
    Trout,
}

impl FishSpecies {
    pub const ALL: [FishSpecies; 2] = [FishSpecies::Tilapia, FishSpecies::Trout];

    pub fn profile(self) -> &'static FishProfile {
        match self {
            Self::Tilapia => &TILAPIA,
            Self::Trout => &TROUT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tilapia => "Tilapia",
            Self::Trout => "Trout",
        }
    }
}

impl fmt::Display for FishSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FishSpecies {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.name() == s)
            .ok_or_else(|| {
                tracing::warn!(tag = s, "rejected fish species");
                CalcError::InvalidSpecies(s.to_string())
            })
    }
}

/// Constants for one hydroponic crop. Temperature and pH are descriptive.
#[derive(Debug, PartialEq)]
pub struct VegetableProfile {
    pub production_days: u32,
    /// Fraction of seedlings lost before sale (0-1)
    pub loss_rate: f64,
    /// S/ of nutrient solution per plant over one cycle
    pub nutrient_cost_per_plant: f64,
    /// Litres per plant per day
    pub water_l_per_day: f64,
    pub temperature_c: Range,
    pub ph: Range,
}

static LETTUCE: VegetableProfile = VegetableProfile {
    production_days: 60,
    loss_rate: 0.05,
    nutrient_cost_per_plant: 0.20,
    water_l_per_day: 0.25,
    temperature_c: Range { min: 15.0, max: 20.0 },
    ph: Range { min: 6.0, max: 7.0 },
};

static SPINACH: VegetableProfile = VegetableProfile {
    production_days: 45,
    loss_rate: 0.08,
    nutrient_cost_per_plant: 0.25,
    water_l_per_day: 0.20,
    temperature_c: Range { min: 16.0, max: 24.0 },
    ph: Range { min: 6.0, max: 7.5 },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VegetableSpecies {
    Lettuce,
    Spinach,
}

impl VegetableSpecies {
    pub const ALL: [VegetableSpecies; 2] = [VegetableSpecies::Lettuce, VegetableSpecies::Spinach];

    pub fn profile(self) -> &'static VegetableProfile {
        match self {
            Self::Lettuce => &LETTUCE,
            Self::Spinach => &SPINACH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Lettuce => "Lettuce",
            Self::Spinach => "Spinach",
        }
    }
}

impl fmt::Display for VegetableSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VegetableSpecies {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.name() == s)
            .ok_or_else(|| {
                tracing::warn!(tag = s, "rejected vegetable species");
                CalcError::InvalidSpecies(s.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tags() {
        assert_eq!("Tilapia".parse::<FishSpecies>().unwrap(), FishSpecies::Tilapia);
        assert_eq!("Trout".parse::<FishSpecies>().unwrap(), FishSpecies::Trout);
        assert_eq!(
            "Lettuce".parse::<VegetableSpecies>().unwrap(),
            VegetableSpecies::Lettuce
        );
        assert_eq!(
            "Spinach".parse::<VegetableSpecies>().unwrap(),
            VegetableSpecies::Spinach
        );
    }

    #[test]
    fn test_unknown_tags_are_rejected() {
        for tag in ["Salmon", "tilapia", "", "Lettuce", "Trucha"] {
            let err = tag.parse::<FishSpecies>().unwrap_err();
            assert!(matches!(err, CalcError::InvalidSpecies(ref t) if t == tag));
        }
        for tag in ["Kale", "lettuce", "Tilapia"] {
            assert!(matches!(
                tag.parse::<VegetableSpecies>(),
                Err(CalcError::InvalidSpecies(_))
            ));
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for species in FishSpecies::ALL {
            assert_eq!(species.to_string().parse::<FishSpecies>().unwrap(), species);
        }
        for species in VegetableSpecies::ALL {
            assert_eq!(
                species.to_string().parse::<VegetableSpecies>().unwrap(),
                species
            );
        }
    }

    #[test]
    fn test_feed_curve_covers_every_production_month() {
        for species in FishSpecies::ALL {
            let p = species.profile();
            assert_eq!(p.monthly_feed_kg.len(), p.production_months as usize);
            assert!(p.monthly_feed_kg.iter().all(|&kg| kg > 0.0));
        }
    }

    #[test]
    fn test_loss_rates_are_fractions() {
        for species in FishSpecies::ALL {
            let rate = species.profile().mortality_rate;
            assert!((0.0..=1.0).contains(&rate));
        }
        for species in VegetableSpecies::ALL {
            let p = species.profile();
            assert!((0.0..=1.0).contains(&p.loss_rate));
            assert!(p.temperature_c.min <= p.temperature_c.max);
            assert!(p.ph.contains(6.5));
        }
    }
}
