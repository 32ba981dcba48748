use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::CalcError;
use crate::schema::{header, monthly};

/// What a monthly breakdown tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Fish feed: kg and feed cost per month
    Feed,
    /// Vegetables: litres of water and nutrient cost per month
    Nutrient,
}

impl TableKind {
    pub fn consumption_column(self) -> &'static str {
        match self {
            Self::Feed => monthly::FEED_KG,
            Self::Nutrient => monthly::WATER_L,
        }
    }

    pub fn cost_column(self) -> &'static str {
        match self {
            Self::Feed => monthly::FEED_COST,
            Self::Nutrient => monthly::NUTRIENT_COST,
        }
    }

    /// Display headers in column order: month, consumption, cost.
    pub fn headers(self) -> [&'static str; 3] {
        match self {
            Self::Feed => [header::MONTH, header::FEED_KG, header::FEED_COST],
            Self::Nutrient => [header::MONTH, header::WATER_L, header::NUTRIENT_COST],
        }
    }
}

/// How a per-unit feed curve turns into monthly kg.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CurveSpread {
    /// Multiply each month's per-unit amount by the stocked count.
    Scale(f64),
    /// Share a fixed total across months in proportion to the curve.
    Distribute(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRow {
    pub month: u32,
    pub consumption: f64,
    pub cost: f64,
}

/// Month-indexed breakdown backed by a polars DataFrame.
///
/// Columns are always `month` (u32, starting at 1), the kind's consumption
/// column and the kind's cost column, in that order.
#[derive(Debug, Clone)]
pub struct MonthlyTable {
    kind: TableKind,
    frame: DataFrame,
}

impl MonthlyTable {
    pub(crate) fn from_feed_curve(
        curve: &[f64],
        spread: CurveSpread,
        cost_per_kg: f64,
    ) -> Result<Self, CalcError> {
        let months: Vec<u32> = (1..=curve.len() as u32).collect();
        let base = df!(
            monthly::MONTH => months,
            monthly::CURVE => curve.to_vec()
        )?;

        let feed_kg = match spread {
            CurveSpread::Scale(count) => col(monthly::CURVE) * lit(count),
            CurveSpread::Distribute(total) => {
                col(monthly::CURVE) / col(monthly::CURVE).sum() * lit(total)
            }
        };

        let frame = base
            .lazy()
            .with_columns([feed_kg.alias(monthly::FEED_KG)])
            .with_columns([(col(monthly::FEED_KG) * lit(cost_per_kg)).alias(monthly::FEED_COST)])
            .select([
                col(monthly::MONTH),
                col(monthly::FEED_KG),
                col(monthly::FEED_COST),
            ])
            .collect()?;

        Ok(Self {
            kind: TableKind::Feed,
            frame,
        })
    }

    /// Split both totals evenly over `months` rows (at least one).
    pub(crate) fn even_split(
        months: u32,
        consumption_total: f64,
        cost_total: f64,
    ) -> Result<Self, CalcError> {
        let n = months.max(1);
        let base = df!(monthly::MONTH => (1..=n).collect::<Vec<u32>>())?;

        let frame = base
            .lazy()
            .with_columns([
                lit(consumption_total / n as f64).alias(monthly::WATER_L),
                lit(cost_total / n as f64).alias(monthly::NUTRIENT_COST),
            ])
            .collect()?;

        Ok(Self {
            kind: TableKind::Nutrient,
            frame,
        })
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn total_consumption(&self) -> Result<f64, CalcError> {
        self.column_sum(self.kind.consumption_column())
    }

    pub fn total_cost(&self) -> Result<f64, CalcError> {
        self.column_sum(self.kind.cost_column())
    }

    pub fn rows(&self) -> Result<Vec<MonthlyRow>, CalcError> {
        let month = self.frame.column(monthly::MONTH)?.u32()?;
        let consumption = self.frame.column(self.kind.consumption_column())?.f64()?;
        let cost = self.frame.column(self.kind.cost_column())?.f64()?;

        Ok(month
            .into_iter()
            .zip(consumption)
            .zip(cost)
            .map(|((m, c), k)| MonthlyRow {
                month: m.unwrap_or(0),
                consumption: c.unwrap_or(0.0),
                cost: k.unwrap_or(0.0),
            })
            .collect())
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), CalcError> {
        let mut file = File::create(path.as_ref())?;
        let mut frame = self.frame.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut frame)?;
        Ok(())
    }

    fn column_sum(&self, name: &str) -> Result<f64, CalcError> {
        Ok(self.frame.column(name)?.f64()?.sum().unwrap_or(0.0))
    }
}
