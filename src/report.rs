//! Report module: labelled results plus the monthly breakdown.
//!
//! A `ProductionReport` is what the form UI shows after a calculation:
//! an ordered list of metrics, each with its raw value and display string,
//! and the month-by-month table. It renders either as aligned plain text
//! or as a self-contained HTML fragment.
use std::fmt::Write as FmtWrite;

use crate::error::CalcError;
use crate::fish::FishProduction;
use crate::format::{format_currency, format_percent, format_quantity, Precision};
use crate::monthly::MonthlyTable;
use crate::schema::metric;
use crate::vegetable::VegetableProduction;

// ── Report model ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    /// Unrounded value; NaN for ratios that are undefined
    pub value: f64,
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct ProductionReport {
    pub title: String,
    pub metrics: Vec<Metric>,
    pub monthly: MonthlyTable,
}

impl ProductionReport {
    pub fn metric(&self, label: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.label == label)
    }
}

struct MetricsBuilder(Vec<Metric>);

impl MetricsBuilder {
    fn quantity(mut self, label: &str, value: f64, precision: Precision) -> Self {
        self.0.push(Metric {
            label: label.to_string(),
            value,
            display: format_quantity(value, precision),
        });
        self
    }

    fn currency(mut self, label: &str, value: f64) -> Self {
        self.0.push(Metric {
            label: label.to_string(),
            value,
            display: format_currency(value, Precision::Continuous),
        });
        self
    }

    fn fixed_costs(self, value: f64) -> Self {
        if value > 0.0 {
            self.currency(metric::FIXED_COSTS, value)
        } else {
            self
        }
    }

    fn percent(mut self, label: &str, ratio: Option<f64>) -> Self {
        self.0.push(Metric {
            label: label.to_string(),
            value: ratio.unwrap_or(f64::NAN),
            display: format_percent(ratio),
        });
        self
    }

    fn optional_currency(mut self, label: &str, value: Option<f64>) -> Self {
        self.0.push(Metric {
            label: label.to_string(),
            value: value.unwrap_or(f64::NAN),
            display: value
                .map(|v| format_currency(v, Precision::Continuous))
                .unwrap_or_else(|| "n/a".to_string()),
        });
        self
    }
}

/// "Other Costs (10%)"; fractional percentages keep one decimal.
fn overhead_label(fraction: f64) -> String {
    let pct = fraction * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{} ({:.0}%)", metric::OVERHEAD, pct)
    } else {
        format!("{} ({:.1}%)", metric::OVERHEAD, pct)
    }
}

impl FishProduction {
    pub fn report(&self) -> Result<ProductionReport, CalcError> {
        let metrics = MetricsBuilder(Vec::with_capacity(12))
            .quantity(metric::SELLABLE_FISH, self.sellable_fish, Precision::Count)
            .quantity(metric::TOTAL_WEIGHT_KG, self.total_weight_kg, Precision::Continuous)
            .quantity(metric::FEED_KG, self.feed_kg, Precision::Continuous)
            .currency(metric::FEED_COST, self.feed_cost)
            .currency(metric::FRY_COST, self.fry_cost)
            .currency(&overhead_label(self.config.overhead_fraction), self.overhead_cost)
            .fixed_costs(self.fixed_cost)
            .currency(metric::TOTAL_COST, self.total_cost)
            .currency(metric::REVENUE, self.revenue)
            .currency(metric::PROFIT, self.profit)
            .percent(metric::RETURN_ON_COST, self.return_on_cost())
            .optional_currency(metric::BREAK_EVEN_PER_KG, self.break_even_price())
            .0;

        Ok(ProductionReport {
            title: format!("{} Production", self.species),
            metrics,
            monthly: self.monthly_table()?,
        })
    }
}

impl VegetableProduction {
    pub fn report(&self) -> Result<ProductionReport, CalcError> {
        let metrics = MetricsBuilder(Vec::with_capacity(11))
            .quantity(metric::SELLABLE_PLANTS, self.sellable_plants, Precision::Count)
            .quantity(metric::WATER_L, self.water_l, Precision::Continuous)
            .currency(metric::NUTRIENT_COST, self.nutrient_cost)
            .currency(metric::SEED_COST, self.seed_cost)
            .fixed_costs(self.fixed_cost)
            .currency(metric::TOTAL_COST, self.total_cost)
            .currency(metric::REVENUE, self.revenue)
            .currency(metric::PROFIT, self.profit)
            .percent(metric::RETURN_ON_COST, self.return_on_cost())
            .optional_currency(metric::BREAK_EVEN_PER_PLANT, self.break_even_price())
            .0;

        Ok(ProductionReport {
            title: format!("{} Production", self.species),
            metrics,
            monthly: self.monthly_table()?,
        })
    }
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// Display strings for every table row: month, consumption, cost.
fn table_cells(table: &MonthlyTable) -> Result<Vec<[String; 3]>, CalcError> {
    Ok(table
        .rows()?
        .into_iter()
        .map(|row| {
            [
                row.month.to_string(),
                format_quantity(row.consumption, Precision::Continuous),
                format_currency(row.cost, Precision::Continuous),
            ]
        })
        .collect())
}

pub fn render_text(report: &ProductionReport) -> Result<String, CalcError> {
    let mut s = String::new();
    writeln!(s, "{}", report.title).unwrap();
    writeln!(s, "{}", "=".repeat(report.title.chars().count())).unwrap();

    let label_width = report
        .metrics
        .iter()
        .map(|m| m.label.chars().count())
        .max()
        .unwrap_or(0);
    for m in &report.metrics {
        writeln!(s, "{:<label_width$}  {}", m.label, m.display).unwrap();
    }

    let headers = report.monthly.kind().headers();
    let cells = table_cells(&report.monthly)?;
    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    s.push('\n');
    writeln!(
        s,
        "{:>w0$}  {:>w1$}  {:>w2$}",
        headers[0],
        headers[1],
        headers[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
    .unwrap();
    for row in &cells {
        writeln!(
            s,
            "{:>w0$}  {:>w1$}  {:>w2$}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )
        .unwrap();
    }
    Ok(s)
}

/// Self-contained HTML fragment: results list followed by the monthly table.
pub fn render_html(report: &ProductionReport) -> Result<String, CalcError> {
    let mut s = String::from(
        r##"<div style="font-family:sans-serif; border:1px solid #dee2e6; border-radius:4px; padding:8px 12px; background:#fff;">"##,
    );
    write!(
        s,
        r##"<h3 style="margin:4px 0 8px 0;">{}</h3><dl style="display:grid; grid-template-columns:max-content auto; gap:2px 16px; margin:0;">"##,
        escape_html(&report.title)
    )
    .unwrap();
    for m in &report.metrics {
        write!(
            s,
            r##"<dt style="color:#495057;">{}</dt><dd style="margin:0; text-align:right;">{}</dd>"##,
            escape_html(&m.label),
            escape_html(&m.display)
        )
        .unwrap();
    }
    s.push_str("</dl>");

    s.push_str(r##"<table style="margin-top:12px; border-collapse:collapse; font-size:13px;"><thead><tr>"##);
    for h in report.monthly.kind().headers() {
        write!(
            s,
            r##"<th style="border-bottom:1px solid #dee2e6; padding:2px 8px;">{}</th>"##,
            escape_html(h)
        )
        .unwrap();
    }
    s.push_str("</tr></thead><tbody>");
    for row in table_cells(&report.monthly)? {
        s.push_str("<tr>");
        for cell in row {
            write!(
                s,
                r##"<td style="padding:2px 8px; text-align:right;">{}</td>"##,
                escape_html(&cell)
            )
            .unwrap();
        }
        s.push_str("</tr>");
    }
    s.push_str("</tbody></table></div>");
    Ok(s)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FishCostConfig, FixedCosts, VegetableCostConfig};
    use crate::fish::{calculate_fish_production, calculate_fish_production_with};
    use crate::input::ProductionInput;
    use crate::species::{FishSpecies, VegetableSpecies};
    use crate::vegetable::{calculate_vegetable_production, calculate_vegetable_production_with};

    fn labels(report: &ProductionReport) -> Vec<&str> {
        report.metrics.iter().map(|m| m.label.as_str()).collect()
    }

    #[test]
    fn test_fish_report_labels_and_values() {
        let report = calculate_fish_production("Tilapia", 1000, 0.5, 20.0)
            .unwrap()
            .report()
            .unwrap();

        assert_eq!(report.title, "Tilapia Production");
        assert_eq!(
            labels(&report),
            [
                metric::SELLABLE_FISH,
                metric::TOTAL_WEIGHT_KG,
                metric::FEED_KG,
                metric::FEED_COST,
                metric::FRY_COST,
                "Other Costs (10%)",
                metric::TOTAL_COST,
                metric::REVENUE,
                metric::PROFIT,
                metric::RETURN_ON_COST,
                metric::BREAK_EVEN_PER_KG,
            ]
        );
        let display = |label: &str| report.metric(label).unwrap().display.clone();
        assert_eq!(display(metric::SELLABLE_FISH), "927");
        assert_eq!(display(metric::TOTAL_WEIGHT_KG), "482.04");
        assert_eq!(display(metric::FEED_KG), "592.91");
        assert_eq!(display(metric::FRY_COST), "S/ 500.00");
        assert_eq!(display(metric::TOTAL_COST), "S/ 4,658.86");
        assert_eq!(display(metric::REVENUE), "S/ 9,640.80");
        assert_eq!(display(metric::PROFIT), "S/ 4,981.94");
        assert_eq!(report.monthly.len(), 6);
    }

    #[test]
    fn test_fixed_costs_only_listed_when_present() {
        let config = FishCostConfig {
            overhead_fraction: 0.15,
            fixed: FixedCosts {
                labor: 100.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let input = ProductionInput {
            count: 200,
            unit_cost: 0.5,
            sale_price: 12.0,
        };
        let report = calculate_fish_production_with(FishSpecies::Trout, input, &config)
            .unwrap()
            .report()
            .unwrap();

        assert!(report.metric("Other Costs (15%)").is_some());
        assert_eq!(
            report.metric(metric::FIXED_COSTS).unwrap().display,
            "S/ 100.00"
        );
    }

    #[test]
    fn test_overhead_label() {
        assert_eq!(overhead_label(0.1), "Other Costs (10%)");
        assert_eq!(overhead_label(0.2), "Other Costs (20%)");
        assert_eq!(overhead_label(0.125), "Other Costs (12.5%)");
    }

    #[test]
    fn test_vegetable_report() {
        let report = calculate_vegetable_production("Lettuce", 500, 0.3, 2.0)
            .unwrap()
            .report()
            .unwrap();

        assert_eq!(report.title, "Lettuce Production");
        assert!(report.metric(metric::FIXED_COSTS).is_none());
        assert_eq!(report.metric(metric::SELLABLE_PLANTS).unwrap().display, "475");
        assert_eq!(report.metric(metric::TOTAL_COST).unwrap().display, "S/ 250.00");
        assert_eq!(report.metric(metric::PROFIT).unwrap().display, "S/ 700.00");
        assert_eq!(report.metric(metric::RETURN_ON_COST).unwrap().display, "280.0%");
    }

    #[test]
    fn test_undefined_ratios_render_na() {
        let config = VegetableCostConfig::default();
        let input = ProductionInput {
            count: 0,
            unit_cost: 0.3,
            sale_price: 2.0,
        };
        let report = calculate_vegetable_production_with(VegetableSpecies::Spinach, input, &config)
            .unwrap()
            .report()
            .unwrap();
        let roc = report.metric(metric::RETURN_ON_COST).unwrap();
        assert_eq!(roc.display, "n/a");
        assert!(roc.value.is_nan());
        assert_eq!(
            report.metric(metric::BREAK_EVEN_PER_PLANT).unwrap().display,
            "n/a"
        );
    }

    #[test]
    fn test_render_text() {
        let report = calculate_vegetable_production("Lettuce", 500, 0.3, 2.0)
            .unwrap()
            .report()
            .unwrap();
        let text = render_text(&report).unwrap();

        assert!(text.starts_with("Lettuce Production\n==================\n"));
        assert!(text.contains("Estimated Profit"));
        assert!(text.contains("S/ 700.00"));
        assert!(text.contains("Water (L)"));
        // two monthly rows of 3,750 L
        assert_eq!(text.matches("3,750.00").count(), 2);
    }

    #[test]
    fn test_render_html() {
        let report = calculate_fish_production("Trout", 1000, 0.5, 20.0)
            .unwrap()
            .report()
            .unwrap();
        let html = render_html(&report).unwrap();

        assert!(html.starts_with("<div"));
        assert!(html.ends_with("</div>"));
        assert!(html.contains("<h3 style=\"margin:4px 0 8px 0;\">Trout Production</h3>"));
        assert_eq!(html.matches("<tr>").count(), 1 + 8);
        assert!(html.contains("Monthly Feed Cost (S/)"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }
}
