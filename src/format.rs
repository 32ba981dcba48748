//! Number presentation: one rounding rule per kind of value.
//!
//! Counts (fish, plants) round to whole units; continuous measures (kg,
//! litres, soles) keep two decimals. Thousands are grouped with `,`.

pub const CURRENCY_SYMBOL: &str = "S/";

/// Explicit precision tag carried alongside every formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Count,
    Continuous,
}

impl Precision {
    pub fn decimals(self) -> usize {
        match self {
            Self::Count => 0,
            Self::Continuous => 2,
        }
    }
}

/// Round half away from zero at the precision's number of decimals.
pub fn round_to(value: f64, precision: Precision) -> f64 {
    match precision {
        Precision::Count => value.round(),
        Precision::Continuous => (value * 100.0).round() / 100.0,
    }
}

pub fn format_quantity(value: f64, precision: Precision) -> String {
    group_thousands(round_to(value, precision), precision.decimals())
}

pub fn format_currency(value: f64, precision: Precision) -> String {
    format!("{CURRENCY_SYMBOL} {}", format_quantity(value, precision))
}

/// Ratio as a percentage with one decimal; `None` reads "n/a".
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "n/a".to_string(),
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let digits = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    // no sign for values that round to zero
    if value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
