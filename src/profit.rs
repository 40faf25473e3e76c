//! Small business profit calculator.

use crate::error::ProfitError;
use serde::Serialize;

/// Monthly hours assumed when none are given
pub const DEFAULT_HOURS_WORKED: f64 = 160.0;

/// Monthly figures entered by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitInputs {
    pub revenue: f64,
    pub cost_of_goods: f64,
    pub overheads: f64,
    pub hours_worked: f64,
}

/// Derived business metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitReport {
    pub gross_profit: f64,
    pub net_profit: f64,
    /// Net profit as a percentage of revenue, 0 when there is no revenue
    pub profit_margin: f64,
    pub annual_profit: f64,
    pub hourly_rate: f64,
    pub breakeven_revenue: f64,
}

impl ProfitInputs {
    pub fn new(revenue: f64, cost_of_goods: f64, overheads: f64) -> Self {
        Self {
            revenue,
            cost_of_goods,
            overheads,
            hours_worked: DEFAULT_HOURS_WORKED,
        }
    }

    pub fn with_hours_worked(mut self, hours: f64) -> Self {
        self.hours_worked = hours;
        self
    }

    /// Reject negative money amounts and fewer than one hour worked
    pub fn validate(&self) -> Result<(), ProfitError> {
        let fields = [
            ("revenue", self.revenue),
            ("cost of goods", self.cost_of_goods),
            ("overheads", self.overheads),
            ("hours worked", self.hours_worked),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ProfitError::NotFinite { field });
            }
        }
        for (field, value) in &fields[..3] {
            if *value < 0.0 {
                return Err(ProfitError::Negative {
                    field: *field,
                    value: *value,
                });
            }
        }
        if self.hours_worked < 1.0 {
            return Err(ProfitError::Hours {
                value: self.hours_worked,
            });
        }
        Ok(())
    }
}

/// Compute the monthly metrics
pub fn calculate(inputs: &ProfitInputs) -> Result<ProfitReport, ProfitError> {
    inputs.validate()?;

    let gross_profit = inputs.revenue - inputs.cost_of_goods;
    let net_profit = gross_profit - inputs.overheads;
    let profit_margin = if inputs.revenue == 0.0 {
        0.0
    } else {
        net_profit / inputs.revenue * 100.0
    };

    Ok(ProfitReport {
        gross_profit,
        net_profit,
        profit_margin,
        annual_profit: net_profit * 12.0,
        hourly_rate: net_profit / inputs.hours_worked,
        breakeven_revenue: inputs.overheads + inputs.cost_of_goods,
    })
}

/// Format a dollar amount as `$1,234.56`
///
/// Negative amounts keep the sign after the dollar sign: `$-1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Rounding can turn a tiny negative into zero; don't print "-0.00"
    let sign = if amount < 0.0 && !fixed.trim_matches(|c: char| c == '0' || c == '.').is_empty() {
        "-"
    } else {
        ""
    };
    format!("${}{}.{}", sign, grouped, cents)
}

/// Format a percentage with two decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
