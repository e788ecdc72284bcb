//! Income/expense rollups for a reporting period.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Aggregated income and expense for one reporting window.
///
/// `net_savings` is supplied by the data source and is not recomputed here;
/// status badges assume it equals `income - expense`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    #[serde(rename = "incomes", alias = "income")]
    pub income: f64,
    pub expense: f64,
    pub net_savings: f64,
}

impl PeriodSummary {
    pub fn new(income: f64, expense: f64, net_savings: f64) -> Self {
        Self {
            income,
            expense,
            net_savings,
        }
    }
}

/// Reporting window selected on the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Month,
    Week,
}

impl Period {
    /// Caption shown under each summary card.
    pub fn caption(self) -> &'static str {
        match self {
            Period::Month => "This month",
            Period::Week => "This week",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Month => "month",
            Period::Week => "week",
        };
        f.write_str(label)
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Period::Month),
            "week" => Ok(Period::Week),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown period `{}` (expected `month` or `week`)",
                other
            ))),
        }
    }
}
