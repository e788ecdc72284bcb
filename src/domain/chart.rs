use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Rendering style for the category breakdown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Pie,
    #[default]
    Doughnut,
}

impl ChartType {
    /// Inner radius handed to the chart renderer.
    pub fn cutout(self) -> &'static str {
        match self {
            ChartType::Pie => "0%",
            ChartType::Doughnut => "60%",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
        };
        f.write_str(label)
    }
}

impl FromStr for ChartType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pie" => Ok(ChartType::Pie),
            "doughnut" | "donut" => Ok(ChartType::Doughnut),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown chart type `{}` (expected `pie` or `doughnut`)",
                other
            ))),
        }
    }
}

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutout_follows_chart_type() {
        assert_eq!(ChartType::default(), ChartType::Doughnut);
        assert_eq!(ChartType::Doughnut.cutout(), "60%");
        assert_eq!(ChartType::Pie.cutout(), "0%");
        assert_eq!("PIE".parse::<ChartType>().unwrap(), ChartType::Pie);
        assert!("bar".parse::<ChartType>().is_err());
    }

    #[test]
    fn theme_wire_names() {
        assert!(ThemeMode::Dark.is_dark());
        let theme: ThemeMode = serde_json::from_str(r#""dark""#).expect("theme json");
        assert_eq!(theme, ThemeMode::Dark);
    }
}
