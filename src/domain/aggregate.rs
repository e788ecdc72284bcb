//! The dashboard input snapshot and its boundary checks.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::{CategorySpending, DailySpending, PeriodSummary, WeekdayName};
use crate::errors::{DashboardError, DashboardResult};

/// Number of entries a weekly spending series must carry.
pub const DAYS_PER_WEEK: usize = 7;

/// Everything the dashboard renders, supplied once per refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAggregate {
    pub month_summary: PeriodSummary,
    pub week_summary: PeriodSummary,
    pub weekly_spending: Vec<DailySpending>,
    pub spending_by_category: Vec<CategorySpending>,
}

/// How loaded aggregates are checked before use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject anything outside the data model.
    #[default]
    Strict,
    /// Clamp negative totals to zero, then reject what is still malformed.
    Clamp,
}

impl DashboardAggregate {
    /// Zero-valued dashboard: seven empty days and no categories.
    pub fn empty() -> Self {
        Self {
            month_summary: PeriodSummary::default(),
            week_summary: PeriodSummary::default(),
            weekly_spending: WeekdayName::ALL
                .iter()
                .map(|day| DailySpending::new(*day, 0.0))
                .collect(),
            spending_by_category: Vec::new(),
        }
    }

    /// Demo data used when no input file is supplied.
    pub fn sample() -> Self {
        let weekly = [85.0, 120.0, 65.0, 95.0, 180.0, 220.0, 110.0];
        Self {
            month_summary: PeriodSummary::new(3200.0, 2150.0, 1050.0),
            week_summary: PeriodSummary::new(800.0, 520.0, 280.0),
            weekly_spending: WeekdayName::ALL
                .iter()
                .zip(weekly)
                .map(|(day, total)| DailySpending::new(*day, total))
                .collect(),
            spending_by_category: vec![
                CategorySpending::new("FOOD", 650.0),
                CategorySpending::new("TRANSPORT", 380.0),
                CategorySpending::new("ENTERTAINMENT", 420.0),
                CategorySpending::new("SHOPPING", 290.0),
                CategorySpending::new("UTILITIES", 180.0),
                CategorySpending::new("HEALTHCARE", 230.0),
            ],
        }
    }

    /// Parses the camelCase feed format and applies `mode`.
    pub fn from_json_str(json: &str, mode: ValidationMode) -> DashboardResult<Self> {
        let aggregate: Self = serde_json::from_str(json)?;
        aggregate.prepare(mode)
    }

    pub fn load_from_path(path: &Path, mode: ValidationMode) -> DashboardResult<Self> {
        tracing::debug!(path = %path.display(), "loading dashboard aggregate");
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data, mode)
    }

    fn prepare(self, mode: ValidationMode) -> DashboardResult<Self> {
        let aggregate = match mode {
            ValidationMode::Strict => self,
            ValidationMode::Clamp => self.sanitize(),
        };
        aggregate.validate()?;
        Ok(aggregate)
    }

    /// Checks the invariants the formatter relies on.
    pub fn validate(&self) -> DashboardResult<()> {
        check_summary("monthSummary", &self.month_summary)?;
        check_summary("weekSummary", &self.week_summary)?;

        if self.weekly_spending.len() != DAYS_PER_WEEK {
            return Err(DashboardError::InvalidWeek(self.weekly_spending.len()));
        }
        let mut seen = HashSet::new();
        for entry in &self.weekly_spending {
            if !seen.insert(entry.day) {
                return Err(DashboardError::DuplicateDay(entry.day.to_string()));
            }
            check_non_negative(&format!("weeklySpending.{}", entry.day), entry.total)?;
        }
        for entry in &self.spending_by_category {
            check_non_negative(&format!("spendingByCategory.{}", entry.category), entry.total)?;
        }
        Ok(())
    }

    /// Replaces negative totals with zero. Length and duplicate problems are left for
    /// [`DashboardAggregate::validate`].
    pub fn sanitize(mut self) -> Self {
        clamp("monthSummary.incomes", &mut self.month_summary.income);
        clamp("monthSummary.expense", &mut self.month_summary.expense);
        clamp("weekSummary.incomes", &mut self.week_summary.income);
        clamp("weekSummary.expense", &mut self.week_summary.expense);
        for entry in &mut self.weekly_spending {
            clamp(entry.day.as_str(), &mut entry.total);
        }
        for entry in &mut self.spending_by_category {
            clamp(&entry.category, &mut entry.total);
        }
        self
    }

    /// Weekly series in Monday to Sunday order.
    pub fn weekly_in_display_order(&self) -> Vec<DailySpending> {
        let mut days = self.weekly_spending.clone();
        days.sort_by_key(|entry| entry.day.display_index());
        days
    }
}

fn check_summary(name: &str, summary: &PeriodSummary) -> DashboardResult<()> {
    check_non_negative(&format!("{name}.incomes"), summary.income)?;
    check_non_negative(&format!("{name}.expense"), summary.expense)?;
    if !summary.net_savings.is_finite() {
        return Err(DashboardError::NonFiniteAmount {
            field: format!("{name}.netSavings"),
        });
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> DashboardResult<()> {
    if !value.is_finite() {
        return Err(DashboardError::NonFiniteAmount {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(DashboardError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn clamp(field: &str, value: &mut f64) {
    if *value < 0.0 {
        tracing::warn!(field, value = *value, "clamping negative amount to zero");
        *value = 0.0;
    }
}
