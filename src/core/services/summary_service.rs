use serde::Serialize;

use crate::domain::{DashboardAggregate, Period, PeriodSummary};
use crate::utils::round_half_up;

/// Days used to spread monthly expense into a daily figure.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Badge shown on the net savings card and in the health panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
}

impl BudgetStatus {
    pub fn label(self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }

    pub fn savings_badge(self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "Saving",
            BudgetStatus::OverBudget => "Overspending",
        }
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn select_summary(aggregate: &DashboardAggregate, period: Period) -> &PeriodSummary {
        match period {
            Period::Month => &aggregate.month_summary,
            Period::Week => &aggregate.week_summary,
        }
    }

    /// Whole percentage of income kept as savings; `0` without income. May exceed 100.
    pub fn savings_rate(summary: &PeriodSummary) -> i64 {
        percent_of_income(summary.net_savings, summary.income)
    }

    /// Whole percentage of income spent; `0` without income.
    pub fn expense_ratio(summary: &PeriodSummary) -> i64 {
        percent_of_income(summary.expense, summary.income)
    }

    /// Zero savings counts as not positive.
    pub fn is_positive_savings(summary: &PeriodSummary) -> bool {
        summary.net_savings > 0.0
    }

    pub fn budget_status(summary: &PeriodSummary) -> BudgetStatus {
        if Self::is_positive_savings(summary) {
            BudgetStatus::OnTrack
        } else {
            BudgetStatus::OverBudget
        }
    }

    pub fn monthly_daily_average(summary: &PeriodSummary) -> f64 {
        summary.expense / DAYS_PER_MONTH
    }
}

fn percent_of_income(amount: f64, income: f64) -> i64 {
    if income.is_nan() || income <= 0.0 {
        return 0;
    }
    let percent = round_half_up(amount / income * 100.0);
    if percent.is_finite() {
        percent as i64
    } else {
        0
    }
}
