use serde::Serialize;

use crate::config::DashboardConfig;
use crate::currency::{
    format_currency_value, format_percent, CurrencyCode, FormatOptions, LocaleConfig,
};
use crate::domain::{ChartType, DashboardAggregate, Period, ThemeMode, WeekdayName};
use crate::theme::{assign_colors, hover_color, ChartChrome, Palette};

use super::spending_service::{CategoryShare, SpendingService};
use super::summary_service::{BudgetStatus, SummaryService};

/// Mode flags and locale used to build a view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub period: Period,
    pub chart_type: ChartType,
    pub theme: ThemeMode,
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            period: Period::Month,
            chart_type: ChartType::Doughnut,
            theme: ThemeMode::Light,
            currency: CurrencyCode::default(),
            locale: LocaleConfig::default(),
        }
    }
}

impl From<&DashboardConfig> for DashboardOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            period: config.period,
            chart_type: config.chart_type,
            theme: config.theme,
            currency: CurrencyCode::new(config.currency.trim()),
            locale: LocaleConfig::for_tag(config.locale.trim()),
        }
    }
}

/// Display-ready dashboard handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub period: Period,
    pub theme: ThemeMode,
    pub cards: SummaryCards,
    pub health: FinancialHealth,
    pub weekly: WeeklyChart,
    pub categories: CategoryChart,
    pub overview: MonthlyOverview,
    pub chrome: ChartChrome,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryCards {
    pub caption: &'static str,
    pub income: String,
    pub expenses: String,
    pub net_savings: String,
    pub positive_savings: bool,
    pub savings_badge: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialHealth {
    pub savings_rate: String,
    pub expense_ratio: String,
    pub status: BudgetStatus,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyBar {
    pub day: WeekdayName,
    pub label: &'static str,
    pub total: f64,
    pub amount: String,
    pub color: String,
    pub hover_color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyChart {
    pub bars: Vec<WeeklyBar>,
    pub total: String,
    pub average: String,
    pub has_data: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    #[serde(flatten)]
    pub share: CategoryShare,
    pub amount: String,
    pub legend: String,
    pub color: String,
    pub hover_color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryChart {
    pub chart_type: ChartType,
    pub cutout: &'static str,
    pub slices: Vec<CategorySlice>,
    pub total: String,
    pub has_data: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyOverview {
    pub daily_average: String,
    pub top_category: String,
    pub peak_day: &'static str,
}

pub struct DashboardService;

impl DashboardService {
    pub fn build_view(aggregate: &DashboardAggregate, options: &DashboardOptions) -> DashboardView {
        let is_dark = options.theme.is_dark();
        let money = |amount: f64| {
            format_currency_value(
                amount,
                &options.currency,
                &options.locale,
                &FormatOptions::whole_units(),
            )
        };

        tracing::debug!(
            period = %options.period,
            chart = %options.chart_type,
            dark = is_dark,
            "building dashboard view"
        );

        let summary = SummaryService::select_summary(aggregate, options.period);
        let status = SummaryService::budget_status(summary);
        let cards = SummaryCards {
            caption: options.period.caption(),
            income: money(summary.income),
            expenses: money(summary.expense),
            net_savings: money(summary.net_savings),
            positive_savings: SummaryService::is_positive_savings(summary),
            savings_badge: status.savings_badge(),
        };
        let health = FinancialHealth {
            savings_rate: format_percent(SummaryService::savings_rate(summary)),
            expense_ratio: format_percent(SummaryService::expense_ratio(summary)),
            status,
            status_label: status.label(),
        };

        let days = aggregate.weekly_in_display_order();
        let bar_colors = assign_colors(days.len(), Palette::weekly(), is_dark);
        let bars = days
            .iter()
            .zip(bar_colors)
            .map(|(day, color)| WeeklyBar {
                day: day.day,
                label: day.day.short_label(),
                total: finite_or_zero(day.total),
                amount: money(day.total),
                hover_color: hover_color(&color),
                color,
            })
            .collect();
        let weekly = WeeklyChart {
            bars,
            total: money(SpendingService::weekly_total(&days)),
            average: money(SpendingService::daily_average(&days)),
            has_data: SpendingService::has_weekly_data(&days),
        };

        let categories = &aggregate.spending_by_category;
        let slice_colors = assign_colors(categories.len(), Palette::category(), is_dark);
        let slices = SpendingService::category_shares(categories)
            .into_iter()
            .zip(slice_colors)
            .map(|(mut share, color)| {
                share.total = finite_or_zero(share.total);
                CategorySlice {
                    amount: money(share.total),
                    legend: share.legend_text(),
                    hover_color: hover_color(&color),
                    color,
                    share,
                }
            })
            .collect();
        let category_chart = CategoryChart {
            chart_type: options.chart_type,
            cutout: options.chart_type.cutout(),
            slices,
            total: money(SpendingService::category_total(categories)),
            has_data: SpendingService::has_category_data(categories),
        };

        let overview = MonthlyOverview {
            daily_average: money(SummaryService::monthly_daily_average(
                &aggregate.month_summary,
            )),
            top_category: SpendingService::top_category_label(categories).to_string(),
            peak_day: SpendingService::peak_day_label(&aggregate.weekly_spending),
        };

        DashboardView {
            period: options.period,
            theme: options.theme,
            cards,
            health,
            weekly,
            categories: category_chart,
            overview,
            chrome: ChartChrome::for_theme(is_dark),
        }
    }
}

/// Unvalidated aggregates may carry NaN or infinite totals; the view never does.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
