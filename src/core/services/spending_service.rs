use serde::Serialize;

use crate::domain::{CategorySpending, DailySpending, DAYS_PER_WEEK};
use crate::utils::round_half_up;

/// Placeholder label when there is nothing to report.
pub const NOT_AVAILABLE: &str = "N/A";

/// A category's contribution to total category spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// One decimal place, or `"0"` when all categories sum to zero.
    pub percentage: String,
}

impl CategoryShare {
    /// Legend entry such as `FOOD (30.2%)`.
    pub fn legend_text(&self) -> String {
        format!("{} ({}%)", self.category, self.percentage)
    }
}

pub struct SpendingService;

impl SpendingService {
    pub fn weekly_total(weekly: &[DailySpending]) -> f64 {
        weekly.iter().map(|day| day.total).sum()
    }

    /// Always divides by seven, whatever the series length.
    pub fn daily_average(weekly: &[DailySpending]) -> f64 {
        Self::weekly_total(weekly) / DAYS_PER_WEEK as f64
    }

    /// Highest-spending day; the earliest entry wins a tie.
    pub fn peak_day(weekly: &[DailySpending]) -> Option<&DailySpending> {
        let (first, rest) = weekly.split_first()?;
        Some(rest.iter().fold(first, |max, day| {
            if day.total > max.total {
                day
            } else {
                max
            }
        }))
    }

    pub fn peak_day_label(weekly: &[DailySpending]) -> &'static str {
        Self::peak_day(weekly)
            .map(|day| day.day.short_label())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn has_weekly_data(weekly: &[DailySpending]) -> bool {
        weekly.iter().any(|day| day.total > 0.0)
    }

    pub fn category_total(categories: &[CategorySpending]) -> f64 {
        categories.iter().map(|entry| entry.total).sum()
    }

    pub fn has_category_data(categories: &[CategorySpending]) -> bool {
        Self::category_total(categories) > 0.0
    }

    /// Shares in input order. Duplicate labels stay separate entries.
    pub fn category_shares(categories: &[CategorySpending]) -> Vec<CategoryShare> {
        let sum = Self::category_total(categories);
        categories
            .iter()
            .map(|entry| CategoryShare {
                category: entry.category.clone(),
                total: entry.total,
                percentage: share_of(entry.total, sum),
            })
            .collect()
    }

    /// First category as supplied. Callers that want the largest must sort first
    /// or use [`SpendingService::largest_category`].
    pub fn top_category(categories: &[CategorySpending]) -> Option<&CategorySpending> {
        categories.first()
    }

    pub fn top_category_label(categories: &[CategorySpending]) -> &str {
        Self::top_category(categories)
            .map(|entry| entry.category.as_str())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Category with the largest total; the earliest entry wins a tie.
    pub fn largest_category(categories: &[CategorySpending]) -> Option<&CategorySpending> {
        let (first, rest) = categories.split_first()?;
        Some(rest.iter().fold(first, |max, entry| {
            if entry.total > max.total {
                entry
            } else {
                max
            }
        }))
    }
}

fn share_of(total: f64, sum: f64) -> String {
    if !sum.is_finite() || sum <= 0.0 {
        return "0".to_string();
    }
    let tenths = round_half_up(total / sum * 1000.0);
    if !tenths.is_finite() {
        return "0".to_string();
    }
    format!("{:.1}", tenths / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardAggregate, WeekdayName};

    fn week(totals: [f64; 7]) -> Vec<DailySpending> {
        WeekdayName::ALL
            .iter()
            .zip(totals)
            .map(|(day, total)| DailySpending::new(*day, total))
            .collect()
    }

    #[test]
    fn sample_week_statistics() {
        let weekly = week([85.0, 120.0, 65.0, 95.0, 180.0, 220.0, 110.0]);
        assert_eq!(SpendingService::weekly_total(&weekly), 875.0);
        assert!((SpendingService::daily_average(&weekly) - 125.0).abs() < f64::EPSILON);
        assert_eq!(
            SpendingService::peak_day(&weekly).map(|d| d.day),
            Some(WeekdayName::Saturday)
        );
        assert_eq!(SpendingService::peak_day_label(&weekly), "SAT");
    }

    #[test]
    fn peak_day_ties_keep_first() {
        let weekly = vec![
            DailySpending::new(WeekdayName::Monday, 5.0),
            DailySpending::new(WeekdayName::Tuesday, 5.0),
            DailySpending::new(WeekdayName::Wednesday, 3.0),
        ];
        assert_eq!(
            SpendingService::peak_day(&weekly).map(|d| d.day),
            Some(WeekdayName::Monday)
        );
    }

    #[test]
    fn empty_inputs_have_explicit_results() {
        assert_eq!(SpendingService::weekly_total(&[]), 0.0);
        assert_eq!(SpendingService::daily_average(&[]), 0.0);
        assert!(SpendingService::peak_day(&[]).is_none());
        assert_eq!(SpendingService::peak_day_label(&[]), NOT_AVAILABLE);
        assert!(SpendingService::category_shares(&[]).is_empty());
        assert_eq!(SpendingService::top_category_label(&[]), "N/A");
        assert!(SpendingService::largest_category(&[]).is_none());
    }

    #[test]
    fn shares_use_one_decimal() {
        let categories = DashboardAggregate::sample().spending_by_category;
        let shares = SpendingService::category_shares(&categories);
        let percentages: Vec<&str> = shares.iter().map(|s| s.percentage.as_str()).collect();
        assert_eq!(percentages, ["30.2", "17.7", "19.5", "13.5", "8.4", "10.7"]);
        assert_eq!(shares[0].legend_text(), "FOOD (30.2%)");
    }

    #[test]
    fn all_zero_categories_share_zero() {
        let categories = vec![
            CategorySpending::new("FOOD", 0.0),
            CategorySpending::new("RENT", 0.0),
        ];
        let shares = SpendingService::category_shares(&categories);
        assert!(shares.iter().all(|s| s.percentage == "0"));
        assert!(!SpendingService::has_category_data(&categories));
    }

    #[test]
    fn duplicate_categories_are_not_merged() {
        let categories = vec![
            CategorySpending::new("FOOD", 50.0),
            CategorySpending::new("FOOD", 50.0),
        ];
        let shares = SpendingService::category_shares(&categories);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[1].percentage, "50.0");
    }

    #[test]
    fn top_category_keeps_input_order() {
        let categories = vec![
            CategorySpending::new("UTILITIES", 10.0),
            CategorySpending::new("FOOD", 400.0),
        ];
        assert_eq!(SpendingService::top_category_label(&categories), "UTILITIES");
        assert_eq!(
            SpendingService::largest_category(&categories).map(|c| c.category.as_str()),
            Some("FOOD")
        );
    }

    #[test]
    fn flat_week_has_no_data() {
        assert!(!SpendingService::has_weekly_data(&week([0.0; 7])));
        assert!(SpendingService::has_weekly_data(&week([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0])));
    }
}
