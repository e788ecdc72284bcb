//! Per-day and per-category spending entries.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Weekday identifiers as they appear in the dashboard feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekdayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekdayName {
    /// Display order, Monday first.
    pub const ALL: [WeekdayName; 7] = [
        WeekdayName::Monday,
        WeekdayName::Tuesday,
        WeekdayName::Wednesday,
        WeekdayName::Thursday,
        WeekdayName::Friday,
        WeekdayName::Saturday,
        WeekdayName::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeekdayName::Monday => "MONDAY",
            WeekdayName::Tuesday => "TUESDAY",
            WeekdayName::Wednesday => "WEDNESDAY",
            WeekdayName::Thursday => "THURSDAY",
            WeekdayName::Friday => "FRIDAY",
            WeekdayName::Saturday => "SATURDAY",
            WeekdayName::Sunday => "SUNDAY",
        }
    }

    /// Three-letter axis label, e.g. `SAT`.
    pub fn short_label(self) -> &'static str {
        &self.as_str()[..3]
    }

    /// Zero-based position in a Monday-first week.
    pub fn display_index(self) -> u32 {
        self.to_weekday().num_days_from_monday()
    }

    pub fn to_weekday(self) -> Weekday {
        match self {
            WeekdayName::Monday => Weekday::Mon,
            WeekdayName::Tuesday => Weekday::Tue,
            WeekdayName::Wednesday => Weekday::Wed,
            WeekdayName::Thursday => Weekday::Thu,
            WeekdayName::Friday => Weekday::Fri,
            WeekdayName::Saturday => Weekday::Sat,
            WeekdayName::Sunday => Weekday::Sun,
        }
    }
}

impl fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending total for a single weekday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailySpending {
    pub day: WeekdayName,
    pub total: f64,
}

impl DailySpending {
    pub fn new(day: WeekdayName, total: f64) -> Self {
        Self { day, total }
    }
}

/// Spending total for one category label. Duplicate labels are kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
}

impl CategorySpending {
    pub fn new(category: impl Into<String>, total: f64) -> Self {
        Self {
            category: category.into(),
            total,
        }
    }
}
