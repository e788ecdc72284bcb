pub mod aggregate;
pub mod chart;
pub mod spending;
pub mod summary;

pub use aggregate::{DashboardAggregate, ValidationMode, DAYS_PER_WEEK};
pub use chart::{ChartType, ThemeMode};
pub use spending::{CategorySpending, DailySpending, WeekdayName};
pub use summary::{Period, PeriodSummary};
