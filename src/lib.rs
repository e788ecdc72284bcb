#![doc(test(attr(deny(warnings))))]

//! Dashboard Core turns personal-finance aggregates (period summaries, weekly
//! spending, category totals) into display-ready strings, percentages and
//! theme-aware colour assignments for a dashboard renderer.
//!
//! ```
//! use dashboard_core::currency::format_currency;
//! use dashboard_core::core::services::SummaryService;
//! use dashboard_core::domain::PeriodSummary;
//!
//! let month = PeriodSummary::new(3200.0, 2150.0, 1050.0);
//! assert_eq!(SummaryService::savings_rate(&month), 33);
//! assert_eq!(format_currency(month.net_savings), "$1,050");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod theme;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Dashboard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
