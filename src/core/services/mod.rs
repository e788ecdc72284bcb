pub mod dashboard_service;
pub mod spending_service;
pub mod summary_service;

pub use dashboard_service::{DashboardOptions, DashboardService, DashboardView};
pub use spending_service::{CategoryShare, SpendingService, NOT_AVAILABLE};
pub use summary_service::{BudgetStatus, SummaryService};
