//! In-memory adapters for tests and development bootstrap.

mod assessment_store;
mod forecast_store;
mod risk_history;

pub use assessment_store::InMemoryAssessmentStore;
pub use forecast_store::InMemoryForecastStore;
pub use risk_history::InMemoryRiskHistory;
