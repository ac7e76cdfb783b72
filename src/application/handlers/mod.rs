//! Command and query handlers wiring the domain to its ports.

mod check_content_access;
mod complete_assessment;
mod detect_risk_patterns;
mod forecast_accuracy;
mod generate_forecast;
mod record_forecast_outcome;
mod score_phase;

pub use check_content_access::{
    CheckContentAccessHandler, CheckContentAccessQuery, CheckContentAccessResult,
};
pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
};
pub use detect_risk_patterns::{DetectRiskPatternsHandler, DetectRiskPatternsQuery};
pub use forecast_accuracy::{ForecastAccuracyHandler, ForecastAccuracyQuery};
pub use generate_forecast::{GenerateForecastCommand, GenerateForecastHandler};
pub use record_forecast_outcome::{
    RecordForecastOutcomeCommand, RecordForecastOutcomeHandler, RecordForecastOutcomeResult,
};
pub use score_phase::{ScorePhaseCommand, ScorePhaseHandler};
