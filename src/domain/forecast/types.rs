//! Core types of the risk forecasting layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ForecastId, Timestamp};

/// What kind of entity a forecast targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastType {
    IndustryRisk,
    MarketRisk,
    UserRisk,
}

impl ForecastType {
    /// All forecast types.
    pub const ALL: [ForecastType; 3] = [
        ForecastType::IndustryRisk,
        ForecastType::MarketRisk,
        ForecastType::UserRisk,
    ];

    /// Returns the display label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            ForecastType::IndustryRisk => "industry_risk",
            ForecastType::MarketRisk => "market_risk",
            ForecastType::UserRisk => "user_risk",
        }
    }
}

impl fmt::Display for ForecastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Discrete risk tier attached to a user snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// True for the levels that feed pattern detection.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

/// The fixed set of boolean risk-factor flags observed on user snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    LowEmergencyFund,
    HighDebtToIncome,
    IncomeVolatility,
    MissedPayments,
    LowSavingsRate,
    HighHousingCostBurden,
    NoRetirementContribution,
    ThinCreditFile,
}

impl RiskFactor {
    /// All factors in canonical order; defines feature-vector layout.
    pub const ALL: [RiskFactor; 8] = [
        RiskFactor::LowEmergencyFund,
        RiskFactor::HighDebtToIncome,
        RiskFactor::IncomeVolatility,
        RiskFactor::MissedPayments,
        RiskFactor::LowSavingsRate,
        RiskFactor::HighHousingCostBurden,
        RiskFactor::NoRetirementContribution,
        RiskFactor::ThinCreditFile,
    ];
}

/// One point of an entity's historical risk-score series (0-100 scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskObservation {
    pub observed_at: Timestamp,
    pub score: f64,
}

impl RiskObservation {
    pub fn new(observed_at: Timestamp, score: f64) -> Self {
        Self { observed_at, score }
    }
}

/// A high-risk user snapshot consumed by pattern detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskSnapshot {
    pub user_id: String,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub observed_at: Timestamp,
}

impl HighRiskSnapshot {
    /// Encodes the snapshot's factors as a 0/1 vector in canonical order.
    pub fn feature_vector(&self) -> Vec<f64> {
        RiskFactor::ALL
            .iter()
            .map(|f| if self.factors.contains(f) { 1.0 } else { 0.0 })
            .collect()
    }
}

/// A persisted forward-looking risk estimate.
///
/// Created per forecast run and never mutated; the actual outcome and
/// accuracy are filled in later through the forecast store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskForecast {
    pub id: ForecastId,
    pub forecast_type: ForecastType,
    /// Industry code, market segment, or user id depending on type.
    pub target: String,
    pub horizon_days: u32,
    /// Predicted probability of elevated risk, 0.0-1.0.
    pub risk_probability: f64,
    /// Heuristic confidence, 0.1-1.0.
    pub confidence: f64,
    /// Supporting data: trailing trend excerpt and series statistics.
    pub supporting_data: serde_json::Value,
    pub model_version: String,
    pub created_at: Timestamp,
    /// Observed outcome, once known (0.0-1.0).
    pub actual_outcome: Option<f64>,
    /// 1 - |predicted - actual|, recorded with the outcome.
    pub accuracy: Option<f64>,
}

/// Why a forecast run produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The entity's history is shorter than the per-type minimum.
    InsufficientHistory { required: usize, available: usize },
    /// The history store failed; the caller may retry later.
    StorageUnavailable,
}

/// Tagged result of a forecast run.
///
/// The degraded and skipped states are first-class values rather than
/// sentinels so callers must acknowledge them; none of the engine's
/// entry points surface an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastOutcome {
    /// A model-backed forecast.
    Ready(RiskForecast),
    /// The numeric backend is unavailable; neutral defaults were used.
    Degraded(RiskForecast),
    /// No forecast was produced.
    Skipped(SkipReason),
}

impl ForecastOutcome {
    /// The forecast, if one was produced (ready or degraded).
    pub fn forecast(&self) -> Option<&RiskForecast> {
        match self {
            ForecastOutcome::Ready(f) | ForecastOutcome::Degraded(f) => Some(f),
            ForecastOutcome::Skipped(_) => None,
        }
    }

    /// The predicted probability, if a forecast was produced.
    pub fn risk_probability(&self) -> Option<f64> {
        self.forecast().map(|f| f.risk_probability)
    }

    /// True when a full model-backed forecast was produced.
    pub fn is_ready(&self) -> bool {
        matches!(self, ForecastOutcome::Ready(_))
    }
}

/// An emerging risk pattern flagged by anomaly detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPattern {
    /// Users in the flagged minority cluster.
    pub member_user_ids: Vec<String>,
    /// Factors present in at least half the cluster.
    pub common_factors: Vec<RiskFactor>,
    pub detected_at: Timestamp,
}
