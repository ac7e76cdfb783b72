//! Integration tests for the forecasting pipeline.
//!
//! Exercises the loop end to end: historical series feed the engine,
//! produced forecasts persist, outcomes are recorded later, and accuracy
//! aggregates per forecast type. All on the in-memory adapters.

use std::sync::Arc;

use mingus_assessment::adapters::{InMemoryForecastStore, InMemoryRiskHistory};
use mingus_assessment::application::handlers::{
    DetectRiskPatternsHandler, DetectRiskPatternsQuery, ForecastAccuracyHandler,
    ForecastAccuracyQuery, GenerateForecastCommand, GenerateForecastHandler,
    RecordForecastOutcomeCommand, RecordForecastOutcomeHandler,
};
use mingus_assessment::domain::forecast::{
    ForecastOutcome, ForecastSettings, ForecastType, HighRiskSnapshot, ModelSuite, RiskFactor,
    RiskLevel, RiskObservation, SkipReason,
};
use mingus_assessment::domain::foundation::Timestamp;

struct Harness {
    history: Arc<InMemoryRiskHistory>,
    store: Arc<InMemoryForecastStore>,
    generate: GenerateForecastHandler,
    record: RecordForecastOutcomeHandler,
    accuracy: ForecastAccuracyHandler,
    patterns: DetectRiskPatternsHandler,
}

impl Harness {
    fn new(suite: ModelSuite) -> Self {
        let history = Arc::new(InMemoryRiskHistory::new());
        let store = Arc::new(InMemoryForecastStore::new());
        let engine = Arc::new(
            mingus_assessment::domain::forecast::RiskForecastEngine::new(
                history.clone(),
                suite,
                ForecastSettings::default(),
            ),
        );
        Self {
            generate: GenerateForecastHandler::new(engine.clone(), store.clone()),
            record: RecordForecastOutcomeHandler::new(store.clone()),
            accuracy: ForecastAccuracyHandler::new(store.clone()),
            patterns: DetectRiskPatternsHandler::new(engine),
            history,
            store,
        }
    }

    async fn seed_series(&self, forecast_type: ForecastType, target: &str, scores: &[f64]) {
        let start = Timestamp::now().minus_days(scores.len() as i64);
        for (i, score) in scores.iter().enumerate() {
            self.history
                .push_observation(
                    forecast_type,
                    target,
                    RiskObservation::new(start.add_days(i as i64), *score),
                )
                .await;
        }
    }
}

fn rising_scores(n: usize) -> Vec<f64> {
    (0..n).map(|i| 35.0 + i as f64 * 0.8).collect()
}

#[tokio::test]
async fn forecast_persists_and_outcome_feeds_accuracy() {
    let harness = Harness::new(ModelSuite::standard());
    harness
        .seed_series(ForecastType::IndustryRisk, "tech", &rising_scores(40))
        .await;

    let outcome = harness
        .generate
        .handle(GenerateForecastCommand {
            forecast_type: ForecastType::IndustryRisk,
            target: "tech".into(),
            horizon_days: 30,
        })
        .await;

    let forecast = outcome.forecast().expect("forecast produced").clone();
    assert!(outcome.is_ready());
    assert_eq!(harness.store.forecast_count().await, 1);

    let recorded = harness
        .record
        .handle(RecordForecastOutcomeCommand {
            forecast_id: forecast.id,
            actual_outcome: forecast.risk_probability,
        })
        .await
        .unwrap();
    assert!((recorded.accuracy - 1.0).abs() < 1e-9);

    let summary = harness
        .accuracy
        .handle(ForecastAccuracyQuery {
            forecast_type: ForecastType::IndustryRisk,
            window: 50,
        })
        .await
        .unwrap()
        .expect("one scored forecast");
    assert_eq!(summary.sample_count, 1);
    assert!((summary.mean - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn accuracy_aggregates_across_multiple_forecasts() {
    let harness = Harness::new(ModelSuite::standard());
    harness
        .seed_series(ForecastType::UserRisk, "u1", &rising_scores(30))
        .await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let outcome = harness
            .generate
            .handle(GenerateForecastCommand {
                forecast_type: ForecastType::UserRisk,
                target: "u1".into(),
                horizon_days: 7,
            })
            .await;
        ids.push(outcome.forecast().unwrap().id);
    }

    // Outcomes at varying distances from the predictions.
    for (id, actual) in ids.iter().zip([0.0, 0.5, 1.0]) {
        harness
            .record
            .handle(RecordForecastOutcomeCommand {
                forecast_id: *id,
                actual_outcome: actual,
            })
            .await
            .unwrap();
    }

    let summary = harness
        .accuracy
        .handle(ForecastAccuracyQuery {
            forecast_type: ForecastType::UserRisk,
            window: 50,
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(summary.sample_count, 3);
    assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    assert!(summary.std_dev >= 0.0);
}

#[tokio::test]
async fn disabled_suite_degrades_but_pipeline_keeps_working() {
    let harness = Harness::new(ModelSuite::disabled());
    harness
        .seed_series(ForecastType::IndustryRisk, "retail", &rising_scores(40))
        .await;

    let outcome = harness
        .generate
        .handle(GenerateForecastCommand {
            forecast_type: ForecastType::IndustryRisk,
            target: "retail".into(),
            horizon_days: 30,
        })
        .await;

    // Neutral default, still persisted and still scoreable.
    assert_eq!(outcome.risk_probability(), Some(0.5));
    let forecast = outcome.forecast().unwrap();
    let recorded = harness
        .record
        .handle(RecordForecastOutcomeCommand {
            forecast_id: forecast.id,
            actual_outcome: 1.0,
        })
        .await
        .unwrap();
    assert!((recorded.accuracy - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn short_history_produces_no_forecast() {
    let harness = Harness::new(ModelSuite::standard());
    harness
        .seed_series(ForecastType::MarketRisk, "sp500", &rising_scores(4))
        .await;

    let outcome = harness
        .generate
        .handle(GenerateForecastCommand {
            forecast_type: ForecastType::MarketRisk,
            target: "sp500".into(),
            horizon_days: 7,
        })
        .await;

    assert!(matches!(
        outcome,
        ForecastOutcome::Skipped(SkipReason::InsufficientHistory { required: 10, available: 4 })
    ));
    assert_eq!(harness.store.forecast_count().await, 0);
}

#[tokio::test]
async fn pattern_detection_surfaces_minority_cluster() {
    let harness = Harness::new(ModelSuite::standard());
    let now = Timestamp::now();

    for i in 0..36 {
        harness
            .history
            .push_snapshot(HighRiskSnapshot {
                user_id: format!("typical-{i}"),
                level: RiskLevel::High,
                factors: vec![RiskFactor::LowSavingsRate],
                observed_at: now.minus_days(2),
            })
            .await;
    }
    for i in 0..4 {
        harness
            .history
            .push_snapshot(HighRiskSnapshot {
                user_id: format!("outlier-{i}"),
                level: RiskLevel::Critical,
                factors: vec![
                    RiskFactor::MissedPayments,
                    RiskFactor::HighDebtToIncome,
                ],
                observed_at: now.minus_days(2),
            })
            .await;
    }

    let patterns = harness
        .patterns
        .handle(DetectRiskPatternsQuery { window_days: 30 })
        .await;

    assert_eq!(patterns.len(), 1);
    let pattern = &patterns[0];
    assert_eq!(pattern.member_user_ids.len(), 4);
    assert!(pattern.common_factors.contains(&RiskFactor::MissedPayments));
    assert!(pattern.common_factors.contains(&RiskFactor::HighDebtToIncome));
}
