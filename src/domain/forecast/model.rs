//! Regression models backing the forecast engine.
//!
//! Two small in-process regressors cover the per-type model choices: a
//! least-squares linear fit for market risk and a boosted-stump ensemble
//! for industry and user risk. Both sit behind [`RiskModel`] so tests can
//! substitute stubs, and the whole suite can be absent. The engine treats
//! a disabled suite as the numeric backend being unavailable and degrades
//! instead of failing.

use super::features::{FeatureRow, TrainingSet};
use super::types::ForecastType;

/// A fittable single-output regressor over feature rows.
pub trait RiskModel: Send + Sync {
    /// Fits the model to the training set. Called once per forecast run.
    fn fit(&mut self, data: &TrainingSet);

    /// Predicts the next raw score (0-100 scale) from a feature row.
    fn predict(&self, row: &FeatureRow) -> f64;

    /// Version tag recorded on forecasts produced by this model.
    fn version(&self) -> &'static str;
}

/// Ordinary least-squares linear regression with intercept.
///
/// Solved via the normal equations on the 4-feature row; the 5x5 system
/// is small enough that Gaussian elimination with partial pivoting is
/// plenty. Falls back to predicting the target mean when the system is
/// singular (e.g. constant features).
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    /// Intercept followed by one coefficient per feature.
    coefficients: [f64; 5],
    target_mean: f64,
    fitted: bool,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RiskModel for LinearRegression {
    fn fit(&mut self, data: &TrainingSet) {
        self.fitted = false;
        if data.is_empty() {
            return;
        }
        self.target_mean = data.targets.iter().sum::<f64>() / data.len() as f64;

        // Normal equations: (XᵀX) b = Xᵀy with a leading 1s column.
        let mut xtx = [[0.0f64; 5]; 5];
        let mut xty = [0.0f64; 5];
        for (row, target) in data.rows.iter().zip(&data.targets) {
            let f = row.as_array();
            let x = [1.0, f[0], f[1], f[2], f[3]];
            for i in 0..5 {
                xty[i] += x[i] * target;
                for j in 0..5 {
                    xtx[i][j] += x[i] * x[j];
                }
            }
        }

        if let Some(solution) = solve_5x5(xtx, xty) {
            self.coefficients = solution;
            self.fitted = true;
        }
    }

    fn predict(&self, row: &FeatureRow) -> f64 {
        if !self.fitted {
            return self.target_mean;
        }
        let f = row.as_array();
        self.coefficients[0]
            + self.coefficients[1] * f[0]
            + self.coefficients[2] * f[1]
            + self.coefficients[3] * f[2]
            + self.coefficients[4] * f[3]
    }

    fn version(&self) -> &'static str {
        "linear-v1"
    }
}

/// Gaussian elimination with partial pivoting; None when singular.
fn solve_5x5(mut a: [[f64; 5]; 5], mut b: [f64; 5]) -> Option<[f64; 5]> {
    for col in 0..5 {
        let pivot = (col..5).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < 1e-10 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..5 {
            let factor = a[row][col] / a[col][col];
            for k in col..5 {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; 5];
    for row in (0..5).rev() {
        let mut sum = b[row];
        for k in row + 1..5 {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}

/// One depth-1 regression tree: a threshold on a single feature with a
/// constant value on each side.
#[derive(Debug, Clone, Copy)]
struct Stump {
    feature: usize,
    threshold: f64,
    left_value: f64,
    right_value: f64,
}

impl Stump {
    fn predict(&self, features: &[f64; 4]) -> f64 {
        if features[self.feature] <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Gradient-boosted regression stumps.
///
/// Each round fits a stump to the current residuals and adds it at the
/// learning rate. Stays well under-fit by design; the score series this
/// sees are short and noisy.
#[derive(Debug, Clone)]
pub struct StumpEnsemble {
    rounds: usize,
    learning_rate: f64,
    base: f64,
    stumps: Vec<Stump>,
}

impl StumpEnsemble {
    pub fn new(rounds: usize, learning_rate: f64) -> Self {
        Self {
            rounds,
            learning_rate,
            base: 0.0,
            stumps: Vec::new(),
        }
    }

    fn best_stump(rows: &[[f64; 4]], residuals: &[f64]) -> Option<Stump> {
        let mut best: Option<(f64, Stump)> = None;
        for feature in 0..4 {
            let mut values: Vec<f64> = rows.iter().map(|r| r[feature]).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            values.dedup();
            // Candidate thresholds between consecutive distinct values.
            for pair in values.windows(2) {
                let threshold = (pair[0] + pair[1]) / 2.0;
                let (mut left_sum, mut left_n, mut right_sum, mut right_n) = (0.0, 0u32, 0.0, 0u32);
                for (row, residual) in rows.iter().zip(residuals) {
                    if row[feature] <= threshold {
                        left_sum += residual;
                        left_n += 1;
                    } else {
                        right_sum += residual;
                        right_n += 1;
                    }
                }
                if left_n == 0 || right_n == 0 {
                    continue;
                }
                let left_value = left_sum / f64::from(left_n);
                let right_value = right_sum / f64::from(right_n);
                let sse: f64 = rows
                    .iter()
                    .zip(residuals)
                    .map(|(row, residual)| {
                        let fit = if row[feature] <= threshold {
                            left_value
                        } else {
                            right_value
                        };
                        (residual - fit).powi(2)
                    })
                    .sum();
                if best.as_ref().map(|(b, _)| sse < *b).unwrap_or(true) {
                    best = Some((
                        sse,
                        Stump {
                            feature,
                            threshold,
                            left_value,
                            right_value,
                        },
                    ));
                }
            }
        }
        best.map(|(_, stump)| stump)
    }
}

impl Default for StumpEnsemble {
    /// 20 rounds at a 0.3 learning rate.
    fn default() -> Self {
        Self::new(20, 0.3)
    }
}

impl RiskModel for StumpEnsemble {
    fn fit(&mut self, data: &TrainingSet) {
        self.stumps.clear();
        if data.is_empty() {
            self.base = 0.0;
            return;
        }
        self.base = data.targets.iter().sum::<f64>() / data.len() as f64;

        let rows: Vec<[f64; 4]> = data.rows.iter().map(FeatureRow::as_array).collect();
        let mut residuals: Vec<f64> = data.targets.iter().map(|t| t - self.base).collect();

        for _ in 0..self.rounds {
            let Some(stump) = Self::best_stump(&rows, &residuals) else {
                break;
            };
            for (row, residual) in rows.iter().zip(residuals.iter_mut()) {
                *residual -= self.learning_rate * stump.predict(row);
            }
            self.stumps.push(stump);
        }
    }

    fn predict(&self, row: &FeatureRow) -> f64 {
        let features = row.as_array();
        self.base
            + self
                .stumps
                .iter()
                .map(|s| self.learning_rate * s.predict(&features))
                .sum::<f64>()
    }

    fn version(&self) -> &'static str {
        "stump-ensemble-v1"
    }
}

/// The per-type model set owned by one forecast engine instance.
///
/// Constructed at initialization and passed in explicitly; there is no
/// ambient registry of models. `None` means the numeric backend is
/// unavailable and every forecast degrades to neutral defaults.
pub struct ModelSuite {
    industry: Option<Box<dyn RiskModel>>,
    market: Option<Box<dyn RiskModel>>,
    user: Option<Box<dyn RiskModel>>,
}

impl ModelSuite {
    /// The standard suite: boosted stumps for industry and user risk,
    /// linear regression for market risk.
    pub fn standard() -> Self {
        Self {
            industry: Some(Box::new(StumpEnsemble::default())),
            market: Some(Box::new(LinearRegression::new())),
            user: Some(Box::new(StumpEnsemble::default())),
        }
    }

    /// A suite with no numeric backend; every forecast degrades.
    pub fn disabled() -> Self {
        Self {
            industry: None,
            market: None,
            user: None,
        }
    }

    /// A suite using the given model for every forecast type (tests).
    pub fn uniform(build: impl Fn() -> Box<dyn RiskModel>) -> Self {
        Self {
            industry: Some(build()),
            market: Some(build()),
            user: Some(build()),
        }
    }

    /// Mutable access to the model for a forecast type, if available.
    pub fn model_for(&mut self, forecast_type: ForecastType) -> Option<&mut Box<dyn RiskModel>> {
        match forecast_type {
            ForecastType::IndustryRisk => self.industry.as_mut(),
            ForecastType::MarketRisk => self.market.as_mut(),
            ForecastType::UserRisk => self.user.as_mut(),
        }
    }

    /// True when no models are available at all.
    pub fn is_disabled(&self) -> bool {
        self.industry.is_none() && self.market.is_none() && self.user.is_none()
    }
}

impl std::fmt::Debug for ModelSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSuite")
            .field("industry", &self.industry.is_some())
            .field("market", &self.market.is_some())
            .field("user", &self.user.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(lag_1: f64, lag_7: f64, mean: f64, std: f64) -> FeatureRow {
        FeatureRow {
            lag_1,
            lag_7,
            rolling_mean: mean,
            rolling_std: std,
        }
    }

    fn linear_set(n: usize) -> TrainingSet {
        // Target is exactly 2*lag_1 + 5; the other features vary
        // independently so the normal equations stay full-rank.
        let mut set = TrainingSet::default();
        for i in 0..n {
            let lag_1 = i as f64;
            set.rows.push(row(
                lag_1,
                (lag_1 * 0.7).sin() * 10.0,
                (lag_1 * 1.3).cos() * 10.0,
                (lag_1 * 2.1).sin().abs() + 0.5,
            ));
            set.targets.push(2.0 * lag_1 + 5.0);
        }
        set
    }

    #[test]
    fn linear_regression_recovers_linear_relation() {
        let mut model = LinearRegression::new();
        model.fit(&linear_set(20));

        let prediction = model.predict(&row(10.0, 5.0, 10.0, 1.0));
        assert!((prediction - 25.0).abs() < 1e-6, "got {prediction}");
    }

    #[test]
    fn linear_regression_unfit_predicts_mean() {
        let model = LinearRegression::new();
        assert_eq!(model.predict(&row(10.0, 5.0, 10.0, 1.0)), 0.0);
    }

    #[test]
    fn linear_regression_singular_falls_back_to_mean() {
        // All rows identical: XᵀX is singular.
        let mut set = TrainingSet::default();
        for _ in 0..10 {
            set.rows.push(row(3.0, 3.0, 3.0, 0.0));
            set.targets.push(42.0);
        }
        let mut model = LinearRegression::new();
        model.fit(&set);
        assert!((model.predict(&row(3.0, 3.0, 3.0, 0.0)) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn stump_ensemble_learns_step_function() {
        let mut set = TrainingSet::default();
        for i in 0..30 {
            let lag_1 = i as f64;
            set.rows.push(row(lag_1, 0.0, 0.0, 0.0));
            set.targets.push(if lag_1 < 15.0 { 20.0 } else { 80.0 });
        }
        let mut model = StumpEnsemble::default();
        model.fit(&set);

        let low = model.predict(&row(5.0, 0.0, 0.0, 0.0));
        let high = model.predict(&row(25.0, 0.0, 0.0, 0.0));
        assert!(low < 40.0, "low side predicted {low}");
        assert!(high > 60.0, "high side predicted {high}");
    }

    #[test]
    fn stump_ensemble_constant_target_predicts_constant() {
        let mut set = TrainingSet::default();
        for i in 0..10 {
            set.rows.push(row(i as f64, 0.0, 0.0, 0.0));
            set.targets.push(55.0);
        }
        let mut model = StumpEnsemble::default();
        model.fit(&set);
        assert!((model.predict(&row(4.0, 0.0, 0.0, 0.0)) - 55.0).abs() < 1e-6);
    }

    #[test]
    fn standard_suite_has_all_models() {
        let mut suite = ModelSuite::standard();
        assert!(!suite.is_disabled());
        for forecast_type in ForecastType::ALL {
            assert!(suite.model_for(forecast_type).is_some());
        }
    }

    #[test]
    fn disabled_suite_has_none() {
        let mut suite = ModelSuite::disabled();
        assert!(suite.is_disabled());
        for forecast_type in ForecastType::ALL {
            assert!(suite.model_for(forecast_type).is_none());
        }
    }
}
