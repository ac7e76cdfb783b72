//! Feature derivation from historical risk-score series.

use super::types::RiskObservation;

/// Size of the rolling window used for lag-7 and rolling statistics.
pub const WINDOW: usize = 7;

/// One derived feature row: lag and rolling-window statistics at a point
/// in the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    /// Previous score.
    pub lag_1: f64,
    /// Score WINDOW points back.
    pub lag_7: f64,
    /// Mean of the trailing WINDOW scores.
    pub rolling_mean: f64,
    /// Population standard deviation of the trailing WINDOW scores.
    pub rolling_std: f64,
}

impl FeatureRow {
    /// Returns the row as a fixed-order slice for model consumption.
    pub fn as_array(&self) -> [f64; 4] {
        [self.lag_1, self.lag_7, self.rolling_mean, self.rolling_std]
    }
}

/// Derived training data: one feature row per usable index, each paired
/// with the score it should predict.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    pub rows: Vec<FeatureRow>,
    pub targets: Vec<f64>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits chronologically into a training prefix and validation
    /// suffix; `train_fraction` of the rows (at least one) go to training.
    pub fn chronological_split(&self, train_fraction: f64) -> (TrainingSet, TrainingSet) {
        if self.is_empty() {
            return (TrainingSet::default(), TrainingSet::default());
        }
        let cut = ((self.len() as f64 * train_fraction) as usize).clamp(1, self.len());
        (
            TrainingSet {
                rows: self.rows[..cut].to_vec(),
                targets: self.targets[..cut].to_vec(),
            },
            TrainingSet {
                rows: self.rows[cut..].to_vec(),
                targets: self.targets[cut..].to_vec(),
            },
        )
    }
}

/// Builds the training set for a chronological series.
///
/// A row exists for every index with a full trailing window and a known
/// next score; series shorter than WINDOW + 1 yield an empty set.
pub fn training_set(series: &[RiskObservation]) -> TrainingSet {
    let scores: Vec<f64> = series.iter().map(|o| o.score).collect();
    let mut set = TrainingSet::default();
    if scores.len() < WINDOW + 1 {
        return set;
    }

    for i in WINDOW..scores.len() {
        let row = feature_row_at(&scores, i);
        // Target is the next score; the final index has none and instead
        // becomes the prediction row.
        if i + 1 < scores.len() {
            set.rows.push(row);
            set.targets.push(scores[i + 1]);
        }
    }
    set
}

/// Builds the feature row describing the latest point of the series,
/// used to predict the next (unobserved) score.
pub fn latest_features(series: &[RiskObservation]) -> Option<FeatureRow> {
    let scores: Vec<f64> = series.iter().map(|o| o.score).collect();
    if scores.len() < WINDOW + 1 {
        return None;
    }
    Some(feature_row_at(&scores, scores.len() - 1))
}

/// Population variance of the raw score series.
pub fn series_variance(series: &[RiskObservation]) -> f64 {
    let n = series.len();
    if n == 0 {
        return 0.0;
    }
    let mean = series.iter().map(|o| o.score).sum::<f64>() / n as f64;
    series
        .iter()
        .map(|o| (o.score - mean).powi(2))
        .sum::<f64>()
        / n as f64
}

fn feature_row_at(scores: &[f64], i: usize) -> FeatureRow {
    let window = &scores[i + 1 - WINDOW..=i];
    let mean = window.iter().sum::<f64>() / WINDOW as f64;
    let variance = window.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / WINDOW as f64;
    FeatureRow {
        lag_1: scores[i - 1],
        lag_7: scores[i - (WINDOW - 1) - 1],
        rolling_mean: mean,
        rolling_std: variance.sqrt(),
    }
}
