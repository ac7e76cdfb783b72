//! Minority-cluster detection over risk-factor feature matrices.

/// Flags the most atypical rows of a boolean feature matrix.
///
/// Scores each row by Euclidean distance from the column-mean centroid and
/// flags the `ceil(n * contamination)` most distant rows. On the 0/1
/// factor vectors this surfaces the users whose factor combination least
/// resembles the population, which is the minority cluster the pattern
/// detector inspects.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyDetector {
    contamination: f64,
}

impl AnomalyDetector {
    /// Creates a detector; contamination is clamped to (0, 0.5].
    pub fn new(contamination: f64) -> Self {
        Self {
            contamination: if contamination.is_finite() {
                contamination.clamp(0.01, 0.5)
            } else {
                0.1
            },
        }
    }

    /// Returns the indices of flagged rows, most distant first.
    ///
    /// Empty input and single-row input yield no flags; one row has
    /// nothing to be atypical against.
    pub fn flag_outliers(&self, matrix: &[Vec<f64>]) -> Vec<usize> {
        let n = matrix.len();
        if n < 2 {
            return Vec::new();
        }
        let dims = matrix[0].len();
        if dims == 0 {
            return Vec::new();
        }

        let mut centroid = vec![0.0f64; dims];
        for row in matrix {
            for (c, v) in centroid.iter_mut().zip(row) {
                *c += v;
            }
        }
        for c in centroid.iter_mut() {
            *c /= n as f64;
        }

        let mut scored: Vec<(usize, f64)> = matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let dist = row
                    .iter()
                    .zip(&centroid)
                    .map(|(v, c)| (v - c).powi(2))
                    .sum::<f64>()
                    .sqrt();
                (i, dist)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let flag_count = ((n as f64 * self.contamination).ceil() as usize).min(n);
        scored
            .into_iter()
            .take(flag_count)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for AnomalyDetector {
    /// The standard 10% contamination rate.
    fn default() -> Self {
        Self::new(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_row_yield_no_flags() {
        let detector = AnomalyDetector::default();
        assert!(detector.flag_outliers(&[]).is_empty());
        assert!(detector.flag_outliers(&[vec![1.0, 0.0]]).is_empty());
    }

    #[test]
    fn flags_the_distant_row() {
        let mut matrix = vec![vec![1.0, 1.0, 0.0]; 9];
        matrix.push(vec![0.0, 0.0, 1.0]);

        let flagged = AnomalyDetector::default().flag_outliers(&matrix);
        assert_eq!(flagged, vec![9]);
    }

    #[test]
    fn flag_count_follows_contamination() {
        let matrix = vec![vec![1.0, 0.0]; 30];
        // ceil(30 * 0.1) = 3 even with identical rows.
        let flagged = AnomalyDetector::new(0.1).flag_outliers(&matrix);
        assert_eq!(flagged.len(), 3);

        let flagged = AnomalyDetector::new(0.2).flag_outliers(&matrix);
        assert_eq!(flagged.len(), 6);
    }

    #[test]
    fn contamination_is_clamped() {
        let matrix = vec![vec![1.0]; 10];
        let flagged = AnomalyDetector::new(5.0).flag_outliers(&matrix);
        assert_eq!(flagged.len(), 5);
    }
}
