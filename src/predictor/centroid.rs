use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// Nearest-centroid classifier over scaled features.
///
/// Centroid `i` belongs to encoded class `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestCentroid {
    pub centroids: Vec<Vec<f64>>,
}

impl NearestCentroid {
    pub fn new(centroids: Vec<Vec<f64>>) -> Self {
        Self { centroids }
    }

    pub fn n_classes(&self) -> usize {
        self.centroids.len()
    }

    /// Index of the closest centroid by squared Euclidean distance. Ties go to
    /// the lower index.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (index, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != features.len() {
                return Err(RecommendError::FeatureMismatch {
                    expected: centroid.len(),
                    actual: features.len(),
                });
            }

            let distance: f64 = centroid
                .iter()
                .zip(features)
                .map(|(c, x)| (c - x) * (c - x))
                .sum();

            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }

        best.map(|(index, _)| index)
            .ok_or_else(|| RecommendError::InvalidModel("classifier has no centroids".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_nearest() {
        let classifier = NearestCentroid::new(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![0.0, 1.0]]);

        assert_eq!(classifier.predict(&[0.9, 0.8]).unwrap(), 1);
        assert_eq!(classifier.predict(&[0.1, 0.2]).unwrap(), 0);
        assert_eq!(classifier.predict(&[-0.1, 0.9]).unwrap(), 2);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let classifier = NearestCentroid::new(vec![vec![0.0], vec![2.0]]);
        assert_eq!(classifier.predict(&[1.0]).unwrap(), 0);
    }

    #[test]
    fn test_errors() {
        let empty = NearestCentroid::new(vec![]);
        assert!(matches!(empty.predict(&[1.0]), Err(RecommendError::InvalidModel(_))));

        let classifier = NearestCentroid::new(vec![vec![0.0, 0.0]]);
        assert!(matches!(
            classifier.predict(&[1.0]),
            Err(RecommendError::FeatureMismatch { .. })
        ));
    }
}
