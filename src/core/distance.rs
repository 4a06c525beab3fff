use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;
use crate::models::{FeatureVector, ScoringWeights};

/// Scoring method used to rank rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// Weighted Euclidean distance, lower is better
    #[default]
    Euclidean,
    /// Weighted cosine similarity, higher is better
    Cosine,
}

impl MatchMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMethod::Euclidean => "euclidean",
            MatchMethod::Cosine => "cosine",
        }
    }

    #[inline]
    pub fn lower_is_better(self) -> bool {
        matches!(self, MatchMethod::Euclidean)
    }

    #[inline]
    pub fn score(self, user: &FeatureVector, room: &FeatureVector, weights: &ScoringWeights) -> f64 {
        match self {
            MatchMethod::Euclidean => weighted_euclidean_distance(user, room, weights),
            MatchMethod::Cosine => weighted_cosine_similarity(user, room, weights),
        }
    }
}

impl FromStr for MatchMethod {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(MatchMethod::Euclidean),
            "cosine" => Ok(MatchMethod::Cosine),
            other => Err(MatchError::InvalidArgument(format!(
                "method must be 'euclidean' or 'cosine', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted Euclidean distance: `sqrt(Σ (w_i * (u_i - r_i))^2)`
#[inline]
pub fn weighted_euclidean_distance(
    user: &FeatureVector,
    room: &FeatureVector,
    weights: &ScoringWeights,
) -> f64 {
    user.iter()
        .zip(room.iter())
        .zip(weights.values())
        .map(|((u, r), w)| {
            let d = w * (u - r);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Weighted cosine similarity
///
/// Returns 0.0 when either weighted vector has zero magnitude; feature values
/// are non-negative, so that is the lowest similarity attainable.
#[inline]
pub fn weighted_cosine_similarity(
    user: &FeatureVector,
    room: &FeatureVector,
    weights: &ScoringWeights,
) -> f64 {
    let weighted_user = user.weighted(weights);
    let weighted_room = room.weighted(weights);

    let magnitude = weighted_user.magnitude() * weighted_room.magnitude();
    if magnitude == 0.0 {
        return 0.0;
    }

    let dot: f64 = weighted_user
        .iter()
        .zip(weighted_room.iter())
        .map(|(u, r)| u * r)
        .sum();

    dot / magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DIMENSIONS;

    #[test]
    fn test_identical_vectors() {
        let weights = ScoringWeights::default();
        let v = FeatureVector::new([0.5; DIMENSIONS]);

        assert_eq!(weighted_euclidean_distance(&v, &v, &weights), 0.0);
        assert!((weighted_cosine_similarity(&v, &v, &weights) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_applies_weight_before_squaring() {
        let weights = ScoringWeights::default();
        let mut values = [0.0; DIMENSIONS];
        let user = FeatureVector::new(values);
        // Only the gender dimension (weight 4) differs
        values[2] = 0.5;
        let room = FeatureVector::new(values);

        let distance = weighted_euclidean_distance(&user, &room, &weights);

        assert!((distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_guard() {
        let weights = ScoringWeights::default();
        let zero = FeatureVector::new([0.0; DIMENSIONS]);
        let other = FeatureVector::new([1.0; DIMENSIONS]);

        assert_eq!(weighted_cosine_similarity(&zero, &other, &weights), 0.0);
        assert_eq!(weighted_cosine_similarity(&other, &zero, &weights), 0.0);
        assert_eq!(weighted_cosine_similarity(&zero, &zero, &weights), 0.0);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let weights = ScoringWeights::default();
        let mut a = [0.0; DIMENSIONS];
        let mut b = [0.0; DIMENSIONS];
        a[0] = 1.0;
        b[1] = 1.0;

        let similarity =
            weighted_cosine_similarity(&FeatureVector::new(a), &FeatureVector::new(b), &weights);

        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("euclidean".parse::<MatchMethod>(), Ok(MatchMethod::Euclidean));
        assert_eq!("cosine".parse::<MatchMethod>(), Ok(MatchMethod::Cosine));
        assert!(matches!(
            "manhattan".parse::<MatchMethod>(),
            Err(MatchError::InvalidArgument(_))
        ));
        assert!("Cosine".parse::<MatchMethod>().is_err());
    }
}
