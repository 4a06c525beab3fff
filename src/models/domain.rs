use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Index;

use crate::error::{MatchError, Result};

/// Number of positions in every feature vector
pub const DIMENSIONS: usize = 11;

/// Weights at or above this value mark a dimension as strict
pub const DEFAULT_STRICT_WEIGHT_THRESHOLD: f64 = 4.0;

/// Boston downtown, used whenever a location cannot be resolved
pub const DEFAULT_COORDINATE: Coordinate = Coordinate {
    lat: 42.3601,
    lon: -71.0589,
};

/// Default location name for rooms without one
pub const DEFAULT_ROOM_LOCATION: &str = "Boston";

pub const DEFAULT_BUDGET: f64 = 1500.0;
pub const DEFAULT_LEASE_MONTHS: u32 = 12;

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

// Closed vocabularies. Values outside a vocabulary deserialize to
// `Unrecognized` and are echoed back as "Unrecognized"; the raw string is
// not kept.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderPreference {
    Male,
    Female,
    #[default]
    Any,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlatmateGender {
    Male,
    Female,
    #[default]
    Mixed,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomType {
    #[default]
    Shared,
    Private,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bathroom {
    Yes,
    #[default]
    No,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodHabit {
    Vegan,
    Vegetarian,
    #[default]
    Everything,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlcoholHabit {
    Never,
    Rarely,
    #[default]
    Occasionally,
    Regularly,
    Frequently,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmokeHabit {
    #[default]
    No,
    #[serde(rename = "Outside Only")]
    OutsideOnly,
    Yes,
    #[serde(other)]
    Unrecognized,
}

/// Cleaned preference record of someone looking for a room
///
/// Missing keys take the documented defaults (see `Default`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub preferred_locations: Vec<String>,
    pub gender_preference: GenderPreference,
    pub budget_max: f64,
    pub lease_duration_months: u32,
    pub room_type_preference: RoomType,
    pub attached_bathroom: Bathroom,
    pub lifestyle_food: FoodHabit,
    pub lifestyle_alcohol: AlcoholHabit,
    pub lifestyle_smoke: SmokeHabit,
    pub utilities_preference: BTreeSet<String>,
}

impl Default for UserPreference {
    fn default() -> Self {
        Self {
            user_id: None,
            name: None,
            gender: None,
            preferred_locations: Vec::new(),
            gender_preference: GenderPreference::default(),
            budget_max: DEFAULT_BUDGET,
            lease_duration_months: DEFAULT_LEASE_MONTHS,
            room_type_preference: RoomType::default(),
            attached_bathroom: Bathroom::default(),
            lifestyle_food: FoodHabit::default(),
            lifestyle_alcohol: AlcoholHabit::default(),
            lifestyle_smoke: SmokeHabit::default(),
            utilities_preference: BTreeSet::new(),
        }
    }
}

/// Cleaned room listing record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub flatmate_gender: FlatmateGender,
    pub rent: f64,
    pub lease_duration_months: u32,
    pub room_type: RoomType,
    pub attached_bathroom: Bathroom,
    pub lifestyle_food: FoodHabit,
    pub lifestyle_alcohol: AlcoholHabit,
    pub lifestyle_smoke: SmokeHabit,
    pub utilities_included: BTreeSet<String>,
}

impl RoomListing {
    /// Explicit coordinate, present only when both `lat` and `lon` are set
    pub fn explicit_coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}

impl Default for RoomListing {
    fn default() -> Self {
        Self {
            room_id: None,
            location: DEFAULT_ROOM_LOCATION.to_string(),
            lat: None,
            lon: None,
            flatmate_gender: FlatmateGender::default(),
            rent: DEFAULT_BUDGET,
            lease_duration_months: DEFAULT_LEASE_MONTHS,
            room_type: RoomType::default(),
            attached_bathroom: Bathroom::default(),
            lifestyle_food: FoodHabit::default(),
            lifestyle_alcohol: AlcoholHabit::default(),
            lifestyle_smoke: SmokeHabit::default(),
            utilities_included: BTreeSet::new(),
        }
    }
}

/// Position in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Latitude,
    Longitude,
    Gender,
    Budget,
    LeaseDuration,
    RoomType,
    Bathroom,
    Food,
    Alcohol,
    Smoke,
    Utilities,
}

impl Dimension {
    /// All dimensions in vector order
    pub const ALL: [Dimension; DIMENSIONS] = [
        Dimension::Latitude,
        Dimension::Longitude,
        Dimension::Gender,
        Dimension::Budget,
        Dimension::LeaseDuration,
        Dimension::RoomType,
        Dimension::Bathroom,
        Dimension::Food,
        Dimension::Alcohol,
        Dimension::Smoke,
        Dimension::Utilities,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Latitude => "Latitude",
            Dimension::Longitude => "Longitude",
            Dimension::Gender => "Gender",
            Dimension::Budget => "Budget",
            Dimension::LeaseDuration => "Lease Duration",
            Dimension::RoomType => "Room Type",
            Dimension::Bathroom => "Bathroom",
            Dimension::Food => "Food",
            Dimension::Alcohol => "Alcohol",
            Dimension::Smoke => "Smoke",
            Dimension::Utilities => "Utilities",
        }
    }
}

/// Fixed-order 11-dimensional embedding of a user or room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; DIMENSIONS]);

impl FeatureVector {
    pub fn new(values: [f64; DIMENSIONS]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; DIMENSIONS] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Elementwise product with the weight profile
    pub fn weighted(&self, weights: &ScoringWeights) -> FeatureVector {
        let mut values = self.0;
        for (value, weight) in values.iter_mut().zip(weights.values()) {
            *value *= weight;
        }
        Self(values)
    }

    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

impl Index<Dimension> for FeatureVector {
    type Output = f64;

    fn index(&self, dimension: Dimension) -> &f64 {
        &self.0[dimension.index()]
    }
}

/// Importance tier derived from a dimension's weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Strict,
    High,
    Medium,
    Low,
}

/// Per-dimension weight profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    values: [f64; DIMENSIONS],
    strict_threshold: f64,
}

impl ScoringWeights {
    pub const DEFAULT_VALUES: [f64; DIMENSIONS] =
        [3.0, 3.0, 4.0, 3.0, 4.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0];

    /// Build a profile, rejecting non-positive or non-finite values
    pub fn new(values: [f64; DIMENSIONS], strict_threshold: f64) -> Result<Self> {
        if let Some((i, w)) = values
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(MatchError::InvalidWeights(format!(
                "weight for {} must be a positive number, got {}",
                Dimension::ALL[i].name(),
                w
            )));
        }
        if !strict_threshold.is_finite() || strict_threshold <= 0.0 {
            return Err(MatchError::InvalidWeights(format!(
                "strict threshold must be a positive number, got {}",
                strict_threshold
            )));
        }

        Ok(Self {
            values,
            strict_threshold,
        })
    }

    pub fn values(&self) -> &[f64; DIMENSIONS] {
        &self.values
    }

    #[inline]
    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }

    pub fn strict_threshold(&self) -> f64 {
        self.strict_threshold
    }

    #[inline]
    pub fn is_strict(&self, dimension: Dimension) -> bool {
        self.weight(dimension) >= self.strict_threshold
    }

    pub fn priority(&self, dimension: Dimension) -> Priority {
        let weight = self.weight(dimension);
        if weight >= self.strict_threshold {
            Priority::Strict
        } else if weight >= 3.0 {
            Priority::High
        } else if weight >= 2.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn strict_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.is_strict(*d))
            .collect()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            values: Self::DEFAULT_VALUES,
            strict_threshold: DEFAULT_STRICT_WEIGHT_THRESHOLD,
        }
    }
}

/// A strict constraint a room fails for a given user
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "constraint", rename_all = "snake_case")]
pub enum FilterViolation {
    Gender {
        wanted: GenderPreference,
        offered: FlatmateGender,
    },
    Lease {
        offered: u32,
        required: u32,
    },
}

/// Ranked room with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomMatch<'a> {
    pub room: &'a RoomListing,
    pub score: f64,
}

/// Room that ranks well but fails at least one strict constraint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseMatch<'a> {
    pub room: &'a RoomListing,
    pub score: f64,
    pub violations: Vec<FilterViolation>,
}

/// Ranking split into rooms that pass every strict constraint and rooms that do not
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieredMatches<'a> {
    pub perfect: Vec<RoomMatch<'a>>,
    pub close: Vec<CloseMatch<'a>>,
}

/// How closely two raw values agree on one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Agreement {
    Match,
    Close,
    Differs,
}

impl Agreement {
    pub fn from_difference(difference: f64) -> Self {
        if difference < 0.1 {
            Agreement::Match
        } else if difference < 0.3 {
            Agreement::Close
        } else {
            Agreement::Differs
        }
    }
}

/// One row of a match explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    pub name: &'static str,
    pub weight: f64,
    pub user_value: f64,
    pub room_value: f64,
    pub difference: f64,
    pub weighted_difference: f64,
    pub is_strict: bool,
    pub priority: Priority,
    pub agreement: Agreement,
}

/// Per-dimension decomposition of a single user/room comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchExplanation {
    pub overall_distance: f64,
    pub dimensions: Vec<DimensionBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vocabulary_echoes_as_unrecognized() {
        let room: RoomListing = serde_json::from_str(
            r#"{"lifestyle_food": "Pescatarian", "lifestyle_smoke": "Outside Only"}"#,
        )
        .unwrap();

        assert_eq!(room.lifestyle_food, FoodHabit::Unrecognized);
        assert_eq!(room.lifestyle_smoke, SmokeHabit::OutsideOnly);

        let echoed = serde_json::to_value(&room).unwrap();
        assert_eq!(echoed["lifestyle_food"], "Unrecognized");
        assert_eq!(echoed["lifestyle_smoke"], "Outside Only");
    }

    #[test]
    fn test_default_weights_strict_dimensions() {
        let weights = ScoringWeights::default();

        assert_eq!(weights.strict_threshold(), DEFAULT_STRICT_WEIGHT_THRESHOLD);
        assert_eq!(
            weights.strict_dimensions(),
            vec![Dimension::Gender, Dimension::LeaseDuration]
        );
    }
}
