//! Per-attribute encoders shared by the user and room vectorizers.
//!
//! Every encoder produces a value in [0, 1]. Numeric attributes are linearly
//! normalized against a fixed range and clamped, so out-of-range inputs
//! saturate at the boundary instead of failing.

use geo::{Centroid, MultiPoint, Point};

use crate::models::{
    AlcoholHabit, Bathroom, Coordinate, FlatmateGender, FoodHabit, GenderPreference, RoomType,
    SmokeHabit,
};

/// Closed interval used for linear normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationRange {
    pub min: f64,
    pub max: f64,
}

impl NormalizationRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map `value` linearly onto [0, 1], saturating outside the range
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

pub const LATITUDE_RANGE: NormalizationRange = NormalizationRange::new(42.25, 42.45);
pub const LONGITUDE_RANGE: NormalizationRange = NormalizationRange::new(-71.20, -71.00);
pub const BUDGET_RANGE: NormalizationRange = NormalizationRange::new(500.0, 3000.0);
pub const LEASE_RANGE: NormalizationRange = NormalizationRange::new(1.0, 24.0);

/// Utility count at which the utilities dimension saturates
pub const UTILITIES_SATURATION: f64 = 4.0;

/// Encoding of a closed-vocabulary attribute onto [0, 1]
pub trait CategoricalEncoding {
    fn encode(&self) -> f64;
}

impl CategoricalEncoding for GenderPreference {
    fn encode(&self) -> f64 {
        match self {
            GenderPreference::Male => 0.0,
            GenderPreference::Female => 1.0,
            GenderPreference::Any | GenderPreference::Unrecognized => 0.5,
        }
    }
}

// Mixed households sit where "Any" sits on the user side.
impl CategoricalEncoding for FlatmateGender {
    fn encode(&self) -> f64 {
        match self {
            FlatmateGender::Male => 0.0,
            FlatmateGender::Female => 1.0,
            FlatmateGender::Mixed | FlatmateGender::Unrecognized => 0.5,
        }
    }
}

impl CategoricalEncoding for RoomType {
    fn encode(&self) -> f64 {
        match self {
            RoomType::Shared => 0.0,
            _ => 1.0,
        }
    }
}

impl CategoricalEncoding for Bathroom {
    fn encode(&self) -> f64 {
        match self {
            Bathroom::No => 0.0,
            _ => 1.0,
        }
    }
}

impl CategoricalEncoding for FoodHabit {
    fn encode(&self) -> f64 {
        match self {
            FoodHabit::Vegan => 0.0,
            FoodHabit::Vegetarian => 0.5,
            FoodHabit::Everything | FoodHabit::Unrecognized => 1.0,
        }
    }
}

impl CategoricalEncoding for AlcoholHabit {
    fn encode(&self) -> f64 {
        match self {
            AlcoholHabit::Never => 0.0,
            AlcoholHabit::Rarely => 0.25,
            AlcoholHabit::Occasionally | AlcoholHabit::Unrecognized => 0.5,
            AlcoholHabit::Regularly => 0.75,
            AlcoholHabit::Frequently => 1.0,
        }
    }
}

impl CategoricalEncoding for SmokeHabit {
    fn encode(&self) -> f64 {
        match self {
            SmokeHabit::No | SmokeHabit::Unrecognized => 0.0,
            SmokeHabit::OutsideOnly => 0.5,
            SmokeHabit::Yes => 1.0,
        }
    }
}

/// Normalized (latitude, longitude) pair
#[inline]
pub fn encode_location(coordinate: Coordinate) -> (f64, f64) {
    (
        LATITUDE_RANGE.normalize(coordinate.lat),
        LONGITUDE_RANGE.normalize(coordinate.lon),
    )
}

/// Arithmetic mean of a set of coordinates, `None` when empty
pub fn mean_coordinate<I>(coordinates: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let points: MultiPoint<f64> = coordinates
        .into_iter()
        .map(|c| Point::new(c.lon, c.lat))
        .collect();

    points.centroid().map(|p| Coordinate::new(p.y(), p.x()))
}

#[inline]
pub fn encode_budget(amount: f64) -> f64 {
    BUDGET_RANGE.normalize(amount)
}

#[inline]
pub fn encode_lease(months: u32) -> f64 {
    LEASE_RANGE.normalize(months as f64)
}

#[inline]
pub fn encode_utilities(count: usize) -> f64 {
    (count as f64 / UTILITIES_SATURATION).min(1.0)
}
