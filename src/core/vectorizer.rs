use crate::core::coordinates::CoordinateTable;
use crate::core::encoders::{
    encode_budget, encode_lease, encode_location, encode_utilities, mean_coordinate,
    CategoricalEncoding,
};
use crate::models::{
    Coordinate, FeatureVector, RoomListing, ScoringWeights, UserPreference, DEFAULT_COORDINATE,
};

/// Builds feature vectors for users and rooms with one shared encoding scheme
///
/// The raw form keeps every component in [0, 1]. Attaching a weight profile with
/// [`Vectorizer::weighted`] switches to the weighted form used for precomputed
/// vectors.
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer<'a> {
    coords: &'a CoordinateTable,
    weights: Option<&'a ScoringWeights>,
}

impl<'a> Vectorizer<'a> {
    pub fn new(coords: &'a CoordinateTable) -> Self {
        Self {
            coords,
            weights: None,
        }
    }

    /// Raw vectorizer over the built-in neighborhood table
    pub fn with_builtin_table() -> Vectorizer<'static> {
        Vectorizer::new(CoordinateTable::builtin())
    }

    pub fn weighted(self, weights: &'a ScoringWeights) -> Self {
        Self {
            weights: Some(weights),
            ..self
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Vectorize a user's preferences
    ///
    /// Preferred locations are averaged; names missing from the table are
    /// skipped. With no resolvable name the default coordinate is used.
    pub fn user(&self, user: &UserPreference) -> FeatureVector {
        let location = mean_coordinate(
            user.preferred_locations
                .iter()
                .filter_map(|name| self.coords.lookup(name)),
        )
        .unwrap_or(DEFAULT_COORDINATE);

        self.assemble(
            location,
            [
                user.gender_preference.encode(),
                encode_budget(user.budget_max),
                encode_lease(user.lease_duration_months),
                user.room_type_preference.encode(),
                user.attached_bathroom.encode(),
                user.lifestyle_food.encode(),
                user.lifestyle_alcohol.encode(),
                user.lifestyle_smoke.encode(),
                encode_utilities(user.utilities_preference.len()),
            ],
        )
    }

    /// Vectorize a room listing
    ///
    /// Explicit `lat`/`lon` take precedence over the location name.
    pub fn room(&self, room: &RoomListing) -> FeatureVector {
        let location = room
            .explicit_coordinate()
            .unwrap_or_else(|| self.coords.resolve(&room.location));

        self.assemble(
            location,
            [
                room.flatmate_gender.encode(),
                encode_budget(room.rent),
                encode_lease(room.lease_duration_months),
                room.room_type.encode(),
                room.attached_bathroom.encode(),
                room.lifestyle_food.encode(),
                room.lifestyle_alcohol.encode(),
                room.lifestyle_smoke.encode(),
                encode_utilities(room.utilities_included.len()),
            ],
        )
    }

    fn assemble(&self, location: Coordinate, rest: [f64; 9]) -> FeatureVector {
        let (lat, lon) = encode_location(location);
        let [gender, budget, lease, room_type, bathroom, food, alcohol, smoke, utilities] = rest;

        let vector = FeatureVector::new([
            lat, lon, gender, budget, lease, room_type, bathroom, food, alcohol, smoke, utilities,
        ]);

        match self.weights {
            Some(weights) => vector.weighted(weights),
            None => vector,
        }
    }
}

/// Raw user vector
pub fn vectorize_user(user: &UserPreference, coords: &CoordinateTable) -> FeatureVector {
    Vectorizer::new(coords).user(user)
}

/// Raw room vector
pub fn vectorize_room(room: &RoomListing, coords: &CoordinateTable) -> FeatureVector {
    Vectorizer::new(coords).room(room)
}
