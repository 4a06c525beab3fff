use crate::core::{
    coordinates::CoordinateTable, distance::weighted_euclidean_distance, vectorizer::Vectorizer,
};
use crate::models::{
    Agreement, Dimension, DimensionBreakdown, MatchExplanation, RoomListing, ScoringWeights,
    UserPreference,
};

/// Break a user/room comparison down by dimension
///
/// Uses raw vectors for both sides; the overall figure is the weighted
/// Euclidean distance the matcher ranks by.
pub fn explain_match(
    user: &UserPreference,
    room: &RoomListing,
    coords: &CoordinateTable,
    weights: &ScoringWeights,
) -> MatchExplanation {
    let vectorizer = Vectorizer::new(coords);
    let user_vector = vectorizer.user(user);
    let room_vector = vectorizer.room(room);

    let dimensions = Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let weight = weights.weight(dimension);
            let user_value = user_vector[dimension];
            let room_value = room_vector[dimension];
            let difference = (user_value - room_value).abs();

            DimensionBreakdown {
                dimension,
                name: dimension.name(),
                weight,
                user_value,
                room_value,
                difference,
                weighted_difference: weight * difference,
                is_strict: weights.is_strict(dimension),
                priority: weights.priority(dimension),
                agreement: Agreement::from_difference(difference),
            }
        })
        .collect();

    MatchExplanation {
        overall_distance: weighted_euclidean_distance(&user_vector, &room_vector, weights),
        dimensions,
    }
}
