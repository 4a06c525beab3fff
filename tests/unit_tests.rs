// Unit tests for the HomieHub matching engine

use homie_match::core::{
    coordinates::CoordinateTable,
    distance::{weighted_cosine_similarity, weighted_euclidean_distance},
    encoders::{encode_budget, encode_lease, encode_location, BUDGET_RANGE},
    filters::{apply_hard_filters, check_hard_filters, passes_hard_filters},
    vectorizer::{vectorize_room, vectorize_user, Vectorizer},
};
use homie_match::models::{
    Coordinate, Dimension, FeatureVector, FilterViolation, FlatmateGender, GenderPreference,
    RoomListing, ScoringWeights, SmokeHabit, UserPreference, DEFAULT_COORDINATE, DIMENSIONS,
};
use homie_match::MatchError;

fn in_unit_range(vector: &FeatureVector) -> bool {
    vector.iter().all(|v| (0.0..=1.0).contains(&v))
}

#[test]
fn test_vector_shape_for_users_and_rooms() {
    let table = CoordinateTable::builtin();
    let user = vectorize_user(&UserPreference::default(), table);
    let room = vectorize_room(&RoomListing::default(), table);

    assert_eq!(user.as_slice().len(), DIMENSIONS);
    assert_eq!(room.as_slice().len(), DIMENSIONS);
    assert!(in_unit_range(&user));
    assert!(in_unit_range(&room));
}

#[test]
fn test_dimension_correspondence() {
    // Same attributes expressed on both sides must land on the same values
    let user = UserPreference {
        preferred_locations: vec!["Fenway".to_string()],
        gender_preference: GenderPreference::Female,
        budget_max: 1750.0,
        lease_duration_months: 9,
        lifestyle_smoke: SmokeHabit::OutsideOnly,
        utilities_preference: ["Heat", "Gas", "Internet"].iter().map(|s| s.to_string()).collect(),
        ..UserPreference::default()
    };
    let room = RoomListing {
        location: "Fenway".to_string(),
        flatmate_gender: FlatmateGender::Female,
        rent: 1750.0,
        lease_duration_months: 9,
        lifestyle_smoke: SmokeHabit::OutsideOnly,
        utilities_included: ["Water", "Electricity", "Trash"].iter().map(|s| s.to_string()).collect(),
        ..RoomListing::default()
    };

    let table = CoordinateTable::builtin();
    let user_vector = vectorize_user(&user, table);
    let room_vector = vectorize_room(&room, table);

    for dimension in Dimension::ALL {
        assert_eq!(
            user_vector[dimension], room_vector[dimension],
            "{} differs",
            dimension.name()
        );
    }
}

#[test]
fn test_clamping_of_numeric_dimensions() {
    let table = CoordinateTable::builtin();

    let low = UserPreference {
        budget_max: 100.0,
        lease_duration_months: 0,
        ..UserPreference::default()
    };
    let high = RoomListing {
        rent: 9000.0,
        lease_duration_months: 48,
        lat: Some(43.0),
        lon: Some(-70.0),
        ..RoomListing::default()
    };
    let far_south_west = RoomListing {
        lat: Some(41.0),
        lon: Some(-72.0),
        ..RoomListing::default()
    };

    let low_vector = vectorize_user(&low, table);
    assert_eq!(low_vector[Dimension::Budget], 0.0);
    assert_eq!(low_vector[Dimension::LeaseDuration], 0.0);

    let high_vector = vectorize_room(&high, table);
    assert_eq!(high_vector[Dimension::Budget], 1.0);
    assert_eq!(high_vector[Dimension::LeaseDuration], 1.0);
    assert_eq!(high_vector[Dimension::Latitude], 1.0);
    assert_eq!(high_vector[Dimension::Longitude], 1.0);

    let far_vector = vectorize_room(&far_south_west, table);
    assert_eq!(far_vector[Dimension::Latitude], 0.0);
    assert_eq!(far_vector[Dimension::Longitude], 0.0);
}

#[test]
fn test_budget_range_endpoints() {
    assert_eq!(encode_budget(BUDGET_RANGE.min), 0.0);
    assert_eq!(encode_budget(BUDGET_RANGE.max), 1.0);
    assert!((encode_lease(12) - 11.0 / 23.0).abs() < 1e-12);
}

#[test]
fn test_unresolvable_location_falls_back_to_default() {
    let user = UserPreference {
        preferred_locations: vec!["Narnia".to_string()],
        ..UserPreference::default()
    };

    let vector = vectorize_user(&user, CoordinateTable::builtin());
    let (lat, lon) = encode_location(DEFAULT_COORDINATE);

    assert_eq!(vector[Dimension::Latitude], lat);
    assert_eq!(vector[Dimension::Longitude], lon);
}

#[test]
fn test_unknown_room_location_falls_back_to_default() {
    let room = RoomListing {
        location: "Narnia".to_string(),
        ..RoomListing::default()
    };

    let vector = vectorize_room(&room, &CoordinateTable::new());
    let (lat, lon) = encode_location(DEFAULT_COORDINATE);

    assert_eq!(vector[Dimension::Latitude], lat);
    assert_eq!(vector[Dimension::Longitude], lon);
}

#[test]
fn test_weighted_vectorizer_uses_profile() {
    let weights = ScoringWeights::default();
    let table = CoordinateTable::builtin();
    let vectorizer = Vectorizer::new(table).weighted(&weights);
    let room = RoomListing {
        flatmate_gender: FlatmateGender::Female,
        ..RoomListing::default()
    };

    let vector = vectorizer.room(&room);

    assert!(vectorizer.is_weighted());
    assert_eq!(vector[Dimension::Gender], 4.0);
}

#[test]
fn test_weight_profile_validation() {
    let mut values = ScoringWeights::DEFAULT_VALUES;
    values[7] = -1.0;

    assert!(matches!(
        ScoringWeights::new(values, 4.0),
        Err(MatchError::InvalidWeights(_))
    ));
    assert!(ScoringWeights::new(ScoringWeights::DEFAULT_VALUES, f64::NAN).is_err());
    assert_eq!(
        ScoringWeights::new(ScoringWeights::DEFAULT_VALUES, 4.0),
        Ok(ScoringWeights::default())
    );
}

#[test]
fn test_strict_dimensions_follow_threshold() {
    let weights = ScoringWeights::default();
    assert_eq!(
        weights.strict_dimensions(),
        vec![Dimension::Gender, Dimension::LeaseDuration]
    );

    let lenient = ScoringWeights::new(ScoringWeights::DEFAULT_VALUES, 3.0).unwrap();
    assert_eq!(lenient.strict_dimensions().len(), 5);
}

#[test]
fn test_hard_filter_scenario_female_user_male_room() {
    let user = UserPreference {
        gender_preference: GenderPreference::Female,
        lease_duration_months: 12,
        ..UserPreference::default()
    };
    let room = RoomListing {
        flatmate_gender: FlatmateGender::Male,
        lease_duration_months: 12,
        ..RoomListing::default()
    };

    assert!(!passes_hard_filters(&user, &room));
    assert!(apply_hard_filters(&user, std::slice::from_ref(&room)).is_empty());
    assert_eq!(check_hard_filters(&user, &room).len(), 1);
}

#[test]
fn test_lease_violation_reason() {
    let user = UserPreference {
        lease_duration_months: 12,
        ..UserPreference::default()
    };
    let room = RoomListing {
        lease_duration_months: 10,
        ..RoomListing::default()
    };

    assert_eq!(
        check_hard_filters(&user, &room),
        vec![FilterViolation::Lease {
            offered: 10,
            required: 12
        }]
    );
}

#[test]
fn test_rent_only_difference_distance() {
    let user = UserPreference {
        preferred_locations: vec!["Back Bay".to_string()],
        budget_max: 1200.0,
        ..UserPreference::default()
    };
    let room = RoomListing {
        location: "Back Bay".to_string(),
        rent: 1100.0,
        ..RoomListing::default()
    };

    let table = CoordinateTable::builtin();
    let distance = weighted_euclidean_distance(
        &vectorize_user(&user, table),
        &vectorize_room(&room, table),
        &ScoringWeights::default(),
    );

    assert!((distance - 0.12).abs() < 1e-9, "got {}", distance);
}

#[test]
fn test_cosine_similarity_bounds() {
    let table = CoordinateTable::builtin();
    let user = vectorize_user(&UserPreference::default(), table);
    let room = vectorize_room(
        &RoomListing {
            location: "Allston".to_string(),
            rent: 2900.0,
            ..RoomListing::default()
        },
        table,
    );

    let similarity = weighted_cosine_similarity(&user, &room, &ScoringWeights::default());

    assert!(similarity > 0.0 && similarity <= 1.0 + 1e-12);
}

#[test]
fn test_custom_coordinate_table() {
    let mut table = CoordinateTable::new();
    table.insert("Home", Coordinate::new(42.35, -71.10));

    let user = UserPreference {
        preferred_locations: vec!["Home".to_string()],
        ..UserPreference::default()
    };
    let vector = vectorize_user(&user, &table);

    assert!((vector[Dimension::Latitude] - 0.5).abs() < 1e-9);
    assert!((vector[Dimension::Longitude] - 0.5).abs() < 1e-9);
}
