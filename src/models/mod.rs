// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Agreement, AlcoholHabit, Bathroom, CloseMatch, Coordinate, Dimension, DimensionBreakdown,
    FeatureVector, FilterViolation, FlatmateGender, FoodHabit, GenderPreference, MatchExplanation,
    Priority, RoomListing, RoomMatch, RoomType, ScoringWeights, SmokeHabit, TieredMatches,
    UserPreference, DEFAULT_BUDGET, DEFAULT_COORDINATE, DEFAULT_LEASE_MONTHS,
    DEFAULT_ROOM_LOCATION, DEFAULT_STRICT_WEIGHT_THRESHOLD, DIMENSIONS,
};
pub use requests::{ExplainRequest, FindMatchesRequest, VectorizeRoomRequest, VectorizeUserRequest};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, NamedComponent, VectorResponse,
};
