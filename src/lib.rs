//! HomieHub matching engine - roommate/room matching over weighted feature vectors
//!
//! User preference records and room listings are encoded into fixed 11-dimensional
//! vectors with a shared scheme. Rooms are ranked against a user by weighted
//! Euclidean distance or weighted cosine similarity, optionally after hard
//! filters on the strict constraints (gender, lease length).

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{explain_match, find_best_matches, CoordinateTable, MatchMethod, Matcher, Vectorizer};
pub use crate::error::MatchError;
pub use crate::models::{FeatureVector, MatchExplanation, RoomListing, RoomMatch, ScoringWeights, UserPreference};
