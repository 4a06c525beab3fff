use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{RoomListing, UserPreference};

/// Request to rank a room catalog for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub user: UserPreference,
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub rooms: Vec<RoomListing>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub apply_filters: Option<bool>,
}

/// Request to explain a single user/room comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub user: UserPreference,
    pub room: RoomListing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizeUserRequest {
    pub user: UserPreference,
    #[serde(default)]
    pub weighted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizeRoomRequest {
    pub room: RoomListing,
    #[serde(default)]
    pub weighted: bool,
}
