use serde::{Deserialize, Serialize};

use crate::core::MatchMethod;
use crate::models::domain::{Dimension, FeatureVector, RoomMatch};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FindMatchesResponse<'a> {
    pub matches: Vec<RoomMatch<'a>>,
    pub method: MatchMethod,
    pub total_candidates: usize,
    pub filtered_out: usize,
}

/// One labelled vector component
#[derive(Debug, Clone, Serialize)]
pub struct NamedComponent {
    pub dimension: Dimension,
    pub value: f64,
}

/// Response for the vectorize endpoints
#[derive(Debug, Clone, Serialize)]
pub struct VectorResponse {
    pub weighted: bool,
    pub vector: FeatureVector,
    pub components: Vec<NamedComponent>,
}

impl VectorResponse {
    pub fn new(vector: FeatureVector, weighted: bool) -> Self {
        let components = Dimension::ALL
            .into_iter()
            .map(|dimension| NamedComponent {
                dimension,
                value: vector[dimension],
            })
            .collect();

        Self {
            weighted,
            vector,
            components,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
