use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::{MatchingSettings, Settings};
use crate::core::{CoordinateTable, MatchMethod, Matcher, Vectorizer};
use crate::error::MatchError;
use crate::models::{
    ErrorResponse, ExplainRequest, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    VectorResponse, VectorizeRoomRequest, VectorizeUserRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub coords: Arc<CoordinateTable>,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self, MatchError> {
        Ok(Self {
            matcher: Matcher::new(settings.scoring.to_weights()?),
            coords: Arc::new(settings.coordinate_table()),
            matching: settings.matching.clone(),
        })
    }

    fn resolve_method(&self, method: Option<&str>) -> Result<MatchMethod, MatchError> {
        method.map_or(Ok(self.matching.default_method), str::parse)
    }

    fn resolve_top_k(&self, top_k: Option<usize>) -> usize {
        top_k
            .unwrap_or(self.matching.default_top_k)
            .min(self.matching.max_top_k)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            matcher: Matcher::with_default_weights(),
            coords: Arc::new(CoordinateTable::builtin().clone()),
            matching: MatchingSettings::default(),
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/tiered", web::post().to(find_tiered_matches))
        .route("/matches/explain", web::post().to(explain_match))
        .route("/vectors/user", web::post().to(vectorize_user))
        .route("/vectors/room", web::post().to(vectorize_room));
}

fn bad_request(error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "user": { "preferred_locations": ["Cambridge"], "budget_max": 1200 },
///   "rooms": [{ "room_id": "R001", "location": "Cambridge", "rent": 1100 }],
///   "top_k": 5,
///   "method": "euclidean",
///   "apply_filters": true
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", errors);
        return bad_request("Validation failed", errors);
    }

    let method = match state.resolve_method(req.method.as_deref()) {
        Ok(method) => method,
        Err(e) => {
            tracing::info!("Rejected find_matches request: {}", e);
            return bad_request("Invalid argument", e);
        }
    };
    let top_k = state.resolve_top_k(req.top_k);
    let apply_filters = req.apply_filters.unwrap_or(state.matching.apply_filters);

    let result = state.matcher.rank(
        &req.user,
        &req.rooms,
        &state.coords,
        top_k,
        method,
        apply_filters,
    );

    tracing::info!(
        "Returning {} matches for user {:?} (from {} rooms, {} filtered out)",
        result.matches.len(),
        req.user.user_id,
        result.total_candidates,
        result.filtered_out
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        method,
        total_candidates: result.total_candidates,
        filtered_out: result.filtered_out,
    })
}

/// Perfect and close matches
///
/// POST /api/v1/matches/tiered
///
/// Same body as `/matches/find`; `apply_filters` is ignored since the
/// strict constraints decide the tier.
async fn find_tiered_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let method = match state.resolve_method(req.method.as_deref()) {
        Ok(method) => method,
        Err(e) => return bad_request("Invalid argument", e),
    };
    let top_k = state.resolve_top_k(req.top_k);

    let tiers = state
        .matcher
        .find_tiered_matches(&req.user, &req.rooms, &state.coords, top_k, method);

    HttpResponse::Ok().json(tiers)
}

/// Per-dimension explanation of one user/room pair
///
/// POST /api/v1/matches/explain
async fn explain_match(
    state: web::Data<AppState>,
    req: web::Json<ExplainRequest>,
) -> impl Responder {
    let explanation = state.matcher.explain(&req.user, &req.room, &state.coords);

    tracing::debug!(
        "Explained user {:?} against room {:?}: distance {:.4}",
        req.user.user_id,
        req.room.room_id,
        explanation.overall_distance
    );

    HttpResponse::Ok().json(explanation)
}

/// POST /api/v1/vectors/user
async fn vectorize_user(
    state: web::Data<AppState>,
    req: web::Json<VectorizeUserRequest>,
) -> impl Responder {
    let mut vectorizer = Vectorizer::new(&state.coords);
    if req.weighted {
        vectorizer = vectorizer.weighted(state.matcher.weights());
    }

    HttpResponse::Ok().json(VectorResponse::new(vectorizer.user(&req.user), req.weighted))
}

/// POST /api/v1/vectors/room
async fn vectorize_room(
    state: web::Data<AppState>,
    req: web::Json<VectorizeRoomRequest>,
) -> impl Responder {
    let mut vectorizer = Vectorizer::new(&state.coords);
    if req.weighted {
        vectorizer = vectorizer.weighted(state.matcher.weights());
    }

    HttpResponse::Ok().json(VectorResponse::new(vectorizer.room(&req.room), req.weighted))
}
