use rayon::prelude::*;

use crate::core::{
    coordinates::CoordinateTable,
    distance::MatchMethod,
    explain::explain_match,
    filters::{apply_hard_filters, check_hard_filters},
    vectorizer::Vectorizer,
};
use crate::error::Result;
use crate::models::{
    CloseMatch, FeatureVector, MatchExplanation, RoomListing, RoomMatch, ScoringWeights,
    TieredMatches, UserPreference,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<RoomMatch<'a>>,
    pub total_candidates: usize,
    pub filtered_out: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Hard filters on strict constraints (gender, lease), when enabled
/// 2. Vectorization of the user once and of each surviving room
/// 3. Weighted scoring and stable ranking
/// 4. Truncation to the requested number of results
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank rooms for a user and report candidate counts
    ///
    /// # Arguments
    /// * `user` - The user's preferences
    /// * `rooms` - Room catalog, in caller order
    /// * `coords` - Location table used to resolve names
    /// * `top_k` - Maximum number of matches to return
    /// * `method` - Scoring method
    /// * `apply_filters` - Whether strict constraints exclude rooms before scoring
    pub fn rank<'a>(
        &self,
        user: &UserPreference,
        rooms: &'a [RoomListing],
        coords: &CoordinateTable,
        top_k: usize,
        method: MatchMethod,
        apply_filters: bool,
    ) -> MatchResult<'a> {
        let total_candidates = rooms.len();

        let candidates: Vec<&RoomListing> = if apply_filters {
            apply_hard_filters(user, rooms)
        } else {
            rooms.iter().collect()
        };
        let filtered_out = total_candidates - candidates.len();

        tracing::debug!(
            "Scoring {} of {} rooms with {} ({} removed by hard filters)",
            candidates.len(),
            total_candidates,
            method,
            filtered_out
        );

        if candidates.is_empty() {
            return MatchResult {
                matches: Vec::new(),
                total_candidates,
                filtered_out,
            };
        }

        let vectorizer = Vectorizer::new(coords);
        let user_vector = vectorizer.user(user);

        let mut matches = self.score_rooms(&vectorizer, &user_vector, candidates, method);
        sort_matches(&mut matches, method);
        matches.truncate(top_k);

        MatchResult {
            matches,
            total_candidates,
            filtered_out,
        }
    }

    /// Find the `top_k` best rooms for a user, best first
    pub fn find_best_matches<'a>(
        &self,
        user: &UserPreference,
        rooms: &'a [RoomListing],
        coords: &CoordinateTable,
        top_k: usize,
        method: MatchMethod,
        apply_filters: bool,
    ) -> Vec<RoomMatch<'a>> {
        self.rank(user, rooms, coords, top_k, method, apply_filters)
            .matches
    }

    /// Rank rooms into perfect matches and close matches that fail a strict constraint
    ///
    /// Each tier holds at most `top_k` rooms.
    pub fn find_tiered_matches<'a>(
        &self,
        user: &UserPreference,
        rooms: &'a [RoomListing],
        coords: &CoordinateTable,
        top_k: usize,
        method: MatchMethod,
    ) -> TieredMatches<'a> {
        let vectorizer = Vectorizer::new(coords);
        let user_vector = vectorizer.user(user);

        let mut ranked =
            self.score_rooms(&vectorizer, &user_vector, rooms.iter().collect(), method);
        sort_matches(&mut ranked, method);

        let mut perfect = Vec::new();
        let mut close = Vec::new();

        for RoomMatch { room, score } in ranked {
            let violations = check_hard_filters(user, room);
            if violations.is_empty() {
                if perfect.len() < top_k {
                    perfect.push(RoomMatch { room, score });
                }
            } else if close.len() < top_k {
                close.push(CloseMatch {
                    room,
                    score,
                    violations,
                });
            }
        }

        tracing::debug!(
            "Tiered {} rooms: {} perfect, {} close",
            rooms.len(),
            perfect.len(),
            close.len()
        );

        TieredMatches { perfect, close }
    }

    /// Per-dimension breakdown of one user/room comparison
    pub fn explain(
        &self,
        user: &UserPreference,
        room: &RoomListing,
        coords: &CoordinateTable,
    ) -> MatchExplanation {
        explain_match(user, room, coords, &self.weights)
    }

    // Order-preserving parallel map; ranking stays deterministic.
    fn score_rooms<'a>(
        &self,
        vectorizer: &Vectorizer<'_>,
        user_vector: &FeatureVector,
        candidates: Vec<&'a RoomListing>,
        method: MatchMethod,
    ) -> Vec<RoomMatch<'a>> {
        candidates
            .into_par_iter()
            .map(|room| {
                let room_vector = vectorizer.room(room);
                RoomMatch {
                    room,
                    score: method.score(user_vector, &room_vector, &self.weights),
                }
            })
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Stable sort, best first; ties keep catalog order
fn sort_matches(matches: &mut [RoomMatch<'_>], method: MatchMethod) {
    if method.lower_is_better() {
        matches.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    } else {
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

/// Rank rooms with the default weight profile, selecting the method by name
///
/// Fails with [`MatchError::InvalidArgument`](crate::error::MatchError) for any
/// method other than `"euclidean"` or `"cosine"`.
pub fn find_best_matches<'a>(
    user: &UserPreference,
    rooms: &'a [RoomListing],
    coords: &CoordinateTable,
    top_k: usize,
    method: &str,
    apply_filters: bool,
) -> Result<Vec<RoomMatch<'a>>> {
    let method: MatchMethod = method.parse()?;
    Ok(Matcher::with_default_weights().find_best_matches(
        user,
        rooms,
        coords,
        top_k,
        method,
        apply_filters,
    ))
}
