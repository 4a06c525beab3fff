// Core algorithm exports
pub mod coordinates;
pub mod distance;
pub mod encoders;
pub mod explain;
pub mod filters;
pub mod matcher;
pub mod vectorizer;

pub use coordinates::{resolve, CoordinateTable};
pub use distance::{weighted_cosine_similarity, weighted_euclidean_distance, MatchMethod};
pub use encoders::CategoricalEncoding;
pub use explain::explain_match;
pub use filters::{apply_hard_filters, check_hard_filters, passes_hard_filters};
pub use matcher::{find_best_matches, MatchResult, Matcher};
pub use vectorizer::{vectorize_room, vectorize_user, Vectorizer};
