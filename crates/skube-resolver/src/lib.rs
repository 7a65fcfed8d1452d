//! Resource-name resolution for skube.
//!
//! Maps loosely typed names ("web server", "stagign") onto the names a
//! cluster actually uses. Built from four layers: Levenshtein distance,
//! fuzzy candidate selection with an adaptive threshold, naming-convention
//! variants, and the corpus-backed `ResourceResolver`. The `cache` module
//! reads the corpus files the pattern learner leaves on disk.

pub mod cache;
pub mod distance;
pub mod error;
pub mod fuzzy;
pub mod naming;
pub mod resolver;

// Re-export key types for convenience
pub use cache::{CACHE_TTL_HOURS, PatternsCache, config_dir, sanitize_context_name};
pub use distance::levenshtein;
pub use error::{PatternsError, PatternsResult};
pub use fuzzy::{
    ClosestMatch, adaptive_threshold, contains_fuzzy, find_closest_match, fuzzy_match,
    fuzzy_match_with_threshold, normalize_spaces_to_hyphens,
};
pub use naming::naming_variants;
pub use resolver::ResourceResolver;
