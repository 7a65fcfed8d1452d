//! Fuzzy candidate selection on top of [`levenshtein`].

use crate::distance::levenshtein;

/// Best candidate found by [`find_closest_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestMatch<'a> {
    pub candidate: &'a str,
    pub distance: usize,
}

/// True when `a` and `b` are within `max_distance` edits of each other.
pub fn fuzzy_match(a: &str, b: &str, max_distance: usize) -> bool {
    levenshtein(a, b) <= max_distance
}

/// Linear scan for the candidate closest to `target`.
///
/// Ties go to the earliest candidate. `None` when there are no candidates.
pub fn find_closest_match<'a, S: AsRef<str>>(
    target: &str,
    candidates: &'a [S],
) -> Option<ClosestMatch<'a>> {
    let mut best: Option<ClosestMatch<'a>> = None;
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let distance = levenshtein(target, candidate);
        if best.is_none_or(|current| distance < current.distance) {
            best = Some(ClosestMatch { candidate, distance });
        }
    }
    best
}

/// Edit budget for a name of this length (in chars).
///
/// Up to 4 chars: 1, 5–9 chars: 2, 10 and above: 3.
pub fn adaptive_threshold(s: &str) -> usize {
    match s.chars().count() {
        0..=4 => 1,
        5..=9 => 2,
        _ => 3,
    }
}

/// Closest candidate, accepted only within [`adaptive_threshold`] of `target`.
pub fn fuzzy_match_with_threshold<'a, S: AsRef<str>>(
    target: &str,
    candidates: &'a [S],
) -> Option<&'a str> {
    let closest = find_closest_match(target, candidates)?;
    (closest.distance <= adaptive_threshold(target)).then_some(closest.candidate)
}

/// Partial matching: first candidate that contains `target`, fuzzy-matches
/// it whole, or fuzzy-matches one of its `-`/`_`/`.` separated segments.
pub fn contains_fuzzy<'a, S: AsRef<str>>(
    target: &str,
    candidates: &'a [S],
    max_distance: usize,
) -> Option<&'a str> {
    let target_lower = target.to_lowercase();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let candidate_lower = candidate.to_lowercase();

        if candidate_lower.contains(&target_lower) || fuzzy_match(target, candidate, max_distance)
        {
            return Some(candidate);
        }

        let segment_hit = candidate_lower
            .split(['-', '_', '.'])
            .filter(|segment| !segment.is_empty())
            .any(|segment| fuzzy_match(target, segment, max_distance));
        if segment_hit {
            return Some(candidate);
        }
    }

    None
}

/// Lowercase and turn spaces and underscores into hyphens. Runs of
/// separators are kept as-is ("my  app" → "my--app").
pub fn normalize_spaces_to_hyphens(s: &str) -> String {
    s.replace([' ', '_'], "-").to_lowercase()
}
