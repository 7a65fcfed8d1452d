//! Levenshtein edit distance.

/// Case-insensitive Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1. Works on `char`s,
/// so multi-byte characters count as one edit. Keeps two rows of the DP
/// table sized to the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Columns track the shorter string; distance is symmetric.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous_row: Vec<usize> = (0..=short.len()).collect();
    let mut current_row: Vec<usize> = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        current_row[0] = i + 1;

        for (j, short_char) in short.iter().enumerate() {
            let cost = usize::from(long_char != short_char);
            let insertion = current_row[j] + 1;
            let deletion = previous_row[j + 1] + 1;
            let substitution = previous_row[j] + cost;
            current_row[j + 1] = insertion.min(deletion).min(substitution);
        }

        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[short.len()]
}
