//! Typo-correction suggestions for vocabulary mismatches.

/// Computes the Levenshtein edit distance between two strings.
///
/// Classic dynamic-programming formulation over two rolling rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns the vocabulary entry closest to `input` by edit distance.
///
/// Ties break on the first entry in declaration order achieving the
/// minimum, so suggestions are stable across calls.
pub fn closest_match(vocabulary: &'static [&'static str], input: &str) -> Option<&'static str> {
    vocabulary
        .iter()
        .map(|candidate| (levenshtein(input, candidate), *candidate))
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate)
}
