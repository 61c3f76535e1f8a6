//! Case-insensitive substring filtering over a fixed word list.
//!
//! Matching is plain containment on lowercased text. Query characters are
//! never interpreted as a pattern, so `"a.b"` only matches a literal `a.b`.

/// Positions in `words` whose lowercase form contains the lowercase query.
///
/// An empty query matches every word. Order follows `words`.
pub fn filter_indices(query: &str, words: &[String]) -> Vec<usize> {
    if query.is_empty() {
        return (0..words.len()).collect();
    }

    let needle = query.to_lowercase();
    words
        .iter()
        .enumerate()
        .filter(|(_, word)| word.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Every word matching `query`, in word-list order.
pub fn filter(query: &str, words: &[String]) -> Vec<String> {
    filter_indices(query, words)
        .into_iter()
        .map(|index| words[index].clone())
        .collect()
}

/// Case-sensitive exact membership.
pub fn contains_exact(text: &str, words: &[String]) -> bool {
    words.iter().any(|word| word == text)
}
