//! English stopword list used by the tokenizer.

/// Stopwords removed before vectorization.
///
/// Compact English list covering determiners, pronouns, auxiliaries,
/// conjunctions, and common prepositions.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me",
    "might", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "out", "over", "own", "same", "shall", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your", "yours",
];

/// Membership check against [`STOP_WORDS`].
///
/// The list is sorted, so lookup is a binary search.
pub fn is_stopword(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_sorted() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn test_common_words_are_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("is"));
        assert!(is_stopword("with"));
    }

    #[test]
    fn test_content_words_are_not_stopwords() {
        assert!(!is_stopword("neodymium"));
        assert!(!is_stopword("magnet"));
        assert!(!is_stopword("catalyst"));
    }
}
