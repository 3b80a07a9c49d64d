//! Built-in English stop words.

/// Sorted and deduplicated. `WordFilter` loads these into its hash set.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "being", "between", "both", "but", "by", "can", "could", "did", "do", "does", "during",
    "each", "for", "from", "had", "has", "have", "he", "her", "his", "how", "i", "if", "in",
    "into", "is", "it", "its", "just", "may", "me", "more", "most", "must", "my", "no", "not",
    "of", "on", "only", "or", "other", "our", "out", "over", "shall", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "under", "up", "upon", "us", "very", "via", "was", "we",
    "were", "what", "when", "which", "while", "who", "will", "with", "within", "without",
    "would", "you", "your",
];
