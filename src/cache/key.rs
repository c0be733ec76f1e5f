use crate::responses::Language;

/// Build the deterministic cache key for a `(language, message)` pair.
///
/// Normalization: case-fold, drop everything that is not alphanumeric or
/// whitespace, collapse whitespace runs, prefix with the language tag.
/// Messages differing only in punctuation, casing, or spacing collapse to
/// the same key. Accented characters survive; folding them away would
/// collide distinct Spanish words.
pub fn cache_key(language: Language, message: &str) -> String {
    let lowered = message.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let normalized = filtered.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{}:{}", language.as_str(), normalized)
}
