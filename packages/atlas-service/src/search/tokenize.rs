pub const STOP_WORDS: [&str; 19] = [
	"and", "or", "the", "a", "an", "of", "to", "in", "for", "with", "on", "at", "by", "from", "as",
	"is", "are", "was", "were",
];

/// Splits a query on whitespace into lower-cased terms, dropping stop-words. Order and
/// duplicates are kept; each term is scored on its own.
pub fn tokenize_query(query: &str) -> Vec<String> {
	query
		.split_whitespace()
		.map(str::to_lowercase)
		.filter(|token| !STOP_WORDS.contains(&token.as_str()))
		.collect()
}
