//! Case- and whitespace-insensitive substring filtering.
//!
//! Both the query and every candidate are normalized with [`normalize`]
//! before comparison. Results keep the order of the input list; there is no
//! ranking by match quality.

/// Lower-case `text` and drop every whitespace character.
///
/// The whole string is lower-cased first so context-dependent mappings such as
/// a word-final sigma apply. Whitespace is Unicode `White_Space`, which counts
/// U+0085 but not U+FEFF.
pub fn normalize(text: &str) -> String {
	text.to_lowercase()
		.chars()
		.filter(|ch| !ch.is_whitespace())
		.collect()
}

/// Return the candidates whose normalized form contains the normalized query.
///
/// A query that is empty after normalization matches every candidate.
pub fn filter<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Vec<&'a str> {
	let needle = normalize(query);
	let all = candidates.iter().map(AsRef::as_ref);
	if needle.is_empty() {
		return all.collect();
	}

	all.filter(|candidate| normalize(candidate).contains(&needle))
		.collect()
}
