use std::collections::HashSet;

/// Trim names, drop empty ones and remove duplicates while keeping order.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			continue;
		}
		if seen.insert(trimmed.to_string()) {
			cleaned.push(trimmed.to_string());
		}
	}
	cleaned
}

/// Treat blank strings as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
