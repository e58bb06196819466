use thiserror::Error;

/// Errors raised when a selector transition is invoked outside its preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
	/// The transition requires the selector to be open.
	#[error("cannot {operation} while the selector is closed")]
	NotOpen { operation: &'static str },

	/// The value is neither a candidate nor the offered create option.
	#[error("'{value}' is not a known manufacturer and is not offered as a new entry")]
	UnknownCandidate { value: String },
}

/// Errors produced while reading or validating a [`Vehicle`](crate::Vehicle).
#[derive(Debug, Error)]
pub enum VehicleError {
	#[error("vehicle field '{field}' must not be empty")]
	EmptyField { field: &'static str },

	#[error("unknown transmission code '{code}' (expected 'a' or 'm')")]
	UnknownTransmission { code: String },

	#[error("failed to parse vehicle record: {0}")]
	Parse(#[from] serde_json::Error),
}
