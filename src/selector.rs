//! Searchable manufacturer selector.
//!
//! [`SelectorState`] owns the candidate list, an open/closed phase, the query
//! the user is typing and the current [`Selection`]. The filtered view is not
//! stored; [`SelectorState::filtered`] and [`SelectorState::options`] derive it
//! from the query on every call.
//!
//! Selecting and closing are independent transitions. `select` never closes
//! the selector; `close` never discards the selection.

use tracing::debug;

use crate::error::SelectorError;
use crate::filter::filter;

/// Whether the dropdown is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
	#[default]
	Closed,
	Open,
}

/// The active choice of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
	#[default]
	Empty,
	/// A member of the candidate list.
	Candidate(String),
	/// A new entry created from a query that matched no candidate.
	Created(String),
}

impl Selection {
	pub fn value(&self) -> Option<&str> {
		match self {
			Self::Empty => None,
			Self::Candidate(value) | Self::Created(value) => Some(value),
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn is_created(&self) -> bool {
		matches!(self, Self::Created(_))
	}
}

/// One entry of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOption {
	Candidate(String),
	/// Offered alone when the query matches nothing.
	Create(String),
}

impl SelectorOption {
	/// The value that selecting this option stores.
	pub fn value(&self) -> &str {
		match self {
			Self::Candidate(value) | Self::Create(value) => value,
		}
	}

	/// Text shown in the dropdown.
	pub fn label(&self) -> String {
		match self {
			Self::Candidate(value) => value.clone(),
			Self::Create(value) => format!("Create \"{value}\""),
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct SelectorState {
	candidates: Vec<String>,
	phase: SelectorPhase,
	query: String,
	selection: Selection,
}

impl SelectorState {
	/// Create a closed selector with an empty query and no selection.
	pub fn new(candidates: Vec<String>) -> Self {
		Self {
			candidates,
			..Self::default()
		}
	}

	pub fn phase(&self) -> SelectorPhase {
		self.phase
	}

	pub fn is_open(&self) -> bool {
		self.phase == SelectorPhase::Open
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	pub fn open(&mut self) {
		if !self.is_open() {
			debug!("selector opened");
		}
		self.phase = SelectorPhase::Open;
	}

	/// Replace the query text. Leaves the selection alone.
	pub fn type_query(&mut self, text: impl Into<String>) -> Result<(), SelectorError> {
		self.ensure_open("type a query")?;
		self.query = text.into();
		debug!(query = %self.query, "selector query updated");
		Ok(())
	}

	/// Choose `value`, which must be a candidate or the offered create option.
	pub fn select(&mut self, value: &str) -> Result<(), SelectorError> {
		self.ensure_open("select")?;
		let selection = if self.candidates.iter().any(|candidate| candidate == value) {
			Selection::Candidate(value.to_string())
		} else if self.offers_create() && value == self.query {
			Selection::Created(value.to_string())
		} else {
			return Err(SelectorError::UnknownCandidate {
				value: value.to_string(),
			});
		};
		debug!(?selection, "selector selection changed");
		self.selection = selection;
		Ok(())
	}

	pub fn select_option(&mut self, option: &SelectorOption) -> Result<(), SelectorError> {
		self.select(option.value())
	}

	/// Close the dropdown and clear the query. The selection survives.
	pub fn close(&mut self) {
		if self.is_open() {
			debug!("selector closed");
		}
		self.phase = SelectorPhase::Closed;
		self.query.clear();
	}

	/// Candidates matching the current query, in list order.
	pub fn filtered(&self) -> Vec<&str> {
		filter(&self.query, &self.candidates)
	}

	/// True when the query matches nothing and a new entry is offered instead.
	pub fn offers_create(&self) -> bool {
		!self.query.is_empty() && self.filtered().is_empty()
	}

	/// Entries the dropdown should list for the current query.
	pub fn options(&self) -> Vec<SelectorOption> {
		let filtered = self.filtered();
		if filtered.is_empty() && !self.query.is_empty() {
			return vec![SelectorOption::Create(self.query.clone())];
		}
		filtered
			.into_iter()
			.map(|candidate| SelectorOption::Candidate(candidate.to_string()))
			.collect()
	}

	fn ensure_open(&self, operation: &'static str) -> Result<(), SelectorError> {
		if self.is_open() {
			Ok(())
		} else {
			Err(SelectorError::NotOpen { operation })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn selector(names: &[&str]) -> SelectorState {
		SelectorState::new(names.iter().map(|name| name.to_string()).collect())
	}

	#[test]
	fn starts_closed_and_empty() {
		let state = selector(&["Audi"]);
		assert_eq!(state.phase(), SelectorPhase::Closed);
		assert_eq!(state.query(), "");
		assert!(state.selection().is_empty());
	}

	#[test]
	fn open_keeps_query_and_selection() {
		let mut state = selector(&["Audi", "BMW"]);
		state.open();
		state.select("BMW").unwrap();
		state.type_query("au").unwrap();
		state.open();
		assert!(state.is_open());
		assert_eq!(state.query(), "au");
		assert_eq!(state.selection().value(), Some("BMW"));
	}

	#[test]
	fn typing_does_not_change_selection() {
		let mut state = selector(&["Audi", "BMW"]);
		state.open();
		state.select("Audi").unwrap();
		state.type_query("bm").unwrap();
		assert_eq!(state.selection(), &Selection::Candidate("Audi".into()));
		assert_eq!(state.filtered(), vec!["BMW"]);
	}

	#[test]
	fn transitions_require_open_selector() {
		let mut state = selector(&["Audi"]);
		assert_eq!(
			state.type_query("a"),
			Err(SelectorError::NotOpen {
				operation: "type a query"
			})
		);
		assert!(matches!(
			state.select("Audi"),
			Err(SelectorError::NotOpen { .. })
		));
		assert!(state.selection().is_empty());
	}

	#[test]
	fn select_does_not_close() {
		let mut state = selector(&["Audi"]);
		state.open();
		state.select("Audi").unwrap();
		assert!(state.is_open());
	}

	#[test]
	fn close_twice_clears_query_and_keeps_selection() {
		let mut state = selector(&["Audi", "BMW"]);
		state.open();
		state.select("BMW").unwrap();
		state.type_query("au").unwrap();
		state.close();
		state.close();
		assert_eq!(state.query(), "");
		assert_eq!(state.phase(), SelectorPhase::Closed);
		assert_eq!(state.selection().value(), Some("BMW"));
	}

	#[test]
	fn unmatched_query_offers_single_create_option() {
		let mut state = selector(&["Audi", "BMW"]);
		state.open();
		state.type_query("Tesla").unwrap();
		assert!(state.filtered().is_empty());
		assert_eq!(state.options(), vec![SelectorOption::Create("Tesla".into())]);

		let option = state.options().remove(0);
		state.select_option(&option).unwrap();
		assert_eq!(state.selection(), &Selection::Created("Tesla".into()));
		assert_eq!(state.selection().value(), Some("Tesla"));
		assert!(state.selection().is_created());
	}

	#[test]
	fn create_option_keeps_raw_query_text() {
		let mut state = selector(&["Audi"]);
		state.open();
		state.type_query("  Polestar 2").unwrap();
		assert_eq!(state.options()[0].value(), "  Polestar 2");
		insta::assert_snapshot!(state.options()[0].label(), @r#"Create "  Polestar 2""#);
	}

	#[test]
	fn empty_candidate_list_still_offers_create() {
		let mut state = selector(&[]);
		state.open();
		assert!(state.options().is_empty());
		state.type_query("Rivian").unwrap();
		assert_eq!(state.options(), vec![SelectorOption::Create("Rivian".into())]);
	}

	#[test]
	fn rejects_values_that_were_not_offered() {
		let mut state = selector(&["Audi", "BMW"]);
		state.open();
		state.type_query("au").unwrap();
		assert_eq!(
			state.select("Tesla"),
			Err(SelectorError::UnknownCandidate {
				value: "Tesla".into()
			})
		);
		// "au" matches Audi, so no create option exists for it.
		assert!(state.select("au").is_err());
	}

	#[test]
	fn search_select_close_scenario() {
		let mut state = selector(&["Audi", "Volkswagen", "Toyota"]);
		state.open();

		state.type_query("vw").unwrap();
		assert!(state.filtered().is_empty());
		assert_eq!(state.options(), vec![SelectorOption::Create("vw".into())]);

		state.type_query("volks").unwrap();
		assert_eq!(state.filtered(), vec!["Volkswagen"]);
		assert_eq!(
			state.options(),
			vec![SelectorOption::Candidate("Volkswagen".into())]
		);

		state.select("Volkswagen").unwrap();
		state.close();
		assert_eq!(state.query(), "");
		assert_eq!(state.selection(), &Selection::Candidate("Volkswagen".into()));
	}
}
