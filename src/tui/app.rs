use ratatui::widgets::ListState;

use super::theme::Theme;
use crate::card::CardController;
use crate::selector::{Selection, SelectorOption};
use crate::services::CardServices;

/// Labels and colours of the interface.
#[derive(Debug, Clone, PartialEq)]
pub struct TuiConfig {
	/// Text in front of the search input.
	pub prompt: String,
	/// Shown in the input while it is empty.
	pub placeholder: String,
	pub theme: Theme,
}

impl Default for TuiConfig {
	fn default() -> Self {
		Self {
			prompt: "Manufacturer".to_string(),
			placeholder: "Volkswagen...".to_string(),
			theme: Theme::default(),
		}
	}
}

/// Which half of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Selector,
	Card,
}

/// Result of a card session.
#[derive(Debug, Clone, PartialEq)]
pub struct CardOutcome {
	/// False when the user aborted.
	pub accepted: bool,
	pub selection: Selection,
	pub interest_sent: usize,
	pub daily_rent: f64,
}

pub struct App<S: CardServices> {
	pub(crate) card: CardController<S>,
	pub(crate) focus: Focus,
	pub(crate) highlight: ListState,
	pub(crate) status: Option<String>,
	pub(crate) config: TuiConfig,
}

impl<S: CardServices> App<S> {
	pub fn new(card: CardController<S>, config: TuiConfig) -> Self {
		Self {
			card,
			focus: Focus::Selector,
			highlight: ListState::default(),
			status: None,
			config,
		}
	}

	pub fn card(&self) -> &CardController<S> {
		&self.card
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	pub(crate) fn outcome(&self, accepted: bool) -> CardOutcome {
		CardOutcome {
			accepted,
			selection: self.card.selector().selection().clone(),
			interest_sent: self.card.interest_sent(),
			daily_rent: self.card.summary().daily_rent,
		}
	}

	/// Option under the cursor while the dropdown is open.
	pub(crate) fn highlighted_option(&self) -> Option<SelectorOption> {
		let selector = self.card.selector();
		if !selector.is_open() {
			return None;
		}
		let index = self.highlight.selected()?;
		selector.options().into_iter().nth(index)
	}

	pub(crate) fn options_len(&self) -> usize {
		self.card.selector().options().len()
	}

	/// Keep the highlight inside the current option list.
	pub(crate) fn ensure_highlight(&mut self) {
		let len = self.options_len();
		if len == 0 {
			self.highlight.select(None);
		} else if let Some(selected) = self.highlight.selected() {
			if selected >= len {
				self.highlight.select(Some(len - 1));
			}
		} else {
			self.highlight.select(Some(0));
		}
	}
}
