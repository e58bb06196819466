use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use super::{App, CardOutcome, Focus};
use crate::selector::SelectorOption;
use crate::services::{CardServices, interest_message};

impl<S: CardServices> App<S> {
	/// Apply one key press. Returns the outcome once the session is over.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<CardOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome(false));
		}

		if self.card.overlay_visible() {
			self.handle_overlay_key(key);
			return None;
		}

		match self.focus {
			Focus::Selector => {
				self.handle_selector_key(key);
				None
			}
			Focus::Card => self.handle_card_key(key),
		}
	}

	fn handle_overlay_key(&mut self, key: KeyEvent) {
		if matches!(
			key.code,
			KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v')
		) {
			self.card.close_overlay();
		}
	}

	fn handle_selector_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				let mut query = self.card.selector().query().to_string();
				query.push(ch);
				self.set_query(query);
			}
			KeyCode::Backspace => {
				let mut query = self.card.selector().query().to_string();
				query.pop();
				self.set_query(query);
			}
			KeyCode::Up => self.move_highlight_up(),
			KeyCode::Down => {
				if self.card.selector().is_open() {
					self.move_highlight_down();
				} else {
					self.open_selector();
				}
			}
			KeyCode::Enter => {
				if self.card.selector().is_open() {
					self.confirm_highlighted();
				} else {
					self.open_selector();
				}
			}
			KeyCode::Esc => {
				if self.card.selector().is_open() {
					self.card.selector_mut().close();
				} else {
					self.focus = Focus::Card;
				}
			}
			KeyCode::Tab => {
				self.card.selector_mut().close();
				self.focus = Focus::Card;
			}
			_ => {}
		}
	}

	fn handle_card_key(&mut self, key: KeyEvent) -> Option<CardOutcome> {
		match key.code {
			KeyCode::Char('v') | KeyCode::Enter => self.card.open_overlay(),
			KeyCode::Char('i') => {
				self.card.notify_interest();
				self.status = Some(interest_message(self.card.vehicle()));
			}
			KeyCode::Char('/') | KeyCode::Tab => {
				self.focus = Focus::Selector;
				self.open_selector();
			}
			KeyCode::Char('q') => return Some(self.outcome(true)),
			KeyCode::Esc => return Some(self.outcome(false)),
			_ => {}
		}
		None
	}

	fn open_selector(&mut self) {
		self.card.selector_mut().open();
		self.highlight.select(Some(0));
		self.ensure_highlight();
	}

	fn set_query(&mut self, query: String) {
		let selector = self.card.selector_mut();
		selector.open();
		if let Err(err) = selector.type_query(query) {
			warn!(%err, "query update rejected");
			return;
		}
		self.highlight.select(Some(0));
		self.ensure_highlight();
	}

	fn confirm_highlighted(&mut self) {
		let Some(option) = self.highlighted_option() else {
			return;
		};
		match self.card.selector_mut().select_option(&option) {
			Ok(()) => {
				self.card.selector_mut().close();
				self.status = Some(match &option {
					SelectorOption::Candidate(value) => format!("Selected {value}"),
					SelectorOption::Create(value) => format!("Created \"{value}\""),
				});
			}
			Err(err) => {
				warn!(%err, "selection rejected");
				self.status = Some(err.to_string());
			}
		}
	}

	fn move_highlight_up(&mut self) {
		if let Some(selected) = self.highlight.selected()
			&& selected > 0
		{
			self.highlight.select(Some(selected - 1));
		}
	}

	fn move_highlight_down(&mut self) {
		if let Some(selected) = self.highlight.selected()
			&& selected + 1 < self.options_len()
		{
			self.highlight.select(Some(selected + 1));
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;
	use crate::card::CardController;
	use crate::selector::Selection;
	use crate::tui::TuiConfig;
	use crate::tui::test_support::{FixedServices, sample_vehicle};

	fn app() -> App<FixedServices> {
		let card = CardController::new(
			sample_vehicle(),
			vec!["Audi".into(), "Volkswagen".into(), "Toyota".into()],
			FixedServices,
		);
		App::new(card, TuiConfig::default())
	}

	fn press(app: &mut App<FixedServices>, code: KeyCode) -> Option<CardOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn type_text(app: &mut App<FixedServices>, text: &str) {
		for ch in text.chars() {
			press(app, KeyCode::Char(ch));
		}
	}

	#[test]
	fn typing_opens_selector_and_filters() {
		let mut app = app();
		type_text(&mut app, "volks");
		assert!(app.card().selector().is_open());
		assert_eq!(app.card().selector().query(), "volks");
		assert_eq!(
			app.highlighted_option(),
			Some(SelectorOption::Candidate("Volkswagen".into()))
		);
	}

	#[test]
	fn enter_selects_and_closes() {
		let mut app = app();
		type_text(&mut app, "volks");
		press(&mut app, KeyCode::Enter);
		let selector = app.card().selector();
		assert!(!selector.is_open());
		assert_eq!(selector.query(), "");
		assert_eq!(selector.selection(), &Selection::Candidate("Volkswagen".into()));
		assert_eq!(app.status(), Some("Selected Volkswagen"));
	}

	#[test]
	fn unmatched_query_creates_entry() {
		let mut app = app();
		type_text(&mut app, "vw");
		press(&mut app, KeyCode::Enter);
		assert_eq!(
			app.card().selector().selection(),
			&Selection::Created("vw".into())
		);
		assert_eq!(app.status(), Some("Created \"vw\""));
	}

	#[test]
	fn arrows_move_within_options() {
		let mut app = app();
		press(&mut app, KeyCode::Down);
		assert_eq!(app.highlight.selected(), Some(0));
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		assert_eq!(app.highlight.selected(), Some(2));
		press(&mut app, KeyCode::Up);
		press(&mut app, KeyCode::Enter);
		assert_eq!(
			app.card().selector().selection().value(),
			Some("Volkswagen")
		);
	}

	#[test]
	fn backspace_widens_the_filter() {
		let mut app = app();
		type_text(&mut app, "toyx");
		assert_eq!(app.options_len(), 1);
		press(&mut app, KeyCode::Backspace);
		assert_eq!(
			app.highlighted_option(),
			Some(SelectorOption::Candidate("Toyota".into()))
		);
	}

	#[test]
	fn escape_closes_then_moves_focus() {
		let mut app = app();
		type_text(&mut app, "au");
		press(&mut app, KeyCode::Esc);
		assert!(!app.card().selector().is_open());
		assert_eq!(app.card().selector().query(), "");
		assert_eq!(app.focus(), Focus::Selector);
		press(&mut app, KeyCode::Esc);
		assert_eq!(app.focus(), Focus::Card);
	}

	#[test]
	fn card_keys_drive_overlay_and_interest() {
		let mut app = app();
		press(&mut app, KeyCode::Tab);
		press(&mut app, KeyCode::Char('v'));
		assert!(app.card().overlay_visible());

		// Keys other than the close keys are swallowed by the overlay.
		press(&mut app, KeyCode::Char('i'));
		assert_eq!(app.card().interest_sent(), 0);
		press(&mut app, KeyCode::Esc);
		assert!(!app.card().overlay_visible());

		press(&mut app, KeyCode::Char('i'));
		assert_eq!(app.card().interest_sent(), 1);
		assert_eq!(
			app.status(),
			Some("Interested in contacting the owner of toyota corolla")
		);
	}

	#[test]
	fn quitting_reports_outcome() {
		let mut app = app();
		type_text(&mut app, "audi");
		press(&mut app, KeyCode::Enter);
		press(&mut app, KeyCode::Tab);
		press(&mut app, KeyCode::Char('i'));
		let outcome = press(&mut app, KeyCode::Char('q')).expect("outcome");
		assert!(outcome.accepted);
		assert_eq!(outcome.selection, Selection::Candidate("Audi".into()));
		assert_eq!(outcome.interest_sent, 1);
		assert_eq!(outcome.daily_rent, 61.0);
	}

	#[test]
	fn ctrl_c_cancels_from_anywhere() {
		let mut app = app();
		type_text(&mut app, "au");
		let outcome = app
			.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
			.expect("outcome");
		assert!(!outcome.accepted);
	}
}
