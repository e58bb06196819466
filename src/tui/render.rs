use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::widgets::Paragraph;

use super::components::{
	CardContext, InputContext, OptionsContext, dropdown_area, overlay_area, render_card,
	render_input, render_options, render_overlay,
};
use super::{App, Focus};
use crate::services::CardServices;

impl<S: CardServices> App<S> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		let theme = self.config.theme;
		let summary = self.card.summary();
		let selector = self.card.selector();

		render_card(
			frame,
			layout[1],
			CardContext {
				summary: &summary,
				selection: selector.selection(),
				focused: self.focus == Focus::Card,
				theme: &theme,
			},
		);

		// Rendered after the card so the dropdown overlaps it.
		if selector.is_open() {
			let options = selector.options();
			let dropdown = dropdown_area(layout[1], options.len());
			render_options(
				frame,
				dropdown,
				&mut self.highlight,
				OptionsContext {
					options: &options,
					selection: selector.selection(),
					theme: &theme,
				},
			);
		}

		render_input(
			frame,
			InputContext {
				selector,
				prompt: &self.config.prompt,
				placeholder: &self.config.placeholder,
				focused: self.focus == Focus::Selector && !self.card.overlay_visible(),
				area: layout[0],
				theme: &theme,
			},
		);

		let status = self.status.as_deref().unwrap_or(match self.focus {
			Focus::Selector => "Type to search · Enter to choose · Tab for the card",
			Focus::Card => "Tab to search manufacturers",
		});
		frame.render_widget(Paragraph::new(status).style(theme.empty), layout[2]);

		if self.card.overlay_visible() {
			let rows = self.card.detail_rows();
			let popup = overlay_area(frame.area(), rows.len());
			render_overlay(frame, popup, &summary, &rows, &theme);
		}
	}
}
