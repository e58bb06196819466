use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::selector::SelectorState;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the search input row.
pub struct InputContext<'a> {
	pub selector: &'a SelectorState,
	pub prompt: &'a str,
	pub placeholder: &'a str,
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt and the query (or the current selection while closed).
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		selector,
		prompt,
		placeholder,
		focused,
		area,
		theme,
	} = input;

	let prompt_text = if prompt.is_empty() {
		String::new()
	} else {
		format!("{prompt} > ")
	};

	let shown = if selector.is_open() {
		selector.query()
	} else {
		selector.selection().value().unwrap_or("")
	};

	let mut spans = vec![Span::styled(prompt_text.clone(), theme.prompt)];
	if shown.is_empty() {
		spans.push(Span::styled(placeholder.to_string(), theme.empty));
	} else {
		spans.push(Span::raw(shown.to_string()));
		if selector.selection().is_created() && !selector.is_open() {
			spans.push(Span::styled(" (new)", theme.empty));
		}
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);

	if focused {
		let typed = if selector.is_open() { shown } else { "" };
		let offset = (prompt_text.width() + typed.width()) as u16;
		let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, area.y));
	}
}
