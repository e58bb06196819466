use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::card::CardSummary;
use crate::selector::Selection;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the summary card.
pub struct CardContext<'a> {
	pub summary: &'a CardSummary,
	pub selection: &'a Selection,
	pub focused: bool,
	pub theme: &'a Theme,
}

pub fn render_card(frame: &mut Frame, area: Rect, context: CardContext<'_>) {
	let CardContext {
		summary,
		selection,
		focused,
		theme,
	} = context;

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {} ", summary.title), theme.header));
	if focused {
		block = block.title_bottom(Line::from(Span::styled(
			" [v] View More  [i] Interested  [/] Search  [q] Done ",
			theme.empty,
		)));
	}

	let manufacturer = match selection {
		Selection::Empty => Span::styled("none selected", theme.empty),
		Selection::Candidate(value) => Span::raw(value.clone()),
		Selection::Created(value) => Span::raw(format!("{value} (new)")),
	};

	let lines = vec![
		Line::from(Span::styled(summary.price_label(), theme.highlight)),
		Line::default(),
		Line::from(vec![
			Span::styled("Image  ", theme.empty),
			Span::raw(summary.image_url.clone()),
		]),
		Line::default(),
		Line::from(format!(
			"{}  ·  {}  ·  {}",
			summary.transmission,
			summary.drive,
			summary.mpg_label()
		)),
		Line::default(),
		Line::from(vec![Span::styled("Owner contact  ", theme.empty), manufacturer]),
	];

	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}
