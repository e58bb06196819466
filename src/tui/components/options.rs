use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{
	Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph,
};

use super::truncate_to_width;
use crate::selector::{Selection, SelectorOption};
use crate::tui::theme::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Rows of options visible before the list scrolls.
const MAX_VISIBLE_OPTIONS: u16 = 10;

/// Argument bundle for rendering the dropdown.
pub struct OptionsContext<'a> {
	pub options: &'a [SelectorOption],
	pub selection: &'a Selection,
	pub theme: &'a Theme,
}

/// Space for the dropdown directly below the input, clipped to `body`.
pub fn dropdown_area(body: Rect, option_count: usize) -> Rect {
	let rows = (option_count.max(1) as u16).min(MAX_VISIBLE_OPTIONS);
	Rect {
		height: (rows + 2).min(body.height),
		..body
	}
}

pub fn render_options(
	frame: &mut Frame,
	area: Rect,
	state: &mut ListState,
	context: OptionsContext<'_>,
) {
	let OptionsContext {
		options,
		selection,
		theme,
	} = context;

	frame.render_widget(Clear, area);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());

	if options.is_empty() {
		let empty = Paragraph::new("No manufacturers")
			.style(theme.empty)
			.alignment(Alignment::Center)
			.block(block);
		frame.render_widget(empty, area);
		return;
	}

	let label_width = (area.width as usize)
		.saturating_sub(2)
		.saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
	let items: Vec<ListItem> = options
		.iter()
		.map(|option| {
			let label = truncate_to_width(&option.label(), label_width);
			let item = ListItem::new(label);
			if selection.value() == Some(option.value()) {
				item.style(Style::new().add_modifier(Modifier::BOLD))
			} else {
				item
			}
		})
		.collect();

	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, area, state);
}
