use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use crate::card::{CardSummary, DetailRow};
use crate::tui::theme::Theme;

/// Centred popup sized for `rows` detail rows.
pub fn overlay_area(screen: Rect, rows: usize) -> Rect {
	let width = (screen.width * 3 / 5).max(40).min(screen.width);
	let height = (rows as u16 + 4).min(screen.height);
	Rect {
		x: screen.x + (screen.width - width) / 2,
		y: screen.y + (screen.height - height) / 2,
		width,
		height,
	}
}

pub fn render_overlay(
	frame: &mut Frame,
	area: Rect,
	summary: &CardSummary,
	rows: &[DetailRow],
	theme: &Theme,
) {
	frame.render_widget(Clear, area);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {} ", summary.title), theme.header))
		.title_bottom(Line::from(Span::styled(" Esc to close ", theme.empty)));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [heading_area, _, table_area] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Fill(1),
	])
	.areas(inner);
	frame.render_widget(
		Paragraph::new(Span::styled("Vehicle details", theme.highlight)),
		heading_area,
	);

	let label_width = rows
		.iter()
		.map(|row| row.label.len())
		.max()
		.unwrap_or(0) as u16;

	let table_rows = rows.iter().map(|row| {
		Row::new(vec![
			Cell::from(Span::styled(row.label, theme.empty)),
			Cell::from(row.value.clone()),
		])
	});

	let table = Table::new(
		table_rows,
		[Constraint::Length(label_width), Constraint::Fill(1)],
	)
	.column_spacing(2);
	frame.render_widget(table, table_area);
}
