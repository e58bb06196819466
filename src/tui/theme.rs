//! Colour schemes for the card interface.

use ratatui::style::{Color, Modifier, Style};

/// Styles for the elements of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Borders and titles.
	pub header: Style,
	/// Highlighted dropdown entry.
	pub row_highlight: Style,
	/// Prompt in front of the search input.
	pub prompt: Style,
	/// Placeholders and hints.
	pub empty: Style,
	/// Price and other emphasised values.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

pub const PRIMARY: Theme = Theme {
	header: Style::new().fg(Color::Rgb(43, 89, 255)),
	row_highlight: Style::new()
		.bg(Color::Rgb(43, 89, 255))
		.fg(Color::White),
	prompt: Style::new().fg(Color::Rgb(43, 89, 255)),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
};

const BUILTIN: &[(&str, Theme)] = &[("primary", PRIMARY), ("light", LIGHT)];

impl Default for Theme {
	fn default() -> Self {
		PRIMARY
	}
}

/// Names of the bundled themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTIN.iter().map(|(name, _)| *name)
}

/// Look up a bundled theme, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTIN
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| *theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case() {
		assert_eq!(by_name("LIGHT"), Some(LIGHT));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn default_is_listed() {
		assert!(names().any(|name| by_name(name) == Some(Theme::default())));
	}
}
