//! Widgets that make up the card screen.

mod card;
mod input;
mod options;
mod overlay;

pub use card::{CardContext, render_card};
pub use input::{InputContext, render_input};
pub use options::{HIGHLIGHT_SYMBOL, OptionsContext, dropdown_area, render_options};
pub use overlay::{overlay_area, render_overlay};

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `width` columns, marking the cut with `…`.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
	if unicode_width::UnicodeWidthStr::width(text) <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out.push('…');
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_text_is_untouched() {
		assert_eq!(truncate_to_width("Audi", 10), "Audi");
	}

	#[test]
	fn long_text_gets_ellipsis() {
		assert_eq!(truncate_to_width("Mercedes-Benz", 6), "Merce…");
		assert_eq!(truncate_to_width("Mercedes-Benz", 0), "");
	}
}
