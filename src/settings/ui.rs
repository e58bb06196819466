use anyhow::{Result, bail};
use carbuyer::TuiConfig;
use carbuyer::tui::theme;

use super::raw::UiSection;
use super::util::non_blank;

pub(super) const DEFAULT_THEME: &str = "primary";

/// Build the interface configuration from the `[ui]` section.
///
/// Returns the configuration together with the resolved theme name.
pub(super) fn ui_from_section(section: UiSection) -> Result<(TuiConfig, String)> {
	let mut ui = TuiConfig::default();
	if let Some(prompt) = section.prompt {
		ui.prompt = prompt;
	}
	if let Some(placeholder) = section.placeholder {
		ui.placeholder = placeholder;
	}

	let name = non_blank(section.theme).unwrap_or_else(|| DEFAULT_THEME.to_string());
	let Some(selected) = theme::by_name(&name) else {
		let known: Vec<_> = theme::names().collect();
		bail!("unknown theme '{name}' (available: {})", known.join(", "));
	};
	ui.theme = selected;

	Ok((ui, name.to_ascii_lowercase()))
}
