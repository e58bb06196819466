mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use std::path::Path;
use workflow::CardWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in carbuyer::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Some(dir) = workflow::log_dir() {
		// Logging is best effort; the card works without it.
		if let Err(err) = carbuyer::logging::initialize(&dir, resolved.log_level.as_deref()) {
			eprintln!("warning: {err:#}");
		}
	}

	let vehicle = cli
		.vehicle
		.as_deref()
		.context("a vehicle file is required")?;
	run_card(vehicle, cli.output, resolved)
}

/// Run the card session and print the outcome in the chosen format.
fn run_card(vehicle: &Path, format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = CardWorkflow::from_config(vehicle, settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
