use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use carbuyer::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("carbuyer {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "carbuyer",
	version,
	long_version = long_version(),
	about = "Browse a vehicle listing card and pick its manufacturer",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `carbuyer` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "VEHICLE",
		required_unless_present = "list_themes",
		help = "JSON file describing the vehicle listing"
	)]
	pub(crate) vehicle: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CARBUYER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long = "manufacturers",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated manufacturer names to offer (default: built-in list)"
	)]
	pub(crate) manufacturers: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the search input prompt (default: Manufacturer)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the search input placeholder (default: Volkswagen...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: primary)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "image-customer",
		value_name = "KEY",
		help = "Customer key sent to the image CDN (default: none)"
	)]
	pub(crate) image_customer: Option<String>,
	#[arg(
		long = "reference-year",
		value_name = "YEAR",
		help = "Year used to age vehicles when pricing (default: current year)"
	)]
	pub(crate) reference_year: Option<i32>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive written to the log file (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
		let mut matches = cli_command().try_get_matches_from(args)?;
		CliArgs::from_arg_matches_mut(&mut matches)
	}

	#[test]
	fn command_supports_custom_styles() {
		let command = cli_command();
		assert!(command.get_about().is_some());
	}

	#[test]
	fn vehicle_file_is_required() {
		assert!(parse(&["carbuyer"]).is_err());
		assert!(parse(&["carbuyer", "--list-themes"]).is_ok());
	}

	#[test]
	fn parses_overrides() {
		let parsed = parse(&[
			"carbuyer",
			"car.json",
			"-m",
			"Audi,BMW",
			"--reference-year",
			"2024",
			"-o",
			"json",
		])
		.expect("parses");
		assert_eq!(parsed.vehicle, Some(PathBuf::from("car.json")));
		assert_eq!(
			parsed.manufacturers,
			Some(vec!["Audi".to_string(), "BMW".to_string()])
		);
		assert_eq!(parsed.reference_year, Some(2024));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
