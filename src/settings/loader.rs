use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carbuyer::app_dirs;
use config::{Config, Environment, File};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

const ENV_PREFIX: &str = "carbuyer";
const LOCAL_FILE_NAMES: [&str; 2] = [".carbuyer.toml", "carbuyer.toml"];

/// One config file layer. Explicit `--config` files must exist.
struct FileLayer {
	path: PathBuf,
	required: bool,
}

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut builder = Config::builder();
	for layer in file_layers(cli) {
		builder = builder.add_source(File::from(layer.path).required(layer.required));
	}
	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("catalog.manufacturers"),
	);

	let mut raw: RawConfig = builder
		.build()
		.context("failed to read configuration")?
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

/// File layers, lowest priority first.
fn file_layers(cli: &CliArgs) -> Vec<FileLayer> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		let config_dir = app_dirs::get_config_dir().ok();
		let working_dir = env::current_dir().ok();
		default_locations(config_dir.as_deref(), working_dir.as_deref())
	};

	let optional = defaults.into_iter().map(|path| FileLayer {
		path,
		required: false,
	});
	let explicit = cli.config.iter().map(|path| FileLayer {
		path: path.clone(),
		required: true,
	});
	optional.chain(explicit).collect()
}

/// `<config dir>/config.toml`, then the dotfile and plain file in the
/// working directory.
fn default_locations(config_dir: Option<&Path>, working_dir: Option<&Path>) -> Vec<PathBuf> {
	let global = config_dir.map(|dir| dir.join("config.toml"));
	let local = working_dir
		.into_iter()
		.flat_map(|dir| LOCAL_FILE_NAMES.map(|name| dir.join(name)));
	global.into_iter().chain(local).collect()
}
