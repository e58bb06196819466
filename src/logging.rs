//! Tracing setup for the terminal card.
//!
//! Log output goes to a file so it never draws over the interface.
//!
//! Filter priority, highest first: `CARBUYER_LOG`, `RUST_LOG`, the configured
//! level, then `warn`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CARBUYER_LOG";
pub const LOG_FILE_NAME: &str = "carbuyer.log";
const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber writing to `<dir>/carbuyer.log`.
///
/// Returns the path of the log file. Fails if a subscriber is already set.
pub fn initialize(dir: &Path, level: Option<&str>) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(build_env_filter(level))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

fn build_env_filter(level: Option<&str>) -> EnvFilter {
	if let Ok(directives) = std::env::var(LOG_ENV)
		&& let Ok(filter) = EnvFilter::try_new(&directives)
	{
		return filter;
	}

	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}

	level
		.and_then(|level| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}
