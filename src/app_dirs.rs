//! Where `carbuyer` keeps its config file and log.
//!
//! A non-empty `CARBUYER_CONFIG_DIR` or `CARBUYER_DATA_DIR` wins over the
//! platform location from `directories`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "CARBUYER_CONFIG_DIR";
const DATA_DIR_ENV: &str = "CARBUYER_DATA_DIR";

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory for the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

fn resolve(override_var: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	if let Some(dir) = env::var_os(override_var).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	ProjectDirs::from("io", "carbuyer", "carbuyer")
		.map(|dirs| platform(&dirs).to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine project directories for carbuyer"))
}

#[cfg(test)]
mod tests {
	use super::*;

	const TEST_VAR: &str = "CARBUYER_TEST_DIR_OVERRIDE";

	#[test]
	fn non_empty_override_wins() {
		// SAFETY: the variable is private to this test.
		unsafe { env::set_var(TEST_VAR, "/srv/carbuyer") };
		let dir = resolve(TEST_VAR, ProjectDirs::config_local_dir).unwrap();
		assert_eq!(dir, PathBuf::from("/srv/carbuyer"));

		unsafe { env::set_var(TEST_VAR, "") };
		if let Ok(dir) = resolve(TEST_VAR, ProjectDirs::config_local_dir) {
			assert_ne!(dir, PathBuf::from(""));
		}
		unsafe { env::remove_var(TEST_VAR) };
	}
}
