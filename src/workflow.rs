use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carbuyer::{CardController, CardOutcome, DefaultServices, TuiConfig, Vehicle, run_card};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates loading the vehicle and running the interactive card.
pub(crate) struct CardWorkflow {
	card: CardController<DefaultServices>,
	ui: TuiConfig,
}

impl CardWorkflow {
	pub(crate) fn from_config(vehicle_path: &Path, config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			manufacturers,
			pricing,
			images,
			ui,
			..
		} = config;

		let vehicle = load_vehicle(vehicle_path)?;
		info!(
			vehicle = %vehicle.display_name(),
			candidates = manufacturers.len(),
			"vehicle loaded"
		);
		let services = DefaultServices::new(pricing, images);
		let card = CardController::new(vehicle, manufacturers, services);
		Ok(Self { card, ui })
	}

	pub(crate) fn run(self) -> Result<CardOutcome> {
		run_card(self.card, self.ui)
	}
}

fn load_vehicle(path: &Path) -> Result<Vehicle> {
	let input = fs::read_to_string(path)
		.with_context(|| format!("failed to read vehicle file {}", path.display()))?;
	Vehicle::from_json(&input)
		.with_context(|| format!("invalid vehicle record in {}", path.display()))
}

/// Log file location, or `None` when no data directory is available.
pub(crate) fn log_dir() -> Option<PathBuf> {
	carbuyer::app_dirs::get_data_dir().ok()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn loads_vehicle_from_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("car.json");
		fs::write(
			&path,
			r#"{"make":"bmw","model":"m3","year":2022,"city_mpg":16,"transmission":"m","drive":"rwd"}"#,
		)
		.unwrap();

		let vehicle = load_vehicle(&path).expect("vehicle");
		assert_eq!(vehicle.display_name(), "bmw m3");
	}

	#[test]
	fn missing_file_reports_path() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("missing.json");
		let err = load_vehicle(&path).unwrap_err();
		assert!(err.to_string().contains("missing.json"), "{err}");
	}

	#[test]
	fn invalid_record_is_rejected() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("car.json");
		fs::write(&path, r#"{"make":"bmw"}"#).unwrap();
		assert!(load_vehicle(&path).is_err());
	}
}
