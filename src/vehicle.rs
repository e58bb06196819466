//! Read-only vehicle records as delivered by listing feeds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;

/// Gearbox type. Feeds use the single-letter codes `a` and `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Transmission {
	Automatic,
	Manual,
}

impl Transmission {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Automatic => "Automatic",
			Self::Manual => "Manual",
		}
	}
}

impl FromStr for Transmission {
	type Err = VehicleError;

	fn from_str(code: &str) -> Result<Self, Self::Err> {
		match code.trim().to_ascii_lowercase().as_str() {
			"a" | "automatic" => Ok(Self::Automatic),
			"m" | "manual" => Ok(Self::Manual),
			_ => Err(VehicleError::UnknownTransmission {
				code: code.to_string(),
			}),
		}
	}
}

impl TryFrom<String> for Transmission {
	type Error = VehicleError;

	fn try_from(code: String) -> Result<Self, Self::Error> {
		code.parse()
	}
}

/// Drivetrain short code such as `fwd`, `awd` or `4wd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drive(String);

impl Drive {
	pub fn new(code: impl Into<String>) -> Self {
		Self(code.into())
	}

	pub fn code(&self) -> &str {
		&self.0
	}

	/// Upper-cased code for display.
	pub fn label(&self) -> String {
		self.0.to_uppercase()
	}
}

impl fmt::Display for Drive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

/// A single vehicle listing. Owned by the caller and never mutated by the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
	pub make: String,
	pub model: String,
	pub year: i32,
	pub city_mpg: u32,
	pub transmission: Transmission,
	pub drive: Drive,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub class: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fuel_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cylinders: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub displacement: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub highway_mpg: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub combination_mpg: Option<u32>,
}

impl Vehicle {
	/// Build a vehicle with only the fields the summary card needs.
	pub fn new(
		make: impl Into<String>,
		model: impl Into<String>,
		year: i32,
		city_mpg: u32,
		transmission: Transmission,
		drive: Drive,
	) -> Self {
		Self {
			make: make.into(),
			model: model.into(),
			year,
			city_mpg,
			transmission,
			drive,
			class: None,
			fuel_type: None,
			cylinders: None,
			displacement: None,
			highway_mpg: None,
			combination_mpg: None,
		}
	}

	/// Parse and validate a JSON vehicle record.
	pub fn from_json(input: &str) -> Result<Self, VehicleError> {
		let vehicle: Self = serde_json::from_str(input)?;
		vehicle.validate()?;
		Ok(vehicle)
	}

	pub fn validate(&self) -> Result<(), VehicleError> {
		if self.make.trim().is_empty() {
			return Err(VehicleError::EmptyField { field: "make" });
		}
		if self.model.trim().is_empty() {
			return Err(VehicleError::EmptyField { field: "model" });
		}
		if self.drive.code().trim().is_empty() {
			return Err(VehicleError::EmptyField { field: "drive" });
		}
		Ok(())
	}

	/// `"<make> <model>"`, as shown in the card title.
	pub fn display_name(&self) -> String {
		format!("{} {}", self.make, self.model)
	}
}
