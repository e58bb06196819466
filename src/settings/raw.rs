use anyhow::{Context, Result, ensure};
use carbuyer::catalog;
use carbuyer::services::DEFAULT_IMAGE_HOST;
use carbuyer::{ImageUrlBuilder, RentPricing};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;
use super::ui::ui_from_section;
use super::util::{non_blank, sanitize_names};

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	pricing: PricingSection,
	images: ImagesSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	manufacturers: Option<Vec<String>>,
}

/// Overrides for the daily-rate formula.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PricingSection {
	base_per_day: Option<f64>,
	mileage_factor: Option<f64>,
	age_factor: Option<f64>,
	reference_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ImagesSection {
	host: Option<String>,
	customer: Option<String>,
	zoom_type: Option<String>,
	angle: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) prompt: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(names) = &cli.manufacturers {
			self.catalog.manufacturers = Some(names.clone());
		}
		if let Some(year) = cli.reference_year {
			self.pricing.reference_year = Some(year);
		}
		if let Some(customer) = cli.image_customer.clone() {
			self.images.customer = Some(customer);
		}
		if let Some(prompt) = cli.prompt.clone() {
			self.ui.prompt = Some(prompt);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate the raw values and fill defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let manufacturers = self
			.catalog
			.manufacturers
			.map(sanitize_names)
			.unwrap_or_else(catalog::manufacturers);

		let mut pricing = RentPricing::default();
		if let Some(value) = self.pricing.base_per_day {
			pricing.base_per_day = value;
		}
		if let Some(value) = self.pricing.mileage_factor {
			pricing.mileage_factor = value;
		}
		if let Some(value) = self.pricing.age_factor {
			pricing.age_factor = value;
		}
		if let Some(value) = self.pricing.reference_year {
			pricing.reference_year = value;
		}
		ensure!(
			pricing.base_per_day.is_finite() && pricing.base_per_day >= 0.0,
			"pricing.base_per_day must be a non-negative number"
		);
		ensure!(
			pricing.mileage_factor.is_finite() && pricing.age_factor.is_finite(),
			"pricing factors must be finite numbers"
		);

		let host = non_blank(self.images.host).unwrap_or_else(|| DEFAULT_IMAGE_HOST.to_string());
		let mut images = ImageUrlBuilder::new(&host)
			.with_context(|| format!("invalid image host '{host}'"))?;
		images.customer = non_blank(self.images.customer);
		images.angle = non_blank(self.images.angle);
		if let Some(zoom) = non_blank(self.images.zoom_type) {
			images.zoom_type = zoom;
		}

		let (ui, theme_name) = ui_from_section(self.ui)?;

		Ok(ResolvedConfig {
			manufacturers,
			pricing,
			images,
			ui,
			theme_name,
			log_level: non_blank(self.logging.level),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_use_builtin_catalog() {
		let resolved = RawConfig::default().resolve().expect("defaults resolve");
		assert_eq!(resolved.manufacturers.len(), catalog::MANUFACTURERS.len());
		assert_eq!(resolved.pricing.base_per_day, 50.0);
		assert_eq!(resolved.images.base().as_str(), DEFAULT_IMAGE_HOST);
		assert_eq!(resolved.theme_name, "primary");
		assert_eq!(resolved.log_level, None);
	}

	#[test]
	fn empty_manufacturer_list_is_allowed() {
		let mut raw = RawConfig::default();
		raw.catalog.manufacturers = Some(vec!["  ".into()]);
		let resolved = raw.resolve().expect("resolves");
		assert!(resolved.manufacturers.is_empty());
	}

	#[test]
	fn negative_base_price_is_rejected() {
		let mut raw = RawConfig::default();
		raw.pricing.base_per_day = Some(-1.0);
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn invalid_image_host_is_rejected() {
		let mut raw = RawConfig::default();
		raw.images.host = Some("cdn without scheme".into());
		let err = raw.resolve().unwrap_err();
		assert!(err.to_string().contains("invalid image host"), "{err}");
	}
}
