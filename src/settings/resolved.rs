use carbuyer::{ImageUrlBuilder, RentPricing, TuiConfig};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub manufacturers: Vec<String>,
	pub pricing: RentPricing,
	pub images: ImageUrlBuilder,
	pub ui: TuiConfig,
	pub theme_name: String,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Manufacturers: {}", self.manufacturers.len());
		println!("  Base price per day: {}", self.pricing.base_per_day);
		println!("  Mileage factor: {}", self.pricing.mileage_factor);
		println!("  Age factor: {}", self.pricing.age_factor);
		println!("  Reference year: {}", self.pricing.reference_year);
		println!("  Image host: {}", self.images.base());
		println!(
			"  Image customer: {}",
			self.images.customer.as_deref().unwrap_or("(none)")
		);
		println!("  Prompt: {}", self.ui.prompt);
		println!("  Placeholder: {}", self.ui.placeholder);
		println!("  UI theme: {}", self.theme_name);
		println!(
			"  Log level: {}",
			self.log_level.as_deref().unwrap_or("(default)")
		);
	}
}
