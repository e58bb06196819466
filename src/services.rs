//! Collaborators the card relies on but does not own: pricing, image URLs and
//! owner notification.

use chrono::Datelike;
use tracing::info;
use url::Url;

use crate::vehicle::Vehicle;

pub const DEFAULT_IMAGE_HOST: &str = "https://cdn.imagin.studio/getimage";

/// Services consumed by [`CardController`](crate::CardController).
pub trait CardServices {
	/// Daily rental price in whole currency units.
	fn rent_price(&self, city_mpg: u32, year: i32) -> f64;

	/// Address of a rendered picture of the vehicle.
	fn image_url(&self, vehicle: &Vehicle) -> String;

	/// Let the owner know someone is interested. Fire-and-forget.
	fn notify_interest(&self, vehicle: &Vehicle);
}

/// Linear daily-rate model: a base price plus mileage and age surcharges.
#[derive(Debug, Clone, PartialEq)]
pub struct RentPricing {
	pub base_per_day: f64,
	pub mileage_factor: f64,
	pub age_factor: f64,
	pub reference_year: i32,
}

impl RentPricing {
	pub fn daily_rate(&self, city_mpg: u32, year: i32) -> f64 {
		let mileage_rate = f64::from(city_mpg) * self.mileage_factor;
		let age_rate = (f64::from(self.reference_year) - f64::from(year)) * self.age_factor;
		(self.base_per_day + mileage_rate + age_rate).round()
	}
}

impl Default for RentPricing {
	fn default() -> Self {
		Self {
			base_per_day: 50.0,
			mileage_factor: 0.1,
			age_factor: 0.05,
			reference_year: chrono::Local::now().year(),
		}
	}
}

/// Builds image CDN URLs from a vehicle's make, model family and year.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUrlBuilder {
	base: Url,
	pub customer: Option<String>,
	pub zoom_type: String,
	pub angle: Option<String>,
}

impl ImageUrlBuilder {
	pub fn new(base: &str) -> Result<Self, url::ParseError> {
		Ok(Self {
			base: Url::parse(base)?,
			customer: None,
			zoom_type: "fullscreen".to_string(),
			angle: None,
		})
	}

	pub fn base(&self) -> &Url {
		&self.base
	}

	pub fn build(&self, vehicle: &Vehicle) -> String {
		let mut url = self.base.clone();
		{
			let mut pairs = url.query_pairs_mut();
			if let Some(customer) = &self.customer {
				pairs.append_pair("customer", customer);
			}
			pairs.append_pair("make", &vehicle.make);
			pairs.append_pair("modelFamily", model_family(&vehicle.model));
			pairs.append_pair("zoomType", &self.zoom_type);
			pairs.append_pair("modelYear", &vehicle.year.to_string());
			if let Some(angle) = &self.angle {
				pairs.append_pair("angle", angle);
			}
		}
		url.into()
	}
}

impl Default for ImageUrlBuilder {
	fn default() -> Self {
		Self::new(DEFAULT_IMAGE_HOST).expect("default image host must be a valid URL")
	}
}

/// First word of the model name, e.g. `golf` for `golf gti`.
fn model_family(model: &str) -> &str {
	model.split(' ').next().unwrap_or(model)
}

/// Message delivered when someone is interested in a vehicle.
pub fn interest_message(vehicle: &Vehicle) -> String {
	format!(
		"Interested in contacting the owner of {} {}",
		vehicle.make, vehicle.model
	)
}

/// Production services: configured pricing and image URLs, with interest
/// notifications emitted as log events.
#[derive(Debug, Clone, Default)]
pub struct DefaultServices {
	pub pricing: RentPricing,
	pub images: ImageUrlBuilder,
}

impl DefaultServices {
	pub fn new(pricing: RentPricing, images: ImageUrlBuilder) -> Self {
		Self { pricing, images }
	}
}

impl CardServices for DefaultServices {
	fn rent_price(&self, city_mpg: u32, year: i32) -> f64 {
		self.pricing.daily_rate(city_mpg, year)
	}

	fn image_url(&self, vehicle: &Vehicle) -> String {
		self.images.build(vehicle)
	}

	fn notify_interest(&self, vehicle: &Vehicle) {
		info!(
			target: "carbuyer::interest",
			make = %vehicle.make,
			model = %vehicle.model,
			"{}",
			interest_message(vehicle)
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vehicle::{Drive, Transmission};

	fn golf() -> Vehicle {
		Vehicle::new(
			"volkswagen",
			"golf gti",
			2021,
			25,
			Transmission::Automatic,
			Drive::new("fwd"),
		)
	}

	fn pricing(reference_year: i32) -> RentPricing {
		RentPricing {
			reference_year,
			..RentPricing::default()
		}
	}

	#[test]
	fn rate_adds_mileage_and_age_surcharges() {
		// 50 + 25 * 0.1 + 3 * 0.05 = 52.65
		assert_eq!(pricing(2024).daily_rate(25, 2021), 53.0);
		assert_eq!(pricing(2024).daily_rate(0, 2024), 50.0);
	}

	#[test]
	fn future_model_years_reduce_the_age_surcharge() {
		assert_eq!(pricing(2020).daily_rate(0, 2040), 49.0);
	}

	#[test]
	fn extreme_model_years_do_not_overflow() {
		let rate = pricing(2024).daily_rate(24, i32::MIN);
		assert!(rate.is_finite());
		assert!(rate > 1.0e8);

		let rate = pricing(i32::MIN).daily_rate(0, i32::MAX);
		assert!(rate.is_finite());
		assert!(rate < 0.0);
	}

	#[test]
	fn image_url_uses_model_family_and_year() {
		let mut images = ImageUrlBuilder::default();
		images.customer = Some("demo".into());
		images.angle = Some("29".into());
		insta::assert_snapshot!(
			images.build(&golf()),
			@"https://cdn.imagin.studio/getimage?customer=demo&make=volkswagen&modelFamily=golf&zoomType=fullscreen&modelYear=2021&angle=29"
		);
	}

	#[test]
	fn image_url_omits_unset_parameters() {
		let url = ImageUrlBuilder::default().build(&golf());
		assert!(!url.contains("customer="));
		assert!(!url.contains("angle="));
		assert!(url.contains("modelFamily=golf"));
	}

	#[test]
	fn invalid_base_is_rejected() {
		assert!(ImageUrlBuilder::new("not a url").is_err());
	}

	#[test]
	fn interest_message_names_the_vehicle() {
		assert_eq!(
			interest_message(&golf()),
			"Interested in contacting the owner of volkswagen golf gti"
		);
	}
}
