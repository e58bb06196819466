use crate::services::CardServices;
use crate::vehicle::{Drive, Transmission, Vehicle};

/// Deterministic services for interface tests.
pub(crate) struct FixedServices;

impl CardServices for FixedServices {
	fn rent_price(&self, _city_mpg: u32, _year: i32) -> f64 {
		61.0
	}

	fn image_url(&self, _vehicle: &Vehicle) -> String {
		"https://img.test/corolla.png".to_string()
	}

	fn notify_interest(&self, _vehicle: &Vehicle) {}
}

pub(crate) fn sample_vehicle() -> Vehicle {
	let mut vehicle = Vehicle::new(
		"toyota",
		"corolla",
		2019,
		31,
		Transmission::Automatic,
		Drive::new("fwd"),
	);
	vehicle.class = Some("midsize car".into());
	vehicle.fuel_type = Some("gas".into());
	vehicle.highway_mpg = Some(40);
	vehicle
}
