//! Orchestration for a single vehicle card.

use tracing::debug;

use crate::selector::SelectorState;
use crate::services::{CardServices, DefaultServices};
use crate::vehicle::Vehicle;

/// Values displayed on the summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
	pub title: String,
	pub daily_rent: f64,
	pub image_url: String,
	pub transmission: &'static str,
	pub drive: String,
	pub city_mpg: u32,
}

impl CardSummary {
	pub fn price_label(&self) -> String {
		format!("${:.0}/day", self.daily_rent)
	}

	pub fn mpg_label(&self) -> String {
		format!("{} MPG", self.city_mpg)
	}
}

/// A labelled vehicle attribute shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
	pub label: &'static str,
	pub value: String,
}

impl DetailRow {
	fn new(label: &'static str, value: impl ToString) -> Self {
		Self {
			label,
			value: value.to_string(),
		}
	}
}

/// Owns the selector and overlay flag of one card and forwards work to the
/// injected [`CardServices`].
pub struct CardController<S = DefaultServices> {
	vehicle: Vehicle,
	selector: SelectorState,
	overlay_visible: bool,
	interest_sent: usize,
	services: S,
}

impl<S: CardServices> CardController<S> {
	pub fn new(vehicle: Vehicle, candidates: Vec<String>, services: S) -> Self {
		Self {
			vehicle,
			selector: SelectorState::new(candidates),
			overlay_visible: false,
			interest_sent: 0,
			services,
		}
	}

	pub fn vehicle(&self) -> &Vehicle {
		&self.vehicle
	}

	pub fn services(&self) -> &S {
		&self.services
	}

	pub fn selector(&self) -> &SelectorState {
		&self.selector
	}

	pub fn selector_mut(&mut self) -> &mut SelectorState {
		&mut self.selector
	}

	pub fn summary(&self) -> CardSummary {
		let vehicle = &self.vehicle;
		CardSummary {
			title: vehicle.display_name(),
			daily_rent: self.services.rent_price(vehicle.city_mpg, vehicle.year),
			image_url: self.services.image_url(vehicle),
			transmission: vehicle.transmission.label(),
			drive: vehicle.drive.label(),
			city_mpg: vehicle.city_mpg,
		}
	}

	/// Every known attribute except the model year, in feed order.
	pub fn detail_rows(&self) -> Vec<DetailRow> {
		let v = &self.vehicle;
		let mut rows = vec![DetailRow::new("City MPG", v.city_mpg)];
		if let Some(class) = &v.class {
			rows.push(DetailRow::new("Class", class));
		}
		if let Some(mpg) = v.combination_mpg {
			rows.push(DetailRow::new("Combination MPG", mpg));
		}
		if let Some(cylinders) = v.cylinders {
			rows.push(DetailRow::new("Cylinders", cylinders));
		}
		if let Some(displacement) = v.displacement {
			rows.push(DetailRow::new("Displacement", displacement));
		}
		rows.push(DetailRow::new("Drive", &v.drive));
		if let Some(fuel) = &v.fuel_type {
			rows.push(DetailRow::new("Fuel type", fuel));
		}
		if let Some(mpg) = v.highway_mpg {
			rows.push(DetailRow::new("Highway MPG", mpg));
		}
		rows.push(DetailRow::new("Make", &v.make));
		rows.push(DetailRow::new("Model", &v.model));
		rows.push(DetailRow::new("Transmission", v.transmission.label()));
		rows
	}

	pub fn overlay_visible(&self) -> bool {
		self.overlay_visible
	}

	pub fn open_overlay(&mut self) {
		self.overlay_visible = true;
	}

	pub fn close_overlay(&mut self) {
		self.overlay_visible = false;
	}

	pub fn notify_interest(&mut self) {
		debug!(vehicle = %self.vehicle.display_name(), "forwarding interest");
		self.services.notify_interest(&self.vehicle);
		self.interest_sent += 1;
	}

	/// Number of interest notifications forwarded so far.
	pub fn interest_sent(&self) -> usize {
		self.interest_sent
	}
}
