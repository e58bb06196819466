//! Built-in manufacturer names offered by the selector.

pub const MANUFACTURERS: &[&str] = &[
	"Acura",
	"Alfa Romeo",
	"Aston Martin",
	"Audi",
	"Bentley",
	"BMW",
	"Buick",
	"Cadillac",
	"Chevrolet",
	"Chrysler",
	"Citroen",
	"Dodge",
	"Ferrari",
	"Fiat",
	"Ford",
	"GMC",
	"Honda",
	"Hyundai",
	"Infiniti",
	"Jaguar",
	"Jeep",
	"Kia",
	"Lamborghini",
	"Land Rover",
	"Lexus",
	"Lincoln",
	"Maserati",
	"Mazda",
	"McLaren",
	"Mercedes-Benz",
	"MINI",
	"Mitsubishi",
	"Nissan",
	"Porsche",
	"Ram",
	"Rolls-Royce",
	"Subaru",
	"Tesla",
	"Toyota",
	"Volkswagen",
	"Volvo",
];

/// Owned copy of [`MANUFACTURERS`].
pub fn manufacturers() -> Vec<String> {
	MANUFACTURERS.iter().map(|name| name.to_string()).collect()
}
