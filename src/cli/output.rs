use anyhow::Result;
use carbuyer::{CardOutcome, Selection};
use serde_json::json;

/// Print a plain-text representation of the card outcome.
pub(crate) fn print_plain(outcome: &CardOutcome) {
	if !outcome.accepted {
		println!("Cancelled");
		return;
	}

	match &outcome.selection {
		Selection::Candidate(value) => println!("{value}"),
		Selection::Created(value) => println!("{value} (new)"),
		Selection::Empty => println!("No manufacturer selected"),
	}
	if outcome.interest_sent > 0 {
		println!("Interest sent to owner ({}x)", outcome.interest_sent);
	}
}

pub(crate) fn format_outcome_json(outcome: &CardOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Selection::Candidate(value) => json!({
			"type": "candidate",
			"value": value,
		}),
		Selection::Created(value) => json!({
			"type": "created",
			"value": value,
		}),
		Selection::Empty => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"selection": selection,
		"interest_sent": outcome.interest_sent,
		"daily_rent": outcome.daily_rent,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the card outcome.
pub(crate) fn print_json(outcome: &CardOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
