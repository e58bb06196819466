//! Core crate exports for rendering a `carbuyer` vehicle card.
//!
//! The searchable manufacturer selector lives in [`selector`] and is backed by
//! the pure [`filter`] function. [`CardController`] wires the selector, the
//! vehicle record and the external collaborators together, and the [`tui`]
//! module renders everything in the terminal.

pub mod app_dirs;
pub mod card;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod selector;
pub mod services;
pub mod tui;
pub mod vehicle;

pub use card::{CardController, CardSummary, DetailRow};
pub use error::{SelectorError, VehicleError};
pub use filter::{filter, normalize};
pub use selector::{Selection, SelectorOption, SelectorPhase, SelectorState};
pub use services::{CardServices, DefaultServices, ImageUrlBuilder, RentPricing};
pub use tui::{CardOutcome, Theme, TuiConfig, run_card};
pub use vehicle::{Drive, Transmission, Vehicle};
