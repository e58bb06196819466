//! Terminal front-end for the vehicle card.
//!
//! [`App`] wraps a [`CardController`](crate::CardController) with the bits of
//! state that only matter on screen: keyboard focus, the highlighted dropdown
//! entry and a status line. Every key maps onto one named transition of the
//! selector or the card.

mod actions;
mod app;
pub mod components;
mod render;
mod runtime;
pub mod theme;

pub use app::{App, CardOutcome, Focus, TuiConfig};
pub use runtime::run_card;
pub use theme::Theme;

#[cfg(test)]
pub(crate) mod test_support;
