//! Configuration loading and resolution.
//!
//! `load` is the entry point. It layers default config files, `--config`
//! files, `CARBUYER__*` environment variables and CLI flags, then validates
//! the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod ui;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
