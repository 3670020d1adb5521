//! Autocomplete Module
//!
//! Prefix filtering of the city list and the keyboard-navigable selector
//! built on top of it.

mod filter;
mod selector;

#[cfg(test)]
mod property_tests;

pub use filter::filter_cities;
pub use selector::{Direction, Key, Outcome, Selector, SelectorEvent, SelectorState};

/// Default maximum number of suggestions shown at once
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
