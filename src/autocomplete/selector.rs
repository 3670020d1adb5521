//! Autocomplete Selector Module
//!
//! State machine over the suggestion list and its highlighted cursor.
//!
//! ```text
//! Closed --input/focus with matches--> Open(cursor unset)
//! Open(unset) --Down--> Open(0) --Down/Up--> Open(i') (clamped, no wrap)
//! Open(i) --Enter/click--> Closed (selection made)
//! Closed --focus on empty input--> Open(first cities, cursor unset)
//! any --outside click / Escape / blank input / no matches--> Closed
//! ```

use tracing::debug;

use crate::autocomplete::filter_cities;
use crate::cities::City;

// == Selector State ==
/// The suggestion list and cursor live in the same variant, so replacing the
/// list always replaces the cursor with it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorState {
    #[default]
    Closed,
    Open {
        suggestions: Vec<String>,
        /// Highlighted suggestion, `None` when unset
        cursor: Option<usize>,
    },
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// Keys the selector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Down,
    Up,
    Enter,
    Escape,
}

/// Input the adapter feeds into the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent<'a> {
    /// The input text changed
    Input(&'a str),
    /// The input gained focus with the given text
    Focus(&'a str),
    Key(Key),
    /// A suggestion was clicked
    Click(usize),
    /// A click landed outside the input and the suggestion list
    ClickOutside,
}

/// What the adapter should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list or cursor changed and should be re-rendered
    Changed,
    /// Nothing changed
    Unchanged,
    /// A suggestion was accepted; the list is now closed
    Selected(String),
    /// Enter without a highlighted suggestion: look up the raw input instead
    Fallback,
}

// == Selector ==
#[derive(Debug, Clone)]
pub struct Selector {
    cities: Vec<City>,
    limit: usize,
    state: SelectorState,
}

impl Selector {
    // == Constructor ==
    /// Creates a closed selector over `cities`, showing at most `limit`
    /// suggestions.
    pub fn new(cities: Vec<City>, limit: usize) -> Self {
        Self {
            cities,
            limit,
            state: SelectorState::Closed,
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SelectorState::Open { .. })
    }

    /// Current suggestions; empty while closed.
    pub fn suggestions(&self) -> &[String] {
        match &self.state {
            SelectorState::Open { suggestions, .. } => suggestions,
            SelectorState::Closed => &[],
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            SelectorState::Open { cursor, .. } => cursor,
            SelectorState::Closed => None,
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    // == Handle ==
    /// Applies one event to the state machine.
    pub fn handle(&mut self, event: SelectorEvent<'_>) -> Outcome {
        let before = self.state.clone();

        let outcome = match event {
            SelectorEvent::Input(text) if text.trim().is_empty() => {
                self.dismiss();
                Outcome::Changed
            }
            SelectorEvent::Input(text) | SelectorEvent::Focus(text) => {
                self.refresh(text);
                Outcome::Changed
            }
            SelectorEvent::Key(Key::Down) => {
                self.move_cursor(Direction::Down);
                Outcome::Changed
            }
            SelectorEvent::Key(Key::Up) => {
                self.move_cursor(Direction::Up);
                Outcome::Changed
            }
            SelectorEvent::Key(Key::Enter) => match self.commit() {
                Some(city) => return Outcome::Selected(city),
                None => {
                    self.dismiss();
                    return Outcome::Fallback;
                }
            },
            SelectorEvent::Click(index) => match self.select(index) {
                Some(city) => return Outcome::Selected(city),
                None => Outcome::Changed,
            },
            SelectorEvent::Key(Key::Escape) | SelectorEvent::ClickOutside => {
                self.dismiss();
                Outcome::Changed
            }
        };

        if self.state == before {
            Outcome::Unchanged
        } else {
            outcome
        }
    }

    // == Refresh ==
    /// Recomputes the suggestion list for `input`, discarding the previous
    /// list and cursor.
    ///
    /// An empty `input` lists the first cities. No matches closes the
    /// selector.
    pub fn refresh(&mut self, input: &str) -> &SelectorState {
        let suggestions = filter_cities(&self.cities, input, self.limit);
        debug!(input, matches = suggestions.len(), "refreshed suggestions");

        self.state = if suggestions.is_empty() {
            SelectorState::Closed
        } else {
            SelectorState::Open {
                suggestions,
                cursor: None,
            }
        };
        &self.state
    }

    // == Move Cursor ==
    /// Moves the highlight one step, clamped to the list. Returns the new
    /// cursor.
    pub fn move_cursor(&mut self, direction: Direction) -> Option<usize> {
        let SelectorState::Open {
            suggestions,
            cursor,
        } = &mut self.state
        else {
            return None;
        };

        let last = suggestions.len().checked_sub(1)?;
        *cursor = match (direction, *cursor) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(i)) => Some((i + 1).min(last)),
            (Direction::Up, None) => None,
            (Direction::Up, Some(i)) => Some(i.saturating_sub(1)),
        };
        *cursor
    }

    // == Commit ==
    /// Accepts the highlighted suggestion and closes the list.
    ///
    /// Returns `None` and leaves the state alone when nothing is highlighted.
    pub fn commit(&mut self) -> Option<String> {
        let index = self.cursor()?;
        self.select(index)
    }

    // == Select ==
    /// Accepts the suggestion at `index` and closes the list.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let city = self.suggestions().get(index).cloned()?;
        self.dismiss();
        Some(city)
    }

    // == Dismiss ==
    /// Clears the list and the cursor.
    pub fn dismiss(&mut self) {
        self.state = SelectorState::Closed;
    }

    /// Replaces the city list. Any open list is closed since it was computed
    /// from the old cities.
    pub fn set_cities(&mut self, cities: Vec<City>) {
        self.cities = cities;
        self.dismiss();
    }
}
