//! Widget Module
//!
//! Orchestration of one weather widget: owns the typed input, the
//! autocomplete selector, the expiring cache and the weather source, and
//! turns user events into suggestion updates and lookups.
//!
//! Lookups take `&mut self`, so a caller can only have one fetch in flight
//! and results are displayed in request order.

use chrono::Duration;
use tracing::info;

use crate::autocomplete::{Key, Outcome, Selector, SelectorEvent};
use crate::cache::{CacheStats, Clock, ExpiringCache, SystemClock};
use crate::error::{Result, WidgetError};
use crate::storage::KeyValueStore;
use crate::weather::{WeatherRecord, WeatherSource};

// == Events ==
/// User interaction with the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The input text was replaced
    Input(String),
    /// The input gained focus
    Focus,
    Key(Key),
    /// The suggestion at the index was clicked
    ClickSuggestion(usize),
    /// A click outside the input and the suggestion list
    ClickOutside,
    /// The lookup button was pressed
    Submit,
}

/// What the adapter should do after dispatching an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Re-render the suggestion list
    Suggestions,
    /// A suggestion became the input value
    Selected(String),
    /// Run a lookup for the contained raw input
    Lookup(String),
    /// Nothing to do
    Idle,
}

// == Lookup ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Cache,
    Network,
}

/// A resolved weather record and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub record: WeatherRecord,
    pub source: LookupSource,
}

// == Weather Widget ==
pub struct WeatherWidget<S, W, C = SystemClock> {
    input: String,
    selector: Selector,
    cache: ExpiringCache<WeatherRecord, S, C>,
    source: W,
}

impl<S, W, C> WeatherWidget<S, W, C>
where
    S: KeyValueStore,
    W: WeatherSource,
    C: Clock,
{
    pub fn new(selector: Selector, cache: ExpiringCache<WeatherRecord, S, C>, source: W) -> Self {
        Self {
            input: String::new(),
            selector,
            cache,
            source,
        }
    }

    /// Convenience constructor building the cache from its parts.
    pub fn with_store(selector: Selector, store: S, clock: C, window: Duration, source: W) -> Self {
        Self::new(selector, ExpiringCache::new(store, clock, window), source)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Selector access for the adapter, e.g. to install a reloaded city list.
    pub fn selector_mut(&mut self) -> &mut Selector {
        &mut self.selector
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    // == Dispatch ==
    /// Applies one user event.
    pub fn dispatch(&mut self, event: WidgetEvent) -> Dispatch {
        let outcome = match event {
            WidgetEvent::Input(text) => {
                self.input = text;
                self.selector.handle(SelectorEvent::Input(&self.input))
            }
            WidgetEvent::Focus => self.selector.handle(SelectorEvent::Focus(&self.input)),
            WidgetEvent::Key(key) => self.selector.handle(SelectorEvent::Key(key)),
            WidgetEvent::ClickSuggestion(index) => self.selector.handle(SelectorEvent::Click(index)),
            WidgetEvent::ClickOutside => self.selector.handle(SelectorEvent::ClickOutside),
            WidgetEvent::Submit => {
                self.selector.dismiss();
                return Dispatch::Lookup(self.input.clone());
            }
        };

        match outcome {
            Outcome::Changed => Dispatch::Suggestions,
            Outcome::Unchanged => Dispatch::Idle,
            Outcome::Selected(city) => {
                self.input.clone_from(&city);
                Dispatch::Selected(city)
            }
            Outcome::Fallback => Dispatch::Lookup(self.input.clone()),
        }
    }

    // == Lookup ==
    /// Resolves current conditions for `raw`, from the cache when fresh and
    /// from the weather source otherwise.
    ///
    /// Blank input is rejected before any network call. Failed fetches are
    /// never cached.
    pub async fn lookup(&mut self, raw: &str) -> Result<Lookup> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(WidgetError::EmptyInput);
        }

        if let Some(record) = self.cache.get(city) {
            info!(city, "served weather from cache");
            return Ok(Lookup {
                record,
                source: LookupSource::Cache,
            });
        }

        let record = self.source.fetch(city).await?;
        self.cache.put(city, &record);

        Ok(Lookup {
            record,
            source: LookupSource::Network,
        })
    }

    /// Drops any cached record for `city`.
    pub fn forget(&mut self, city: &str) {
        self.cache.invalidate(city);
    }
}
