//! Property-Based Tests for the Autocomplete Selector

use proptest::prelude::*;

use crate::autocomplete::{filter_cities, Direction, Key, Selector, SelectorEvent};
use crate::cities::City;

// == Strategies ==
fn cities_strategy() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec("[A-Za-z][a-z]{0,8}".prop_map(City::new), 0..30)
}

fn event_strategy() -> impl Strategy<Value = (u8, String)> {
    (0u8..7, "[a-zA-Z ]{0,3}")
}

fn apply(selector: &mut Selector, (kind, text): &(u8, String)) {
    let event = match kind {
        0 => SelectorEvent::Input(text),
        1 => SelectorEvent::Focus(text),
        2 => SelectorEvent::Key(Key::Down),
        3 => SelectorEvent::Key(Key::Up),
        4 => SelectorEvent::Key(Key::Enter),
        5 => SelectorEvent::Click(text.len()),
        _ => SelectorEvent::ClickOutside,
    };
    selector.handle(event);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Filtering twice with the same inputs gives the same ordered list.
    #[test]
    fn prop_filter_idempotent(cities in cities_strategy(), prefix in "[a-zA-Z]{0,3}", limit in 0usize..12) {
        let first = filter_cities(&cities, &prefix, limit);
        let second = filter_cities(&cities, &prefix, limit);
        prop_assert_eq!(first, second);
    }

    // Every suggestion matches, the limit holds, and source order is kept.
    #[test]
    fn prop_filter_is_ordered_subsequence(cities in cities_strategy(), prefix in "[a-zA-Z]{0,2}", limit in 0usize..12) {
        let filtered = filter_cities(&cities, &prefix, limit);
        prop_assert!(filtered.len() <= limit);

        let expected: Vec<String> = cities
            .iter()
            .map(|c| c.name.clone())
            .filter(|n| n.to_lowercase().starts_with(&prefix.to_lowercase()))
            .take(limit)
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    // An empty prefix yields the first `limit` cities.
    #[test]
    fn prop_empty_prefix_takes_head(cities in cities_strategy(), limit in 0usize..12) {
        let filtered = filter_cities(&cities, "", limit);
        let head: Vec<String> = cities.iter().take(limit).map(|c| c.name.clone()).collect();
        prop_assert_eq!(filtered, head);
    }

    // Whatever happens, the cursor is unset or indexes the current list, and
    // an open list is never empty.
    #[test]
    fn prop_cursor_always_valid(
        cities in cities_strategy(),
        limit in 1usize..10,
        events in prop::collection::vec(event_strategy(), 0..40)
    ) {
        let mut selector = Selector::new(cities, limit);
        for event in &events {
            apply(&mut selector, event);

            let len = selector.suggestions().len();
            prop_assert!(len <= limit);
            if selector.is_open() {
                prop_assert!(len > 0);
            }
            if let Some(cursor) = selector.cursor() {
                prop_assert!(cursor < len);
            }
        }
    }

    // `len` presses of Down from unset land on the last index, and further
    // presses stay there.
    #[test]
    fn prop_down_clamps_at_last(count in 1usize..10, extra in 0usize..5) {
        let cities: Vec<City> = (0..count).map(|i| City::new(format!("City{i}"))).collect();
        let mut selector = Selector::new(cities, 10);
        selector.refresh("c");

        for _ in 0..count + extra {
            selector.move_cursor(Direction::Down);
        }
        prop_assert_eq!(selector.cursor(), Some(count - 1));
    }
}
