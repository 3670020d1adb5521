//! Prefix filter over the city list.

use crate::cities::City;

/// Returns up to `limit` city names starting with `prefix`, ignoring case,
/// in source order. An empty prefix matches every city.
pub fn filter_cities(cities: &[City], prefix: &str, limit: usize) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    cities
        .iter()
        .filter(|city| city.name.to_lowercase().starts_with(&prefix))
        .take(limit)
        .map(|city| city.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(names: &[&str]) -> Vec<City> {
        names.iter().copied().map(City::new).collect()
    }

    #[test]
    fn test_filter_case_insensitive_source_order() {
        let list = cities(&["Moscow", "Omsk", "Oslo"]);
        assert_eq!(filter_cities(&list, "os", 10), ["Omsk", "Oslo"].map(String::from));
        assert_eq!(filter_cities(&list, "OS", 10), ["Omsk", "Oslo"].map(String::from));
    }

    #[test]
    fn test_filter_empty_prefix_takes_first() {
        let list = cities(&["Moscow", "Omsk", "Oslo", "Paris"]);
        assert_eq!(filter_cities(&list, "", 2), ["Moscow", "Omsk"].map(String::from));
    }

    #[test]
    fn test_filter_truncates() {
        let list = cities(&["Sochi", "Samara", "Saratov", "Surgut"]);
        assert_eq!(filter_cities(&list, "s", 3).len(), 3);
    }

    #[test]
    fn test_filter_no_match() {
        let list = cities(&["Moscow"]);
        assert!(filter_cities(&list, "x", 10).is_empty());
    }

    #[test]
    fn test_filter_cyrillic() {
        let list = cities(&["Москва", "Омск", "Осло"]);
        assert_eq!(filter_cities(&list, "ос", 10), ["Осло"].map(String::from));
        assert_eq!(filter_cities(&list, "МО", 10), ["Москва"].map(String::from));
    }
}
