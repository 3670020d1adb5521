//! Render Module
//!
//! Text rendering of lookups, suggestions and errors. The renderer is a pure
//! sink: it never feeds state back into the widget.

use std::io::{self, Write};

use crate::autocomplete::Selector;
use crate::error::WidgetError;
use crate::weather::WeatherRecord;
use crate::widget::{Lookup, LookupSource};

// == Formatting ==
/// Weather card for one record.
pub fn format_weather(record: &WeatherRecord) -> String {
    format!(
        "Погода в {}\n\
         Температура: {}°C (мин {}°C, макс {}°C)\n\
         Влажность: {}%\n\
         Давление: {} гПа\n\
         Ветер: {} м/с\n\
         Осадки: {} мм\n\
         Описание: {}",
        record.city,
        record.temperature,
        record.temp_min,
        record.temp_max,
        record.humidity,
        record.pressure,
        record.wind_speed,
        record.precipitation,
        record.description,
    )
}

/// Suggestion list, one per line, with the highlighted entry marked by `>`.
/// Empty when the list is closed.
pub fn format_suggestions(selector: &Selector) -> String {
    let cursor = selector.cursor();
    selector
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if cursor == Some(i) { '>' } else { ' ' };
            format!("{marker} {i}. {name}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_error(err: &WidgetError) -> String {
    match err {
        WidgetError::Http { .. } | WidgetError::EmptyInput => err.to_string(),
        other => format!("Ошибка: {other}"),
    }
}

// == Renderer ==
/// Display sink for the widget.
pub trait Renderer {
    fn weather(&mut self, lookup: &Lookup) -> io::Result<()>;
    fn suggestions(&mut self, selector: &Selector) -> io::Result<()>;
    fn error(&mut self, err: &WidgetError) -> io::Result<()>;
}

/// Renderer writing plain text to any [`Write`].
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn weather(&mut self, lookup: &Lookup) -> io::Result<()> {
        writeln!(self.out, "{}", format_weather(&lookup.record))?;
        if lookup.source == LookupSource::Cache {
            writeln!(self.out, "(из кэша)")?;
        }
        self.out.flush()
    }

    fn suggestions(&mut self, selector: &Selector) -> io::Result<()> {
        let list = format_suggestions(selector);
        if !list.is_empty() {
            writeln!(self.out, "{list}")?;
        }
        self.out.flush()
    }

    fn error(&mut self, err: &WidgetError) -> io::Result<()> {
        writeln!(self.out, "{}", format_error(err))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::Direction;
    use crate::cities::City;

    fn record() -> WeatherRecord {
        WeatherRecord {
            city: "Paris".to_string(),
            temperature: 12.5,
            temp_min: 10.0,
            temp_max: 14.0,
            humidity: 81,
            pressure: 1012,
            wind_speed: 4.1,
            precipitation: 0.0,
            description: "облачно".to_string(),
        }
    }

    #[test]
    fn test_format_weather() {
        let text = format_weather(&record());
        assert!(text.starts_with("Погода в Paris\n"));
        assert!(text.contains("Температура: 12.5°C (мин 10°C, макс 14°C)"));
        assert!(text.contains("Влажность: 81%"));
        assert!(text.ends_with("Описание: облачно"));
    }

    #[test]
    fn test_format_suggestions_marks_cursor() {
        let mut selector = Selector::new(vec![City::new("Omsk"), City::new("Oslo")], 10);
        selector.refresh("o");
        selector.move_cursor(Direction::Down);
        selector.move_cursor(Direction::Down);

        assert_eq!(format_suggestions(&selector), "  0. Omsk\n> 1. Oslo");
    }

    #[test]
    fn test_format_suggestions_closed() {
        let selector = Selector::new(vec![City::new("Omsk")], 10);
        assert_eq!(format_suggestions(&selector), "");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            format_error(&WidgetError::Parse("missing field `main`".to_string())),
            "Ошибка: Parse error: missing field `main`"
        );
        assert_eq!(
            format_error(&WidgetError::Http {
                status: 401,
                reason: "Unauthorized".to_string()
            }),
            "Ошибка 401: Unauthorized"
        );
    }

    #[test]
    fn test_text_renderer_cache_marker() {
        let mut renderer = TextRenderer::new(Vec::new());
        let lookup = Lookup {
            record: record(),
            source: LookupSource::Cache,
        };
        renderer.weather(&lookup).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.ends_with("(из кэша)\n"));
    }
}
