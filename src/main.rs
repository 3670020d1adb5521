//! Weather Widget - terminal front end
//!
//! Each line typed on stdin is either new input text or a `:command`
//! standing in for a keyboard or mouse event.

use std::io;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_widget::autocomplete::{Key, Selector};
use weather_widget::cache::SystemClock;
use weather_widget::cities::load_cities;
use weather_widget::render::{Renderer, TextRenderer};
use weather_widget::storage::FileStore;
use weather_widget::weather::OpenWeatherClient;
use weather_widget::{Config, Dispatch, WeatherWidget, WidgetEvent};

const HELP: &str = "\
Type a city name to see suggestions. Commands:
  :down :up      move the highlight
  :enter         accept the highlight, or look up the typed text
  :esc :blur     close the suggestions
  :focus         reopen suggestions for the typed text
  :pick N        click suggestion N
  :go            look up the typed text
  :forget        drop the cached weather for the typed text
  :reload        re-read the city list
  :quit          exit";

/// Parsed line of terminal input.
enum Command {
    Event(WidgetEvent),
    Forget,
    Reload,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Option<Command> {
    let Some(cmd) = line.strip_prefix(':') else {
        return Some(Command::Event(WidgetEvent::Input(line.to_string())));
    };

    let mut parts = cmd.split_whitespace();
    let command = match parts.next()? {
        "down" => Command::Event(WidgetEvent::Key(Key::Down)),
        "up" => Command::Event(WidgetEvent::Key(Key::Up)),
        "enter" => Command::Event(WidgetEvent::Key(Key::Enter)),
        "esc" => Command::Event(WidgetEvent::Key(Key::Escape)),
        "blur" => Command::Event(WidgetEvent::ClickOutside),
        "focus" => Command::Event(WidgetEvent::Focus),
        "pick" => Command::Event(WidgetEvent::ClickSuggestion(parts.next()?.parse().ok()?)),
        "go" => Command::Event(WidgetEvent::Submit),
        "forget" => Command::Forget,
        "reload" => Command::Reload,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the widget
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_widget=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, suggestion_limit={}, cities={}, cache={}",
        config.cache_ttl,
        config.suggestion_limit,
        config.cities_path.display(),
        config.cache_path.display()
    );
    if config.api_key.is_empty() {
        warn!("WEATHER_API_KEY is not set; lookups will be rejected by the API");
    }

    // A missing city list only disables suggestions
    let cities = match load_cities(&config.cities_path).await {
        Ok(cities) => cities,
        Err(e) => {
            error!("Failed to load city list: {}", e);
            Vec::new()
        }
    };

    let client = OpenWeatherClient::from_config(&config).context("building weather client")?;
    let mut widget = WeatherWidget::with_store(
        Selector::new(cities, config.suggestion_limit),
        FileStore::open(&config.cache_path),
        SystemClock,
        config.cache_window(),
        client,
    );
    let mut renderer = TextRenderer::new(io::stdout());

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_line(line.trim_end_matches(['\r', '\n'])) {
            Some(Command::Event(event)) => event,
            Some(Command::Forget) => {
                let city = widget.input().to_string();
                widget.forget(&city);
                continue;
            }
            Some(Command::Reload) => {
                match load_cities(&config.cities_path).await {
                    Ok(cities) => widget.selector_mut().set_cities(cities),
                    Err(e) => error!("Failed to reload city list, keeping the current one: {}", e),
                }
                info!("City list holds {} cities", widget.selector().cities().len());
                continue;
            }
            Some(Command::Help) | None => {
                println!("{HELP}");
                continue;
            }
            Some(Command::Quit) => break,
        };

        match widget.dispatch(event) {
            Dispatch::Suggestions => renderer.suggestions(widget.selector())?,
            Dispatch::Selected(city) => println!("Выбран город: {city}"),
            Dispatch::Lookup(raw) => match widget.lookup(&raw).await {
                Ok(lookup) => renderer.weather(&lookup)?,
                Err(e) => renderer.error(&e)?,
            },
            Dispatch::Idle => {}
        }
    }

    let stats = widget.cache_stats();
    info!(
        "Cache stats: hits={}, misses={}, stale={}, corrupt={}, writes={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.stale_evictions,
        stats.corrupt_evictions,
        stats.writes,
        stats.hit_rate()
    );
    Ok(())
}
