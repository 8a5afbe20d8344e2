use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::validator::Validation;
use inquire::{InquireError, Text};
use log::debug;
use skycast_core::{Config, WeatherWidget};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather widget for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and show current weather once.
    Show {
        /// City name; falls back to the configured default city.
        city: Option<String>,
    },

    /// Show weather and keep prompting for new cities to search.
    Interactive {
        /// Initial city; falls back to the configured default city.
        city: Option<String>,
    },

    /// Store the OpenWeather API key (and an optional default city).
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city } => show(city).await,
            Command::Interactive { city } => interactive(city).await,
            Command::Configure => configure(),
        }
    }
}

fn resolve_city(arg: Option<String>, config: &Config) -> anyhow::Result<String> {
    arg.or_else(|| config.default_city.clone()).context(
        "No city given and no default city configured.\n\
         Hint: pass a city name, or run `skycast configure` to set a default.",
    )
}

async fn show(city: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let city = resolve_city(city, &config)?;

    let mut widget = WeatherWidget::new(city);
    println!("{}", render(widget.state()));

    widget.refresh(&config).await;
    println!("{}", render(widget.state()));

    Ok(())
}

async fn interactive(city: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let city = resolve_city(city, &config)?;

    let mut widget = WeatherWidget::new(city);
    println!("{}", render(widget.state()));
    widget.refresh(&config).await;
    println!("{}", render(widget.state()));

    loop {
        let input = Text::new("Search city:")
            .with_validator(|text: &str| {
                // Submit is disabled while the trimmed field is empty.
                if text.trim().is_empty() {
                    Ok(Validation::Invalid("Enter a city name".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt();

        match input {
            Ok(text) => {
                widget.edit_search(text);
                // The widget treats a blank field as a no-op on its own;
                // the prompt validator should already have rejected it.
                // A commit enters the loading state, so the render below
                // shows the loading view, never a stale error.
                if widget.submit_search().is_some() {
                    debug!("searching for {:?}", widget.target_city());
                    println!("{}", render(widget.state()));
                    widget.refresh(&config).await;
                    println!("{}", render(widget.state()));
                }
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:")
        .with_validator(|text: &str| {
            if text.trim().is_empty() {
                Ok(Validation::Invalid("The key cannot be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let default_city = Text::new("Default city (optional):").prompt_skippable()?;
    if let Some(city) = default_city {
        let city = city.trim();
        if !city.is_empty() {
            config.set_default_city(city.to_string());
        }
    }

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());

    Ok(())
}
