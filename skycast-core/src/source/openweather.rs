use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{IconCategory, WeatherSnapshot, round_degrees},
};

use super::WeatherSource;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap current-weather source.
#[derive(Debug, Clone)]
pub struct OpenWeather {
    api_key: String,
    http: Client,
}

impl OpenWeather {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeather {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!("requesting current weather for {city:?}");

        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        let status = res.status();
        if let Err(err) = ensure_success(status) {
            debug!("current weather request for {city:?} failed with status {status}");
            return Err(err);
        }

        let body = res
            .text()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        snapshot_from_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

/// Every non-2xx status maps to the same fixed request failure; the
/// response body is not consulted.
fn ensure_success(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::request_failed())
    }
}

/// Build a snapshot from a successful response body.
///
/// This is the only place snapshots are constructed from provider data;
/// any parse or shape failure leaves no partial snapshot behind.
fn snapshot_from_response(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Request(err.to_string()))?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| FetchError::Request("response contained no weather entry".to_string()))?;

    let observed_at = DateTime::<Utc>::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

    Ok(WeatherSnapshot {
        city: parsed.name,
        temperature_c: round_degrees(parsed.main.temp),
        description: condition.description.clone(),
        high_c: round_degrees(parsed.main.temp_max),
        low_c: round_degrees(parsed.main.temp_min),
        icon: IconCategory::from_provider_code(&condition.icon),
        observed_at,
    })
}
