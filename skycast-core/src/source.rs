use crate::{config::Config, error::FetchError, model::WeatherSnapshot};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A place current weather can be fetched from.
///
/// One production implementation exists ([`openweather::OpenWeather`]); the
/// trait is the seam that lets tests drive the widget with a scripted source.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the production source from config.
///
/// Fails with [`FetchError::Configuration`] when no credential is resolvable,
/// before any network activity.
pub fn source_from_config(config: &Config) -> Result<openweather::OpenWeather, FetchError> {
    let api_key = config.resolved_api_key().ok_or_else(FetchError::missing_key)?;
    Ok(openweather::OpenWeather::new(api_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MISSING_KEY_MESSAGE;

    #[test]
    fn source_from_config_errors_without_credential() {
        let cfg = Config::default();
        // Guard against ambient credentials leaking into the test.
        if cfg.resolved_api_key().is_some() {
            return;
        }

        let err = source_from_config(&cfg).unwrap_err();
        assert_eq!(err, FetchError::Configuration(MISSING_KEY_MESSAGE.to_string()));
    }

    #[test]
    fn source_from_config_works_with_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(source_from_config(&cfg).is_ok());
    }
}
