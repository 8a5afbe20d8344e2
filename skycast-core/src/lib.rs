//! Core library for the `skycast` weather widget.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeather source behind the [`WeatherSource`] seam
//! - The snapshot model and icon mapping
//! - The view-state widget (loading / card / error state machine)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services that want to embed the widget.

pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod widget;

pub use config::Config;
pub use error::FetchError;
pub use model::{IconCategory, WeatherSnapshot};
pub use source::{WeatherSource, source_from_config};
pub use widget::{FetchTicket, ViewState, WeatherWidget};
