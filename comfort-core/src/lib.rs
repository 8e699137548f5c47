//! Core library for the comfort dashboard.
//!
//! This crate defines:
//! - Comfort scoring (wind-force classes, temperature/wind/overall scores)
//! - Chart series assembly and the calm-period search
//! - Configuration and the upstream weather provider
//! - The [`DashboardService`] that ties one upstream fetch to one payload
//!
//! It is used by `comfort-server`, but the scoring pieces are plain functions
//! and can be reused on any [`WeatherSnapshot`].

pub mod calm;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod scoring;
pub mod series;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, Location, UpstreamConfig};
pub use dashboard::{DashboardService, assemble_dashboard};
pub use error::DashboardError;
pub use model::{CalmWindow, DashboardPayload, ScoredPoint, WeatherRecord, WeatherSnapshot};
pub use provider::{OneCallQuery, OpenWeatherProvider, WeatherProvider};
