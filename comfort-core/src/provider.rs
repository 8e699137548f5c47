use async_trait::async_trait;
use std::fmt::Debug;

use crate::{config::Location, model::WeatherSnapshot};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Parameters of a single upstream fetch.
#[derive(Debug, Clone, Copy)]
pub struct OneCallQuery<'a> {
    pub location: Location,
    pub api_key: &'a str,
}

/// Source of current conditions plus the hourly forecast.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn one_call(&self, query: &OneCallQuery<'_>) -> anyhow::Result<WeatherSnapshot>;
}
