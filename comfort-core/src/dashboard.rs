//! Fetch-then-score pipeline that produces the dashboard payload.

use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use crate::{
    calm::find_calm_window,
    clock::{Clock, SystemClock},
    config::{Config, Location},
    error::DashboardError,
    format::{CALM_PERIOD_NONE, format_in_timezone, format_local_clock},
    model::{CurrentConditions, DashboardPayload, WeatherSnapshot},
    provider::{OneCallQuery, OpenWeatherProvider, WeatherProvider},
    scoring::{overall_score, round_half_up, temperature_score, wind_force, wind_score},
    series::build_chart_data,
};

/// Everything needed to answer a dashboard request. Holds no per-request
/// state, so one instance serves concurrent requests.
#[derive(Debug, Clone)]
pub struct DashboardService {
    api_key: Option<String>,
    location: Location,
    display_tz: Tz,
    provider: Arc<dyn WeatherProvider>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(
        api_key: Option<String>,
        location: Location,
        display_tz: Tz,
        provider: Arc<dyn WeatherProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { api_key, location, display_tz, provider, clock }
    }

    /// OpenWeather-backed service on the system clock.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = OpenWeatherProvider::new(&config.upstream)?;

        Ok(Self::new(
            config.api_key().map(str::to_owned),
            config.location,
            config.display_tz()?,
            Arc::new(provider),
            Arc::new(SystemClock),
        ))
    }

    /// Fetches upstream data once and derives the full payload.
    ///
    /// A missing API key fails before any upstream call is made.
    pub async fn dashboard(&self) -> Result<DashboardPayload, DashboardError> {
        let api_key = self.api_key.as_deref().ok_or(DashboardError::MissingApiKey)?;

        let query = OneCallQuery { location: self.location, api_key };
        let snapshot = self.provider.one_call(&query).await?;

        Ok(assemble_dashboard(&snapshot, self.clock.now(), &self.display_tz)?)
    }
}

/// Derives the payload from one upstream snapshot. `now` feeds only the
/// `updated_at` string, rendered in `display_tz`.
pub fn assemble_dashboard(
    snapshot: &WeatherSnapshot,
    now: DateTime<Utc>,
    display_tz: &Tz,
) -> Result<DashboardPayload> {
    let current = &snapshot.current;
    let force = wind_force(current.wind_speed);
    let temp = temperature_score(current.feels_like);
    let wind = wind_score(force);

    let chart_data = build_chart_data(snapshot);

    let calm_period = match find_calm_window(&snapshot.hourly, snapshot.timezone_offset) {
        Some(window) => {
            let start = format_local_clock(window.start_dt, snapshot.timezone_offset)?;
            tracing::info!(start_dt = window.start_dt, %start, "calm period found");
            start
        }
        None => {
            tracing::info!(hours = snapshot.hourly.len(), "no calm period in forecast");
            CALM_PERIOD_NONE.to_string()
        }
    };

    Ok(DashboardPayload {
        current: CurrentConditions {
            feels_like: round_half_up(current.feels_like),
            wind_speed_mph: current.wind_speed,
            wind_speed_bft: force,
            overall_score: overall_score(temp, wind),
            wind_score: wind,
            temp_score: temp,
            updated_at: format_in_timezone(now, display_tz),
        },
        chart_data,
        calm_period,
    })
}
