use serde::{Deserialize, Serialize};

/// One observation or forecast hour as reported upstream (imperial units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// UTC epoch seconds.
    pub dt: i64,
    /// Apparent temperature, °F.
    pub feels_like: f64,
    /// Wind speed, mph.
    pub wind_speed: f64,
}

/// The subset of a One Call response the dashboard consumes.
///
/// `hourly` is ascending by `dt`; `hourly[0]` is normally the same hour as
/// `current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: WeatherRecord,
    pub hourly: Vec<WeatherRecord>,
    /// Offset of the location from UTC, seconds.
    pub timezone_offset: i64,
}

/// `(local wall-clock millis, score)`; serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPoint(pub i64, pub u8);

impl ScoredPoint {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn score(&self) -> u8 {
        self.1
    }
}

/// Start of the first qualifying calm stretch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalmWindow {
    /// UTC epoch seconds of the first calm hour.
    pub start_dt: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub feels_like: i64,
    pub wind_speed_mph: f64,
    pub wind_speed_bft: u32,
    pub overall_score: u8,
    pub wind_score: u8,
    pub temp_score: u8,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub overall: Vec<ScoredPoint>,
    pub wind: Vec<ScoredPoint>,
    pub temp: Vec<ScoredPoint>,
}

/// Body of a successful dashboard response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub current: CurrentConditions,
    pub chart_data: ChartData,
    pub calm_period: String,
}
