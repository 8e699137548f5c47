use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::{config::UpstreamConfig, model::WeatherSnapshot};

use super::{OneCallQuery, WeatherProvider};

/// Parts of the One Call response that are not requested.
const EXCLUDE: &str = "minutely,daily,alerts";

/// OpenWeather One Call client, imperial units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(upstream: &UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = upstream.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { base_url: upstream.base_url.clone(), http })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn one_call(&self, query: &OneCallQuery<'_>) -> Result<WeatherSnapshot> {
        let lat = query.location.latitude.to_string();
        let lon = query.location.longitude.to_string();

        tracing::debug!(url = %self.base_url, %lat, %lon, "requesting One Call data");

        let res = self
            .http
            .get(self.base_url.as_str())
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("exclude", EXCLUDE),
                ("units", "imperial"),
                ("appid", query.api_key),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (One Call)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather One Call response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather One Call request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        parse_one_call(&body)
    }
}

pub(crate) fn parse_one_call(body: &str) -> Result<WeatherSnapshot> {
    serde_json::from_str(body).context("Failed to parse OpenWeather One Call JSON")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_CALL_BODY: &str = r#"{
        "lat": 41.8781,
        "lon": -87.6298,
        "timezone": "America/Chicago",
        "timezone_offset": -18000,
        "current": {
            "dt": 1717254900,
            "temp": 81.3,
            "feels_like": 83.62,
            "humidity": 58,
            "wind_speed": 6.91,
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky" }]
        },
        "hourly": [
            { "dt": 1717254000, "temp": 81.0, "feels_like": 83.1, "wind_speed": 7.2, "pop": 0 },
            { "dt": 1717257600, "temp": 82.0, "feels_like": 84.0, "wind_speed": 9.4, "pop": 0.1 }
        ]
    }"#;

    #[test]
    fn parses_one_call_fields() {
        let snapshot = parse_one_call(ONE_CALL_BODY).expect("fixture should parse");

        assert_eq!(snapshot.timezone_offset, -18000);
        assert_eq!(snapshot.current.dt, 1_717_254_900);
        assert_eq!(snapshot.current.feels_like, 83.62);
        assert_eq!(snapshot.current.wind_speed, 6.91);
        assert_eq!(snapshot.hourly.len(), 2);
        assert_eq!(snapshot.hourly[1].dt, 1_717_257_600);
    }

    #[test]
    fn missing_hourly_is_an_error() {
        let err = parse_one_call(
            r#"{"timezone_offset": -18000, "current": {"dt": 1, "feels_like": 70.0, "wind_speed": 0.0}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse OpenWeather One Call JSON"));
    }

    #[test]
    fn empty_hourly_is_accepted() {
        let snapshot = parse_one_call(
            r#"{"timezone_offset": 0, "current": {"dt": 1, "feels_like": 70.0, "wind_speed": 0.0}, "hourly": []}"#,
        )
        .expect("should parse");
        assert!(snapshot.hourly.is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_one_call("<html>Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("Failed to parse OpenWeather One Call JSON"));

        let err = parse_one_call(r#"{"current": {"dt": 1}}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn builds_with_timeout() {
        let upstream = UpstreamConfig { timeout_secs: Some(3), ..UpstreamConfig::default() };
        let provider = OpenWeatherProvider::new(&upstream).expect("client");
        assert_eq!(provider.base_url, upstream.base_url);
    }
}
