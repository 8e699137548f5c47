use crate::model::{ChartData, ScoredPoint, WeatherRecord, WeatherSnapshot};
use crate::scoring::{overall_score, temperature_score, wind_force, wind_score};

/// Forecast hours charted after the current observation.
pub const CHART_FORECAST_HOURS: usize = 3;

const MS_PER_HOUR: i64 = 3_600_000;

/// Local wall-clock millis: the UTC instant shifted by the location's offset
/// and re-expressed as if it were UTC.
pub fn local_timestamp_ms(dt: i64, timezone_offset: i64) -> i64 {
    (dt + timezone_offset) * 1000
}

fn truncate_to_hour(ms: i64) -> i64 {
    ms - ms.rem_euclid(MS_PER_HOUR)
}

/// Scores for one record as `(overall, wind, temperature)`.
pub fn score_record(record: &WeatherRecord) -> (u8, u8, u8) {
    let temp = temperature_score(record.feels_like);
    let wind = wind_score(wind_force(record.wind_speed));
    (overall_score(temp, wind), wind, temp)
}

/// Builds the three chart series from the current observation (truncated to
/// the hour) and the next forecast hours. `hourly[0]` duplicates the current
/// hour and is skipped.
pub fn build_chart_data(snapshot: &WeatherSnapshot) -> ChartData {
    let offset = snapshot.timezone_offset;
    let current = std::iter::once((
        truncate_to_hour(local_timestamp_ms(snapshot.current.dt, offset)),
        &snapshot.current,
    ));
    let forecast = snapshot
        .hourly
        .iter()
        .skip(1)
        .take(CHART_FORECAST_HOURS)
        .map(|record| (local_timestamp_ms(record.dt, offset), record));

    let mut chart = ChartData::default();
    for (timestamp, record) in current.chain(forecast) {
        let (overall, wind, temp) = score_record(record);
        chart.overall.push(ScoredPoint(timestamp, overall));
        chart.wind.push(ScoredPoint(timestamp, wind));
        chart.temp.push(ScoredPoint(timestamp, temp));
    }
    chart
}
