//! Search for the next sustained calm stretch in the hourly forecast.

use chrono::{DateTime, Timelike};

use crate::model::{CalmWindow, WeatherRecord};
use crate::scoring::wind_force;

/// Forecast hours scanned at most.
pub const SEARCH_HORIZON_HOURS: usize = 36;
/// Consecutive calm hours that make a window.
pub const CALM_RUN_HOURS: usize = 8;
/// An hour is calm when its wind-force class is below this.
pub const CALM_MAX_FORCE: u32 = 3;
/// Local start hours a window may begin in, `[8, 21)`.
pub const START_HOURS: std::ops::Range<u32> = 8..21;

/// Finds the first run of [`CALM_RUN_HOURS`] calm hours whose first hour
/// starts between 8am and 9pm local time.
///
/// The start hour is checked only once the run is complete. A complete run
/// that starts outside the window is dropped whole and the scan resumes at
/// the following hour with a fresh run.
pub fn find_calm_window(hourly: &[WeatherRecord], timezone_offset: i64) -> Option<CalmWindow> {
    let mut run = 0usize;
    let mut candidate: Option<&WeatherRecord> = None;

    for record in hourly.iter().take(SEARCH_HORIZON_HOURS) {
        if wind_force(record.wind_speed) >= CALM_MAX_FORCE {
            run = 0;
            candidate = None;
            continue;
        }

        if run == 0 {
            candidate = Some(record);
        }
        run += 1;

        if run == CALM_RUN_HOURS {
            if let Some(start) = candidate {
                if starts_in_window(start.dt, timezone_offset) {
                    return Some(CalmWindow { start_dt: start.dt });
                }
                tracing::debug!(start_dt = start.dt, "calm run starts outside daytime window");
            }
            run = 0;
            candidate = None;
        }
    }

    None
}

fn starts_in_window(dt: i64, timezone_offset: i64) -> bool {
    DateTime::from_timestamp(dt + timezone_offset, 0)
        .is_some_and(|local| START_HOURS.contains(&local.hour()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-01T00:00:00 local when offset is applied
    const LOCAL_MIDNIGHT: i64 = 1_717_200_000;
    const OFFSET: i64 = -5 * 3600;

    fn hours(count: usize, calm: impl Fn(usize) -> bool) -> Vec<WeatherRecord> {
        (0..count)
            .map(|i| WeatherRecord {
                dt: LOCAL_MIDNIGHT - OFFSET + i as i64 * 3600,
                feels_like: 75.0,
                wind_speed: if calm(i) { 3.0 } else { 20.0 },
            })
            .collect()
    }

    #[test]
    fn finds_daytime_run() {
        let hourly = hours(36, |i| (10..=17).contains(&i));

        let window = find_calm_window(&hourly, OFFSET).expect("window");
        assert_eq!(window.start_dt, hourly[10].dt);
    }

    #[test]
    fn rejects_run_starting_at_night() {
        let hourly = hours(36, |i| (22..30).contains(&i));

        assert_eq!(find_calm_window(&hourly, OFFSET), None);
    }

    #[test]
    fn seven_hours_is_not_enough() {
        let hourly = hours(36, |i| (9..16).contains(&i));

        assert_eq!(find_calm_window(&hourly, OFFSET), None);
    }

    #[test]
    fn start_hour_bounds() {
        let at_eight = hours(36, |i| (8..16).contains(&i));
        assert_eq!(find_calm_window(&at_eight, OFFSET).map(|w| w.start_dt), Some(at_eight[8].dt));

        let at_twenty = hours(36, |i| (20..28).contains(&i));
        assert_eq!(
            find_calm_window(&at_twenty, OFFSET).map(|w| w.start_dt),
            Some(at_twenty[20].dt)
        );

        let at_seven = hours(36, |i| (7..15).contains(&i));
        assert_eq!(find_calm_window(&at_seven, OFFSET), None);

        let at_twenty_one = hours(36, |i| (21..29).contains(&i));
        assert_eq!(find_calm_window(&at_twenty_one, OFFSET), None);
    }

    #[test]
    fn failed_run_is_discarded_whole() {
        // Calm from 7am to 4pm: the run from 7am fails the window at its
        // 8th hour (2pm) and the remaining 3pm–4pm is too short.
        let hourly = hours(36, |i| (7..=16).contains(&i));
        assert_eq!(find_calm_window(&hourly, OFFSET), None);

        // Long enough after the reset: a new run starts at 3pm.
        let hourly = hours(36, |i| (7..=22).contains(&i));
        let window = find_calm_window(&hourly, OFFSET).expect("window");
        assert_eq!(window.start_dt, hourly[15].dt);
    }

    #[test]
    fn scans_at_most_36_hours() {
        // Next-day run at 10am (index 34) would need hours up to index 41.
        let hourly = hours(48, |i| i >= 34);
        assert_eq!(find_calm_window(&hourly, OFFSET), None);

        // Index 28 is 4am the next day; the run ends at 11am (index 35) but
        // starts outside the window.
        let hourly = hours(48, |i| i >= 28);
        assert_eq!(find_calm_window(&hourly, OFFSET), None);
    }

    #[test]
    fn short_forecast_is_scanned_fully() {
        let hourly = hours(18, |i| i >= 10);
        let window = find_calm_window(&hourly, OFFSET).expect("window");
        assert_eq!(window.start_dt, hourly[10].dt);

        assert_eq!(find_calm_window(&[], OFFSET), None);
    }

    #[test]
    fn wind_class_three_breaks_the_run() {
        let mut hourly = hours(36, |i| (10..=17).contains(&i));
        hourly[13].wind_speed = 8.0;
        assert_eq!(find_calm_window(&hourly, OFFSET), None);

        hourly[13].wind_speed = 7.9;
        assert!(find_calm_window(&hourly, OFFSET).is_some());
    }
}
