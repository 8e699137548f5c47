//! Wind-force classification and the 1–5 comfort scores.

/// Upper (exclusive) mph bound for wind-force classes 0 through 8.
const WIND_FORCE_THRESHOLDS_MPH: [f64; 9] = [1.0, 4.0, 8.0, 13.0, 18.0, 24.0, 31.0, 38.0, 46.0];

/// Classifies a wind speed in mph on a Beaufort-like scale.
///
/// Speeds of 46 mph and above fall back to `round(speed / 5)` without an
/// upper cap, so storm-force winds yield classes above 8. Classes saturate at
/// `u32::MAX`.
pub fn wind_force(speed_mph: f64) -> u32 {
    WIND_FORCE_THRESHOLDS_MPH
        .iter()
        .position(|&limit| speed_mph < limit)
        .map(|class| class as u32)
        .unwrap_or_else(|| {
            u32::try_from(round_half_up(speed_mph / 5.0).max(0)).unwrap_or(u32::MAX)
        })
}

/// Scores an apparent temperature in °F. 75–85 inclusive is ideal; each
/// tier widens the band by 5° on both sides.
pub fn temperature_score(feels_like_f: f64) -> u8 {
    let t = feels_like_f;
    if (75.0..=85.0).contains(&t) {
        5
    } else if (70.0..75.0).contains(&t) || (t > 85.0 && t <= 90.0) {
        4
    } else if (65.0..70.0).contains(&t) || (t > 90.0 && t <= 95.0) {
        3
    } else if (60.0..65.0).contains(&t) || (t > 95.0 && t <= 100.0) {
        2
    } else {
        1
    }
}

/// Scores a wind-force class. There is no 4: class 2 scores 5, class 3 scores 3.
pub fn wind_score(force: u32) -> u8 {
    match force {
        0..=2 => 5,
        3 => 3,
        4 => 2,
        _ => 1,
    }
}

pub fn overall_score(temperature_score: u8, wind_score: u8) -> u8 {
    temperature_score.min(wind_score)
}

/// Rounds halves toward positive infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
