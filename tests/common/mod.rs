#![allow(dead_code)]

use chrono::NaiveDate;
pub use indicata::domain::ohlcv::{OhlcvBar, PriceSeries};

/// Small-cap daily closes and volumes that finish on a three-day rally.
pub fn rally_closes() -> Vec<f64> {
    vec![
        4.23, 4.23, 4.25, 4.17, 3.98, 3.92, 4.32, 4.12, 4.11, 4.07, 4.07, 3.99, 3.93, 4.03, 3.99,
        4.2, 4.2, 4.24, 4.22, 4.13, 4.15, 4.26, 4.21, 5.25, 5.27, 5.29, 5.23, 5.2, 5.08, 5.06,
        5.23, 5.72, 5.46, 5.32, 5.27, 5.28, 5.25, 5.07, 4.99, 5.15, 5.04, 5.14, 5.34, 5.42,
    ]
}

pub fn rally_volumes() -> Vec<i64> {
    vec![
        1321400, 1141700, 624900, 735600, 1472900, 1647000, 2908400, 1796600, 1097800, 1371700,
        1516600, 860500, 811500, 1384900, 1016000, 1181500, 1279000, 1352900, 1273900, 699400,
        910700, 1810400, 1306600, 5903500, 3467900, 1415400, 1413600, 1770900, 1311700, 989000,
        1418900, 2839900, 2733900, 945500, 823500, 1248800, 1567000, 1868200, 1148500, 1154800,
        2139600, 1474200, 1435800, 1210800,
    ]
}

/// Daily bars that drift lower and bounce on the final day.
pub fn pullback_closes() -> Vec<f64> {
    vec![
        21.049999, 19.780001, 18.120001, 18.49, 18.040001, 18.18, 18.58, 18.309999, 20.450001,
        19.200001, 18.25, 18.25, 17.0, 18.01, 17.440001, 18.67, 20.27, 19.75, 19.25, 19.719999,
        21.23, 21.299999, 21.959999, 22.809999, 21.375, 20.6, 22.045, 21.700001, 21.99, 20.120001,
        19.93, 20.35, 21.139999, 20.51, 20.690001, 20.84, 20.4, 19.73, 18.940001, 18.799999,
        18.66, 18.209999, 17.9, 18.870001,
    ]
}

pub fn pullback_volumes() -> Vec<i64> {
    vec![
        291100, 310500, 464500, 414000, 246000, 241900, 176400, 201700, 591400, 546700, 448400,
        281200, 628000, 502200, 521800, 479700, 503700, 304500, 278600, 179200, 317400, 431600,
        410000, 293900, 482400, 427900, 316000, 273500, 139400, 156200, 151200, 113400, 188000,
        240900, 193800, 193700, 197600, 243300, 250400, 167000, 298200, 390300, 268100, 626800,
    ]
}

pub fn pullback_highs() -> Vec<f64> {
    vec![
        21.9, 20.879999, 19.780001, 19.41, 18.65, 18.24, 18.764999, 18.655001, 20.889999, 20.18,
        19.120001, 18.6, 18.379999, 18.129999, 18.4, 19.200001, 20.719999, 20.66, 19.76, 20.0,
        21.48, 21.82, 22.200001, 23.16, 23.955, 21.58, 22.51, 22.24, 22.1, 22.289, 20.74, 20.92,
        21.41, 21.34, 20.84, 21.790001, 21.219999, 21.281, 19.924999, 19.35, 19.27, 18.5, 18.68,
        18.938999,
    ]
}

pub fn pullback_lows() -> Vec<f64> {
    vec![
        20.754999, 19.57, 17.809999, 18.25, 17.900999, 17.860001, 17.959999, 17.9, 18.120001,
        19.049999, 17.83, 17.969999, 16.700001, 16.549999, 17.309999, 17.5, 18.674999, 19.620001,
        18.709999, 18.865, 19.809999, 20.879999, 20.49, 21.459999, 21.07, 20.450001, 20.370001,
        21.41, 21.620001, 20.02, 19.799999, 19.75, 20.379999, 20.25, 20.26, 20.440001, 19.68,
        19.66, 18.570999, 18.41, 18.08, 17.91, 17.65, 17.790001,
    ]
}

pub fn pullback_series() -> PriceSeries {
    PriceSeries::new(
        pullback_closes(),
        pullback_highs(),
        pullback_lows(),
        pullback_volumes(),
    )
}

/// 30 highs and lows with only the last 17 closes available.
pub fn stochastic_highs() -> Vec<f64> {
    vec![
        127.01, 127.62, 126.59, 127.35, 128.17, 128.43, 127.37, 126.42, 126.90, 126.85, 125.65,
        125.72, 127.16, 127.72, 127.69, 128.22, 128.27, 128.09, 128.27, 127.74, 128.77, 129.29,
        130.06, 129.12, 129.29, 128.47, 128.09, 128.65, 129.14, 128.64,
    ]
}

pub fn stochastic_lows() -> Vec<f64> {
    vec![
        125.36, 126.16, 124.93, 126.09, 126.82, 126.48, 126.03, 124.83, 126.39, 125.72, 124.56,
        124.57, 125.07, 126.86, 126.63, 126.80, 126.71, 126.80, 126.13, 125.92, 126.99, 127.81,
        128.47, 128.06, 127.61, 127.60, 127.00, 126.90, 127.49, 127.40,
    ]
}

pub fn stochastic_closes() -> Vec<f64> {
    vec![
        127.29, 127.18, 128.01, 127.11, 127.73, 127.06, 127.33, 128.71, 127.87, 128.58, 128.60,
        127.93, 128.11, 127.60, 127.60, 128.69, 128.27,
    ]
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn generate_bars(start_date: &str, closes: &[f64], volumes: &[i64]) -> Vec<OhlcvBar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| OhlcvBar {
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close * 1.01,
            low: close * 0.99,
            close,
            volume,
        })
        .collect()
}
