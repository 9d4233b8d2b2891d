use itertools::Itertools;

use crate::{
    api::open_weather::HourlyForecast,
    core::point::Point,
    quantity::energy::KilowattHours,
};

/// Estimated generation in kilowatt-hours per unit of UV index.
///
/// A fixed linear proxy, not a physical model.
const UV_INDEX_YIELD: f64 = 5.0;

/// Derive the hourly generation forecast from the raw weather forecast,
/// sorted ascending by time.
#[must_use]
pub fn predict_generation(hourly: &[HourlyForecast]) -> Vec<Point<KilowattHours>> {
    let mut forecast = hourly
        .iter()
        .map(|entry| Point::new(entry.time, KilowattHours(entry.uv_index * UV_INDEX_YIELD)))
        .collect_vec();
    forecast.sort_by_key(|point| point.time);
    forecast
}
