const MAX_TEMPERATURE_C: f64 = 10.0;
const MIN_WIND_KMH: f64 = 4.8;

/// Metric wind chill in °C, defined only for cold, windy conditions.
pub fn wind_chill(temp_c: f64, wind_kmh: f64) -> Option<f64> {
    if temp_c > MAX_TEMPERATURE_C || wind_kmh <= MIN_WIND_KMH {
        return None;
    }
    let factor = wind_kmh.powf(0.16);
    Some(13.12 + 0.6215 * temp_c - 11.37 * factor + 0.3965 * temp_c * factor)
}

pub fn wind_chill_label(temp_c: f64, wind_kmh: f64) -> String {
    match wind_chill(temp_c, wind_kmh) {
        Some(value) => format!("{value:.1} °C"),
        None => "N/A".to_string(),
    }
}
