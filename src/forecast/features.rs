//! Per-slot decoding of raw category values into typed weather features.

use std::collections::HashMap;

use tracing::warn;

use super::codes;

/// Decoded features for one forecast time. Field order is the render order.
///
/// A field is `None` when its category was absent, empty, or undecodable;
/// the distinction is logged at the point of failure, not stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureSet {
    pub sky: Option<&'static str>,
    pub rain: Option<&'static str>,
    pub rain_amount: Option<String>,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_direction: Option<&'static str>,
    pub wind_speed: Option<String>,
}

fn non_empty<'a>(values: &'a HashMap<String, String>, cate: &str) -> Option<&'a str> {
    values.get(cate).map(String::as_str).filter(|v| !v.is_empty())
}

/// Decode the recognized categories of one time slot.
///
/// Each field is handled independently: a bad value in one category never
/// affects the others, and extraction itself cannot fail.
pub fn extract_features(values: &HashMap<String, String>) -> FeatureSet {
    let mut features = FeatureSet::default();

    if let Some(raw) = non_empty(values, "SKY") {
        match raw.parse::<i64>().ok().and_then(codes::sky_label) {
            Some(label) => features.sky = Some(label),
            None => warn!("Unrecognized SKY value: {}", raw),
        }
    }

    if let Some(raw) = non_empty(values, "PTY") {
        match raw.parse::<i64>().ok().and_then(codes::rain_label) {
            Some(label) => {
                features.rain = Some(label);
                if let Some(amount) = values.get("RN1") {
                    if amount != codes::NO_PRECIPITATION {
                        features.rain_amount = Some(amount.clone());
                    }
                }
            }
            None => warn!("Unrecognized PTY value: {}", raw),
        }
    }

    if let Some(raw) = non_empty(values, "T1H") {
        match raw.parse::<f64>() {
            Ok(temp) => features.temp = Some(temp),
            Err(_) => warn!("Unparseable T1H value: {}", raw),
        }
    }

    if let Some(raw) = non_empty(values, "REH") {
        match raw.parse::<f64>() {
            Ok(humidity) => features.humidity = Some(humidity),
            Err(_) => warn!("Unparseable REH value: {}", raw),
        }
    }

    // Wind direction and speed come as a pair: WSD is only reported
    // alongside a direction it belongs to.
    if let (Some(vec), Some(wsd)) = (non_empty(values, "VEC"), non_empty(values, "WSD")) {
        match vec.parse::<f64>() {
            Ok(deg) => {
                features.wind_direction = Some(codes::resolve_direction(deg));
                features.wind_speed = Some(wsd.to_string());
            }
            Err(_) => warn!("Unparseable wind values: VEC={}, WSD={}", vec, wsd),
        }
    }

    features
}
