//! Service configuration and preset locations.

use std::time::Duration;

/// Environment variable holding the upstream service key.
pub const SERVICE_KEY_ENV: &str = "CN_WEATHER_API_KEY";

pub const USER_AGENT: &str = "cn-weather-app/1.0";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read the service key from the environment. `None` means the forecast
/// call cannot proceed; the caller decides how to report that.
pub fn service_key() -> Option<String> {
    std::env::var(SERVICE_KEY_ENV).ok().filter(|k| !k.is_empty())
}

/// A region with its forecast grid coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GridLocation {
    pub province: &'static str,
    pub city: &'static str,
    pub district: &'static str,
    pub nx: i32,
    pub ny: i32,
}

/// Built-in locations usable without a coordinate lookup service.
pub const PRESET_LOCATIONS: &[(&str, GridLocation)] = &[
    ("北京市", GridLocation { province: "北京市", city: "北京市", district: "朝阳区", nx: 61, ny: 125 }),
    ("上海市", GridLocation { province: "上海市", city: "上海市", district: "浦东新区", nx: 65, ny: 129 }),
    ("广州市", GridLocation { province: "广东省", city: "广州市", district: "天河区", nx: 77, ny: 127 }),
    ("深圳市", GridLocation { province: "广东省", city: "深圳市", district: "南山区", nx: 78, ny: 128 }),
    ("成都市", GridLocation { province: "四川省", city: "成都市", district: "武侯区", nx: 54, ny: 105 }),
];

/// Look up a preset location by its display name.
pub fn preset_location(name: &str) -> Option<&'static GridLocation> {
    PRESET_LOCATIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, loc)| loc)
}
