//! Static code tables for the ultra-short-term forecast categories.
//!
//! The upstream API reports sky condition (SKY), precipitation type (PTY)
//! and wind direction (VEC) as coded values; these tables translate them
//! into the Chinese terms used in the rendered report.

/// Wind angle to 16-point compass code.
///
/// Order matters: nearest-match scanning walks this table front to back and
/// keeps the first entry on a tie. Both 0 and 360 map to north.
const DEG_CODE: &[(f64, &str)] = &[
    (0.0, "N"),
    (360.0, "N"),
    (180.0, "S"),
    (270.0, "W"),
    (90.0, "E"),
    (22.5, "NNE"),
    (45.0, "NE"),
    (67.5, "ENE"),
    (112.5, "ESE"),
    (135.0, "SE"),
    (157.5, "SSE"),
    (202.5, "SSW"),
    (225.0, "SW"),
    (247.5, "WSW"),
    (292.5, "WNW"),
    (315.0, "NW"),
    (337.5, "NNW"),
];

/// Chinese name for a compass code.
fn direction_cn(code: &str) -> &'static str {
    match code {
        "N" => "北",
        "NNE" => "东北偏北",
        "NE" => "东北",
        "ENE" => "东偏北",
        "E" => "东",
        "ESE" => "东偏南",
        "SE" => "东南",
        "SSE" => "西南偏南",
        "S" => "南",
        "SSW" => "西南偏南",
        "SW" => "西南",
        "WSW" => "西偏南",
        "W" => "西",
        "WNW" => "西偏北",
        "NW" => "西北",
        "NNW" => "北偏西",
        _ => "北",
    }
}

/// Resolve a wind angle in degrees to its Chinese compass-direction name.
///
/// Exact table keys resolve directly; anything else takes the table entry
/// with the smallest absolute difference. The comparison is a plain linear
/// difference, not circular distance, which is fine in practice because the
/// table carries both 0 and 360.
pub fn resolve_direction(deg: f64) -> &'static str {
    if let Some((_, code)) = DEG_CODE.iter().copied().find(|(key, _)| *key == deg) {
        return direction_cn(code);
    }

    let mut min_abs = 360.0;
    let mut closest = "N";
    for (key, code) in DEG_CODE.iter().copied() {
        let diff = (key - deg).abs();
        if diff < min_abs {
            min_abs = diff;
            closest = code;
        }
    }
    direction_cn(closest)
}

/// SKY category code to label.
pub fn sky_label(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("晴"),
        3 => Some("多云"),
        4 => Some("阴"),
        _ => None,
    }
}

/// PTY category code to label.
pub fn rain_label(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("无降水"),
        1 => Some("雨"),
        2 => Some("雨夹雪"),
        3 => Some("雪"),
        5 => Some("毛毛雨"),
        6 => Some("冻雨"),
        7 => Some("阵雪"),
        _ => None,
    }
}

/// Value PTY reports when there is no precipitation to measure.
pub const NO_PRECIPITATION: &str = "无降水";
