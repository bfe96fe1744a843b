//! Text rendering of decoded forecasts.

use super::features::FeatureSet;

/// Separator between per-timestamp forecast blocks.
const BLOCK_SEPARATOR: &str = "\n---\n";

/// Floats in the report keep a trailing `.0` for whole numbers, so a 40%
/// humidity reads "40.0%" rather than "40%".
fn fmt_float(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

/// Build the date/time/region header for one forecast block.
///
/// `date_cn` is the already formatted "{Y}年 {m}月 {d}日" part; `time` is the
/// 4-digit HHMM forecast time. The header ends with a space so the first
/// feature line attaches directly.
pub fn header(date_cn: &str, time: &str, province: &str, city: &str, district: &str) -> String {
    format!(
        "{} {}时 {}分 {} {} {} 地区的天气是 ",
        date_cn,
        &time[..2],
        &time[2..],
        province,
        city,
        district
    )
}

/// Format the present features as labeled lines, in canonical order.
pub fn format_features(features: &FeatureSet) -> String {
    let mut lines = Vec::new();
    if let Some(sky) = features.sky {
        lines.push(format!("天空状况: {}", sky));
    }
    if let Some(rain) = features.rain {
        lines.push(format!("降水类型: {}", rain));
    }
    if let Some(amount) = &features.rain_amount {
        lines.push(format!("降水量: {}mm", amount));
    }
    if let Some(temp) = features.temp {
        lines.push(format!("气温: {}℃", fmt_float(temp)));
    }
    if let Some(humidity) = features.humidity {
        lines.push(format!("湿度: {}%", fmt_float(humidity)));
    }
    if let Some(direction) = features.wind_direction {
        lines.push(format!("风向: {}", direction));
    }
    if let Some(speed) = &features.wind_speed {
        lines.push(format!("风速: {}m/s", speed));
    }
    lines.join("\n")
}

/// One rendered forecast block: header plus feature lines.
pub fn forecast_block(
    date_cn: &str,
    time: &str,
    province: &str,
    city: &str,
    district: &str,
    features: &FeatureSet,
) -> String {
    let mut block = header(date_cn, time, province, city, district);
    block.push_str(&format_features(features));
    block
}

/// Join rendered blocks into the final report.
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_splits_time_and_keeps_trailing_space() {
        let h = header("2026年 08月 30日", "1400", "北京市", "北京市", "朝阳区");
        assert_eq!(h, "2026年 08月 30日 14时 00分 北京市 北京市 朝阳区 地区的天气是 ");
    }

    #[test]
    fn features_render_in_canonical_order() {
        let features = FeatureSet {
            sky: Some("晴"),
            rain: Some("雨"),
            rain_amount: Some("5".to_string()),
            temp: Some(23.5),
            humidity: Some(40.0),
            wind_direction: Some("东北"),
            wind_speed: Some("3.2".to_string()),
        };
        assert_eq!(
            format_features(&features),
            "天空状况: 晴\n降水类型: 雨\n降水量: 5mm\n气温: 23.5℃\n湿度: 40.0%\n风向: 东北\n风速: 3.2m/s"
        );
    }

    #[test]
    fn whole_floats_keep_one_decimal() {
        let features = FeatureSet {
            temp: Some(23.0),
            humidity: Some(40.0),
            ..Default::default()
        };
        assert_eq!(format_features(&features), "气温: 23.0℃\n湿度: 40.0%");
    }

    #[test]
    fn empty_feature_set_renders_nothing_after_header() {
        let block = forecast_block(
            "2026年 08月 30日",
            "0900",
            "上海市",
            "上海市",
            "浦东新区",
            &FeatureSet::default(),
        );
        assert!(block.ends_with("地区的天气是 "));
    }

    #[test]
    fn end_to_end_block_matches_expected_text() {
        let features = FeatureSet {
            sky: Some("晴"),
            temp: Some(23.5),
            humidity: Some(40.0),
            ..Default::default()
        };
        let block = forecast_block(
            "2026年 08月 30日",
            "1400",
            "北京市",
            "北京市",
            "朝阳区",
            &features,
        );
        assert_eq!(
            block,
            "2026年 08月 30日 14时 00分 北京市 北京市 朝阳区 地区的天气是 天空状况: 晴\n气温: 23.5℃\n湿度: 40.0%"
        );
    }

    #[test]
    fn blocks_join_with_separator_line() {
        let joined = join_blocks(&["a".to_string(), "b".to_string()]);
        assert_eq!(joined, "a\n---\nb");
    }
}
