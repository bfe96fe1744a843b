//! Forecast pipeline: fetch, decode, extract, render.

pub mod codes;
pub mod decode;
pub mod features;
pub mod render;

use chrono::{Duration, Local};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::api::client::WeatherClient;
use crate::config;
use self::decode::TimeSlot;

/// Failures that stop a forecast request before anything can be rendered.
///
/// Per-item and per-field decode problems are not represented here; those
/// are contained (and logged) inside the pipeline stages.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("CN_WEATHER_API_KEY 环境变量未设置")]
    MissingServiceKey,
    #[error("API 请求返回为空")]
    EmptyResponse,
    #[error("API 响应中缺少 '{0}' 字段")]
    MissingField(&'static str),
    #[error("天气 API 请求失败: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetch and render the forecast for a region.
///
/// This is the boundary the tool host calls: it always returns a string.
/// No-data and error conditions come back as distinguishable message text,
/// never as an Err or a panic.
pub async fn get_forecast(
    client: &WeatherClient,
    province: &str,
    city: &str,
    district: &str,
    nx: i32,
    ny: i32,
) -> String {
    match fetch_report(client, province, city, district, nx, ny).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Forecast request for {} {} {} failed: {}", province, city, district, e);
            format!("获取天气信息时发生错误: {}", e)
        }
    }
}

async fn fetch_report(
    client: &WeatherClient,
    province: &str,
    city: &str,
    district: &str,
    nx: i32,
    ny: i32,
) -> Result<String, ForecastError> {
    let service_key = config::service_key().ok_or(ForecastError::MissingServiceKey)?;

    // Ultra-short-term forecasts are issued hourly; the most recent complete
    // issuance is one hour behind the clock.
    let now = Local::now();
    let base = now - Duration::hours(1);
    let base_date = base.format("%Y%m%d").to_string();
    let base_time = base.format("%H%M").to_string();
    // The report header carries the current date, not the issuance date.
    let header_date = now.format("%Y年 %m月 %d日").to_string();

    let data = client
        .get_ultra_srt_fcst(&service_key, &base_date, &base_time, nx, ny)
        .await?;

    let items = validate_envelope(&data)?;
    info!("Received {} forecast items for {} {} {}", items.len(), province, city, district);

    Ok(render_report(province, city, district, &header_date, items))
}

/// Check the `response -> body -> items -> item` envelope and pull out the
/// item list. Each missing link is reported by name; an empty list is not an
/// error here, it is the no-data case the renderer turns into a message.
pub fn validate_envelope(data: &Value) -> Result<&[Value], ForecastError> {
    if data.is_null() {
        return Err(ForecastError::EmptyResponse);
    }
    let response = data.get("response").ok_or(ForecastError::MissingField("response"))?;
    let body = response.get("body").ok_or(ForecastError::MissingField("body"))?;
    let items = body.get("items").ok_or(ForecastError::MissingField("items"))?;
    let item = items.get("item").ok_or(ForecastError::MissingField("item"))?;

    match item {
        Value::Array(list) => Ok(list.as_slice()),
        // upstream sends "" instead of [] when there is nothing to report
        _ => Ok(&[]),
    }
}

/// Turn the validated item list into the final report string.
///
/// All three degraded outcomes (no items, no decodable slots, no renderable
/// blocks) map to their own message so callers can tell them apart.
pub fn render_report(
    province: &str,
    city: &str,
    district: &str,
    header_date: &str,
    items: &[Value],
) -> String {
    if items.is_empty() {
        return format!("{} {} {} 地区的 weather information could not be found.", province, city, district);
    }

    let slots = decode::group_by_time(items);
    if slots.is_empty() {
        return format!("无法处理 {} {} {} 地区的天气信息。", province, city, district);
    }

    let mut blocks = Vec::new();
    for slot in &slots {
        match render_slot(slot, province, city, district, header_date) {
            Some(block) => blocks.push(block),
            None => {
                warn!("Skipping forecast slot with unusable time: {:?}", slot.time);
            }
        }
    }

    if blocks.is_empty() {
        return format!("无法生成 {} {} {} 地区的天气信息", province, city, district);
    }

    render::join_blocks(&blocks)
}

/// Render one time slot; a slot whose forecast time is not 4 ASCII digits
/// cannot fill the HH/MM header and is skipped rather than failing the batch.
fn render_slot(
    slot: &TimeSlot,
    province: &str,
    city: &str,
    district: &str,
    header_date: &str,
) -> Option<String> {
    if slot.time.len() != 4 || !slot.time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let features = features::extract_features(&slot.values);
    Some(render::forecast_block(
        header_date,
        &slot.time,
        province,
        city,
        district,
        &features,
    ))
}
