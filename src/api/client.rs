use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::endpoints;
use crate::config;

/// HTTP client for the upstream forecast service
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(config::USER_AGENT)
            .timeout(config::REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: endpoints::WEATHER_API.to_string(),
        })
    }

    /// Fetch the ultra-short-term forecast for one grid cell.
    ///
    /// The service key is issued pre-encoded, so the URL is assembled by
    /// formatting rather than through query-pair encoding.
    pub async fn get_ultra_srt_fcst(
        &self,
        service_key: &str,
        base_date: &str,
        base_time: &str,
        nx: i32,
        ny: i32,
    ) -> std::result::Result<Value, reqwest::Error> {
        let url = format!(
            "{}{}?serviceKey={}&numOfRows={}&pageNo={}&dataType={}&base_date={}&base_time={}&nx={}&ny={}",
            self.base_url,
            endpoints::ULTRA_SRT_FCST,
            service_key,
            endpoints::NUM_OF_ROWS,
            endpoints::PAGE_NO,
            endpoints::DATA_TYPE,
            base_date,
            base_time,
            nx,
            ny
        );

        debug!("Ultra-short-term forecast request: base_date={} base_time={} nx={} ny={}", base_date, base_time, nx, ny);

        self.http.get(&url).send().await?.json().await
    }
}
