//! 날씨 API 클라이언트
//!
//! OpenWeather "current weather" 엔드포인트 호출을 캡슐화

use crate::config::Config;
use crate::error::{AppResult, WeatherError};
use crate::models::WeatherInfo;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 좌표로 현재 날씨를 조회하는 능력
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, latitude: f64, longitude: f64)
        -> Result<WeatherInfo, WeatherError>;
}

/// OpenWeather 클라이언트
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// 설정에서 클라이언트 생성
    ///
    /// API 키가 없으면 `WeatherError::MissingApiKey`.
    pub fn new(config: &Config) -> AppResult<Self> {
        let api_key = config
            .openweather_api_key
            .clone()
            .ok_or(WeatherError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.weather_timeout_secs))
            .build()
            .map_err(WeatherError::from)?;

        Ok(Self {
            http,
            base_url: config.openweather_base_url.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherInfo, WeatherError> {
        debug!("날씨 API 호출: lat={}, lon={}", latitude, longitude);

        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "kr"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        WeatherInfo::from_current_weather(&payload)
    }
}
