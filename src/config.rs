use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 프로그램 설정
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 요청에 limit 이 없을 때 반환할 최대 코스 수
    pub default_limit: i64,
    /// 로그 필터 (RUST_LOG 가 없을 때 사용)
    pub log_level: String,
    /// 상세 로그 출력 여부
    pub verbose_logging: bool,
    // --- 날씨 API 설정 ---
    pub openweather_api_key: Option<String>,
    pub openweather_base_url: String,
    /// 요청 타임아웃 (초)
    pub weather_timeout_secs: u64,
    /// 동시에 보내는 날씨 요청 수
    pub weather_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: 10,
            log_level: "info".to_string(),
            verbose_logging: false,
            openweather_api_key: None,
            openweather_base_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            weather_timeout_secs: 10,
            weather_concurrency: 4,
        }
    }
}

impl Config {
    /// 기본값 위에 환경 변수를 적용
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// TOML 파일을 읽은 뒤 환경 변수를 적용
    ///
    /// # 매개변수
    /// - `path`: 설정 파일 경로 (없으면 기본값에서 시작)
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base: Self = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
                toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
                    path: path.display().to_string(),
                    source,
                })?
            }
            None => return Self::from_env(),
        };
        base.with_env_overrides()
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            default_limit: env_parse("DEFAULT_LIMIT", "integer", self.default_limit)?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or(self.log_level),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool", self.verbose_logging)?,
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .or(self.openweather_api_key)
                .filter(|key| !key.is_empty()),
            openweather_base_url: std::env::var("OPENWEATHER_BASE_URL")
                .unwrap_or(self.openweather_base_url),
            weather_timeout_secs: env_parse(
                "WEATHER_TIMEOUT_SECS",
                "integer",
                self.weather_timeout_secs,
            )?,
            weather_concurrency: env_parse(
                "WEATHER_CONCURRENCY",
                "integer",
                self.weather_concurrency,
            )?
            .max(1),
        })
    }
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &'static str, default: T) -> AppResult<T> {
    match std::env::var(var_name) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type,
            }
            .into()),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_partial_override_keeps_defaults() {
        let config: Config = toml::from_str("default_limit = 3\nweather_concurrency = 8").unwrap();
        assert_eq!(config.default_limit, 3);
        assert_eq!(config.weather_concurrency, 8);
        assert_eq!(config.weather_timeout_secs, 10);
        assert!(config.openweather_api_key.is_none());
    }
}
