use crate::error::WeatherError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 코스에 붙이는 현재 날씨 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub wind_speed: f64,
    pub description: String,
    pub clouds: i64,
    /// Rain, Clear, Clouds 등
    pub main: String,
    pub icon: String,
}

impl WeatherInfo {
    /// OpenWeather "current weather" 응답에서 필요한 값만 추출
    ///
    /// `main` / `weather` 키가 없거나 `weather` 배열이 비어 있으면 오류.
    /// 나머지 값이 빠져 있으면 0 또는 빈 문자열로 채운다.
    pub fn from_current_weather(payload: &Value) -> Result<Self, WeatherError> {
        let main = payload
            .get("main")
            .ok_or_else(|| WeatherError::MalformedResponse(payload.to_string()))?;
        let conditions = payload
            .get("weather")
            .ok_or_else(|| WeatherError::MalformedResponse(payload.to_string()))?;
        let first = conditions
            .as_array()
            .and_then(|list| list.first())
            .ok_or_else(|| WeatherError::MalformedResponse("날씨 정보가 없음".to_string()))?;

        let number = |v: Option<&Value>| v.and_then(Value::as_f64).unwrap_or(0.0);
        let integer = |v: Option<&Value>| {
            v.and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64)))
                .unwrap_or(0)
        };
        let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_string();

        Ok(Self {
            temp: number(main.get("temp")),
            feels_like: number(main.get("feels_like")),
            humidity: integer(main.get("humidity")),
            wind_speed: number(payload.get("wind").and_then(|w| w.get("speed"))),
            description: text(first.get("description")),
            clouds: integer(payload.get("clouds").and_then(|c| c.get("all"))),
            main: text(first.get("main")),
            icon: text(first.get("icon")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_fields_with_defaults() {
        let payload = json!({
            "main": {"temp": 20.5, "humidity": 65},
            "weather": [{"main": "Clear", "description": "맑음", "icon": "01d"}],
            "clouds": {"all": 10}
        });
        let info = WeatherInfo::from_current_weather(&payload).unwrap();
        assert_eq!(info.temp, 20.5);
        assert_eq!(info.feels_like, 0.0);
        assert_eq!(info.humidity, 65);
        assert_eq!(info.wind_speed, 0.0);
        assert_eq!(info.clouds, 10);
        assert_eq!(info.description, "맑음");
        assert_eq!(info.main, "Clear");
    }

    #[test]
    fn test_rejects_missing_or_empty_weather() {
        assert!(WeatherInfo::from_current_weather(&json!({"main": {}})).is_err());
        assert!(
            WeatherInfo::from_current_weather(&json!({"main": {}, "weather": []})).is_err()
        );
    }
}
