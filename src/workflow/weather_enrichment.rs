//! 코스 날씨 조회 흐름 - 흐름 계층
//!
//! 좌표가 있는 코스마다 현재 날씨를 붙인다. 조회에 실패한 코스도
//! `weather: null` 로 결과에 남긴다.

use crate::clients::WeatherProvider;
use crate::error::{AppResult, WeatherError};
use crate::models::Course;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// 날씨 조회 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub courses: Option<Vec<Course>>,
}

/// 날씨 조회 결과
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResult {
    pub courses_with_weather: Vec<Course>,
    pub count: usize,
}

/// 날씨 조회 흐름
pub struct WeatherEnrichment<P> {
    provider: P,
    concurrency: usize,
}

impl<P: WeatherProvider> WeatherEnrichment<P> {
    /// # 매개변수
    /// - `provider`: 날씨 조회 능력
    /// - `concurrency`: 동시에 진행할 조회 수 (최소 1)
    pub fn new(provider: P, concurrency: usize) -> Self {
        Self {
            provider,
            concurrency: concurrency.max(1),
        }
    }

    /// 코스 목록에 날씨를 붙임 (입력 순서 유지)
    ///
    /// 좌표가 없거나 범위를 벗어난 코스는 건너뛴다.
    pub async fn run(&self, courses: Vec<Course>) -> AppResult<WeatherResult> {
        if courses.is_empty() {
            return Err(WeatherError::EmptyCourses.into());
        }
        info!("🌤️ 날씨 조회 대상 코스 수: {}", courses.len());

        let mut targets = Vec::with_capacity(courses.len());
        for course in courses {
            if let Some((lat, lon)) = checked_coordinates(&course)? {
                targets.push((course, lat, lon));
            }
        }

        let courses_with_weather: Vec<Course> = stream::iter(targets)
            .map(|(course, lat, lon)| self.attach_weather(course, lat, lon))
            .buffered(self.concurrency)
            .collect()
            .await;

        info!("✓ 날씨 조회 완료: {}개 코스", courses_with_weather.len());

        Ok(WeatherResult {
            count: courses_with_weather.len(),
            courses_with_weather,
        })
    }

    async fn attach_weather(&self, mut course: Course, lat: f64, lon: f64) -> Course {
        let name = display_name(&course);
        let weather = match self.provider.current_weather(lat, lon).await {
            Ok(info) => {
                info!("날씨 조회 성공: {} - {}", name, info.description);
                serde_json::to_value(info).unwrap_or(Value::Null)
            }
            Err(e) => {
                warn!("날씨 조회 실패: {} ({})", name, e);
                Value::Null
            }
        };
        course.insert("weather", weather);
        course
    }
}

/// 유효한 좌표 추출
///
/// 좌표가 없거나 범위를 벗어나면 `None` (경고 로그).
fn checked_coordinates(course: &Course) -> AppResult<Option<(f64, f64)>> {
    let (Some(lat), Some(lon)) = (course.latitude()?, course.longitude()?) else {
        warn!("좌표가 없는 코스 스킵: {}", display_name(course));
        return Ok(None);
    };

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        warn!(
            "좌표 범위 오류 스킵: {} (lat={}, lon={})",
            display_name(course),
            lat,
            lon
        );
        return Ok(None);
    }

    Ok(Some((lat, lon)))
}

fn display_name(course: &Course) -> String {
    match course.mountain_name() {
        Ok(name) if !name.is_empty() => name.to_string(),
        _ => "미지정".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherInfo;
    use async_trait::async_trait;
    use serde_json::json;

    /// 위도가 음수면 실패하는 테스트용 제공자
    struct FakeProvider;

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, lat: f64, _lon: f64) -> Result<WeatherInfo, WeatherError> {
            if lat < 0.0 {
                return Err(WeatherError::MalformedResponse("테스트 실패".to_string()));
            }
            Ok(WeatherInfo {
                temp: lat,
                feels_like: 0.0,
                humidity: 50,
                wind_speed: 1.0,
                description: "맑음".to_string(),
                clouds: 0,
                main: "Clear".to_string(),
                icon: "01d".to_string(),
            })
        }
    }

    fn courses(value: Value) -> Vec<Course> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_skips_missing_and_out_of_range_coordinates() {
        let input = courses(json!([
            {"mountain_code": "a", "latitude": 37.5, "longitude": 127.0},
            {"mountain_code": "b", "latitude": null, "longitude": 127.0},
            {"mountain_code": "c", "latitude": 95.0, "longitude": 127.0},
            {"mountain_code": "d", "latitude": -10.0, "longitude": 127.0},
            {"mountain_code": "e", "latitude": 35.1, "longitude": 129.0}
        ]));

        let result = tokio_test::block_on(WeatherEnrichment::new(FakeProvider, 2).run(input)).unwrap();

        let codes: Vec<&str> = result
            .courses_with_weather
            .iter()
            .map(|c| c.mountain_code().and_then(Value::as_str).unwrap())
            .collect();
        assert_eq!(codes, ["a", "d", "e"]);
        assert_eq!(result.count, 3);
        assert_eq!(result.courses_with_weather[0].get("weather").unwrap()["temp"], 37.5);
        assert_eq!(result.courses_with_weather[1].get("weather"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn test_empty_courses_is_error() {
        let err = WeatherEnrichment::new(FakeProvider, 1).run(Vec::new()).await;
        assert!(matches!(
            err,
            Err(crate::error::AppError::Weather(WeatherError::EmptyCourses))
        ));
    }
}
