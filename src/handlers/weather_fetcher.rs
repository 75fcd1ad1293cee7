use super::HandlerResponse;
use crate::clients::{OpenWeatherClient, WeatherProvider};
use crate::config::Config;
use crate::error::{AppError, FilterError, WeatherError};
use crate::models::Course;
use crate::workflow::{WeatherEnrichment, WeatherRequest};
use serde_json::Value;
use tracing::error;

/// 코스 리스트의 각 코스에 날씨를 붙이는 핸들러
///
/// - 코스 리스트가 비어 있으면 400
/// - API 키가 없으면 500
/// - 성공 시 200 + `{"courses_with_weather": [...], "count": N}`
pub async fn handle_weather_fetch(event: &Value, config: &Config) -> HandlerResponse {
    let courses = match parse_courses(event) {
        Ok(courses) => courses,
        Err(response) => return response,
    };

    let client = match OpenWeatherClient::new(config) {
        Ok(client) => client,
        Err(AppError::Weather(WeatherError::MissingApiKey)) => {
            error!("OPENWEATHER_API_KEY 환경 변수가 설정되지 않음");
            return HandlerResponse::error(500, WeatherError::MissingApiKey.to_string());
        }
        Err(e) => return unexpected_error(&e),
    };

    enrich(courses, client, config.weather_concurrency).await
}

/// 임의의 날씨 제공자로 실행
pub async fn handle_weather_fetch_with<P: WeatherProvider>(
    event: &Value,
    provider: P,
    concurrency: usize,
) -> HandlerResponse {
    match parse_courses(event) {
        Ok(courses) => enrich(courses, provider, concurrency).await,
        Err(response) => response,
    }
}

fn parse_courses(event: &Value) -> Result<Vec<Course>, HandlerResponse> {
    let request: WeatherRequest = serde_json::from_value(event.clone()).map_err(|e| {
        let e = AppError::from(FilterError::InvalidEvent(e.to_string()));
        unexpected_error(&e)
    })?;

    match request.courses {
        Some(courses) if !courses.is_empty() => Ok(courses),
        _ => Err(HandlerResponse::error(
            400,
            WeatherError::EmptyCourses.to_string(),
        )),
    }
}

async fn enrich<P: WeatherProvider>(
    courses: Vec<Course>,
    provider: P,
    concurrency: usize,
) -> HandlerResponse {
    match WeatherEnrichment::new(provider, concurrency).run(courses).await {
        Ok(result) => HandlerResponse::ok(&result),
        Err(e) => unexpected_error(&e),
    }
}

fn unexpected_error(e: &AppError) -> HandlerResponse {
    error!("❌ 예상치 못한 오류: {}", e);
    HandlerResponse::error(500, format!("날씨 조회 중 오류 발생: {}", e))
}
