use super::HandlerResponse;
use crate::error::{AppResult, FilterError};
use crate::workflow::{CourseFilter, CourseFilterRequest, CourseFilterResult};
use serde_json::Value;
use tracing::error;

/// KB 검색 결과를 필터링하고 정렬하는 핸들러
///
/// # 매개변수
/// - `event`: `{"kb_results": [...], "region": ..., "difficulty": ..., "limit": ...}`
/// - `filter`: 필터 흐름
///
/// # 반환
/// 성공 시 200 + `{"courses": [...], "count": N}`, 실패 시 500 + `{"error": "..."}`
pub fn handle_course_filter(event: &Value, filter: &CourseFilter) -> HandlerResponse {
    match run(event, filter) {
        Ok(result) => HandlerResponse::ok(&result),
        Err(e) => {
            error!("❌ 코스 필터 실패: {}", e);
            HandlerResponse::error(500, e.to_string())
        }
    }
}

fn run(event: &Value, filter: &CourseFilter) -> AppResult<CourseFilterResult> {
    let request = CourseFilterRequest::deserialize_event(event)?;
    filter.run(&request)
}

impl CourseFilterRequest {
    /// 이벤트 JSON 을 요청으로 변환
    pub fn deserialize_event(event: &Value) -> AppResult<Self> {
        serde_json::from_value(event.clone())
            .map_err(|e| FilterError::InvalidEvent(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_shape_becomes_error_body() {
        let filter = CourseFilter::with_default_limit(10);
        let response = handle_course_filter(&json!({"kb_results": [1, 2]}), &filter);
        assert_eq!(response.status_code, 500);
        assert!(response.body_json().unwrap()["error"].is_string());
    }

    #[test]
    fn test_non_numeric_distance_becomes_error_body() {
        let filter = CourseFilter::with_default_limit(10);
        let event = json!({
            "kb_results": [r#"{"mountain_code":"A","distance_km":"멀다"}"#]
        });
        let response = handle_course_filter(&event, &filter);
        assert_eq!(response.status_code, 500);
        let body = response.body_json().unwrap();
        assert!(body.get("courses").is_none());
        assert!(body["error"].as_str().unwrap().contains("distance_km"));
    }

    #[test]
    fn test_body_keeps_korean_unescaped() {
        let filter = CourseFilter::with_default_limit(10);
        let event = json!({
            "kb_results": [r#"{"mountain_code":"A","mountain_name":"봉산(서울특별시 은평구)"}"#]
        });
        let response = handle_course_filter(&event, &filter);
        assert!(response.is_success());
        assert!(response.body.contains("봉산(서울특별시 은평구)"));
        assert!(response.body.contains("\"count\":1"));
    }
}
