//! 요청/응답 경계
//!
//! 이벤트(JSON)를 받아 흐름을 실행하고 상태 코드가 붙은 응답으로 바꾼다.
//! 내부 오류는 여기서 한 번만 잡아 `{"error": ...}` 본문으로 돌려준다.

pub mod course_filter;
pub mod weather_fetcher;

use serde::Serialize;
use serde_json::json;

pub use course_filter::handle_course_filter;
pub use weather_fetcher::{handle_weather_fetch, handle_weather_fetch_with};

/// 핸들러 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// UTF-8 JSON 문자열 (한글 이스케이프 없음)
    pub body: String,
}

impl HandlerResponse {
    /// 200 응답
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(e) => Self::error(500, e.to_string()),
        }
    }

    /// `{"error": message}` 응답
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: json!({ "error": message.into() }).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// 본문을 JSON 으로 다시 파싱
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}
