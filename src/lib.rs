//! # Hiking Course Tools
//!
//! 등산 코스 추천 데이터셋을 다루는 도구 모음
//!
//! ## 구조
//!
//! ### ① 모델 (Models)
//! - `models/` - 코스 레코드, 날씨 요약, 산 목록, 파일 로더
//!
//! ### ② 업무 능력 계층 (Services)
//! - `services/` - 하나의 일만 하는 순수 함수들
//! - `extractor` - KB 청크에서 코스 JSON 객체 추출
//! - `region_filter` - 괄호 주소 기반 지역 필터
//! - `difficulty` - difficulty_score → 난이도 분류
//! - `ranking` - 난이도 필터/정렬, 거리·시간 정렬, 개수 제한
//! - `kb_builder` - 산 목록을 코스별 KB 문서로 변환
//!
//! ### ③ 클라이언트 (Clients)
//! - `clients/` - 외부 날씨 API (`WeatherProvider` 트레이트 뒤에 숨김)
//!
//! ### ④ 흐름 계층 (Workflow)
//! - `CourseFilter` - 추출 → 지역 → 난이도 → 정렬 → 개수 제한
//! - `WeatherEnrichment` - 코스별 좌표 검증 → 날씨 조회
//!
//! ### ⑤ 경계 (Handlers)
//! - `handlers/` - 이벤트 JSON → 흐름 실행 → 상태 코드가 붙은 응답
//!
//! ## 모듈 구조

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 자주 쓰는 타입 재노출
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::{handle_course_filter, handle_weather_fetch, HandlerResponse};
pub use models::{Course, Difficulty, WeatherInfo};
pub use workflow::{CourseFilter, CourseFilterRequest, WeatherEnrichment};
