//! 코스 추천 필터 흐름 - 흐름 계층
//!
//! 처리 순서:
//! 1. KB 청크에서 코스 추출
//! 2. 지역 필터
//! 3. difficulty_score → 난이도 재계산
//! 4. 난이도 필터 (없으면 난이도 우선순위 정렬)
//! 5. 거리 → 시간 정렬
//! 6. 상위 N개

use crate::config::Config;
use crate::error::AppResult;
use crate::models::Course;
use crate::services::{classify_all, extract_courses, ranking, RegionFilter};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

/// 코스 필터 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilterRequest {
    /// KB 검색 결과 청크
    #[serde(default)]
    pub kb_results: Vec<Option<String>>,
    /// "서울", "부산" 등
    #[serde(default)]
    pub region: Option<String>,
    /// "쉬움", "보통", "어려움"
    #[serde(default)]
    pub difficulty: Option<String>,
    /// 키 없음: `None` (기본값 적용), `null`: `Some(None)` (자르지 않음)
    #[serde(default, deserialize_with = "present_or_null")]
    pub limit: Option<Option<i64>>,
}

/// 키가 있으면 `null` 이어도 `Some` 으로 감싼다
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

/// 코스 필터 결과
#[derive(Debug, Clone, Serialize)]
pub struct CourseFilterResult {
    pub courses: Vec<Course>,
    pub count: usize,
}

/// 코스 필터 흐름
pub struct CourseFilter {
    default_limit: i64,
}

impl CourseFilter {
    pub fn new(config: &Config) -> Self {
        Self::with_default_limit(config.default_limit)
    }

    pub fn with_default_limit(default_limit: i64) -> Self {
        Self { default_limit }
    }

    /// 요청 하나를 처리
    ///
    /// 입력은 변경하지 않으며 같은 요청에는 항상 같은 결과를 돌려준다.
    pub fn run(&self, request: &CourseFilterRequest) -> AppResult<CourseFilterResult> {
        let mut courses = extract_courses(&request.kb_results);
        info!("📥 KB 청크 {}개에서 코스 {}개 추출", request.kb_results.len(), courses.len());

        if let Some(region) = non_empty(&request.region) {
            let filter = RegionFilter::new(region);
            courses = filter.apply(courses)?;
            info!("📍 지역 필터 '{}' 적용 후 {}개", region, courses.len());
        }

        classify_all(&mut courses)?;

        match non_empty(&request.difficulty) {
            Some(difficulty) => {
                courses = ranking::filter_by_difficulty(courses, difficulty);
                info!("⛰️ 난이도 '{}' 필터 적용 후 {}개", difficulty, courses.len());
            }
            None => ranking::sort_by_difficulty_priority(&mut courses),
        }

        let courses = ranking::sort_by_distance_and_duration(courses)?;

        let courses = match request.limit {
            None => ranking::truncate(courses, self.default_limit),
            Some(Some(limit)) => ranking::truncate(courses, limit),
            Some(None) => courses,
        };
        debug!("limit={:?} → 최종 {}개", request.limit, courses.len());

        Ok(CourseFilterResult {
            count: courses.len(),
            courses,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const TWO_COURSES: &str = r#"{"mountain_code":"A","mountain_name":"산(서울특별시 중구)","distance_km":0.5,"duration_min":15,"difficulty_score":1} {"mountain_code":"B","mountain_name":"산(부산광역시)","distance_km":0.2,"duration_min":5,"difficulty_score":0}"#;

    fn request(region: Option<&str>, difficulty: Option<&str>, limit: Option<i64>) -> CourseFilterRequest {
        CourseFilterRequest {
            kb_results: vec![Some(TWO_COURSES.to_string())],
            region: region.map(str::to_string),
            difficulty: difficulty.map(str::to_string),
            limit: limit.map(Some),
        }
    }

    fn codes(result: &CourseFilterResult) -> Vec<&str> {
        result
            .courses
            .iter()
            .map(|c| c.mountain_code().and_then(Value::as_str).unwrap())
            .collect()
    }

    #[test]
    fn test_region_filter_and_classification() {
        let result = CourseFilter::with_default_limit(10)
            .run(&request(Some("서울"), None, Some(5)))
            .unwrap();
        assert_eq!(codes(&result), ["A"]);
        assert_eq!(result.courses[0].difficulty(), Some("쉬움"));
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_limit_keeps_nearest() {
        let result = CourseFilter::with_default_limit(10)
            .run(&request(None, None, Some(1)))
            .unwrap();
        assert_eq!(codes(&result), ["B"]);
    }

    #[test]
    fn test_empty_region_and_difficulty_are_ignored() {
        let result = CourseFilter::with_default_limit(10)
            .run(&request(Some(""), Some(""), None))
            .unwrap();
        assert_eq!(codes(&result), ["B", "A"]);
    }

    #[test]
    fn test_default_limit_applies() {
        let result = CourseFilter::with_default_limit(1)
            .run(&request(None, None, None))
            .unwrap();
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_missing_and_null_limit_differ() {
        let filter = CourseFilter::with_default_limit(1);

        let missing: CourseFilterRequest =
            serde_json::from_value(serde_json::json!({"kb_results": [TWO_COURSES]})).unwrap();
        assert_eq!(missing.limit, None);
        assert_eq!(filter.run(&missing).unwrap().count, 1);

        let null: CourseFilterRequest =
            serde_json::from_value(serde_json::json!({"kb_results": [TWO_COURSES], "limit": null}))
                .unwrap();
        assert_eq!(null.limit, Some(None));
        assert_eq!(filter.run(&null).unwrap().count, 2);
    }

    #[test]
    fn test_unknown_difficulty_matches_nothing() {
        let result = CourseFilter::with_default_limit(10)
            .run(&request(None, Some("매우 어려움"), None))
            .unwrap();
        assert!(result.courses.is_empty());
    }
}
