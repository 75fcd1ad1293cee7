//! 산 목록 → 코스별 KB 문서 변환
//!
//! 코스 하나를 독립 문서로 만들어 KB 검색 정확도를 높인다.

use crate::models::{Mountain, MountainCourse, MountainListing};
use serde_json::{Map, Value};

/// 문서 변환 옵션
#[derive(Debug, Clone, Default)]
pub struct KbBuildOptions {
    /// 이 거리(km) 미만이거나 거리가 없는 코스는 제외
    pub min_distance_km: Option<f64>,
    /// 검색용 자연어 요약(`text`) 추가 여부
    pub with_text: bool,
}

/// 변환 결과
#[derive(Debug, Clone, Default)]
pub struct KbBuildOutput {
    pub documents: Vec<Map<String, Value>>,
    pub mountain_count: usize,
    pub course_count: usize,
    /// 최소 거리 조건으로 제외된 코스 수
    pub removed: usize,
}

/// 산 목록을 코스별 문서로 펼침
pub fn build_course_documents(listing: &MountainListing, options: &KbBuildOptions) -> KbBuildOutput {
    let mut output = KbBuildOutput {
        mountain_count: listing.mountains.len(),
        ..Default::default()
    };

    for mountain in &listing.mountains {
        for course in &mountain.courses {
            output.course_count += 1;

            if let Some(min) = options.min_distance_km {
                if !meets_min_distance(&course.distance_km, min) {
                    output.removed += 1;
                    continue;
                }
            }

            let mut doc = course_document(mountain, course);
            if options.with_text {
                doc.insert("text".to_string(), Value::from(summary_text(mountain, course)));
            }
            output.documents.push(doc);
        }
    }

    output
}

fn meets_min_distance(distance: &Value, min: f64) -> bool {
    distance.as_f64().is_some_and(|d| d >= min)
}

fn course_document(mountain: &Mountain, course: &MountainCourse) -> Map<String, Value> {
    let text = |v: &Option<String>| Value::from(v.clone().unwrap_or_default());
    let number = |v: Option<f64>| v.map(Value::from).unwrap_or(Value::Null);

    let mut doc = Map::new();
    doc.insert("mountain_code".into(), text(&mountain.mountain_code));
    doc.insert("mountain_name".into(), text(&mountain.mountain_name));
    doc.insert("latitude".into(), number(mountain.latitude));
    doc.insert("longitude".into(), number(mountain.longitude));
    doc.insert("course_name".into(), text(&course.course_name));
    doc.insert("distance_km".into(), course.distance_km.clone());
    doc.insert("duration_min".into(), course.duration_min.clone());
    doc.insert("surface".into(), course.surface.clone());
    doc.insert("difficulty".into(), course.difficulty.clone());
    doc.insert("difficulty_score".into(), course.difficulty_score.clone());
    doc.insert("filename".into(), course.filename.clone());
    doc
}

/// `"{산} {코스}, 거리 Xkm, 소요시간 Y분, 난이도 Z[, 노면 W]입니다."`
fn summary_text(mountain: &Mountain, course: &MountainCourse) -> String {
    let mut parts = vec![
        format!(
            "{} {}",
            mountain.mountain_name.as_deref().unwrap_or_default(),
            course.course_name.as_deref().unwrap_or_default()
        ),
        format!("거리 {}km", display_value(&course.distance_km)),
        format!("소요시간 {}분", display_value(&course.duration_min)),
        format!("난이도 {}", display_value(&course.difficulty)),
    ];

    match &course.surface {
        Value::String(surface) if !surface.is_empty() => parts.push(format!("노면 {}", surface)),
        _ => {}
    }

    parts.join(", ") + "입니다."
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
