use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 산 목록 파일 (`{"mountains": [...]}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MountainListing {
    #[serde(default)]
    pub mountains: Vec<Mountain>,
}

/// 산 하나와 그 산의 코스들
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mountain {
    pub mountain_code: Option<String>,
    pub mountain_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub courses: Vec<MountainCourse>,
}

/// 산 목록 안의 코스 항목
///
/// 값은 가공하지 않고 KB 문서로 그대로 옮기므로 `Value` 로 보관한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MountainCourse {
    pub course_name: Option<String>,
    pub distance_km: Value,
    pub duration_min: Value,
    pub surface: Value,
    pub difficulty: Value,
    pub difficulty_score: Value,
    pub filename: Value,
}
