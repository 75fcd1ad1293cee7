//! 코스 레코드와 난이도 라벨

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 거리/시간 값이 없을 때 정렬에 쓰는 최악값
pub const MISSING_METRIC: f64 = 999.0;

/// 코스 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "쉬움")]
    Easy,
    #[serde(rename = "보통")]
    Normal,
    #[serde(rename = "어려움")]
    Hard,
}

impl Difficulty {
    /// 표시 라벨
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "쉬움",
            Difficulty::Normal => "보통",
            Difficulty::Hard => "어려움",
        }
    }

    /// 라벨에서 난이도 파싱 (정확히 일치할 때만)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "쉬움" => Some(Difficulty::Easy),
            "보통" => Some(Difficulty::Normal),
            "어려움" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// 기본 정렬 우선순위 (쉬움 → 보통 → 어려움)
    pub fn priority(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 코스 레코드
///
/// KB 문서의 필드를 그대로 보존한다. 알려진 필드는 접근자로 읽고,
/// 나머지(`surface`, `filename` 등)는 원래 순서대로 출력에 실린다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course {
    fields: Map<String, Value>,
}

impl Course {
    /// JSON 객체에서 코스 생성
    ///
    /// `mountain_code` 키가 없으면 유효한 코스가 아니므로 `None`.
    pub fn from_object(fields: Map<String, Value>) -> Option<Self> {
        if fields.contains_key("mountain_code") {
            Some(Self { fields })
        } else {
            None
        }
    }

    pub fn mountain_code(&self) -> Option<&Value> {
        self.fields.get("mountain_code")
    }

    /// 산 이름 (없거나 null 이면 빈 문자열)
    pub fn mountain_name(&self) -> AppResult<&str> {
        // KB 문서는 빈 값을 null 로 내보내므로 null 은 누락과 같이 취급
        match self.fields.get("mountain_name") {
            None | Some(Value::Null) => Ok(""),
            Some(Value::String(name)) => Ok(name),
            Some(other) => Err(AppError::invalid_field("mountain_name", "문자열", other)),
        }
    }

    pub fn distance_km(&self) -> AppResult<Option<f64>> {
        self.optional_number("distance_km")
    }

    pub fn duration_min(&self) -> AppResult<Option<f64>> {
        self.optional_number("duration_min")
    }

    pub fn difficulty_score(&self) -> AppResult<Option<f64>> {
        self.optional_number("difficulty_score")
    }

    pub fn latitude(&self) -> AppResult<Option<f64>> {
        self.optional_number("latitude")
    }

    pub fn longitude(&self) -> AppResult<Option<f64>> {
        self.optional_number("longitude")
    }

    /// 현재 난이도 라벨
    pub fn difficulty(&self) -> Option<&str> {
        self.fields.get("difficulty").and_then(Value::as_str)
    }

    /// 난이도 라벨 덮어쓰기 (기존 키 위치 유지)
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.fields
            .insert("difficulty".to_string(), Value::from(difficulty.label()));
    }

    /// 임의 필드 설정
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// 정렬 키: (거리, 시간), 값이 없으면 999
    pub fn sort_key(&self) -> AppResult<(f64, f64)> {
        Ok((
            self.distance_km()?.unwrap_or(MISSING_METRIC),
            self.duration_min()?.unwrap_or(MISSING_METRIC),
        ))
    }

    fn optional_number(&self, field: &'static str) -> AppResult<Option<f64>> {
        // `surface: null` 처럼 KB 문서의 null 은 값 없음을 뜻하므로 누락과 같이 취급
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| AppError::invalid_field(field, "숫자", value)),
        }
    }
}
