//! 난이도 필터, 기본 정렬, 거리/시간 정렬과 개수 제한

use crate::error::AppResult;
use crate::models::{Course, Difficulty};

/// 알 수 없는 난이도의 우선순위
const UNKNOWN_PRIORITY: u8 = 99;

/// 요청한 난이도와 같은 코스만 남김 (순서 유지)
pub fn filter_by_difficulty(courses: Vec<Course>, difficulty: &str) -> Vec<Course> {
    courses
        .into_iter()
        .filter(|course| course.difficulty() == Some(difficulty))
        .collect()
}

/// 난이도 우선순위(쉬움 → 보통 → 어려움)로 안정 정렬
///
/// 뒤따르는 거리/시간 정렬도 안정 정렬이라, 거리와 시간이 같은 코스끼리의
/// 순서는 여기서 정해진다.
pub fn sort_by_difficulty_priority(courses: &mut [Course]) {
    courses.sort_by_key(|course| {
        course
            .difficulty()
            .and_then(Difficulty::from_label)
            .map(Difficulty::priority)
            .unwrap_or(UNKNOWN_PRIORITY)
    });
}

/// (거리, 시간) 오름차순 안정 정렬
///
/// 값이 없으면 999 로 취급해 뒤로 보낸다. 숫자가 아닌 값이 있으면 오류.
pub fn sort_by_distance_and_duration(courses: Vec<Course>) -> AppResult<Vec<Course>> {
    let mut keyed = courses
        .into_iter()
        .map(|course| course.sort_key().map(|key| (key, course)))
        .collect::<AppResult<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));

    Ok(keyed.into_iter().map(|(_, course)| course).collect())
}

/// 앞에서부터 `limit` 개만 남김 (0 이하이면 빈 결과)
pub fn truncate(mut courses: Vec<Course>, limit: i64) -> Vec<Course> {
    let limit = usize::try_from(limit).unwrap_or(0);
    courses.truncate(limit);
    courses
}
