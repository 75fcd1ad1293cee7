//! difficulty_score 기반 난이도 분류

use crate::error::AppResult;
use crate::models::{Course, Difficulty};

/// 점수를 난이도로 변환
///
/// 점수 없음 → 보통, 2 이하 → 쉬움, 5 이하 → 보통, 그 외 → 어려움
pub fn classify(score: Option<f64>) -> Difficulty {
    match score {
        None => Difficulty::Normal,
        Some(s) if s <= 2.0 => Difficulty::Easy,
        Some(s) if s <= 5.0 => Difficulty::Normal,
        Some(_) => Difficulty::Hard,
    }
}

/// 모든 코스의 `difficulty` 를 점수 기준으로 다시 계산
///
/// 입력에 들어 있던 `difficulty` 값은 무시하고 덮어쓴다.
pub fn classify_all(courses: &mut [Course]) -> AppResult<()> {
    for course in courses.iter_mut() {
        let difficulty = classify(course.difficulty_score()?);
        course.set_difficulty(difficulty);
    }
    Ok(())
}
