//! KB 청크에서 코스 JSON 객체 추출
//!
//! 한 줄에 여러 JSON 객체가 구분자 없이 붙어 올 수 있어서
//! (`{"mountain_code": ...} {"mountain_code": ...}`) 줄 전체를 파싱하지 않고
//! 중괄호 깊이를 세며 객체 단위로 잘라낸다.
//!
//! 문자열 리터럴 안의 `{` / `}` 는 구분하지 않는다. 값에 중괄호가 들어 있는
//! 객체는 잘못 잘릴 수 있고, 그 경우 파싱 실패로 버려진다.
//!
//! 짝이 없는 `}` 도 깊이를 줄인다. 깊이가 음수가 되면 그 줄의 나머지
//! 객체는 시작 위치가 기록되지 않아 추출되지 않는다.

use crate::models::Course;
use serde_json::{Map, Value};
use tracing::debug;

/// 한 줄을 훑으면서 완결된 최상위 `{...}` 구간을 찾는 스캐너
struct BraceScanner<'a> {
    line: &'a str,
    depth: isize,
    start: Option<usize>,
}

impl<'a> BraceScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            depth: 0,
            start: None,
        }
    }

    /// 완결된 객체 후보 슬라이스 목록
    ///
    /// 줄 끝까지 닫히지 않은 객체는 버린다.
    fn candidates(mut self) -> Vec<&'a str> {
        let mut found = Vec::new();

        for (idx, ch) in self.line.char_indices() {
            match ch {
                '{' => {
                    if self.depth == 0 {
                        self.start = Some(idx);
                    }
                    self.depth += 1;
                }
                '}' => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        if let Some(start) = self.start.take() {
                            found.push(&self.line[start..=idx]);
                        }
                    }
                }
                _ => {}
            }
        }

        found
    }
}

/// 텍스트 블록들에서 유효한 코스 레코드 추출
///
/// # 매개변수
/// - `blocks`: KB 검색 결과 청크 (비어 있거나 `None` 인 항목은 건너뜀)
///
/// # 반환
/// 입력 순서대로 `mountain_code` 를 가진 코스 목록
pub fn extract_courses<S: AsRef<str>>(blocks: &[Option<S>]) -> Vec<Course> {
    let mut courses = Vec::new();
    let mut dropped = 0usize;

    for block in blocks.iter().flatten() {
        for line in block.as_ref().lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            for candidate in BraceScanner::new(line).candidates() {
                match serde_json::from_str::<Map<String, Value>>(candidate)
                    .ok()
                    .and_then(Course::from_object)
                {
                    Some(course) => courses.push(course),
                    None => dropped += 1,
                }
            }
        }
    }

    debug!("추출된 코스: {}개, 버려진 조각: {}개", courses.len(), dropped);
    courses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(courses: &[Course]) -> Vec<&str> {
        courses
            .iter()
            .map(|c| c.mountain_code().and_then(Value::as_str).unwrap())
            .collect()
    }

    #[test]
    fn test_concatenated_objects_on_one_line() {
        let block = r#"{"mountain_code":"A","distance_km":1} {"mountain_code":"B"}{"mountain_code":"C"}"#;
        let courses = extract_courses(&[Some(block)]);
        assert_eq!(codes(&courses), ["A", "B", "C"]);
    }

    #[test]
    fn test_nested_objects_are_kept_whole() {
        let block = r#"{"mountain_code":"A","meta":{"x":{"y":1}}}"#;
        let courses = extract_courses(&[Some(block)]);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].get("meta").unwrap()["x"]["y"], 1);
    }

    #[test]
    fn test_multiline_blocks_and_empty_inputs() {
        let block = "  \n{\"mountain_code\":\"A\"}\n\n   {\"mountain_code\":\"B\"}  \n";
        let blocks = [Some(block), None, Some(""), Some("   ")];
        assert_eq!(codes(&extract_courses(&blocks)), ["A", "B"]);
    }

    #[test]
    fn test_unclosed_object_is_dropped_silently() {
        let block = r#"{"mountain_code":"A"} {"mountain_code":"C""#;
        assert_eq!(codes(&extract_courses(&[Some(block)])), ["A"]);
    }

    #[test]
    fn test_object_split_across_lines_is_dropped() {
        let block = "{\"mountain_code\":\n\"A\"}";
        assert!(extract_courses(&[Some(block)]).is_empty());
    }

    #[test]
    fn test_missing_code_and_malformed_json_are_dropped() {
        let block = r#"{"mountain_name":"산"} {not json} {"mountain_code":"B"}"#;
        assert_eq!(codes(&extract_courses(&[Some(block)])), ["B"]);
    }

    #[test]
    fn test_stray_closing_brace_drops_rest_of_line() {
        let block = r#"} {"mountain_code":"A"}"#;
        assert!(extract_courses(&[Some(block)]).is_empty());

        // 다음 줄은 깊이 0 에서 다시 시작
        let block = "{\"mountain_code\":\"A\"}} {\"mountain_code\":\"B\"}\n{\"mountain_code\":\"C\"}";
        assert_eq!(codes(&extract_courses(&[Some(block)])), ["A", "C"]);
    }

    #[test]
    fn test_braces_inside_strings_can_missplit() {
        // 문자열 안의 중괄호는 깊이 계산에 포함되므로 객체가 잘못 잘린다
        let block = r#"{"mountain_code":"A","course_name":"}"}"#;
        assert!(extract_courses(&[Some(block)]).is_empty());
    }
}
