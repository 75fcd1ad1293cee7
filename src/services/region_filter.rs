//! 지역 필터
//!
//! 산 이름 뒤 괄호 안의 주소(`봉산(서울특별시 은평구 구산동)`)로 지역을 판별한다.

use crate::error::AppResult;
use crate::models::Course;
use phf::phf_map;
use regex::Regex;
use std::sync::LazyLock;

/// 지역명 → 주소에서 찾을 키워드
static REGION_KEYWORDS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "서울" => &["서울특별시", "서울"],
    "부산" => &["부산광역시", "부산"],
    "경기" => &["경기도", "경기"],
    "인천" => &["인천광역시", "인천"],
    "대구" => &["대구광역시", "대구"],
    "대전" => &["대전광역시", "대전"],
    "광주" => &["광주광역시", "광주"],
    "울산" => &["울산광역시", "울산"],
    "강원" => &["강원특별자치도", "강원도", "강원"],
    "충북" => &["충청북도", "충북"],
    "충남" => &["충청남도", "충남"],
    "전북" => &["전라북도", "전북"],
    "전남" => &["전라남도", "전남"],
    "경북" => &["경상북도", "경북"],
    "경남" => &["경상남도", "경남"],
    "제주" => &["제주특별자치도", "제주도", "제주"],
};

/// 첫 `(` 다음부터 다음 괄호 직전까지
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)").expect("주소 정규식"));

/// 지역 필터
#[derive(Debug, Clone)]
pub struct RegionFilter<'a> {
    keywords: Vec<&'a str>,
}

impl<'a> RegionFilter<'a> {
    /// 지역명으로 필터 생성
    ///
    /// 키워드 표에 없는 지역이면 지역명 자체를 키워드로 쓴다.
    pub fn new(region: &'a str) -> Self {
        let keywords = match REGION_KEYWORDS.get(region) {
            Some(keywords) => keywords.to_vec(),
            None => vec![region],
        };
        Self { keywords }
    }

    pub fn keywords(&self) -> &[&'a str] {
        &self.keywords
    }

    /// 산 이름의 주소가 이 지역에 속하는지 확인
    ///
    /// 괄호 주소가 없는 이름은 판별할 수 없으므로 항상 `false`.
    pub fn matches(&self, mountain_name: &str) -> bool {
        match extract_address(mountain_name) {
            Some(address) => self.keywords.iter().any(|kw| address.contains(kw)),
            None => false,
        }
    }

    /// 지역에 속하는 코스만 남김 (순서 유지)
    pub fn apply(&self, courses: Vec<Course>) -> AppResult<Vec<Course>> {
        let mut kept = Vec::with_capacity(courses.len());
        for course in courses {
            if self.matches(course.mountain_name()?) {
                kept.push(course);
            }
        }
        Ok(kept)
    }
}

/// 산 이름에서 괄호 안 주소 추출
///
/// 이름에 `(` 와 `)` 가 모두 있어야 한다.
pub fn extract_address(mountain_name: &str) -> Option<&str> {
    if !mountain_name.contains(')') {
        return None;
    }
    ADDRESS_RE
        .captures(mountain_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_address() {
        assert_eq!(
            extract_address("봉산(서울특별시 은평구 구산동)"),
            Some("서울특별시 은평구 구산동")
        );
        assert_eq!(extract_address("봉산"), None);
        assert_eq!(extract_address("봉산(서울"), None);
        assert_eq!(extract_address("봉산(서울)(부산)"), Some("서울"));
    }

    #[test]
    fn test_known_region_uses_keyword_table() {
        let filter = RegionFilter::new("강원");
        assert_eq!(filter.keywords(), ["강원특별자치도", "강원도", "강원"]);
        assert!(filter.matches("설악산(강원특별자치도 속초시)"));
        assert!(!filter.matches("설악산"));
    }

    #[test]
    fn test_unknown_region_falls_back_to_literal() {
        let filter = RegionFilter::new("은평구");
        assert!(filter.matches("봉산(서울특별시 은평구 구산동)"));
        assert!(!filter.matches("은평구산"));
    }

    #[test]
    fn test_region_matches_only_inside_parentheses() {
        let filter = RegionFilter::new("부산");
        assert!(!filter.matches("부산봉(서울특별시)"));
    }
}
