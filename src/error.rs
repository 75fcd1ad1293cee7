use thiserror::Error;

/// 애플리케이션 오류 타입
#[derive(Debug, Error)]
pub enum AppError {
    /// 코스 필터링 오류
    #[error("코스 필터 오류: {0}")]
    Filter(#[from] FilterError),
    /// 날씨 조회 오류
    #[error("날씨 오류: {0}")]
    Weather(#[from] WeatherError),
    /// 파일 처리 오류
    #[error("파일 오류: {0}")]
    File(#[from] FileError),
    /// 설정 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// JSON 직렬화/역직렬화 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 코스 필터링 오류
#[derive(Debug, Error)]
pub enum FilterError {
    /// 이벤트 형식이 잘못됨
    #[error("잘못된 요청 형식: {0}")]
    InvalidEvent(String),
    /// 필드 타입이 기대와 다름
    #[error("필드 '{field}' 값이 {expected} 이(가) 아닙니다: {value}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// 날씨 조회 오류
#[derive(Debug, Error)]
pub enum WeatherError {
    /// API 키가 설정되지 않음
    #[error("날씨 API 키가 설정되지 않았습니다.")]
    MissingApiKey,
    /// 코스 리스트가 비어 있음
    #[error("코스 리스트가 필요합니다.")]
    EmptyCourses,
    /// HTTP 요청 실패
    #[error("날씨 API 요청 실패: {0}")]
    Request(#[from] reqwest::Error),
    /// HTTP 상태 코드 오류
    #[error("날씨 API HTTP 오류: {status} - {body}")]
    BadStatus { status: u16, body: String },
    /// 응답 형식 오류
    #[error("날씨 API 응답 형식 오류: {0}")]
    MalformedResponse(String),
}

/// 파일 처리 오류
#[derive(Debug, Error)]
pub enum FileError {
    /// 파일 읽기 실패
    #[error("파일 읽기 실패 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 파싱 실패
    #[error("JSON 파싱 실패 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 파싱 실패
    #[error("TOML 파싱 실패 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 설정 오류
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 환경 변수 파싱 실패
    #[error("환경 변수 {var_name} 파싱 실패: 값 '{value}' 을(를) {expected_type} (으)로 변환할 수 없습니다")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
}

// ========== 편의 생성자 ==========

impl AppError {
    /// 잘못된 필드 타입 오류 생성
    pub fn invalid_field(
        field: &'static str,
        expected: &'static str,
        value: &serde_json::Value,
    ) -> Self {
        AppError::Filter(FilterError::InvalidField {
            field,
            expected,
            value: value.to_string(),
        })
    }

    /// 파일 읽기 오류 생성
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 파일 쓰기 오류 생성
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 타입 별칭 ==========

/// 애플리케이션 결과 타입
pub type AppResult<T> = Result<T, AppError>;
