use crate::error::{AppError, AppResult, FileError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// JSON 파일을 읽어 지정한 타입으로 변환
pub async fn load_json_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let value = serde_json::from_str(&content).map_err(|source| FileError::JsonParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    Ok(value)
}

/// 문서 목록을 JSON Lines 로 저장 (한글은 이스케이프하지 않음)
///
/// # 반환
/// 저장한 줄 수
pub async fn write_jsonl<T: Serialize>(path: &Path, docs: &[T]) -> AppResult<usize> {
    let mut output = String::new();
    for doc in docs {
        output.push_str(&serde_json::to_string(doc)?);
        output.push('\n');
    }

    fs::write(path, output)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    tracing::debug!("JSONL 저장: {} ({}줄)", path.display(), docs.len());
    Ok(docs.len())
}
