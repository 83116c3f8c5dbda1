//! 버전 조회 핸들러.

use std::fs;

use axum::extract::State;

use crate::error::ApiError;
use crate::AppState;

/// GET /version.txt - 버전 문자열 (plain text, 공백 제거)
pub async fn get_version(State(state): State<AppState>) -> Result<String, ApiError> {
    let content = fs::read_to_string(&state.content.version_file)
        .map_err(|_| ApiError::NotFound("버전 파일 없음".to_string()))?;
    Ok(content.trim().to_string())
}
