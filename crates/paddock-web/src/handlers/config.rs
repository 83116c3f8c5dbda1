//! 봇 설정 문서 API 핸들러.
//!
//! 문서 스키마는 웹 UI의 소유 — 서버는 JSON을 저장/반환만 한다.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// GET /config - 봇 설정 문서 조회 (없으면 `{}`)
pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(state.settings.get())
}

/// POST /config - 봇 설정 문서 저장
pub async fn update_config(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    state
        .settings
        .replace(document.clone())
        .map_err(|e| ApiError::Internal(format!("설정 저장 실패: {e}")))?;

    Ok(Json(json!({
        "status": "success",
        "data": document,
    })))
}
