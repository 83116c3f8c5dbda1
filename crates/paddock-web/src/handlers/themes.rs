//! 테마 API 핸들러.
//!
//! 테마는 디렉토리의 개별 JSON 파일이다. 지정된 내장 테마 파일
//! 하나는 배열(테마 목록)을 담고, 나머지는 `"primary"` 키를 가진
//! 단일 테마 오브젝트다.

use std::fs;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use super::is_safe_name;
use crate::error::ApiError;
use crate::AppState;

/// 내장 테마 목록 파일 — 이 파일만 배열 형태를 가진다
const BUILTIN_THEMES_FILE: &str = "builtin.json";

/// GET /themes - 커스텀 + 내장 테마 목록
///
/// 커스텀 테마가 앞, 내장 테마는 라벨 소문자 기준 정렬 후 뒤.
/// 비어 있거나 깨진 파일은 경고 로그 후 건너뛴다 (목록 전체를
/// 실패시키지 않음).
pub async fn list_themes(State(state): State<AppState>) -> Json<Vec<Value>> {
    let themes_dir = &state.content.themes_dir;
    let mut custom_themes: Vec<Value> = Vec::new();
    let mut builtin_themes: Vec<Value> = Vec::new();

    let Ok(entries) = fs::read_dir(themes_dir) else {
        return Json(Vec::new());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(".json") {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("테마 파일 읽기 실패: {}: {}", path.display(), e);
                continue;
            }
        };
        if content.trim().is_empty() {
            continue; // 빈 파일은 무시
        }

        let data: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                warn!("테마 파일 파싱 실패: {}: {}", path.display(), e);
                continue;
            }
        };

        if file_name == BUILTIN_THEMES_FILE {
            // 내장 테마 목록 — null/불완전 항목 걸러냄
            if let Value::Array(list) = data {
                builtin_themes.extend(
                    list.into_iter()
                        .filter(|t| !t.is_null() && t.get("id").is_some()),
                );
            }
        } else if let Value::Object(mut theme) = data {
            if !theme.contains_key("primary") {
                continue;
            }
            // 파일 이름에서 id 주입 (없을 때만)
            if !theme.contains_key("id") {
                let id = file_name.trim_end_matches(".json").to_string();
                theme.insert("id".to_string(), Value::String(id));
            }
            custom_themes.push(Value::Object(theme));
        }
    }

    builtin_themes.sort_by_key(|t| {
        t.get("label")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_lowercase()
    });

    custom_themes.extend(builtin_themes);
    Json(custom_themes)
}

/// GET /theme/{name} - 단일 테마 조회
pub async fn get_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !is_safe_name(&name) {
        return Err(ApiError::BadRequest(format!("잘못된 테마 이름: {name}")));
    }

    let path = state.content.themes_dir.join(format!("{name}.json"));
    let content = fs::read_to_string(&path)
        .map_err(|_| ApiError::NotFound(format!("테마 없음: {name}")))?;

    let theme: Value = serde_json::from_str(&content)
        .map_err(|e| ApiError::Internal(format!("테마 파싱 실패: {name}: {e}")))?;
    Ok(Json(theme))
}

/// POST /theme/{name} - 테마 저장
pub async fn update_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(theme): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    if !is_safe_name(&name) {
        return Err(ApiError::BadRequest(format!("잘못된 테마 이름: {name}")));
    }

    let themes_dir = &state.content.themes_dir;
    if !themes_dir.exists() {
        fs::create_dir_all(themes_dir)
            .map_err(|e| ApiError::Internal(format!("테마 디렉토리 생성 실패: {e}")))?;
    }

    let path = themes_dir.join(format!("{name}.json"));
    let content = serde_json::to_string_pretty(&theme)
        .map_err(|e| ApiError::Internal(format!("테마 직렬화 실패: {e}")))?;
    fs::write(&path, content)
        .map_err(|e| ApiError::Internal(format!("테마 저장 실패: {}: {e}", path.display())))?;

    Ok(Json(json!({
        "status": "success",
        "data": theme,
        "name": name,
    })))
}
