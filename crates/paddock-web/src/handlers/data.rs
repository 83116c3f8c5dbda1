//! 게임 데이터 파일 서빙 핸들러.

use std::fs;
use std::path::{Component, Path as FsPath};

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use super::no_store_headers;
use crate::error::ApiError;
use crate::AppState;

/// GET /data/{*path} - 데이터 디렉토리에서 파일 서빙
///
/// 해석된 경로가 데이터 루트를 벗어나면 접근 전에 거부한다.
/// 게임 데이터는 봇이 수시로 갱신하므로 캐시를 금지한다.
pub async fn get_data_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    // 상위 참조/절대 경로는 파일시스템에 닿기 전에 거부
    let requested = FsPath::new(&path);
    let traversal = requested.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if traversal {
        return ApiError::BadRequest("잘못된 파일 경로".to_string()).into_response();
    }

    let root = &state.content.data_dir;
    let joined = root.join(requested);

    // canonicalize로 심볼릭 링크 해석 후 경계 재검증
    let canonical = match joined.canonicalize() {
        Ok(c) => c,
        Err(_) => {
            return ApiError::NotFound(format!("파일 없음: {path}")).into_response();
        }
    };
    let root_canonical = root.canonicalize().unwrap_or_else(|_| root.clone());
    if !canonical.starts_with(&root_canonical) {
        return ApiError::BadRequest("잘못된 파일 경로".to_string()).into_response();
    }

    if !canonical.is_file() {
        return ApiError::NotFound(format!("파일 없음: {path}")).into_response();
    }

    let data = match fs::read(&canonical) {
        Ok(d) => d,
        Err(e) => return ApiError::Internal(format!("파일 읽기 실패: {e}")).into_response(),
    };

    let content_type = mime_guess::from_path(&canonical)
        .first_or_octet_stream()
        .to_string();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        no_store_headers(),
        data,
    )
        .into_response()
}
