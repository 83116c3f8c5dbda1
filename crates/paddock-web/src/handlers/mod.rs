//! API 핸들러 모듈.

pub mod config;
pub mod data;
pub mod events;
pub mod notifs;
pub mod themes;
pub mod version;

use axum::http::header;

/// 캐시 무효화 헤더 값 — 모든 동적 콘텐츠에 적용
pub(crate) const NO_STORE: &str = "no-cache, no-store, must-revalidate";

/// 캐시 무효화 헤더 3종 (Cache-Control / Pragma / Expires)
pub(crate) fn no_store_headers() -> [(header::HeaderName, &'static str); 3] {
    [
        (header::CACHE_CONTROL, NO_STORE),
        (header::PRAGMA, "no-cache"),
        (header::EXPIRES, "0"),
    ]
}

/// 파일 이름으로 쓰기 안전한 식별자인지 검사.
///
/// 경로 구분자/상위 참조가 섞이지 못하도록 영숫자, `-`, `_`만 허용.
pub(crate) fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
