//! API 라우트 정의.
//!
//! 원래 서비스와 동일하게 루트 레벨에 마운트한다 — 웹 UI가 같은
//! 오리진의 고정 경로를 호출한다.

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::AppState;

/// API 라우트 생성
pub fn routes() -> Router<AppState> {
    Router::new()
        // 봇 설정 문서
        .route(
            "/config",
            get(handlers::config::get_config).post(handlers::config::update_config),
        )
        // 테마
        .route("/themes", get(handlers::themes::list_themes))
        .route(
            "/theme/{name}",
            get(handlers::themes::get_theme).post(handlers::themes::update_theme),
        )
        // 이벤트 검색
        .route("/event/{text}", get(handlers::events::search_events))
        // 게임 데이터 파일
        .route("/data/{*path}", get(handlers::data::get_data_file))
        // 버전
        .route("/version.txt", get(handlers::version::get_version))
        // 알림 에셋 목록
        .route("/notifs", get(handlers::notifs::list_notifications))
}
