//! 정적 파일 임베드 및 서빙.
//!
//! rust-embed를 사용하여 웹 UI 빌드 결과를 바이너리에 임베드한다.
//! 봇이 콘텐츠를 수시로 갱신하므로 모든 응답에 캐시를 금지한다.

use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use rust_embed::Embed;

use crate::handlers::no_store_headers;

/// 웹 UI 빌드 결과 임베드
///
/// `frontend/dist` 디렉토리의 파일들을 바이너리에 포함
#[derive(Embed)]
#[folder = "frontend/dist"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.mjs"]
#[include = "*.css"]
#[include = "*.svg"]
#[include = "*.png"]
#[include = "*.ico"]
#[include = "*.json"]
#[include = "*.woff"]
#[include = "*.woff2"]
#[include = "assets/**/*"]
struct Assets;

/// 정적 파일 서빙을 위한 fallback 핸들러
pub async fn serve_static(uri: Uri) -> Response {
    serve_static_impl(uri)
}

/// 정적 파일 서빙 구현
fn serve_static_impl(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // 빈 경로는 index.html로
    let path = if path.is_empty() { "index.html" } else { path };

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                no_store_headers(),
                content.data.into_owned(),
            )
                .into_response()
        }
        None => {
            // SPA 라우팅: 알 수 없는 경로는 index.html로
            if let Some(index) = Assets::get("index.html") {
                (
                    no_store_headers(),
                    Html(String::from_utf8_lossy(&index.data).to_string()),
                )
                    .into_response()
            } else {
                // 개발 중 웹 UI 빌드 없을 때 안내
                (StatusCode::OK, Html(DEV_PLACEHOLDER.to_string())).into_response()
            }
        }
    }
}

/// 개발 중 웹 UI 미빌드 시 표시할 페이지
const DEV_PLACEHOLDER: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Paddock</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #14281d 0%, #1d3a2a 100%);
            color: #e0e0e0;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .container {
            text-align: center;
            padding: 40px;
            max-width: 600px;
        }
        h1 {
            font-size: 2.5rem;
            margin-bottom: 1rem;
            background: linear-gradient(90deg, #7ee787, #ffd866);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .subtitle {
            color: #888;
            margin-bottom: 2rem;
        }
        .status {
            background: rgba(255,255,255,0.05);
            border-radius: 12px;
            padding: 24px;
            margin-bottom: 2rem;
        }
        .status h2 {
            color: #7ee787;
            margin-bottom: 1rem;
        }
        .api-list {
            text-align: left;
            list-style: none;
        }
        .api-list li {
            padding: 8px 0;
            border-bottom: 1px solid rgba(255,255,255,0.1);
        }
        .api-list code {
            background: rgba(126,231,135,0.1);
            padding: 2px 8px;
            border-radius: 4px;
            font-family: 'SF Mono', monospace;
        }
        .build-hint {
            background: #22352a;
            padding: 16px;
            border-radius: 8px;
            font-family: 'SF Mono', monospace;
            font-size: 0.9rem;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Paddock</h1>
        <p class="subtitle">로컬 봇 서버</p>

        <div class="status">
            <h2>✅ API 서버 실행 중</h2>
            <ul class="api-list">
                <li><code>GET /config</code> - 봇 설정 문서</li>
                <li><code>GET /themes</code> - 테마 목록</li>
                <li><code>GET /theme/{name}</code> - 단일 테마</li>
                <li><code>GET /event/{text}</code> - 이벤트 검색</li>
                <li><code>GET /data/{path}</code> - 게임 데이터 파일</li>
                <li><code>GET /version.txt</code> - 버전</li>
                <li><code>GET /notifs</code> - 알림 에셋 목록</li>
            </ul>
        </div>

        <p style="margin-bottom: 1rem; color: #888;">웹 UI 빌드:</p>
        <div class="build-hint">
            cd crates/paddock-web/frontend<br>
            pnpm install && pnpm build
        </div>
    </div>
</body>
</html>"#;
