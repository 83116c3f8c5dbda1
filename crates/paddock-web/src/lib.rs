//! # paddock-web
//!
//! 로컬 웹 서버.
//! Axum 기반 REST API + 웹 UI 임베드.
//!
//! ## 기능
//! - 봇 설정 문서 조회/저장 (`/config`)
//! - 테마 JSON 조회/저장/목록 (`/theme/{name}`, `/themes`)
//! - 게임 데이터 파일 서빙 (`/data/{*path}`)
//! - 이벤트 검색 (`/event/{text}`)
//! - 버전/알림 에셋 조회 (`/version.txt`, `/notifs`)
//! - 정적 파일 서빙 (웹 UI)

pub mod embedded;
pub mod error;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use paddock_core::config::{ContentConfig, WebConfig};
use paddock_core::error::CoreError;
use paddock_core::json_store::JsonFileStore;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// 포트 바인드 최대 시도 횟수
const MAX_PORT_ATTEMPTS: u16 = 10;

/// 콘텐츠 파일 경로 묶음 (모두 해석 완료된 절대/상대 경로)
#[derive(Debug, Clone)]
pub struct ContentPaths {
    /// 테마 JSON 디렉토리
    pub themes_dir: PathBuf,
    /// 게임 데이터 디렉토리
    pub data_dir: PathBuf,
    /// 알림 에셋 디렉토리
    pub notifications_dir: PathBuf,
    /// 버전 파일
    pub version_file: PathBuf,
}

impl ContentPaths {
    /// 설정에서 경로 해석
    pub fn from_config(content: &ContentConfig) -> Self {
        Self {
            themes_dir: content.themes_path(),
            data_dir: content.data_path(),
            notifications_dir: content.notifications_path(),
            version_file: content.version_path(),
        }
    }
}

/// 웹 서버 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 봇 설정 문서 저장소 (`/config`)
    pub settings: JsonFileStore,
    /// 콘텐츠 경로
    pub content: ContentPaths,
}

impl AppState {
    /// 콘텐츠 설정으로부터 상태 구성 (설정 문서 로드 포함)
    pub fn from_content_config(content: &ContentConfig) -> Result<Self, CoreError> {
        Ok(Self {
            settings: JsonFileStore::open(content.bot_settings_path())?,
            content: ContentPaths::from_config(content),
        })
    }
}

/// 전체 라우터 구성 (API 라우트 + 정적 fallback + CORS/트레이스 레이어)
pub fn build_router(state: AppState) -> Router {
    // CORS 설정 — 로컬 UI가 임의 오리진에서 접근
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::routes())
        .fallback(embedded::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 로컬 웹 서버
pub struct WebServer {
    config: WebConfig,
    state: AppState,
}

impl WebServer {
    /// 새 웹 서버 생성
    pub fn new(state: AppState, config: WebConfig) -> Self {
        Self { config, state }
    }

    /// 서버 실행
    ///
    /// 기본 포트에서 시작하여, 포트가 이미 사용 중이면 다음 포트를 시도합니다.
    /// 최대 10개 포트를 시도한 후 실패하면 에러를 반환합니다.
    ///
    /// # Arguments
    /// * `shutdown_rx` - 종료 신호 수신 채널
    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let host = if self.config.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        // 라우터 구성
        let app = build_router(self.state);

        // 포트 바인드 시도 (최대 MAX_PORT_ATTEMPTS번)
        let base_port = self.config.port;
        let mut last_error = None;

        for attempt in 0..MAX_PORT_ATTEMPTS {
            let port = base_port.saturating_add(attempt);

            // 포트 오버플로우 체크
            if port < base_port && attempt > 0 {
                break;
            }

            let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
                Ok(a) => a,
                Err(e) => {
                    error!("잘못된 주소 {}:{} — {}", host, port, e);
                    continue;
                }
            };

            match TcpListener::bind(addr).await {
                Ok(listener) => {
                    if attempt > 0 {
                        warn!("포트 {} 사용 불가, 대체 포트 {} 사용", base_port, port);
                    }
                    info!("웹 서버 시작: http://{}", addr);

                    // Graceful shutdown과 함께 서버 실행
                    axum::serve(listener, app)
                        .with_graceful_shutdown(async move {
                            loop {
                                if *shutdown_rx.borrow() {
                                    info!("웹 서버 종료 신호 수신");
                                    break;
                                }
                                if shutdown_rx.changed().await.is_err() {
                                    break;
                                }
                            }
                        })
                        .await?;

                    info!("웹 서버 종료");
                    return Ok(());
                }
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::AddrInUse {
                        warn!("포트 {} 이미 사용 중, 다음 포트 시도...", port);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!(
                    "포트 {}-{} 모두 사용 불가",
                    base_port,
                    base_port.saturating_add(MAX_PORT_ATTEMPTS - 1)
                ),
            )
        }))
    }

    /// 서버 URL 반환
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.config.port)
    }
}
