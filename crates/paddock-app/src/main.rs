//! # paddock-app
//!
//! Paddock 바이너리 진입점.
//! 설정 로드, 자동화 컨텍스트 와이어링, 웹 서버 라이프사이클 관리.

mod bot;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use paddock_core::config_manager::ConfigManager;
use paddock_web::{AppState, WebServer};
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::bot::BotContext;

/// Paddock 데스크톱 봇 서버
///
/// 16:9 게임 창 자동화 봇 — 로컬 설정/테마/데이터 API와 웹 UI 제공
#[derive(Parser, Debug)]
#[command(name = "paddock")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 콘텐츠 루트 디렉토리 (themes/, data/ 등의 기준)
    #[arg(long)]
    content_root: Option<PathBuf>,

    /// 웹 서버 포트 (설정 파일보다 우선)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// 대상 창 제목 패턴 (설정 파일보다 우선)
    #[arg(long, short = 'w')]
    window_title: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 로깅 초기화 — RUST_LOG가 있으면 CLI 인자보다 우선
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 설정 로드 + CLI 오버라이드
    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone())?,
        None => ConfigManager::new()?,
    };
    let mut config = config_manager.get();
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if let Some(title) = &args.window_title {
        config.window.title = title.clone();
    }
    if let Some(root) = &args.content_root {
        config.content.root = root.clone();
    }

    info!(
        port = config.web.port,
        content_root = %config.content.root.display(),
        "Paddock 시작"
    );

    // 자동화 컨텍스트 — 봇 제어 루프가 소유할 단일 인스턴스
    let bot = BotContext::new(&config);
    info!(input_platform = bot.input.platform(), "자동화 컨텍스트 준비 완료");

    // 초기 프레임 캡처 시도 — 성공하면 좌표 매핑이 확정된다
    match bot.frames.capture(None, true) {
        Ok(frame) => {
            info!(
                width = frame.width(),
                height = frame.height(),
                "초기 프레임 캡처 성공"
            );
            if let Some(params) = bot.mapper.params() {
                info!(
                    crop_pixels = params.crop_pixels,
                    cut_sides = params.cut_sides,
                    scale = params.scale,
                    "좌표 매핑 확정"
                );
            }
        }
        Err(e) => warn!("초기 프레임 캡처 실패 (창 미탐지?): {e}"),
    }

    // 웹 서버 실행 + ctrl-c 기반 graceful shutdown
    let state = AppState::from_content_config(&config.content)?;
    let server = WebServer::new(state, config.web.clone());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut server_handle = tokio::spawn(server.run(shutdown_rx));

    tokio::select! {
        result = &mut server_handle => {
            // 서버가 스스로 종료 (포트 바인드 실패 등)
            result??;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("종료 신호 수신 — 서버 정리 중");
            let _ = shutdown_tx.send(true);
            server_handle.await??;
        }
    }

    Ok(())
}
