//! 애플리케이션 설정 구조체.
//!
//! 웹 서버 포트, 대상 창 제목, 입력 타이밍, 콘텐츠 디렉토리 등
//! 서버 자체의 런타임 설정을 정의한다. 웹 UI가 편집하는 봇 설정
//! 문서([`crate::json_store`])와는 별개다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 웹 서버 설정
    #[serde(default)]
    pub web: WebConfig,
    /// 대상 창 설정
    #[serde(default)]
    pub window: WindowConfig,
    /// 입력 타이밍 설정
    #[serde(default)]
    pub input: InputConfig,
    /// 콘텐츠 경로 설정
    #[serde(default)]
    pub content: ContentConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }
}

// ============================================================
// 웹 서버 설정
// ============================================================

/// 웹 서버 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// 리스닝 포트
    #[serde(default = "default_port")]
    pub port: u16,
    /// 외부 접근 허용 (false면 127.0.0.1만 바인드)
    #[serde(default)]
    pub allow_external: bool,
}

fn default_port() -> u16 {
    8000
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allow_external: false,
        }
    }
}

// ============================================================
// 대상 창 설정
// ============================================================

/// 대상 게임 창 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 창 제목 부분 일치 패턴 (빈 문자열이면 로케이터가 실패)
    #[serde(default)]
    pub title: String,
}

// ============================================================
// 입력 타이밍 설정
// ============================================================

/// 입력 타이밍 설정 (초 단위)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// 단독 이동 기본 시간
    #[serde(default = "default_move_duration")]
    pub move_duration_secs: f64,
    /// 클릭 전 이동 기본 시간
    #[serde(default = "default_click_duration")]
    pub click_duration_secs: f64,
    /// 다중 클릭 사이 간격
    #[serde(default = "default_click_interval")]
    pub click_interval_secs: f64,
    /// 스와이프 전체 기본 시간
    #[serde(default = "default_swipe_duration")]
    pub swipe_duration_secs: f64,
    /// 스와이프 시작점까지의 리드인 시간
    #[serde(default = "default_swipe_lead_in")]
    pub swipe_lead_in_secs: f64,
}

fn default_move_duration() -> f64 {
    0.2
}

fn default_click_duration() -> f64 {
    0.225
}

fn default_click_interval() -> f64 {
    0.1
}

fn default_swipe_duration() -> f64 {
    0.3
}

fn default_swipe_lead_in() -> f64 {
    0.1
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_duration_secs: default_move_duration(),
            click_duration_secs: default_click_duration(),
            click_interval_secs: default_click_interval(),
            swipe_duration_secs: default_swipe_duration(),
            swipe_lead_in_secs: default_swipe_lead_in(),
        }
    }
}

// ============================================================
// 콘텐츠 경로 설정
// ============================================================

/// 콘텐츠 경로 설정.
///
/// 상대 경로 항목은 `root`를 기준으로 해석한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// 콘텐츠 루트 디렉토리
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// 테마 JSON 디렉토리
    #[serde(default = "default_themes_dir")]
    pub themes_dir: String,
    /// 게임 데이터 디렉토리
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// 알림 에셋 디렉토리
    #[serde(default = "default_notifications_dir")]
    pub notifications_dir: String,
    /// 버전 파일
    #[serde(default = "default_version_file")]
    pub version_file: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_themes_dir() -> String {
    "themes".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_notifications_dir() -> String {
    "assets/notifications".to_string()
}

fn default_version_file() -> String {
    "version.txt".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            themes_dir: default_themes_dir(),
            data_dir: default_data_dir(),
            notifications_dir: default_notifications_dir(),
            version_file: default_version_file(),
        }
    }
}

impl ContentConfig {
    /// 테마 디렉토리 절대 경로
    pub fn themes_path(&self) -> PathBuf {
        self.root.join(&self.themes_dir)
    }

    /// 데이터 디렉토리 절대 경로
    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_dir)
    }

    /// 알림 에셋 디렉토리 절대 경로
    pub fn notifications_path(&self) -> PathBuf {
        self.root.join(&self.notifications_dir)
    }

    /// 버전 파일 절대 경로
    pub fn version_path(&self) -> PathBuf {
        self.root.join(&self.version_file)
    }

    /// 봇 설정 문서 경로 (`config.json`)
    pub fn bot_settings_path(&self) -> PathBuf {
        self.root.join("config.json")
    }
}
