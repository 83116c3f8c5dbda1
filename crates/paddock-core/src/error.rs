//! Paddock 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러를 만들지 않고 `CoreError`로 수렴시킨다.
//! 캡처/입력 실패는 현재 호출에 치명적이며 내부 재시도는 하지 않는다 —
//! 재시도 정책은 호출자(봇 제어 루프)의 몫이다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 대상 게임 창을 찾을 수 없음
    #[error("창 미발견: {0}")]
    WindowNotFound(String),

    /// 스크린 캡처 불가 (창 핸들 소실, 캡처 백엔드 실패)
    #[error("캡처 불가: {0}")]
    CaptureUnavailable(String),

    /// 입력 주입 실패 (마우스 이동/클릭)
    #[error("입력 에러: {0}")]
    Input(String),

    /// 리소스를 찾을 수 없음
    #[error("{resource_type} 미발견: {id}")]
    NotFound {
        /// 리소스 종류 (예: "Theme", "DataFile")
        resource_type: String,
        /// 리소스 식별자
        id: String,
    },

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
