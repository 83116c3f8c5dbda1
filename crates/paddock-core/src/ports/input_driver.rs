//! 입력 드라이버 포트.
//!
//! 마우스 조작을 위한 크로스 플랫폼 인터페이스.
//! 좌표는 항상 절대 **월드 공간** 픽셀이다 — 스크린 공간 정규화는
//! 상위의 `InputActuator`가 끝낸 뒤 이 포트로 내려온다.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CoreError;

/// 입력 드라이버 — 저수준 포인터 프리미티브.
///
/// 구현체: `EnigoInputDriver` (실제 입력), `NoOpInputDriver` (로깅 전용)
#[async_trait]
pub trait InputDriver: Send + Sync {
    /// `duration`에 걸친 부드러운 마우스 이동 (절대 좌표)
    async fn move_to(&self, x: f64, y: f64, duration: Duration) -> Result<(), CoreError>;

    /// 현재 위치에서 왼쪽 버튼 누름
    async fn press(&self) -> Result<(), CoreError>;

    /// 현재 위치에서 왼쪽 버튼 놓음
    async fn release(&self) -> Result<(), CoreError>;

    /// 플랫폼 이름 (예: "macos", "windows", "linux", "noop")
    fn platform(&self) -> &str;
}
