//! 입력 드라이버 구현.
//!
//! `NoOpInputDriver` (테스트/미탑재 빌드용)와 `EnigoInputDriver`
//! (실제 입력, `enigo` feature)를 제공한다.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use paddock_core::error::CoreError;
use paddock_core::ports::input_driver::InputDriver;

// ============================================================
// NoOpInputDriver — 테스트/디버깅용
// ============================================================

/// No-Op 입력 드라이버 — 모든 입력을 로깅만 하고 실행하지 않음
pub struct NoOpInputDriver;

#[async_trait]
impl InputDriver for NoOpInputDriver {
    async fn move_to(&self, x: f64, y: f64, duration: Duration) -> Result<(), CoreError> {
        debug!(x, y, duration_ms = duration.as_millis() as u64, "[NoOp] 마우스 이동");
        Ok(())
    }

    async fn press(&self) -> Result<(), CoreError> {
        debug!("[NoOp] 버튼 누름");
        Ok(())
    }

    async fn release(&self) -> Result<(), CoreError> {
        debug!("[NoOp] 버튼 놓음");
        Ok(())
    }

    fn platform(&self) -> &str {
        "noop"
    }
}

// ============================================================
// EnigoInputDriver — 실제 마우스 입력
// ============================================================

/// 보간 이동 스텝 주파수 (스텝/초)
#[cfg(feature = "enigo")]
const MOVE_STEPS_PER_SEC: f64 = 60.0;

/// 실제 마우스 입력 드라이버 (enigo 기반)
///
/// macOS: Accessibility 권한 필요
/// Windows: UIAccess 또는 관리자 권한 필요
/// Linux: X11 또는 Wayland + uinput 권한 필요
#[cfg(feature = "enigo")]
pub struct EnigoInputDriver {
    /// enigo 인스턴스 (Send지만 !Sync → tokio::sync::Mutex 사용)
    enigo: tokio::sync::Mutex<enigo::Enigo>,
}

#[cfg(feature = "enigo")]
impl EnigoInputDriver {
    /// 새 EnigoInputDriver 생성
    pub fn new() -> Result<Self, CoreError> {
        let settings = enigo::Settings::default();
        let enigo = enigo::Enigo::new(&settings)
            .map_err(|e| CoreError::Input(format!("입력 드라이버 초기화 실패: {e}")))?;
        Ok(Self {
            enigo: tokio::sync::Mutex::new(enigo),
        })
    }
}

#[cfg(feature = "enigo")]
#[async_trait]
impl InputDriver for EnigoInputDriver {
    async fn move_to(&self, x: f64, y: f64, duration: Duration) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!(x, y, duration_ms = duration.as_millis() as u64, "[Enigo] 마우스 이동");

        let mut enigo = self.enigo.lock().await;
        let target = (x.round() as i32, y.round() as i32);

        // enigo에는 시간에 걸친 이동이 없으므로 선형 보간으로 재현
        let steps = (duration.as_secs_f64() * MOVE_STEPS_PER_SEC).round() as u32;
        if steps > 1 {
            let (start_x, start_y) = enigo
                .location()
                .map_err(|e| CoreError::Input(format!("커서 위치 조회 실패: {e}")))?;
            let step_delay = duration / steps;

            for i in 1..steps {
                let t = i as f64 / steps as f64;
                let ix = start_x as f64 + (x - start_x as f64) * t;
                let iy = start_y as f64 + (y - start_y as f64) * t;
                enigo
                    .move_mouse(ix.round() as i32, iy.round() as i32, enigo::Coordinate::Abs)
                    .map_err(|e| CoreError::Input(format!("마우스 이동 실패: {e}")))?;
                tokio::time::sleep(step_delay).await;
            }
        }

        enigo
            .move_mouse(target.0, target.1, enigo::Coordinate::Abs)
            .map_err(|e| CoreError::Input(format!("마우스 이동 실패: {e}")))?;
        Ok(())
    }

    async fn press(&self) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!("[Enigo] 버튼 누름");
        let mut enigo = self.enigo.lock().await;
        enigo
            .button(enigo::Button::Left, enigo::Direction::Press)
            .map_err(|e| CoreError::Input(format!("버튼 누름 실패: {e}")))?;
        Ok(())
    }

    async fn release(&self) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!("[Enigo] 버튼 놓음");
        let mut enigo = self.enigo.lock().await;
        enigo
            .button(enigo::Button::Left, enigo::Direction::Release)
            .map_err(|e| CoreError::Input(format!("버튼 놓음 실패: {e}")))?;
        Ok(())
    }

    fn platform(&self) -> &str {
        #[cfg(target_os = "macos")]
        {
            "macos"
        }
        #[cfg(target_os = "windows")]
        {
            "windows"
        }
        #[cfg(target_os = "linux")]
        {
            "linux"
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            "unknown"
        }
    }
}

// ============================================================
// 플랫폼별 드라이버 팩토리
// ============================================================

/// 플랫폼별 입력 드라이버 생성 팩토리
///
/// `enigo` feature 활성화 시 실제 입력 드라이버 반환,
/// 비활성화 또는 초기화 실패 시 NoOp 드라이버 반환.
pub fn create_platform_input_driver() -> Box<dyn InputDriver> {
    #[cfg(feature = "enigo")]
    {
        match EnigoInputDriver::new() {
            Ok(driver) => {
                tracing::info!("실제 입력 드라이버 (enigo) 초기화 완료");
                return Box::new(driver);
            }
            Err(e) => {
                tracing::warn!("enigo 초기화 실패, NoOp 폴백: {e}");
            }
        }
    }
    Box::new(NoOpInputDriver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_driver_all_methods_ok() {
        let driver = NoOpInputDriver;
        assert!(driver
            .move_to(100.0, 200.0, Duration::from_millis(10))
            .await
            .is_ok());
        assert!(driver.press().await.is_ok());
        assert!(driver.release().await.is_ok());
    }

    #[test]
    fn noop_driver_platform() {
        let driver = NoOpInputDriver;
        assert_eq!(driver.platform(), "noop");
    }

    #[test]
    fn factory_creates_driver() {
        let driver = create_platform_input_driver();
        // enigo feature 비활성화 시 noop, 활성화 시 플랫폼별
        let platform = driver.platform();
        assert!(!platform.is_empty());
    }
}
