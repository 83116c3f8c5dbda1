//! 창 로케이터 / 플랫폼 캡처 어댑터.
//!
//! `xcap` feature 활성화 시 실제 창 열거 + 모니터 캡처를 사용하고,
//! 비활성화 시 항상 실패하는 NoOp 어댑터로 폴백한다.

use paddock_core::error::CoreError;
use paddock_core::models::frame::RawFrame;
use paddock_core::models::geometry::WindowGeometry;
use paddock_core::ports::capture::PlatformCapture;
use paddock_core::ports::window_locator::WindowLocator;

// ============================================================
// NoOp 어댑터 — 캡처 백엔드 미탑재 빌드용
// ============================================================

/// NoOp 창 로케이터 — 항상 `WindowNotFound`
pub struct NoOpWindowLocator;

impl WindowLocator for NoOpWindowLocator {
    fn locate(&self) -> Result<WindowGeometry, CoreError> {
        Err(CoreError::WindowNotFound(
            "창 로케이터 백엔드 미탑재 (xcap feature 비활성화)".to_string(),
        ))
    }
}

/// NoOp 캡처 — 항상 `CaptureUnavailable`
pub struct NoOpScreenCapture;

impl PlatformCapture for NoOpScreenCapture {
    fn grab(&self, _geometry: &WindowGeometry) -> Result<RawFrame, CoreError> {
        Err(CoreError::CaptureUnavailable(
            "캡처 백엔드 미탑재 (xcap feature 비활성화)".to_string(),
        ))
    }
}

// ============================================================
// Xcap 어댑터 — 실제 창 열거 + 모니터 캡처
// ============================================================

/// 제목 부분 일치로 대상 창을 찾는 로케이터 (xcap 기반)
#[cfg(feature = "xcap")]
pub struct XcapWindowLocator {
    /// 소문자 비교용 제목 패턴
    title_pattern: String,
}

#[cfg(feature = "xcap")]
impl XcapWindowLocator {
    /// 새 로케이터 생성
    pub fn new(title_pattern: impl Into<String>) -> Self {
        Self {
            title_pattern: title_pattern.into().to_lowercase(),
        }
    }
}

#[cfg(feature = "xcap")]
impl WindowLocator for XcapWindowLocator {
    fn locate(&self) -> Result<WindowGeometry, CoreError> {
        if self.title_pattern.is_empty() {
            return Err(CoreError::WindowNotFound(
                "창 제목 패턴이 비어 있음 — window.title 설정 필요".to_string(),
            ));
        }

        let windows = xcap::Window::all()
            .map_err(|e| CoreError::WindowNotFound(format!("창 목록 조회 실패: {e}")))?;

        for window in windows {
            let title = match window.title() {
                Ok(t) => t,
                Err(_) => continue,
            };
            if !title.to_lowercase().contains(&self.title_pattern) {
                continue;
            }
            if window.is_minimized().unwrap_or(false) {
                continue;
            }

            let geometry = WindowGeometry {
                left: window.x().unwrap_or(0),
                top: window.y().unwrap_or(0),
                width: window.width().unwrap_or(0),
                height: window.height().unwrap_or(0),
            };
            if geometry.width == 0 || geometry.height == 0 {
                continue;
            }

            tracing::debug!(
                title = %title,
                left = geometry.left,
                top = geometry.top,
                width = geometry.width,
                height = geometry.height,
                "대상 창 발견"
            );
            return Ok(geometry);
        }

        Err(CoreError::WindowNotFound(format!(
            "제목에 '{}'를 포함하는 창 없음",
            self.title_pattern
        )))
    }
}

/// 모니터 캡처 후 창 사각형으로 잘라내는 캡처 어댑터 (xcap 기반)
#[cfg(feature = "xcap")]
pub struct XcapScreenCapture;

#[cfg(feature = "xcap")]
impl XcapScreenCapture {
    /// 새 캡처 어댑터 생성
    pub fn new() -> Self {
        Self
    }

    /// 창 원점을 포함하는 모니터를 고른다 (없으면 주 모니터)
    fn monitor_for(geometry: &WindowGeometry) -> Result<xcap::Monitor, CoreError> {
        let monitors = xcap::Monitor::all()
            .map_err(|e| CoreError::CaptureUnavailable(format!("모니터 목록 조회 실패: {e}")))?;

        let mut primary = None;
        for monitor in monitors {
            let mx = monitor.x().unwrap_or(0);
            let my = monitor.y().unwrap_or(0);
            let mw = monitor.width().unwrap_or(0) as i32;
            let mh = monitor.height().unwrap_or(0) as i32;

            if geometry.left >= mx
                && geometry.left < mx + mw
                && geometry.top >= my
                && geometry.top < my + mh
            {
                return Ok(monitor);
            }
            if monitor.is_primary().unwrap_or(false) {
                primary = Some(monitor);
            }
        }

        primary.ok_or_else(|| CoreError::CaptureUnavailable("모니터를 찾을 수 없음".to_string()))
    }
}

#[cfg(feature = "xcap")]
impl Default for XcapScreenCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "xcap")]
impl PlatformCapture for XcapScreenCapture {
    fn grab(&self, geometry: &WindowGeometry) -> Result<RawFrame, CoreError> {
        let monitor = Self::monitor_for(geometry)?;
        let screen = monitor
            .capture_image()
            .map_err(|e| CoreError::CaptureUnavailable(format!("모니터 캡처 실패: {e}")))?;

        // 모니터 기준 상대 좌표로 창 사각형 환산
        let rel_x = (geometry.left - monitor.x().unwrap_or(0)).max(0) as u32;
        let rel_y = (geometry.top - monitor.y().unwrap_or(0)).max(0) as u32;
        let w = geometry.width.min(screen.width().saturating_sub(rel_x));
        let h = geometry.height.min(screen.height().saturating_sub(rel_y));
        if w == 0 || h == 0 {
            return Err(CoreError::CaptureUnavailable(
                "창 사각형이 모니터 밖".to_string(),
            ));
        }

        let cropped = image::imageops::crop_imm(&screen, rel_x, rel_y, w, h).to_image();

        Ok(RawFrame {
            width: w,
            height: h,
            pixels: cropped.into_raw(),
            format: paddock_core::models::frame::PixelFormat::Rgba8,
        })
    }
}

// ============================================================
// 플랫폼별 어댑터 팩토리
// ============================================================

/// 창 로케이터 팩토리.
///
/// `xcap` feature 활성화 시 실제 로케이터, 비활성화 시 NoOp 반환.
pub fn create_platform_window_locator(title_pattern: &str) -> Box<dyn WindowLocator> {
    #[cfg(feature = "xcap")]
    {
        return Box::new(XcapWindowLocator::new(title_pattern));
    }
    #[cfg(not(feature = "xcap"))]
    {
        let _ = title_pattern;
        Box::new(NoOpWindowLocator)
    }
}

/// 플랫폼 캡처 팩토리.
pub fn create_platform_capture() -> Box<dyn PlatformCapture> {
    #[cfg(feature = "xcap")]
    {
        return Box::new(XcapScreenCapture::new());
    }
    #[cfg(not(feature = "xcap"))]
    {
        Box::new(NoOpScreenCapture)
    }
}
