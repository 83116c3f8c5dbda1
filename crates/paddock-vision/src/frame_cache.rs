//! 단일 슬롯 프레임 캐시.
//!
//! 가장 최근 캡처 프레임 하나를 소유하고, 같은 논리 스텝 안의 반복
//! 호출자에게 재사용시킨다. 요청 영역(스크린 공간)은 좌표 매퍼로
//! 월드 사각형으로 되돌린 뒤 잘라내고, `scale` 배율로 리스케일해
//! 요청한 스크린 공간 픽셀 크기로 반환한다.
//!
//! 동시성 계약: 캡처/무효화는 컨트롤러 루프 한 곳에서 순차 호출되는
//! 것을 전제한다. 내부 뮤텍스는 슬롯 하나의 일관성만 지키며, 동시
//! 캡처 호출의 순서는 보장하지 않는다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use image::RgbImage;
use parking_lot::Mutex;
use tracing::debug;

use paddock_core::error::CoreError;
use paddock_core::mapper::CoordinateMapper;
use paddock_core::models::frame::{PixelFormat, RawFrame};
use paddock_core::models::geometry::{Region, WindowGeometry};
use paddock_core::ports::capture::PlatformCapture;
use paddock_core::ports::window_locator::WindowLocator;

use crate::resize;

/// 캐시 슬롯에 보관되는 프레임.
///
/// 소유권은 [`FrameCache`]에만 있다 — 호출자는 항상 복제본(스냅샷)을
/// 받으므로 이후의 `invalidate`가 호출자 버퍼를 건드리지 않는다.
struct CachedFrame {
    image: RgbImage,
    geometry: WindowGeometry,
    captured_at: DateTime<Utc>,
}

/// 단일 슬롯 프레임 캐시 — 캡처 + 영역 크롭/리스케일 오케스트레이터
pub struct FrameCache {
    mapper: Arc<CoordinateMapper>,
    locator: Box<dyn WindowLocator>,
    capture: Box<dyn PlatformCapture>,
    slot: Mutex<Option<CachedFrame>>,
}

impl FrameCache {
    /// 새 프레임 캐시 생성
    pub fn new(
        mapper: Arc<CoordinateMapper>,
        locator: Box<dyn WindowLocator>,
        capture: Box<dyn PlatformCapture>,
    ) -> Self {
        Self {
            mapper,
            locator,
            capture,
            slot: Mutex::new(None),
        }
    }

    /// 프레임 캡처.
    ///
    /// 유효한 캐시가 있고 `force_refresh`가 아니면 재사용하고, 아니면
    /// 창 로케이터 → 플랫폼 캡처 경로로 새 전체 프레임을 떠서 슬롯을
    /// 교체한다 (슬롯은 항상 최대 1개). `region`이 주어지면 캐시
    /// 버퍼에서 해당 월드 사각형을 잘라 스크린 공간 크기로 리스케일해
    /// 반환하고, 없으면 전체 버퍼를 무배율로 반환한다.
    ///
    /// 창을 못 찾으면 `WindowNotFound`, 캡처 백엔드가 실패하면
    /// `CaptureUnavailable` — 둘 다 현재 호출에 치명적이며 재시도는
    /// 호출자 몫이다.
    pub fn capture(
        &self,
        region: Option<Region>,
        force_refresh: bool,
    ) -> Result<RgbImage, CoreError> {
        let mut slot = self.slot.lock();

        if force_refresh || slot.is_none() {
            *slot = Some(self.grab_full_frame()?);
        } else {
            debug!("캐시된 프레임 재사용");
        }

        // 위에서 채웠으므로 항상 Some
        let cached = slot
            .as_ref()
            .ok_or_else(|| CoreError::Internal("프레임 슬롯 비어 있음".to_string()))?;

        match region {
            Some(region) => self.slice_region(&cached.image, &region),
            None => Ok(cached.image.clone()),
        }
    }

    /// 캐시를 비워 다음 `capture`가 새로 뜨게 한다.
    ///
    /// 화면 내용이 바뀐 것을 아는 시점마다 호출해야 stale 프레임을
    /// 읽지 않는다.
    pub fn invalidate(&self) {
        *self.slot.lock() = None;
        debug!("프레임 캐시 무효화");
    }

    /// 캐시된 프레임의 캡처 시각 (비어 있으면 None)
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.slot.lock().as_ref().map(|c| c.captured_at)
    }

    /// 캐시된 프레임을 뜰 때의 창 기하 (비어 있으면 None)
    pub fn cached_geometry(&self) -> Option<WindowGeometry> {
        self.slot.lock().as_ref().map(|c| c.geometry)
    }

    /// 전체 창 프레임 한 장을 떠서 RGB로 변환
    fn grab_full_frame(&self) -> Result<CachedFrame, CoreError> {
        let geometry = self.locator.locate()?;
        let raw = self.capture.grab(&geometry)?;
        let image = to_rgb(&raw)?;

        // 첫 캡처에서 좌표 매핑 확정 (이후는 멱등)
        self.mapper.initialize(&geometry);

        debug!(
            width = image.width(),
            height = image.height(),
            "새 프레임 캡처"
        );

        Ok(CachedFrame {
            image,
            geometry,
            captured_at: Utc::now(),
        })
    }

    /// 스크린 공간 영역을 월드 사각형으로 되돌려 잘라내고 리스케일
    fn slice_region(&self, frame: &RgbImage, region: &Region) -> Result<RgbImage, CoreError> {
        let top_left = self.mapper.to_world_space(region.top_left());
        let bottom_right = self.mapper.to_world_space(region.bottom_right());
        let scale = self.mapper.params().map(|p| p.scale).unwrap_or(1.0);

        let (frame_w, frame_h) = frame.dimensions();
        let x0 = (top_left.x.round().max(0.0) as u32).min(frame_w);
        let y0 = (top_left.y.round().max(0.0) as u32).min(frame_h);
        let x1 = (bottom_right.x.round().max(0.0) as u32).min(frame_w);
        let y1 = (bottom_right.y.round().max(0.0) as u32).min(frame_h);

        if x1 <= x0 || y1 <= y0 {
            return Err(CoreError::Internal(format!(
                "영역이 프레임 밖: {region:?}"
            )));
        }

        let (crop_w, crop_h) = (x1 - x0, y1 - y0);
        let cropped = image::imageops::crop_imm(frame, x0, y0, crop_w, crop_h).to_image();

        // 월드 크기 × scale = 요청한 스크린 공간 크기
        let out_w = ((crop_w as f64 * scale).round() as u32).max(1);
        let out_h = ((crop_h as f64 * scale).round() as u32).max(1);
        resize::fast_resize(&cropped, out_w, out_h)
    }
}

/// 원시 프레임을 3채널 RGB로 변환 (BGRA 기본, RGBA 허용)
fn to_rgb(raw: &RawFrame) -> Result<RgbImage, CoreError> {
    if !raw.is_well_formed() {
        return Err(CoreError::Internal(format!(
            "원시 프레임 버퍼 크기 불일치: {}x{}, {}바이트",
            raw.width,
            raw.height,
            raw.pixels.len()
        )));
    }

    let mut rgb = Vec::with_capacity((raw.width as usize) * (raw.height as usize) * 3);
    for px in raw.pixels.chunks_exact(4) {
        match raw.format {
            PixelFormat::Bgra8 => rgb.extend_from_slice(&[px[2], px[1], px[0]]),
            PixelFormat::Rgba8 => rgb.extend_from_slice(&[px[0], px[1], px[2]]),
        }
    }

    RgbImage::from_raw(raw.width, raw.height, rgb)
        .ok_or_else(|| CoreError::Internal("RGB 버퍼 생성 실패".to_string()))
}
