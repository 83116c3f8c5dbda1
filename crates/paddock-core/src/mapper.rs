//! 월드 좌표 ↔ 스크린 좌표 변환.
//!
//! 게임 창은 임의 해상도로 렌더링되지만(월드 공간), 모든 자동화 로직은
//! 1920×1080 기준 좌표(스크린 공간)로 작성된다. 초기화 시점에 창
//! 기하로부터 16:9 대칭 크롭 + 배율을 한 번 계산하고, 이후의 모든
//! 변환은 그 파라미터에 대한 순수 함수다.

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::models::geometry::{Point, TransformParams, WindowGeometry};

/// 스크린 공간 기준 너비 (픽셀)
pub const SCREEN_WIDTH: f64 = 1920.0;

/// 목표 종횡비 (16:9)
pub const TARGET_RATIO: f64 = 16.0 / 9.0;

/// 종횡비 일치 판정 허용 오차
const RATIO_EPSILON: f64 = 1e-6;

/// 좌표 매퍼 — 월드 공간과 1920×1080 스크린 공간 사이의 아핀 매핑.
///
/// 명시적 인스턴스로 생성해 `Arc`로 공유한다. 파라미터는 최초
/// `initialize` 호출에서 한 번만 계산되며(첫 호출자의 기하가 승리),
/// 창 크기 변경은 자동 감지하지 않는다 — 필요하면 호출자가 [`reset`]
/// 후 재초기화해야 한다.
///
/// [`reset`]: CoordinateMapper::reset
#[derive(Debug, Default)]
pub struct CoordinateMapper {
    params: RwLock<Option<TransformParams>>,
}

impl CoordinateMapper {
    /// 미초기화 상태의 새 매퍼 생성
    pub fn new() -> Self {
        Self {
            params: RwLock::new(None),
        }
    }

    /// 창 기하로부터 변환 파라미터 계산.
    ///
    /// 멱등: 이미 초기화되어 있으면 기존 파라미터를 그대로 반환한다.
    /// 경쟁 시에는 쓰기 락 아래의 check-and-set으로 첫 호출자의
    /// 기하만 반영된다.
    pub fn initialize(&self, geometry: &WindowGeometry) -> TransformParams {
        let mut slot = self.params.write();
        if let Some(existing) = *slot {
            if compute_params(geometry) != existing {
                warn!(
                    width = geometry.width,
                    height = geometry.height,
                    "이미 초기화된 매퍼에 다른 기하가 들어옴 — 기존 파라미터 유지"
                );
            }
            return existing;
        }

        let params = compute_params(geometry);
        debug!(
            crop_pixels = params.crop_pixels,
            cut_sides = params.cut_sides,
            scale = params.scale,
            "좌표 변환 파라미터 계산"
        );
        *slot = Some(params);
        params
    }

    /// 파라미터를 비워 다음 `initialize`가 재계산하게 한다.
    ///
    /// 창 리사이즈를 의도적으로 반영하는 유일한 경로.
    pub fn reset(&self) {
        *self.params.write() = None;
    }

    /// 현재 변환 파라미터 (미초기화면 None)
    pub fn params(&self) -> Option<TransformParams> {
        *self.params.read()
    }

    /// 월드 좌표 → 스크린 좌표.
    ///
    /// 미초기화 상태에서는 입력을 그대로 반환한다 — 첫 캡처 이전의
    /// 호출도 정의된 동작을 가진다.
    pub fn to_screen_space(&self, p: Point) -> Point {
        let Some(params) = *self.params.read() else {
            return p;
        };

        let half_crop = params.crop_pixels as f64 / 2.0;
        let (mut x, mut y) = (p.x, p.y);

        // 중앙 크롭 제거
        if params.cut_sides {
            x -= half_crop;
        } else {
            y -= half_crop;
        }

        Point::new(x * params.scale, y * params.scale)
    }

    /// 스크린 좌표 → 월드 좌표. [`to_screen_space`]의 정확한 역변환.
    ///
    /// [`to_screen_space`]: CoordinateMapper::to_screen_space
    pub fn to_world_space(&self, p: Point) -> Point {
        let Some(params) = *self.params.read() else {
            return p;
        };

        let half_crop = params.crop_pixels as f64 / 2.0;
        let (mut x, mut y) = (p.x / params.scale, p.y / params.scale);

        // 중앙 크롭 오프셋 복원
        if params.cut_sides {
            x += half_crop;
        } else {
            y += half_crop;
        }

        Point::new(x, y)
    }
}

/// 기하로부터 크롭/배율 파라미터 계산 (순수 함수)
fn compute_params(geometry: &WindowGeometry) -> TransformParams {
    let src_w = geometry.width as f64;
    let src_h = geometry.height as f64;
    let src_ratio = src_w / src_h;

    if (src_ratio - TARGET_RATIO).abs() < RATIO_EPSILON {
        // 이미 16:9 — 크롭 없음
        TransformParams {
            crop_pixels: 0,
            cut_sides: false,
            scale: SCREEN_WIDTH / src_w,
        }
    } else if src_ratio > TARGET_RATIO {
        // 너무 넓음 → 좌/우 크롭
        let new_w = (src_h * TARGET_RATIO).round();
        TransformParams {
            crop_pixels: (src_w - new_w) as u32,
            cut_sides: true,
            scale: SCREEN_WIDTH / new_w,
        }
    } else {
        // 너무 김 → 상/하 크롭
        let new_h = (src_w / TARGET_RATIO).round();
        TransformParams {
            crop_pixels: (src_h - new_h) as u32,
            cut_sides: false,
            scale: SCREEN_WIDTH / src_w,
        }
    }
}
