//! 좌표계 모델.
//!
//! 두 좌표계를 오간다:
//! - **월드 공간** — 실제 모니터 해상도에서의 게임 창 픽셀 좌표
//! - **스크린 공간** — 자동화 로직이 기준으로 삼는 1920×1080 정규 좌표

use serde::{Deserialize, Serialize};

/// 대상 게임 창의 물리 픽셀 사각형.
///
/// 창 로케이터가 공급하며, 하나의 매핑이 살아있는 동안 불변으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    /// 화면 기준 왼쪽 좌표
    pub left: i32,
    /// 화면 기준 위쪽 좌표
    pub top: i32,
    /// 창 너비 (픽셀)
    pub width: u32,
    /// 창 높이 (픽셀)
    pub height: u32,
}

/// 좌표 변환 파라미터 — 한 번 계산되면 읽기 전용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    /// 16:9로 맞추기 위해 잘라내는 총 픽셀 수 (대칭 크롭)
    pub crop_pixels: u32,
    /// true면 좌/우에서, false면 상/하에서 잘라냄
    pub cut_sides: bool,
    /// 크롭 후 월드 픽셀 → 스크린 픽셀 배율 (항상 1920 축 기준)
    pub scale: f64,
}

/// 2차원 점 — 월드/스크린 공간 여부는 문맥이 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// 새 점 생성
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 스크린 공간 부분 프레임 요청 영역.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Region {
    /// 새 영역 생성
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// 좌상단 모서리
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// 우하단 모서리
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_corners() {
        let region = Region::new(100.0, 50.0, 300.0, 200.0);
        assert_eq!(region.top_left(), Point::new(100.0, 50.0));
        assert_eq!(region.bottom_right(), Point::new(400.0, 250.0));
    }

    #[test]
    fn transform_params_serde_roundtrip() {
        let params = TransformParams {
            crop_pixels: 640,
            cut_sides: true,
            scale: 1.0,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: TransformParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
