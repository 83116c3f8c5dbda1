//! 원시 캡처 프레임 모델.
//!
//! 플랫폼 캡처 어댑터가 반환하는 픽셀 버퍼. RGB 변환은
//! 프레임 캐시(`paddock-vision`)가 담당한다.

use serde::{Deserialize, Serialize};

/// 원시 프레임의 픽셀 포맷.
///
/// 캡처 백엔드 기본 가정은 BGRA이며, xcap처럼 RGBA를 내놓는
/// 백엔드를 위해 RGBA도 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 4바이트 BGRA (플랫폼 캡처 기본)
    Bgra8,
    /// 4바이트 RGBA
    Rgba8,
}

/// 플랫폼 캡처가 반환하는 원시 픽셀 버퍼.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// 프레임 너비 (픽셀)
    pub width: u32,
    /// 프레임 높이 (픽셀)
    pub height: u32,
    /// 픽셀 데이터 — `format`에 따라 4바이트/픽셀
    pub pixels: Vec<u8>,
    /// 픽셀 포맷
    pub format: PixelFormat,
}

impl RawFrame {
    /// 버퍼 길이가 해상도와 일치하는지 검사
    pub fn is_well_formed(&self) -> bool {
        self.pixels.len() == (self.width as usize) * (self.height as usize) * 4
    }
}
