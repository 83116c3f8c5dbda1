//! 자동화 컨텍스트.
//!
//! 좌표 매퍼, 프레임 캐시, 입력 액추에이터를 프로세스당 한 번 생성해
//! 소유한다. 봇 제어 루프와 테스트는 이 컨텍스트의 핸들을 받아
//! 쓰므로 숨은 전역 상태가 없다.

use std::sync::Arc;

use paddock_automation::actuator::InputActuator;
use paddock_automation::input_driver::create_platform_input_driver;
use paddock_core::config::AppConfig;
use paddock_core::mapper::CoordinateMapper;
use paddock_vision::capture::{create_platform_capture, create_platform_window_locator};
use paddock_vision::frame_cache::FrameCache;

/// 자동화 컨텍스트 — 캡처와 입력이 공유하는 상태의 단일 소유자
pub struct BotContext {
    /// 좌표 매퍼 (프레임 캐시/액추에이터와 공유)
    pub mapper: Arc<CoordinateMapper>,
    /// 단일 슬롯 프레임 캐시
    pub frames: FrameCache,
    /// 입력 액추에이터
    pub input: InputActuator,
}

impl BotContext {
    /// 설정으로부터 컨텍스트 구성.
    ///
    /// `capture`/`input` feature가 꺼진 빌드에서는 NoOp 어댑터가
    /// 연결된다 — 웹 서버는 그대로 동작하고 캡처/입력 호출만
    /// 실패한다.
    pub fn new(config: &AppConfig) -> Self {
        let mapper = Arc::new(CoordinateMapper::new());

        let frames = FrameCache::new(
            Arc::clone(&mapper),
            create_platform_window_locator(&config.window.title),
            create_platform_capture(),
        );

        let input = InputActuator::new(
            Arc::clone(&mapper),
            create_platform_input_driver(),
            config.input.clone(),
        );

        Self {
            mapper,
            frames,
            input,
        }
    }
}
