//! 입력 액추에이터.
//!
//! 포인터 동작을 수행하기 전에 스크린 공간 입력을 좌표 매퍼로 월드
//! 공간으로 정규화한다. 매퍼가 미초기화면 좌표는 그대로 통과하므로
//! 첫 캡처 이전의 호출도 잘 정의된다. 드라이버 실패는 변형 없이
//! 그대로 전파한다.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use paddock_core::config::InputConfig;
use paddock_core::error::CoreError;
use paddock_core::mapper::CoordinateMapper;
use paddock_core::models::geometry::Point;
use paddock_core::ports::input_driver::InputDriver;

/// 입력 액추에이터 — 스크린 좌표 정규화 + 포인터 동작 합성
pub struct InputActuator {
    mapper: Arc<CoordinateMapper>,
    driver: Box<dyn InputDriver>,
    timing: InputConfig,
}

impl InputActuator {
    /// 새 액추에이터 생성
    pub fn new(
        mapper: Arc<CoordinateMapper>,
        driver: Box<dyn InputDriver>,
        timing: InputConfig,
    ) -> Self {
        Self {
            mapper,
            driver,
            timing,
        }
    }

    /// 드라이버 플랫폼 이름
    pub fn platform(&self) -> &str {
        self.driver.platform()
    }

    /// 스크린 좌표 `p`로 `duration`에 걸쳐 이동
    pub async fn move_to(&self, p: Point, duration: Duration) -> Result<(), CoreError> {
        let world = self.mapper.to_world_space(p);
        self.driver.move_to(world.x, world.y, duration).await
    }

    /// 스크린 좌표 `p`에서 클릭.
    ///
    /// `duration`에 걸쳐 이동한 뒤 `clicks`회의 누름/놓음 쌍을
    /// `interval` 간격으로 수행한다.
    pub async fn click(
        &self,
        p: Point,
        clicks: u32,
        interval: Duration,
        duration: Duration,
    ) -> Result<(), CoreError> {
        let world = self.mapper.to_world_space(p);
        debug!(
            screen_x = p.x,
            screen_y = p.y,
            world_x = world.x,
            world_y = world.y,
            clicks,
            "클릭"
        );

        self.driver.move_to(world.x, world.y, duration).await?;
        for i in 0..clicks {
            self.driver.press().await?;
            self.driver.release().await?;
            if i + 1 < clicks {
                tokio::time::sleep(interval).await;
            }
        }
        Ok(())
    }

    /// 기본 타이밍으로 1회 클릭
    pub async fn tap(&self, p: Point) -> Result<(), CoreError> {
        self.click(
            p,
            1,
            Duration::from_secs_f64(self.timing.click_interval_secs),
            Duration::from_secs_f64(self.timing.click_duration_secs),
        )
        .await
    }

    /// 현재 커서 위치에서 버튼 누름 (좌표 변환 없음)
    pub async fn hold(&self) -> Result<(), CoreError> {
        self.driver.press().await
    }

    /// 현재 커서 위치에서 버튼 놓음 (좌표 변환 없음)
    pub async fn release(&self) -> Result<(), CoreError> {
        self.driver.release().await
    }

    /// 스크린 좌표 `start` → `end` 스와이프.
    ///
    /// 양 끝점을 먼저 월드 공간으로 변환한 뒤, 리드인 시간 동안
    /// 시작점으로 이동 → 누름 → 남은 시간 동안 끝점으로 이동 → 놓음.
    /// 리드인은 `InputConfig::swipe_lead_in_secs`로 설정한다.
    pub async fn swipe(&self, start: Point, end: Point, duration: Duration) -> Result<(), CoreError> {
        let world_start = self.mapper.to_world_space(start);
        let world_end = self.mapper.to_world_space(end);

        let lead_in = Duration::from_secs_f64(self.timing.swipe_lead_in_secs);
        let drag = duration.saturating_sub(lead_in);
        debug!(
            from_x = world_start.x,
            from_y = world_start.y,
            to_x = world_end.x,
            to_y = world_end.y,
            drag_ms = drag.as_millis() as u64,
            "스와이프"
        );

        self.driver
            .move_to(world_start.x, world_start.y, lead_in)
            .await?;
        self.driver.press().await?;
        self.driver.move_to(world_end.x, world_end.y, drag).await?;
        self.driver.release().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paddock_core::models::geometry::WindowGeometry;
    use std::sync::Mutex;

    /// 드라이버 호출 기록
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        MoveTo { x: f64, y: f64, millis: u128 },
        Press,
        Release,
    }

    /// 호출 순서를 기록하는 테스트 드라이버
    struct RecordingDriver {
        calls: Arc<Mutex<Vec<Call>>>,
        fail: bool,
    }

    #[async_trait]
    impl InputDriver for RecordingDriver {
        async fn move_to(&self, x: f64, y: f64, duration: Duration) -> Result<(), CoreError> {
            if self.fail {
                return Err(CoreError::Input("테스트 드라이버 실패".to_string()));
            }
            self.calls.lock().unwrap().push(Call::MoveTo {
                x,
                y,
                millis: duration.as_millis(),
            });
            Ok(())
        }

        async fn press(&self) -> Result<(), CoreError> {
            self.calls.lock().unwrap().push(Call::Press);
            Ok(())
        }

        async fn release(&self) -> Result<(), CoreError> {
            self.calls.lock().unwrap().push(Call::Release);
            Ok(())
        }

        fn platform(&self) -> &str {
            "recording"
        }
    }

    fn build_actuator(
        geometry: Option<WindowGeometry>,
        fail: bool,
    ) -> (InputActuator, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mapper = Arc::new(CoordinateMapper::new());
        if let Some(g) = geometry {
            mapper.initialize(&g);
        }
        let actuator = InputActuator::new(
            mapper,
            Box::new(RecordingDriver {
                calls: Arc::clone(&calls),
                fail,
            }),
            InputConfig::default(),
        );
        (actuator, calls)
    }

    fn ultrawide() -> WindowGeometry {
        WindowGeometry {
            left: 0,
            top: 0,
            width: 2560,
            height: 1080,
        }
    }

    #[tokio::test]
    async fn move_converts_screen_to_world() {
        let (actuator, calls) = build_actuator(Some(ultrawide()), false);
        actuator
            .move_to(Point::new(0.0, 0.0), Duration::from_millis(200))
            .await
            .unwrap();

        // 스크린 (0,0) → 월드 (320,0): 좌우 크롭 640의 절반만큼 밀림
        let recorded = calls.lock().unwrap();
        assert_eq!(
            recorded[0],
            Call::MoveTo {
                x: 320.0,
                y: 0.0,
                millis: 200
            }
        );
    }

    #[tokio::test]
    async fn uninitialized_mapper_passes_coordinates_through() {
        let (actuator, calls) = build_actuator(None, false);
        actuator
            .move_to(Point::new(5.0, 7.0), Duration::ZERO)
            .await
            .unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(
            recorded[0],
            Call::MoveTo {
                x: 5.0,
                y: 7.0,
                millis: 0
            }
        );
    }

    #[tokio::test]
    async fn click_emits_press_release_pairs() {
        let (actuator, calls) = build_actuator(None, false);
        actuator
            .click(Point::new(10.0, 10.0), 3, Duration::ZERO, Duration::ZERO)
            .await
            .unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 7); // 이동 1 + (누름+놓음) × 3
        assert!(matches!(recorded[0], Call::MoveTo { .. }));
        for pair in recorded[1..].chunks(2) {
            assert_eq!(pair, &[Call::Press, Call::Release]);
        }
    }

    #[tokio::test]
    async fn swipe_emits_move_press_move_release() {
        let (actuator, calls) = build_actuator(Some(ultrawide()), false);
        actuator
            .swipe(
                Point::new(100.0, 500.0),
                Point::new(100.0, 200.0),
                Duration::from_millis(300),
            )
            .await
            .unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 4);
        // 리드인 100ms + 드래그 200ms, 양 끝점 모두 크롭 보정
        assert_eq!(
            recorded[0],
            Call::MoveTo {
                x: 420.0,
                y: 500.0,
                millis: 100
            }
        );
        assert_eq!(recorded[1], Call::Press);
        assert_eq!(
            recorded[2],
            Call::MoveTo {
                x: 420.0,
                y: 200.0,
                millis: 200
            }
        );
        assert_eq!(recorded[3], Call::Release);
    }

    #[tokio::test]
    async fn swipe_shorter_than_lead_in_saturates() {
        let (actuator, calls) = build_actuator(None, false);
        actuator
            .swipe(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Duration::from_millis(50),
            )
            .await
            .unwrap();

        let recorded = calls.lock().unwrap();
        // 드래그 시간은 음수가 될 수 없음
        assert_eq!(
            recorded[2],
            Call::MoveTo {
                x: 10.0,
                y: 0.0,
                millis: 0
            }
        );
    }

    #[tokio::test]
    async fn hold_and_release_skip_conversion() {
        let (actuator, calls) = build_actuator(Some(ultrawide()), false);
        actuator.hold().await.unwrap();
        actuator.release().await.unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.as_slice(), &[Call::Press, Call::Release]);
    }

    #[tokio::test]
    async fn driver_failure_propagates_unchanged() {
        let (actuator, _) = build_actuator(None, true);
        let err = actuator
            .move_to(Point::new(0.0, 0.0), Duration::ZERO)
            .await
            .unwrap_err();
        assert_matches::assert_matches!(err, CoreError::Input(_));
    }

    #[tokio::test]
    async fn tap_uses_configured_timings() {
        let (actuator, calls) = build_actuator(None, false);
        actuator.tap(Point::new(1.0, 2.0)).await.unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 3);
        assert_eq!(
            recorded[0],
            Call::MoveTo {
                x: 1.0,
                y: 2.0,
                millis: 225
            }
        );
    }
}
