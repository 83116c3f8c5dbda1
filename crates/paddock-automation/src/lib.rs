//! # paddock-automation
//!
//! 입력 액추에이터 크레이트.
//! 스크린 공간 좌표를 월드 공간으로 정규화한 뒤 플랫폼 입력
//! 드라이버로 포인터 동작(이동/클릭/홀드/스와이프)을 내보낸다.

pub mod actuator;
pub mod input_driver;
