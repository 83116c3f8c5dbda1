//! # paddock-core
//!
//! Paddock 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 좌표 변환 로직을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`mapper`] — 월드 좌표 ↔ 1920×1080 기준 좌표 변환
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)
//! - [`json_store`] — 웹 UI가 편집하는 봇 설정 문서 저장소

pub mod config;
pub mod config_manager;
pub mod error;
pub mod json_store;
pub mod mapper;
pub mod models;
pub mod ports;
