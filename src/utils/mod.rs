//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 선택 문자열 필드 판정
//! - [`time_utils`] - BSON/chrono 시간 변환

pub mod string_utils;
pub mod time_utils;
