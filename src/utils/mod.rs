//! 공용 유틸리티 모듈
//!
//! - [`display_terminal`]: 레지스트리 초기화 진행 상황 출력

pub mod display_terminal;
