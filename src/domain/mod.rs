//! Domain layer
//! 클라우드 환경 값 객체와 이름 해석 규칙.

pub mod cloud;
pub mod environment;
