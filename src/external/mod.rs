pub mod crawler;
pub mod directions;
pub mod kakao_local;
