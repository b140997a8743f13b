//! # Configuration Module
//!
//! 세션 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 저장소 연결, 패스워드 해싱 설정
//! - [`auth_config`] - 토큰 비밀키, 토큰 수명, 쿠키 보안 정책
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export ACCESS_TOKEN_SECRET="..."
//! export REFRESH_TOKEN_SECRET="..."
//!
//! # 저장소
//! export MONGO_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="session_auth"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ENVIRONMENT="production"   # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
