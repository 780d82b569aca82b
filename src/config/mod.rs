//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 캐시, 서버, 환경 관련 설정
//! - [`mail_config`] - SMTP 메일 발송 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="neo_dev"
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_TTL_SECONDS="600"
//!
//! # 환경 / 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${mail.fromMail.addr}")` | `MailConfig::from_address()` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.properties` | `.env` 파일 |

pub mod data_config;
pub mod mail_config;

pub use data_config::*;
pub use mail_config::*;
