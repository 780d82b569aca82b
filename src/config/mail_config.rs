//! 메일 발송 설정
//!
//! SMTP 서버 접속 정보와 발신 주소를 환경 변수에서 읽습니다.
//!
//! ```bash
//! export MAIL_ENABLED="true"
//! export SMTP_HOST="smtp.126.com"
//! export SMTP_PORT="587"
//! export SMTP_USERNAME="ityouknow@126.com"
//! export SMTP_PASSWORD="app-password"
//! export MAIL_FROM="ityouknow@126.com"
//! ```

use std::env;

/// SMTP 메일 설정
pub struct MailConfig;

impl MailConfig {
    /// 메일 발송 활성화 여부. 기본값: false
    pub fn enabled() -> bool {
        env::var("MAIL_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false)
    }

    /// SMTP 호스트. 기본값: "localhost"
    pub fn smtp_host() -> String {
        env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string())
    }

    /// SMTP 포트. 기본값: 587 (STARTTLS)
    pub fn smtp_port() -> u16 {
        env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587)
    }

    /// SMTP 인증 계정 (없으면 인증 없이 접속)
    pub fn smtp_username() -> Option<String> {
        env::var("SMTP_USERNAME").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn smtp_password() -> Option<String> {
        env::var("SMTP_PASSWORD").ok()
    }

    /// 발신자 주소
    pub fn from_address() -> String {
        env::var("MAIL_FROM").unwrap_or_else(|_| "noreply@localhost".to_string())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_smtp_port_default() {
        if env::var("SMTP_PORT").is_err() {
            assert_eq!(MailConfig::smtp_port(), 587);
        }
    }
}
