//! 메일 전송 추상화
//!
//! 메시지 조립은 [`MailService`](super::MailService)가, 실제 전송은
//! [`MailSender`] 구현체가 담당합니다. 운영 환경은 SMTP를 사용합니다.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use log::info;
use thiserror::Error;

use crate::config::MailConfig;

/// 메일 발송 중 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum MailError {
    /// 필수 입력값이 없거나 비어 있음
    #[error("메일 필수 항목 누락: {0}")]
    MissingField(&'static str),

    /// 첨부/인라인 파일이 없거나 일반 파일이 아님
    #[error("리소스 파일을 찾을 수 없습니다: {0}")]
    ResourceNotFound(String),

    #[error("잘못된 메일 주소: {0}")]
    InvalidAddress(String),

    #[error("잘못된 Content-Type: {0}")]
    InvalidContentType(String),

    #[error("메시지 생성 실패: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("리소스 파일 읽기 실패: {0}")]
    Io(#[from] std::io::Error),

    #[error("SMTP 전송 실패: {0}")]
    Transport(#[from] SmtpError),

    #[error("메일 템플릿 렌더링 실패: {0}")]
    Template(#[from] askama::Error),
}

/// 완성된 메시지를 전송하는 트랜스포트
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), MailError>;
}

/// lettre 비동기 SMTP 트랜스포트
#[derive(Clone)]
pub struct SmtpMailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailSender {
    /// [`MailConfig`]로 STARTTLS 릴레이를 구성합니다.
    ///
    /// 계정이 설정되지 않은 경우 인증 없이 접속합니다.
    pub fn from_config() -> Result<Self, MailError> {
        let host = MailConfig::smtp_host();
        let port = MailConfig::smtp_port();

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)?
            .port(port);

        if let Some(username) = MailConfig::smtp_username() {
            let password = MailConfig::smtp_password().unwrap_or_default();
            builder = builder.credentials(Credentials::new(username, password));
        }

        info!("📮 SMTP 트랜스포트 구성: {}:{}", host, port);

        Ok(Self { mailer: builder.build() })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, message: Message) -> Result<(), MailError> {
        self.mailer.send(message).await?;
        Ok(())
    }
}
