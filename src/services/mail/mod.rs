//! 메일 발송 서비스 모듈

pub mod mail_sender;
pub mod mail_service;

pub use mail_sender::{MailError, MailSender, SmtpMailSender};
pub use mail_service::MailService;
