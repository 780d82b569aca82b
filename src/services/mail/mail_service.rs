//! # 메일 발송 서비스
//!
//! 텍스트, HTML, 첨부 파일, 인라인 리소스 네 가지 형태의 메일을 조립해
//! [`MailSender`]로 전송합니다.
//!
//! 모든 연산은 같은 규칙을 따릅니다.
//!
//! - 빈 입력값은 에러 로그를 남기고 전송하지 않음 ([`MailError::MissingField`])
//! - 존재하지 않는 파일은 에러 로그를 남기고 전송하지 않음 ([`MailError::ResourceNotFound`])
//! - 주소/메시지/전송 오류는 로그를 남긴 뒤 호출자에게 반환
//!
//! ```rust,ignore
//! let mail = MailService::new(Arc::new(SmtpMailSender::from_config()?), MailConfig::from_address());
//!
//! mail.send_inline_resource_mail(
//!     "ityouknow@126.com",
//!     "주제：这是有图片的邮件",
//!     "<html><body><img src=\"cid:neo006\"></body></html>",
//!     "/tmp/logo.png",
//!     "neo006",
//! ).await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use lettre::{
    Message,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
};
use log::{error, info};

use super::mail_sender::{MailError, MailSender};

const OCTET_STREAM: &str = "application/octet-stream";

/// 가입 환영 메일 본문. 닉네임은 HTML 이스케이프되어 들어갑니다.
#[derive(Template)]
#[template(path = "email/welcome.html")]
struct WelcomeMailHtml<'a> {
    nick_name: &'a str,
}

/// 메일 발송 서비스
#[derive(Clone)]
pub struct MailService {
    sender: Arc<dyn MailSender>,
    from_address: String,
}

impl MailService {
    pub fn new(sender: Arc<dyn MailSender>, from_address: impl Into<String>) -> Self {
        Self {
            sender,
            from_address: from_address.into(),
        }
    }

    /// 텍스트 메일 발송
    pub async fn send_simple_mail(&self, to: &str, subject: &str, content: &str) -> Result<(), MailError> {
        if let Err(e) = require_inputs(&[("to", to), ("subject", subject), ("content", content)]) {
            error!("텍스트 메일 입력값 누락: to={}, subject={}, {}", to, subject, e);
            return Err(e);
        }

        let message = self.builder(to, subject)
            .and_then(|b| Ok(b.header(ContentType::TEXT_PLAIN).body(content.to_string())?));

        self.dispatch(message, "텍스트 메일", to).await
    }

    /// HTML 메일 발송
    pub async fn send_html_mail(&self, to: &str, subject: &str, content: &str) -> Result<(), MailError> {
        if let Err(e) = require_inputs(&[("to", to), ("subject", subject), ("content", content)]) {
            error!("HTML 메일 입력값 누락: to={}, subject={}, {}", to, subject, e);
            return Err(e);
        }

        let message = self.builder(to, subject)
            .and_then(|b| Ok(b.singlepart(SinglePart::html(content.to_string()))?));

        self.dispatch(message, "HTML 메일", to).await
    }

    /// HTML 본문에 파일 하나를 첨부해 발송합니다. 첨부 이름은 파일 이름입니다.
    pub async fn send_attachments_mail(
        &self,
        to: &str,
        subject: &str,
        content: &str,
        file_path: &str,
    ) -> Result<(), MailError> {
        if let Err(e) = require_inputs(&[
            ("to", to),
            ("subject", subject),
            ("content", content),
            ("file_path", file_path),
        ]) {
            error!("첨부 메일 입력값 누락: to={}, subject={}, {}", to, subject, e);
            return Err(e);
        }

        let path = Path::new(file_path);
        let bytes = read_resource(path).inspect_err(|e| {
            error!("첨부 파일 확인 실패: file_path={}, {}", file_path, e);
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.to_string());

        let message = self.builder(to, subject).and_then(|b| {
            let attachment = Attachment::new(file_name).body(bytes, content_type_for(path)?);
            Ok(b.multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(content.to_string()))
                    .singlepart(attachment),
            )?)
        });

        self.dispatch(message, "첨부 메일", to).await
    }

    /// 본문에서 `cid:<resource_id>`로 참조하는 인라인 리소스를 포함해 발송합니다.
    pub async fn send_inline_resource_mail(
        &self,
        to: &str,
        subject: &str,
        content: &str,
        resource_path: &str,
        resource_id: &str,
    ) -> Result<(), MailError> {
        if let Err(e) = require_inputs(&[
            ("to", to),
            ("subject", subject),
            ("content", content),
            ("resource_path", resource_path),
            ("resource_id", resource_id),
        ]) {
            error!("인라인 리소스 메일 입력값 누락: to={}, subject={}, {}", to, subject, e);
            return Err(e);
        }

        let path = Path::new(resource_path);
        let bytes = read_resource(path).inspect_err(|e| {
            error!("인라인 리소스 확인 실패: resource_path={}, {}", resource_path, e);
        })?;

        let message = self.builder(to, subject).and_then(|b| {
            let inline = Attachment::new_inline(resource_id.to_string())
                .body(bytes, content_type_for(path)?);
            Ok(b.multipart(
                MultiPart::related()
                    .singlepart(SinglePart::html(content.to_string()))
                    .singlepart(inline),
            )?)
        });

        self.dispatch(message, "인라인 리소스 메일", to).await
    }

    /// 가입 환영 메일
    pub async fn send_welcome_mail(&self, to: &str, nick_name: &str) -> Result<(), MailError> {
        let content = WelcomeMailHtml { nick_name }.render().inspect_err(|e| {
            error!("환영 메일 렌더링 실패: to={}, {}", to, e);
        })?;
        self.send_html_mail(to, "Welcome to neo", &content).await
    }

    fn builder(&self, to: &str, subject: &str) -> Result<lettre::message::MessageBuilder, MailError> {
        let from: Mailbox = self.from_address
            .parse()
            .map_err(|_| MailError::InvalidAddress(self.from_address.clone()))?;
        let to: Mailbox = to
            .parse()
            .map_err(|_| MailError::InvalidAddress(to.to_string()))?;

        Ok(Message::builder().from(from).to(to).subject(subject))
    }

    async fn dispatch(&self, message: Result<Message, MailError>, kind: &str, to: &str) -> Result<(), MailError> {
        let message = message.inspect_err(|e| {
            error!("{} 생성 실패: to={}, {}", kind, to, e);
        })?;

        match self.sender.send(message).await {
            Ok(()) => {
                info!("{} 발송 완료: to={}", kind, to);
                Ok(())
            }
            Err(e) => {
                error!("{} 발송 실패: to={}, {}", kind, to, e);
                Err(e)
            }
        }
    }
}

/// 비어 있는 첫 번째 입력값을 보고합니다.
fn require_inputs(inputs: &[(&'static str, &str)]) -> Result<(), MailError> {
    match inputs.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(MailError::MissingField(*name)),
        None => Ok(()),
    }
}

fn read_resource(path: &Path) -> Result<Vec<u8>, MailError> {
    if !path.is_file() {
        return Err(MailError::ResourceNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

fn content_type_for(path: &Path) -> Result<ContentType, MailError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" | "log" => "text/plain",
        "pdf" => "application/pdf",
        _ => OCTET_STREAM,
    };

    ContentType::parse(mime).map_err(|_| MailError::InvalidContentType(mime.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<Message>>,
    }

    impl RecordingSender {
        fn formatted(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|m| String::from_utf8_lossy(&m.formatted()).into_owned())
                .collect()
        }
    }

    #[async_trait]
    impl MailSender for RecordingSender {
        async fn send(&self, message: Message) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    fn service() -> (MailService, Arc<RecordingSender>) {
        let sender = Arc::new(RecordingSender::default());
        let service = MailService::new(sender.clone(), "noreply@neo.com");
        (service, sender)
    }

    fn temp_file(name: &str, contents: &[u8]) -> String {
        let path = std::env::temp_dir().join(format!("neo_backend_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[actix_web::test]
    async fn test_simple_mail_is_sent() {
        let (service, sender) = service();

        service
            .send_simple_mail("ityouknow@126.com", "test simple mail", "hello this is simple mail")
            .await
            .unwrap();

        let sent = sender.formatted();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("To: ityouknow@126.com"));
        assert!(sent[0].contains("From: noreply@neo.com"));
        assert!(sent[0].contains("test simple mail"));
        assert!(sent[0].contains("hello this is simple mail"));
    }

    #[actix_web::test]
    async fn test_empty_input_skips_send() {
        let (service, sender) = service();

        let err = service.send_html_mail("", "subject", "<p>hi</p>").await.unwrap_err();
        assert!(matches!(err, MailError::MissingField("to")));

        let err = service.send_simple_mail("a@b.com", "subject", "  ").await.unwrap_err();
        assert!(matches!(err, MailError::MissingField("content")));

        assert!(sender.formatted().is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_recipient_is_reported() {
        let (service, sender) = service();

        let err = service.send_simple_mail("not-an-address", "s", "c").await.unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
        assert!(sender.formatted().is_empty());
    }

    #[actix_web::test]
    async fn test_attachment_uses_file_name() {
        let (service, sender) = service();
        let path = temp_file("report.txt", b"attached contents");

        service
            .send_attachments_mail("ityouknow@126.com", "with attachment", "<p>see file</p>", &path)
            .await
            .unwrap();

        let sent = sender.formatted();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("multipart/mixed"));
        assert!(sent[0].contains("report.txt"));

        std::fs::remove_file(path).ok();
    }

    #[actix_web::test]
    async fn test_missing_attachment_skips_send() {
        let (service, sender) = service();
        let missing = std::env::temp_dir().join("neo_backend_does_not_exist.bin");

        let err = service
            .send_attachments_mail("a@b.com", "s", "<p>c</p>", &missing.to_string_lossy())
            .await
            .unwrap_err();

        assert!(matches!(err, MailError::ResourceNotFound(_)));
        assert!(sender.formatted().is_empty());
    }

    #[actix_web::test]
    async fn test_directory_is_not_a_resource() {
        let (service, sender) = service();
        let dir = std::env::temp_dir();

        let err = service
            .send_inline_resource_mail("a@b.com", "s", "<img src=\"cid:x\">", &dir.to_string_lossy(), "x")
            .await
            .unwrap_err();

        assert!(matches!(err, MailError::ResourceNotFound(_)));
        assert!(sender.formatted().is_empty());
    }

    #[actix_web::test]
    async fn test_inline_resource_is_related_part() {
        let (service, sender) = service();
        let path = temp_file("logo.png", &[0x89, b'P', b'N', b'G']);

        service
            .send_inline_resource_mail(
                "ityouknow@126.com",
                "inline image",
                "<html><body><img src=\"cid:neo006\"></body></html>",
                &path,
                "neo006",
            )
            .await
            .unwrap();

        let sent = sender.formatted();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("multipart/related"));
        assert!(sent[0].contains("<neo006>"));
        assert!(sent[0].contains("image/png"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_welcome_body_escapes_nick_name() {
        let body = WelcomeMailHtml { nick_name: "<a href=\"http://evil\">click</a>" }
            .render()
            .unwrap();

        assert!(!body.contains("<a href="));
        assert!(body.contains("&lt;a href="));
        assert!(body.contains("가입을 환영합니다"));
    }

    #[actix_web::test]
    async fn test_welcome_mail_is_html() {
        let (service, sender) = service();

        service
            .send_welcome_mail("ityouknow@126.com", "<b>neo</b>")
            .await
            .unwrap();

        let sent = sender.formatted();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("text/html"));
        assert!(sent[0].contains("Welcome to neo"));
        assert!(!sent[0].contains("<b>neo</b>"));
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("a.JPG")).unwrap(), ContentType::parse("image/jpeg").unwrap());
        assert_eq!(content_type_for(Path::new("noext")).unwrap(), ContentType::parse(OCTET_STREAM).unwrap());
    }
}
