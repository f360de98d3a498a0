use crate::email::{
  types::{EmailMessage, SmtpConfig, SmtpCredentials},
  Mailer,
};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::MultiPart,
  transport::smtp::{
    authentication::Credentials,
    client::{Tls, TlsParameters},
  },
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub struct EmailService {
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: &SmtpConfig, credentials: &SmtpCredentials) -> Result<Self> {
    let creds = Credentials::new(credentials.username.clone(), credentials.password.clone());

    let transporter = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
      .port(smtp_config.port)
      .tls(Self::tls_for(smtp_config)?)
      .credentials(creds)
      .build();

    Ok(EmailService { transporter })
  }

  /// Plain SMTP for local catchers, implicit TLS when secure, otherwise STARTTLS if the server offers it.
  pub fn tls_for(smtp_config: &SmtpConfig) -> Result<Tls> {
    if smtp_config.is_local_catcher() {
      return Ok(Tls::None);
    }

    let parameters = TlsParameters::new(smtp_config.host.clone())?;
    if smtp_config.secure {
      Ok(Tls::Wrapper(parameters))
    } else {
      Ok(Tls::Opportunistic(parameters))
    }
  }

  pub fn build_message(message: &EmailMessage) -> Result<Message> {
    let email = Message::builder()
      .from(message.from.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .multipart(MultiPart::alternative_plain_html(
        message.text_body.clone(),
        message.html_body.clone(),
      ))?;

    Ok(email)
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send_email(&self, message: &EmailMessage) -> Result<()> {
    let email = Self::build_message(message)?;
    self.transporter.send(email).await?;
    Ok(())
  }
}
