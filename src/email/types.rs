pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct SmtpCredentials {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  /// Implicit TLS from the first byte. When off, STARTTLS is used if the server offers it.
  pub secure: bool,
  pub credentials: Option<SmtpCredentials>,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: DEFAULT_SMTP_HOST.to_string(),
      port: DEFAULT_SMTP_PORT,
      secure: false,
      credentials: None,
    }
  }
}

impl SmtpConfig {
  /// Local mail catchers (MailHog, Mailpit) speak plain SMTP.
  pub fn is_local_catcher(&self) -> bool {
    matches!(self.host.as_str(), "localhost" | "127.0.0.1" | "mailhog" | "mailpit")
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub text_body: String,
  pub html_body: String,
}

impl EmailMessage {
  pub fn new(from: String, to: String, subject: String, text_body: String, html_body: String) -> Self {
    EmailMessage {
      from,
      to,
      subject,
      text_body,
      html_body,
    }
  }
}
