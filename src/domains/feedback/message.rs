use super::model::FeedbackSubmission;
use crate::utils::escape_html;

pub const SUBJECT_CODE_ONLY: &str = "Sugestii client – Cod 6 cifre (MailSender)";
pub const SUBJECT_SUGGESTIONS: &str = "Sugestii client – Sugestii (MailSender)";
pub const EMPTY_PLACEHOLDER: &str = "(gol)";

const BUSINESS_SUGGESTION_LABEL: &str = "Sugestii business (casuta 1):";
const OTHER_SUGGESTIONS_LABEL: &str = "Alte sugestii (casuta 2):";
const CODE_LABEL: &str = "Cod 6 cifre:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFeedback {
  pub subject: String,
  pub text_body: String,
  pub html_body: String,
}

/// Renders subject, plain text and HTML for a submission in one pass.
pub fn render(submission: &FeedbackSubmission) -> RenderedFeedback {
  let code_only = submission.is_code_only();
  let sections = [
    (BUSINESS_SUGGESTION_LABEL, submission.business_suggestion.as_str()),
    (OTHER_SUGGESTIONS_LABEL, submission.other_suggestions.as_str()),
    (CODE_LABEL, submission.code.as_str()),
  ];

  let heading = if code_only { "Cod 6 cifre" } else { "Sugestii client" };
  let mut text_lines = Vec::with_capacity(sections.len() * 3);
  let mut html_lines = vec![format!("<h2>{} – MailSender</h2>", heading)];

  for (label, value) in sections {
    if !text_lines.is_empty() {
      text_lines.push(String::new());
    }
    text_lines.push(label.to_string());

    if value.is_empty() {
      text_lines.push(EMPTY_PLACEHOLDER.to_string());
      html_lines.push(format!("<p><strong>{}</strong><br>{}</p>", label, EMPTY_PLACEHOLDER));
    } else {
      text_lines.push(value.to_string());
      html_lines.push(format!("<p><strong>{}</strong><br>{}</p>", label, escape_html(value)));
    }
  }

  let subject = if code_only { SUBJECT_CODE_ONLY } else { SUBJECT_SUGGESTIONS };

  RenderedFeedback {
    subject: subject.to_string(),
    text_body: text_lines.join("\n"),
    html_body: html_lines.join("\n"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_submission_uses_placeholders() {
    let rendered = render(&FeedbackSubmission::default());

    assert_eq!(rendered.subject, SUBJECT_SUGGESTIONS);
    assert_eq!(
      rendered.text_body,
      "Sugestii business (casuta 1):\n(gol)\n\nAlte sugestii (casuta 2):\n(gol)\n\nCod 6 cifre:\n(gol)"
    );
    assert_eq!(rendered.html_body.matches("(gol)").count(), 3);
  }

  #[test]
  fn test_code_only_subject_and_heading() {
    let rendered = render(&FeedbackSubmission::new("", "", "123456"));

    assert_eq!(rendered.subject, SUBJECT_CODE_ONLY);
    assert!(rendered.subject.contains("Cod 6 cifre"));
    assert!(rendered.html_body.starts_with("<h2>Cod 6 cifre – MailSender</h2>"));
    assert!(rendered.text_body.ends_with("Cod 6 cifre:\n123456"));
  }

  #[test]
  fn test_suggestion_subject_even_with_code() {
    let rendered = render(&FeedbackSubmission::new("more parking", "", "123456"));

    assert_eq!(rendered.subject, SUBJECT_SUGGESTIONS);
    assert!(rendered.html_body.starts_with("<h2>Sugestii client – MailSender</h2>"));
  }

  #[test]
  fn test_html_body_escapes_and_text_body_keeps_raw_value() {
    let rendered = render(&FeedbackSubmission::new("<script>x</script>", "a & \"b\"", ""));

    assert!(rendered
      .html_body
      .contains("<p><strong>Sugestii business (casuta 1):</strong><br>&lt;script&gt;x&lt;/script&gt;</p>"));
    assert!(rendered.html_body.contains("a &amp; &quot;b&quot;"));
    assert!(!rendered.html_body.contains("<script>"));
    assert!(rendered.text_body.contains("<script>x</script>"));
    assert!(rendered.text_body.contains("a & \"b\""));
  }

  #[test]
  fn test_html_layout() {
    let rendered = render(&FeedbackSubmission::new("one", "two", "123456"));

    assert_eq!(
      rendered.html_body,
      [
        "<h2>Sugestii client – MailSender</h2>",
        "<p><strong>Sugestii business (casuta 1):</strong><br>one</p>",
        "<p><strong>Alte sugestii (casuta 2):</strong><br>two</p>",
        "<p><strong>Cod 6 cifre:</strong><br>123456</p>",
      ]
      .join("\n")
    );
  }
}
