use serde::Serialize;
use serde_json::{Map, Value};

/// Accepted body keys per field, in lookup order. Short keys come before form labels.
pub const BUSINESS_SUGGESTION_ALIASES: &[&str] = &[
  "businessSuggestion",
  "sugestiiBusiness",
  "Business suggestion (box 1)",
  "Sugestii business (casuta 1)",
];
pub const OTHER_SUGGESTIONS_ALIASES: &[&str] = &[
  "otherSuggestions",
  "alteSugestii",
  "Other suggestions (box 2)",
  "Alte sugestii (casuta 2)",
];
pub const CODE_ALIASES: &[&str] = &["code", "cod", "6-digit code", "Cod 6 cifre"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSubmission {
  pub business_suggestion: String,
  pub other_suggestions: String,
  pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
  pub ok: bool,
}

impl FeedbackSubmission {
  pub fn new(business_suggestion: &str, other_suggestions: &str, code: &str) -> Self {
    Self {
      business_suggestion: business_suggestion.trim().to_string(),
      other_suggestions: other_suggestions.trim().to_string(),
      code: code.trim().to_string(),
    }
  }

  /// Parses a request body. Anything that is not a JSON object counts as an empty submission.
  pub fn from_body(body: &[u8]) -> Self {
    if body.is_empty() {
      return Self::default();
    }

    match serde_json::from_slice::<Value>(body) {
      Ok(Value::Object(fields)) => Self::from_fields(&fields),
      Ok(_) => {
        tracing::debug!("Feedback body is not a JSON object, treating it as empty");
        Self::default()
      }
      Err(e) => {
        tracing::debug!("Feedback body is not valid JSON, treating it as empty: {}", e);
        Self::default()
      }
    }
  }

  pub fn from_fields(fields: &Map<String, Value>) -> Self {
    Self::new(
      &resolve_field(fields, BUSINESS_SUGGESTION_ALIASES),
      &resolve_field(fields, OTHER_SUGGESTIONS_ALIASES),
      &resolve_field(fields, CODE_ALIASES),
    )
  }

  /// Both suggestion boxes empty and a code present.
  pub fn is_code_only(&self) -> bool {
    self.business_suggestion.is_empty() && self.other_suggestions.is_empty() && !self.code.is_empty()
  }
}

/// Returns the value of the first alias holding a non-empty string or a number.
pub fn resolve_field(fields: &Map<String, Value>, aliases: &[&str]) -> String {
  aliases
    .iter()
    .find_map(|alias| match fields.get(*alias) {
      Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
      Some(Value::Number(value)) => Some(value.to_string()),
      _ => None,
    })
    .unwrap_or_default()
}
