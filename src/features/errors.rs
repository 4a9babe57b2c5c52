use serde::Serialize;
use std::collections::BTreeMap;

/// Key for errors that belong to the request body as a whole.
pub const NON_FIELD: &str = "non_field_errors";

/// Field name → rejection messages, for a request body that did not
/// produce a valid [`super::FeatureVector`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, messages: Vec<String>) {
        self.0.entry(field).or_default().extend(messages);
    }
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// error that is not attributable to a single field
    pub fn body(message: String) -> Self {
        let mut errors = Self::default();
        errors.insert(NON_FIELD, vec![message]);
        errors
    }
}

impl From<serde_json::Error> for FieldErrors {
    fn from(e: serde_json::Error) -> Self {
        Self::body(format!("JSON parse error - {}", e))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ref joined = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid input data ({})", joined)
    }
}

impl std::error::Error for FieldErrors {}
