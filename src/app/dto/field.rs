use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Kind tag of an input-like descriptor. `Password` values never reach a
/// draft; a honeypot field is described as `Hidden`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
    Password,
    Hidden,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub max_length: Option<usize>,
    pub errors: Vec<String>,
    pub invalid: bool,
}

impl Field {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: String::new(),
            required: false,
            max_length: None,
            errors: Vec::new(),
            invalid: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_secret(&self) -> bool {
        self.kind == FieldKind::Password
    }

    // Replaces the previous annotation wholesale, so at most one annotation
    // set exists per field.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.invalid = !errors.is_empty();
        self.errors = errors;
    }

    // Idempotent: clearing an already clean field is a no-op.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.invalid = false;
    }

    /// Character counter for fields with a max length, `"<current>/<max>"`.
    pub fn char_counter(&self) -> Option<String> {
        let max = self.max_length?;
        Some(format!("{}/{}", self.value.chars().count(), max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors() {
        let mut field = Field::new("email", FieldKind::Email).required();
        assert_eq!(false, field.invalid);
        field.set_errors(vec!["first".to_string()]);
        assert_eq!(true, field.invalid);
        field.set_errors(vec!["second".to_string()]);
        assert_eq!(vec!["second".to_string()], field.errors);
        field.clear_errors();
        field.clear_errors();
        assert_eq!(false, field.invalid);
        assert_eq!(0, field.errors.len());
    }

    #[test]
    fn char_counter() {
        let mut field = Field::new("message", FieldKind::Multiline).max_length(10);
        field.value = "汤ДАЙ".to_string();
        assert_eq!(Some("4/10".to_string()), field.char_counter());
        assert_eq!(None, Field::new("name", FieldKind::Text).char_counter());
    }
}
