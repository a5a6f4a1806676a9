use crate::TranslatorService;
use std::collections::HashMap;

pub struct Email;

impl Email {
    /// `local@domain.tld`: exactly one `@`, no whitespace anywhere, a
    /// non-empty local part and a domain with an interior dot.
    pub fn apply(value: &str) -> bool {
        if value.contains(char::is_whitespace) {
            return false;
        }
        let mut parts = value.splitn(3, '@');
        let local = parts.next().unwrap_or("");
        let domain = match parts.next() {
            Some(domain) => domain,
            None => return false,
        };
        if parts.next().is_some() || local.is_empty() || domain.is_empty() {
            return false;
        }
        let bytes = domain.as_bytes();
        bytes
            .iter()
            .enumerate()
            .any(|(i, b)| *b == b'.' && i > 0 && i + 1 < bytes.len())
    }

    pub fn validate(
        translator_service: &TranslatorService,
        lang: &str,
        value: &str,
        attribute_name: &str,
    ) -> Vec<String> {
        let mut v: Vec<String> = Vec::new();
        if !Self::apply(value) {
            let mut vars = HashMap::new();
            vars.insert("attribute", attribute_name);
            v.push(translator_service.variables(lang, "validation.email", &vars));
        }
        v
    }
}
