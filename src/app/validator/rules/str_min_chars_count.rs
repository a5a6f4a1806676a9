use crate::TranslatorService;
use std::collections::HashMap;

pub struct StrMinCharsCount;

impl StrMinCharsCount {
    pub fn apply(value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    pub fn validate(
        translator_service: &TranslatorService,
        lang: &str,
        value: &str,
        min: usize,
        attribute_name: &str,
    ) -> Vec<String> {
        let mut v: Vec<String> = Vec::new();
        if !Self::apply(value, min) {
            let m = min.to_string();
            let mut vars = HashMap::new();
            vars.insert("attribute", attribute_name);
            vars.insert("min", m.as_str());
            v.push(translator_service.variables(lang, "validation.min.string", &vars));
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply() {
        assert_eq!(false, StrMinCharsCount::apply("123456789", 10));
        assert_eq!(true, StrMinCharsCount::apply("1234567890", 10));

        // Counted as chars, not bytes.
        let s = "汤ДАЙЁ_35Yu";
        assert_eq!(10, s.chars().count());
        assert_ne!(10, s.len());
        assert_eq!(true, StrMinCharsCount::apply(s, 10));
    }
}
