use crate::TranslatorService;
use std::collections::HashMap;

pub struct Required;

impl Required {
    pub fn apply(value: &str) -> bool {
        !value.trim().is_empty()
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
            v.push(translator_service.variables(lang, "validation.required", &vars));
        }
        v
    }
}
