use crate::TranslatorService;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub style: String,
    pub content: String,
}

impl Alert {
    pub fn new(style: String, content: String) -> Self {
        Self { style, content }
    }
    pub fn info(content: String) -> Self {
        Self::new("info".to_string(), content)
    }
    pub fn success(content: String) -> Self {
        Self::new("success".to_string(), content)
    }
    pub fn error(content: String) -> Self {
        Self::new("error".to_string(), content)
    }

    pub fn from_variant(
        translator_service: &TranslatorService,
        lang: &str,
        variant: &AlertVariant,
    ) -> Self {
        match variant {
            AlertVariant::SubmitSuccess => {
                Self::success(translator_service.translate(lang, "form.status.success"))
            }
            AlertVariant::SubmitInvalid => {
                Self::error(translator_service.translate(lang, "form.status.invalid"))
            }
            AlertVariant::SubmitFail => {
                Self::error(translator_service.translate(lang, "form.status.fail"))
            }
            AlertVariant::DraftRestored => {
                Self::info(translator_service.translate(lang, "form.restore.notice"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    SubmitSuccess,
    SubmitInvalid,
    SubmitFail,
    DraftRestored,
}
