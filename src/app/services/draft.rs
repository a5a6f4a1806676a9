use crate::{log_map_err, Config, FormDraft, FormSurface, KeyValueService};
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Persists the in-progress values of a form across restarts, one
/// key-value entry per form.
pub struct DraftService {
    config: Arc<Config>,
    key_value_service: Arc<KeyValueService>,
}

impl DraftService {
    pub fn new(config: Arc<Config>, key_value_service: Arc<KeyValueService>) -> Self {
        Self {
            config,
            key_value_service,
        }
    }

    pub fn draft_key(&self, form_id: &str) -> String {
        let mut key = self.config.form.draft_key_prefix.clone();
        key.push_str(form_id);
        key
    }

    /// Writes the current name→value mapping of the form. Secret fields are
    /// left out.
    pub fn save(&self, form: &FormSurface) -> Result<(), DraftServiceError> {
        let draft = FormDraft::from_fields(&form.fields);
        let payload = serde_json::to_string(&draft).map_err(log_map_err!(
            DraftServiceError::SerializeFail,
            "DraftService::save"
        ))?;
        self.key_value_service
            .set(&self.draft_key(&form.id), &payload)
            .map_err(log_map_err!(
                DraftServiceError::KeyValueFail,
                "DraftService::save"
            ))?;
        Ok(())
    }

    /// Fills matching fields from a stored draft. Empty stored values are
    /// skipped; a payload that fails to parse counts as no draft.
    pub fn restore(&self, form: &mut FormSurface) -> Result<bool, DraftServiceError> {
        let key = self.draft_key(&form.id);
        let payload = self.key_value_service.get(&key).map_err(log_map_err!(
            DraftServiceError::KeyValueFail,
            "DraftService::restore"
        ))?;
        let Some(payload) = payload else {
            return Ok(false);
        };

        let draft: FormDraft = match serde_json::from_str(&payload) {
            Ok(draft) => draft,
            Err(e) => {
                log::error!("DraftService::restore - {e}");
                return Ok(false);
            }
        };

        for field in form.fields.iter_mut() {
            if let Some(value) = draft.get(&field.name) {
                if !value.is_empty() {
                    field.value = value.to_string();
                }
            }
        }
        Ok(true)
    }

    pub fn delete(&self, key: &str) -> Result<(), DraftServiceError> {
        self.key_value_service.del(key).map_err(log_map_err!(
            DraftServiceError::KeyValueFail,
            "DraftService::delete"
        ))
    }
}

#[derive(Debug, Clone, Copy, Display, EnumString)]
pub enum DraftServiceError {
    KeyValueFail,
    SerializeFail,
}
