use crate::Field;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted in-progress values of one form, stored as a flat JSON object
/// `name -> value`. Secret fields are never included.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormDraft {
    pub values: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut values = BTreeMap::new();
        for field in fields {
            if !field.is_secret() {
                values.insert(field.name.clone(), field.value.clone());
            }
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&String> {
        self.values.get(name)
    }
}
