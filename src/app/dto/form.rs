use crate::{Alert, Field, TaskHandle};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct SubmitControl {
    pub label: String,
    pub sending_label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn new(label: &str, sending_label: &str) -> Self {
        Self {
            label: label.to_string(),
            sending_label: sending_label.to_string(),
            disabled: false,
        }
    }

    pub fn current_label(&self) -> &str {
        if self.disabled {
            &self.sending_label
        } else {
            &self.label
        }
    }
}

/// The shared status element of one form. `renders` grows on every render;
/// a host scrolls the panel into view when it observes the counter change.
#[derive(Debug, Clone, Default)]
pub struct StatusPanel {
    pub alert: Option<Alert>,
    pub renders: u64,
    pub hide_handle: Option<TaskHandle>,
}

impl StatusPanel {
    pub fn show(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.renders += 1;
    }

    pub fn hide(&mut self) {
        self.alert = None;
        self.hide_handle = None;
    }

    pub fn is_visible(&self) -> bool {
        self.alert.is_some()
    }
}

/// Explicit description of a form-like surface: field descriptors, one
/// submit descriptor, the status panel. Decoupled from any rendering
/// technology.
#[derive(Debug, Clone)]
pub struct FormSurface {
    pub id: String,
    pub fields: Vec<Field>,
    pub submit: SubmitControl,
    pub status: StatusPanel,
    pub restore_notice: Option<Alert>,
}

impl FormSurface {
    pub fn new(id: &str, fields: Vec<Field>, submit: SubmitControl) -> Self {
        Self {
            id: id.to_string(),
            fields,
            submit,
            status: StatusPanel::default(),
            restore_notice: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    pub fn has_invalid_fields(&self) -> bool {
        self.fields.iter().any(|field| field.invalid)
    }

    /// The submission record: every name→value pair except the excluded
    /// (honeypot) field.
    pub fn record(&self, exclude: &str) -> Map<String, Value> {
        let mut record = Map::new();
        for field in &self.fields {
            if field.name != exclude {
                record.insert(field.name.clone(), Value::String(field.value.clone()));
            }
        }
        record
    }

    pub fn reset_values(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.clear();
            field.clear_errors();
        }
    }
}
