use crate::{AppError, KeyValueAdapter};
use std::sync::Arc;

pub struct KeyValueService {
    adapter: Arc<dyn KeyValueAdapter>,
}

impl KeyValueService {
    pub fn new(adapter: Arc<dyn KeyValueAdapter>) -> Self {
        Self { adapter }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.adapter.get(key)
    }
    pub fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.adapter.set(key, value)
    }
    pub fn del(&self, key: &str) -> Result<(), AppError> {
        self.adapter.del(key)
    }
}
