use crate::{AppError, KeyValueAdapter};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the embedded store, for tests and as a fallback
/// when the on-disk store cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryKeyValueAdapter {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueAdapter for MemoryKeyValueAdapter {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let values = self.values.lock().map_err(|e| {
            log::error!("MemoryKeyValueAdapter::get - {e}");
            AppError::from_err(e)
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.values.lock().map_err(|e| {
            log::error!("MemoryKeyValueAdapter::set - {e}");
            AppError::from_err(e)
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn del(&self, key: &str) -> Result<(), AppError> {
        let mut values = self.values.lock().map_err(|e| {
            log::error!("MemoryKeyValueAdapter::del - {e}");
            AppError::from_err(e)
        })?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_del() {
        let adapter = MemoryKeyValueAdapter::new();
        assert_eq!(None, adapter.get("test_key").unwrap());
        adapter.set("test_key", "test_value").unwrap();
        assert_eq!(Some("test_value".to_string()), adapter.get("test_key").unwrap());
        adapter.set("test_key", "test_value2").unwrap();
        assert_eq!(Some("test_value2".to_string()), adapter.get("test_key").unwrap());
        adapter.del("test_key").unwrap();
        assert_eq!(None, adapter.get("test_key").unwrap());
        // Deleting a missing key is a no-op.
        adapter.del("test_key").unwrap();
    }
}
