#![allow(dead_code)]
use crate::{AppError, KeyValueAdapter};
use kv::{Bucket, Config, Raw, Store};

pub struct KVKeyValueAdapter {
    store: Store,
    bucket: Bucket<'static, Raw, Raw>,
}

impl KVKeyValueAdapter {
    pub fn new(storage: &str) -> Result<Self, AppError> {
        let store = Store::new(Config::new(storage)).map_err(|e| {
            log::error!("KVKeyValueAdapter::new - {e}");
            AppError::from_err(e)
        })?;
        let bucket = store.bucket::<Raw, Raw>(Some("forms")).map_err(|e| {
            log::error!("KVKeyValueAdapter::new - {e}");
            AppError::from_err(e)
        })?;
        Ok(Self { store, bucket })
    }

    pub fn contains(&self, key: &str) -> Result<bool, AppError> {
        let key = Raw::from(key.as_bytes());
        self.bucket.contains(&key).map_err(|e| {
            log::error!("KVKeyValueAdapter::contains - {e}");
            AppError::from_err(e)
        })
    }
}

impl KeyValueAdapter for KVKeyValueAdapter {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let key = Raw::from(key.as_bytes());
        let value = self.bucket.get(&key).map_err(|e| {
            log::error!("KVKeyValueAdapter::get - {e}");
            AppError::from_err(e)
        })?;
        match value {
            Some(raw) => {
                let value = String::from_utf8(raw.to_vec()).map_err(|e| {
                    log::error!("KVKeyValueAdapter::get - {e}");
                    AppError::from_err(e)
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let key = Raw::from(key.as_bytes());
        let value = Raw::from(value.as_bytes());
        self.bucket.set(&key, &value).map_err(|e| {
            log::error!("KVKeyValueAdapter::set - {e}");
            AppError::from_err(e)
        })?;
        Ok(())
    }

    fn del(&self, key: &str) -> Result<(), AppError> {
        let key = Raw::from(key.as_bytes());
        self.bucket.remove(&key).map_err(|e| {
            log::error!("KVKeyValueAdapter::del - {e}");
            AppError::from_err(e)
        })?;
        Ok(())
    }
}
