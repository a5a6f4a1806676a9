mod kv;
mod memory;

pub use self::kv::*;
pub use self::memory::*;

use crate::AppError;

/// String-keyed, string-valued store seam. Object safe so the services can
/// hold `Arc<dyn KeyValueAdapter>` and tests can substitute the memory impl.
pub trait KeyValueAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn del(&self, key: &str) -> Result<(), AppError>;
}
