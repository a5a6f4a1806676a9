pub mod app;
pub mod config;
pub mod errors;
pub mod helpers;

pub use crate::app::adapters::key_value::*;
pub use crate::app::dto::*;
pub use crate::app::services::*;
pub use crate::config::*;
pub use crate::errors::*;
