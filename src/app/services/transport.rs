use crate::{log_map_err, AppError};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};
use url::Url;

/// Delivers a submitted record to the externally owned endpoint.
pub trait Transport: Send + Sync {
    fn send(&self, record: &Map<String, Value>) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, Copy, Display, EnumString)]
pub enum TransportError {
    SendFail,
}

/// POSTs the record as JSON to a fixed endpoint. Any non-acceptance status
/// surfaces as an error, same as a connect failure.
pub struct HttpTransport {
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, AppError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            log::error!("HttpTransport::new - {e}");
            AppError::from_err(e)
        })?;
        Ok(Self { endpoint })
    }
}

impl Transport for HttpTransport {
    fn send(&self, record: &Map<String, Value>) -> Result<(), TransportError> {
        let response = ureq::post(self.endpoint.as_str())
            .send_json(record)
            .map_err(log_map_err!(TransportError::SendFail, "HttpTransport::send"))?;
        log::info!("HttpTransport::send - delivered, status {}", response.status());
        Ok(())
    }
}
