use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone)]
pub struct AppError(pub Option<String>);

impl AppError {
    pub fn from_err<E: fmt::Display>(error: E) -> Self {
        Self(Some(error.to_string()))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(ref err) = self.0 {
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
