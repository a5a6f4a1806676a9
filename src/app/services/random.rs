use rand::distr::{Alphanumeric, SampleString};

#[derive(Debug, Clone)]
pub struct RandomService {}

impl RandomService {
    pub fn new() -> Self {
        Self {}
    }

    pub fn str(&self, length: usize) -> String {
        let mut rng = rand::rng();
        Alphanumeric.sample_string(&mut rng, length)
    }

    /// Identifier for a surface constructed without an explicit id. Stable
    /// only for the lifetime of the process.
    pub fn form_id(&self, length: usize) -> String {
        self.str(length).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str() {
        let str: String = RandomService::new().str(9);
        assert_eq!(9, str.len());
    }

    #[test]
    fn form_id() {
        let id: String = RandomService::new().form_id(9);
        assert_eq!(9, id.len());
        assert_eq!(id.to_lowercase(), id);
    }
}
