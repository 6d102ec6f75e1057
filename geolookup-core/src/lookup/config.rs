use std::time::Duration;

/// Default time allowed for a geocoding request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Settings shared by every request a [`crate::Lookup`] makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupConfig {
    /// Time allowed for each request before it is abandoned.
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LookupConfig {
    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
