use std::time::Duration;

/// Warning logged when the geocoding host cannot be reached.
pub const CONNECTION_WARNING: &str = "Geocoding API connection cannot be established.";

/// What a single fetch produced.
///
/// Network failures that a lookup tolerates are values here rather than
/// errors, so the caller decides how to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The service answered with this body.
    Payload(String),
    /// The query was blank and no request was made.
    Blank,
    /// The host could not be reached.
    ConnectionFailed {
        /// Request URL.
        url: String,
        /// Transport description of the failure.
        message: String,
    },
    /// The service did not answer within the configured timeout.
    TimedOut {
        /// Request URL.
        url: String,
        /// Timeout in force for the request.
        timeout: Duration,
    },
}

impl FetchOutcome {
    /// The warning to log for this outcome, if any.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::ConnectionFailed { .. } => Some(CONNECTION_WARNING.to_owned()),
            Self::TimedOut { timeout, .. } => Some(format!(
                "Geocoding API not responding fast enough \
                 (see LookupConfig::timeout to set limit, currently {}s).",
                timeout.as_secs_f64()
            )),
            Self::Payload(_) | Self::Blank => None,
        }
    }

    /// Whether the service answered.
    #[must_use]
    pub const fn has_payload(&self) -> bool {
        matches!(self, Self::Payload(_))
    }
}
