//! Error types emitted by the geolookup CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use geolookup_core::LookupError;
use geolookup_http::{BackendConfigError, TransportBuildError};
use thiserror::Error;

/// Errors emitted by the geolookup CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Both an address and coordinates were supplied.
    #[error("--address cannot be combined with --latitude/--longitude")]
    ConflictingQuery,
    /// The endpoint templates were rejected.
    #[error(transparent)]
    BackendConfig(#[from] BackendConfigError),
    /// Constructing the HTTP transport failed.
    #[error("failed to build HTTP transport: {0}")]
    BuildTransport(#[source] TransportBuildError),
    /// The lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
    /// Serializing a result failed.
    #[error("failed to serialize result: {0}")]
    SerializeResult(#[source] serde_json::Error),
    /// Writing output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
