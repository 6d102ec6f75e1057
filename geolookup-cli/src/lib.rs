//! Command-line interface for geocoding lookups.
#![forbid(unsafe_code)]

mod error;

use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use geolookup_core::{Lookup, LookupConfig, Query, Transport};
use geolookup_http::{
    DEFAULT_USER_AGENT, HttpTransport, HttpTransportConfig, PlaceResult, TemplateBackend,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

pub use error::CliError;

const ARG_FORWARD_URL: &str = "forward-url";
const ARG_REVERSE_URL: &str = "reverse-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_USER_AGENT: &str = "user-agent";
const ARG_ADDRESS: &str = "address";
const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ENV_FORWARD_URL: &str = "GEOLOOKUP_CMDS_LOOKUP_FORWARD_URL";
const ENV_REVERSE_URL: &str = "GEOLOOKUP_CMDS_LOOKUP_REVERSE_URL";
const ENV_ADDRESS: &str = "GEOLOOKUP_CMDS_LOOKUP_ADDRESS";
const ENV_LATITUDE: &str = "GEOLOOKUP_CMDS_LOOKUP_LATITUDE";
const ENV_LONGITUDE: &str = "GEOLOOKUP_CMDS_LOOKUP_LONGITUDE";

/// Line printed when a lookup produced nothing.
const NO_RESULTS: &str = "no results";

/// Run the geolookup CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Lookup(args) => {
            let config = args.into_config()?;
            let stdout = io::stdout();
            run_lookup(&config, &mut stdout.lock())
        }
    }
}

fn run_lookup(config: &LookupSettings, out: &mut impl Write) -> Result<(), CliError> {
    let backend = TemplateBackend::new(config.forward_url.as_str(), config.reverse_url.as_str())?;
    let transport = HttpTransport::with_config(
        HttpTransportConfig::new().with_user_agent(config.user_agent.as_str()),
    )
    .map_err(CliError::BuildTransport)?;
    let lookup = Lookup::with_config(
        backend,
        transport,
        LookupConfig::default().with_timeout(config.timeout),
    );
    write_lookup(&lookup, &config.query, config.first, out)
}

/// Perform the lookup for `query` and print its outcome to `out`.
///
/// Full searches print one JSON object per result. With `first`, only the
/// best match's coordinates (`lat,lon`) or address are printed.
fn write_lookup<T: Transport>(
    lookup: &Lookup<TemplateBackend, T>,
    query: &Query,
    first: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if first {
        let line = match query {
            Query::Address(address) => lookup
                .coordinates(address)?
                .map(|coords| format!("{},{}", coords.latitude, coords.longitude)),
            Query::Coordinates(coords) => lookup.address(coords.latitude, coords.longitude)?,
        };
        return writeln!(out, "{}", line.as_deref().unwrap_or(NO_RESULTS))
            .map_err(CliError::WriteOutput);
    }

    let results = lookup.search(query.clone())?.unwrap_or_default();
    if results.is_empty() {
        return writeln!(out, "{NO_RESULTS}").map_err(CliError::WriteOutput);
    }
    results.iter().try_for_each(|result| write_result(result, out))
}

fn write_result(result: &PlaceResult, out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, result).map_err(CliError::SerializeResult)?;
    writeln!(out).map_err(CliError::WriteOutput)
}

#[derive(Debug, Parser)]
#[command(
    name = "geolookup",
    about = "Forward and reverse geocoding against JSON geocoding services",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve an address to coordinates or coordinates to an address.
    Lookup(LookupArgs),
}

/// CLI arguments for the `lookup` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Query a geocoding service. Endpoint templates contain a \
                 {query} placeholder and can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Query a geocoding service"
)]
#[ortho_config(prefix = "GEOLOOKUP")]
struct LookupArgs {
    /// URL template for forward lookups, containing `{query}`.
    #[arg(long = ARG_FORWARD_URL, value_name = "template")]
    #[serde(default)]
    forward_url: Option<String>,
    /// URL template for reverse lookups, containing `{query}`.
    #[arg(long = ARG_REVERSE_URL, value_name = "template")]
    #[serde(default)]
    reverse_url: Option<String>,
    /// Seconds to wait for the service before giving up.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    timeout_secs: Option<u64>,
    /// User agent sent with each request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    user_agent: Option<String>,
    /// Address to resolve to coordinates.
    #[arg(long = ARG_ADDRESS, value_name = "text")]
    #[serde(default)]
    address: Option<String>,
    /// Latitude to resolve to an address.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    latitude: Option<f64>,
    /// Longitude to resolve to an address.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    longitude: Option<f64>,
    /// Print only the best match's coordinates or address.
    #[arg(long)]
    #[serde(default)]
    first: bool,
}

impl LookupArgs {
    fn into_config(self) -> Result<LookupSettings, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LookupSettings::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LookupSettings {
    forward_url: String,
    reverse_url: String,
    timeout: Duration,
    user_agent: String,
    query: Query,
    first: bool,
}

impl LookupSettings {
    fn query_from(
        address: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Query, CliError> {
        match (address, latitude, longitude) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CliError::ConflictingQuery),
            (Some(address), None, None) => Ok(Query::Address(address)),
            (None, Some(latitude), Some(longitude)) => Ok(Query::from((latitude, longitude))),
            (None, Some(_), None) => Err(CliError::MissingArgument {
                field: ARG_LONGITUDE,
                env: ENV_LONGITUDE,
            }),
            (None, None, Some(_)) => Err(CliError::MissingArgument {
                field: ARG_LATITUDE,
                env: ENV_LATITUDE,
            }),
            (None, None, None) => Err(CliError::MissingArgument {
                field: ARG_ADDRESS,
                env: ENV_ADDRESS,
            }),
        }
    }
}

impl TryFrom<LookupArgs> for LookupSettings {
    type Error = CliError;

    fn try_from(args: LookupArgs) -> Result<Self, Self::Error> {
        let forward_url = args.forward_url.ok_or(CliError::MissingArgument {
            field: ARG_FORWARD_URL,
            env: ENV_FORWARD_URL,
        })?;
        let reverse_url = args.reverse_url.ok_or(CliError::MissingArgument {
            field: ARG_REVERSE_URL,
            env: ENV_REVERSE_URL,
        })?;
        let timeout = args
            .timeout_secs
            .map_or(geolookup_core::DEFAULT_TIMEOUT, Duration::from_secs);
        let user_agent = args
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());
        let query = Self::query_from(args.address, args.latitude, args.longitude)?;
        Ok(Self {
            forward_url,
            reverse_url,
            timeout,
            user_agent,
            query,
            first: args.first,
        })
    }
}

#[cfg(test)]
mod tests;
