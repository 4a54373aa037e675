//! Upload Configuration
//!
//! Table addressing and endpoint selection for the uploader, built from
//! the CLI arguments plus environment overrides.

/// Default Bigtable data endpoint.
///
/// Bigtable has separate endpoints for the data and admin APIs; this
/// tool only uploads data, so only the data endpoint is used.
pub const DATA_ENDPOINT: &str = "https://bigtable.googleapis.com";

/// Environment variable naming a local emulator host (`host:port`).
pub const EMULATOR_HOST_VAR: &str = "BIGTABLE_EMULATOR_HOST";

/// Where the MutateRow channel should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigtableEndpoint {
    /// The production data endpoint, TLS with ambient credentials.
    Production,
    /// A local emulator at `host:port`, plaintext and unauthenticated.
    Emulator(String),
}

impl BigtableEndpoint {
    /// Pick the endpoint from the environment.
    ///
    /// Honors `BIGTABLE_EMULATOR_HOST` the way the official Bigtable
    /// clients do; unset or empty means production.
    pub fn from_env() -> Self {
        match std::env::var(EMULATOR_HOST_VAR) {
            Ok(host) if !host.is_empty() => Self::Emulator(host),
            _ => Self::Production,
        }
    }

    /// The channel URL for this endpoint.
    pub fn url(&self) -> String {
        match self {
            Self::Production => DATA_ENDPOINT.to_string(),
            Self::Emulator(host) => format!("http://{host}"),
        }
    }

    /// Whether this endpoint skips TLS and credentials.
    pub const fn is_emulator(&self) -> bool {
        matches!(self, Self::Emulator(_))
    }
}

/// Complete uploader configuration.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Google Cloud project id.
    pub project_id: String,
    /// Cloud Bigtable instance id.
    pub instance_id: String,
    /// Destination table id.
    pub table_id: String,
    /// Data endpoint to write to.
    pub endpoint: BigtableEndpoint,
}

impl UploadConfig {
    /// Build a configuration, picking the endpoint from the environment.
    pub fn new(project_id: String, instance_id: String, table_id: String) -> Self {
        Self {
            project_id,
            instance_id,
            table_id,
            endpoint: BigtableEndpoint::from_env(),
        }
    }

    /// The fully-qualified table name used to address every mutation.
    ///
    /// Composed once; immutable for the process lifetime.
    pub fn table_name(&self) -> String {
        format!(
            "projects/{}/instances/{}/tables/{}",
            self.project_id, self.instance_id, self.table_id
        )
    }
}
