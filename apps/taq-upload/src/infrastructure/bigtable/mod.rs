//! Cloud Bigtable Adapter
//!
//! Production implementation of the [`MutationSink`] port. Opens one
//! gRPC channel to the Bigtable data endpoint and issues one unary
//! `MutateRow` request per quote row.
//!
//! Credentials come from Application Default Credentials discovery; no
//! key file or token is accepted as a program argument. When
//! `BIGTABLE_EMULATOR_HOST` is set the channel is plaintext and no
//! credentials are attached, matching the official client libraries.

use std::sync::Arc;

use gcp_auth::TokenProvider;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{ClientTlsConfig, Endpoint};

use crate::application::ports::{MutationSink, RequestError};
use crate::infrastructure::config::UploadConfig;

pub mod proto;

use proto::bigtable_client::BigtableClient;
use proto::{MutateRowRequest, Mutation, mutation};

/// Column family every quote cell is written into.
pub const COLUMN_FAMILY: &str = "taq";

/// Column qualifier every quote cell is written into.
pub const COLUMN_QUALIFIER: &[u8] = b"message";

/// OAuth scope for the Bigtable data API.
const DATA_SCOPES: &[&str] = &["https://www.googleapis.com/auth/bigtable.data"];

/// Failure to establish the Bigtable channel.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// The endpoint URL is not a valid channel target.
    #[error("invalid Bigtable endpoint {url}: {source}")]
    Endpoint {
        /// The offending URL.
        url: String,
        /// The underlying transport failure.
        source: tonic::transport::Error,
    },

    /// TLS could not be configured on the channel.
    #[error("TLS configuration failed: {0}")]
    Tls(#[source] tonic::transport::Error),

    /// The channel could not be established.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        /// The endpoint that was dialed.
        url: String,
        /// The underlying transport failure.
        source: tonic::transport::Error,
    },

    /// Application Default Credentials discovery failed.
    #[error("credential discovery failed: {0}")]
    Credentials(#[from] gcp_auth::Error),
}

/// Mutation sink writing quote cells through the Bigtable data API.
///
/// Every row gets exactly one cell at `taq:message` with
/// `timestamp_micros` fixed to 0: the cell timestamp serves as a plain
/// revision counter, the quote's own timestamp lives in the row key.
pub struct BigtableSink {
    client: BigtableClient,
    table_name: String,
    credentials: Option<Arc<dyn TokenProvider>>,
}

impl BigtableSink {
    /// Establish the channel and discover credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectError`] when the endpoint is invalid, TLS
    /// cannot be configured, credential discovery fails, or the channel
    /// cannot be established.
    pub async fn connect(config: &UploadConfig) -> Result<Self, ConnectError> {
        let url = config.endpoint.url();
        let mut endpoint =
            Endpoint::from_shared(url.clone()).map_err(|source| ConnectError::Endpoint {
                url: url.clone(),
                source,
            })?;

        let credentials = if config.endpoint.is_emulator() {
            tracing::info!(url = %url, "using Bigtable emulator, skipping TLS and credentials");
            None
        } else {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(ConnectError::Tls)?;
            Some(gcp_auth::provider().await?)
        };

        let channel = endpoint
            .connect()
            .await
            .map_err(|source| ConnectError::Connect { url, source })?;

        Ok(Self {
            client: BigtableClient::new(channel),
            table_name: config.table_name(),
            credentials,
        })
    }

    async fn authorization_header(&self) -> Result<Option<MetadataValue<Ascii>>, RequestError> {
        let Some(provider) = &self.credentials else {
            return Ok(None);
        };

        let token = provider.token(DATA_SCOPES).await.map_err(|e| {
            RequestError::auth(format!("failed to obtain access token: {e}"))
        })?;

        let header = format!("Bearer {}", token.as_str()).parse().map_err(|e| {
            RequestError::auth(format!("invalid authorization header: {e}"))
        })?;

        Ok(Some(header))
    }
}

#[async_trait::async_trait]
impl MutationSink for BigtableSink {
    async fn write_quote(&mut self, row_key: String, payload: Vec<u8>) -> Result<(), RequestError> {
        let mut request = tonic::Request::new(MutateRowRequest {
            table_name: self.table_name.clone(),
            app_profile_id: String::new(),
            row_key: row_key.into_bytes(),
            mutations: vec![Mutation {
                mutation: Some(mutation::Mutation::SetCell(mutation::SetCell {
                    family_name: COLUMN_FAMILY.to_string(),
                    column_qualifier: COLUMN_QUALIFIER.to_vec(),
                    timestamp_micros: 0,
                    value: payload,
                })),
            }],
        });

        if let Some(header) = self.authorization_header().await? {
            request.metadata_mut().insert("authorization", header);
        }

        self.client.mutate_row(request).await?;
        Ok(())
    }
}
