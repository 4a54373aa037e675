#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value
    )
)]

//! TAQ Upload - Bigtable Quote Uploader
//!
//! Reads a pipe-delimited TAQ (Trade-and-Quote) tick file and writes each
//! quote as a single-cell mutation into a Cloud Bigtable table, one
//! `MutateRow` RPC per row. The run stops at the first parse or request
//! failure, or after 1000 data rows, whichever comes first.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: The quote record and the line parser
//!   - `quote`: TAQ quote message, pipe-delimited line parsing
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: The mutation sink interface the uploader drives
//!   - `uploader`: The sequential per-row upload loop
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `bigtable`: gRPC channel, credentials, MutateRow adapter
//!   - `config`: Table addressing and endpoint selection
//!   - `telemetry`: Tracing subscriber setup
//!
//! # Data Flow
//!
//! ```text
//! tick file ──► Line Parser ──► Uploader ──► BigtableSink ──► MutateRow RPC
//!               (key, bytes)    (row cap,     (taq:message
//!                                fail fast)    cell @ ts 0)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Quote record and line parsing, no external dependencies.
pub mod domain;

/// Application layer - Upload loop and port definitions.
pub mod application;

/// Infrastructure layer - Bigtable adapter, config, telemetry.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::quote::{ParseError, ParseErrorKind, Quote, parse_line};

// Application layer
pub use application::ports::{MutationSink, RequestError};
pub use application::uploader::{MAX_LINES, UploadError, Uploader};

// Infrastructure
pub use infrastructure::bigtable::{BigtableSink, ConnectError};
pub use infrastructure::config::{BigtableEndpoint, UploadConfig};
pub use infrastructure::telemetry;
