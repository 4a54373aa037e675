//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementation of the mutation sink
//! port defined in the application layer, plus configuration and
//! telemetry plumbing.

/// Cloud Bigtable adapter (channel, credentials, MutateRow client).
pub mod bigtable;

/// Table addressing and endpoint selection.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;
