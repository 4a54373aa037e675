//! Application Layer - Upload loop and port definitions.
//!
//! This layer contains the sequential upload use case and the port
//! interface it drives to reach the remote store.

/// Port interfaces for the remote wide-column store.
pub mod ports;

/// The per-row upload loop.
pub mod uploader;
