//! Tracing Subscriber Setup
//!
//! Installs the global `tracing` subscriber for the process. Diagnostics
//! go to stderr so stdout carries nothing but the final upload count.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Safe to call once at startup; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
