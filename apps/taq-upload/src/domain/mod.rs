//! Domain Layer - Quote record and line parsing.
//!
//! This layer contains the TAQ quote record and the pure parsing
//! function that turns one raw input line into a (row key, serialized
//! quote) pair. No I/O, no external services.

/// TAQ quote record and pipe-delimited line parser.
pub mod quote;
