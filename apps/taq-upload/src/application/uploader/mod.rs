//! Upload Loop
//!
//! Drives the whole run: opens the input file, skips the header line,
//! parses each data line, and sends one cell mutation per line through
//! the [`MutationSink`] port. Strictly sequential; the first parse or
//! request failure aborts the remaining loop.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{MutationSink, RequestError};
use crate::domain::quote::{ParseError, parse_line};

/// Upper bound on data lines consumed per run.
///
/// Uploading row-by-row is slow; the cap keeps a demo-sized run from
/// taking hours on a full tick file. Larger uploads belong in a batched
/// or sharded pipeline, not this tool.
pub const MAX_LINES: usize = 1000;

/// A failed upload run.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// An input line could not be parsed; carries line context.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A remote write failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path of the input file.
        path: std::path::PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

/// Sequential per-row uploader over a [`MutationSink`].
#[derive(Debug)]
pub struct Uploader<S> {
    sink: S,
}

impl<S: MutationSink> Uploader<S> {
    /// Create an uploader writing through `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Upload up to [`MAX_LINES`] quote rows from the file at `path`.
    ///
    /// The first line is a header and is discarded. Returns the number of
    /// rows actually written; reaching end-of-file before the cap is a
    /// valid short run, and an empty or header-only file uploads zero
    /// rows.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable line, parse failure, or rejected
    /// write. No further requests are issued after a failure, and rows
    /// already written are not rolled back.
    pub async fn run(&mut self, path: &Path) -> Result<usize, UploadError> {
        let file = File::open(path).await.map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut lines = BufReader::new(file).lines();

        let read_error = |source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Skip the header line.
        if lines.next_line().await.map_err(read_error)?.is_none() {
            return Ok(0);
        }

        let mut uploaded = 0;
        while uploaded < MAX_LINES {
            let Some(line) = lines.next_line().await.map_err(read_error)? else {
                break;
            };

            let line_number = uploaded + 1;
            let (row_key, payload) = parse_line(line_number, &line)?;

            self.sink.write_quote(row_key, payload).await?;
            uploaded += 1;

            tracing::debug!(line_number, "quote uploaded");
        }

        Ok(uploaded)
    }
}
