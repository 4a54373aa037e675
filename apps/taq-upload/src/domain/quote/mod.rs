//! TAQ Quote Record and Line Parser
//!
//! Parses one pipe-delimited TAQ tick line into a Bigtable row key and a
//! serialized quote payload. The input format starts with:
//!
//! - Time: in HHMMSSNNNNNNNNN format (hours, minutes, seconds, nanoseconds)
//! - Exchange: a single character (ignored)
//! - Symbol: a string
//! - Bid_Price: float
//! - Bid_Size: integer
//! - Offer_Price: float
//! - Offer_Size: integer
//!
//! Any trailing fields are ignored. The row key combines timestamp and
//! symbol (`<timestamp>/<symbol>`) so that writes hotspot on neither field
//! alone. The quote itself is stored as a fixed four-field protobuf
//! message.

use prost::Message;

/// A single TAQ quote tick.
///
/// Versionless wire schema: exactly these four fields, in this order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Quote {
    /// Best bid price.
    #[prost(double, tag = "1")]
    pub bid_px: f64,
    /// Size at the best bid.
    #[prost(int64, tag = "2")]
    pub bid_qty: i64,
    /// Best offer price.
    #[prost(double, tag = "3")]
    pub offer_px: f64,
    /// Size at the best offer.
    #[prost(int64, tag = "4")]
    pub offer_qty: i64,
}

/// A line that could not be turned into a quote row.
///
/// Carries the 1-based line number and the exact raw line so the failure
/// can be located in the input file. The context is attached exactly once,
/// at [`parse_line`]'s boundary; callers propagate it unchanged.
#[derive(Debug, thiserror::Error)]
#[error("{kind} in line #{line_number} ({raw_line})")]
pub struct ParseError {
    /// 1-based data line number (the header is not counted).
    pub line_number: usize,
    /// The original line, verbatim.
    pub raw_line: String,
    /// What went wrong.
    #[source]
    pub kind: ParseErrorKind,
}

/// The specific parse failure, without line context.
#[derive(Debug, thiserror::Error)]
pub enum ParseErrorKind {
    /// The line ended before a required field.
    #[error("missing {field} field")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A price field is not a valid floating-point number.
    #[error("invalid {field}: {source}")]
    InvalidFloat {
        /// Name of the offending field.
        field: &'static str,
        /// The underlying parse failure.
        source: std::num::ParseFloatError,
    },

    /// A size field is not a valid integer.
    #[error("invalid {field}: {source}")]
    InvalidInt {
        /// Name of the offending field.
        field: &'static str,
        /// The underlying parse failure.
        source: std::num::ParseIntError,
    },

    /// The populated quote could not be serialized.
    #[error("could not serialize quote: {0}")]
    Encode(#[from] prost::EncodeError),
}

/// Parse one TAQ line into a (row key, serialized quote) pair.
///
/// `line_number` is the 1-based data line number used only for error
/// context. Pure function of its inputs.
///
/// # Errors
///
/// Returns a [`ParseError`] when a required field is missing, a numeric
/// field does not parse, or the quote cannot be serialized.
pub fn parse_line(line_number: usize, line: &str) -> Result<(String, Vec<u8>), ParseError> {
    parse_fields(line).map_err(|kind| ParseError {
        line_number,
        raw_line: line.to_string(),
        kind,
    })
}

fn parse_fields(line: &str) -> Result<(String, Vec<u8>), ParseErrorKind> {
    let mut fields = line.split('|');
    let mut next = |field: &'static str| {
        fields
            .next()
            .ok_or(ParseErrorKind::MissingField { field })
    };

    let timestamp = next("timestamp")?;
    let _exchange = next("exchange")?;
    let symbol = next("symbol")?;
    let key = format!("{timestamp}/{symbol}");

    let quote = Quote {
        bid_px: parse_f64("bid price", next("bid price")?)?,
        bid_qty: parse_i64("bid size", next("bid size")?)?,
        offer_px: parse_f64("offer price", next("offer price")?)?,
        offer_qty: parse_i64("offer size", next("offer size")?)?,
    };

    let mut value = Vec::with_capacity(quote.encoded_len());
    quote.encode(&mut value)?;

    Ok((key, value))
}

fn parse_f64(field: &'static str, token: &str) -> Result<f64, ParseErrorKind> {
    token
        .parse()
        .map_err(|source| ParseErrorKind::InvalidFloat { field, source })
}

fn parse_i64(field: &'static str, token: &str) -> Result<i64, ParseErrorKind> {
    token
        .parse()
        .map_err(|source| ParseErrorKind::InvalidInt { field, source })
}
