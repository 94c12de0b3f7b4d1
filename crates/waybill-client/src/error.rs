//! Error types for `waybill-client`.

use thiserror::Error;

/// An error surfaced by a backend call.
///
/// `Backend` carries the backend's own message where one could be extracted
/// from the response body; the UI shows it verbatim and never retries.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{message}")]
  Backend { status: u16, message: String },

  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("invalid base URL: {0}")]
  InvalidBaseUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
