//! Error types for `waybill-core`.
//!
//! Every variant is a synchronous validation failure, raised before any
//! network call. Backend-reported rejections are a different animal and live
//! in `waybill-client`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("booking reference is required")]
  MissingReference,

  #[error("flight number is required for depart/arrive")]
  MissingFlightNumber,

  #[error("flight number can contain letters, digits, underscores, and dashes only")]
  InvalidFlightNumber,

  #[error("origin and destination are required")]
  MissingLocation,

  #[error("pieces must be at least 1")]
  InvalidPieces,

  #[error("weight must be zero or greater")]
  InvalidWeight,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
