//! Core types and validation for the waybill cargo portal.
//!
//! This crate is deliberately free of HTTP and I/O dependencies. Everything
//! here is pure and synchronous: the booking data model, the pre-flight
//! transition validator, and the derived journey/timeline read models. The
//! backend remains authoritative for stored state; this crate only decides
//! whether a request is well-formed enough to send.

pub mod booking;
pub mod error;
pub mod flight;
pub mod journey;
pub mod lifecycle;

pub use error::{Error, Result};
