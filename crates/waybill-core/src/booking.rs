//! Booking — the central record of the portal.
//!
//! Wire shapes match the backend's JSON exactly (camelCase keys, tracking
//! events under the singular `event` key). Field absence is always an
//! explicit `Option` or `#[serde(default)]`; nothing is silently invented
//! downstream of deserialization.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Status ──────────────────────────────────────────────────────────────────

/// The lifecycle status of a booking.
///
/// The happy path is `Pending → Confirmed → Departed → Arrived`, with
/// `Cancelled` reachable from any non-terminal state. A status string this
/// crate does not recognize decodes to [`BookingStatus::Unknown`] so one odd
/// value never sinks an otherwise valid payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
  Pending,
  Confirmed,
  Departed,
  Arrived,
  Cancelled,
  #[serde(other)]
  Unknown,
}

impl BookingStatus {
  /// Terminal states accept no further transitions.
  pub fn is_terminal(&self) -> bool {
    matches!(self, Self::Arrived | Self::Cancelled)
  }

  /// The display label, matching the backend's own spelling.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pending => "PENDING",
      Self::Confirmed => "CONFIRMED",
      Self::Departed => "DEPARTED",
      Self::Arrived => "ARRIVED",
      Self::Cancelled => "CANCELLED",
      Self::Unknown => "UNKNOWN",
    }
  }
}

impl std::fmt::Display for BookingStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Tracking events ─────────────────────────────────────────────────────────

/// A timestamped occurrence (location scan or flight leg) on a booking.
///
/// The timestamp is kept as the raw ISO-8601 string the backend sent; the
/// core never parses or reformats it. Sparse event objects are tolerated —
/// a missing field decodes to its empty form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
  #[serde(default)]
  pub event_type:    String,
  #[serde(default)]
  pub location:      String,
  /// Present only for flight-leg events.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub flight_number: Option<String>,
  #[serde(default)]
  pub timestamp:     String,
}

// ─── Booking ─────────────────────────────────────────────────────────────────

/// A cargo booking as returned by the backend.
///
/// Events are append-only from the booking's perspective: this crate only
/// ever consumes them, it never mutates or reorders past events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
  pub ref_id:      String,
  #[serde(rename = "bookingStatus")]
  pub status:      BookingStatus,
  pub origin:      String,
  pub destination: String,
  pub pieces:      u32,
  pub weight_kg:   f64,
  /// The backend omits the key entirely for bookings with no history.
  #[serde(rename = "event", default)]
  pub events:      Vec<TrackingEvent>,
}

// ─── NewBooking ──────────────────────────────────────────────────────────────

/// Validated input to `POST /bookings`.
///
/// Construction is the boundary where creation invariants are enforced:
/// location codes are trimmed and uppercased, `pieces >= 1`,
/// `weight_kg >= 0`. Lifecycle transitions never re-check these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
  pub ref_id:      String,
  pub origin:      String,
  pub destination: String,
  pub pieces:      u32,
  pub weight_kg:   f64,
}

impl NewBooking {
  pub fn new(
    ref_id: &str,
    origin: &str,
    destination: &str,
    pieces: u32,
    weight_kg: f64,
  ) -> Result<Self> {
    let ref_id = ref_id.trim();
    if ref_id.is_empty() {
      return Err(Error::MissingReference);
    }

    let origin = origin.trim().to_uppercase();
    let destination = destination.trim().to_uppercase();
    if origin.is_empty() || destination.is_empty() {
      return Err(Error::MissingLocation);
    }

    if pieces < 1 {
      return Err(Error::InvalidPieces);
    }
    if !weight_kg.is_finite() || weight_kg < 0.0 {
      return Err(Error::InvalidWeight);
    }

    Ok(Self {
      ref_id: ref_id.to_string(),
      origin,
      destination,
      pieces,
      weight_kg,
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ── NewBooking boundary validation
  // ──────────────────────────────────────

  #[test]
  fn new_booking_normalizes_codes() {
    let b = NewBooking::new(" BKG1 ", "del", " bom", 2, 120.5).unwrap();
    assert_eq!(b.ref_id, "BKG1");
    assert_eq!(b.origin, "DEL");
    assert_eq!(b.destination, "BOM");
  }

  #[test]
  fn new_booking_rejects_blank_reference() {
    assert_eq!(
      NewBooking::new("   ", "DEL", "BOM", 1, 1.0),
      Err(Error::MissingReference)
    );
  }

  #[test]
  fn new_booking_rejects_blank_locations() {
    assert_eq!(
      NewBooking::new("BKG1", "", "BOM", 1, 1.0),
      Err(Error::MissingLocation)
    );
    assert_eq!(
      NewBooking::new("BKG1", "DEL", "  ", 1, 1.0),
      Err(Error::MissingLocation)
    );
  }

  #[test]
  fn new_booking_rejects_zero_pieces() {
    assert_eq!(
      NewBooking::new("BKG1", "DEL", "BOM", 0, 1.0),
      Err(Error::InvalidPieces)
    );
  }

  #[test]
  fn new_booking_rejects_bad_weight() {
    assert_eq!(
      NewBooking::new("BKG1", "DEL", "BOM", 1, -0.5),
      Err(Error::InvalidWeight)
    );
    assert_eq!(
      NewBooking::new("BKG1", "DEL", "BOM", 1, f64::NAN),
      Err(Error::InvalidWeight)
    );
  }

  #[test]
  fn new_booking_serializes_camel_case() {
    let b = NewBooking::new("BKG1", "DEL", "BOM", 2, 12.0).unwrap();
    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["refId"], "BKG1");
    assert_eq!(json["weightKg"], 12.0);
  }

  // ── Status decoding
  // ─────────────────────────────────────────────────────

  #[test]
  fn status_decodes_known_values() {
    let s: BookingStatus = serde_json::from_str("\"DEPARTED\"").unwrap();
    assert_eq!(s, BookingStatus::Departed);
  }

  #[test]
  fn status_decodes_unrecognized_value_to_unknown() {
    let s: BookingStatus = serde_json::from_str("\"SCHEDULED\"").unwrap();
    assert_eq!(s, BookingStatus::Unknown);
  }

  #[test]
  fn terminal_states() {
    assert!(BookingStatus::Arrived.is_terminal());
    assert!(BookingStatus::Cancelled.is_terminal());
    assert!(!BookingStatus::Pending.is_terminal());
    assert!(!BookingStatus::Confirmed.is_terminal());
    assert!(!BookingStatus::Departed.is_terminal());
  }

  // ── Booking payload decoding
  // ────────────────────────────────────────────

  #[test]
  fn booking_decodes_backend_payload() {
    let raw = r#"{
      "refId": "BKG1",
      "bookingStatus": "DEPARTED",
      "origin": "DEL",
      "destination": "BOM",
      "pieces": 3,
      "weightKg": 45.5,
      "event": [
        {"eventType": "DEPARTED", "location": "DEL",
         "flightNumber": "AI202", "timestamp": "2025-01-01T00:00:00Z"}
      ]
    }"#;
    let b: Booking = serde_json::from_str(raw).unwrap();
    assert_eq!(b.status, BookingStatus::Departed);
    assert_eq!(b.events.len(), 1);
    assert_eq!(b.events[0].flight_number.as_deref(), Some("AI202"));
  }

  #[test]
  fn booking_decodes_without_event_key() {
    let raw = r#"{
      "refId": "BKG2",
      "bookingStatus": "PENDING",
      "origin": "DEL",
      "destination": "BOM",
      "pieces": 1,
      "weightKg": 1.0
    }"#;
    let b: Booking = serde_json::from_str(raw).unwrap();
    assert!(b.events.is_empty());
  }

  #[test]
  fn sparse_event_decodes_to_empty_fields() {
    let raw = r#"{"timestamp": "2025-01-01T00:00:00Z"}"#;
    let e: TrackingEvent = serde_json::from_str(raw).unwrap();
    assert_eq!(e.event_type, "");
    assert_eq!(e.location, "");
    assert!(e.flight_number.is_none());
  }
}
