//! Pre-flight validation for booking status transitions.
//!
//! The validator decides whether a transition request is well-formed enough
//! to send — before any network call, so a bad form never consumes a request.
//! It deliberately does not know the booking's current stored status: the
//! backend owns that check and rejects illegal transitions itself.

use crate::{Error, Result};

// ─── Transition kind ─────────────────────────────────────────────────────────

/// A requested change of booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
  Depart,
  Arrive,
  Cancel,
}

impl TransitionKind {
  /// The backend path segment: `PATCH /bookings/{refId}/{segment}`.
  pub fn segment(&self) -> &'static str {
    match self {
      Self::Depart => "depart",
      Self::Arrive => "arrive",
      Self::Cancel => "cancel",
    }
  }

  /// Depart and arrive are flight legs; cancel is not.
  pub fn requires_flight_number(&self) -> bool {
    matches!(self, Self::Depart | Self::Arrive)
  }
}

impl std::fmt::Display for TransitionKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.segment())
  }
}

// ─── Validated request ───────────────────────────────────────────────────────

/// A transition request that has passed pre-flight validation.
///
/// Only [`validate_transition`] constructs one, so holding a value proves the
/// fields are trimmed and well-formed. `flight_number` is `Some` exactly when
/// the kind requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
  pub kind:          TransitionKind,
  pub ref_id:        String,
  pub flight_number: Option<String>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Allowed flight-number alphabet: letters, digits, underscore, hyphen.
fn is_valid_flight_number(s: &str) -> bool {
  !s.is_empty()
    && s
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validate a requested transition and normalize its fields.
///
/// - `Error::MissingReference` when `ref_id` trims to empty.
/// - For depart/arrive: `Error::MissingFlightNumber` when the flight number
///   is absent or trims to empty, `Error::InvalidFlightNumber` when it
///   contains anything outside `[A-Za-z0-9_-]`.
/// - For cancel: the flight number is ignored entirely.
pub fn validate_transition(
  kind: TransitionKind,
  ref_id: &str,
  flight_number: Option<&str>,
) -> Result<TransitionRequest> {
  let ref_id = ref_id.trim();
  if ref_id.is_empty() {
    return Err(Error::MissingReference);
  }

  let flight_number = if kind.requires_flight_number() {
    let fno = flight_number.map(str::trim).unwrap_or_default();
    if fno.is_empty() {
      return Err(Error::MissingFlightNumber);
    }
    if !is_valid_flight_number(fno) {
      return Err(Error::InvalidFlightNumber);
    }
    Some(fno.to_string())
  } else {
    None
  };

  Ok(TransitionRequest {
    kind,
    ref_id: ref_id.to_string(),
    flight_number,
  })
}

/// Validate a flight number on its own (also used by flight registration).
pub(crate) fn check_flight_number(raw: &str) -> Result<String> {
  let fno = raw.trim();
  if fno.is_empty() {
    return Err(Error::MissingFlightNumber);
  }
  if !is_valid_flight_number(fno) {
    return Err(Error::InvalidFlightNumber);
  }
  Ok(fno.to_string())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn depart_with_valid_inputs_returns_trimmed_request() {
    let r =
      validate_transition(TransitionKind::Depart, " BKG1 ", Some(" AI202 "))
        .unwrap();
    assert_eq!(r.kind, TransitionKind::Depart);
    assert_eq!(r.ref_id, "BKG1");
    assert_eq!(r.flight_number.as_deref(), Some("AI202"));
  }

  #[test]
  fn missing_reference_fails_for_every_kind() {
    for kind in
      [TransitionKind::Depart, TransitionKind::Arrive, TransitionKind::Cancel]
    {
      assert_eq!(
        validate_transition(kind, "", Some("AI202")),
        Err(Error::MissingReference)
      );
      assert_eq!(
        validate_transition(kind, "   ", Some("AI202")),
        Err(Error::MissingReference)
      );
    }
  }

  #[test]
  fn depart_without_flight_number_fails() {
    assert_eq!(
      validate_transition(TransitionKind::Depart, "BKG1", Some("")),
      Err(Error::MissingFlightNumber)
    );
    assert_eq!(
      validate_transition(TransitionKind::Depart, "BKG1", None),
      Err(Error::MissingFlightNumber)
    );
  }

  #[test]
  fn arrive_without_flight_number_fails() {
    assert_eq!(
      validate_transition(TransitionKind::Arrive, "BKG1", Some("  ")),
      Err(Error::MissingFlightNumber)
    );
  }

  #[test]
  fn flight_number_with_space_is_rejected() {
    assert_eq!(
      validate_transition(TransitionKind::Depart, "BKG1", Some("AI 202")),
      Err(Error::InvalidFlightNumber)
    );
  }

  #[test]
  fn dashed_and_plain_flight_numbers_are_accepted() {
    for fno in ["AI-202", "AI202", "AI_202"] {
      let r =
        validate_transition(TransitionKind::Arrive, "BKG1", Some(fno)).unwrap();
      assert_eq!(r.flight_number.as_deref(), Some(fno));
    }
  }

  #[test]
  fn cancel_ignores_flight_number() {
    for fno in [None, Some(""), Some("AI 202 !!")] {
      let r = validate_transition(TransitionKind::Cancel, "BKG1", fno).unwrap();
      assert_eq!(r.kind, TransitionKind::Cancel);
      assert_eq!(r.ref_id, "BKG1");
      assert!(r.flight_number.is_none());
    }
  }

  #[test]
  fn segments_match_backend_paths() {
    assert_eq!(TransitionKind::Depart.segment(), "depart");
    assert_eq!(TransitionKind::Arrive.segment(), "arrive");
    assert_eq!(TransitionKind::Cancel.segment(), "cancel");
  }
}
