//! Derived journey and timeline read models — never stored, always derived.
//!
//! Both derivations are total functions over already-fetched backend data:
//! there is no error path, malformed events degrade to empty fields, and
//! events are consumed strictly in input order. Spacing along the journey
//! line is by index, an explicit display simplification — not geography,
//! and not a timestamp sort.

use crate::booking::TrackingEvent;

// ─── Waypoint ────────────────────────────────────────────────────────────────

/// A point on the origin → destination display line.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
  /// Location code or event text; empty when the event carried none.
  pub label:       String,
  /// Relative placement in [0, 1]: origin at 0, destination at 1.
  pub position:    f64,
  /// True only for the two synthetic endpoints.
  pub is_endpoint: bool,
}

/// Build the waypoint sequence for a booking's journey line.
///
/// Always `events.len() + 2` entries: the synthetic origin, one waypoint per
/// event in input order, the synthetic destination. Endpoint labels are the
/// booking's own fields verbatim, even when an event shares the location.
pub fn build_waypoints(
  origin: &str,
  destination: &str,
  events: &[TrackingEvent],
) -> Vec<Waypoint> {
  let count = events.len() + 2;
  let denominator = (count - 1) as f64;

  let mut waypoints = Vec::with_capacity(count);
  waypoints.push(Waypoint {
    label:       origin.to_string(),
    position:    0.0,
    is_endpoint: true,
  });
  for (i, event) in events.iter().enumerate() {
    waypoints.push(Waypoint {
      label:       event.location.clone(),
      position:    (i + 1) as f64 / denominator,
      is_endpoint: false,
    });
  }
  waypoints.push(Waypoint {
    label:       destination.to_string(),
    position:    1.0,
    is_endpoint: true,
  });
  waypoints
}

// ─── Timeline ────────────────────────────────────────────────────────────────

/// A chronological display record for one tracking event.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
  pub title:     String,
  pub subtitle:  String,
  /// The event's raw timestamp string; formatting is a presentation concern.
  pub timestamp: String,
}

/// Build the timeline for a booking's event history, one entry per event in
/// input order. The subtitle is `"{location} – Flight {flightNumber}"`, or
/// the bare location when the event has no flight number (an empty string
/// counts as none).
pub fn build_timeline(events: &[TrackingEvent]) -> Vec<TimelineEntry> {
  events
    .iter()
    .map(|event| {
      let subtitle = match event.flight_number.as_deref() {
        Some(fno) if !fno.is_empty() => {
          format!("{} – Flight {}", event.location, fno)
        }
        _ => event.location.clone(),
      };
      TimelineEntry {
        title: event.event_type.clone(),
        subtitle,
        timestamp: event.timestamp.clone(),
      }
    })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn event(location: &str, timestamp: &str) -> TrackingEvent {
    TrackingEvent {
      event_type:    "IN_TRANSIT".into(),
      location:      location.into(),
      flight_number: None,
      timestamp:     timestamp.into(),
    }
  }

  // ── Waypoints
  // ───────────────────────────────────────────────────────────

  #[test]
  fn empty_history_yields_bare_endpoint_line() {
    let w = build_waypoints("DEL", "BOM", &[]);
    assert_eq!(w.len(), 2);
    assert_eq!(w[0].label, "DEL");
    assert_eq!(w[0].position, 0.0);
    assert!(w[0].is_endpoint);
    assert_eq!(w[1].label, "BOM");
    assert_eq!(w[1].position, 1.0);
    assert!(w[1].is_endpoint);
  }

  #[test]
  fn single_event_sits_at_the_midpoint() {
    let w = build_waypoints("DEL", "BOM", &[event("DXB", "t1")]);
    assert_eq!(w.len(), 3);
    assert_eq!(w[0].position, 0.0);
    assert_eq!(w[1].position, 0.5);
    assert_eq!(w[2].position, 1.0);
    assert_eq!(w[1].label, "DXB");
    assert!(!w[1].is_endpoint);
  }

  #[test]
  fn three_events_are_evenly_spaced() {
    let events =
      [event("AMD", "t1"), event("DXB", "t2"), event("BLR", "t3")];
    let w = build_waypoints("DEL", "BOM", &events);
    assert_eq!(w.len(), 5);
    for (i, wp) in w.iter().enumerate() {
      assert_eq!(wp.position, i as f64 / 4.0);
    }
    assert!(w.windows(2).all(|p| p[0].position <= p[1].position));
  }

  #[test]
  fn endpoint_labels_are_verbatim_even_when_an_event_matches() {
    // An event at the origin location must not replace the synthetic endpoint.
    let w = build_waypoints("DEL", "BOM", &[event("DEL", "t1")]);
    assert_eq!(w[0].label, "DEL");
    assert!(w[0].is_endpoint);
    assert_eq!(w[1].label, "DEL");
    assert!(!w[1].is_endpoint);
  }

  #[test]
  fn event_without_location_degrades_to_empty_label() {
    let sparse = TrackingEvent {
      event_type:    String::new(),
      location:      String::new(),
      flight_number: None,
      timestamp:     "t1".into(),
    };
    let w = build_waypoints("DEL", "BOM", &[sparse]);
    assert_eq!(w[1].label, "");
  }

  #[test]
  fn input_order_is_trusted_over_timestamps() {
    // Deliberately out of chronological order; the line must reflect it.
    let events = [event("DXB", "2025-01-02T00:00:00Z"),
      event("AMD", "2025-01-01T00:00:00Z")];
    let w = build_waypoints("DEL", "BOM", &events);
    assert_eq!(w[1].label, "DXB");
    assert_eq!(w[2].label, "AMD");
  }

  // ── Timeline
  // ────────────────────────────────────────────────────────────

  #[test]
  fn flight_leg_entry_composes_full_subtitle() {
    let e = TrackingEvent {
      event_type:    "DEPARTED".into(),
      location:      "DEL".into(),
      flight_number: Some("AI202".into()),
      timestamp:     "2025-01-01T00:00:00Z".into(),
    };
    let t = build_timeline(std::slice::from_ref(&e));
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].title, "DEPARTED");
    assert_eq!(t[0].subtitle, "DEL – Flight AI202");
    assert_eq!(t[0].timestamp, "2025-01-01T00:00:00Z");
  }

  #[test]
  fn entry_without_flight_number_has_bare_location() {
    let t = build_timeline(&[event("DXB", "t1")]);
    assert_eq!(t[0].subtitle, "DXB");
  }

  #[test]
  fn empty_flight_number_string_counts_as_absent() {
    let mut e = event("DXB", "t1");
    e.flight_number = Some(String::new());
    let t = build_timeline(std::slice::from_ref(&e));
    assert_eq!(t[0].subtitle, "DXB");
  }

  #[test]
  fn empty_history_yields_empty_timeline() {
    assert!(build_timeline(&[]).is_empty());
  }

  #[test]
  fn entries_preserve_input_order() {
    let events = [event("DXB", "2025-01-02T00:00:00Z"),
      event("AMD", "2025-01-01T00:00:00Z")];
    let t = build_timeline(&events);
    assert_eq!(t[0].subtitle, "DXB");
    assert_eq!(t[1].subtitle, "AMD");
  }

  // ── Idempotence
  // ─────────────────────────────────────────────────────────

  #[test]
  fn derivations_are_idempotent() {
    let events = [event("DXB", "t1"), event("AMD", "t2")];
    assert_eq!(
      build_waypoints("DEL", "BOM", &events),
      build_waypoints("DEL", "BOM", &events)
    );
    assert_eq!(build_timeline(&events), build_timeline(&events));
  }
}
