//! Flight schedule types for the routes view and flight registration.
//!
//! Route combination (direct and one-stop) is produced entirely by the
//! backend; these types only carry its answer. Schedule times are proper
//! `chrono` instants — unlike tracking-event timestamps, they are formatted
//! for display by the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, lifecycle::check_flight_number};

// ─── Flight ──────────────────────────────────────────────────────────────────

/// The backend sends flight ids as either a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightId {
  Text(String),
  Number(i64),
}

impl std::fmt::Display for FlightId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Text(s) => f.write_str(s),
      Self::Number(n) => write!(f, "{n}"),
    }
  }
}

/// A scheduled flight leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:             Option<FlightId>,
  pub flight_number:  String,
  pub airline_name:   String,
  pub departure_time: DateTime<Utc>,
  pub arrival_time:   DateTime<Utc>,
  pub origin:         String,
  pub destination:    String,
}

// ─── Routes ──────────────────────────────────────────────────────────────────

/// A one-stop option: two legs joined at an intermediate airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneStopRoute {
  pub first_leg:  Flight,
  pub second_leg: Flight,
}

/// The backend's answer to a route search. Either list may be missing from
/// the payload; both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRoutes {
  #[serde(default)]
  pub direct:   Vec<Flight>,
  #[serde(default)]
  pub one_stop: Vec<OneStopRoute>,
}

/// Query parameters for `GET /flight/routes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
  pub origin:         String,
  pub destination:    String,
  pub departure_date: NaiveDate,
}

impl RouteQuery {
  pub fn new(
    origin: &str,
    destination: &str,
    departure_date: NaiveDate,
  ) -> Result<Self> {
    let origin = origin.trim().to_uppercase();
    let destination = destination.trim().to_uppercase();
    if origin.is_empty() || destination.is_empty() {
      return Err(Error::MissingLocation);
    }
    Ok(Self { origin, destination, departure_date })
  }
}

// ─── NewFlight ───────────────────────────────────────────────────────────────

/// Validated input to `POST /flight`. The flight number obeys the same
/// alphabet as lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
  pub flight_number:  String,
  pub airline_name:   String,
  pub departure_time: DateTime<Utc>,
  pub arrival_time:   DateTime<Utc>,
  pub origin:         String,
  pub destination:    String,
}

impl NewFlight {
  pub fn new(
    flight_number: &str,
    airline_name: &str,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    origin: &str,
    destination: &str,
  ) -> Result<Self> {
    let flight_number = check_flight_number(flight_number)?;
    let origin = origin.trim().to_uppercase();
    let destination = destination.trim().to_uppercase();
    if origin.is_empty() || destination.is_empty() {
      return Err(Error::MissingLocation);
    }
    Ok(Self {
      flight_number,
      airline_name: airline_name.trim().to_string(),
      departure_time,
      arrival_time,
      origin,
      destination,
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn t(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
  }

  #[test]
  fn routes_decode_with_both_lists() {
    let raw = r#"{
      "direct": [{
        "id": 7,
        "flightNumber": "AI202",
        "airlineName": "Air India",
        "departureTime": "2025-08-16T06:00:00Z",
        "arrivalTime": "2025-08-16T08:00:00Z",
        "origin": "DEL",
        "destination": "BOM"
      }],
      "oneStop": [{
        "firstLeg": {
          "flightNumber": "AI101",
          "airlineName": "Air India",
          "departureTime": "2025-08-16T06:00:00Z",
          "arrivalTime": "2025-08-16T07:30:00Z",
          "origin": "DEL",
          "destination": "AMD"
        },
        "secondLeg": {
          "id": "f-22",
          "flightNumber": "6E-55",
          "airlineName": "IndiGo",
          "departureTime": "2025-08-16T09:00:00Z",
          "arrivalTime": "2025-08-16T10:10:00Z",
          "origin": "AMD",
          "destination": "BOM"
        }
      }]
    }"#;
    let routes: FlightRoutes = serde_json::from_str(raw).unwrap();
    assert_eq!(routes.direct.len(), 1);
    assert_eq!(routes.direct[0].id, Some(FlightId::Number(7)));
    assert_eq!(routes.one_stop.len(), 1);
    assert_eq!(
      routes.one_stop[0].second_leg.id,
      Some(FlightId::Text("f-22".into()))
    );
    assert_eq!(routes.one_stop[0].first_leg.destination, "AMD");
  }

  #[test]
  fn routes_decode_with_missing_lists() {
    let routes: FlightRoutes = serde_json::from_str("{}").unwrap();
    assert!(routes.direct.is_empty());
    assert!(routes.one_stop.is_empty());
  }

  #[test]
  fn new_flight_enforces_flight_number_pattern() {
    let dep = t("2025-08-16T06:00:00Z");
    let arr = t("2025-08-16T08:00:00Z");
    assert_eq!(
      NewFlight::new("AI 202", "Air India", dep, arr, "DEL", "BOM"),
      Err(Error::InvalidFlightNumber)
    );
    assert_eq!(
      NewFlight::new("  ", "Air India", dep, arr, "DEL", "BOM"),
      Err(Error::MissingFlightNumber)
    );
    let f =
      NewFlight::new(" AI-202 ", "Air India", dep, arr, "del", "bom").unwrap();
    assert_eq!(f.flight_number, "AI-202");
    assert_eq!(f.origin, "DEL");
  }

  #[test]
  fn route_query_serializes_iso_date() {
    let q = RouteQuery::new(
      "del",
      "bom",
      chrono::NaiveDate::from_ymd_opt(2025, 8, 16).unwrap(),
    )
    .unwrap();
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["origin"], "DEL");
    assert_eq!(json["departureDate"], "2025-08-16");
  }

  #[test]
  fn flight_times_round_trip() {
    let raw = r#"{
      "flightNumber": "AI202",
      "airlineName": "Air India",
      "departureTime": "2025-08-16T06:00:00Z",
      "arrivalTime": "2025-08-16T08:00:00Z",
      "origin": "DEL",
      "destination": "BOM"
    }"#;
    let f: Flight = serde_json::from_str(raw).unwrap();
    assert_eq!(
      f.departure_time,
      Utc.with_ymd_and_hms(2025, 8, 16, 6, 0, 0).unwrap()
    );
    assert!(f.id.is_none());
  }
}
