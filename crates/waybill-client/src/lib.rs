//! Async HTTP client for the external booking/flight backend.
//!
//! Thin typed plumbing: every method validates nothing itself — callers hand
//! it already-validated `waybill-core` types — and maps backend failures into
//! [`Error::Backend`] with the backend's own message where one exists.
//! Requests and responses are logged at debug level.

pub mod error;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use waybill_core::{
  booking::{Booking, NewBooking},
  flight::{Flight, FlightRoutes, NewFlight, RouteQuery},
  lifecycle::TransitionRequest,
};

pub use error::{Error, Result};

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async client for the booking backend's JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct ApiClient {
  client: Client,
  base:   Url,
}

impl ApiClient {
  pub fn new(config: &ApiConfig) -> Result<Self> {
    let base = Url::parse(config.base_url.trim_end_matches('/'))
      .map_err(|e| Error::InvalidBaseUrl(e.to_string()))?;
    if base.cannot_be_a_base() {
      return Err(Error::InvalidBaseUrl(config.base_url.clone()));
    }
    let client = Client::builder()
      .timeout(Duration::from_secs(15))
      .build()?;
    Ok(Self { client, base })
  }

  /// Append path segments to the base URL, percent-encoding each one.
  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base.clone();
    if let Ok(mut parts) = url.path_segments_mut() {
      parts.pop_if_empty().extend(segments);
    }
    url
  }

  // ── Bookings ──────────────────────────────────────────────────────────────

  /// `POST /bookings` — returns the created booking.
  pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
    let url = self.endpoint(&["bookings"]);
    tracing::debug!(%url, ref_id = %booking.ref_id, "api:request");
    let resp = self.client.post(url.clone()).json(booking).send().await?;
    decode(&url, resp).await
  }

  /// `GET /bookings/{refId}`
  pub async fn get_booking(&self, ref_id: &str) -> Result<Booking> {
    let url = self.endpoint(&["bookings", ref_id]);
    tracing::debug!(%url, "api:request");
    let resp = self.client.get(url.clone()).send().await?;
    decode(&url, resp).await
  }

  /// `PATCH /bookings/{refId}/{depart|arrive|cancel}` with `flightNumber`
  /// as a query parameter where the transition requires one.
  ///
  /// The success payload is backend-defined; it is passed through opaquely.
  pub async fn transition(
    &self,
    request: &TransitionRequest,
  ) -> Result<serde_json::Value> {
    let url =
      self.endpoint(&["bookings", &request.ref_id, request.kind.segment()]);
    tracing::debug!(%url, kind = %request.kind, "api:request");
    let mut req = self.client.patch(url.clone());
    if let Some(fno) = &request.flight_number {
      req = req.query(&[("flightNumber", fno.as_str())]);
    }
    let resp = req.send().await?;
    decode(&url, resp).await
  }

  // ── Flights ───────────────────────────────────────────────────────────────

  /// `POST /flight` — returns the created flight.
  pub async fn create_flight(&self, flight: &NewFlight) -> Result<Flight> {
    let url = self.endpoint(&["flight"]);
    tracing::debug!(%url, flight_number = %flight.flight_number, "api:request");
    let resp = self.client.post(url.clone()).json(flight).send().await?;
    decode(&url, resp).await
  }

  /// `GET /flight/routes?origin&destination&departureDate`
  pub async fn find_routes(&self, query: &RouteQuery) -> Result<FlightRoutes> {
    let url = self.endpoint(&["flight", "routes"]);
    tracing::debug!(%url, origin = %query.origin, destination = %query.destination, "api:request");
    let resp = self.client.get(url.clone()).query(query).send().await?;
    decode(&url, resp).await
  }
}

// ─── Response handling ───────────────────────────────────────────────────────

async fn decode<T: DeserializeOwned>(
  url: &Url,
  resp: reqwest::Response,
) -> Result<T> {
  let status = resp.status();
  if !status.is_success() {
    let body = resp.text().await.unwrap_or_default();
    let message = backend_message(status, &body);
    tracing::error!(%url, status = status.as_u16(), %message, "api:error");
    return Err(Error::Backend { status: status.as_u16(), message });
  }
  tracing::debug!(%url, status = status.as_u16(), "api:response");
  Ok(resp.json().await?)
}

/// Extract a user-facing message from an error response body: a bare JSON
/// string, the `message` field of a JSON object, the raw text, or a generic
/// fallback — in that order.
fn backend_message(status: StatusCode, body: &str) -> String {
  match serde_json::from_str::<serde_json::Value>(body) {
    Ok(serde_json::Value::String(s)) => s,
    Ok(value) => value
      .get("message")
      .and_then(|m| m.as_str())
      .map(str::to_string)
      .unwrap_or_else(|| format!("request failed with status {status}")),
    Err(_) => {
      let text = body.trim();
      if text.is_empty() {
        format!("request failed with status {status}")
      } else {
        text.to_string()
      }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base: &str) -> ApiClient {
    ApiClient::new(&ApiConfig { base_url: base.into() }).unwrap()
  }

  // ── URL construction
  // ────────────────────────────────────────────────────

  #[test]
  fn endpoint_joins_segments() {
    let c = client("http://localhost:8080");
    let url = c.endpoint(&["bookings", "BKG1", "depart"]);
    assert_eq!(url.as_str(), "http://localhost:8080/bookings/BKG1/depart");
  }

  #[test]
  fn endpoint_tolerates_trailing_slash_and_base_path() {
    let c = client("http://localhost:8080/api/");
    let url = c.endpoint(&["bookings"]);
    assert_eq!(url.as_str(), "http://localhost:8080/api/bookings");
  }

  #[test]
  fn endpoint_percent_encodes_reference() {
    let c = client("http://localhost:8080");
    let url = c.endpoint(&["bookings", "BKG 1/x"]);
    assert_eq!(url.as_str(), "http://localhost:8080/bookings/BKG%201%2Fx");
  }

  #[test]
  fn bad_base_url_is_rejected() {
    let err = ApiClient::new(&ApiConfig { base_url: "not a url".into() });
    assert!(matches!(err, Err(Error::InvalidBaseUrl(_))));
  }

  // ── Backend message extraction
  // ──────────────────────────────────────────

  #[test]
  fn message_from_bare_json_string() {
    let m = backend_message(StatusCode::CONFLICT, r#""already departed""#);
    assert_eq!(m, "already departed");
  }

  #[test]
  fn message_from_object_field() {
    let m = backend_message(
      StatusCode::UNPROCESSABLE_ENTITY,
      r#"{"message": "transition not allowed from ARRIVED"}"#,
    );
    assert_eq!(m, "transition not allowed from ARRIVED");
  }

  #[test]
  fn object_without_message_falls_back_to_generic() {
    let m = backend_message(StatusCode::BAD_REQUEST, r#"{"code": 42}"#);
    assert_eq!(m, "request failed with status 400 Bad Request");
  }

  #[test]
  fn plain_text_body_is_used_verbatim() {
    let m = backend_message(StatusCode::NOT_FOUND, "booking not found\n");
    assert_eq!(m, "booking not found");
  }

  #[test]
  fn empty_body_falls_back_to_generic() {
    let m = backend_message(StatusCode::INTERNAL_SERVER_ERROR, "");
    assert_eq!(m, "request failed with status 500 Internal Server Error");
  }
}
