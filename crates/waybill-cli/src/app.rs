//! Application state machine and event dispatcher.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use waybill_client::ApiClient;
use waybill_core::{
  booking::{Booking, NewBooking},
  flight::{Flight, FlightRoutes, NewFlight, RouteQuery},
  journey::{TimelineEntry, Waypoint, build_timeline, build_waypoints},
  lifecycle::{TransitionKind, validate_transition},
};

// ─── Screen ───────────────────────────────────────────────────────────────────

/// The portal's surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Create a new booking.
  Create,
  /// Depart / arrive / cancel quick actions.
  Actions,
  /// Look up a booking and view its journey and timeline.
  Track,
  /// Search direct and one-stop routes.
  Routes,
  /// Register a new flight.
  NewFlight,
}

impl Screen {
  pub fn title(&self) -> &'static str {
    match self {
      Self::Create => "Create",
      Self::Actions => "Actions",
      Self::Track => "Track",
      Self::Routes => "Routes",
      Self::NewFlight => "New Flight",
    }
  }
}

// ─── Forms ────────────────────────────────────────────────────────────────────

/// A single text input.
pub struct Field {
  pub label:       &'static str,
  pub value:       String,
  pub placeholder: &'static str,
}

/// An ordered set of inputs plus optional action buttons, with one focus
/// position cycling over all of them.
pub struct Form {
  pub fields:  Vec<Field>,
  pub buttons: Vec<&'static str>,
  pub focus:   usize,
}

impl Form {
  pub fn new(fields: &[(&'static str, &'static str)]) -> Self {
    Self {
      fields:  fields
        .iter()
        .copied()
        .map(|(label, placeholder)| Field {
          label,
          value: String::new(),
          placeholder,
        })
        .collect(),
      buttons: Vec::new(),
      focus:   0,
    }
  }

  pub fn with_buttons(mut self, buttons: &[&'static str]) -> Self {
    self.buttons = buttons.to_vec();
    self
  }

  fn stops(&self) -> usize {
    self.fields.len() + self.buttons.len()
  }

  pub fn next(&mut self) {
    self.focus = (self.focus + 1) % self.stops();
  }

  pub fn prev(&mut self) {
    self.focus = (self.focus + self.stops() - 1) % self.stops();
  }

  /// Index into `buttons` when a button is focused.
  pub fn focused_button(&self) -> Option<usize> {
    self.focus.checked_sub(self.fields.len())
  }

  pub fn value(&self, index: usize) -> &str {
    &self.fields[index].value
  }

  pub fn insert(&mut self, c: char) {
    if let Some(field) = self.fields.get_mut(self.focus) {
      field.value.push(c);
    }
  }

  pub fn backspace(&mut self) {
    if let Some(field) = self.fields.get_mut(self.focus) {
      field.value.pop();
    }
  }
}

// ─── Per-screen state ─────────────────────────────────────────────────────────

/// The tracking view: a reference query plus the fetched booking and its two
/// derived read models.
pub struct TrackView {
  pub form:      Form,
  pub booking:   Option<Booking>,
  pub waypoints: Vec<Waypoint>,
  pub timeline:  Vec<TimelineEntry>,
  pub scroll:    usize,
}

/// The route-search view.
pub struct RoutesView {
  pub form:   Form,
  pub routes: Option<FlightRoutes>,
}

/// The flight-registration view.
pub struct NewFlightView {
  pub form:    Form,
  pub created: Option<Flight>,
}

/// A one-line status-bar notice.
pub enum Notice {
  Info(String),
  Error(String),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen:     Screen,
  pub create:     Form,
  pub actions:    Form,
  pub track:      TrackView,
  pub routes:     RoutesView,
  pub new_flight: NewFlightView,
  pub notice:     Option<Notice>,
  /// True while a request is in flight; submissions are ignored until the
  /// pending call resolves (single-flight rule).
  pub busy:       bool,
  pub client:     ApiClient,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    let mut create = Form::new(&[
      ("Reference ID", "e.g., BKG-1001"),
      ("Origin", "e.g., DEL"),
      ("Destination", "e.g., BOM"),
      ("Pieces", "1"),
      ("Weight (kg)", "1"),
    ]);
    create.fields[3].value = "1".into();
    create.fields[4].value = "1".into();

    Self {
      screen: Screen::Create,
      create,
      actions: Form::new(&[
        ("Reference ID", "Enter booking reference"),
        ("Flight Number", "e.g., AI202 (required for Depart/Arrive)"),
      ])
      .with_buttons(&[
        "Mark as Departed",
        "Mark as Arrived",
        "Cancel Booking",
      ]),
      track: TrackView {
        form:      Form::new(&[(
          "Reference ID",
          "Enter Booking Reference ID",
        )]),
        booking:   None,
        waypoints: Vec::new(),
        timeline:  Vec::new(),
        scroll:    0,
      },
      routes: RoutesView {
        form:   Form::new(&[
          ("Origin", "e.g., DEL"),
          ("Destination", "e.g., BOM"),
          ("Departure Date", "YYYY-MM-DD"),
        ]),
        routes: None,
      },
      new_flight: NewFlightView {
        form:    Form::new(&[
          ("Flight Number", "AI-101"),
          ("Airline", "Air India"),
          ("Departure Time", "YYYY-MM-DD HH:MM (UTC)"),
          ("Arrival Time", "YYYY-MM-DD HH:MM (UTC)"),
          ("Origin", "DEL"),
          ("Destination", "BOM"),
        ]),
        created: None,
      },
      notice: None,
      busy: false,
      client,
    }
  }

  // ── Notices ───────────────────────────────────────────────────────────────

  fn info(&mut self, message: impl Into<String>) {
    self.notice = Some(Notice::Info(message.into()));
  }

  fn error(&mut self, message: impl Into<String>) {
    self.notice = Some(Notice::Error(message.into()));
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return Ok(false);
    }

    match key.code {
      KeyCode::F(1) => self.screen = Screen::Create,
      KeyCode::F(2) => self.screen = Screen::Actions,
      KeyCode::F(3) => self.screen = Screen::Track,
      KeyCode::F(4) => self.screen = Screen::Routes,
      KeyCode::F(5) => self.screen = Screen::NewFlight,
      KeyCode::Esc => self.notice = None,
      _ => match self.screen {
        Screen::Create => self.handle_create_key(key).await,
        Screen::Actions => self.handle_actions_key(key).await,
        Screen::Track => self.handle_track_key(key).await,
        Screen::Routes => self.handle_routes_key(key).await,
        Screen::NewFlight => self.handle_new_flight_key(key).await,
      },
    }
    Ok(true)
  }

  async fn handle_create_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Tab => self.create.next(),
      KeyCode::Up | KeyCode::BackTab => self.create.prev(),
      KeyCode::Backspace => self.create.backspace(),
      KeyCode::Char(c) => self.create.insert(c),
      KeyCode::Enter => self.submit_create().await,
      _ => {}
    }
  }

  async fn handle_actions_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Tab => self.actions.next(),
      KeyCode::Up | KeyCode::BackTab => self.actions.prev(),
      KeyCode::Backspace => self.actions.backspace(),
      KeyCode::Char(c) => self.actions.insert(c),
      KeyCode::Enter => match self.actions.focused_button() {
        Some(0) => self.submit_transition(TransitionKind::Depart).await,
        Some(1) => self.submit_transition(TransitionKind::Arrive).await,
        Some(2) => self.submit_transition(TransitionKind::Cancel).await,
        _ => self.actions.next(),
      },
      _ => {}
    }
  }

  async fn handle_track_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Backspace => self.track.form.backspace(),
      KeyCode::Char(c) => self.track.form.insert(c),
      KeyCode::Enter => self.fetch_booking().await,
      KeyCode::Down => {
        if self.track.scroll + 1 < self.timeline_rows() {
          self.track.scroll += 1;
        }
      }
      KeyCode::Up => {
        self.track.scroll = self.track.scroll.saturating_sub(1);
      }
      _ => {}
    }
  }

  async fn handle_routes_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Tab => self.routes.form.next(),
      KeyCode::Up | KeyCode::BackTab => self.routes.form.prev(),
      KeyCode::Backspace => self.routes.form.backspace(),
      KeyCode::Char(c) => self.routes.form.insert(c),
      KeyCode::Enter => self.submit_route_search().await,
      _ => {}
    }
  }

  async fn handle_new_flight_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Tab => self.new_flight.form.next(),
      KeyCode::Up | KeyCode::BackTab => self.new_flight.form.prev(),
      KeyCode::Backspace => self.new_flight.form.backspace(),
      KeyCode::Char(c) => self.new_flight.form.insert(c),
      KeyCode::Enter => self.submit_new_flight().await,
      _ => {}
    }
  }

  fn timeline_rows(&self) -> usize {
    self.track.timeline.len() * 3
  }

  // ── Submissions ───────────────────────────────────────────────────────────

  async fn submit_create(&mut self) {
    if self.busy {
      return;
    }
    self.notice = None;

    let Ok(pieces) = self.create.value(3).trim().parse::<u32>() else {
      self.error("pieces must be a whole number");
      return;
    };
    let Ok(weight_kg) = self.create.value(4).trim().parse::<f64>() else {
      self.error("weight must be a number");
      return;
    };
    let booking = match NewBooking::new(
      self.create.value(0),
      self.create.value(1),
      self.create.value(2),
      pieces,
      weight_kg,
    ) {
      Ok(b) => b,
      Err(e) => {
        self.error(e.to_string());
        return;
      }
    };

    tracing::info!(ref_id = %booking.ref_id, "booking:create:submit");
    self.busy = true;
    let result = self.client.create_booking(&booking).await;
    self.busy = false;

    match result {
      Ok(created) => {
        self.info(format!("Booking {} created", created.ref_id));
        self.open_track(created);
      }
      Err(e) => self.error(e.to_string()),
    }
  }

  async fn submit_transition(&mut self, kind: TransitionKind) {
    if self.busy {
      return;
    }
    self.notice = None;

    // Pre-flight validation: a failure here blocks submission entirely and
    // no network call is issued.
    let request = match validate_transition(
      kind,
      self.actions.value(0),
      Some(self.actions.value(1)),
    ) {
      Ok(r) => r,
      Err(e) => {
        self.error(e.to_string());
        return;
      }
    };

    tracing::info!(ref_id = %request.ref_id, kind = %kind, "booking:transition:submit");
    self.busy = true;
    let result = self.client.transition(&request).await;
    self.busy = false;

    match result {
      Ok(_) => {
        self.info(format!("Booking {kind} action completed successfully"));
      }
      Err(e) => self.error(e.to_string()),
    }
  }

  async fn fetch_booking(&mut self) {
    if self.busy {
      return;
    }
    self.notice = None;

    let ref_id = self.track.form.value(0).trim().to_string();
    if ref_id.is_empty() {
      self.error(waybill_core::Error::MissingReference.to_string());
      return;
    }

    tracing::info!(ref_id = %ref_id, "booking:detail:fetch");
    self.busy = true;
    let result = self.client.get_booking(&ref_id).await;
    self.busy = false;

    match result {
      Ok(booking) => self.set_booking(booking),
      Err(e) => self.error(e.to_string()),
    }
  }

  async fn submit_route_search(&mut self) {
    if self.busy {
      return;
    }
    self.notice = None;

    let Some(date) = parse_date(self.routes.form.value(2)) else {
      self.error("departure date must be YYYY-MM-DD");
      return;
    };
    let query = match RouteQuery::new(
      self.routes.form.value(0),
      self.routes.form.value(1),
      date,
    ) {
      Ok(q) => q,
      Err(e) => {
        self.error(e.to_string());
        return;
      }
    };

    tracing::info!(origin = %query.origin, destination = %query.destination, "flights:routes:fetch");
    self.busy = true;
    let result = self.client.find_routes(&query).await;
    self.busy = false;

    match result {
      Ok(routes) => {
        let found = routes.direct.len() + routes.one_stop.len();
        self.routes.routes = Some(routes);
        self.info(format!("{found} routing option(s) found"));
      }
      Err(waybill_client::Error::Backend { status: 404, .. }) => {
        self.routes.routes = Some(FlightRoutes::default());
        self.error(
          "No routes found for the given criteria. Try different values.",
        );
      }
      Err(e) => self.error(e.to_string()),
    }
  }

  async fn submit_new_flight(&mut self) {
    if self.busy {
      return;
    }
    self.notice = None;

    let Some(departure) = parse_datetime_utc(self.new_flight.form.value(2))
    else {
      self.error("departure time must be YYYY-MM-DD HH:MM");
      return;
    };
    let Some(arrival) = parse_datetime_utc(self.new_flight.form.value(3))
    else {
      self.error("arrival time must be YYYY-MM-DD HH:MM");
      return;
    };
    let flight = match NewFlight::new(
      self.new_flight.form.value(0),
      self.new_flight.form.value(1),
      departure,
      arrival,
      self.new_flight.form.value(4),
      self.new_flight.form.value(5),
    ) {
      Ok(f) => f,
      Err(e) => {
        self.error(e.to_string());
        return;
      }
    };

    tracing::info!(flight_number = %flight.flight_number, "flights:create:submit");
    self.busy = true;
    let result = self.client.create_flight(&flight).await;
    self.busy = false;

    match result {
      Ok(created) => {
        self.info("Flight created successfully");
        self.new_flight.created = Some(created);
      }
      Err(e) => self.error(e.to_string()),
    }
  }

  // ── Derived state ─────────────────────────────────────────────────────────

  /// Store a fetched booking and rebuild both derived read models.
  fn set_booking(&mut self, booking: Booking) {
    self.track.waypoints = build_waypoints(
      &booking.origin,
      &booking.destination,
      &booking.events,
    );
    self.track.timeline = build_timeline(&booking.events);
    self.track.scroll = 0;
    self.track.booking = Some(booking);
  }

  /// Jump to the tracking view for a just-created booking.
  fn open_track(&mut self, booking: Booking) {
    self.track.form.fields[0].value = booking.ref_id.clone();
    self.set_booking(booking);
    self.screen = Screen::Track;
  }
}

// ─── Input parsing ────────────────────────────────────────────────────────────

fn parse_date(raw: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`, or a full RFC 3339
/// instant; the short forms are taken as UTC.
fn parse_datetime_utc(raw: &str) -> Option<DateTime<Utc>> {
  let raw = raw.trim();
  for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
      return Some(naive.and_utc());
    }
  }
  raw.parse().ok()
}
