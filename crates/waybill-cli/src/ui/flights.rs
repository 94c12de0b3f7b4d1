//! Routes pane — direct and one-stop options — and the created-flight card.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use waybill_core::flight::Flight;

use crate::app::RoutesView;

// ─── Route results ────────────────────────────────────────────────────────────

/// Render the route-search results into `area`.
pub fn draw_routes(f: &mut Frame, area: Rect, view: &RoutesView) {
  let block = Block::default()
    .title(" Available Routes ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(routes) = &view.routes else {
    f.render_widget(
      Paragraph::new("Search by origin, destination, and departure date.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let mut lines: Vec<Line> = Vec::new();

  lines.push(section("Direct flights"));
  if routes.direct.is_empty() {
    lines.push(dim("No direct flights"));
  } else {
    for flight in &routes.direct {
      lines.extend(flight_lines(flight));
    }
  }

  lines.push(Line::from(""));
  lines.push(section("One-stop flights"));
  if routes.one_stop.is_empty() {
    lines.push(dim("No one-stop options"));
  } else {
    for option in &routes.one_stop {
      lines.extend(flight_lines(&option.first_leg));
      lines.extend(flight_lines(&option.second_leg));
      lines.push(dim(&format!("  via {}", option.first_leg.destination)));
      lines.push(Line::from(""));
    }
  }

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Created-flight card ──────────────────────────────────────────────────────

/// Render the confirmation card after a successful flight registration.
pub fn draw_created(f: &mut Frame, area: Rect, created: Option<&Flight>) {
  let block = Block::default()
    .title(" Created ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(flight) = created else {
    f.render_widget(
      Paragraph::new("Fill in the schedule above and press Enter.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let mut lines = vec![Line::from(Span::styled(
    "Flight created successfully",
    Style::default()
      .fg(Color::Green)
      .add_modifier(Modifier::BOLD),
  ))];
  if let Some(id) = &flight.id {
    lines.push(dim(&format!("ID: {id}")));
  }
  lines.extend(flight_lines(flight));

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Shared line builders ─────────────────────────────────────────────────────

fn section(title: &str) -> Line<'static> {
  Line::from(Span::styled(
    title.to_string(),
    Style::default().add_modifier(Modifier::BOLD),
  ))
}

fn dim(text: &str) -> Line<'static> {
  Line::from(Span::styled(
    text.to_string(),
    Style::default().fg(Color::DarkGray),
  ))
}

fn flight_lines(flight: &Flight) -> Vec<Line<'static>> {
  let schedule = format!(
    "{} → {}",
    flight.departure_time.format("%Y-%m-%d %H:%M"),
    flight.arrival_time.format("%Y-%m-%d %H:%M")
  );
  vec![
    Line::from(vec![
      Span::styled(
        format!("{} • {}", flight.flight_number, flight.airline_name),
        Style::default().add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(schedule, Style::default().fg(Color::Gray)),
    ]),
    Line::from(Span::styled(
      format!("  {} ●──────● {}", flight.origin, flight.destination),
      Style::default().fg(Color::Cyan),
    )),
  ]
}
