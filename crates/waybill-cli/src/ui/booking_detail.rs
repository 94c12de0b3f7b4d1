//! Booking detail pane — status badge, route summary, journey line, timeline.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use waybill_core::booking::BookingStatus;

use crate::{app::TrackView, ui::journey_line};

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the detail pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, track: &TrackView) {
  let Some(booking) = &track.booking else {
    let block = Block::default()
      .title(" Booking ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Enter a reference ID and press Enter.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let block = Block::default()
    .title(format!(" Booking #{} ", booking.ref_id))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // summary
      Constraint::Length(2), // journey line
      Constraint::Length(1), // timeline header
      Constraint::Min(0),    // timeline
    ])
    .split(inner);

  let summary = vec![
    Line::from(vec![
      Span::raw("Status   "),
      Span::styled(
        format!(" {} ", booking.status),
        status_style(booking.status),
      ),
    ]),
    Line::from(format!(
      "Route    {} → {}",
      booking.origin, booking.destination
    )),
    Line::from(format!(
      "Pieces   {}    Weight   {} kg",
      booking.pieces, booking.weight_kg
    )),
  ];
  f.render_widget(Paragraph::new(summary), rows[0]);

  journey_line::draw(f, rows[1], &track.waypoints);

  f.render_widget(
    Paragraph::new(Span::styled(
      "Timeline",
      Style::default().add_modifier(Modifier::BOLD),
    )),
    rows[2],
  );

  let mut entries: Vec<Line> = Vec::new();
  for entry in &track.timeline {
    entries.push(Line::from(vec![
      Span::styled("● ", Style::default().fg(Color::Cyan)),
      Span::styled(
        entry.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]));
    if !entry.subtitle.is_empty() {
      entries.push(Line::from(Span::styled(
        format!("  {}", entry.subtitle),
        Style::default().fg(Color::Gray),
      )));
    }
    if !entry.timestamp.is_empty() {
      entries.push(Line::from(Span::styled(
        format!("  {}", entry.timestamp),
        Style::default().fg(Color::DarkGray),
      )));
    }
  }
  if entries.is_empty() {
    entries.push(Line::from(Span::styled(
      "No tracking events yet.",
      Style::default().fg(Color::DarkGray),
    )));
  }

  f.render_widget(
    Paragraph::new(entries).scroll((track.scroll as u16, 0)),
    rows[3],
  );
}

// ─── Status badge ─────────────────────────────────────────────────────────────

fn status_style(status: BookingStatus) -> Style {
  let fg = match status {
    BookingStatus::Pending => Color::Yellow,
    BookingStatus::Confirmed | BookingStatus::Arrived => Color::Green,
    BookingStatus::Departed => Color::Blue,
    BookingStatus::Cancelled => Color::Red,
    BookingStatus::Unknown => Color::Gray,
  };
  Style::default().fg(fg).add_modifier(Modifier::BOLD)
}
