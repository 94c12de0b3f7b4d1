//! Journey line — the origin → destination strip with one marker per
//! waypoint, placed by the core's relative positions.

use std::collections::BTreeMap;

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::Paragraph,
};
use waybill_core::journey::Waypoint;

/// Render the waypoint strip into `area`: filled markers for the endpoints,
/// hollow markers for intermediate events, endpoint labels underneath.
pub fn draw(f: &mut Frame, area: Rect, waypoints: &[Waypoint]) {
  if area.width < 4 || area.height < 1 || waypoints.is_empty() {
    return;
  }
  let width = area.width as usize;

  // Column → is_endpoint; an endpoint wins when markers collide.
  let mut markers: BTreeMap<usize, bool> = BTreeMap::new();
  for wp in waypoints {
    let col = (wp.position * (width - 1) as f64).round() as usize;
    let marker = markers.entry(col.min(width - 1)).or_insert(false);
    *marker |= wp.is_endpoint;
  }

  let mut strip: Vec<Span> = Vec::with_capacity(width);
  for col in 0..width {
    strip.push(match markers.get(&col) {
      Some(true) => Span::styled(
        "●",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Some(false) => Span::styled("○", Style::default().fg(Color::Cyan)),
      None => Span::styled("─", Style::default().fg(Color::DarkGray)),
    });
  }

  let mut lines = vec![Line::from(strip)];
  if area.height >= 2
    && let (Some(origin), Some(destination)) =
      (waypoints.first(), waypoints.last())
  {
    let pad =
      width.saturating_sub(origin.label.len() + destination.label.len());
    lines.push(Line::from(vec![
      Span::styled(
        origin.label.clone(),
        Style::default().add_modifier(Modifier::BOLD),
      ),
      Span::raw(" ".repeat(pad)),
      Span::styled(
        destination.label.clone(),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]));
  }

  f.render_widget(Paragraph::new(lines), area);
}
