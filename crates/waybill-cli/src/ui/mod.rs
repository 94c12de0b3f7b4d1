//! TUI rendering — orchestrates all panes.

pub mod booking_detail;
pub mod flights;
pub mod forms;
pub mod journey_line;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Notice, Screen};

const SCREENS: [Screen; 5] = [
  Screen::Create,
  Screen::Actions,
  Screen::Track,
  Screen::Routes,
  Screen::NewFlight,
];

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let mut spans = vec![Span::styled(
    " waybill ",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  )];
  for (i, screen) in SCREENS.iter().enumerate() {
    let style = if app.screen == *screen {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled(format!(" F{} {} ", i + 1, screen.title()), style));
    spans.push(Span::raw(" "));
  }

  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width: usize = spans.iter().map(|s| s.content.len()).sum();
  let pad = (area.width as usize)
    .saturating_sub(left_width)
    .saturating_sub(right.content.len());
  spans.push(Span::raw(" ".repeat(pad)));
  spans.push(right);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  match app.screen {
    Screen::Create => {
      forms::draw(f, area, " New Booking ", &app.create);
    }
    Screen::Actions => {
      forms::draw(f, area, " Update Booking Status ", &app.actions);
    }
    Screen::Track => {
      let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
      forms::draw(f, rows[0], " Track Booking ", &app.track.form);
      booking_detail::draw(f, rows[1], &app.track);
    }
    Screen::Routes => {
      let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
      forms::draw(f, rows[0], " Route Search ", &app.routes.form);
      flights::draw_routes(f, rows[1], &app.routes);
    }
    Screen::NewFlight => {
      let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);
      forms::draw(f, rows[0], " Create New Flight ", &app.new_flight.form);
      flights::draw_created(f, rows[1], app.new_flight.created.as_ref());
    }
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let hints = match app.screen {
    Screen::Create => "↑↓/Tab fields  Enter create booking  F1–F5 screens  Ctrl-C quit",
    Screen::Actions => "↑↓/Tab fields and buttons  Enter activate  Esc clear message  Ctrl-C quit",
    Screen::Track => "Type a reference  Enter fetch  ↑↓ scroll timeline  Ctrl-C quit",
    Screen::Routes => "↑↓/Tab fields  Enter search routes  Ctrl-C quit",
    Screen::NewFlight => "↑↓/Tab fields  Enter create flight  Ctrl-C quit",
  };

  let mode_span = Span::styled(
    format!(" {} ", app.screen.title().to_uppercase()),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let message_span = match &app.notice {
    Some(Notice::Error(m)) => {
      Span::styled(format!("  {m}"), Style::default().fg(Color::Red))
    }
    Some(Notice::Info(m)) => {
      Span::styled(format!("  {m}"), Style::default().fg(Color::Green))
    }
    None => {
      Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray))
    }
  };

  let line = Line::from(vec![mode_span, message_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
