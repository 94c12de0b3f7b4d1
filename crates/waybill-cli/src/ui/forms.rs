//! Shared form rendering: labelled inputs plus optional action buttons.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::Form;

/// Render `form` inside a titled block. The focused input gets a highlighted
/// label and a cursor bar; empty inputs show their placeholder.
pub fn draw(f: &mut Frame, area: Rect, title: &str, form: &Form) {
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();

  for (i, field) in form.fields.iter().enumerate() {
    let focused = form.focus == i;
    let label_style = if focused {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };

    let mut spans = vec![Span::styled(
      format!("{:<16}", field.label),
      label_style,
    )];
    if field.value.is_empty() {
      spans.push(Span::styled(
        field.placeholder,
        Style::default().fg(Color::DarkGray),
      ));
    } else {
      spans.push(Span::raw(field.value.clone()));
    }
    if focused {
      spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(spans));
  }

  if !form.buttons.is_empty() {
    lines.push(Line::from(""));
    let mut spans: Vec<Span> = Vec::new();
    for (i, label) in form.buttons.iter().enumerate() {
      let style = if form.focused_button() == Some(i) {
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::Cyan)
      };
      spans.push(Span::styled(format!("[ {label} ]"), style));
      spans.push(Span::raw("  "));
    }
    lines.push(Line::from(spans));
  }

  f.render_widget(Paragraph::new(lines), inner);
}
