use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::controller::ProfileDraft;

use super::input::Input;
use super::view::centered;
use super::ProfileField;

fn modal_box(frame: &mut ratatui::Frame, title: &str, height: u16) -> Rect {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let box_area = centered(area, w, height);
    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    inner
}

fn render_field(frame: &mut ratatui::Frame, area: Rect, title: &str, text: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(text.to_string()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(title.to_string()),
        ),
        area,
    );
}

fn place_cursor(frame: &mut ratatui::Frame, area: Rect, input: &Input) {
    let x = (input.cursor as u16).min(area.width.saturating_sub(3));
    frame.set_cursor_position((area.x + 1 + x, area.y + 1));
}

pub(super) fn draw_rename(frame: &mut ratatui::Frame, current: &str, input: &Input) {
    let inner = modal_box(frame, "Rename establishment", 8);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!("Current name: {}", current)),
        parts[0],
    );
    render_field(frame, parts[1], "New name", &input.buf, true);
    place_cursor(frame, parts[1], input);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Enter save  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
        parts[2],
    );
}

pub(super) fn draw_profile(
    frame: &mut ratatui::Frame,
    draft: &ProfileDraft,
    name: &Input,
    password: &Input,
    focus: ProfileField,
) {
    let inner = modal_box(frame, "Edit user", 11);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        parts[0],
        "Display name",
        &name.buf,
        focus == ProfileField::Name,
    );
    render_field(
        frame,
        parts[1],
        "New password (optional)",
        &password.masked(),
        focus == ProfileField::Password,
    );
    match focus {
        ProfileField::Name => place_cursor(frame, parts[0], name),
        ProfileField::Password => place_cursor(frame, parts[1], password),
    }

    let status = if draft.is_saving() {
        Line::styled("Saving…", Style::default().fg(Color::Yellow))
    } else if let Some(err) = draft.error.as_deref() {
        Line::styled(err.to_string(), Style::default().fg(Color::Red))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(status), parts[2]);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Tab switch field  Enter save  Esc close",
            Style::default().fg(Color::DarkGray),
        )),
        parts[3],
    );
}

pub(super) fn draw_alert(frame: &mut ratatui::Frame, message: &str) {
    let inner = modal_box(frame, "Error", 7);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false }),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Enter/Esc dismiss",
            Style::default().fg(Color::DarkGray),
        )),
        parts[1],
    );
}

pub(super) fn draw_navigating(frame: &mut ratatui::Frame, target: &str) {
    let inner = modal_box(frame, "Launcher", 5);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Opening establishment…", Style::default().fg(Color::Cyan)),
            Line::styled(target.to_string(), Style::default().fg(Color::DarkGray)),
        ])
        .wrap(Wrap { trim: true }),
        inner,
    );
}
