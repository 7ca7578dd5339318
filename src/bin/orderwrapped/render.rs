//! Frame layout: segmented progress bar, centered scene body, scene dots,
//! and the clickable control row.

use std::time::Instant;

use orderwrapped::sequencer::PlayState;
use orderwrapped::Slideshow;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::buttons::{ButtonAction, ButtonRegistry};
use crate::scenes_render::scene_lines;
use crate::theme::{self, BAR_EMPTY, BAR_FILLED, DIMMED};

const BUTTON_GAP: u16 = 3;

pub(crate) fn draw(
    frame: &mut Frame,
    show: &Slideshow,
    buttons: &mut ButtonRegistry,
    now: Instant,
) {
    buttons.clear();
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress segments
            Constraint::Min(1),    // scene body
            Constraint::Length(1), // scene dots
            Constraint::Length(1), // controls
        ])
        .split(area);

    frame.render_widget(progress_bar(show, now, rows[0].width), rows[0]);
    draw_body(frame, show, rows[1]);
    frame.render_widget(
        Paragraph::new(dots_line(show)).alignment(Alignment::Center),
        rows[2],
    );
    draw_controls(frame, show, buttons, rows[3]);
}

/// One segment per scene; past scenes full, the current one fills with
/// played time.
fn progress_bar(show: &Slideshow, now: Instant, width: u16) -> Paragraph<'static> {
    let count = show.scene_count();
    let current = show.current_index();
    let percent = show.progress_percent(now);
    // Leave a one-column gap between segments.
    let usable = (width as usize).saturating_sub(count.saturating_sub(1) + 2);
    let segment = (usable / count.max(1)).max(1);

    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for index in 0..count {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let filled = if index < current {
            segment
        } else if index == current {
            match show.play_state() {
                PlayState::Ended => segment,
                _ => (segment as f64 * percent / 100.0).round() as usize,
            }
        } else {
            0
        };
        if filled > 0 {
            spans.push(Span::styled(
                "━".repeat(filled),
                Style::default().fg(BAR_FILLED),
            ));
        }
        if filled < segment {
            spans.push(Span::styled(
                "━".repeat(segment - filled),
                Style::default().fg(BAR_EMPTY),
            ));
        }
    }
    Paragraph::new(Line::from(spans))
}

fn draw_body(frame: &mut Frame, show: &Slideshow, area: Rect) {
    let scene = show.scene();
    let lines = scene_lines(scene, show.steps(), show.vibe());
    // Vertically center the block of lines within the body area.
    let height = lines.len().min(area.height as usize) as u16;
    let top = area.y + (area.height.saturating_sub(height)) / 2;
    let centered = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: height.max(1),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn dots_line(show: &Slideshow) -> Line<'static> {
    let accent = theme::scene_accent(&show.scene().kind);
    let mut spans: Vec<Span<'static>> = Vec::new();
    for index in 0..show.scene_count() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == show.current_index() {
            spans.push(Span::styled("●", Style::default().fg(accent)));
        } else {
            spans.push(Span::styled("·", Style::default().fg(DIMMED)));
        }
    }
    Line::from(spans)
}

/// Lay out the control row centered and register each enabled button's
/// region. Disabled controls are drawn dim and never registered, so taps on
/// them are inert.
fn draw_controls(frame: &mut Frame, show: &Slideshow, buttons: &mut ButtonRegistry, area: Rect) {
    let ended = show.play_state() == PlayState::Ended;
    let toggle_label = match show.play_state() {
        PlayState::Playing => "⏸ pause",
        PlayState::Paused => "▶ play",
        PlayState::Ended => "▶ play",
    };
    let controls: [(&str, ButtonAction, bool); 3] = [
        ("‹ prev", ButtonAction::Previous, show.current_index() > 0),
        (toggle_label, ButtonAction::TogglePlay, !ended),
        (
            "next ›",
            ButtonAction::Next,
            show.current_index() + 1 < show.scene_count(),
        ),
    ];

    let total: u16 = controls
        .iter()
        .map(|(label, _, _)| label.width() as u16)
        .sum::<u16>()
        + BUTTON_GAP * 2;
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut spans: Vec<Span<'static>> = Vec::new();
    // Left padding so the spans land at the registered coordinates.
    spans.push(Span::raw(" ".repeat((x - area.x) as usize)));
    for (index, (label, action, enabled)) in controls.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
            x += BUTTON_GAP;
        }
        let width = label.width() as u16;
        if *enabled {
            buttons.register(x, x + width.saturating_sub(1), area.y, *action);
            spans.push(Span::styled(
                label.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label.to_string(), Style::default().fg(DIMMED)));
        }
        x += width;
    }
    if show.play_state() == PlayState::Paused {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "PAUSED",
            Style::default().fg(theme::ACCENT_YELLOW),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
