//! Panel content builders
//!
//! Pure functions from component state to display lines, kept free of
//! terminal handles so they can be tested directly.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::quotes::QuoteBoard;
use crate::tasks::Task;
use crate::weather::WeatherSnapshot;

use super::app::Mode;
use super::palette::Palette;
use super::PanelState;

/// Lines for the weather panel
pub fn weather_lines(state: &PanelState<WeatherSnapshot>, palette: &Palette) -> Vec<Line<'static>> {
    match state {
        PanelState::Loading => vec![muted_line("Loading weather data...", palette)],
        PanelState::Failed => vec![
            Line::from(Span::styled(
                "⚠️",
                Style::default().fg(palette.error),
            )),
            Line::from(Span::styled(
                "Could not load weather data",
                Style::default().fg(palette.error),
            )),
            muted_line("Check the log for details", palette),
        ],
        PanelState::Ready(snapshot) => ready_weather_lines(snapshot, palette),
    }
}

fn ready_weather_lines(snapshot: &WeatherSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{}  {}",
                snapshot.icon_label(),
                snapshot.temperature_label()
            ),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            snapshot.condition_label().to_string(),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            snapshot.location_label().to_string(),
            Style::default().fg(palette.muted),
        )),
        Line::default(),
        detail_line("💧 Humidity", snapshot.humidity_label(), palette),
        detail_line("🌬️ Wind", snapshot.wind_label(), palette),
        detail_line("🌡️ Feels like", snapshot.feels_like_label(), palette),
        Line::default(),
    ];

    if snapshot.forecast.is_empty() {
        lines.push(muted_line("3-day forecast not available", palette));
    } else {
        for day in &snapshot.forecast {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<4}", day.label),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    format!("{}  ", day.icon_label()),
                    Style::default().fg(palette.text),
                ),
                Span::styled(
                    format!("{} {}  ", day.high_label(), day.low_label()),
                    Style::default().fg(palette.text),
                ),
                Span::styled(
                    day.condition_label().to_string(),
                    Style::default().fg(palette.muted),
                ),
            ]));
        }
    }

    lines
}

fn detail_line(caption: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", caption),
            Style::default().fg(palette.muted),
        ),
        Span::styled(value, Style::default().fg(palette.text)),
    ])
}

/// Lines for the quote panel
pub fn quote_lines(state: &PanelState<QuoteBoard>, palette: &Palette) -> Vec<Line<'static>> {
    match state {
        PanelState::Loading => vec![muted_line("Loading quotes...", palette)],
        PanelState::Failed => vec![Line::from(Span::styled(
            "⚠️ Could not load quotes",
            Style::default().fg(palette.error),
        ))],
        PanelState::Ready(board) => match board.current() {
            // An empty board never draws, so the placeholder stays up
            None => vec![muted_line("Loading quotes...", palette)],
            Some(quote) => vec![
                Line::from(Span::styled(
                    format!("\"{}\"", quote.text),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::ITALIC),
                )),
                Line::default(),
                Line::from(Span::styled(
                    format!("— {}", quote.author),
                    Style::default().fg(palette.muted),
                )),
            ],
        },
    }
}

/// Lines for the task panel, including the entry input and the delete
/// confirmation when those modes are active
pub fn task_lines(
    tasks: &[Task],
    selected: usize,
    mode: &Mode,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Mode::AddingTask { buffer } = mode {
        lines.push(Line::from(vec![
            Span::styled(
                "New task: ".to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{}▏", buffer), Style::default().fg(palette.text)),
        ]));
        lines.push(Line::default());
    }

    if tasks.is_empty() {
        lines.push(muted_line("No tasks yet. Press a to add one! ✨", palette));
    }

    for (index, task) in tasks.iter().enumerate() {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let marker = if index == selected { "› " } else { "  " };

        let mut style = Style::default().fg(palette.text);
        if task.completed {
            style = Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        if index == selected && matches!(mode, Mode::Normal) {
            style = style.add_modifier(Modifier::BOLD);
        }

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(palette.accent)),
            Span::styled(format!("{} {}", checkbox, task.text), style),
        ]));
    }

    if let Mode::ConfirmDelete { text, .. } = mode {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Delete task: \"{}\"? [y/n]", text),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

/// The bottom line: a transient status message when there is one,
/// otherwise the key hints for the active mode
pub fn hint_line(mode: &Mode, status: Option<&str>, palette: &Palette) -> Line<'static> {
    if let Some(status) = status {
        return Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(palette.accent),
        ));
    }
    let hints = match mode {
        Mode::Normal => "a add  Space toggle  d delete  j/k move  n quote  t theme  q quit",
        Mode::AddingTask { .. } => "Enter save  Esc cancel",
        Mode::ConfirmDelete { .. } => "y delete  n keep",
    };
    Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(palette.muted),
    ))
}

fn muted_line(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(palette.muted),
    ))
}
