//! Status panel: score, combo, modes and the audio feedback readout.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use hitline::display::{StatusReport, StatusSink};

use super::UiView;
use crate::app::Phase;

/// Keeps the latest report for drawing.
#[derive(Debug, Default)]
pub struct StatusPanel {
    latest: Option<StatusReport>,
}

impl StatusPanel {
    pub fn latest(&self) -> Option<&StatusReport> {
        self.latest.as_ref()
    }
}

impl StatusSink for StatusPanel {
    fn report(&mut self, status: &StatusReport) {
        debug!(score = status.score, combo = status.combo, "status changed");
        self.latest = Some(*status);
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, view: &UiView<'_>) {
    let block = Block::default().title(" Status ").borders(Borders::ALL);
    let Some(status) = view.status else {
        frame.render_widget(block, area);
        return;
    };

    let headline = match view.phase {
        Phase::Start => Span::styled("Press S to start", Style::default().fg(Color::Cyan)),
        Phase::Countdown { .. } => Span::styled("Get ready", Style::default().fg(Color::Cyan)),
        Phase::Playing if status.paused => {
            Span::styled("Paused", Style::default().fg(Color::Yellow))
        }
        Phase::Playing => Span::raw(""),
        Phase::GameOver => Span::styled(
            "GAME OVER - press S to play again",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let lights: String = status
        .feedback
        .lights()
        .iter()
        .map(|&on| if on { '●' } else { '○' })
        .collect();

    let judgement = match view.last_event {
        Some(event) => match event.hit {
            Some(hit) => format!("{} {:+}", hit.grade.label(), event.delta),
            None => format!("MISS {:+}", event.delta),
        },
        None => String::new(),
    };

    let tone = match view.waveform.frequency_hz(view.reference_clock_hz) {
        Some(hz) => format!(
            "Tone: {hz:7.2} Hz  duty {:3.0}%",
            view.waveform.duty() * 100.0
        ),
        None => "Tone: silent".to_string(),
    };

    let mut lines = vec![
        Line::from(headline),
        Line::from(status.score_line()),
        Line::from(status.combo_line()),
        Line::from(format!("Readout: [{}]  Lights: {lights}", status.readout)),
        Line::from(status.speed_line()),
        Line::from(status.manual_line()),
        Line::from(Span::styled(judgement, Style::default().fg(Color::Green))),
        Line::from(Span::styled(tone, Style::default().fg(Color::DarkGray))),
    ];
    if status.combo_banner {
        lines.insert(
            1,
            Line::from(Span::styled(
                "COMBO!",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )),
        );
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
