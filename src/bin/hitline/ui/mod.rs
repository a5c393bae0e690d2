//! Terminal rendering: LED matrix, status panel and help bar.

mod matrix;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use hitline::audio::PwmFrame;
use hitline::display::{MatrixFrame, StatusReport};
use hitline::scoring::ScoreEvent;

use crate::app::Phase;

pub use status::StatusPanel;

use matrix::render_matrix;
use status::render_status;

/// Everything one frame needs, borrowed from the app.
pub struct UiView<'a> {
    pub phase: Phase,
    pub matrix: &'a MatrixFrame,
    pub status: Option<&'a StatusReport>,
    pub last_event: Option<ScoreEvent>,
    pub waveform: PwmFrame,
    pub reference_clock_hz: u32,
}

pub fn render(frame: &mut Frame, view: &UiView<'_>) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Matrix + status
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(matrix::WIDGET_WIDTH),
            Constraint::Min(30),
        ])
        .split(rows[0]);

    render_matrix(frame, columns[0], view.matrix);
    render_status(frame, columns[1], view);

    let help = match view.phase {
        Phase::Playing => {
            " [F D S A] Lanes  [P] Pause  [M] Manual  [N] Step  [Q] Quit"
        }
        Phase::Countdown { .. } => " Get ready...  [Q] Quit",
        _ => " [S] Start  [1/2/3] Speed  [M] Manual  [Q] Quit",
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );
}
