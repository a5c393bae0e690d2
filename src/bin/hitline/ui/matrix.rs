//! LED matrix widget: each pixel is drawn two cells wide so it looks square.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use hitline::display::{MatrixFrame, PixelColour, FIELD_ROWS};
use hitline::timing::FIELD_COLUMNS;

/// Columns taken by the widget, borders included.
pub const WIDGET_WIDTH: u16 = FIELD_COLUMNS as u16 * 2 + 2;

const PIXEL: &str = "██";

pub fn render_matrix(frame: &mut Frame, area: Rect, matrix: &MatrixFrame) {
    let block = Block::default().title(" hitline ").borders(Borders::ALL);

    let lines: Vec<Line> = matrix
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&pixel| Span::styled(PIXEL, Style::default().fg(colour(pixel))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    debug_assert_eq!(lines.len(), FIELD_ROWS);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn colour(pixel: PixelColour) -> Color {
    if pixel.is_black() {
        return Color::Rgb(20, 20, 20);
    }
    let (r, g, b) = pixel.to_rgb();
    Color::Rgb(r, g, b)
}
