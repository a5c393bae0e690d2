//! Output side of the game: the LED matrix play field and the status text.
//!
//! The core never talks to a terminal or to hardware. It draws through
//! [`Display`], reads lane presses through [`InputSource`] and reports
//! score and mode changes to a [`StatusSink`]. [`MatrixFrame`] is the
//! in-memory matrix the front end renders from.

pub mod colour;
pub mod glyph;
pub mod playfield;
pub mod status;

pub use colour::PixelColour;
pub use glyph::Countdown;
pub use playfield::{draw_backdrop, draw_field, preview_slot};
pub use status::{StatusReport, StatusReporter, StatusSink};

use std::collections::VecDeque;

use crate::timing::FIELD_COLUMNS;
use crate::track::Lane;

/// Rows of the play field; lane `l` owns rows `2l` and `2l + 1`.
pub const FIELD_ROWS: usize = 8;

/// A 16 x 8 grid of coloured pixels. Column 0 is where notes enter.
pub trait Display {
    fn set_pixel(&mut self, column: usize, row: usize, colour: PixelColour);

    fn set_column(&mut self, column: usize, colours: &[PixelColour; FIELD_ROWS]) {
        for (row, &colour) in colours.iter().enumerate() {
            self.set_pixel(column, row, colour);
        }
    }

    fn clear(&mut self) {
        for column in 0..FIELD_COLUMNS as usize {
            self.set_column(column, &[PixelColour::BLACK; FIELD_ROWS]);
        }
    }

    /// Paint both rows of `lane` in `column`.
    fn set_lane(&mut self, column: usize, lane: Lane, colour: PixelColour) {
        let row = 2 * lane.index();
        self.set_pixel(column, row, colour);
        self.set_pixel(column, row + 1, colour);
    }
}

/// Source of lane button presses. Polled once per loop iteration.
pub trait InputSource {
    fn poll_lane_press(&mut self) -> Option<Lane>;
}

impl InputSource for VecDeque<Lane> {
    fn poll_lane_press(&mut self) -> Option<Lane> {
        self.pop_front()
    }
}

/// In-memory play field. Writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFrame {
    columns: [[PixelColour; FIELD_ROWS]; FIELD_COLUMNS as usize],
}

impl MatrixFrame {
    pub fn new() -> Self {
        Self {
            columns: [[PixelColour::BLACK; FIELD_ROWS]; FIELD_COLUMNS as usize],
        }
    }

    pub fn pixel(&self, column: usize, row: usize) -> PixelColour {
        self.columns
            .get(column)
            .and_then(|c| c.get(row))
            .copied()
            .unwrap_or(PixelColour::BLACK)
    }

    pub fn column(&self, column: usize) -> Option<&[PixelColour; FIELD_ROWS]> {
        self.columns.get(column)
    }

    /// Rows top to bottom, each as a run of columns left to right.
    pub fn rows(&self) -> impl Iterator<Item = [PixelColour; FIELD_COLUMNS as usize]> + '_ {
        (0..FIELD_ROWS).map(move |row| std::array::from_fn(|column| self.columns[column][row]))
    }
}

impl Default for MatrixFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for MatrixFrame {
    fn set_pixel(&mut self, column: usize, row: usize, colour: PixelColour) {
        if let Some(pixel) = self.columns.get_mut(column).and_then(|c| c.get_mut(row)) {
            *pixel = colour;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_covers_two_rows() {
        let mut frame = MatrixFrame::new();
        frame.set_lane(3, Lane::ALL[1], PixelColour::RED);
        assert_eq!(frame.pixel(3, 2), PixelColour::RED);
        assert_eq!(frame.pixel(3, 3), PixelColour::RED);
        assert_eq!(frame.pixel(3, 1), PixelColour::BLACK);
        assert_eq!(frame.pixel(3, 4), PixelColour::BLACK);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut frame = MatrixFrame::new();
        frame.set_pixel(16, 0, PixelColour::RED);
        frame.set_pixel(0, 8, PixelColour::RED);
        assert_eq!(frame, MatrixFrame::new());
    }

    #[test]
    fn rows_transpose_columns() {
        let mut frame = MatrixFrame::new();
        frame.set_pixel(5, 7, PixelColour::GREEN);
        let rows: Vec<_> = frame.rows().collect();
        assert_eq!(rows.len(), FIELD_ROWS);
        assert_eq!(rows[7][5], PixelColour::GREEN);
    }

    #[test]
    fn queued_input_yields_presses_in_order() {
        let mut input = VecDeque::from([Lane::ALL[2], Lane::ALL[0]]);
        assert_eq!(input.poll_lane_press(), Some(Lane::ALL[2]));
        assert_eq!(input.poll_lane_press(), Some(Lane::ALL[0]));
        assert_eq!(input.poll_lane_press(), None);
    }
}
