use crate::game::Game;
use crate::timing::window::{column_for, future_for};
use crate::timing::{ColumnNotes, FIELD_COLUMNS, HIT_CENTER, SCORE_WINDOW, SUB_RESOLUTION};
use crate::track::Track;

use super::colour::PixelColour;
use super::{Display, FIELD_ROWS};

/// Backdrop of the hit window, indexed by `future`. Brightest on the centre.
const WINDOW_GRADIENT: [PixelColour; SCORE_WINDOW as usize] = [
    PixelColour::QUART_YELLOW,
    PixelColour::HALF_YELLOW,
    PixelColour::YELLOW,
    PixelColour::HALF_YELLOW,
    PixelColour::QUART_YELLOW,
];

/// Clear the field and paint the hit window.
pub fn draw_backdrop<D: Display + ?Sized>(display: &mut D) {
    display.clear();
    for (future, colour) in (0..).zip(WINDOW_GRADIENT) {
        display.set_column(column_for(future) as usize, &[colour; FIELD_ROWS]);
    }
}

/// First slot with a note head that has not yet scrolled onto the field.
pub fn preview_slot(track: &Track, beat: u32) -> Option<usize> {
    // Slot s sits at future 5s + HIT_CENTER - beat.
    let first = (beat + FIELD_COLUMNS - HIT_CENTER).div_ceil(SUB_RESOLUTION) as usize;
    track
        .slots()
        .iter()
        .enumerate()
        .skip(first)
        .find(|(_, slot)| !slot.short_lanes.is_empty())
        .map(|(index, _)| index)
}

/// Redraw the whole play field for the current beat.
///
/// Notes are red, orange while the player is on a streak, and green once
/// hit. Column 0 additionally shows a dim preview of the next note head
/// beyond the left edge.
pub fn draw_field<D: Display + ?Sized>(game: &Game, display: &mut D) {
    draw_backdrop(display);

    let track = game.track();
    let state = game.state();
    let beat = state.beat();
    let on_streak = state.ledger.on_streak();
    let pending = if on_streak {
        PixelColour::ORANGE
    } else {
        PixelColour::RED
    };

    for column in 0..FIELD_COLUMNS {
        let future = future_for(column);
        let Some(notes) = ColumnNotes::at(track, future, beat) else {
            continue;
        };
        for lane in notes.lanes().lanes() {
            let colour = if future < SCORE_WINDOW && state.lanes.is_hit(notes.slot, lane) {
                PixelColour::GREEN
            } else {
                pending
            };
            display.set_lane(column as usize, lane, colour);
        }
    }

    let preview = preview_slot(track, beat).and_then(|index| track.slot(index));
    if let Some(slot) = preview {
        let colour = if on_streak {
            PixelColour::QUART_ORANGE
        } else {
            PixelColour::QUART_RED
        };
        for lane in slot.short_lanes.lanes() {
            display.set_lane(0, lane, colour);
        }
    }
}
