//! Keyboard mapping.

use std::collections::VecDeque;

use crossterm::event::KeyCode;

use hitline::display::InputSource;
use hitline::timing::GameSpeed;
use hitline::track::Lane;

/// Lane keys, left hand resting on the home row: f = lane 0 ... a = lane 3.
const LANE_KEYS: [char; Lane::COUNT] = ['f', 'd', 's', 'a'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Lane(Lane),
    Start,
    TogglePause,
    ToggleManual,
    Step,
    Speed(GameSpeed),
    Quit,
}

/// Map a key to a command. `s` doubles as the start key and lane 2, so the
/// caller decides which one applies.
pub fn command_for(key: KeyCode, playing: bool) -> Option<Command> {
    let KeyCode::Char(c) = key else {
        return (key == KeyCode::Esc).then_some(Command::Quit);
    };
    let c = c.to_ascii_lowercase();

    if let Some(index) = LANE_KEYS.iter().position(|&k| k == c) {
        if playing || c != 's' {
            return Lane::new(index as u8).map(Command::Lane);
        }
    }
    match c {
        's' => Some(Command::Start),
        'p' => Some(Command::TogglePause),
        'm' => Some(Command::ToggleManual),
        'n' => Some(Command::Step),
        'q' => Some(Command::Quit),
        '1' => Some(Command::Speed(GameSpeed::Normal)),
        '2' => Some(Command::Speed(GameSpeed::Fast)),
        '3' => Some(Command::Speed(GameSpeed::Extreme)),
        _ => None,
    }
}

/// Lane presses collected from key events, handed to the game one at a time.
#[derive(Debug, Default)]
pub struct KeyboardLanes {
    pending: VecDeque<Lane>,
}

impl KeyboardLanes {
    pub fn push(&mut self, lane: Lane) {
        self.pending.push_back(lane);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl InputSource for KeyboardLanes {
    fn poll_lane_press(&mut self) -> Option<Lane> {
        self.pending.poll_lane_press()
    }
}
