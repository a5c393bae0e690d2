use std::sync::Arc;

use hitline::audio::{audio_params, waveform, AudioBridge, AudioParams, AudioParamsReader};
use hitline::scoring::FeedbackLevel;
use hitline::timing::{is_game_over, SUB_RESOLUTION};
use hitline::track::{Lane, LaneSet, Track, TrackSlot, TRACK_LENGTH};
use hitline::Game;

fn lane(index: u8) -> Lane {
    Lane::new(index).unwrap()
}

fn game_with(slots: Vec<TrackSlot>) -> (Game, AudioParamsReader) {
    let (writer, reader) = audio_params();
    let track = Track::from_slots(slots).unwrap();
    (Game::new(Arc::new(track), writer), reader)
}

fn advance_to(game: &mut Game, beat: u32) {
    while game.beat() < beat {
        game.advance().unwrap();
    }
}

#[test]
fn game_over_exactly_at_track_end() {
    let total = TRACK_LENGTH as u32 * SUB_RESOLUTION;
    for beat in (0..total).step_by(7) {
        assert!(!is_game_over(beat, TRACK_LENGTH));
    }
    assert!(!is_game_over(total - 1, TRACK_LENGTH));
    assert!(is_game_over(total, TRACK_LENGTH));
}

#[test]
fn first_slot_centre_hit_scenario() {
    let (mut game, reader) = game_with(vec![TrackSlot::short(LaneSet::LANE0), TrackSlot::EMPTY]);
    let event = game.on_lane_pressed(lane(0));

    assert_eq!(event.delta, 3);
    assert!(event.combo_extended);
    assert_eq!(event.duty_percentage, 50);
    assert_eq!(event.pitch, Some(523.2511));
    assert_eq!(game.combo(), 1);
    assert_eq!(
        reader.load(),
        AudioParams {
            pitch: Some(523.2511),
            duty_percentage: 50
        }
    );
}

#[test]
fn empty_lane_press_costs_one_and_breaks_combo() {
    let slots = vec![TrackSlot::short(LaneSet::LANE0); 3];
    let (mut game, _) = game_with(slots);
    assert_eq!(game.on_lane_pressed(lane(0)).delta, 3);
    advance_to(&mut game, 5);
    assert_eq!(game.combo(), 1);

    for l in 1..4 {
        let (mut fresh, _) = game_with(vec![TrackSlot::short(LaneSet::LANE0); 3]);
        let event = fresh.on_lane_pressed(lane(l));
        assert_eq!(event.delta, -1, "lane {l}");
        assert_eq!(fresh.combo(), 0);
    }

    let event = game.on_lane_pressed(lane(2));
    assert_eq!(event.delta, -1);
    assert_eq!(game.combo(), 0);
}

#[test]
fn windows_are_mirrored_around_the_centre() {
    // (beat, delta, duty) for slot 1, which is centred at beat 5.
    let cases = [(3, 1, 2), (4, 2, 10), (5, 3, 50), (6, 2, 90), (7, 1, 98)];
    for (beat, delta, duty) in cases {
        let (mut game, _) = game_with(vec![
            TrackSlot::EMPTY,
            TrackSlot::short(LaneSet::LANE0),
            TrackSlot::EMPTY,
            TrackSlot::EMPTY,
        ]);
        advance_to(&mut game, beat);
        let event = game.on_lane_pressed(lane(0));
        assert_eq!(event.delta, delta, "beat {beat}");
        assert_eq!(event.duty_percentage, duty, "beat {beat}");
        assert_eq!(event.hit.map(|h| h.slot), Some(1));
    }
}

#[test]
fn centre_bonus_needs_a_streak_above_three() {
    let (mut game, _) = game_with(vec![TrackSlot::short(LaneSet::LANE1); 6]);
    let mut deltas = Vec::new();
    for slot in 0..6 {
        advance_to(&mut game, slot * SUB_RESOLUTION);
        let event = game.on_lane_pressed(lane(1));
        assert_eq!(event.duty_percentage, 50);
        deltas.push(event.delta);
    }
    assert_eq!(deltas, [3, 3, 3, 3, 4, 4]);
    assert_eq!(game.score(), 20);
}

#[test]
fn duplicate_press_after_hit_costs_one() {
    for beat in [3, 4, 5, 6, 7] {
        let (mut game, _) = game_with(vec![
            TrackSlot::EMPTY,
            TrackSlot::short(LaneSet::LANE0 | LaneSet::LANE3),
            TrackSlot::EMPTY,
        ]);
        advance_to(&mut game, beat);
        let first = game.on_lane_pressed(lane(0));
        assert!(first.is_hit());
        let score = game.score();

        let again = game.on_lane_pressed(lane(3));
        assert_eq!(again.delta, -1, "beat {beat}");
        assert!(!again.is_hit());
        assert_eq!(game.score(), score - 1);
    }
}

#[test]
fn feedback_tracks_combo() {
    let (mut game, _) = game_with(vec![TrackSlot::short(LaneSet::LANE2); 5]);
    for slot in 0..5 {
        advance_to(&mut game, slot * SUB_RESOLUTION);
        game.on_lane_pressed(lane(2));
        assert_eq!(game.feedback(), FeedbackLevel::from_combo(game.combo()));
        assert_eq!(game.feedback().level() as u32, game.combo().min(3));
    }
    game.on_lane_pressed(lane(2));
    assert_eq!(game.combo(), 0);
    assert_eq!(game.feedback().level(), 0);
}

#[test]
fn passing_note_is_a_miss() {
    let (mut game, _) = game_with(vec![TrackSlot::short(LaneSet::LANE1), TrackSlot::EMPTY]);
    let missed: Vec<_> = std::iter::from_fn(|| game.advance())
        .filter_map(|report| report.missed_slot)
        .collect();
    assert_eq!(missed, [0]);
    assert_eq!(game.score(), -1);
}

#[test]
fn exhausted_track_rejects_everything() {
    let (mut game, reader) = game_with(vec![TrackSlot::short(LaneSet::LANE0); 2]);
    game.on_lane_pressed(lane(0));
    while game.advance().is_some() {}
    let beat = game.beat();
    let score = game.score();
    let audio = reader.load();

    assert!(game.is_game_over());
    assert!(game.advance().is_none());
    assert_eq!(game.on_lane_pressed(lane(0)).delta, 0);
    assert_eq!(game.beat(), beat);
    assert_eq!(game.score(), score);
    assert_eq!(reader.load(), audio);
    assert!(game.is_game_over());
}

#[test]
fn bridge_is_idempotent() {
    let (mut writer, reader) = audio_params();
    let (wave_writer, wave_reader) = waveform();
    let mut bridge = AudioBridge::new(reader, wave_writer, 1_000_000);

    writer.publish(AudioParams {
        pitch: Some(698.4565),
        duty_percentage: 10,
    });
    let first = bridge.tick();
    let second = bridge.tick();
    assert_eq!(first, second);
    assert_eq!(wave_reader.load(), second);
    assert_eq!((first.period, first.pulse_width), (1432, 143));
}

#[test]
fn late_press_on_builtin_held_note_is_graded_by_its_head() {
    // Slot 9 is a lane 2 head (0x04) whose tail runs into slot 10 (0x40).
    let track = Track::builtin();
    assert_eq!(track.slot(9), Some(&TrackSlot::from_packed(0x04)));
    assert_eq!(track.slot(10), Some(&TrackSlot::from_packed(0x40)));

    for (beat, future, delta, duty) in [(46, 1, 2, 90), (47, 0, 1, 98)] {
        let (writer, _) = audio_params();
        let mut game = Game::new(Arc::new(track.clone()), writer);
        advance_to(&mut game, beat);
        let event = game.on_lane_pressed(lane(2));
        let hit = event.hit.unwrap();
        assert_eq!((hit.slot, hit.future, hit.sustain), (9, future, false), "beat {beat}");
        assert_eq!(event.delta, delta, "beat {beat}");
        assert_eq!(event.duty_percentage, duty, "beat {beat}");

        // The head counts as hit, so it is not also penalized on leaving.
        let report = game.advance().unwrap();
        if beat == 47 {
            assert_eq!(report.step.closed_slot, Some(9));
        }
        assert_eq!(report.missed_slot, None);
    }
}

#[test]
fn tail_hit_leaves_passing_head_missed() {
    let (mut game, _) = game_with(vec![
        TrackSlot::short(LaneSet::LANE0),
        TrackSlot::EMPTY.with_sustain(LaneSet::LANE1),
        TrackSlot::EMPTY,
    ]);
    assert!(game.on_lane_pressed(lane(1)).hit.is_some_and(|hit| hit.sustain));
    let missed: Vec<_> = std::iter::from_fn(|| game.advance())
        .filter_map(|report| report.missed_slot)
        .collect();
    assert_eq!(missed, [0]);
}

#[test]
fn builtin_track_plays_to_the_end() {
    let (writer, _) = audio_params();
    let mut game = Game::new(Arc::new(Track::builtin()), writer);
    let mut beats = 0;
    while game.advance().is_some() {
        beats += 1;
    }
    assert_eq!(beats, TRACK_LENGTH as u32 * SUB_RESOLUTION);
    // Every note head was missed.
    assert_eq!(game.score(), -(game.track().note_count() as i32));
}
