//! Game loop: start screen, countdown, play and game over.

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::Consumer;
use tracing::{debug, info, warn};

use hitline::audio::{audio_params, waveform, AudioParamsReader, WaveformReader, WaveformWriter};
use hitline::display::{
    draw_backdrop, draw_field, Countdown, InputSource, MatrixFrame, StatusReport, StatusReporter,
};
use hitline::scoring::ScoreEvent;
use hitline::timing::{BeatDriver, ClockTick, GameSpeed};
use hitline::track::Track;
use hitline::{AdvanceReport, Game, GameConfig};

use crate::audio::start_output;
use crate::input::{command_for, Command, KeyboardLanes};
use crate::ui::{self, StatusPanel, UiView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Countdown { glyph: Countdown, shown_at: Instant },
    Playing,
    GameOver,
}

pub struct App {
    config: GameConfig,
    game: Game,
    phase: Phase,
    speed: GameSpeed,
    manual_mode: bool,
    paused: bool,
    /// Running beat driver and its tick queue; `None` while the clock is
    /// stopped (not playing, paused or manual mode).
    clock: Option<(BeatDriver, Consumer<ClockTick>)>,
    lanes: KeyboardLanes,
    matrix: MatrixFrame,
    reporter: StatusReporter,
    panel: StatusPanel,
    last_event: Option<ScoreEvent>,
    waveform: WaveformReader,
    /// Keeps the output stream alive.
    _stream: Option<cpal::Stream>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, track: Track, audio: bool) -> EyreResult<Self> {
        let (params_writer, params_reader) = audio_params();
        let (waveform_writer, waveform_reader) = waveform();
        let stream = if audio {
            open_audio(&config, params_reader, waveform_writer)
        } else {
            None
        };

        let mut matrix = MatrixFrame::new();
        draw_backdrop(&mut matrix);

        Ok(Self {
            speed: config.speed,
            manual_mode: config.manual_mode,
            config,
            game: Game::new(Arc::new(track), params_writer),
            phase: Phase::Start,
            paused: false,
            clock: None,
            lanes: KeyboardLanes::default(),
            matrix,
            reporter: StatusReporter::new(),
            panel: StatusPanel::default(),
            last_event: None,
            waveform: waveform_reader,
            _stream: stream,
            should_quit: false,
        })
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_countdown()?;
            self.poll_clock();
            self.poll_lanes();
            self.publish_status();

            terminal.draw(|frame| ui::render(frame, &self.view()))?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }
        }

        self.stop_clock();
        info!(score = self.game.score(), "quit");
        Ok(())
    }

    fn view(&self) -> UiView<'_> {
        UiView {
            phase: self.phase,
            matrix: &self.matrix,
            status: self.panel.latest(),
            last_event: self.last_event,
            waveform: self.waveform.load(),
            reference_clock_hz: self.config.reference_clock_hz,
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> EyreResult<()> {
        let Some(command) = command_for(key, self.phase == Phase::Playing) else {
            return Ok(());
        };
        if command == Command::Quit {
            self.should_quit = true;
            return Ok(());
        }

        match (self.phase, command) {
            (Phase::Start | Phase::GameOver, Command::Start | Command::Lane(_)) => {
                self.begin_countdown();
            }
            (Phase::Start | Phase::GameOver, Command::Speed(speed)) => {
                info!(%speed, "speed selected");
                self.speed = speed;
            }
            (Phase::Start | Phase::GameOver, Command::ToggleManual) => {
                self.manual_mode = !self.manual_mode;
            }
            (Phase::Playing, Command::Lane(lane)) if !self.paused => self.lanes.push(lane),
            (Phase::Playing, Command::TogglePause) => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                self.sync_clock()?;
            }
            (Phase::Playing, Command::ToggleManual) => {
                self.manual_mode = !self.manual_mode;
                debug!(manual = self.manual_mode, "manual mode toggled");
                self.sync_clock()?;
            }
            (Phase::Playing, Command::Step) if self.manual_mode && !self.paused => {
                self.step_beat();
            }
            _ => {}
        }
        Ok(())
    }

    fn begin_countdown(&mut self) {
        self.game.restart();
        self.lanes.clear();
        self.last_event = None;
        self.paused = false;
        self.show_countdown(Countdown::Three);
    }

    fn show_countdown(&mut self, glyph: Countdown) {
        glyph.draw(&mut self.matrix);
        self.phase = Phase::Countdown {
            glyph,
            shown_at: Instant::now(),
        };
    }

    /// One countdown glyph per slot period, then start playing.
    fn poll_countdown(&mut self) -> EyreResult<()> {
        let Phase::Countdown { glyph, shown_at } = self.phase else {
            return Ok(());
        };
        if shown_at.elapsed() < self.speed.slot_period() {
            return Ok(());
        }

        match glyph.next() {
            Some(next) => self.show_countdown(next),
            None => {
                info!(speed = %self.speed, manual = self.manual_mode, "game started");
                self.phase = Phase::Playing;
                draw_field(&self.game, &mut self.matrix);
                self.sync_clock()?;
            }
        }
        Ok(())
    }

    fn poll_clock(&mut self) {
        let reports = match &mut self.clock {
            Some((_, rx)) => self.game.advance_pending(rx),
            None => return,
        };
        if reports.is_empty() {
            return;
        }
        for report in &reports {
            self.on_advanced(report);
        }
        draw_field(&self.game, &mut self.matrix);
        if self.game.is_game_over() {
            self.phase = Phase::GameOver;
            self.stop_clock();
        }
    }

    fn poll_lanes(&mut self) {
        while let Some(lane) = self.lanes.poll_lane_press() {
            let event = self.game.on_lane_pressed(lane);
            debug!(%lane, delta = event.delta, score = self.game.score(), "press");
            self.last_event = Some(event);
            draw_field(&self.game, &mut self.matrix);
        }
    }

    fn step_beat(&mut self) {
        let Some(report) = self.game.advance() else {
            return;
        };
        self.on_advanced(&report);
        draw_field(&self.game, &mut self.matrix);

        if report.game_over {
            self.phase = Phase::GameOver;
            self.stop_clock();
        }
    }

    fn on_advanced(&mut self, report: &AdvanceReport) {
        if let Some(slot) = report.missed_slot {
            debug!(slot, "missed");
            self.last_event = None;
        }
    }

    /// Run the beat driver exactly when the game should advance by itself.
    fn sync_clock(&mut self) -> EyreResult<()> {
        let wanted = self.phase == Phase::Playing && !self.paused && !self.manual_mode;
        match (wanted, self.clock.is_some()) {
            (true, false) => {
                let driver = BeatDriver::spawn(self.speed.tick_interval())
                    .wrap_err("failed to start the beat driver")?;
                self.clock = Some(driver);
            }
            (false, true) => self.stop_clock(),
            _ => {}
        }
        Ok(())
    }

    fn stop_clock(&mut self) {
        if let Some((mut driver, _)) = self.clock.take() {
            driver.stop();
        }
    }

    fn publish_status(&mut self) {
        let status = StatusReport::new(&self.game, self.speed, self.manual_mode, self.paused);
        self.reporter.update(status, &mut self.panel);
    }
}

fn open_audio(
    config: &GameConfig,
    params: AudioParamsReader,
    waveform: WaveformWriter,
) -> Option<cpal::Stream> {
    match start_output(config, params, waveform) {
        Ok(stream) => Some(stream),
        Err(err) => {
            warn!("audio disabled: {err:#}");
            None
        }
    }
}
