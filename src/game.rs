//! Frame loop
//!
//! Wires a `GameSession` to its collaborators. Each frame polls the clock and input,
//! steps the simulation, plays cues for its events and renders. The
//! high score is written once, on the frame the session ends.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, CUE_COUNT, SoundCue};
use crate::persistence::ScoreStore;
use crate::platform::{FrameClock, InputProvider};
use crate::renderer::{self, RenderTarget};
use crate::sim::{EndReason, GameEvent, GameSession, tick};

/// How often a cue was sent to the audio sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueCount {
    pub cue: SoundCue,
    pub count: u32,
}

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u64,
    pub high_score: u64,
    pub new_record: bool,
    pub lives: u8,
    pub frames: u64,
    pub sim_time: f64,
    pub scroll_speed: u32,
    pub end_reason: Option<EndReason>,
    pub cues: Vec<CueCount>,
}

/// Drives one session to completion
pub struct Runner<'a> {
    clock: &'a mut dyn FrameClock,
    input: &'a mut dyn InputProvider,
    audio: &'a mut dyn AudioSink,
    target: &'a mut dyn RenderTarget,
    store: &'a mut dyn ScoreStore,
    fps_cap: u32,
    cues_sent: [u32; CUE_COUNT],
}

impl<'a> Runner<'a> {
    pub fn new(
        clock: &'a mut dyn FrameClock,
        input: &'a mut dyn InputProvider,
        audio: &'a mut dyn AudioSink,
        target: &'a mut dyn RenderTarget,
        store: &'a mut dyn ScoreStore,
        fps_cap: u32,
    ) -> Self {
        Self {
            clock,
            input,
            audio,
            target,
            store,
            fps_cap,
            cues_sent: [0; CUE_COUNT],
        }
    }

    /// Run until the session ends, then report how it went
    pub fn run(mut self, mut session: GameSession) -> SessionSummary {
        log::info!(
            "Session start: seed {}, high score {}",
            session.seed,
            session.high_score.best
        );
        self.play(SoundCue::Soundtrack);

        while !session.is_over() {
            let dt = self.clock.tick(self.fps_cap);
            let input = self.input.poll(&session);
            tick(&mut session, &input, dt);

            for event in session.drain_events() {
                self.dispatch(&event);
            }

            renderer::draw_frame(&session, &mut *self.target);
            self.persist(&mut session);
        }
        // No-op unless the session was ended outside the loop
        self.persist(&mut session);

        self.summarize(&session)
    }

    fn dispatch(&mut self, event: &GameEvent) {
        match event {
            GameEvent::NewHighScore { score } => log::debug!("New high score {score}"),
            GameEvent::HazardHit { lives } => log::debug!("Hazard hit, {lives} lives left"),
            _ => {}
        }
        if let Some(cue) = SoundCue::for_event(event) {
            self.play(cue);
        }
    }

    fn play(&mut self, cue: SoundCue) {
        if let Some(slot) = SoundCue::ALL.iter().position(|c| *c == cue) {
            self.cues_sent[slot] += 1;
        }
        self.audio.play(cue);
    }

    fn persist(&mut self, session: &mut GameSession) {
        if let Some(best) = session.take_high_score_for_save() {
            log::info!("Saving high score {best}");
            self.store.save_high_score(best);
        }
    }

    fn summarize(&self, session: &GameSession) -> SessionSummary {
        SessionSummary {
            seed: session.seed,
            score: session.score,
            high_score: session.high_score.best,
            new_record: session.high_score.is_new_record(),
            lives: session.lives,
            frames: session.frame_count,
            sim_time: session.sim_time,
            scroll_speed: session.scroll_speed(),
            end_reason: session.end_reason,
            cues: SoundCue::ALL
                .iter()
                .zip(self.cues_sent)
                .map(|(&cue, count)| CueCount { cue, count })
                .collect(),
        }
    }
}
