//! Gift Runner entry point
//!
//! Plays a headless autopilot session and prints its summary as JSON.
//! Usage: `gift-runner [seed]`

use anyhow::Context;

use gift_runner::Settings;
use gift_runner::audio::AudioManager;
use gift_runner::game::Runner;
use gift_runner::persistence::{FileScoreStore, ScoreStore};
use gift_runner::platform::{AutopilotInput, FixedClock};
use gift_runner::renderer::HeadlessTarget;
use gift_runner::sim::GameSession;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Gift Runner (headless) starting...");

    let mut settings = Settings::default();
    if let Some(arg) = std::env::args().nth(1) {
        let seed = arg
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?;
        settings = settings.with_seed(seed);
    }
    let seed = settings.resolve_seed();

    let mut store = FileScoreStore::new(settings.score_path.clone());
    let high_score = store.load_high_score();
    let session = GameSession::new(seed, high_score).with_culling(settings.cull_offscreen);
    log::info!("Game initialized with seed: {seed}");

    let mut clock = FixedClock::new(settings.frame_dt());
    let mut input = AutopilotInput::new(settings.demo_frames);
    let mut audio = AudioManager::from_settings(&settings);
    let mut target = HeadlessTarget::default();

    let summary = Runner::new(
        &mut clock,
        &mut input,
        &mut audio,
        &mut target,
        &mut store,
        settings.target_fps,
    )
    .run(session);

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serializing session summary")?
    );
    Ok(())
}
