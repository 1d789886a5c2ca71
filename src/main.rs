//! Slider Sim entry point
//!
//! Spawns a seeded slider population and drives it through the fixed tick
//! loop, logging reversals, decays, and freezes along the way.

use std::path::Path;
use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use slider_sim::consts::*;
use slider_sim::Settings;
use slider_sim::sim::{Direction, SliderPatch, SliderState, advance, validate, validate_patch};

/// Spawn a valid slider population from a seeded RNG.
fn spawn_sliders(count: usize, rng: &mut Pcg32) -> Vec<SliderState> {
    (0..count)
        .map(|i| {
            let mut slider = SliderState::new(
                rng.random_range(0..=X_LIMIT),
                rng.random_range(0..=Y_LIMIT),
                rng.random_range(1..=MAX_TRAVEL_LIMIT),
            );
            slider.id = Some(i as u64 + 1);
            slider.size = rng.random_range(1..=SIZE_LIMIT);
            debug_assert!(validate(&slider).is_ok());
            slider
        })
        .collect()
}

/// Apply a sparse update to one slider, validation first.
fn apply_update(slider: &mut SliderState, patch: &SliderPatch) {
    if let Err(err) = validate_patch(patch) {
        log::warn!("Rejected update for slider {:?}: {err}", slider.id);
        return;
    }
    patch.apply(slider);
    if let Err(err) = validate(slider) {
        // Merge is per-field; a bad combination surfaces here.
        log::warn!("Slider {:?} invalid after update: {err}", slider.id);
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("slider-sim.json"));
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "Spawning {} sliders with seed {seed}",
        settings.slider_count
    );

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut sliders = spawn_sliders(settings.slider_count, &mut rng);
    let tick_duration = Duration::from_secs(1) / settings.tick_hz.max(1);

    let mut tick: u64 = 0;
    loop {
        tick += 1;

        for slider in &mut sliders {
            let before = (slider.direction, slider.max_travel);
            advance(slider);

            if slider.direction != before.0 {
                log::debug!(
                    "tick {tick}: slider {:?} reversed at travel {}",
                    slider.id,
                    slider.current_travel
                );
            }
            if slider.max_travel < before.1 {
                if slider.is_frozen() {
                    log::info!("tick {tick}: slider {:?} froze", slider.id);
                } else {
                    log::debug!(
                        "tick {tick}: slider {:?} decayed to amplitude {}",
                        slider.id,
                        slider.max_travel
                    );
                }
            }
        }

        // Halfway through a bounded run, nudge the first slider the way a
        // sparse client update would.
        if settings.ticks > 0 && tick == settings.ticks / 2 {
            if let Some(first) = sliders.first_mut() {
                let patch = SliderPatch {
                    x: Some(X_LIMIT / 2),
                    direction: Some(Direction::Left),
                    ..Default::default()
                };
                apply_update(first, &patch);
                log::info!("tick {tick}: patched slider {:?}", first.id);
            }
        }

        let done = if settings.ticks > 0 {
            tick >= settings.ticks
        } else {
            sliders.iter().all(SliderState::is_frozen)
        };
        if done {
            break;
        }
        thread::sleep(tick_duration);
    }

    for slider in &sliders {
        log::info!(
            "slider {:?}: pos=({}, {}) travel={} amplitude={}",
            slider.id,
            slider.display_x(),
            slider.y,
            slider.current_travel,
            slider.max_travel
        );
    }
}
