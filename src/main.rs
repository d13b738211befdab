//! Fireflies headless driver
//!
//! Runs the simulation at a fixed cadence with a scripted input thread
//! standing in for touch/mouse handling, then prints the final frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use fireflies::{FirefliesError, GameModel, Settings};

fn load_settings() -> Result<Settings, FirefliesError> {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Settings::from_json(&json),
            Err(e) => {
                log::warn!("Could not read {}: {} (using defaults)", path, e);
                Ok(Settings::default())
            }
        },
        None => Ok(Settings::default()),
    }
}

fn run(settings: &Settings) -> Result<(), FirefliesError> {
    let mut model = GameModel::from_settings(settings)?;
    let channel = model.movement_channel();
    let running = Arc::new(AtomicBool::new(true));
    let tick_period = Duration::from_secs_f64(1.0 / settings.tick_hz as f64);

    let input = {
        let running = Arc::clone(&running);
        std::thread::spawn(move || {
            // Sweep the net around the hole in a slow circle
            let mut angle: f32 = 0.0;
            while running.load(Ordering::Relaxed) {
                let (dy, dx) = angle.sin_cos();
                channel.submit(dx * 0.5, dy * 0.5);
                angle += 0.02;
                std::thread::sleep(tick_period / 2);
            }
        })
    };

    model.start();
    for t in 0..settings.ticks {
        model.update();
        if model.is_game_over() {
            break;
        }
        if t % settings.tick_hz as u64 == 0 {
            log::info!(
                "tick {}: score={}/{} free={}",
                t,
                model.score(),
                model.num_actors(),
                model.num_active()
            );
        }
        std::thread::sleep(tick_period);
    }
    model.stop();

    running.store(false, Ordering::Relaxed);
    if input.join().is_err() {
        log::error!("Input thread panicked");
    }

    match serde_json::to_string_pretty(&model.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Fireflies (headless) starting...");

    let result = load_settings().and_then(|settings| run(&settings));
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
