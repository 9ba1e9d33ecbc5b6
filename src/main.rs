//! Robo Pong entry point
//!
//! Runs a windowless session: the autopilot plays the human side while the
//! robot paddle learns. Prints the session summary as JSON on exit.

use robo_pong::platform::Autopilot;
use robo_pong::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Robo Pong (headless) starting...");

    let settings = Settings::load();
    let max_ticks = settings.max_ticks;
    let mut game = Game::new(settings);
    let mut pilot = Autopilot::new(game.menu(), max_ticks);

    let summary = game.run(&mut pilot);
    log::info!("{} paddle hits played", pilot.sounds());

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode session summary: {}", e),
    }
}
