use glam::Vec2;
use robo_pong::agent::{PaddleController, reward};
use robo_pong::audio::Silent;
use robo_pong::platform::Autopilot;
use robo_pong::settings::ControllerSettings;
use robo_pong::sim::{GameEvent, Role, Score, TickInput};
use robo_pong::{Game, Settings};

fn headless_settings(seed: u64, max_ticks: u64) -> Settings {
    Settings {
        seed: Some(seed),
        tick_rate_hz: None,
        max_ticks,
        ..Default::default()
    }
}

#[test]
fn test_headless_session_runs_to_budget() {
    let settings = headless_settings(2024, 5_000);
    let mut game = Game::new(settings);
    let mut pilot = Autopilot::new(game.menu(), 5_000);

    let summary = game.run(&mut pilot);

    assert_eq!(summary.seed, 2024);
    assert_eq!(summary.ticks, 5_000);
    assert_eq!(summary.training.updates, 5_000);
    assert_eq!(pilot.active_frames(), 5_000);
    assert_eq!(
        summary.training.aligned + summary.training.misaligned + summary.training.neutral,
        5_000
    );
}

#[test]
fn test_headless_sessions_are_reproducible() {
    let run = |seed| {
        let mut game = Game::new(headless_settings(seed, 3_000));
        let mut pilot = Autopilot::new(game.menu(), 3_000);
        game.run(&mut pilot)
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn test_summary_serializes() {
    let mut game = Game::new(headless_settings(1, 10));
    let mut pilot = Autopilot::new(game.menu(), 10);
    let summary = game.run(&mut pilot);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["ticks"], 10);
    assert_eq!(json["seed"], 1);
    assert!(json["score"]["player"].is_number());
    assert!(json["training"]["last_loss"].is_number());
}

#[test]
fn test_ball_past_agent_scores_for_player() {
    let mut game = Game::new(headless_settings(3, 0));
    game.state_mut().start();
    let state = game.state_mut();
    state.agent.pos.y = 0.0;
    state.ball.pos = Vec2::new(0.0, 300.0);
    state.ball.vel = Vec2::new(-0.8, 0.8);

    let report = game.update(&TickInput::default(), &mut Silent).unwrap();

    let state = game.state();
    assert_eq!(state.score, Score { player: 1, agent: 0 });
    assert!(
        report
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Scored(s) if s.scorer == Role::Human))
    );
    assert_eq!(state.ball.pos.x, 400.0);
    assert!(state.ball.pos.y >= 10.0 && state.ball.pos.y <= 590.0);
    assert!((state.ball.vel.x - 0.8).abs() < f32::EPSILON);
}

#[test]
fn test_ball_past_player_scores_for_agent() {
    let mut game = Game::new(headless_settings(4, 0));
    game.state_mut().start();
    let state = game.state_mut();
    state.player.pos.y = 0.0;
    state.ball.pos = Vec2::new(799.5, 300.0);
    state.ball.vel = Vec2::new(0.8, 0.8);

    game.update(&TickInput::default(), &mut Silent);

    let state = game.state();
    assert_eq!(state.score, Score { player: 0, agent: 1 });
    assert!(state.ball.vel.x < 0.0);
}

#[test]
fn test_reward_table() {
    let game = Game::new(headless_settings(5, 0));
    let mut agent = game.state().agent;
    agent.pos.y = 250.0;
    let mut ball = game.state().ball;

    ball.vel.x = -0.8;
    ball.pos.y = 300.0;
    assert_eq!(reward(&ball, &agent), 1.0);
    ball.pos.y = 400.0;
    assert_eq!(reward(&ball, &agent), -1.0);
    ball.vel.x = 0.8;
    assert_eq!(reward(&ball, &agent), 0.0);
}

#[test]
fn test_weight_snapshot_regression() {
    // Two hidden units, one active for [300, 250]
    let params = vec![
        0.01, -0.01, // w1 row 0
        -0.02, 0.01, // w1 row 1
        0.1, 0.0, // b1
        2.0, 3.0, // w2
        -0.25, // b2
    ];
    let controller =
        PaddleController::from_params(2, &params, &ControllerSettings::default()).unwrap();

    // Unit 0: 3.0 - 2.5 + 0.1 = 0.6 -> 2 * 0.6 - 0.25 = 0.95; unit 1 is dead
    let predicted = controller.predict(&[300.0, 250.0]);
    assert!((predicted - 0.95).abs() < 1e-5);
    assert_eq!(predicted.to_bits(), controller.predict(&[300.0, 250.0]).to_bits());
}
