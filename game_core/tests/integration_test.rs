use game_core::*;
use glam::Vec2;

fn running_match() -> Match {
    let mut game = Match::default();
    game.apply(Command::Start);
    game
}

#[test]
fn test_ten_ticks_from_serve() {
    let mut game = running_match();

    for _ in 0..10 {
        game.tick();
    }

    let ball = game.ball_geometry();
    assert!((ball.x - 0.15).abs() < 1e-5, "ball.x = {}", ball.x);
    assert!((ball.y - 0.02).abs() < 1e-5, "ball.y = {}", ball.y);
    assert_eq!(game.scores(), (0, 0));
}

#[test]
fn test_free_flight_moves_by_velocity() {
    let mut game = running_match();
    game.place_ball(Vec2::new(-0.2, 0.1), Vec2::new(0.02, -0.03));

    let events = game.tick();

    let ball = game.ball();
    assert_eq!(events, Events::new());
    assert!((ball.pos - Vec2::new(-0.18, 0.07)).length() < 1e-6);
    assert_eq!(ball.vel, Vec2::new(0.02, -0.03), "velocity unchanged in free flight");
}

#[test]
fn test_paddle_velocity_saturates_after_eighty_commands() {
    let mut game = running_match();

    for _ in 0..80 {
        game.apply(Command::LeftUp);
    }
    game.tick();

    assert_eq!(game.paddle(Side::Left).velocity, Params::PADDLE_MAX_VELOCITY);

    for _ in 0..20 {
        game.apply(Command::LeftUp);
    }
    assert_eq!(
        game.paddle(Side::Left).velocity,
        Params::PADDLE_MAX_VELOCITY,
        "extra commands must not exceed the cap"
    );
}

#[test]
fn test_paddle_never_leaves_arena() {
    let mut game = running_match();
    // Keep the ball away from both goals while the paddle runs into the wall
    let half_length = game.paddle(Side::Right).half_length;

    for _ in 0..100 {
        game.apply(Command::RightUp);
    }

    let mut stopped = false;
    for _ in 0..10 {
        game.place_ball(Vec2::ZERO, Vec2::ZERO);
        game.tick();
        let paddle = game.paddle(Side::Right);
        assert!(paddle.y <= Params::ARENA_MAX - half_length + 1e-6);
        assert!(paddle.y >= Params::ARENA_MIN + half_length - 1e-6);
        if paddle.velocity == 0.0 {
            stopped = true;
        }
    }
    assert!(stopped, "paddle should stop dead at the wall");
}

#[test]
fn test_ball_bounces_off_top_wall() {
    let mut game = running_match();
    game.place_ball(Vec2::new(0.0, 0.94), Vec2::new(0.01, 0.02));

    let events = game.tick();

    assert!(events.ball_hit_wall);
    assert_eq!(game.ball().vel, Vec2::new(0.01, -0.02));
}

#[test]
fn test_forced_ball_past_left_edge_scores_for_right() {
    let mut game = running_match();
    game.apply(Command::LeftDown);
    game.tick();
    game.place_ball(Vec2::new(-1.01, 0.0), Vec2::new(-0.015, 0.0));

    assert_eq!(game.check_score(), Some(Side::Right));

    assert_eq!(game.scores(), (0, 1));
    let ball = game.ball();
    assert_eq!(ball.pos, Vec2::ZERO);
    assert_eq!(ball.vel, Vec2::new(Params::BALL_SERVE_VX, Params::BALL_SERVE_VY));
    for side in [Side::Left, Side::Right] {
        let paddle = game.paddle(side);
        assert_eq!(paddle.y, 0.0);
        assert_eq!(paddle.velocity, 0.0);
    }
}

#[test]
fn test_serve_returns_off_right_paddle_then_beats_left() {
    let mut game = running_match();

    // The serve climbs slowly: it meets the idle right paddle's face, comes
    // back, and passes above the idle left paddle.
    let mut scorer = None;
    for _ in 0..10_000 {
        let events = game.tick();
        if let Some(side) = events.scorer() {
            scorer = Some(side);
            break;
        }
    }

    assert_eq!(scorer, Some(Side::Right));
    assert_eq!(game.scores(), (0, 1));
    assert_eq!(game.state(), MatchState::Waiting);
}

#[test]
fn test_flat_hit_with_moving_paddle_adds_spin() {
    let mut game = running_match();
    for _ in 0..10 {
        game.apply(Command::RightDown);
    }
    // Ball ends next to the paddle face after this tick
    game.place_ball(Vec2::new(0.725, -0.05), Vec2::new(0.015, 0.0));

    let events = game.tick();

    assert_eq!(events.contact, Some((Side::Right, Contact::Face)));
    let ball = game.ball();
    assert_eq!(ball.vel.x, -0.015);
    assert!((ball.vel.y - 0.3 * -0.05).abs() < 1e-6);
}

#[test]
fn test_scores_only_increase() {
    let mut game = Match::new(Config {
        reset_policy: ResetPolicy::KeepRunning,
        ..Config::default()
    });
    game.start();

    let mut last = game.scores();
    for i in 0..6 {
        let x = if i % 2 == 0 { -1.02 } else { 1.02 };
        game.place_ball(Vec2::new(x, 0.0), Vec2::ZERO);
        game.check_score();
        let now = game.scores();
        assert_eq!(now.0 + now.1, last.0 + last.1 + 1);
        assert!(now.0 >= last.0 && now.1 >= last.1);
        last = now;
    }
    assert_eq!(last, (3, 3));
}
