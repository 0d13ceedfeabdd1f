//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::bounce::{bounce_brick, bounce_paddle};
use super::state::{GamePhase, GameState, LogicalKey};
use crate::consts::*;

/// Advance the game state by one fixed timestep of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, dt_ms: f32) {
    let secs = dt_ms / MS_PER_SECOND;

    match state.phase() {
        GamePhase::UserPaused => return,
        GamePhase::Countdown => {
            tick_countdown(state, secs);
            return;
        }
        GamePhase::Playing => {}
    }

    // Paddle: opposing keys cancel out
    let left = state.is_key_down(LogicalKey::Left);
    let right = state.is_key_down(LogicalKey::Right);
    if left && !right {
        state.paddle.move_left(secs);
    } else if right && !left {
        state.paddle.move_right(secs);
    }

    state.ball.integrate(secs);

    // Ball reached the bottom edge
    if state.ball.rect.pos.y == 0.0 {
        lose_life(state);
        return;
    }

    let ball_rect = state.ball.rect;
    let paddle_rect = state.paddle.rect;

    // Walls
    let x = ball_rect.pos.x;
    if x == 0.0 || x == (FIELD_WIDTH - BALL_WIDTH) as f32 {
        state.ball.vel.x = -state.ball.vel.x;
    }
    let y = ball_rect.pos.y;
    if y == 0.0 || y == (FIELD_HEIGHT - BALL_HEIGHT) as f32 {
        state.ball.vel.y = -state.ball.vel.y;
    }

    if ball_rect.overlaps(&paddle_rect) {
        bounce_paddle(&mut state.ball, &ball_rect, &paddle_rect);
    }

    // Every overlapping brick breaks and bounces, so flips can compound
    let mut hits = 0u32;
    for brick in state.bricks.iter_mut() {
        if brick.broken || !ball_rect.overlaps(&brick.rect) {
            continue;
        }
        brick.broken = true;
        hits += 1;
        bounce_brick(&mut state.ball, &ball_rect, &brick.rect);
    }
    for _ in 0..hits {
        state.award_brick();
    }
    if hits > 0 {
        log::debug!(
            "Broke {} brick(s), score {}, {} left",
            hits,
            state.score,
            state.bricks_remaining()
        );
    }
}

/// Run the round countdown down; play resumes on the tick it reaches zero
fn tick_countdown(state: &mut GameState, secs: f32) {
    if state.countdown >= 0.0 {
        state.countdown = (state.countdown - secs).max(0.0);
    }
    if state.countdown == 0.0 {
        state.paused = false;
        log::trace!("Countdown finished");
    }
}

/// Spend a life, or start over when none are left
fn lose_life(state: &mut GameState) {
    if state.lives > 0 {
        state.lives -= 1;
        state.restart_round();
        log::info!("Life lost, {} remaining", state.lives);
    } else {
        log::info!("Out of lives with score {}, starting a new game", state.score);
        state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use glam::Vec2;
    use proptest::prelude::*;

    /// A state already past the countdown with the ball parked mid-field
    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.paused = false;
        state.countdown = 0.0;
        state.ball.rect.pos = Vec2::new(150.0, 80.0);
        state
    }

    #[test]
    fn test_countdown_to_playing() {
        let mut state = GameState::new();
        assert_eq!(state.phase(), GamePhase::Countdown);

        let ball_before = state.ball.clone();
        tick(&mut state, 1000.0);
        assert_eq!(state.phase(), GamePhase::Countdown);
        assert_eq!(state.countdown, COUNTDOWN_SECONDS - 1.0);
        // Nothing moves during the countdown
        assert_eq!(state.ball, ball_before);

        tick(&mut state, 2000.0);
        tick(&mut state, 1000.0);
        assert_eq!(state.countdown, 0.0);
        assert_eq!(state.phase(), GamePhase::Playing);
        // The transition tick itself does not move the ball
        assert_eq!(state.ball, ball_before);

        tick(&mut state, MS_PER_UPDATE);
        assert_ne!(state.ball.rect.pos, ball_before.rect.pos);
    }

    #[test]
    fn test_countdown_at_fixed_rate() {
        let mut state = GameState::new();
        let mut ticks = 0;
        while state.phase() == GamePhase::Countdown {
            tick(&mut state, MS_PER_UPDATE);
            ticks += 1;
            assert!(ticks < 1000);
        }
        // 3.5s at 60Hz, give or take float accumulation
        assert!((209..=211).contains(&ticks), "ticks={ticks}");
        assert_eq!(state.countdown, 0.0);
    }

    #[test]
    fn test_user_pause_freezes_everything() {
        let mut state = GameState::new();
        state.set_key(LogicalKey::TogglePauseUser, true);
        let before = state.clone();
        for _ in 0..100 {
            tick(&mut state, MS_PER_UPDATE);
        }
        assert_eq!(state, before);

        let mut state = playing_state();
        state.set_key(LogicalKey::Left, true);
        state.set_key(LogicalKey::TogglePauseUser, true);
        let before = state.clone();
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state, before);
    }

    #[test]
    fn test_paddle_movement() {
        let mut state = playing_state();
        let x0 = state.paddle.rect.pos.x;

        state.set_key(LogicalKey::Right, true);
        tick(&mut state, 100.0);
        assert!((state.paddle.rect.pos.x - (x0 + 9.0)).abs() < 1e-4);

        // Both held: no movement
        state.set_key(LogicalKey::Left, true);
        let x1 = state.paddle.rect.pos.x;
        tick(&mut state, 100.0);
        assert_eq!(state.paddle.rect.pos.x, x1);

        state.set_key(LogicalKey::Right, false);
        tick(&mut state, 100.0);
        assert!((state.paddle.rect.pos.x - (x1 - 9.0)).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_clamped_at_left_edge() {
        let mut state = playing_state();
        state.paddle.rect.pos.x = 0.0;
        state.set_key(LogicalKey::Left, true);
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.paddle.rect.pos.x, 0.0);
    }

    #[test]
    fn test_paddle_clamped_at_right_edge() {
        let mut state = playing_state();
        state.paddle.rect.pos.x = (FIELD_WIDTH - PADDLE_WIDTH) as f32 - 0.5;
        state.set_key(LogicalKey::Right, true);
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.paddle.rect.pos.x, (FIELD_WIDTH - PADDLE_WIDTH) as f32);
    }

    #[test]
    fn test_life_lost_at_bottom() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(60.0, 0.5);
        state.ball.vel = Vec2::new(0.0, -90.0);
        state.score = 12;

        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.lives, LIVES_INIT - 1);
        assert_eq!(state.phase(), GamePhase::Countdown);
        assert_eq!(state.countdown, COUNTDOWN_SECONDS);
        assert_eq!(state.ball.rect.pos, Vec2::new(BALL_INIT_X, BALL_INIT_Y));
        // Score survives a lost life
        assert_eq!(state.score, 12);
    }

    #[test]
    fn test_last_life_then_full_reset() {
        let mut state = playing_state();
        state.lives = 1;
        state.score = 57;
        state.bricks.rows[0][0].broken = true;
        state.ball.rect.pos = Vec2::new(60.0, 0.5);
        state.ball.vel = Vec2::new(0.0, -90.0);

        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 57);
        assert!(state.bricks.rows[0][0].broken);

        // Next loss with no lives left restarts the whole game
        state.paused = false;
        state.countdown = 0.0;
        state.ball.rect.pos = Vec2::new(60.0, 0.5);
        state.ball.vel = Vec2::new(0.0, -90.0);
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.lives, LIVES_INIT);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks_remaining(), BRICK_ROWS * BRICK_COLUMNS);
        assert_eq!(state.phase(), GamePhase::Countdown);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_life_loss_skips_collisions() {
        let mut state = playing_state();
        // Paddle dropped to the floor so the clamped ball lands on it
        state.paddle.rect.pos = Vec2::new(128.0, -4.0);
        state.ball.rect.pos = Vec2::new(150.0, 1.0);
        state.ball.vel = Vec2::new(30.0, -90.0);
        let paddle_before = state.paddle.clone();

        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.lives, LIVES_INIT - 1);
        assert_eq!(state.ball, crate::sim::Ball::default());
        assert_eq!(state.paddle, paddle_before);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks_remaining(), BRICK_ROWS * BRICK_COLUMNS);
    }

    #[test]
    fn test_walls_reflect() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(0.5, 80.0);
        state.ball.vel = Vec2::new(-60.0, 30.0);
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.ball.rect.pos.x, 0.0);
        assert_eq!(state.ball.vel.x, 60.0);
        assert_eq!(state.ball.vel.y, 30.0);

        let right = (FIELD_WIDTH - BALL_WIDTH) as f32;
        state.ball.rect.pos = Vec2::new(right - 0.5, 80.0);
        state.ball.vel = Vec2::new(60.0, 30.0);
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.ball.rect.pos.x, right);
        assert_eq!(state.ball.vel.x, -60.0);
    }

    #[test]
    fn test_ceiling_reflects() {
        let mut state = playing_state();
        // Clear a column so the ball can reach the ceiling
        for row in state.bricks.rows.iter_mut() {
            row[9].broken = true;
            row[10].broken = true;
        }
        let top = (FIELD_HEIGHT - BALL_HEIGHT) as f32;
        state.ball.rect.pos = Vec2::new(156.0, top - 0.5);
        state.ball.vel = Vec2::new(0.0, 90.0);
        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.ball.rect.pos.y, top);
        assert_eq!(state.ball.vel.y, -90.0);
    }

    #[test]
    fn test_single_brick_from_below() {
        let mut state = playing_state();
        // Sits 1px under brick (row 0, col 2), rising straight up
        state.ball.rect.pos = Vec2::new(36.0, 131.0);
        state.ball.vel = Vec2::new(0.0, 90.0);

        tick(&mut state, MS_PER_UPDATE);
        assert!(state.bricks.rows[0][2].broken);
        assert_eq!(state.bricks_remaining(), BRICK_ROWS * BRICK_COLUMNS - 1);
        assert_eq!(state.score, SCORE_PER_BRICK);
        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.vel.x, 0.0);
    }

    #[test]
    fn test_two_bricks_in_one_tick() {
        let mut state = playing_state();
        // Straddles bricks (0, 1) and (0, 2) from below
        state.ball.rect.pos = Vec2::new(28.0, 131.0);
        state.ball.vel = Vec2::new(0.0, 90.0);

        tick(&mut state, MS_PER_UPDATE);
        assert!(state.bricks.rows[0][1].broken);
        assert!(state.bricks.rows[0][2].broken);
        assert_eq!(state.score, 2 * SCORE_PER_BRICK);
        // First brick flips the ball downward, the second sees it separating
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_corner_hits_flip_both_axes() {
        let mut state = playing_state();
        // Overlaps (0, 2), (0, 3), (1, 2) and (1, 3) while rising to the right
        state.ball.rect.pos = Vec2::new(42.0, 141.0);
        state.ball.vel = Vec2::new(60.0, 60.0);

        tick(&mut state, 0.0);
        for (row, col) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
            assert!(state.bricks.rows[row][col].broken, "brick ({row}, {col})");
        }
        assert_eq!(state.score, 4 * SCORE_PER_BRICK);
        // Left face of (0, 3) flips x, underside of (1, 2) flips y
        assert_eq!(state.ball.vel, Vec2::new(-60.0, -60.0));
    }

    #[test]
    fn test_broken_brick_not_hit_again() {
        let mut state = playing_state();
        state.bricks.rows[0][2].broken = true;
        state.ball.rect.pos = Vec2::new(36.0, 131.0);
        state.ball.vel = Vec2::new(0.0, 90.0);

        tick(&mut state, MS_PER_UPDATE);
        assert_eq!(state.score, 0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_paddle_bounce_in_tick() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(180.0, 24.5);
        state.ball.vel = Vec2::new(0.0, -90.0);

        tick(&mut state, MS_PER_UPDATE);
        assert!(state.ball.vel.y > 0.0);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new();
        let mut state2 = GameState::new();
        let keys = [LogicalKey::Left, LogicalKey::Right];

        for i in 0..2000 {
            let key = keys[(i / 90) % 2];
            let down = i % 7 != 0;
            state1.set_key(key, down);
            state2.set_key(key, down);
            tick(&mut state1, MS_PER_UPDATE);
            tick(&mut state2, MS_PER_UPDATE);
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_ball_stays_in_field(
            x in 0.0f32..312.0,
            y in 1.0f32..232.0,
            vx in -5000.0f32..5000.0,
            vy in -5000.0f32..5000.0,
            dt in 0.0f32..500.0,
        ) {
            let mut state = playing_state();
            state.ball.rect.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            tick(&mut state, dt);
            let pos = state.ball.rect.pos;
            prop_assert!(pos.x >= 0.0 && pos.x <= (FIELD_WIDTH - BALL_WIDTH) as f32);
            prop_assert!(pos.y >= 0.0 && pos.y <= (FIELD_HEIGHT - BALL_HEIGHT) as f32);
        }

        #[test]
        fn prop_user_pause_is_noop(
            ticks in 1usize..50,
            dt in 0.0f32..100.0,
            left in any::<bool>(),
            started in any::<bool>(),
        ) {
            let mut state = if started { playing_state() } else { GameState::new() };
            state.set_key(LogicalKey::Left, left);
            state.set_key(LogicalKey::TogglePauseUser, true);
            let before = state.clone();
            for _ in 0..ticks {
                tick(&mut state, dt);
            }
            prop_assert_eq!(state, before);
        }

        #[test]
        fn prop_speed_and_bricks_hold_over_play(
            steps in 1usize..600,
            key_pattern in proptest::collection::vec(0u8..3, 1..20),
        ) {
            let mut state = playing_state();
            let mut broken = vec![false; BRICK_ROWS * BRICK_COLUMNS];
            let lives = state.lives;
            for i in 0..steps {
                match key_pattern[i % key_pattern.len()] {
                    0 => { state.set_key(LogicalKey::Left, true); state.set_key(LogicalKey::Right, false); }
                    1 => { state.set_key(LogicalKey::Left, false); state.set_key(LogicalKey::Right, true); }
                    _ => { state.set_key(LogicalKey::Left, false); state.set_key(LogicalKey::Right, false); }
                }
                tick(&mut state, MS_PER_UPDATE);
                prop_assert!((state.ball.vel.length() - BALL_SPEED).abs() < 1e-2);
                prop_assert!(state.score <= SCORE_MAX);
                if state.lives != lives {
                    // Round restarted; brick history no longer applies
                    break;
                }
                for (seen, brick) in broken.iter_mut().zip(state.bricks.iter()) {
                    prop_assert!(!*seen || brick.broken);
                    *seen = brick.broken;
                }
            }
        }

        #[test]
        fn prop_score_never_exceeds_cap(start in 990u32..=999, hits in 0usize..100) {
            let mut state = playing_state();
            state.score = start;
            for _ in 0..hits {
                state.award_brick();
            }
            prop_assert!(state.score <= SCORE_MAX);
        }

        #[test]
        fn prop_brick_bounce_preserves_speed(
            angle in 0.0f64..std::f64::consts::TAU,
            dx in -7.5f32..15.5,
            dy in -7.5f32..7.5,
        ) {
            let mut state = playing_state();
            state.ball.set_angle(angle);
            let brick = Rect::new(Vec2::new(100.0, 140.0), BRICK_WIDTH, BRICK_HEIGHT);
            let ball_rect = Rect::new(Vec2::new(100.0 + dx, 140.0 + dy), BALL_WIDTH, BALL_HEIGHT);
            let before = state.ball.vel.length();
            crate::sim::bounce::bounce_brick(&mut state.ball, &ball_rect, &brick);
            prop_assert!((state.ball.vel.length() - before).abs() < 1e-4);
        }
    }
}
