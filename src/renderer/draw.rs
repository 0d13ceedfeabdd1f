//! Draw-request stream for a frame
//!
//! `render` walks the game state and yields what to draw, in a fixed order:
//! paddle, ball, unbroken bricks row-major, the countdown (while it runs),
//! lives, score. The stream is lazy and can be cloned to replay it.

use std::borrow::Cow;
use std::iter;

use serde::{Deserialize, Serialize};

use super::text::zero_padded;
use crate::colors;
use crate::consts::*;
use crate::sim::{GameState, Rect};

/// One thing for a backend to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawRequest {
    /// Solid filled rectangle
    Rect { rect: Rect, color: u32 },
    /// Text anchored at the bottom-left of its first glyph
    Text {
        text: Cow<'static, str>,
        x: i32,
        y: i32,
        color: u32,
    },
}

impl DrawRequest {
    fn rect(rect: Rect, color: u32) -> Self {
        DrawRequest::Rect { rect, color }
    }

    fn text(text: impl Into<Cow<'static, str>>, (x, y): (i32, i32)) -> Self {
        DrawRequest::Text {
            text: text.into(),
            x,
            y,
            color: colors::WHITE,
        }
    }
}

/// Draw requests for the current state; never mutates it
pub fn render(state: &GameState) -> impl Iterator<Item = DrawRequest> + Clone + '_ {
    let entities = iter::once_with(move || DrawRequest::rect(state.paddle.rect, state.paddle.color))
        .chain(iter::once_with(move || DrawRequest::rect(state.ball.rect, state.ball.color)));

    let bricks = state
        .bricks
        .iter()
        .filter(|b| !b.broken)
        .map(|b| DrawRequest::rect(b.rect, b.color));

    let countdown = state.countdown;
    let countdown_len = if countdown > 0.0 { 2 } else { 0 };
    let countdown_text = iter::once_with(move || DrawRequest::text(COUNTDOWN_LABEL, COUNTDOWN_LABEL_POS))
        .chain(iter::once_with(move || {
            DrawRequest::text((countdown as u32).to_string(), COUNTDOWN_NUM_POS)
        }))
        .take(countdown_len);

    let hud = iter::once_with(move || DrawRequest::text(state.lives.to_string(), LIVES_POS))
        .chain(iter::once_with(move || {
            DrawRequest::text(zero_padded(state.score, SCORE_DIGITS), SCORE_POS)
        }));

    entities.chain(bricks).chain(countdown_text).chain(hud)
}
