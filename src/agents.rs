//! Agents: pluggable action policies for seats.
//!
//! A [`Strategy`] consumes the same per-player projection a human would see
//! and emits an [`Action`]. The engine never calls strategies itself; a
//! driving loop asks the strategy for the current seat and applies the
//! result, so transports can pace turns however they like.

use crate::game::Action;
use crate::view::PlayerView;
use std::collections::VecDeque;

/// A pluggable action policy for one seat.
///
/// Strategies decide from a [`PlayerView`], so they see exactly what the
/// seat they play would see; the engine state itself stays out of reach.
pub trait Strategy {
    fn decide(&mut self, view: &PlayerView) -> Action;
}

mod bots;

pub use bots::HeuristicBot;

/// Plays back a fixed action list, then checks. Handy for driving rounds
/// in tests.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    actions: VecDeque<Action>,
}

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { actions: actions.into_iter().collect() }
    }
}

impl Strategy for Scripted {
    fn decide(&mut self, _view: &PlayerView) -> Action {
        self.actions.pop_front().unwrap_or(Action::Check)
    }
}
