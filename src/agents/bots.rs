use crate::agents::Strategy;
use crate::evaluator::best_five;
use crate::game::Action;
use crate::hand::{Board, HoleCards};
use crate::view::PlayerView;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// A strength-threshold bot.
///
/// It estimates its hand in `[0, 1]` (a rough preflop heuristic before any
/// community cards, the best five-card category afterwards) and picks an
/// action by fixed cutoffs, mixing in a random bluff-bet on middling hands.
/// It only ever emits actions the engine will accept.
#[derive(Debug)]
pub struct HeuristicBot {
    rng: StdRng,
}

impl HeuristicBot {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { rng: StdRng::from_seed(seed) }
    }

    /// Deterministic bot for reproducible tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicBot {
    fn decide(&mut self, view: &PlayerView) -> Action {
        let me = match view.me() {
            Some(me) => me,
            None => return Action::Check,
        };
        let strength = match &me.hole {
            Some(hole) => hand_strength(hole, &view.community),
            None => 0.0,
        };
        let to_call = view.to_call();
        let chips = me.chips;

        if strength < 0.3 {
            return if to_call > 0 { Action::Fold } else { Action::Check };
        }
        if strength < 0.5 {
            if to_call == 0 {
                return Action::Check;
            }
            // Only chase cheap calls on a mediocre hand.
            return if to_call <= chips / 10 { Action::Call } else { Action::Fold };
        }
        if strength < 0.7 {
            if to_call == 0 {
                if self.rng.random::<f64>() > 0.6 {
                    return bet_or_check(view.big_blind * 2, chips);
                }
                return Action::Check;
            }
            return if to_call <= chips / 5 { Action::Call } else { Action::Fold };
        }
        if to_call == 0 {
            return bet_or_check(view.big_blind * 3, chips);
        }
        if to_call <= chips {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

/// Bet `target` capped by the stack, or check when nothing can be put in.
fn bet_or_check(target: u64, chips: u64) -> Action {
    let amount = target.min(chips);
    if amount == 0 {
        Action::Check
    } else {
        Action::Bet(amount)
    }
}

fn hand_strength(hole: &HoleCards, community: &Board) -> f64 {
    if community.is_empty() {
        return preflop_strength(hole);
    }
    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(community.as_slice());
    if cards.len() < 5 {
        return 0.3;
    }
    match best_five(&cards) {
        Ok(result) => (result.category.ordinal() as f64 + 1.0) / 10.0,
        Err(_) => 0.0,
    }
}

/// Pairs rate by their height, then suited or high cards, then rank alone.
fn preflop_strength(hole: &HoleCards) -> f64 {
    let a = hole.first();
    let b = hole.second();
    let high = f64::from(a.rank().value().max(b.rank().value()));
    if a.rank() == b.rank() {
        return 0.5 + high / 28.0;
    }
    if a.suit() == b.suit() && high >= 11.0 {
        return 0.6;
    }
    if high >= 13.0 {
        return 0.55;
    }
    0.3 + high / 50.0
}
