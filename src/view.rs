use crate::game::{GameState, Phase};
use crate::hand::{Board, HoleCards};
use serde::Serialize;

/// One seat as a viewer is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub id: String,
    pub name: String,
    pub chips: u64,
    pub bet: u64,
    pub folded: bool,
    pub is_bot: bool,
    /// `None` while hidden from this viewer.
    pub hole: Option<HoleCards>,
}

/// Immutable snapshot of a round for one viewer. This is the only state
/// shape that leaves the engine: the deck stays behind, and hole cards are
/// filtered per viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub players: [SeatView; 2],
    pub community: Board,
    pub pot: u64,
    pub current: usize,
    pub dealer: usize,
    pub phase: Phase,
    pub small_blind: u64,
    pub big_blind: u64,
    #[serde(skip)]
    viewer_seat: Option<usize>,
}

impl PlayerView {
    /// Project the state for one viewer: their own hole cards are visible,
    /// the opponent's only once a showdown reveals them. A round that ended
    /// on a fold reveals nothing. Unknown ids get a spectator view with
    /// every hand hidden.
    pub fn of(state: &GameState, viewer_id: &str) -> Self {
        let viewer_seat = state.seat_of(viewer_id);
        let revealed = state.phase() == Phase::Showdown
            || (state.phase() == Phase::Ended && state.players().iter().all(|p| !p.folded()));
        let seat = |i: usize| {
            let p = &state.players()[i];
            SeatView {
                id: p.id().to_string(),
                name: p.name().to_string(),
                chips: p.chips(),
                bet: p.bet(),
                folded: p.folded(),
                is_bot: p.is_bot(),
                hole: if viewer_seat == Some(i) || revealed { p.hole() } else { None },
            }
        };
        Self {
            players: [seat(0), seat(1)],
            community: state.community().clone(),
            pot: state.pot(),
            current: state.current(),
            dealer: state.dealer(),
            phase: state.phase(),
            small_blind: state.small_blind(),
            big_blind: state.big_blind(),
            viewer_seat,
        }
    }

    /// The viewer's own seat, when seated.
    pub fn me(&self) -> Option<&SeatView> {
        self.viewer_seat.map(|s| &self.players[s])
    }

    /// The opposing seat, when the viewer is seated.
    pub fn opponent(&self) -> Option<&SeatView> {
        self.viewer_seat.map(|s| &self.players[1 - s])
    }

    /// Highest current-street bet at the table.
    pub fn max_bet(&self) -> u64 {
        self.players.iter().map(|p| p.bet).max().unwrap_or(0)
    }

    /// Chips the viewer must add to match the current bet; zero for
    /// spectators.
    pub fn to_call(&self) -> u64 {
        match self.me() {
            Some(me) => self.max_bet().saturating_sub(me.bet),
            None => 0,
        }
    }

    /// Whether the viewer may act right now.
    pub fn is_my_turn(&self) -> bool {
        self.viewer_seat == Some(self.current)
            && matches!(self.phase, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }
}
