use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{best_five, EvalError, HandResult};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Round phase. The four betting streets, then showdown, then ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Phase {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Ended,
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
            Phase::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// A betting decision. Serializes with an `action` tag and an `amount`
/// payload where one applies, e.g. `{"action":"raise","amount":60}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u64),
    Raise(u64),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no player with id {0:?} at the table")]
    UnknownPlayer(String),
    #[error("not this player's turn")]
    NotYourTurn,
    #[error("no actions allowed during {0}")]
    BettingClosed(Phase),
    #[error("cannot check facing a bet: {to_call} to call")]
    CheckFacingBet { to_call: u64 },
    #[error("bet or raise amount must be positive")]
    ZeroAmount,
    #[error("total bet {total} must exceed the current maximum {max_bet}")]
    BetTooLow { total: u64, max_bet: u64 },
    #[error("not enough chips: need {needed}, have {available}")]
    InsufficientChips { needed: u64, available: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("deck exhausted mid-deal")]
    DeckExhausted,
    #[error("starting stack {0} overflows the table's chip accounting")]
    StackTooLarge(u64),
    #[error("dealt an invalid combination: {0}")]
    InvalidDeal(#[from] HandError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdvanceError {
    #[error("no streets to deal during {0}")]
    NoBettingStreet(Phase),
    #[error("the current betting round is still open")]
    StreetIncomplete,
    #[error(transparent)]
    Deal(#[from] DealError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("seat {0} reached showdown without hole cards")]
    MissingHoleCards(usize),
    #[error("invalid showdown cards: {0}")]
    InvalidCards(#[from] HandError),
    #[error("hand evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NextRoundError {
    #[error("match over: a player is out of chips")]
    MatchOver,
    #[error("the current round has not been resolved")]
    RoundInProgress,
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Who sits at a seat when a match starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub id: String,
    pub name: String,
    pub is_bot: bool,
}

impl SeatConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_bot: bool) -> Self {
        Self { id: id.into(), name: name.into(), is_bot }
    }
}

/// Fixed parameters for a heads-up match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub seats: [SeatConfig; 2],
    pub starting_stack: u64,
    pub small_blind: u64,
    pub big_blind: u64,
    /// Dealer seat for the match (reduced modulo 2).
    pub dealer: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: [
                SeatConfig::new("player", "Player", false),
                SeatConfig::new("bot", "Bot", true),
            ],
            starting_stack: 1000,
            small_blind: 10,
            big_blind: 20,
            dealer: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) bet: u64,
    pub(crate) folded: bool,
    pub(crate) is_bot: bool,
}

impl Player {
    /// Returns the player's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's chip stack
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the player's hole cards, if dealt
    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Returns the player's current-street bet
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns whether the player has folded this round
    pub fn folded(&self) -> bool {
        self.folded
    }

    /// Returns whether this seat is driven by a bot strategy
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }
}

/// How a round was settled and who got the chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum RoundOutcome {
    /// One player folded; the other takes the pot without a showdown.
    Uncontested { winner: usize, amount: u64 },
    /// Both hands were compared and one was stronger.
    Showdown { winner: usize, amount: u64, hand: HandResult },
    /// Exact tie: the pot splits, with any odd chip to the non-dealer seat.
    SplitPot { shares: [u64; 2], hand: HandResult },
}

/// Full state of one heads-up round. The engine is the sole mutator;
/// presentation layers read it through [`PlayerView`](crate::view::PlayerView).
///
/// Seats are fixed at two and turn rotation is always "the other seat",
/// so this type does not generalize to larger tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameState {
    pub(crate) small_blind: u64,
    pub(crate) big_blind: u64,
    pub(crate) starting_stack: u64,

    pub(crate) deck: Deck,
    pub(crate) community: Board,
    pub(crate) players: [Player; 2],
    pub(crate) pot: u64,
    pub(crate) dealer: usize,
    pub(crate) current: usize,
    pub(crate) phase: Phase,
}

impl GameState {
    /// Start the first round of a match, shuffling with a seed drawn from
    /// the thread RNG.
    pub fn new_round(config: TableConfig) -> Result<Self, DealError> {
        let seed: u64 = rand::rng().random();
        Self::new_round_seeded(config, seed)
    }

    /// Deterministic variant of [`new_round`](Self::new_round) for tests
    /// and replays.
    pub fn new_round_seeded(config: TableConfig, seed: u64) -> Result<Self, DealError> {
        let TableConfig { seats, starting_stack, small_blind, big_blind, dealer } = config;
        // Every chip total in play (pot, a winner's stack) is bounded by the
        // two starting stacks combined, so this one check rules out overflow.
        if starting_stack.checked_mul(2).is_none() {
            return Err(DealError::StackTooLarge(starting_stack));
        }
        let players = seats.map(|s| Player {
            id: s.id,
            name: s.name,
            chips: starting_stack,
            hole: None,
            bet: 0,
            folded: false,
            is_bot: s.is_bot,
        });
        Self::start_round(players, small_blind, big_blind, starting_stack, dealer, seed)
    }

    /// Start the following round with carried-over stacks. Refuses while the
    /// current round is unresolved, and once either stack is empty.
    pub fn next_round(&self) -> Result<Self, NextRoundError> {
        let seed: u64 = rand::rng().random();
        self.next_round_seeded(seed)
    }

    /// Deterministic variant of [`next_round`](Self::next_round).
    pub fn next_round_seeded(&self, seed: u64) -> Result<Self, NextRoundError> {
        if self.phase != Phase::Ended {
            return Err(NextRoundError::RoundInProgress);
        }
        if self.players.iter().any(|p| p.chips == 0) {
            return Err(NextRoundError::MatchOver);
        }
        let players =
            self.players.clone().map(|p| Player { hole: None, bet: 0, folded: false, ..p });
        let state = Self::start_round(
            players,
            self.small_blind,
            self.big_blind,
            self.starting_stack,
            self.dealer,
            seed,
        )?;
        Ok(state)
    }

    fn start_round(
        players: [Player; 2],
        small_blind: u64,
        big_blind: u64,
        starting_stack: u64,
        dealer: usize,
        seed: u64,
    ) -> Result<Self, DealError> {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let dealer = dealer % 2;
        let mut state = GameState {
            small_blind,
            big_blind,
            starting_stack,
            deck,
            community: Board::empty(),
            players,
            pot: 0,
            dealer,
            // The small blind acts first preflop.
            current: (dealer + 1) % 2,
            phase: Phase::Preflop,
        };
        state.deal_hole_cards()?;
        state.post_blinds();
        debug!(
            "round started: seed {seed}, dealer seat {dealer}, blinds {}/{}",
            state.small_blind, state.big_blind
        );
        Ok(state)
    }

    fn deal_hole_cards(&mut self) -> Result<(), DealError> {
        // One card per seat per pass, two passes.
        let mut pairs = [[None; 2]; 2];
        for pass in 0..2 {
            for pair in pairs.iter_mut() {
                pair[pass] = self.deck.draw();
            }
        }
        for (seat, pair) in pairs.iter().enumerate() {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => {
                    self.players[seat].hole = Some(HoleCards::try_new(a, b)?);
                }
                _ => return Err(DealError::DeckExhausted),
            }
        }
        Ok(())
    }

    fn post_blinds(&mut self) {
        let sb_seat = (self.dealer + 1) % 2;
        self.post_blind(sb_seat, self.small_blind);
        self.post_blind(self.dealer, self.big_blind);
    }

    fn post_blind(&mut self, seat: usize, amount: u64) {
        let p = &mut self.players[seat];
        // A short stack posts what it has; stacks never go negative.
        let paid = p.chips.min(amount);
        p.chips -= paid;
        p.bet += paid;
        self.pot += paid;
    }

    /// Returns the small blind amount
    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    /// Returns the big blind amount
    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    /// Returns the stack each player started the match with
    pub fn starting_stack(&self) -> u64 {
        self.starting_stack
    }

    /// Returns the community cards dealt so far
    pub fn community(&self) -> &Board {
        &self.community
    }

    /// Returns both players in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current pot size
    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the dealer seat
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Returns the seat whose turn it is
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the highest current-street bet at the table
    pub fn max_bet(&self) -> u64 {
        self.players.iter().map(|p| p.bet).max().unwrap_or(0)
    }

    /// Chips the seat must add to match the current maximum bet.
    pub fn to_call(&self, seat: usize) -> u64 {
        self.max_bet().saturating_sub(self.players[seat].bet)
    }

    /// Seat index for a player id, if seated.
    pub fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    /// Cards never dealt this round, in draw order. Exposed for audits;
    /// per-player views hide them.
    pub fn undealt(&self) -> &[Card] {
        self.deck.remaining()
    }

    /// Apply one betting action for `player_id`. Rejections leave the state
    /// untouched; the same decision point can be presented again.
    pub fn apply_action(&mut self, player_id: &str, action: Action) -> Result<(), ActionError> {
        let seat = self
            .seat_of(player_id)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.to_string()))?;
        if !matches!(self.phase, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River) {
            return Err(ActionError::BettingClosed(self.phase));
        }
        if seat != self.current {
            return Err(ActionError::NotYourTurn);
        }

        match action {
            Action::Fold => {
                // Heads-up: one fold leaves a single player, so the round ends here.
                self.players[seat].folded = true;
                self.phase = Phase::Ended;
            }
            Action::Check => {
                let max = self.max_bet();
                let bet = self.players[seat].bet;
                if bet < max {
                    return Err(ActionError::CheckFacingBet { to_call: max - bet });
                }
            }
            Action::Call => {
                let delta = self.max_bet() - self.players[seat].bet;
                let p = &mut self.players[seat];
                if p.chips < delta {
                    return Err(ActionError::InsufficientChips {
                        needed: delta,
                        available: p.chips,
                    });
                }
                p.chips -= delta;
                p.bet += delta;
                self.pot += delta;
            }
            Action::Bet(amount) | Action::Raise(amount) => {
                if amount == 0 {
                    return Err(ActionError::ZeroAmount);
                }
                let max = self.max_bet();
                let p = &mut self.players[seat];
                if p.chips < amount {
                    return Err(ActionError::InsufficientChips {
                        needed: amount,
                        available: p.chips,
                    });
                }
                // amount <= chips, and bet + chips is conserved across actions,
                // so this sum cannot overflow.
                let total = p.bet + amount;
                if total <= max {
                    return Err(ActionError::BetTooLow { total, max_bet: max });
                }
                p.chips -= amount;
                p.bet += amount;
                self.pot += amount;
            }
        }

        debug!("{} {:?}: pot {}", self.players[seat].id, action, self.pot);
        // Turn passes to the other seat after every action, folds included.
        self.current = 1 - seat;
        Ok(())
    }

    /// A street is complete once at most one player is still in, or every
    /// remaining player's current-street bet equals the shared maximum.
    /// Fresh postflop streets start with all bets at zero, so a single
    /// check closes them.
    pub fn is_street_complete(&self) -> bool {
        if self.players.iter().filter(|p| !p.folded).count() <= 1 {
            return true;
        }
        let max = self.max_bet();
        self.players.iter().filter(|p| !p.folded).all(|p| p.bet == max)
    }

    /// Move to the next phase: reset street bets, then burn and deal the
    /// community cards that phase calls for. A failed deal kills the round.
    pub fn advance_street(&mut self) -> Result<(), AdvanceError> {
        let (deal, next) = match self.phase {
            Phase::Preflop => (Some(3), Phase::Flop),
            Phase::Flop => (Some(1), Phase::Turn),
            Phase::Turn => (Some(1), Phase::River),
            Phase::River => (None, Phase::Showdown),
            Phase::Showdown | Phase::Ended => {
                return Err(AdvanceError::NoBettingStreet(self.phase))
            }
        };
        if !self.is_street_complete() {
            return Err(AdvanceError::StreetIncomplete);
        }
        for p in &mut self.players {
            p.bet = 0;
        }
        if let Some(count) = deal {
            if let Err(e) = self.deal_community(count) {
                self.phase = Phase::Ended;
                return Err(e.into());
            }
            // Postflop streets start on the seat after the dealer.
            self.current = (self.dealer + 1) % 2;
        }
        self.phase = next;
        debug!("advanced to {}: board {}", self.phase, self.community.len());
        Ok(())
    }

    fn deal_community(&mut self, count: usize) -> Result<(), DealError> {
        self.deck.burn().ok_or(DealError::DeckExhausted)?;
        let cards = self.deck.draw_n(count);
        if cards.len() < count {
            return Err(DealError::DeckExhausted);
        }
        for card in cards {
            self.community.push(card);
        }
        Ok(())
    }

    /// Resolve the round if it can be resolved: award an uncontested pot to
    /// the last player standing, or compare hands at showdown. Returns
    /// `Ok(None)` while neither applies — including a still-open river — and
    /// after the pot has already been paid. Evaluation failures are fatal
    /// for the round.
    pub fn determine_winner(&mut self) -> Result<Option<RoundOutcome>, ShowdownError> {
        match self.resolve_round() {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.phase = Phase::Ended;
                Err(e)
            }
        }
    }

    fn resolve_round(&mut self) -> Result<Option<RoundOutcome>, ShowdownError> {
        let active: Vec<usize> =
            (0..self.players.len()).filter(|&s| !self.players[s].folded).collect();
        if active.is_empty() {
            return Ok(None);
        }
        if active.len() == 1 {
            let winner = active[0];
            if self.pot == 0 {
                return Ok(None);
            }
            let amount = self.pot;
            self.players[winner].chips += amount;
            self.pot = 0;
            for p in &mut self.players {
                p.bet = 0;
            }
            self.phase = Phase::Ended;
            info!("{} wins {amount} uncontested", self.players[winner].id);
            return Ok(Some(RoundOutcome::Uncontested { winner, amount }));
        }
        if self.phase != Phase::Showdown || self.community.len() < 5 {
            return Ok(None);
        }

        let first = self.showdown_hand(0)?;
        let second = self.showdown_hand(1)?;
        let amount = self.pot;
        self.pot = 0;
        for p in &mut self.players {
            p.bet = 0;
        }
        self.phase = Phase::Ended;
        let outcome = match first.cmp(&second) {
            Ordering::Greater => {
                self.players[0].chips += amount;
                info!("{} wins {amount} with {}", self.players[0].id, first.category);
                RoundOutcome::Showdown { winner: 0, amount, hand: first }
            }
            Ordering::Less => {
                self.players[1].chips += amount;
                info!("{} wins {amount} with {}", self.players[1].id, second.category);
                RoundOutcome::Showdown { winner: 1, amount, hand: second }
            }
            Ordering::Equal => {
                let mut shares = [amount / 2; 2];
                shares[(self.dealer + 1) % 2] += amount % 2;
                self.players[0].chips += shares[0];
                self.players[1].chips += shares[1];
                info!("split pot {shares:?} on {}", first.category);
                RoundOutcome::SplitPot { shares, hand: first }
            }
        };
        Ok(Some(outcome))
    }

    fn showdown_hand(&self, seat: usize) -> Result<HandResult, ShowdownError> {
        let hole = self.players[seat].hole.ok_or(ShowdownError::MissingHoleCards(seat))?;
        validate_holdem(&hole, &self.community)?;
        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&hole.as_array());
        cards.extend_from_slice(self.community.as_slice());
        Ok(best_five(&cards)?)
    }
}
