//! Round state.
//!
//! A `Round` is the board plus the bookkeeping for the turn in progress.
//! It is owned by [`super::MemoryGame`]; outside the engine it is read-only.
//!
//! ## Turn bookkeeping
//!
//! - `pending` holds the face-up cards of the current turn (0, 1 or 2)
//! - `settle` is set while a mismatched pair waits to flip back; the board
//!   is locked exactly while it is set
//!
//! Uses `im::Vector` for the board so snapshots are O(1) clones.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::scheduler::TaskId;
use crate::cards::{Card, CardId, RevealState, Symbol};

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Dealt, no card revealed yet.
    #[default]
    NotStarted,
    /// At least one card revealed, pairs remain.
    InProgress,
    /// Every pair matched.
    Completed,
}

/// The board and current-turn state of one round.
#[derive(Clone, Debug)]
pub struct Round {
    number: u32,
    cards: Vector<Card>,
    positions: FxHashMap<CardId, usize>,
    status: RoundStatus,
    pending: SmallVec<[CardId; 2]>,
    settle: Option<TaskId>,
    solved: Vec<Symbol>,
}

impl Round {
    /// Start a round over `cards`, in board layout order.
    #[must_use]
    pub fn new(number: u32, cards: Vec<Card>) -> Self {
        let positions = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self {
            number,
            cards: cards.into_iter().collect(),
            positions,
            status: RoundStatus::NotStarted,
            pending: SmallVec::new(),
            settle: None,
            solved: Vec::new(),
        }
    }

    /// Round number within the engine, starting at 1.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Board in layout order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).and_then(|&i| self.cards.get(i))
    }

    /// Layout index of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// The first card of an unfinished turn.
    #[must_use]
    pub fn pending_first(&self) -> Option<CardId> {
        match self.pending.as_slice() {
            [first] => Some(*first),
            _ => None,
        }
    }

    /// Face-up cards of the current turn.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Is a mismatched pair waiting to flip back?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.settle.is_some()
    }

    /// Task that will flip the mismatched pair back.
    #[must_use]
    pub fn settle_task(&self) -> Option<TaskId> {
        self.settle
    }

    /// Matched symbols, in the order they were solved.
    #[must_use]
    pub fn solved(&self) -> &[Symbol] {
        &self.solved
    }

    #[must_use]
    pub fn count_in(&self, state: RevealState) -> usize {
        self.cards.iter().filter(|c| c.reveal_state == state).count()
    }

    // === Mutation (engine only) ===

    fn set_state(&mut self, id: CardId, state: RevealState) {
        if let Some(&i) = self.positions.get(&id) {
            if let Some(card) = self.cards.get_mut(i) {
                card.reveal_state = state;
            }
        }
    }

    /// Flip a hidden card face-up.
    ///
    /// Returns the turn's first card when `id` is the second one.
    pub(crate) fn reveal(&mut self, id: CardId) -> Option<CardId> {
        debug_assert!(self.pending.len() < 2 && !self.is_locked());
        self.set_state(id, RevealState::Revealed);
        if self.status == RoundStatus::NotStarted {
            self.status = RoundStatus::InProgress;
        }
        let first = self.pending_first();
        self.pending.push(id);
        first
    }

    /// Mark the pending pair as matched and clear the turn.
    pub(crate) fn resolve_match(&mut self, first: CardId, second: CardId) {
        self.set_state(first, RevealState::Matched);
        self.set_state(second, RevealState::Matched);
        if let Some(symbol) = self.card(first).map(|c| c.symbol.clone()) {
            self.solved.push(symbol);
        }
        self.pending.clear();
    }

    /// Lock the board until `task` flips the pending pair back.
    pub(crate) fn lock(&mut self, task: TaskId) {
        self.settle = Some(task);
    }

    /// Turn a mismatched pair face-down and unlock the board.
    pub(crate) fn unflip(&mut self, first: CardId, second: CardId) {
        for id in [first, second] {
            if self.card(id).is_some_and(Card::is_revealed) {
                self.set_state(id, RevealState::Hidden);
            }
        }
        self.pending.clear();
        self.settle = None;
    }

    pub(crate) fn complete(&mut self) {
        self.status = RoundStatus::Completed;
    }
}

/// Read-only view of a round for presentation collaborators.
///
/// Cheap to take: the board is shared structurally with the live round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u32,
    pub status: RoundStatus,
    pub cards: Vector<Card>,
    pub locked: bool,
    pub pending_first: Option<CardId>,
    pub matched_count: usize,
    pub turn_count: u32,
    pub elapsed_seconds: u64,
    pub timer_running: bool,
    pub solved: Vec<Symbol>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Presentation, Symbol};

    fn board() -> Round {
        let cards = vec![
            Card::new(CardId::new(0), Symbol::new("home"), Presentation::Image),
            Card::new(CardId::new(1), Symbol::new("earth"), Presentation::Image),
            Card::new(CardId::new(3), Symbol::new("earth"), Presentation::Text),
            Card::new(CardId::new(2), Symbol::new("home"), Presentation::Text),
        ];
        Round::new(1, cards)
    }

    #[test]
    fn test_new_round() {
        let round = board();
        assert_eq!(round.number(), 1);
        assert_eq!(round.status(), RoundStatus::NotStarted);
        assert_eq!(round.len(), 4);
        assert_eq!(round.total_pairs(), 2);
        assert_eq!(round.count_in(RevealState::Hidden), 4);
        assert!(!round.is_locked());
    }

    #[test]
    fn test_lookup_by_id() {
        let round = board();
        assert_eq!(round.position(CardId::new(2)), Some(3));
        assert_eq!(round.card(CardId::new(3)).unwrap().symbol, Symbol::new("earth"));
        assert!(round.card(CardId::new(99)).is_none());
    }

    #[test]
    fn test_reveal_tracks_pending() {
        let mut round = board();

        assert_eq!(round.reveal(CardId::new(0)), None);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.pending_first(), Some(CardId::new(0)));

        assert_eq!(round.reveal(CardId::new(2)), Some(CardId::new(0)));
        assert_eq!(round.pending_first(), None);
        assert_eq!(round.pending(), &[CardId::new(0), CardId::new(2)]);
        assert_eq!(round.count_in(RevealState::Revealed), 2);
    }

    #[test]
    fn test_resolve_match() {
        let mut round = board();
        round.reveal(CardId::new(0));
        round.reveal(CardId::new(2));
        round.resolve_match(CardId::new(0), CardId::new(2));

        assert!(round.pending().is_empty());
        assert_eq!(round.count_in(RevealState::Matched), 2);
        assert_eq!(round.solved(), &[Symbol::new("home")]);
    }

    #[test]
    fn test_lock_and_unflip() {
        let mut round = board();
        round.reveal(CardId::new(0));
        round.reveal(CardId::new(1));
        round.lock(TaskId(7));

        assert!(round.is_locked());
        assert_eq!(round.settle_task(), Some(TaskId(7)));

        round.unflip(CardId::new(0), CardId::new(1));

        assert!(!round.is_locked());
        assert!(round.pending().is_empty());
        assert_eq!(round.count_in(RevealState::Hidden), 4);
    }

    #[test]
    fn test_unflip_leaves_matched_cards() {
        let mut round = board();
        round.reveal(CardId::new(0));
        round.reveal(CardId::new(2));
        round.resolve_match(CardId::new(0), CardId::new(2));

        round.unflip(CardId::new(0), CardId::new(2));
        assert_eq!(round.count_in(RevealState::Matched), 2);
    }

    #[test]
    fn test_clone_shares_board() {
        let mut round = board();
        let before = round.cards().clone();
        round.reveal(CardId::new(1));

        assert!(before.iter().all(Card::is_hidden));
        assert_eq!(round.count_in(RevealState::Revealed), 1);
    }
}
