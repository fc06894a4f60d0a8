//! The game engine.
//!
//! `MemoryGame` owns everything mutable about a session: the current
//! round, the session timer, the deferred settle task and the RNG. Hosts
//! drive it with three calls:
//!
//! - `reveal_request(card)` when the player selects a card
//! - `tick()` on a timer, at least by `next_deadline()`
//! - `new_round()` to re-deal
//!
//! ## Usage
//!
//! ```
//! use memory_pairs::core::{GameConfig, ManualClock};
//! use memory_pairs::cards::SymbolPool;
//! use memory_pairs::engine::{MemoryGame, RevealOutcome};
//!
//! let clock = ManualClock::new();
//! let config = GameConfig::default().with_seed(7);
//! let mut game = MemoryGame::with_clock(config, SymbolPool::default(), clock.clone()).unwrap();
//!
//! let first = game.layout()[0].id;
//! assert_eq!(game.reveal_request(first), RevealOutcome::FirstRevealed);
//!
//! clock.advance(2_000);
//! game.tick();
//! assert_eq!(game.elapsed_seconds(), 2);
//! ```

use im::Vector;
use log::{debug, info, trace};

use super::events::GameEvent;
use super::round::{Round, RoundSnapshot, RoundStatus};
use super::scheduler::Scheduler;
use crate::cards::{Card, CardId, DeckBuilder, RevealState, Symbol, SymbolPool};
use crate::core::{Clock, GameConfig, GameRng, GameRngState, Result, SystemClock, BOARD_PAIRS};
use crate::rules::{MatchEvaluator, SymbolMatch, TurnOutcome};
use crate::session::{RoundSummary, SessionTimer};

/// Why a reveal request changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A mismatched pair is still settling.
    Locked,
    /// No card with that id on the board.
    UnknownCard,
    /// The card is already face-up in the current turn.
    AlreadyPending,
    /// The card was matched earlier.
    AlreadyMatched,
}

/// What a reveal request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changed and no event was emitted.
    Ignored(IgnoreReason),
    /// First card of a turn is face-up.
    FirstRevealed,
    /// Second card paired with the first. The board stays unlocked.
    Matched,
    /// Second card did not pair. The board is locked until `settles_at_ms`.
    Mismatched { settles_at_ms: u64 },
    /// Second card completed the last pair.
    Completed(RoundSummary),
}

/// Deferred flip-back of a mismatched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SettleTask {
    first: CardId,
    second: CardId,
}

type Listener = Box<dyn FnMut(&GameEvent)>;

/// A memory-matching game session.
///
/// Generic over the time source and the pairing rule so hosts and tests
/// can swap either.
pub struct MemoryGame<C = SystemClock, E = SymbolMatch> {
    config: GameConfig,
    pool: SymbolPool,
    evaluator: E,
    clock: C,
    rng: GameRng,
    round: Round,
    timer: SessionTimer,
    scheduler: Scheduler<SettleTask>,
    events: Vec<GameEvent>,
    listeners: Vec<Listener>,
}

impl MemoryGame {
    /// Session on the system clock with the built-in catalogue.
    ///
    /// Deals the first round.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_parts(config, SymbolPool::default(), SystemClock::new(), SymbolMatch)
    }
}

impl<C: Clock> MemoryGame<C> {
    /// Session with a custom catalogue and time source.
    pub fn with_clock(config: GameConfig, pool: SymbolPool, clock: C) -> Result<Self> {
        Self::with_parts(config, pool, clock, SymbolMatch)
    }
}

impl<C: Clock, E: MatchEvaluator> MemoryGame<C, E> {
    /// Fully custom session. Deals the first round.
    pub fn with_parts(config: GameConfig, pool: SymbolPool, clock: C, evaluator: E) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game = Self {
            config,
            pool,
            evaluator,
            clock,
            rng,
            round: Round::new(0, Vec::new()),
            timer: SessionTimer::new(),
            scheduler: Scheduler::new(),
            events: Vec::new(),
            listeners: Vec::new(),
        };
        game.new_round()?;
        Ok(game)
    }

    // === Round lifecycle ===

    /// Deal a fresh board.
    ///
    /// Cancels any pending settle task and resets the timer and counters.
    /// On error the current round is left exactly as it was.
    pub fn new_round(&mut self) -> Result<()> {
        let mut rng = self.rng.clone();
        let round_rng = rng.fork();
        let symbols = self
            .pool
            .select_unique(BOARD_PAIRS, &mut round_rng.for_context("symbols"))?;
        self.rng = rng;

        let cancelled = self.scheduler.cancel_all();
        if cancelled > 0 {
            debug!("new round cancelled {cancelled} settle task(s)");
        }
        self.timer.reset();

        let cards = DeckBuilder::build(&symbols, &round_rng);
        self.round = Round::new(self.round.number() + 1, cards);

        info!(
            "dealt round {} with {} cards (seed {})",
            self.round.number(),
            self.round.len(),
            round_rng.seed()
        );
        self.emit(GameEvent::RoundStarted { round: self.round.number() });
        Ok(())
    }

    // === Player input ===

    /// Handle the player selecting a card.
    ///
    /// Requests that cannot apply (board locked, card face-up, unknown id)
    /// are ignored without touching state or emitting events.
    pub fn reveal_request(&mut self, id: CardId) -> RevealOutcome {
        let now = self.clock.now_ms();
        self.run_due_tasks(now);

        if self.round.is_locked() {
            return self.ignore(id, IgnoreReason::Locked);
        }
        let state = match self.round.card(id) {
            Some(card) => card.reveal_state,
            None => return self.ignore(id, IgnoreReason::UnknownCard),
        };
        match state {
            RevealState::Hidden => {}
            RevealState::Revealed => return self.ignore(id, IgnoreReason::AlreadyPending),
            RevealState::Matched => return self.ignore(id, IgnoreReason::AlreadyMatched),
        }

        let first = self.round.reveal(id);
        debug!("revealed {id}");
        self.emit(GameEvent::CardRevealed { card: id });

        let Some(first) = first else {
            if self.timer.start(now) {
                debug!("timer started at {now} ms");
            }
            return RevealOutcome::FirstRevealed;
        };

        let turn_count = self.timer.record_turn();
        self.emit(GameEvent::TurnCountChanged { turn_count });

        let evaluated = match (self.round.card(first), self.round.card(id)) {
            (Some(a), Some(b)) => Some((self.evaluator.evaluate(a, b), a.symbol.clone())),
            _ => None,
        };
        let Some((outcome, symbol)) = evaluated else {
            return self.on_mismatch(first, id, now);
        };
        debug!("turn {turn_count}: {first} + {id} -> {outcome:?}");

        match outcome {
            TurnOutcome::Match => self.on_match(symbol, first, id, now),
            TurnOutcome::Mismatch => self.on_mismatch(first, id, now),
        }
    }

    fn ignore(&self, id: CardId, reason: IgnoreReason) -> RevealOutcome {
        trace!("ignored reveal of {id}: {reason:?}");
        RevealOutcome::Ignored(reason)
    }

    fn on_match(&mut self, symbol: Symbol, first: CardId, second: CardId, now: u64) -> RevealOutcome {
        self.round.resolve_match(first, second);
        let matched = self.timer.record_match();
        self.emit(GameEvent::PairMatched { symbol, first, second });

        if matched < self.round.len() {
            return RevealOutcome::Matched;
        }

        self.round.complete();
        self.timer.stop(now);
        let summary = RoundSummary {
            elapsed_seconds: self.timer.elapsed_seconds(),
            turn_count: self.timer.turn_count(),
        };
        info!("round {}: {summary}", self.round.number());
        self.emit(GameEvent::RoundCompleted {
            elapsed_seconds: summary.elapsed_seconds,
            turn_count: summary.turn_count,
        });
        RevealOutcome::Completed(summary)
    }

    fn on_mismatch(&mut self, first: CardId, second: CardId, now: u64) -> RevealOutcome {
        let settles_at_ms = now + self.config.settle_delay_ms;
        let task = self.scheduler.schedule(settles_at_ms, SettleTask { first, second });
        self.round.lock(task);
        self.emit(GameEvent::PairMismatched { first, second });
        RevealOutcome::Mismatched { settles_at_ms }
    }

    // === Time ===

    /// Run due deferred work and refresh the clock display.
    ///
    /// Emits `TimerTick` while the timer runs. Returns the elapsed seconds
    /// it reported, or `None` when the timer is idle or stopped.
    pub fn tick(&mut self) -> Option<u64> {
        let now = self.clock.now_ms();
        self.run_due_tasks(now);

        if !self.timer.is_running() {
            return None;
        }
        let elapsed_seconds = self.timer.observe(now);
        self.emit(GameEvent::TimerTick { elapsed_seconds });
        Some(elapsed_seconds)
    }

    /// Latest time the host should call [`tick`](Self::tick) next.
    ///
    /// `None` means nothing is waiting on time.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let refresh = self
            .timer
            .is_running()
            .then(|| self.clock.now_ms() + self.config.tick_interval_ms);
        match (self.scheduler.next_due(), refresh) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn run_due_tasks(&mut self, now: u64) {
        while let Some(task) = self.scheduler.pop_due(now) {
            self.round.unflip(task.first, task.second);
            debug!("flipped back {} and {}", task.first, task.second);
            self.emit(GameEvent::PairUnflipped {
                first: task.first,
                second: task.second,
            });
        }
    }

    // === Events ===

    /// Call `listener` for every event from now on.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Take buffered events, oldest first.
    ///
    /// Events are buffered whether or not listeners exist; hosts that do
    /// not drain should rely on listeners instead and call this
    /// occasionally to release memory.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        trace!("event {}", event.name());
        for listener in &mut self.listeners {
            listener(&event);
        }
        self.events.push(event);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Board in layout order, for rendering.
    #[must_use]
    pub fn layout(&self) -> &Vector<Card> {
        self.round.cards()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.round.is_locked()
    }

    #[must_use]
    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.timer.turn_count()
    }

    /// Matched cards (two per pair).
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.timer.matched_count()
    }

    /// Elapsed seconds as of the last tick or completion.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    /// State of the deal RNG, for reproducing later rounds.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read-only view for presentation collaborators.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round.number(),
            status: self.round.status(),
            cards: self.round.cards().clone(),
            locked: self.round.is_locked(),
            pending_first: self.round.pending_first(),
            matched_count: self.timer.matched_count(),
            turn_count: self.timer.turn_count(),
            elapsed_seconds: self.timer.elapsed_at(self.clock.now_ms()),
            timer_running: self.timer.is_running(),
            solved: self.round.solved().to_vec(),
        }
    }
}
