use alloc::vec::Vec;

use crate::*;

/// Single-shot timers used to flip mismatched pairs back.
pub trait Scheduler {
    type Handle;

    /// Arranges for `ticket` to be handed to [`GameSession::resolve_mismatch`] after `delay_ms`.
    fn schedule_once(&mut self, delay_ms: u32, ticket: ConcealTicket) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Owns the current game and the timer of its pending mismatch, if any.
#[derive(Debug)]
pub struct GameSession<S: Scheduler> {
    config: GameConfig,
    engine: MatchEngine,
    scheduler: S,
    pending: Option<S::Handle>,
    generation: Generation,
}

impl<S: Scheduler> GameSession<S> {
    pub fn new(config: GameConfig, scheduler: S, generator: impl DeckGenerator) -> Self {
        let generation = Generation::FIRST;
        let engine = Self::start(&config, generation, generator);
        Self {
            config,
            engine,
            scheduler,
            pending: None,
            generation,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn has_pending_conceal(&self) -> bool {
        self.pending.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    /// Discards the current game, including its pending conceal, and deals a fresh one.
    pub fn new_game(&mut self, generator: impl DeckGenerator) -> Snapshot {
        if let Some(handle) = self.pending.take() {
            log::debug!("cancelling conceal of game {}", self.generation.get());
            self.scheduler.cancel(handle);
        }

        self.generation = self.generation.next();
        self.engine = Self::start(&self.config, self.generation, generator);
        self.snapshot()
    }

    pub fn reveal(&mut self, id: TileId) -> Result<RevealOutcome> {
        let outcome = self.engine.reveal(id)?;

        if let RevealOutcome::Mismatched(ticket) = outcome {
            let handle = self
                .scheduler
                .schedule_once(self.config.flip_back_delay_ms, ticket);
            if let Some(previous) = self.pending.replace(handle) {
                log::warn!("conceal scheduled while another was pending");
                self.scheduler.cancel(previous);
            }
        }

        Ok(outcome)
    }

    /// Timer callback. Tickets from an earlier game never touch the current one.
    pub fn resolve_mismatch(&mut self, ticket: ConcealTicket) -> ConcealOutcome {
        if ticket.generation() != self.generation {
            log::debug!(
                "ignoring conceal for game {}, current game is {}",
                ticket.generation().get(),
                self.generation.get()
            );
            return ConcealOutcome::Stale;
        }

        let outcome = self.engine.conceal(ticket);
        if outcome.has_update() {
            // already fired, nothing left to cancel
            self.pending = None;
        }
        outcome
    }

    fn start(config: &GameConfig, generation: Generation, generator: impl DeckGenerator) -> MatchEngine {
        let deck = generator.generate(&config.symbols);
        log::debug!(
            "game {} started with {} tiles",
            generation.get(),
            deck.len()
        );
        MatchEngine::new(deck, generation, config.match_points)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// Scheduler driven by an explicit virtual clock, for headless play and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_handle: u64,
    timers: Vec<(TimerHandle, u64, ConcealTicket)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward and returns every ticket that came due, earliest first.
    pub fn advance(&mut self, ms: u64) -> Vec<ConcealTicket> {
        self.now_ms = self.now_ms.saturating_add(ms);

        let now = self.now_ms;
        let mut due: Vec<_> = self.timers.iter().filter(|timer| timer.1 <= now).copied().collect();
        self.timers.retain(|timer| timer.1 > now);

        due.sort_by_key(|timer| (timer.1, timer.0.0));
        due.into_iter().map(|timer| timer.2).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerHandle;

    fn schedule_once(&mut self, delay_ms: u32, ticket: ConcealTicket) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers
            .push((handle, self.now_ms.saturating_add(delay_ms.into()), ticket));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|timer| timer.0 != handle);
    }
}
