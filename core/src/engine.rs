use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Tiles face up and awaiting a verdict, in reveal order.
pub type Selection = SmallVec<[TileId; 2]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    OneRevealed,
    Locked,
    Won,
}

impl Phase {
    pub const fn accepts_reveals(self) -> bool {
        matches!(self, Self::Idle | Self::OneRevealed)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchEngine {
    tiles: Vec<Tile>,
    /// Index into `tiles` for every tile id.
    positions: Vec<usize>,
    selection: Selection,
    score: Points,
    moves: MoveCount,
    locked: bool,
    won: bool,
    matched_count: TileCount,
    match_points: Points,
    generation: Generation,
}

impl MatchEngine {
    pub fn new(deck: Deck, generation: Generation, match_points: Points) -> Self {
        let tiles = deck.into_tiles();
        let mut positions = alloc::vec![0; tiles.len()];
        for (index, tile) in tiles.iter().enumerate() {
            positions[usize::from(tile.id())] = index;
        }

        Self {
            tiles,
            positions,
            selection: Selection::new(),
            score: 0,
            moves: 0,
            locked: false,
            won: false,
            matched_count: 0,
            match_points,
            generation,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.locked {
            Phase::Locked
        } else if self.selection.len() == 1 {
            Phase::OneRevealed
        } else {
            Phase::Idle
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        let index = self.index_of(id)?;
        Ok(&self.tiles[index])
    }

    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    pub fn score(&self) -> Points {
        self.score
    }

    pub fn moves(&self) -> MoveCount {
        self.moves
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn matched_count(&self) -> TileCount {
        self.matched_count
    }

    pub fn pairs_left(&self) -> TileCount {
        (self.tiles.len() as TileCount - self.matched_count) / 2
    }

    pub fn reveal(&mut self, id: TileId) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let index = self.index_of(id)?;

        if self.locked {
            log::trace!("tile {} ignored, board locked", id);
            return Ok(NoChange);
        }
        if self.selection.len() >= 2 {
            log::trace!("tile {} ignored, selection full", id);
            return Ok(NoChange);
        }
        if self.selection.contains(&id) {
            log::trace!("tile {} already selected", id);
            return Ok(NoChange);
        }
        if self.tiles[index].state() == TileState::Matched {
            log::trace!("tile {} already matched", id);
            return Ok(NoChange);
        }

        self.tiles[index].set_state(TileState::Revealed);
        self.selection.push(id);
        log::trace!("tile {} revealed: {}", id, self.tiles[index].symbol());

        if self.selection.len() < 2 {
            return Ok(Revealed);
        }

        self.moves = self.moves.saturating_add(1);
        Ok(self.resolve_selection())
    }

    /// Flips a mismatched pair back face down once the delay elapsed.
    pub fn conceal(&mut self, ticket: ConcealTicket) -> ConcealOutcome {
        if ticket.generation() != self.generation {
            log::debug!(
                "stale conceal for game {} ignored by game {}",
                ticket.generation().get(),
                self.generation.get()
            );
            return ConcealOutcome::Stale;
        }
        if !self.locked {
            return ConcealOutcome::NoChange;
        }

        let selection = core::mem::take(&mut self.selection);
        for id in selection {
            let index = self.positions[usize::from(id)];
            self.tiles[index].set_state(TileState::Hidden);
        }
        self.locked = false;
        log::debug!("mismatched pair concealed");
        ConcealOutcome::Concealed
    }

    /// Evaluated after the second reveal has been applied to `tiles`.
    fn resolve_selection(&mut self) -> RevealOutcome {
        let (first, second) = (self.selection[0], self.selection[1]);
        let first_index = self.positions[usize::from(first)];
        let second_index = self.positions[usize::from(second)];

        if self.tiles[first_index].symbol() != self.tiles[second_index].symbol() {
            self.locked = true;
            log::debug!("tiles {} and {} mismatch, locking", first, second);
            return RevealOutcome::Mismatched(ConcealTicket::new(self.generation));
        }

        self.tiles[first_index].set_state(TileState::Matched);
        self.tiles[second_index].set_state(TileState::Matched);
        self.selection.clear();
        self.matched_count += 2;
        self.score = self.score.saturating_add(self.match_points);
        log::debug!(
            "tiles {} and {} match, score {}",
            first,
            second,
            self.score
        );

        if usize::from(self.matched_count) == self.tiles.len() {
            self.won = true;
            log::debug!("game won in {} moves", self.moves);
            RevealOutcome::Won
        } else {
            RevealOutcome::Matched
        }
    }

    fn index_of(&self, id: TileId) -> Result<usize> {
        self.positions
            .get(usize::from(id))
            .copied()
            .ok_or(GameError::InvalidTileId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(layout: &str) -> MatchEngine {
        let symbols: Vec<Symbol> = layout.chars().map(Symbol).collect();
        let deck = Deck::from_symbols(&symbols).unwrap();
        MatchEngine::new(deck, Generation::FIRST, DEFAULT_MATCH_POINTS)
    }

    fn state_of(engine: &MatchEngine, id: TileId) -> TileState {
        engine.tile(id).unwrap().state()
    }

    fn ticket(outcome: RevealOutcome) -> ConcealTicket {
        match outcome {
            RevealOutcome::Mismatched(ticket) => ticket,
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn walkthrough_of_a_four_tile_game() {
        let mut engine = engine("ABAB");
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_won());

        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::Revealed);
        assert_eq!(state_of(&engine, 0), TileState::Revealed);
        assert_eq!(engine.selection(), &[0]);
        assert_eq!(engine.phase(), Phase::OneRevealed);

        let mismatch = ticket(engine.reveal(1).unwrap());
        assert_eq!(engine.moves(), 1);
        assert!(engine.is_locked());
        assert_eq!(state_of(&engine, 0), TileState::Revealed);
        assert_eq!(state_of(&engine, 1), TileState::Revealed);
        assert_eq!(engine.score(), 0);

        assert_eq!(engine.conceal(mismatch), ConcealOutcome::Concealed);
        assert_eq!(state_of(&engine, 0), TileState::Hidden);
        assert_eq!(state_of(&engine, 1), TileState::Hidden);
        assert!(engine.selection().is_empty());
        assert!(!engine.is_locked());

        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine.reveal(2).unwrap(), RevealOutcome::Matched);
        assert_eq!(engine.moves(), 2);
        assert_eq!(engine.score(), 10);
        assert_eq!(state_of(&engine, 0), TileState::Matched);
        assert_eq!(state_of(&engine, 2), TileState::Matched);
        assert!(engine.selection().is_empty());

        assert_eq!(engine.reveal(1).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine.reveal(3).unwrap(), RevealOutcome::Won);
        assert_eq!(engine.moves(), 3);
        assert_eq!(engine.score(), 20);
        assert!(engine.is_won());
        assert_eq!(engine.phase(), Phase::Won);
        assert_eq!(engine.pairs_left(), 0);
    }

    #[test]
    fn reveals_while_locked_are_ignored() {
        let mut engine = engine("ABAB");
        engine.reveal(0).unwrap();
        engine.reveal(1).unwrap();
        let before = engine.clone();

        assert_eq!(engine.reveal(2).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine, before);
    }

    #[test]
    fn repeated_click_is_a_no_op() {
        let mut engine = engine("ABAB");
        engine.reveal(0).unwrap();
        let before = engine.clone();

        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine, before);
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn matched_tiles_cannot_be_revealed_again() {
        let mut engine = engine("AABB");
        engine.reveal(0).unwrap();
        engine.reveal(1).unwrap();
        let before = engine.clone();

        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine.reveal(1).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine, before);
    }

    #[test]
    fn won_game_rejects_everything() {
        let mut engine = engine("AA");
        assert_eq!(engine.reveal(1).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::Won);
        let before = engine.clone();

        assert_eq!(engine.reveal(0).unwrap(), RevealOutcome::NoChange);
        assert_eq!(
            engine.conceal(ConcealTicket::new(Generation::FIRST)),
            ConcealOutcome::NoChange
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn unknown_tile_is_an_error() {
        let mut engine = engine("AA");
        assert_eq!(engine.reveal(2), Err(GameError::InvalidTileId(2)));
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn ticket_from_another_generation_is_stale() {
        let mut engine = engine("ABAB");
        engine.reveal(0).unwrap();
        engine.reveal(1).unwrap();
        let before = engine.clone();

        let foreign = ConcealTicket::new(Generation::FIRST.next());
        assert_eq!(engine.conceal(foreign), ConcealOutcome::Stale);
        assert_eq!(engine, before);
        assert!(engine.is_locked());
    }

    #[test]
    fn conceal_without_pending_mismatch_does_nothing() {
        let mut engine = engine("ABAB");
        engine.reveal(0).unwrap();
        let before = engine.clone();

        assert_eq!(
            engine.conceal(ConcealTicket::new(Generation::FIRST)),
            ConcealOutcome::NoChange
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn match_uses_configured_points() {
        let symbols: Vec<Symbol> = "AA".chars().map(Symbol).collect();
        let deck = Deck::from_symbols(&symbols).unwrap();
        let mut engine = MatchEngine::new(deck, Generation::FIRST, 25);

        engine.reveal(0).unwrap();
        engine.reveal(1).unwrap();
        assert_eq!(engine.score(), 25);
    }

    #[test]
    fn shuffled_positions_are_looked_up_by_id() {
        let set = SymbolSet::new(['A', 'B', 'C']).unwrap();
        let deck = ShuffledDeckGenerator::new(3).generate(&set);
        let mut engine = MatchEngine::new(deck, Generation::FIRST, DEFAULT_MATCH_POINTS);

        // ids are assigned before shuffling, so pairs are (0, 1), (2, 3), (4, 5)
        for pair in [(0, 1), (2, 3), (4, 5)] {
            engine.reveal(pair.0).unwrap();
            assert!(engine.reveal(pair.1).unwrap().completed_pair());
        }
        assert!(engine.is_won());
        assert_eq!(engine.moves(), 3);
    }
}
