#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use deck::*;
pub use engine::*;
pub use error::*;
pub use session::*;
pub use snapshot::*;
pub use symbol::*;
pub use tile::*;
pub use types::*;

mod deck;
mod engine;
mod error;
mod session;
mod snapshot;
mod symbol;
mod tile;
mod types;

/// Delay before a mismatched pair flips back, in milliseconds.
pub const DEFAULT_FLIP_BACK_DELAY_MS: u32 = 1000;

/// Points awarded for each matched pair.
pub const DEFAULT_MATCH_POINTS: Points = 10;

/// Board width used by the renderer when laying tiles out in rows.
pub const DEFAULT_COLUMNS: u8 = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub symbols: SymbolSet,
    pub flip_back_delay_ms: u32,
    pub match_points: Points,
    pub columns: u8,
}

impl GameConfig {
    pub fn new(symbols: SymbolSet) -> Self {
        Self {
            symbols,
            ..Default::default()
        }
    }

    pub fn with_flip_back_delay(mut self, delay_ms: u32) -> Self {
        self.flip_back_delay_ms = delay_ms;
        self
    }

    pub fn with_columns(mut self, columns: u8) -> Self {
        if columns == 0 {
            log::warn!("Board needs at least one column, using 1");
        }
        self.columns = columns.max(1);
        self
    }

    pub fn total_tiles(&self) -> TileCount {
        self.symbols.tile_count()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: SymbolSet::default(),
            flip_back_delay_ms: DEFAULT_FLIP_BACK_DELAY_MS,
            match_points: DEFAULT_MATCH_POINTS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Matched,
    Mismatched(ConcealTicket),
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Matched => true,
            Mismatched(_) => true,
            Won => true,
        }
    }

    /// Whether this reveal completed a two-tile selection.
    pub const fn completed_pair(self) -> bool {
        matches!(self, Self::Matched | Self::Mismatched(_) | Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConcealOutcome {
    NoChange,
    Concealed,
    Stale,
}

impl ConcealOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Concealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_board() {
        let config = GameConfig::default();

        assert_eq!(config.symbols.len(), 8);
        assert_eq!(config.total_tiles(), 16);
        assert_eq!(config.flip_back_delay_ms, 1000);
        assert_eq!(config.match_points, 10);
        assert_eq!(config.columns, 4);
    }

    #[test]
    fn columns_are_never_zero() {
        let config = GameConfig::default().with_columns(0);
        assert_eq!(config.columns, 1);
    }

    #[test]
    fn only_pair_completions_count_as_moves() {
        let ticket = ConcealTicket::new(Generation::FIRST);

        assert!(!RevealOutcome::NoChange.completed_pair());
        assert!(!RevealOutcome::Revealed.completed_pair());
        assert!(RevealOutcome::Matched.completed_pair());
        assert!(RevealOutcome::Mismatched(ticket).completed_pair());
        assert!(RevealOutcome::Won.completed_pair());
    }
}
