use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player is allowed to see of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFace {
    Hidden,
    Revealed(Symbol),
    Matched(Symbol),
}

impl TileFace {
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Hidden => None,
            Self::Revealed(symbol) | Self::Matched(symbol) => Some(symbol),
        }
    }
}

impl From<&Tile> for TileFace {
    fn from(tile: &Tile) -> Self {
        match tile.state() {
            TileState::Hidden => Self::Hidden,
            TileState::Revealed => Self::Revealed(tile.symbol()),
            TileState::Matched => Self::Matched(tile.symbol()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub face: TileFace,
}

/// Read-only view of one game handed to the renderer after every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: Generation,
    pub tiles: Vec<TileView>,
    pub score: Points,
    pub moves: MoveCount,
    pub locked: bool,
    pub won: bool,
    pub phase: Phase,
}

impl Snapshot {
    pub fn from_engine(engine: &MatchEngine) -> Self {
        let tiles = engine
            .tiles()
            .iter()
            .map(|tile| TileView {
                id: tile.id(),
                face: tile.into(),
            })
            .collect();

        Self {
            generation: engine.generation(),
            tiles,
            score: engine.score(),
            moves: engine.moves(),
            locked: engine.is_locked(),
            won: engine.is_won(),
            phase: engine.phase(),
        }
    }

    /// Tiles grouped into rows of `columns`, last row may be short.
    pub fn rows(&self, columns: u8) -> impl Iterator<Item = &[TileView]> {
        self.tiles.chunks(usize::from(columns.max(1)))
    }

    pub fn accepts_reveals(&self) -> bool {
        self.phase.accepts_reveals()
    }
}
