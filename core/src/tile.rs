use serde::{Deserialize, Serialize};

use crate::{Symbol, TileId};

/// Canonical visibility state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Revealed,
    Matched,
}

impl TileState {
    /// Whether the symbol may be shown to the player.
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    symbol: Symbol,
    state: TileState,
}

impl Tile {
    pub const fn new(id: TileId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: TileState::Hidden,
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub const fn state(&self) -> TileState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}
