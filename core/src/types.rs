use serde::{Deserialize, Serialize};

/// Stable identifier of a tile within one game instance.
pub type TileId = u16;

/// Count type used for tile and pair counts.
pub type TileCount = u16;

/// Score type, only ever increases within a game.
pub type Points = u32;

/// Number of completed two-tile selections.
pub type MoveCount = u32;

/// Tag distinguishing one game instance from every other instance started by the same session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub const FIRST: Self = Self(1);

    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Issued when a mismatch locks the board, redeemed by the delayed conceal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConcealTicket {
    generation: Generation,
}

impl ConcealTicket {
    pub const fn new(generation: Generation) -> Self {
        Self { generation }
    }

    pub const fn generation(self) -> Generation {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_distinct_and_increasing() {
        let a = Generation::FIRST;
        let b = a.next();

        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(b.get(), 2);
    }
}
