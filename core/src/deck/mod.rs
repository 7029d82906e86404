use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use shuffled::*;

mod shuffled;

pub trait DeckGenerator {
    fn generate(self, symbols: &SymbolSet) -> Deck;
}

/// Ordered tiles of one game, two per symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Builds a fixed layout, tile ids follow positions.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self> {
        if symbols.len() > usize::from(TileId::MAX) {
            return Err(GameError::TooManySymbols);
        }

        let tiles = symbols
            .iter()
            .zip(0..)
            .map(|(&symbol, id)| Tile::new(id, symbol))
            .collect();
        Self::from_tiles(tiles)
    }

    /// Accepts a dealt layout: face down, ids covering `0..len` once each, every symbol on two tiles.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(GameError::EmptySymbolSet);
        }
        if tiles.len() > usize::from(TileId::MAX) {
            return Err(GameError::TooManySymbols);
        }

        let mut seen = alloc::vec![false; tiles.len()];
        for tile in &tiles {
            let slot = seen
                .get_mut(usize::from(tile.id()))
                .filter(|taken| !**taken)
                .ok_or(GameError::InvalidTileId(tile.id()))?;
            *slot = true;

            if tile.state() != TileState::Hidden {
                return Err(GameError::DealtFaceUp(tile.id()));
            }
        }

        for (i, tile) in tiles.iter().enumerate() {
            let symbol = tile.symbol();
            // only check on first occurrence
            if tiles[..i].iter().any(|other| other.symbol() == symbol) {
                continue;
            }
            if tiles.iter().filter(|other| other.symbol() == symbol).count() != 2 {
                return Err(GameError::UnpairedSymbol(symbol));
            }
        }

        Ok(Self { tiles })
    }

    /// Two hidden tiles per symbol in set order, ids assigned sequentially.
    pub fn unshuffled(symbols: &SymbolSet) -> Self {
        let tiles = symbols
            .iter()
            .flat_map(|symbol| [symbol, symbol])
            .zip(0..)
            .map(|(symbol, id)| Tile::new(id, symbol))
            .collect();
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn pair_count(&self) -> TileCount {
        (self.tiles.len() / 2) as TileCount
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

impl TryFrom<Vec<Tile>> for Deck {
    type Error = GameError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<Deck> for Vec<Tile> {
    fn from(deck: Deck) -> Self {
        deck.tiles
    }
}

/// Keeps the symbol set order, mostly useful for replays and tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrderedDeckGenerator;

impl DeckGenerator for OrderedDeckGenerator {
    fn generate(self, symbols: &SymbolSet) -> Deck {
        Deck::unshuffled(symbols)
    }
}
