use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Face value printed on a tile. Two tiles per game share each symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

const DEFAULT_SYMBOLS: [char; 8] = ['🎮', '🎯', '🎪', '🎨', '🎭', '🎸', '🎺', '🎷'];

/// Ordered set of distinct symbols a deck is built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolSet(Vec<Symbol>);

impl SymbolSet {
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let mut set: Vec<Symbol> = Vec::new();
        for symbol in symbols.into_iter().map(Into::into) {
            if set.contains(&symbol) {
                return Err(GameError::DuplicateSymbol(symbol));
            }
            set.push(symbol);
        }

        if set.is_empty() {
            return Err(GameError::EmptySymbolSet);
        }
        if set.len() > usize::from(TileId::MAX / 2) {
            return Err(GameError::TooManySymbols);
        }

        Ok(Self(set))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tiles a deck built from this set holds.
    pub fn tile_count(&self) -> TileCount {
        // bounded by the check in `new`
        (self.0.len() * 2) as TileCount
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self(DEFAULT_SYMBOLS.iter().copied().map(Symbol).collect())
    }
}

impl TryFrom<Vec<Symbol>> for SymbolSet {
    type Error = GameError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<SymbolSet> for Vec<Symbol> {
    fn from(set: SymbolSet) -> Self {
        set.0
    }
}
