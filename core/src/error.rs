use thiserror::Error;

use crate::{Symbol, TileId};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Symbol set is empty")]
    EmptySymbolSet,
    #[error("Symbol {0} appears more than once")]
    DuplicateSymbol(Symbol),
    #[error("Too many symbols for one board")]
    TooManySymbols,
    #[error("Symbol {0} does not appear exactly twice")]
    UnpairedSymbol(Symbol),
    #[error("Tile {0} was dealt face up")]
    DealtFaceUp(TileId),
    #[error("No tile with id {0}")]
    InvalidTileId(TileId),
}

pub type Result<T> = core::result::Result<T, GameError>;
