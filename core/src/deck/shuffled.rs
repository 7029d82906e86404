use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that draws every ordering of the deck with equal probability.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, symbols: &SymbolSet) -> Deck {
        use rand::prelude::*;

        let mut deck = Deck::unshuffled(symbols);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        shuffle(deck.tiles_mut(), &mut rng);

        log::debug!(
            "Generated deck of {} tiles from seed {:#018x}",
            deck.len(),
            self.seed
        );
        deck
    }
}

/// Fisher-Yates: position `i` swaps with a uniform pick from `0..=i`, walking down from the end.
///
/// Written out rather than using `SliceRandom::shuffle` so the swap order is fixed by this crate,
/// not by the `rand` version, and seeded decks stay reproducible.
pub fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    use rand::prelude::*;

    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
