//! Weighted deck construction and total draw.
//!
//! The deck is an ordered stack built from a fixed weighted distribution
//! and shuffled with the session RNG. It is not a finite resource: a draw
//! from an exhausted deck rebuilds and reshuffles the full distribution
//! first, so drawing always succeeds. The distribution is a
//! construction-time parameter ([`DeckSpec`]), defaulting to the standard
//! 60-card table.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use crate::core::GameRng;

/// One row of the weighted distribution table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub kind: CardKind,
    pub value: u8,
    pub count: u8,
}

/// The weighted distribution a deck is (re)built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    entries: Vec<DeckEntry>,
}

impl DeckSpec {
    /// The standard distribution: 60 cards.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                DeckEntry { kind: CardKind::Attack, value: 1, count: 15 },
                DeckEntry { kind: CardKind::Attack, value: 2, count: 8 },
                DeckEntry { kind: CardKind::Shield, value: 1, count: 10 },
                DeckEntry { kind: CardKind::Special, value: 0, count: 8 },
                DeckEntry { kind: CardKind::Barrier, value: 0, count: 6 },
                DeckEntry { kind: CardKind::Boost, value: 1, count: 5 },
                DeckEntry { kind: CardKind::Instant, value: 1, count: 8 },
            ],
        }
    }

    /// Build a custom distribution.
    ///
    /// Panics if the table is empty or all counts are zero: a deck must
    /// be able to satisfy every draw.
    #[must_use]
    pub fn from_entries(entries: Vec<DeckEntry>) -> Self {
        let spec = Self { entries };
        assert!(spec.total() > 0, "deck spec must produce at least one card");
        spec
    }

    /// Total number of cards one build produces.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    /// Number of cards of `kind` one build produces.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.count as usize)
            .sum()
    }

    fn build(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total());
        for entry in &self.entries {
            for _ in 0..entry.count {
                cards.push(Card::new(entry.kind, entry.value));
            }
        }
        cards
    }
}

/// The draw pile.
///
/// Owns its spec so rebuilds are self-contained; the RNG is threaded in
/// by the caller because the aggregate owns a single stream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    spec: DeckSpec,
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle a fresh deck.
    #[must_use]
    pub fn new(spec: DeckSpec, rng: &mut GameRng) -> Self {
        assert!(spec.total() > 0, "deck spec must produce at least one card");
        let mut cards = spec.build();
        rng.shuffle(&mut cards);
        Self { spec, cards }
    }

    /// Draw one card.
    ///
    /// An exhausted deck rebuilds and reshuffles first, so this is total.
    pub fn draw(&mut self, rng: &mut GameRng) -> Card {
        if self.cards.is_empty() {
            self.cards = self.spec.build();
            rng.shuffle(&mut self.cards);
        }
        self.cards.pop().expect("spec guarantees a non-empty rebuild")
    }

    /// Cards left before the next rebuild.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
