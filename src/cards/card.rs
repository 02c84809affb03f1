//! Card kinds and values.
//!
//! A card is an immutable value: a closed kind plus a non-negative
//! magnitude whose meaning depends on the kind. Cards carry no identity;
//! two cards of equal kind and value are interchangeable. Spend and
//! arrival effects dispatch on the kind through exhaustive matches, so
//! adding a kind is a compile-time-checked exercise.

use serde::{Deserialize, Serialize};

/// The closed set of card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Spent to damage the opponent by `value`, once the lock-out passes.
    Attack,
    /// Heals on arrival in a player space and is consumed there; never rests.
    Instant,
    /// Spent to heal the owner by `value`.
    Shield,
    /// Spent for one extra move this turn.
    Special,
    /// Immovable wall: cannot be armed, swapped with, or shifted.
    Barrier,
    /// Dealt and displayed, but has no spend resolution.
    Boost,
}

impl CardKind {
    /// Kinds with a spend effect in the economy.
    ///
    /// Boost is deliberately absent: the game defines no effect for it.
    #[must_use]
    pub const fn spendable(self) -> bool {
        matches!(self, CardKind::Attack | CardKind::Shield | CardKind::Special)
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub value: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(kind: CardKind, value: u8) -> Self {
        Self { kind, value }
    }

    #[must_use]
    pub const fn is_barrier(self) -> bool {
        matches!(self.kind, CardKind::Barrier)
    }

    /// Display label for tiles.
    ///
    /// Derived, presentation-only text; never authoritative for rules.
    #[must_use]
    pub fn label(self) -> String {
        match self.kind {
            CardKind::Attack => format!("-{}", self.value),
            CardKind::Instant | CardKind::Shield => format!("+{}\u{2665}", self.value),
            CardKind::Special => "+M".to_string(),
            CardKind::Barrier => "\u{2297}".to_string(),
            CardKind::Boost => format!("+{}", self.value),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spendable_kinds() {
        assert!(CardKind::Attack.spendable());
        assert!(CardKind::Shield.spendable());
        assert!(CardKind::Special.spendable());

        assert!(!CardKind::Instant.spendable());
        assert!(!CardKind::Barrier.spendable());
        assert!(!CardKind::Boost.spendable());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Card::new(CardKind::Attack, 2).label(), "-2");
        assert_eq!(Card::new(CardKind::Shield, 1).label(), "+1\u{2665}");
        assert_eq!(Card::new(CardKind::Instant, 1).label(), "+1\u{2665}");
        assert_eq!(Card::new(CardKind::Special, 0).label(), "+M");
        assert_eq!(Card::new(CardKind::Barrier, 0).label(), "\u{2297}");
        assert_eq!(Card::new(CardKind::Boost, 1).label(), "+1");
    }

    #[test]
    fn test_cards_interchangeable() {
        let a = Card::new(CardKind::Attack, 1);
        let b = Card::new(CardKind::Attack, 1);
        assert_eq!(a, b);
        assert_ne!(a, Card::new(CardKind::Attack, 2));
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(CardKind::Barrier, 0);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
