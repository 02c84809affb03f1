//! Spend resolution: the card economy.
//!
//! Only cards resting in the acting player's own space are spendable,
//! and only the kinds with a defined effect. Spending is a single atomic
//! step and never consumes a move; the move budget pays for board
//! actions only.

use crate::cards::{Card, CardKind};
use crate::core::{GameState, PlayerId, Rules, SlotCoord};

use super::rejection::Rejection;

/// Resolve spending the card at `slot` in `player`'s space.
///
/// Returns the spent card on success. The caller has already verified
/// that it is `player`'s turn and the match is live.
pub fn resolve_spend(
    state: &mut GameState,
    rules: &Rules,
    player: PlayerId,
    slot: SlotCoord,
) -> Result<Card, Rejection> {
    let card = state.spaces[player].get(slot).ok_or(Rejection::EmptyCell)?;

    match card.kind {
        CardKind::Attack => {
            if state.turn_count[player] < rules.attack_lock_turns {
                return Err(Rejection::AttackLocked {
                    lock_turns: rules.attack_lock_turns,
                });
            }
            state.spaces[player].take(slot);
            state.damage(player.opponent(), card.value);
            state.evaluate_outcome();
        }
        CardKind::Shield => {
            state.spaces[player].take(slot);
            state.heal(player, card.value, rules.max_hearts);
        }
        CardKind::Special => {
            state.spaces[player].take(slot);
            state.moves_left += 1;
        }
        // Boost is dealt but has no resolution anywhere in the rules;
        // Instant never rests in a space, Barrier never reaches one.
        CardKind::Instant | CardKind::Barrier | CardKind::Boost => {
            return Err(Rejection::Unspendable { kind: card.kind });
        }
    }

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn state_with(slot: SlotCoord, card: Card) -> (GameState, Rules) {
        let rules = Rules::default();
        let mut state = GameState::new(&rules, GameRng::new(42));
        state.spaces[PlayerId::ZERO].set(slot, Some(card));
        (state, rules)
    }

    #[test]
    fn test_attack_damages_opponent() {
        let slot = SlotCoord::new(1, 0);
        let (mut state, rules) = state_with(slot, Card::new(CardKind::Attack, 2));
        state.turn_count[PlayerId::ZERO] = 2;

        let spent = resolve_spend(&mut state, &rules, PlayerId::ZERO, slot).unwrap();

        assert_eq!(spent.kind, CardKind::Attack);
        assert_eq!(state.hearts[PlayerId::ONE], 1);
        assert_eq!(state.spaces[PlayerId::ZERO].get(slot), None);
        assert!(!state.game_over());
    }

    #[test]
    fn test_attack_locked_in_opening_turns() {
        let slot = SlotCoord::new(1, 0);
        let (mut state, rules) = state_with(slot, Card::new(CardKind::Attack, 1));

        let result = resolve_spend(&mut state, &rules, PlayerId::ZERO, slot);

        assert_eq!(result, Err(Rejection::AttackLocked { lock_turns: 2 }));
        // Hearts untouched, card still resting.
        assert_eq!(state.hearts[PlayerId::ONE], 3);
        assert!(state.spaces[PlayerId::ZERO].get(slot).is_some());
    }

    #[test]
    fn test_lethal_attack_ends_match() {
        let slot = SlotCoord::new(0, 2);
        let (mut state, rules) = state_with(slot, Card::new(CardKind::Attack, 2));
        state.turn_count[PlayerId::ZERO] = 2;
        state.hearts[PlayerId::ONE] = 1;

        resolve_spend(&mut state, &rules, PlayerId::ZERO, slot).unwrap();

        assert_eq!(state.hearts[PlayerId::ONE], 0);
        assert!(state.game_over());
        assert_eq!(state.outcome, Some(PlayerId::ZERO));
    }

    #[test]
    fn test_shield_heals_with_cap() {
        let slot = SlotCoord::new(1, 1);
        let (mut state, rules) = state_with(slot, Card::new(CardKind::Shield, 1));
        state.hearts[PlayerId::ZERO] = 3;

        resolve_spend(&mut state, &rules, PlayerId::ZERO, slot).unwrap();

        // Already at the cap; the card is consumed regardless.
        assert_eq!(state.hearts[PlayerId::ZERO], 3);
        assert_eq!(state.spaces[PlayerId::ZERO].get(slot), None);
    }

    #[test]
    fn test_special_grants_extra_move() {
        let slot = SlotCoord::new(0, 0);
        let (mut state, rules) = state_with(slot, Card::new(CardKind::Special, 0));
        state.moves_left = 1;

        resolve_spend(&mut state, &rules, PlayerId::ZERO, slot).unwrap();

        assert_eq!(state.moves_left, 2);
        assert_eq!(state.spaces[PlayerId::ZERO].get(slot), None);
    }

    #[test]
    fn test_boost_has_no_resolution() {
        let slot = SlotCoord::new(1, 2);
        let (mut state, rules) = state_with(slot, Card::new(CardKind::Boost, 1));

        let result = resolve_spend(&mut state, &rules, PlayerId::ZERO, slot);

        assert_eq!(
            result,
            Err(Rejection::Unspendable {
                kind: CardKind::Boost
            })
        );
        assert!(state.spaces[PlayerId::ZERO].get(slot).is_some());
    }

    #[test]
    fn test_empty_slot() {
        let rules = Rules::default();
        let mut state = GameState::new(&rules, GameRng::new(42));

        let result = resolve_spend(&mut state, &rules, PlayerId::ZERO, SlotCoord::new(0, 0));

        assert_eq!(result, Err(Rejection::EmptyCell));
    }
}
