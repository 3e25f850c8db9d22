//! Property tests for deck construction and hand scoring.

use std::collections::HashSet;

use blackjack_lib::hand::{evaluate, is_bust};
use blackjack_lib::{Card, Deck, Player, Rank, Suit, DECK_SIZE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

proptest! {
    /// Every shuffle is a permutation of the full rank x suit cross product.
    #[test]
    fn prop_shuffled_deck_is_a_full_permutation(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                prop_assert!(unique.contains(&Card::new(rank, suit)));
            }
        }
    }

    /// Each draw shrinks the deck by exactly one until it is empty.
    #[test]
    fn prop_draws_shrink_the_deck(seed in any::<u64>(), draws in 0usize..=60) {
        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        let mut player = Player::new("Player", false);
        let drawn = player.draw_cards(draws, &mut deck);
        prop_assert_eq!(drawn, draws.min(DECK_SIZE));
        prop_assert_eq!(deck.len(), DECK_SIZE - drawn);
        prop_assert_eq!(player.hand().len(), drawn);
    }

    /// The score never depends on the order the cards were drawn in.
    #[test]
    fn prop_score_is_order_independent(cards in prop::collection::vec(any_card(), 0..12)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(evaluate(&cards), evaluate(&reversed));
    }

    /// A hand containing an ace only busts when every ace already counts as one.
    #[test]
    fn prop_aces_soften_a_bust(cards in prop::collection::vec(any_card(), 1..12)) {
        let score = evaluate(&cards);
        let hard_total: u32 = cards
            .iter()
            .map(|card| if card.rank.is_ace() { 1 } else { card.value() })
            .sum();
        if is_bust(score) {
            prop_assert_eq!(score, hard_total);
        } else {
            prop_assert!(score >= hard_total);
            prop_assert_eq!((score - hard_total) % 10, 0);
        }
    }
}
