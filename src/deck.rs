use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck; the card supply the deal draws from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use seahaven::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// A standard deck already shuffled with `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
        let unique: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::shuffled(42);
        let d2 = Deck::shuffled(42);
        assert_eq!(d1.cards, d2.cards);
        let d3 = Deck::shuffled(43);
        assert_ne!(d1.cards, d3.cards);
    }

    #[test]
    fn shuffle_with_caller_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut d = Deck::standard();
        d.shuffle_with(&mut rng);
        assert_eq!(d.cards, Deck::shuffled(42).cards);
        // the rng advances, so a second shuffle differs
        let mut again = Deck::standard();
        again.shuffle_with(&mut rng);
        assert_ne!(again.cards, d.cards);
    }

    #[test]
    fn deal_until_exhausted() {
        let mut d = Deck::shuffled(7);
        let c1 = d.deal().unwrap();
        let c2 = d.deal().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        while d.deal().is_some() {}
        assert!(d.is_empty());
        assert_eq!(d.deal(), None);
    }
}
