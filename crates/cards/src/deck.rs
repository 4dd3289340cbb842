// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is the integer used on the wire, a value in `0..52` with the
/// following layout:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Card(u8);

/// Error returned when converting an out of range integer to a [Card].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card value {0}, must be between 0 and 51")]
pub struct InvalidCard(pub i64);

/// Error returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card '{0}', expected a rank and a suit like AH or td")]
pub struct ParseCardError(pub String);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id.
    #[inline]
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[self.suit_bits() as usize]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_bits() as usize]
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        self.0 >> 2
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 & 3
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidCard;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < Deck::SIZE {
            Ok(Self(value))
        } else {
            Err(InvalidCard(value.into()))
        }
    }
}

impl TryFrom<i64> for Card {
    type Error = InvalidCard;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidCard(value))
            .and_then(Card::try_from)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let mut chars = s.trim().chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };

        let rank = Rank::from_char(r).ok_or_else(err)?;
        let suit = Suit::from_char(u).ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    Deuce = 0,
    Trey,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace, indexed by rank bits.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    const CHARS: [char; 13] = [
        '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
    ];

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Parses a rank character, case insensitive.
    pub fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        Self::CHARS
            .iter()
            .position(|&r| r == c)
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::CHARS[*self as usize])
    }
}

/// Card suit.
///
/// Suits have no ordering in poker, the discriminant is only used for the
/// card encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits, indexed by suit bits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    const CHARS: [char; 4] = ['C', 'D', 'H', 'S'];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// Parses a suit character, case insensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        let c = c.to_ascii_uppercase();
        Self::CHARS
            .iter()
            .position(|&s| s == c)
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::CHARS[*self as usize])
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The cards in the deck in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffles only the first `n` positions of the deck.
    ///
    /// Each of the first `n` positions is swapped with a uniformly chosen
    /// position at or after it, so the prefix is a uniform random sample of
    /// the whole deck while the cost is O(n) instead of O(deck size).
    ///
    /// Panics if `n` is greater than the number of cards in the deck.
    pub fn partial_shuffle<R: RngCore>(&mut self, n: usize, rng: &mut R) -> &[Card] {
        let len = self.cards.len();
        assert!(n <= len, "n={n} must be <= {len}");

        for i in 0..n {
            // Modulo bias is negligible for a deck sized range.
            let j = i + (rng.next_u32() as usize) % (len - i);
            self.cards.swap(i, j);
        }

        &self.cards[..n]
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the deck positions.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx: [usize; 7] = std::array::from_fn(|i| i);
        let mut hand = [Card(0); 7];
        hand[..k].copy_from_slice(&self.cards[..k]);

        loop {
            f(&hand[..k]);

            // Find the rightmost position that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                return;
            };

            idx[pos] += 1;
            hand[pos] = self.cards[idx[pos]];
            for i in (pos + 1)..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    /// A deck with all 52 cards ordered by id.
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();

        for card in Deck::new_and_shuffled(&mut rand::rng()) {
            assert_eq!(card.id() >> 2, card.rank() as u8);
            assert_eq!(card.id() & 3, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 45);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 15);

        let dc = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(dc.id(), 0);

        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(as_.id(), 51);
    }

    #[test]
    fn card_from_int() {
        assert_eq!(
            Card::try_from(50u8),
            Ok(Card::new(Rank::Ace, Suit::Hearts))
        );
        assert_eq!(Card::try_from(52u8), Err(InvalidCard(52)));
        assert_eq!(Card::try_from(-1i64), Err(InvalidCard(-1)));
        assert_eq!(Card::try_from(300i64), Err(InvalidCard(300)));
    }

    #[test]
    fn card_to_string() {
        let cases = [
            (Rank::King, Suit::Diamonds, "KD"),
            (Rank::Five, Suit::Spades, "5S"),
            (Rank::Jack, Suit::Clubs, "JC"),
            (Rank::Ten, Suit::Hearts, "TH"),
            (Rank::Deuce, Suit::Clubs, "2C"),
        ];

        for (rank, suit, text) in cases {
            let card = Card::new(rank, suit);
            assert_eq!(card.to_string(), text);
            assert_eq!(format!("{card:?}"), format!("Card({text})"));
        }
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!("td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!(" qs ".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Spades)));

        for bad in ["", "A", "AHS", "1H", "AX", "10H"] {
            assert!(bad.parse::<Card>().is_err(), "{bad}");
        }
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Seven, Suit::Hearts);
        assert_eq!(serde_json::to_string(&card).unwrap(), "22");
        assert_eq!(serde_json::from_str::<Card>("22").unwrap(), card);

        assert!(serde_json::from_str::<Card>("52").is_err());
        assert!(serde_json::from_str::<Card>("-3").is_err());
    }

    #[test]
    fn deck_default_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        for (id, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id() as usize, id);
        }
    }

    #[test]
    fn deck_partial_shuffle() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut rng = rand::rng();
        for n in [0, 1, 7, 50] {
            let prefix = deck.partial_shuffle(n, &mut rng).to_vec();
            assert_eq!(prefix.len(), n);

            // The deck is still a permutation of the same 50 cards.
            let cards = deck.cards().iter().copied().collect::<HashSet<_>>();
            assert_eq!(cards.len(), 50);
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            assert!(!cards.contains(&Card::new(Rank::King, Suit::Diamonds)));
        }
    }

    #[test]
    #[should_panic]
    fn deck_partial_shuffle_too_many() {
        let mut deck = Deck::default();
        deck.partial_shuffle(53, &mut rand::rng());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        // Binomial coefficients C(52, k).
        for (k, expected) in [(2, 1_326), (3, 22_100), (4, 270_725)] {
            let mut hands = HashSet::default();
            deck.for_each(k, |cards| {
                assert_eq!(cards.len(), k);
                assert!(cards.windows(2).all(|w| w[0] < w[1]));
                hands.insert(cards.to_owned());
            });
            assert_eq!(hands.len(), expected, "k={k}");
        }

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let mut deck = Deck::default();
        for card in Deck::default().into_iter().skip(3) {
            deck.remove(card);
        }

        let mut hands = Vec::new();
        deck.for_each(2, |cards| hands.push(cards.to_vec()));
        assert_eq!(hands.len(), 3);
        assert_eq!(hands[0], deck.cards()[..2]);
        assert_eq!(hands[2], deck.cards()[1..]);

        // More cards than the deck has.
        deck.for_each(4, |_| panic!("unexpected hand"));
    }

    #[test]
    fn rank_suit_chars() {
        for rank in Rank::ranks() {
            let c = rank.to_string().chars().next().unwrap();
            assert_eq!(Rank::from_char(c), Some(rank));
            assert_eq!(Rank::from_char(c.to_ascii_lowercase()), Some(rank));
        }

        for suit in Suit::suits() {
            let c = suit.to_string().chars().next().unwrap();
            assert_eq!(Suit::from_char(c), Some(suit));
        }

        assert_eq!(Rank::from_char('1'), None);
        assert_eq!(Suit::from_char('X'), None);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
