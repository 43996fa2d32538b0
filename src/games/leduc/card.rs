//! Card ranks, the deck, and exhaustive chance enumeration.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank ladder used for display; decks take the ranks ending at the king.
const RANK_SYMBOLS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Position of the king on the ladder.
const KING: u8 = 11;

/// A card rank. Suits do not matter in this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// Rank from its display symbol (`'J'`, `'Q'`, ...).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == symbol.to_ascii_uppercase())
            .map(|i| Rank(i as u8))
    }

    /// Display symbol.
    pub fn symbol(self) -> char {
        RANK_SYMBOLS[self.0 as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compare two private ranks at showdown.
///
/// A private rank that pairs the revealed board beats one that does not;
/// otherwise the higher rank wins and equal ranks tie.
pub fn showdown(hero: Rank, villain: Rank, board: Option<Rank>) -> Ordering {
    match board {
        Some(b) if hero == b && villain != b => Ordering::Greater,
        Some(b) if villain == b && hero != b => Ordering::Less,
        _ => hero.cmp(&villain),
    }
}

/// How the public card enters the chance outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    /// No public card.
    Absent,
    /// Drawn from the cards left after the private deal.
    Dealt,
    /// The same rank in every outcome, independent of the deck.
    Fixed(Rank),
}

/// One chance outcome: both private ranks and the public rank, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal {
    /// Private ranks of player one and player two.
    pub holes: [Rank; 2],
    /// Public rank, revealed when the second round starts.
    pub board: Option<Rank>,
}

/// A deck holding `copies` cards of each of its ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    ranks: Vec<Rank>,
    copies: u8,
}

impl Deck {
    /// Deck of the `ranks` highest ranks up to the king.
    pub fn new(ranks: u8, copies: u8) -> Self {
        let low = KING + 1 - ranks.min(KING + 1);
        Self {
            ranks: (low..=KING).map(Rank).collect(),
            copies,
        }
    }

    /// Ranks in ascending order.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Rank at a deck-relative index, lowest first.
    pub fn rank(&self, index: u8) -> Option<Rank> {
        self.ranks.get(index as usize).copied()
    }

    /// Number of physical cards.
    pub fn size(&self) -> usize {
        self.ranks.len() * self.copies as usize
    }

    /// Every distinct deal with its exact probability.
    ///
    /// Physical cards of equal rank are merged: an outcome's probability is
    /// the number of card draws producing it over the number of all draws, so
    /// every rank combination appears once and the probabilities sum to one.
    pub fn deals(&self, board: Board) -> Vec<(Deal, f64)> {
        let n = self.size() as u64;
        let k = self.copies as u64;
        let mut outcomes = Vec::new();

        let mut total = n * n.saturating_sub(1);
        if board == Board::Dealt {
            total *= n.saturating_sub(2);
        }
        if total == 0 {
            return outcomes;
        }

        for &a in &self.ranks {
            for &b in &self.ranks {
                let pairs = k * (k - (a == b) as u64);
                if pairs == 0 {
                    continue;
                }
                match board {
                    Board::Absent => outcomes.push((
                        Deal {
                            holes: [a, b],
                            board: None,
                        },
                        pairs as f64 / total as f64,
                    )),
                    Board::Fixed(rank) => outcomes.push((
                        Deal {
                            holes: [a, b],
                            board: Some(rank),
                        },
                        pairs as f64 / total as f64,
                    )),
                    Board::Dealt => {
                        for &c in &self.ranks {
                            let left = k - (a == c) as u64 - (b == c) as u64;
                            if left == 0 {
                                continue;
                            }
                            outcomes.push((
                                Deal {
                                    holes: [a, b],
                                    board: Some(c),
                                },
                                (pairs * left) as f64 / total as f64,
                            ));
                        }
                    }
                }
            }
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    fn assert_partition(deals: &[(Deal, f64)]) {
        let total: f64 = deals.iter().map(|(_, p)| p).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
        let unique: HashSet<_> = deals.iter().map(|(d, _)| *d).collect();
        assert_eq!(unique.len(), deals.len(), "duplicate chance outcome");
        assert!(deals.iter().all(|(_, p)| *p > 0.0));
    }

    #[test]
    fn test_three_rank_deck_is_jqk() {
        let deck = Deck::new(3, 1);
        let symbols: String = deck.ranks().iter().map(|r| r.symbol()).collect();
        assert_eq!(symbols, "JQK");
        assert_eq!(deck.rank(2), Rank::from_symbol('K'));
        assert_eq!(deck.rank(3), None);
        assert_eq!(Rank::from_symbol('q'), Rank::from_symbol('Q'));
    }

    #[test]
    fn test_single_copy_private_deal() {
        let deals = Deck::new(3, 1).deals(Board::Absent);
        assert_eq!(deals.len(), 6);
        assert_partition(&deals);
        for (deal, p) in &deals {
            assert_ne!(deal.holes[0], deal.holes[1]);
            assert_abs_diff_eq!(*p, 1.0 / 6.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_copy_deal_with_board() {
        let deals = Deck::new(3, 2).deals(Board::Dealt);
        assert_partition(&deals);
        let j = Rank::from_symbol('J').unwrap();
        let q = Rank::from_symbol('Q').unwrap();

        // Pairs of the same rank exist but can never see a third copy.
        assert!(deals.iter().any(|(d, _)| d.holes == [j, j]));
        assert!(!deals.iter().any(|(d, _)| d.holes == [j, j] && d.board == Some(j)));

        // P(J, Q, J) = 2/6 * 2/5 * 1/4
        let (_, p) = deals
            .iter()
            .find(|(d, _)| d.holes == [j, q] && d.board == Some(j))
            .unwrap();
        assert_abs_diff_eq!(*p, 1.0 / 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_board_ignores_deck() {
        let k = Rank::from_symbol('K').unwrap();
        let deals = Deck::new(3, 1).deals(Board::Fixed(k));
        assert_eq!(deals.len(), 6);
        assert_partition(&deals);
        assert!(deals.iter().all(|(d, _)| d.board == Some(k)));
    }

    #[test]
    fn test_showdown_board_pair_beats_rank() {
        let j = Rank::from_symbol('J').unwrap();
        let q = Rank::from_symbol('Q').unwrap();
        let k = Rank::from_symbol('K').unwrap();

        assert_eq!(showdown(k, j, None), Ordering::Greater);
        assert_eq!(showdown(j, k, Some(j)), Ordering::Greater);
        assert_eq!(showdown(k, j, Some(j)), Ordering::Less);
        assert_eq!(showdown(q, k, Some(j)), Ordering::Less);
        assert_eq!(showdown(q, q, Some(q)), Ordering::Equal);
        assert_eq!(showdown(q, q, None), Ordering::Equal);
    }
}
