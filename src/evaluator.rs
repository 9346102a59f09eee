use crate::cards::Rank;
use crate::hand::{Hand, HAND_SIZE};
use std::fmt;

/// Poker hand category from weakest to strongest. Each carries a fixed
/// power-of-two precedence weight (HighCard=1 .. StraightFlush=256).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Fixed precedence weight; higher beats lower outright.
    pub const fn weight(self) -> u16 {
        1 << (self as u8)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable result of evaluating a five-card hand: the category plus the
/// rank fields the resolver tie-breaks on. Rank fields hold the raw numeric
/// rank value, 0 when the pattern is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandEvaluation {
    pub category: Category,
    /// Rank of the (first) pair, also the pair half of a full house.
    pub top_pair: u8,
    /// Rank of the second pair when holding two pair.
    pub top_pair_secondary: u8,
    /// Rank of the trips, also the three half of a full house.
    pub top_three: u8,
    /// Rank of the quads.
    pub top_four: u8,
    /// Highest card rank; the wheel (A-2-3-4-5) counts as 5-high.
    pub high_card: u8,
    /// Σ rank·100^position over the ascending-sorted cards; a monotone
    /// scalar for kicker comparison within a category.
    pub total_weighted_rank: u64,
}

/// Classify a five-card hand and compute its tie-break fields.
///
/// A total pure function: `Hand` construction already guarantees five
/// pairwise-distinct cards in ascending rank order.
///
/// ```
/// use showdown::evaluator::{evaluate, Category};
/// use showdown::hand::Hand;
///
/// let hand: Hand = "AH 2D 3S 4C 5H".parse().unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.high_card, 5); // wheel plays as five-high
/// ```
pub fn evaluate(hand: &Hand) -> HandEvaluation {
    let cards = hand.cards();
    let ranks: [u8; HAND_SIZE] = [
        cards[0].rank().value(),
        cards[1].rank().value(),
        cards[2].rank().value(),
        cards[3].rank().value(),
        cards[4].rank().value(),
    ];

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let (is_straight, high_card) = straight_high(&ranks);

    // Rank multiplicities, scanned low to high: the first pair found lands
    // in top_pair, a second distinct pair in top_pair_secondary.
    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }
    let mut top_pair = 0u8;
    let mut top_pair_secondary = 0u8;
    let mut top_three = 0u8;
    let mut top_four = 0u8;
    for r in Rank::Two.value()..=Rank::Ace.value() {
        match counts[r as usize] {
            2 => {
                if top_pair == 0 {
                    top_pair = r;
                } else {
                    top_pair_secondary = r;
                }
            }
            3 => top_three = r,
            4 => top_four = r,
            _ => {}
        }
    }

    let category = if is_straight && is_flush {
        Category::StraightFlush
    } else if top_four != 0 {
        Category::FourOfAKind
    } else if top_three != 0 && top_pair != 0 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if top_three != 0 {
        Category::ThreeOfAKind
    } else if top_pair_secondary != 0 {
        Category::TwoPair
    } else if top_pair != 0 {
        Category::Pair
    } else {
        Category::HighCard
    };

    let total_weighted_rank =
        ranks.iter().enumerate().map(|(i, &r)| r as u64 * 100u64.pow(i as u32)).sum();

    HandEvaluation {
        category,
        top_pair,
        top_pair_secondary,
        top_three,
        top_four,
        high_card,
        total_weighted_rank,
    }
}

/// Straight detection over ascending rank values. Each card must sit one
/// rank above its predecessor, except the wheel: 2-3-4-5 topped by an ace,
/// which plays as a five-high straight. Returns (is_straight, high card
/// for comparison purposes).
fn straight_high(ranks: &[u8; HAND_SIZE]) -> (bool, u8) {
    let wheel = ranks[0] == 2
        && ranks[4] == Rank::Ace.value()
        && ranks[1..4].iter().zip(&ranks[..3]).all(|(&b, &a)| b == a + 1);
    if wheel {
        return (true, 5);
    }
    let run = ranks.windows(2).all(|w| w[1] == w[0] + 1);
    (run, ranks[HAND_SIZE - 1])
}
