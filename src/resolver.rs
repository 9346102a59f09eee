use crate::evaluator::{Category, HandEvaluation};
use std::cmp::Ordering;

/// Result of a showdown across all dealt hands. A tie is a first-class
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Index of the single strictly-best hand, in deal order.
    Winner(usize),
    /// Two or more hands share the top spot with no rule left to split them.
    Tie,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("no hands to resolve")]
    NoHands,
}

/// Total ordering over evaluations: category weight first, then the
/// category-specific tie-break rule.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.category.weight().cmp(&b.category.weight()).then_with(|| compare_within(a, b))
}

/// Tie-break between two hands of the same category. `Ordering::Equal`
/// here means a genuine tie.
fn compare_within(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.category {
        // The wheel plays as five-high, so straights compare on the
        // corrected high card rather than the raw weighted ranks.
        Category::StraightFlush | Category::Straight => a.high_card.cmp(&b.high_card),
        Category::FourOfAKind => a.top_four.cmp(&b.top_four),
        Category::FullHouse | Category::ThreeOfAKind => a.top_three.cmp(&b.top_three),
        Category::TwoPair => {
            let sum_a = a.top_pair as u16 + a.top_pair_secondary as u16;
            let sum_b = b.top_pair as u16 + b.top_pair_secondary as u16;
            sum_a.cmp(&sum_b).then(a.total_weighted_rank.cmp(&b.total_weighted_rank))
        }
        Category::Pair => a
            .top_pair
            .cmp(&b.top_pair)
            .then(a.total_weighted_rank.cmp(&b.total_weighted_rank)),
        Category::Flush | Category::HighCard => {
            a.total_weighted_rank.cmp(&b.total_weighted_rank)
        }
    }
}

/// Pick the winner among evaluated hands, or declare a tie.
///
/// A left fold over (current best, tie flag): a strictly better hand takes
/// the lead and clears the flag; a hand equal to the current best sets it;
/// a worse hand changes nothing. The earliest of the tied leaders stays the
/// nominal best, so only a strictly better later hand can clear the flag.
///
/// ```
/// use showdown::evaluator::evaluate;
/// use showdown::resolver::{resolve, Outcome};
///
/// let a = evaluate(&"2H 3D 5S 9C KD".parse().unwrap());
/// let b = evaluate(&"2C 3H 4S 8C AH".parse().unwrap());
/// assert_eq!(resolve(&[a, b]).unwrap(), Outcome::Winner(1));
/// ```
pub fn resolve(evaluations: &[HandEvaluation]) -> Result<Outcome, ResolveError> {
    let (_, rest) = evaluations.split_first().ok_or(ResolveError::NoHands)?;
    let mut best = 0usize;
    let mut tied = false;
    for (offset, candidate) in rest.iter().enumerate() {
        match compare(candidate, &evaluations[best]) {
            Ordering::Greater => {
                best = offset + 1;
                tied = false;
            }
            Ordering::Equal => tied = true,
            Ordering::Less => {}
        }
    }
    if tied {
        Ok(Outcome::Tie)
    } else {
        Ok(Outcome::Winner(best))
    }
}
