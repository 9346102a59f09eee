use crate::cards::{parse_cards, Card};
use crate::deck::Deck;
use crate::evaluator::{evaluate, HandEvaluation};
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::resolver::{resolve, Outcome};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("a table needs at least one player")]
    NoPlayers,
    #[error("not enough cards left to deal {players} hands")]
    NotEnoughCards { players: usize },
    #[error("card {0} is not available in the deck")]
    CardUnavailable(Card),
    #[error("expected {expected} scripted hands, got {got}")]
    HandCountMismatch { expected: usize, got: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("card parse error: {0}")]
    CardParse(String),
    #[error("no hands dealt yet")]
    NothingDealt,
}

/// A named player and the hand dealt to them this round.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    hand: Option<Hand>,
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }
}

/// Result of a completed showdown: one evaluation per seat, in seat order,
/// plus the resolver's outcome.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Showdown {
    pub evaluations: Vec<HandEvaluation>,
    pub outcome: Outcome,
}

/// One shared deck dealt to named players, then handed to the evaluator
/// and resolver.
///
/// ```
/// use showdown::resolver::Outcome;
/// use showdown::table::Table;
///
/// let mut table = Table::with_seed(&["Player 1", "Player 2"], 42).unwrap();
/// table.deal_scripted(&["2H 3D 5S 9C KD", "2C 3H 4S 8C AH"]).unwrap();
/// let result = table.showdown().unwrap();
/// assert_eq!(result.outcome, Outcome::Winner(1));
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    seats: Vec<Seat>,
}

impl Table {
    /// Seat the named players behind a freshly shuffled deck.
    pub fn new(names: &[&str]) -> Result<Self, TableError> {
        let seed: u64 = rand::rng().random();
        Self::with_seed(names, seed)
    }

    /// Same, with a reproducible shuffle.
    pub fn with_seed(names: &[&str], seed: u64) -> Result<Self, TableError> {
        if names.is_empty() {
            return Err(TableError::NoPlayers);
        }
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let seats =
            names.iter().map(|&n| Seat { name: n.to_string(), hand: None }).collect();
        Ok(Self { deck, seats })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Deal five random cards to every seat.
    pub fn deal(&mut self) -> Result<(), TableError> {
        if self.deck.len() < self.seats.len() * HAND_SIZE {
            return Err(TableError::NotEnoughCards { players: self.seats.len() });
        }
        for seat in &mut self.seats {
            // Length was checked above; a short deal cannot happen here.
            seat.hand = self.deck.deal_hand();
        }
        Ok(())
    }

    /// Deal scripted hands given as card-token strings ("2H 3D 5S 9C KD"),
    /// one per seat. Cards are drawn from the deck by identity, so naming
    /// the same card twice across the deal fails with `CardUnavailable`.
    pub fn deal_scripted(&mut self, scripts: &[&str]) -> Result<(), TableError> {
        if scripts.len() != self.seats.len() {
            return Err(TableError::HandCountMismatch {
                expected: self.seats.len(),
                got: scripts.len(),
            });
        }
        for (seat_idx, script) in scripts.iter().enumerate() {
            let wanted =
                parse_cards(script).map_err(|e| TableError::CardParse(e.to_string()))?;
            let mut cards = Vec::with_capacity(wanted.len());
            for card in wanted {
                match self.deck.take(card) {
                    Some(c) => cards.push(c),
                    None => return Err(TableError::CardUnavailable(card)),
                }
            }
            self.seats[seat_idx].hand = Some(Hand::try_new(cards)?);
        }
        Ok(())
    }

    /// Evaluate every dealt hand and resolve the winner.
    pub fn showdown(&self) -> Result<Showdown, TableError> {
        let mut evaluations = Vec::with_capacity(self.seats.len());
        for seat in &self.seats {
            let hand = seat.hand.as_ref().ok_or(TableError::NothingDealt)?;
            evaluations.push(evaluate(hand));
        }
        // At least one seat exists, so the resolver cannot see an empty field.
        let outcome = resolve(&evaluations).map_err(|_| TableError::NothingDealt)?;
        Ok(Showdown { evaluations, outcome })
    }
}
