//! Full-round scenarios: deck → hands → evaluations → outcome.

use showdown::evaluator::Category;
use showdown::resolver::Outcome;
use showdown::table::Table;

fn round(scripts: &[&str]) -> (Vec<Category>, Outcome) {
    let names: Vec<String> = (1..=scripts.len()).map(|i| format!("Player {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut table = Table::with_seed(&refs, 1).expect("players seated");
    table.deal_scripted(scripts).expect("scripted deal");
    let result = table.showdown().expect("showdown");
    let categories = result.evaluations.iter().map(|e| e.category).collect();
    (categories, result.outcome)
}

#[test]
fn full_house_beats_flush() {
    let (categories, outcome) = round(&["2H 4S 4C 2D 4H", "2S 8S AS QS 3S"]);
    assert_eq!(categories, vec![Category::FullHouse, Category::Flush]);
    assert_eq!(outcome, Outcome::Winner(0));
}

#[test]
fn high_card_king_beats_high_card_queen_kicker() {
    let (categories, outcome) = round(&["2H 3D 5S 9C KD", "2C 3H 4S 8C KH"]);
    assert_eq!(categories, vec![Category::HighCard, Category::HighCard]);
    assert_eq!(outcome, Outcome::Winner(0));
}

#[test]
fn ace_high_beats_king_high() {
    let (_, outcome) = round(&["2H 3D 5S 9C KD", "2C 3H 4S 8C AH"]);
    assert_eq!(outcome, Outcome::Winner(1));
}

#[test]
fn identical_rank_patterns_are_a_tie() {
    let (_, outcome) = round(&["2H 3D 5S 9C KD", "2D 3H 5C 9S KH"]);
    assert_eq!(outcome, Outcome::Tie);
}

#[test]
fn category_precedence_across_three_seats() {
    let (categories, outcome) =
        round(&["QC QD QH 10S 2C", "9C 10D JS QS KH", "2H 5H 7H 9H JH"]);
    assert_eq!(
        categories,
        vec![Category::ThreeOfAKind, Category::Straight, Category::Flush]
    );
    assert_eq!(outcome, Outcome::Winner(2), "low flush still beats straight and trips");
}

#[test]
fn straight_flush_tops_four_of_a_kind() {
    let (categories, outcome) = round(&["AC AD AH AS 2C", "2H 3H 4H 5H 6H"]);
    assert_eq!(categories, vec![Category::FourOfAKind, Category::StraightFlush]);
    assert_eq!(outcome, Outcome::Winner(1));
}

#[test]
fn wheel_loses_to_higher_straight_across_the_table() {
    let (categories, outcome) = round(&["AH 2D 3S 4C 5H", "2C 3H 4D 5S 6C"]);
    assert_eq!(categories, vec![Category::Straight, Category::Straight]);
    assert_eq!(outcome, Outcome::Winner(1));
}

#[test]
fn random_rounds_always_resolve() {
    for seed in 0..32 {
        let mut table = Table::with_seed(&["a", "b", "c", "d"], seed).expect("seated");
        table.deal().expect("deal");
        let result = table.showdown().expect("showdown");
        assert_eq!(result.evaluations.len(), 4);
        if let Outcome::Winner(i) = result.outcome {
            assert!(i < 4);
        }
    }
}
