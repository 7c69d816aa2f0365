use balatro_rs::cards::{parse_cards, Card};
use balatro_rs::config::RoundConfig;
use balatro_rs::deck::{Deck, DeckError, STANDARD_SIZE};
use balatro_rs::engine::RoundEngine;
use balatro_rs::error::ErrorKind;
use balatro_rs::evaluator::Category;
use balatro_rs::hand::SelectionError;
use balatro_rs::round::{ActionError, Round, RoundEvent, RoundState};
use std::collections::HashSet;

fn seeded() -> Round {
    let mut round = Round::seeded(RoundConfig::default(), 2024).unwrap();
    round.start();
    round
}

fn universe(round: &Round) -> HashSet<Card> {
    let mut all: HashSet<Card> = round.deck().as_slice().iter().copied().collect();
    all.extend(round.hand().as_slice().iter().copied());
    all.extend(round.played().iter().copied());
    all
}

#[test]
fn straight_flush_from_stacked_deck() {
    let deck = Deck::stacked(parse_cards("2♠ 3♠ 4♠ 5♠ 6♠ 7♥ 8♦ 9♣ 10♣").unwrap()).unwrap();
    let mut round = Round::with_deck(RoundConfig::default(), deck).unwrap();
    round.start();
    assert_eq!(round.hand().len(), 8);

    let result = round.play(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(result.category(), Category::StraightFlush);
    assert_eq!(result.chips(), 140);
    assert_eq!(result.multiplier(), 8);
    assert_eq!(result.total(), 1120);
    assert_eq!(round.hand().len(), 4);
    assert_eq!(round.hand().as_slice(), parse_cards("7♥ 8♦ 9♣ 10♣").unwrap().as_slice());
}

#[test]
fn start_deals_full_hand_and_budgets() {
    let round = seeded();
    assert_eq!(round.hand().len(), 8);
    assert_eq!(round.plays_remaining(), 5);
    assert_eq!(round.discards_remaining(), 5);
    assert_eq!(round.deck_remaining(), STANDARD_SIZE - 8);
    assert_eq!(round.status(), RoundState::InProgress);
}

#[test]
fn replenish_follows_min_formula() {
    let mut round = seeded();
    while round.plays_remaining() > 0 {
        let old = round.hand().len();
        let deck = round.deck_remaining();
        round.play(&[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(round.hand().len(), 8.min(old - 5 + deck));
    }
    assert_eq!(round.deck_remaining(), STANDARD_SIZE - 8 - 25);
    assert_eq!(round.played().len(), 25);
}

#[test]
fn replenish_stops_when_deck_runs_dry() {
    let cards = "A♠ A♥ A♦ A♣ K♠ K♥ K♦ K♣ Q♠ Q♥";
    let deck = Deck::stacked(parse_cards(cards).unwrap()).unwrap();
    let mut round = Round::with_deck(RoundConfig::default(), deck).unwrap();
    round.start();
    assert_eq!(round.deck_remaining(), 2);
    round.play(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(round.hand().len(), 5);
    assert_eq!(round.deck_remaining(), 0);
    round.play(&[0, 1, 2, 3, 4]).unwrap();
    assert!(round.hand().is_empty());
    assert_eq!(round.status(), RoundState::Exhausted);
}

#[test]
fn invalid_selections_do_not_mutate() {
    let mut round = seeded();
    let hand = round.hand().clone();
    let deck: Vec<Card> = round.deck().as_slice().to_vec();

    let cases: [(&[usize], ActionError); 4] = [
        (&[0, 1, 2, 3], SelectionError::WrongCount { expected: 5, got: 4 }.into()),
        (&[0, 1, 2, 3, 4, 5], SelectionError::WrongCount { expected: 5, got: 6 }.into()),
        (&[0, 1, 1, 2, 3], SelectionError::Duplicate(1).into()),
        (&[0, 1, 2, 3, 9], SelectionError::OutOfRange { index: 9, len: 8 }.into()),
    ];
    for (indices, expected) in cases {
        let err = round.play(indices).unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    assert_eq!(round.discard(&[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(round.discard(&[3, 3]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(round.discard(&[8]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        round.discard(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap_err(),
        ActionError::Selection(SelectionError::TooMany { max: 8, got: 9 })
    );

    assert_eq!(round.hand(), &hand);
    assert_eq!(round.deck().as_slice(), deck.as_slice());
    assert_eq!(round.plays_remaining(), 5);
    assert_eq!(round.discards_remaining(), 5);
    assert!(round.history().is_empty());
}

fn snapshot(round: &Round) -> (Vec<Card>, Vec<Card>, Vec<RoundEvent>, u32, u32) {
    (
        round.hand().as_slice().to_vec(),
        round.deck().as_slice().to_vec(),
        round.history().to_vec(),
        round.plays_remaining(),
        round.discards_remaining(),
    )
}

#[test]
fn sixth_play_and_discard_are_exhausted() {
    let mut round = seeded();
    for _ in 0..5 {
        round.play(&[0, 1, 2, 3, 4]).unwrap();
    }
    let before = snapshot(&round);
    let play = round.play(&[0, 1, 2, 3, 4]).unwrap_err();
    assert_eq!(play, ActionError::PlaysExhausted);
    assert_eq!(play.kind(), ErrorKind::ExhaustedResource);
    assert_eq!(snapshot(&round), before);
    assert_eq!(round.discards_remaining(), 5);

    for _ in 0..5 {
        round.discard(&[0]).unwrap();
    }
    let before = snapshot(&round);
    let score = round.total_score();
    let discard = round.discard(&[0]).unwrap_err();
    assert_eq!(discard, ActionError::DiscardsExhausted);
    assert_eq!(discard.kind(), ErrorKind::ExhaustedResource);
    assert_eq!(round.play(&[0, 1, 2, 3, 4]), Err(ActionError::PlaysExhausted));
    assert_eq!(snapshot(&round), before);
    assert_eq!(round.total_score(), score);
}

#[test]
fn budgets_are_independent() {
    let mut round = seeded();
    round.discard(&[0, 1, 2]).unwrap();
    assert_eq!(round.plays_remaining(), 5);
    assert_eq!(round.discards_remaining(), 4);
    round.play(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(round.plays_remaining(), 4);
    assert_eq!(round.discards_remaining(), 4);
}

#[test]
fn discard_keeps_every_card_accounted_for() {
    let mut round = seeded();
    let gone = round.discard(&[7, 0, 3]).unwrap();
    assert_eq!(gone.len(), 3);
    assert_eq!(round.hand().len(), 8);
    assert_eq!(round.deck_remaining(), STANDARD_SIZE - 8);
    assert_eq!(universe(&round).len(), STANDARD_SIZE);
}

#[test]
fn restart_restores_full_deck() {
    let mut round = seeded();
    for _ in 0..3 {
        round.play(&[0, 1, 2, 3, 4]).unwrap();
        round.discard(&[1, 2]).unwrap();
    }
    assert_eq!(universe(&round).len(), STANDARD_SIZE);

    for _ in 0..3 {
        round.start();
        assert_eq!(round.hand().len() + round.deck_remaining(), STANDARD_SIZE);
        assert!(round.played().is_empty());
        assert_eq!(universe(&round).len(), STANDARD_SIZE);
        assert_eq!(round.plays_remaining(), 5);
        assert_eq!(round.total_score(), 0);
    }
}

#[test]
fn history_records_actions_in_order() {
    let mut round = seeded();
    let first = round.play(&[0, 1, 2, 3, 4]).unwrap();
    round.discard(&[0, 1]).unwrap();
    let second = round.play(&[3, 4, 5, 6, 7]).unwrap();

    let history = round.history();
    assert_eq!(history.len(), 3);
    assert!(matches!(&history[0], RoundEvent::Played { result, cards } if *result == first && cards.len() == 5));
    assert!(matches!(&history[1], RoundEvent::Discarded { cards } if cards.len() == 2));
    assert_eq!(round.total_score(), first.total() + second.total());
}

#[test]
fn seeded_rounds_replay_identically() {
    let mut a = Round::seeded(RoundConfig::default(), 99).unwrap();
    let mut b = Round::seeded(RoundConfig::default(), 99).unwrap();
    a.start();
    b.start();
    assert_eq!(a.hand(), b.hand());
    assert_eq!(a.play(&[0, 2, 4, 6, 7]), b.play(&[0, 2, 4, 6, 7]));
    assert_eq!(a.discard(&[1]), b.discard(&[1]));
    assert_eq!(a.hand(), b.hand());
}

#[test]
fn custom_config_limits() {
    let cfg = RoundConfig::default().with_hand_size(10).with_max_plays(2).with_max_discards(0);
    let mut round = Round::seeded(cfg, 1).unwrap();
    round.start();
    assert_eq!(round.hand().len(), 10);
    assert_eq!(round.discard(&[0]), Err(ActionError::DiscardsExhausted));
    round.play(&[0, 1, 2, 3, 4]).unwrap();
    round.play(&[5, 6, 7, 8, 9]).unwrap();
    assert_eq!(round.play(&[0, 1, 2, 3, 4]), Err(ActionError::PlaysExhausted));
}

#[test]
fn deck_draw_past_end_is_insufficient() {
    let mut deck = Deck::seeded(4);
    deck.draw(50).unwrap();
    let err = deck.draw(3).unwrap_err();
    assert_eq!(err, DeckError::InsufficientCards { requested: 3, remaining: 2 });
    assert_eq!(err.kind(), ErrorKind::InsufficientCards);
}

#[test]
fn engine_trait_drives_a_round() {
    fn play_first_five<E: RoundEngine>(engine: &mut E) -> u64 {
        engine.start();
        engine.play(&[0, 1, 2, 3, 4]).map(|r| r.total()).unwrap_or(0)
    }
    let mut round = Round::seeded(RoundConfig::default(), 8).unwrap();
    let scored = play_first_five(&mut round);
    assert!(scored >= 10);
    assert_eq!(RoundEngine::total_score(&round), scored);
    assert_eq!(RoundEngine::plays_remaining(&round), 4);
}
