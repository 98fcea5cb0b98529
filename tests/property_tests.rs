//! Property tests for sampling without replacement.
//!
//! For arbitrary deck sizes and seeds:
//! - A full cycle of draws is a permutation of the deck
//! - Every draw lowers `remaining_count` by exactly one
//! - Failed operations leave the machine unchanged

use proptest::prelude::*;

use depth_cards::cards::{DeckSpec, DeckTable};
use depth_cards::core::{DeckError, DeckLevel, DrawRng};
use depth_cards::machine::{Advance, DeckMachine};

fn machine(sizes: &[usize], seed: u64) -> DeckMachine {
    let specs = sizes
        .iter()
        .enumerate()
        .map(|(l, &n)| DeckSpec {
            label: format!("Level {l}"),
            cards: (0..n).map(|i| format!("{l}:{i}")).collect(),
        })
        .collect();
    DeckMachine::new(DeckTable::from_specs(specs).unwrap(), DrawRng::new(seed))
}

proptest! {
    #[test]
    fn prop_cycle_is_permutation(
        sizes in prop::array::uniform4(1usize..40),
        raw_level in 0u8..4,
        seed in any::<u64>(),
    ) {
        let l = DeckLevel::new(raw_level).unwrap();
        let size = sizes[raw_level as usize];
        let mut machine = machine(&sizes, seed);
        machine.select_deck(l).unwrap();

        let mut drawn = Vec::with_capacity(size);
        loop {
            let before = machine.remaining_count(l);
            let card = machine.draw_card(l).unwrap();
            prop_assert_eq!(machine.remaining_count(l), before - 1);
            prop_assert_eq!(&card.content, &format!("{}:{}", raw_level, card.index));
            drawn.push(card.index);
            if machine.advance_to_next(l).unwrap() == Advance::Exhausted {
                break;
            }
        }

        prop_assert_eq!(drawn.len(), size);
        drawn.sort_unstable();
        prop_assert_eq!(drawn, (0..size).collect::<Vec<_>>());

        machine.reshuffle(l);
        prop_assert_eq!(machine.remaining_count(l), size);
    }

    #[test]
    fn prop_exhausted_draw_is_a_no_op(
        size in 1usize..20,
        seed in any::<u64>(),
    ) {
        let l = DeckLevel::ALL[0];
        let mut machine = machine(&[size, 1, 1, 1], seed);
        machine.select_deck(l).unwrap();
        for _ in 0..size {
            machine.draw_card(l).unwrap();
            machine.advance_to_next(l).unwrap();
        }

        let session = machine.session().clone();
        prop_assert_eq!(machine.draw_card(l), Err(DeckError::Exhausted(l)));
        prop_assert_eq!(machine.select_deck(l), Err(DeckError::Exhausted(l)));
        prop_assert_eq!(machine.remaining_count(l), 0);
        prop_assert_eq!(machine.session(), &session);
    }

    #[test]
    fn prop_same_seed_same_sequence(
        size in 1usize..30,
        seed in any::<u64>(),
    ) {
        let l = DeckLevel::ALL[3];
        let sequence = |seed| {
            let mut machine = machine(&[1, 1, 1, size], seed);
            machine.select_deck(l).unwrap();
            (0..size)
                .map(|_| {
                    let index = machine.draw_card(l).unwrap().index;
                    machine.advance_to_next(l).unwrap();
                    index
                })
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(sequence(seed), sequence(seed));
    }
}
