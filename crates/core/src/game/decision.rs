use crate::{DrawSource, Hand, RngState, Tile};

/// One-ply lookahead for a computer pickup.
///
/// The waiting discard is slotted into the hand, the run is measured, and the
/// tile is pulled back out again. The stack tile is unknown, so the hand as it
/// stands is the stack's estimate; only a strict improvement takes the
/// discard.
pub fn choose_draw_source(hand: &mut Hand, discard: Option<Tile>) -> DrawSource {
    let Some(tile) = discard else {
        return DrawSource::Stack;
    };
    let current = hand.longest_run_length();
    let Ok(slot) = hand.insert(tile) else {
        return DrawSource::Stack;
    };
    let with_discard = hand.longest_run_length();
    hand.remove_at(slot).ok();
    if with_discard > current {
        DrawSource::Discard
    } else {
        DrawSource::Stack
    }
}

/// Picks the slot a computer throws away: the first duplicate, otherwise
/// whichever end of the hand sits farther from the longest run.
pub fn choose_discard_index(hand: &Hand, rng: &mut RngState) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }
    if let Some(index) = hand.first_duplicate_index() {
        return Some(index);
    }
    let last = hand.len() - 1;
    Some(farther_end(hand.middle_of_longest_run(), last, rng))
}

/// `0` or `last`, whichever lies farther from `middle`. Equal distances go to
/// a coin flip.
pub fn farther_end(middle: f64, last: usize, rng: &mut RngState) -> usize {
    let to_low = middle.abs();
    let to_high = (last as f64 - middle).abs();
    if to_low > to_high {
        0
    } else if to_high > to_low {
        last
    } else if rng.coin_flip() {
        0
    } else {
        last
    }
}

/// Seats sharing the strictly greatest run length.
pub fn select_winners(run_lengths: &[usize]) -> Vec<usize> {
    let Some(&best) = run_lengths.iter().max() else {
        return Vec::new();
    };
    run_lengths
        .iter()
        .enumerate()
        .filter(|&(_, &length)| length == best)
        .map(|(seat, _)| seat)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of(values: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &value in values {
            hand.insert(Tile::new(value).unwrap()).expect("insert");
        }
        hand
    }

    #[test]
    fn duplicate_goes_first() {
        let mut hand = hand_of(&[3, 3, 5, 7]);
        let index = choose_discard_index(&hand, &mut RngState::from_seed(1));
        assert_eq!(index, Some(0));
        hand.remove_at(0).expect("remove");
        assert_eq!(hand.values(), vec![3, 5, 7]);
    }

    #[test]
    fn earliest_duplicate_wins() {
        let hand = hand_of(&[1, 2, 6, 6, 9, 9]);
        assert_eq!(
            choose_discard_index(&hand, &mut RngState::from_seed(1)),
            Some(2)
        );
    }

    #[test]
    fn without_duplicates_the_high_end_goes() {
        // an ascending hand has no run, so the centre sits at 0
        let hand = hand_of(&[2, 4, 6, 8, 10]);
        assert_eq!(
            choose_discard_index(&hand, &mut RngState::from_seed(1)),
            Some(4)
        );
    }

    #[test]
    fn empty_hand_has_nothing_to_discard() {
        assert_eq!(
            choose_discard_index(&Hand::new(), &mut RngState::from_seed(1)),
            None
        );
    }

    #[test]
    fn farther_end_follows_distance() {
        let mut rng = RngState::from_seed(1);
        assert_eq!(farther_end(10.0, 14, &mut rng), 0);
        assert_eq!(farther_end(3.5, 14, &mut rng), 14);
    }

    #[test]
    fn farther_end_tie_uses_both_ends() {
        let mut rng = RngState::from_seed(99);
        let picks: Vec<usize> = (0..64).map(|_| farther_end(7.0, 14, &mut rng)).collect();
        assert!(picks.iter().all(|&p| p == 0 || p == 14));
        assert!(picks.contains(&0));
        assert!(picks.contains(&14));
    }

    #[test]
    fn draw_prefers_stack_without_improvement() {
        let mut hand = hand_of(&[1, 2, 3, 5, 8]);
        let before = hand.clone();
        let source = choose_draw_source(&mut hand, Some(Tile::new(4).unwrap()));
        assert_eq!(source, DrawSource::Stack);
        assert_eq!(hand, before);
    }

    #[test]
    fn lookahead_puts_a_matching_tile_back() {
        let mut hand = hand_of(&[2, 4, 4, 9]);
        let before = hand.clone();
        let source = choose_draw_source(&mut hand, Some(Tile::new(4).unwrap()));
        assert_eq!(source, DrawSource::Stack);
        assert_eq!(hand, before);
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn draw_without_discard_uses_stack() {
        let mut hand = hand_of(&[1, 2]);
        assert_eq!(choose_draw_source(&mut hand, None), DrawSource::Stack);
    }

    #[test]
    fn full_hand_never_takes_discard() {
        let values: Vec<u8> = (1..=15).collect();
        let mut hand = hand_of(&values);
        let before = hand.clone();
        assert_eq!(
            choose_draw_source(&mut hand, Some(Tile::new(20).unwrap())),
            DrawSource::Stack
        );
        assert_eq!(hand, before);
    }

    macro_rules! winners_case {
        ($name:ident, $lengths:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(select_winners(&$lengths), $expected);
            }
        };
    }

    winners_case!(sole_longest_run_wins, [3, 5, 7, 2], vec![2]);
    winners_case!(tied_runs_share_the_win, [7, 5, 7, 1], vec![0, 2]);
    winners_case!(all_zero_runs_all_win, [0, 0, 0, 0], vec![0, 1, 2, 3]);
    winners_case!(no_seats_no_winners, [0usize; 0], Vec::<usize>::new());
}
