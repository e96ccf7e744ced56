use crate::primitives::{card::*, eplayerindex::*, hand::*, trick::*};
use crate::util::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::fmt;

// Completed tricks plus the trick currently being played. Each trick's
// winner leads the next one, so the winner chain is encoded in the
// epi_first of consecutive tricks.
#[derive(Clone, Debug)]
pub struct STrickSequence {
    vectrick: ArrayVec<STrick, {N_CARDS_PER_PLAYER + 1}>,
}

impl fmt::Display for STrickSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trick in self.completed_tricks() {
            write!(f, "{} | ", trick)?;
        }
        write!(f, "{}", self.current_trick())?;
        Ok(())
    }
}

impl STrickSequence {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        assert!(!self.vectrick.is_empty());
        assert!(!self.current_trick_no_invariant().is_full());
        assert!(self.vectrick[0..self.vectrick.len()-1].iter().all(STrick::is_full));
        assert!(self.completed_tricks_no_invariant().len()<=N_CARDS_PER_PLAYER);
        if self.completed_tricks_no_invariant().len()==N_CARDS_PER_PLAYER {
            assert!(self.current_trick_no_invariant().is_empty());
        }
    }

    pub fn new(epi_first: EPlayerIndex) -> Self {
        let trickseq = STrickSequence {
            vectrick: {
                let mut vectrick = ArrayVec::new();
                vectrick.push(STrick::new(epi_first));
                vectrick
            },
        };
        #[cfg(debug_assertions)]trickseq.assert_invariant();
        trickseq
    }

    pub fn game_finished(&self) -> bool {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.completed_tricks().len()==N_CARDS_PER_PLAYER
    }

    fn completed_tricks_no_invariant(&self) -> &[STrick] {
        &self.vectrick[0..self.vectrick.len()-1]
    }

    pub fn completed_tricks(&self) -> &[STrick] {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.completed_tricks_no_invariant()
    }

    fn current_trick_no_invariant(&self) -> &STrick {
        unwrap!(self.vectrick.last())
    }

    pub fn current_trick(&self) -> &STrick {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.current_trick_no_invariant()
    }

    pub fn play_card(&mut self, card: ECard, fn_winner_index: impl FnOnce(SFullTrick)->EPlayerIndex) {
        #[cfg(debug_assertions)]self.assert_invariant();
        unwrap!(self.vectrick.last_mut()).push(card);
        if self.current_trick_no_invariant().is_full() {
            let epi_winner = fn_winner_index(SFullTrick::new(self.current_trick_no_invariant()));
            self.vectrick.push(STrick::new(epi_winner));
        }
        #[cfg(debug_assertions)]self.assert_invariant();
    }

    pub fn completed_tricks_winner_index(&self, if_dbg_else!({fn_winner_index}{_fn_winner_index}): impl Fn(SFullTrick)->EPlayerIndex) -> impl Iterator<Item=(&STrick, EPlayerIndex)> {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.vectrick[0..self.vectrick.len()]
            .iter()
            .tuple_windows()
            .map(move |(trick_0, trick_1)| {
                (trick_0, debug_verify_eq!(trick_1.first_playerindex(), fn_winner_index(SFullTrick::new(trick_0))))
            })
    }

    pub fn visible_cards(&self) -> impl Iterator<Item=(EPlayerIndex, &ECard)> {
        self.vectrick.iter().flat_map(STrick::iter)
    }

    pub fn count_played_cards(&self) -> usize {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.completed_tricks().len() * EPlayerIndex::SIZE
            + self.current_trick().size()
    }
}

#[test]
fn test_trick_sequence() {
    let mut trickseq = STrickSequence::new(EPlayerIndex::EPI2);
    assert_eq!(trickseq.current_trick().first_playerindex(), EPlayerIndex::EPI2);
    assert!(!trickseq.game_finished());
    let mut veccard = ECard::values().collect::<Vec<_>>();
    // the leader of each trick wins it
    let fn_winner_index = |fulltrick: SFullTrick| fulltrick.get().first_playerindex();
    for i_trick in 0..N_CARDS_PER_PLAYER {
        for i_card in 0..EPlayerIndex::SIZE {
            assert_eq!(trickseq.count_played_cards(), i_trick*EPlayerIndex::SIZE + i_card);
            trickseq.play_card(unwrap!(veccard.pop()), fn_winner_index);
        }
        assert_eq!(trickseq.completed_tricks().len(), i_trick+1);
    }
    assert!(trickseq.game_finished());
    assert_eq!(trickseq.count_played_cards(), 52);
    assert_eq!(trickseq.visible_cards().count(), 52);
    assert!(
        trickseq.completed_tricks_winner_index(fn_winner_index)
            .all(|(_trick, epi_winner)| epi_winner==EPlayerIndex::EPI2)
    );
}
