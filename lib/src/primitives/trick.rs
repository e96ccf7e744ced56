use crate::primitives::{card::*, eplayerindex::*};
use crate::util::*;
use std::fmt;

pub type STrick = SPlayersInRound<ECard, EPlayerIndex>;

#[derive(Copy, Clone)]
pub struct SFullTrick<'trick>(&'trick STrick);

impl<'trick> SFullTrick<'trick> {
    pub fn new(trick: &'trick STrick) -> Self {
        debug_assert!(trick.is_full());
        Self(trick)
    }
    pub fn get(&self) -> &STrick {
        self.0
    }
}

impl fmt::Display for STrick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in EPlayerIndex::values() {
            if epi==self.epi_first {
                write!(f, ">")?;
            } else {
                write!(f, " ")?;
            }
            match self.get(epi) {
                None => {write!(f, "__")?;}
                Some(card) => {write!(f, "{}", card)?;}
            }
        }
        write!(f, "")
    }
}

#[test]
fn test_trick() {
    {
        let acard = [ECard::H2, ECard::H5, ECard::HK, ECard::SA];
        for epi_first in EPlayerIndex::values() {
            for n_size in 0..5 {
                let mut trick = STrick::new(epi_first);
                for &card in acard.iter().take(n_size) {
                    trick.push(card);
                }
                assert_eq!(trick.size(), n_size);
                assert_eq!(trick.first_playerindex(), epi_first);
                assert_eq!(trick.size(), trick.iter().count());
                for (epi, card) in trick.iter() {
                    assert_eq!(trick.get(epi), Some(card));
                    assert_eq!(trick[epi], *card);
                }
            }
        }
    }
    {
        let mut trick = STrick::new(EPlayerIndex::EPI2);
        trick.push(ECard::new(ESuit::Hearts, ERank::Jack));
        trick.push(ECard::new(ESuit::Spades, ERank::Two));
        assert!(trick[EPlayerIndex::EPI2]==ECard::new(ESuit::Hearts, ERank::Jack));
        assert!(trick[EPlayerIndex::EPI3]==ECard::new(ESuit::Spades, ERank::Two));
        assert_eq!(trick.iter().count(), 2);
        assert_eq!(trick.current_playerindex(), Some(EPlayerIndex::EPI0));
    }
}
