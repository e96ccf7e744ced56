use crate::primitives::card::*;
use crate::util::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::{cmp::Reverse, fmt};

pub const N_CARDS_PER_PLAYER: usize = 13;

pub type SHandVector = ArrayVec<ECard, N_CARDS_PER_PLAYER>;

// Cards keep their insertion order; organize is a presentation concern only
// and must never be consulted for legality.
#[derive(Clone, Debug)]
pub struct SHand {
    veccard: SHandVector,
}

impl SHand {
    pub fn new() -> SHand {
        SHand{veccard: SHandVector::new()}
    }

    pub fn new_from_iter(itcard: impl IntoIterator<Item=ECard>) -> SHand {
        SHand{veccard: itcard.into_iter().collect()}
    }

    pub fn cards(&self) -> &SHandVector {
        &self.veccard
    }

    pub fn contains(&self, card_check: ECard) -> bool {
        self.veccard.iter().any(|&card| card==card_check)
    }

    pub fn contains_suit(&self, esuit: ESuit) -> bool {
        self.veccard.iter().any(|card| card.suit()==esuit)
    }

    pub fn add_card(&mut self, card: ECard) {
        debug_assert!(!self.contains(card));
        assert!(!self.veccard.is_full());
        self.veccard.push(card);
    }

    // Removes and returns the card at i_card, shifting later cards down.
    pub fn play_card(&mut self, i_card: usize) -> Result<ECard, Error> {
        if self.veccard.len() <= i_card {
            bail!("Card index {} out of range for a hand of {} cards", i_card, self.veccard.len());
        }
        Ok(self.veccard.remove(i_card))
    }

    // Stable sort into display order: suits in fixed precedence, descending
    // rank within each suit.
    pub fn organize(&mut self) {
        self.veccard.sort_by_key(|card| (card.suit().to_usize(), Reverse(card.rank().to_usize())));
    }
}

impl fmt::Display for SHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.veccard.iter().format(", "))
    }
}

#[test]
fn test_hand() {
    let mut hand = SHand::new_from_iter([ECard::HJ, ECard::SK, ECard::C7]);
    assert_eq!(hand.cards().len(), 3);
    assert!(hand.contains(ECard::SK));
    assert!(hand.contains_suit(ESuit::Clubs));
    assert!(!hand.contains_suit(ESuit::Diamonds));
    assert_eq!(unwrap!(hand.play_card(1)), ECard::SK);
    assert_eq!(hand.cards().as_slice(), [ECard::HJ, ECard::C7]);
    assert!(hand.play_card(2).is_err());
    assert_eq!(hand.cards().len(), 2);
    hand.add_card(ECard::D4);
    assert_eq!(hand.cards().as_slice(), [ECard::HJ, ECard::C7, ECard::D4]);
}

#[test]
fn test_organize() {
    let mut hand = SHand::new_from_iter([ECard::C7, ECard::H2, ECard::SA, ECard::HQ, ECard::CA, ECard::D10]);
    hand.organize();
    assert_eq!(
        hand.cards().as_slice(),
        [ECard::HQ, ECard::H2, ECard::SA, ECard::D10, ECard::CA, ECard::C7],
    );
    let veccard_once = hand.cards().clone();
    hand.organize();
    assert_eq!(hand.cards(), &veccard_once);
    assert_eq!(hand.cards().len(), 6);
}

#[test]
fn test_hand_display() {
    let hand = SHand::new_from_iter([ECard::H10, ECard::SA]);
    assert_eq!(format!("{}", hand), "10H, AS");
}
