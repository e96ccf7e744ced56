use crate::primitives::card::*;
use crate::util::*;
use rand::prelude::*;

// The base order is suit-major, rank-minor (the declaration order of ECard).
#[derive(Clone, Debug)]
pub struct SDeck {
    veccard: Vec<ECard>,
}

impl SDeck {
    pub fn new() -> SDeck {
        let veccard = ECard::values().collect::<Vec<_>>();
        assert_eq!(veccard.len(), ESuit::SIZE * ERank::SIZE);
        SDeck{veccard}
    }

    pub fn new_shuffled() -> SDeck {
        let mut deck = SDeck::new();
        deck.shuffle(&mut rand::thread_rng());
        deck
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.veccard.shuffle(rng);
    }

    pub fn cards(&self) -> &[ECard] {
        &self.veccard
    }

    pub fn is_empty(&self) -> bool {
        self.veccard.is_empty()
    }

    // Removes and returns the first n_cards cards, keeping the rest in order.
    pub fn deal(&mut self, n_cards: usize) -> Result<Vec<ECard>, Error> {
        if self.veccard.len() < n_cards {
            bail!("Cannot deal {} cards from a deck of {}", n_cards, self.veccard.len());
        }
        Ok(self.veccard.drain(0..n_cards).collect())
    }
}

#[test]
fn test_deck() {
    let deck = SDeck::new();
    assert_eq!(deck.cards().len(), 52);
    let mut setcardb = ECard::map_from_fn(|_card| false);
    for &card in deck.cards() {
        assert!(!setcardb[card]);
        setcardb[card] = true;
    }
    assert_eq!(deck.cards()[0], ECard::H2);
    assert_eq!(deck.cards()[ERank::SIZE], ECard::S2);
    assert_eq!(deck.cards()[51], ECard::CA);
}

#[test]
fn test_deal() {
    let mut deck = SDeck::new();
    let veccard = unwrap!(deck.deal(13));
    assert_eq!(veccard.len(), 13);
    assert_eq!(deck.cards().len(), 39);
    assert_eq!(veccard[0], ECard::H2);
    assert_eq!(deck.cards()[0], ECard::S2);
    unwrap!(deck.deal(39));
    assert!(deck.is_empty());
    assert!(deck.deal(1).is_err());
}

#[test]
fn test_shuffle_preserves_cards() {
    let mut deck = SDeck::new_shuffled();
    let mut setcardb = ECard::map_from_fn(|_card| false);
    for card in unwrap!(deck.deal(52)) {
        assert!(!setcardb[card]);
        setcardb[card] = true;
    }
    assert!(ECard::values().all(|card| setcardb[card]));
}
