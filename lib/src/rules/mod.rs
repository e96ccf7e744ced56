pub mod ruleset;

use crate::primitives::*;
use crate::util::*;

// Tarneeb has a single fixed rule set per deal once the trump suit is
// chosen: trump outranks the lead suit, the lead suit outranks everything
// else, and off-suit non-trump cards cannot win a trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct SRules {
    esuit_trump: ESuit,
}

impl SRules {
    pub fn trump(&self) -> ESuit {
        self.esuit_trump
    }

    pub fn card_value(&self, card: ECard, esuit_lead: ESuit) -> isize {
        if card.suit()==self.esuit_trump {
            2 * card.rank().value()
        } else if card.suit()==esuit_lead {
            card.rank().value()
        } else {
            0
        }
    }

    // Ties are impossible: each suit-rank combination exists once, and the
    // value function is strictly monotonic within trump and lead suit.
    pub fn winner_index(&self, fulltrick: SFullTrick) -> EPlayerIndex {
        let trick = fulltrick.get();
        let esuit_lead = trick.first().suit();
        let mut epi_best = trick.first_playerindex();
        for (epi, card) in trick.iter().skip(1) {
            if self.card_value(trick[epi_best], esuit_lead) < self.card_value(*card, esuit_lead) {
                epi_best = epi;
            }
        }
        epi_best
    }

    pub fn all_allowed_cards(&self, trick: &STrick, hand: &SHand) -> SHandVector {
        assert!(!hand.cards().is_empty());
        let veccard = if trick.is_empty() {
            hand.cards().clone()
        } else {
            let esuit_lead = trick.first().suit();
            let veccard_lead_suit : SHandVector = hand.cards().iter().copied()
                .filter(|card| card.suit()==esuit_lead)
                .collect();
            if veccard_lead_suit.is_empty() {
                hand.cards().clone()
            } else {
                veccard_lead_suit
            }
        };
        assert!(!veccard.is_empty());
        veccard
    }

    pub fn card_is_allowed(&self, trick: &STrick, hand: &SHand, card: ECard) -> bool {
        self.all_allowed_cards(trick, hand).contains(&card)
    }
}

#[cfg(test)]
fn trick_from_cards(epi_first: EPlayerIndex, acard: [ECard; EPlayerIndex::SIZE]) -> STrick {
    STrick::new_full(epi_first, acard)
}

#[test]
fn test_card_value() {
    let rules = SRules::new(ESuit::Spades);
    assert_eq!(rules.card_value(ECard::S2, ESuit::Hearts), 2);
    assert_eq!(rules.card_value(ECard::SA, ESuit::Hearts), 26);
    assert_eq!(rules.card_value(ECard::HK, ESuit::Hearts), 12);
    assert_eq!(rules.card_value(ECard::CA, ESuit::Hearts), 0);
    assert_eq!(rules.card_value(ECard::H10, ESuit::Hearts), 9);
}

#[test]
fn test_winner_any_trump_beats_any_non_trump() {
    // trump spades, lead hearts: the lone low trump wins over high lead cards
    let rules = SRules::new(ESuit::Spades);
    let trick = trick_from_cards(EPlayerIndex::EPI0, [ECard::H10, ECard::S2, ECard::HK, ECard::CA]);
    assert_eq!(rules.winner_index(SFullTrick::new(&trick)), EPlayerIndex::EPI1);
}

#[test]
fn test_winner_all_trump() {
    // lead suit equals trump; all values are doubled, order is preserved
    let rules = SRules::new(ESuit::Hearts);
    let trick = trick_from_cards(EPlayerIndex::EPI0, [ECard::H5, ECard::HJ, ECard::H2, ECard::HA]);
    assert_eq!(rules.winner_index(SFullTrick::new(&trick)), EPlayerIndex::EPI3);
}

#[test]
fn test_winner_lead_suit_only() {
    // no trump played: highest lead-suit card wins, off-suit cards never do
    let rules = SRules::new(ESuit::Spades);
    let trick = trick_from_cards(EPlayerIndex::EPI2, [ECard::D7, ECard::DK, ECard::CA, ECard::D9]);
    assert_eq!(rules.winner_index(SFullTrick::new(&trick)), EPlayerIndex::EPI3);
}

#[test]
fn test_winner_invariant_to_seating() {
    // trump hearts, lead diamonds: the trump ace wins no matter which seat
    // holds it and no matter who leads
    let rules = SRules::new(ESuit::Hearts);
    for epi_first in EPlayerIndex::values() {
        for (card_1, card_2, card_3) in [
            (ECard::HA, ECard::C2, ECard::S5),
            (ECard::C2, ECard::HA, ECard::S5),
            (ECard::C2, ECard::S5, ECard::HA),
        ] {
            let trick = trick_from_cards(epi_first, [ECard::DK, card_1, card_2, card_3]);
            let epi_winner = rules.winner_index(SFullTrick::new(&trick));
            assert_eq!(trick[epi_winner], ECard::HA);
        }
    }
}

#[test]
fn test_allowed_cards() {
    let rules = SRules::new(ESuit::Clubs);
    let hand = SHand::new_from_iter([ECard::H2, ECard::HK, ECard::S4, ECard::C9]);
    {
        // leading: everything goes
        let trick = STrick::new(EPlayerIndex::EPI0);
        assert_eq!(rules.all_allowed_cards(&trick, &hand).len(), 4);
    }
    {
        // holding the lead suit: only lead-suit cards are allowed
        let mut trick = STrick::new(EPlayerIndex::EPI0);
        trick.push(ECard::H7);
        let veccard_allowed = rules.all_allowed_cards(&trick, &hand);
        assert_eq!(veccard_allowed.as_slice(), [ECard::H2, ECard::HK]);
        assert!(rules.card_is_allowed(&trick, &hand, ECard::HK));
        assert!(!rules.card_is_allowed(&trick, &hand, ECard::S4));
        assert!(!rules.card_is_allowed(&trick, &hand, ECard::C9)); // not even trump
    }
    {
        // void in the lead suit: everything goes
        let mut trick = STrick::new(EPlayerIndex::EPI0);
        trick.push(ECard::D7);
        assert_eq!(rules.all_allowed_cards(&trick, &hand).len(), 4);
        assert!(rules.card_is_allowed(&trick, &hand, ECard::S4));
    }
}
