use crate::game::*;
use crate::player::*;
use crate::primitives::*;
use crate::util::*;
use std::sync::mpsc;

// Heuristic actor: weighs high cards and suit length to decide its bid,
// trumps with its longest suit, and plays the cheapest card that still
// takes the trick.
#[derive(new)]
pub struct SPlayerComputer {
    str_name: String,
}

fn hand_strength(hand: &SHand) -> isize {
    let n_honor = hand.cards().iter()
        .filter(|card| ERank::Queen.value()<=card.rank().value())
        .count()
        .as_num::<isize>();
    let n_longest_suit = unwrap!(
        ESuit::values()
            .map(|esuit| hand.cards().iter().filter(|card| card.suit()==esuit).count())
            .max()
    ).as_num::<isize>();
    2*n_honor + n_longest_suit
}

fn bid_for_strength(n_strength: isize) -> Option<isize> {
    match n_strength {
        isize::MIN..=9 => None,
        10 | 11 => Some(7),
        12 | 13 => Some(8),
        14 | 15 => Some(9),
        16 | 17 => Some(10),
        18 | 19 => Some(11),
        20 | 21 => Some(12),
        _ => Some(13),
    }
}

impl TPlayer for SPlayerComputer {
    fn ask_for_bid(
        &self,
        _epi: EPlayerIndex,
        hand: &SHand,
        bids: &SBids,
        _n_bid_floor: isize,
        _ostr_rejected: Option<&str>,
        txobid: mpsc::Sender<Option<isize>>,
    ) {
        let n_bid_lowest_accepted = match bids.iter().filter_map(|(_epi, obid)| *obid).max() {
            None => N_BID_MIN,
            Some(n_bid_highest) => n_bid_highest + 1,
        };
        unwrap!(txobid.send(
            bid_for_strength(hand_strength(hand))
                .filter(|n_bid| n_bid_lowest_accepted<=*n_bid)
        ));
    }

    fn ask_for_trump(
        &self,
        _epi: EPlayerIndex,
        hand: &SHand,
        _ostr_rejected: Option<&str>,
        txesuit: mpsc::Sender<ESuit>,
    ) {
        unwrap!(txesuit.send(unwrap!(
            ESuit::values().max_by_key(|&esuit| (
                hand.cards().iter().filter(|card| card.suit()==esuit).count(),
                hand.cards().iter().filter(|card| card.suit()==esuit).map(|card| card.rank().value()).sum::<isize>(),
            ))
        )));
    }

    fn ask_for_card(&self, game: &SGame, _ostr_rejected: Option<&str>, txi_card: mpsc::Sender<usize>) {
        let epi = unwrap!(game.which_player_can_do_something());
        let trick = game.trickseq.current_trick();
        let veccard_allowed = game.rules.all_allowed_cards(trick, &game.ahand[epi]);
        let card_chosen = if trick.is_empty() {
            // lead with the strongest card
            *unwrap!(veccard_allowed.iter().max_by_key(|card| game.rules.card_value(**card, /*esuit_lead*/card.suit())))
        } else {
            let esuit_lead = trick.first().suit();
            let fn_value = |card: ECard| game.rules.card_value(card, esuit_lead);
            let n_value_to_beat = unwrap!(trick.iter().map(|(_epi, &card)| fn_value(card)).max());
            // the cheapest card that still takes the trick, else the
            // cheapest card overall
            match veccard_allowed.iter().copied()
                .filter(|&card| n_value_to_beat<fn_value(card))
                .min_by_key(|&card| fn_value(card))
            {
                Some(card) => card,
                None => unwrap!(
                    veccard_allowed.iter().copied()
                        .min_by_key(|&card| (fn_value(card), card.rank().value()))
                ),
            }
        };
        unwrap!(txi_card.send(unwrap!(
            game.ahand[epi].cards().iter().position(|&card| card==card_chosen)
        )));
    }

    fn notify(&self, _gameevent: &VGameEvent) {}

    fn name(&self) -> &str {
        &self.str_name
    }
}

#[test]
fn test_hand_strength_bids() {
    // a hand with every honor and a long suit must bid
    let hand = SHand::new_from_iter([
        ECard::HA, ECard::HK, ECard::HQ, ECard::HJ, ECard::H10, ECard::H9, ECard::H8,
        ECard::SA, ECard::SK, ECard::SQ, ECard::DA, ECard::DK, ECard::CA,
    ]);
    assert_eq!(bid_for_strength(hand_strength(&hand)), Some(13));
    // a weak hand passes
    let hand_weak = SHand::new_from_iter([
        ECard::H2, ECard::H5, ECard::S3, ECard::S6, ECard::S9, ECard::D2, ECard::D4,
        ECard::D7, ECard::C2, ECard::C4, ECard::C6, ECard::C8, ECard::C10,
    ]);
    assert_eq!(bid_for_strength(hand_strength(&hand_weak)), None);
}
