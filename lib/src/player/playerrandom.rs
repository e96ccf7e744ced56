use crate::game::*;
use crate::player::*;
use crate::primitives::*;
use crate::util::*;
use rand::prelude::*;
use std::sync::mpsc;

#[derive(new)]
pub struct SPlayerRandom<FnCheckGame> {
    fn_check_game: FnCheckGame,
}

impl<FnCheckGame: Fn(&SGame)> TPlayer for SPlayerRandom<FnCheckGame> {
    fn ask_for_bid(
        &self,
        _epi: EPlayerIndex,
        _hand: &SHand,
        _bids: &SBids,
        n_bid_floor: isize,
        _ostr_rejected: Option<&str>,
        txobid: mpsc::Sender<Option<isize>>,
    ) {
        // passes twice as often as it bids, to exercise the re-deal path
        let mut rng = rand::thread_rng();
        debug_verify!(txobid.send(
            if rng.gen_range(0..3)<2 {
                None
            } else {
                Some(rng.gen_range(n_bid_floor..=N_BID_MAX))
            }
        )).unwrap();
    }

    fn ask_for_trump(
        &self,
        _epi: EPlayerIndex,
        _hand: &SHand,
        _ostr_rejected: Option<&str>,
        txesuit: mpsc::Sender<ESuit>,
    ) {
        debug_verify!(txesuit.send(
            unwrap!(ESuit::values().choose(&mut rand::thread_rng()))
        )).unwrap();
    }

    fn ask_for_card(&self, game: &SGame, _ostr_rejected: Option<&str>, txi_card: mpsc::Sender<usize>) {
        (self.fn_check_game)(game);
        let epi = unwrap!(game.which_player_can_do_something());
        let card = *unwrap!(
            game.rules.all_allowed_cards(game.trickseq.current_trick(), &game.ahand[epi])
                .choose(&mut rand::thread_rng())
        );
        debug_verify!(txi_card.send(unwrap!(
            game.ahand[epi].cards().iter().position(|&card_hand| card_hand==card)
        ))).unwrap();
    }

    fn notify(&self, _gameevent: &VGameEvent) {}

    fn name(&self) -> &str {
        "random"
    }
}
