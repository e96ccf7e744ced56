pub mod playercomputer;
#[cfg(test)]
pub mod playerrandom;

use crate::game::*;
use crate::primitives::*;

use std::sync::mpsc;

pub trait TPlayer {
    fn ask_for_bid(
        &self,
        epi: EPlayerIndex,
        hand: &SHand,
        bids: &SBids,
        n_bid_floor: isize,
        ostr_rejected: Option<&str>,
        txobid: mpsc::Sender<Option<isize>>,
    );

    fn ask_for_trump(
        &self,
        epi: EPlayerIndex,
        hand: &SHand,
        ostr_rejected: Option<&str>,
        txesuit: mpsc::Sender<ESuit>,
    );

    fn ask_for_card(&self, game: &SGame, ostr_rejected: Option<&str>, txi_card: mpsc::Sender<usize>);

    fn notify(&self, gameevent: &VGameEvent);

    fn name(&self) -> &str;
}
