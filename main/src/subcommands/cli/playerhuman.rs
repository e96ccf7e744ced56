use super::tui;
use crate::util::*;
use std::sync::mpsc;
use tarneeb_lib::{
    game::*,
    player::TPlayer,
    primitives::*,
};

// Line-based terminal actor. Parsing raw text is handled here; the engine
// still re-requests anything that violates the game rules.
#[derive(new)]
pub struct SPlayerHuman {
    epi: EPlayerIndex,
    astr_name: EnumMap<EPlayerIndex, String>,
    // exactly one human per table prints the shared events
    b_announcer: bool,
}

impl TPlayer for SPlayerHuman {
    fn ask_for_bid(
        &self,
        epi: EPlayerIndex,
        hand: &SHand,
        _bids: &SBids,
        n_bid_floor: isize,
        ostr_rejected: Option<&str>,
        txobid: mpsc::Sender<Option<isize>>,
    ) {
        if let Some(str_rejected) = ostr_rejected {
            println!("{}", str_rejected);
        }
        tui::print_hand(&self.astr_name[epi], hand, /*b_show_indices*/false);
        loop {
            let str_input = tui::prompt(&format!(
                "{}, enter your bid ({}-{}), or press enter to pass",
                self.astr_name[epi], n_bid_floor, N_BID_MAX,
            ));
            if str_input.is_empty() {
                unwrap!(txobid.send(None));
                return;
            }
            match str_input.parse::<isize>() {
                Ok(n_bid) => {
                    unwrap!(txobid.send(Some(n_bid)));
                    return;
                },
                Err(_err) => println!("Invalid input. Please enter a valid number."),
            }
        }
    }

    fn ask_for_trump(
        &self,
        epi: EPlayerIndex,
        hand: &SHand,
        ostr_rejected: Option<&str>,
        txesuit: mpsc::Sender<ESuit>,
    ) {
        if let Some(str_rejected) = ostr_rejected {
            println!("{}", str_rejected);
        }
        tui::print_hand(&self.astr_name[epi], hand, /*b_show_indices*/false);
        loop {
            match tui::prompt(&format!("{}, enter trump suit (h, s, d, c)", self.astr_name[epi])).parse::<ESuit>() {
                Ok(esuit) => {
                    unwrap!(txesuit.send(esuit));
                    return;
                },
                Err(_err) => println!("Invalid suit. Please enter h (hearts), s (spades), d (diamonds), or c (clubs)."),
            }
        }
    }

    fn ask_for_card(&self, game: &SGame, ostr_rejected: Option<&str>, txi_card: mpsc::Sender<usize>) {
        if let Some(str_rejected) = ostr_rejected {
            println!("{}", str_rejected);
        }
        let epi = unwrap!(game.which_player_can_do_something());
        let an_tricks = game.an_tricks();
        println!(
            "(trump suit: {}) (current round tricks: {} - {})",
            game.rules.trump(), an_tricks[ETeam::Team1], an_tricks[ETeam::Team2],
        );
        if !game.trickseq.current_trick().is_empty() {
            tui::print_trick(&self.astr_name, game.trickseq.current_trick());
        }
        tui::print_hand(&self.astr_name[epi], &game.ahand[epi], /*b_show_indices*/true);
        loop {
            let str_input = tui::prompt(&format!(
                "{}, enter the index of the card you want to play",
                self.astr_name[epi],
            ));
            match str_input.parse::<usize>() {
                Ok(i_card) => {
                    unwrap!(txi_card.send(i_card));
                    return;
                },
                Err(_err) => println!("Invalid input: Please enter a valid number."),
            }
        }
    }

    fn notify(&self, gameevent: &VGameEvent) {
        if !self.b_announcer {
            return;
        }
        match *gameevent {
            VGameEvent::HandsDealt(_ahand) => {
                tui::clear_screen();
                println!("New deal.\n");
            },
            VGameEvent::BidPlaced(epi, obid) => match obid {
                None => println!("{} passes", self.astr_name[epi]),
                Some(n_bid) => println!("{} bids {}", self.astr_name[epi], n_bid),
            },
            VGameEvent::NoBidder => {
                tui::clear_screen();
                println!("No one bid; restarting round.\n");
            },
            VGameEvent::BidWon(epi, n_bid) => {
                println!("\n{} won the bid with {}.", self.astr_name[epi], n_bid);
            },
            VGameEvent::TrumpChosen(epi, esuit) => {
                println!("{} chose {} as the trump suit.\n", self.astr_name[epi], esuit);
            },
            VGameEvent::CardPlayed(epi, card) => {
                print!("{} played ", self.astr_name[epi]);
                tui::print_card(card);
                println!("\n");
            },
            VGameEvent::TrickWon(epi, trick) => {
                tui::print_trick(&self.astr_name, trick);
                println!("{} wins the trick!\n", self.astr_name[epi]);
            },
            VGameEvent::DealScored(gameresult, scoreboard) => {
                let eteam_bidder = gameresult.eteam_bidder();
                if gameresult.contract_made() {
                    println!(
                        "{} made the contract: {} tricks on a bid of {}.",
                        eteam_bidder, gameresult.an_tricks[eteam_bidder], gameresult.n_bid,
                    );
                } else {
                    println!(
                        "{} failed the contract: {} tricks on a bid of {}.",
                        eteam_bidder, gameresult.an_tricks[eteam_bidder], gameresult.n_bid,
                    );
                }
                println!(
                    "Total game scores: {} - {}\n",
                    scoreboard.an_score[ETeam::Team1], scoreboard.an_score[ETeam::Team2],
                );
            },
            VGameEvent::MatchWon(eteam, scoreboard) => {
                println!(
                    "{} won with a score of {} and {} had a score of {}!",
                    eteam,
                    scoreboard.an_score[eteam],
                    eteam.other(),
                    scoreboard.an_score[eteam.other()],
                );
            },
        }
    }

    fn name(&self) -> &str {
        &self.astr_name[self.epi]
    }
}
