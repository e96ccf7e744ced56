use super::*;
use crate::player::*;
use crate::rules::ruleset::*;
use std::sync::mpsc;

// Drives the phase machine against four actors, repeating deals until one
// team's total reaches the target. Every rejected response is re-requested
// from the same actor together with the reason.
pub fn run_match(aplayer: EnumMap<EPlayerIndex, Box<dyn TPlayer>>, ruleset: &SRuleSet) -> (ETeam, SScoreBoard) {
    fn communicate_via_channel<T: std::fmt::Debug>(f: impl FnOnce(mpsc::Sender<T>)) -> T {
        let (txt, rxt) = mpsc::channel::<T>();
        f(txt);
        unwrap!(rxt.recv())
    }
    fn notify_all(aplayer: &EnumMap<EPlayerIndex, Box<dyn TPlayer>>, gameevent: &VGameEvent) {
        for epi in EPlayerIndex::values() {
            aplayer[epi].notify(gameevent);
        }
    }
    let mut scoreboard = SScoreBoard::new();
    let eteam_winner = loop {
        if let Some(eteam_winner) = scoreboard.winner(ruleset.n_score_target) {
            break eteam_winner;
        }
        let mut determinetrump = loop {
            let mut bidding = SBidding::new();
            notify_all(&aplayer, &VGameEvent::HandsDealt(&bidding.ahand));
            while let Some(epi) = bidding.which_player_can_do_something() {
                info!("Asking player {} for bid", epi);
                let mut ostr_rejected : Option<String> = None;
                loop {
                    let obid = communicate_via_channel(|txobid| {
                        aplayer[epi].ask_for_bid(
                            epi,
                            &bidding.ahand[epi],
                            &bidding.bids,
                            bidding.bid_floor(),
                            ostr_rejected.as_deref(),
                            txobid,
                        );
                    });
                    match bidding.announce_bid(epi, obid) {
                        Ok(()) => {
                            notify_all(&aplayer, &VGameEvent::BidPlaced(epi, obid));
                            break;
                        },
                        Err(err) => ostr_rejected = Some(err.to_string()),
                    }
                }
            }
            match unwrap!(bidding.finish()) {
                VBiddingFinish::TrumpSelection(determinetrump) => break determinetrump,
                VBiddingFinish::NoBidder => {
                    info!("Nobody bid; dealing anew");
                    notify_all(&aplayer, &VGameEvent::NoBidder);
                },
            }
        };
        notify_all(&aplayer, &VGameEvent::BidWon(determinetrump.epi_bidder, determinetrump.n_bid));
        while let Some(epi) = determinetrump.which_player_can_do_something() {
            info!("Asking player {} for trump", epi);
            let mut ostr_rejected : Option<String> = None;
            loop {
                let esuit = communicate_via_channel(|txesuit| {
                    aplayer[epi].ask_for_trump(
                        epi,
                        &determinetrump.ahand[epi],
                        ostr_rejected.as_deref(),
                        txesuit,
                    );
                });
                match determinetrump.select_trump(epi, esuit) {
                    Ok(()) => {
                        notify_all(&aplayer, &VGameEvent::TrumpChosen(epi, esuit));
                        break;
                    },
                    Err(err) => ostr_rejected = Some(err.to_string()),
                }
            }
        }
        let mut game = unwrap!(determinetrump.finish());
        while let Some(epi) = game.which_player_can_do_something() {
            let mut ostr_rejected : Option<String> = None;
            loop {
                let i_card = communicate_via_channel(|txi_card| {
                    aplayer[epi].ask_for_card(&game, ostr_rejected.as_deref(), txi_card);
                });
                let ocard = game.ahand[epi].cards().get(i_card).copied();
                match game.play_card(epi, i_card) {
                    Ok(()) => {
                        notify_all(&aplayer, &VGameEvent::CardPlayed(epi, unwrap!(ocard)));
                        if game.trickseq.current_trick().is_empty() {
                            notify_all(&aplayer, &VGameEvent::TrickWon(
                                game.trickseq.current_trick().first_playerindex(),
                                unwrap!(game.trickseq.completed_tricks().last()),
                            ));
                        }
                        break;
                    },
                    Err(err) => ostr_rejected = Some(err.to_string()),
                }
            }
        }
        info!("Deal complete: {}", game.trickseq);
        let gameresult = unwrap!(game.finish());
        gameresult.apply_payout(&mut scoreboard);
        info!(
            "Deal scored: bid {} by player {}, tricks {:?}, totals {:?}",
            gameresult.n_bid, gameresult.epi_bidder, gameresult.an_tricks, scoreboard.an_score,
        );
        notify_all(&aplayer, &VGameEvent::DealScored(&gameresult, &scoreboard));
    };
    notify_all(&aplayer, &VGameEvent::MatchWon(eteam_winner, &scoreboard));
    (eteam_winner, scoreboard)
}

#[test]
fn test_match_loop() {
    use crate::player::playerrandom::SPlayerRandom;
    let ruleset = unwrap!(SRuleSet::from_string("score-target=60"));
    let (eteam_winner, scoreboard) = run_match(
        EPlayerIndex::map_from_fn(|_epi| -> Box<dyn TPlayer> {
            Box::new(SPlayerRandom::new(
                /*fn_check_game*/|game: &SGame| {
                    // deck is exhausted during play, so hands plus played
                    // cards must always cover all 52 cards exactly once
                    let mut setcardb = ECard::map_from_fn(|_card| false);
                    let mut register_card = |card: ECard| {
                        assert!(!setcardb[card]);
                        setcardb[card] = true;
                    };
                    for epi in EPlayerIndex::values() {
                        for &card in game.ahand[epi].cards().iter() {
                            register_card(card);
                        }
                    }
                    for (_epi, &card) in game.trickseq.visible_cards() {
                        register_card(card);
                    }
                    assert!(ECard::values().all(|card| setcardb[card]));
                },
            ))
        }),
        &ruleset,
    );
    assert!(60<=scoreboard.an_score[eteam_winner]);
    assert!(scoreboard.an_score[eteam_winner.other()]<scoreboard.an_score[eteam_winner]);
}
