use crate::primitives::*;
use crate::rules::*;
use crate::util::*;

pub mod run;

pub trait TGamePhase : Sized {
    type ActivePlayerInfo;
    type Finish;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo>;
    fn finish_success(self) -> Self::Finish;

    fn finish(self) -> Result<Self::Finish, Self> {
        if self.which_player_can_do_something().is_some() {
            Err(self)
        } else {
            Ok(self.finish_success())
        }
    }
}

pub const N_BID_MIN : isize = 7;
pub const N_BID_MAX : isize = 13;

pub type SBids = SPlayersInRound<Option<isize>, SStaticEPI0>;

// Bidding starts a fresh deal: shuffle, deal 13 cards to each seat, then
// collect one response per seat in order.
#[derive(Debug)]
pub struct SBidding {
    pub ahand : EnumMap<EPlayerIndex, SHand>,
    pub bids : SBids,
}

impl TGamePhase for SBidding {
    type ActivePlayerInfo = EPlayerIndex;
    type Finish = VBiddingFinish;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        self.bids.current_playerindex()
    }

    fn finish_success(self) -> Self::Finish {
        assert!(self.bids.is_full());
        match self.highest_bid() {
            None => VBiddingFinish::NoBidder,
            Some((epi_bidder, n_bid)) => VBiddingFinish::TrumpSelection(SDetermineTrump {
                ahand: self.ahand,
                epi_bidder,
                n_bid,
                oesuit_trump: None,
            }),
        }
    }
}

impl SBidding {
    pub fn new() -> SBidding {
        let mut deck = SDeck::new_shuffled();
        let mut ahand = EPlayerIndex::map_from_fn(|_epi| SHand::new());
        for _i_round in 0..N_CARDS_PER_PLAYER {
            for epi in EPlayerIndex::values() {
                if deck.is_empty() {
                    // only reachable if card bookkeeping was violated elsewhere
                    warn!("Deck exhausted mid-deal; refilling from a fresh shuffle");
                    deck = SDeck::new_shuffled();
                }
                ahand[epi].add_card(unwrap!(deck.deal(1))[0]);
            }
        }
        for epi in EPlayerIndex::values() {
            ahand[epi].organize();
        }
        debug_assert!(deck.is_empty());
        #[cfg(debug_assertions)] {
            let mut setcardb = ECard::map_from_fn(|_card| false);
            for epi in EPlayerIndex::values() {
                assert_eq!(ahand[epi].cards().len(), N_CARDS_PER_PLAYER);
                for &card in ahand[epi].cards().iter() {
                    assert!(!setcardb[card]);
                    setcardb[card] = true;
                }
            }
        }
        SBidding {
            ahand,
            bids: SBids::new(SStaticEPI0{}),
        }
    }

    pub fn highest_bid(&self) -> Option<(EPlayerIndex, isize)> {
        self.bids.iter()
            .filter_map(|(epi, obid)| obid.map(|n_bid| (epi, n_bid)))
            .max_by_key(|&(_epi, n_bid)| n_bid)
    }

    // The floor shown to the player when prompting; an actual bid must be
    // strictly greater than the running highest.
    pub fn bid_floor(&self) -> isize {
        self.highest_bid().map_or(N_BID_MIN, |(_epi, n_bid)| n_bid.max(N_BID_MIN))
    }

    pub fn announce_bid(&mut self, epi: EPlayerIndex, obid: Option<isize>) -> Result<(), Error> {
        if Some(epi)!=self.which_player_can_do_something() {
            bail!("Wrong player index");
        }
        if let Some(n_bid) = obid {
            if n_bid<N_BID_MIN || N_BID_MAX<n_bid {
                bail!("Invalid bid. Please enter between {} and {}.", N_BID_MIN, N_BID_MAX);
            }
            if let Some((_epi, n_bid_highest)) = self.highest_bid() {
                if n_bid<=n_bid_highest {
                    bail!("Invalid bid. Please enter a bid higher than {}.", n_bid_highest);
                }
            }
        }
        self.bids.push(obid);
        assert!(!self.bids.is_empty());
        Ok(())
    }
}

#[derive(Debug)]
pub enum VBiddingFinish {
    TrumpSelection(SDetermineTrump),
    NoBidder, // the whole deal is abandoned and restarted from a fresh shuffle
}

#[derive(Debug)]
pub struct SDetermineTrump {
    pub ahand : EnumMap<EPlayerIndex, SHand>,
    pub epi_bidder : EPlayerIndex,
    pub n_bid : isize,
    oesuit_trump : Option<ESuit>,
}

impl TGamePhase for SDetermineTrump {
    type ActivePlayerInfo = EPlayerIndex;
    type Finish = SGame;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        if_then_some!(self.oesuit_trump.is_none(), self.epi_bidder)
    }

    fn finish_success(self) -> Self::Finish {
        SGame::new(
            self.ahand,
            SRules::new(unwrap!(self.oesuit_trump)),
            self.epi_bidder,
            self.n_bid,
        )
    }
}

impl SDetermineTrump {
    // Irrevocable for the remainder of the deal.
    pub fn select_trump(&mut self, epi: EPlayerIndex, esuit: ESuit) -> Result<(), Error> {
        if Some(epi)!=self.which_player_can_do_something() {
            bail!("Wrong player index");
        }
        self.oesuit_trump = Some(esuit);
        Ok(())
    }
}

// 13 tricks; the bid winner leads the first trick, each trick's winner
// leads the next.
#[derive(Debug)]
pub struct SGame {
    pub ahand : EnumMap<EPlayerIndex, SHand>,
    pub rules : SRules,
    pub epi_bidder : EPlayerIndex,
    pub n_bid : isize,
    pub trickseq : STrickSequence,
}

impl TGamePhase for SGame {
    type ActivePlayerInfo = EPlayerIndex;
    type Finish = SGameResult;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        if_then_some!(
            !self.trickseq.game_finished(),
            unwrap!(self.trickseq.current_trick().current_playerindex())
        )
    }

    fn finish_success(self) -> Self::Finish {
        assert!(self.trickseq.game_finished());
        let an_tricks = self.an_tricks();
        assert_eq!(an_tricks.iter().sum::<isize>(), N_CARDS_PER_PLAYER.as_num::<isize>());
        SGameResult {
            epi_bidder: self.epi_bidder,
            n_bid: self.n_bid,
            an_tricks,
        }
    }
}

impl SGame {
    pub fn new(
        ahand: EnumMap<EPlayerIndex, SHand>,
        rules: SRules,
        epi_bidder: EPlayerIndex,
        n_bid: isize,
    ) -> SGame {
        assert!(ahand.iter().all(|hand| hand.cards().len()==N_CARDS_PER_PLAYER));
        SGame {
            ahand,
            rules,
            epi_bidder,
            n_bid,
            trickseq: STrickSequence::new(/*epi_first*/epi_bidder),
        }
    }

    pub fn play_card(&mut self, epi: EPlayerIndex, i_card: usize) -> Result<(), Error> {
        if Some(epi)!=self.which_player_can_do_something() {
            bail!("Wrong player index");
        }
        let card = match self.ahand[epi].cards().get(i_card) {
            None => bail!("Card index {} out of range for a hand of {} cards", i_card, self.ahand[epi].cards().len()),
            Some(&card) => card,
        };
        if !self.rules.card_is_allowed(self.trickseq.current_trick(), &self.ahand[epi], card) {
            bail!("You must play the same suit as the first card played ({})", self.trickseq.current_trick().first().suit());
        }
        verify_eq!(unwrap!(self.ahand[epi].play_card(i_card)), card);
        let rules = self.rules;
        self.trickseq.play_card(card, |fulltrick| rules.winner_index(fulltrick));
        Ok(())
    }

    pub fn an_tricks(&self) -> EnumMap<ETeam, isize> {
        let rules = self.rules;
        let mut an_tricks = ETeam::map_from_fn(|_eteam| 0);
        for (_trick, epi_winner) in self.trickseq.completed_tricks_winner_index(|fulltrick| rules.winner_index(fulltrick)) {
            an_tricks[ETeam::from_epi(epi_winner)] += 1;
        }
        an_tricks
    }
}

#[derive(Debug)]
pub struct SGameResult {
    pub epi_bidder : EPlayerIndex,
    pub n_bid : isize,
    pub an_tricks : EnumMap<ETeam, isize>,
}

impl TGamePhase for SGameResult { // "absorbing state"
    type ActivePlayerInfo = std::convert::Infallible;
    type Finish = SGameResult;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        None
    }
    fn finish_success(self) -> Self::Finish {
        self
    }
}

impl SGameResult {
    pub fn eteam_bidder(&self) -> ETeam {
        ETeam::from_epi(self.epi_bidder)
    }

    pub fn contract_made(&self) -> bool {
        self.n_bid<=self.an_tricks[self.eteam_bidder()]
    }

    pub fn apply_payout(&self, scoreboard: &mut SScoreBoard) {
        let eteam_bidder = self.eteam_bidder();
        if self.contract_made() {
            scoreboard.an_score[eteam_bidder] += self.an_tricks[eteam_bidder];
        } else {
            scoreboard.an_score[eteam_bidder] -= self.n_bid;
            scoreboard.an_score[eteam_bidder.other()] += self.an_tricks[eteam_bidder.other()];
        }
    }
}

// One-way sink for everything an actor may want to show. All display
// formatting belongs behind this.
#[derive(Debug)]
pub enum VGameEvent<'event> {
    HandsDealt(&'event EnumMap<EPlayerIndex, SHand>),
    BidPlaced(EPlayerIndex, Option<isize>),
    NoBidder,
    BidWon(EPlayerIndex, isize),
    TrumpChosen(EPlayerIndex, ESuit),
    CardPlayed(EPlayerIndex, ECard),
    TrickWon(EPlayerIndex, &'event STrick),
    DealScored(&'event SGameResult, &'event SScoreBoard),
    MatchWon(ETeam, &'event SScoreBoard),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ahand_one_suit_each() -> EnumMap<EPlayerIndex, SHand> {
        // seat 0: hearts, seat 1: spades, seat 2: diamonds, seat 3: clubs
        EPlayerIndex::map_from_fn(|epi| {
            SHand::new_from_iter(
                ERank::values().map(|erank| ECard::new(ESuit::wrapped_from_usize(epi.to_usize()), erank))
            )
        })
    }

    #[test]
    fn test_dealing() {
        let bidding = SBidding::new();
        let mut setcardb = ECard::map_from_fn(|_card| false);
        for epi in EPlayerIndex::values() {
            assert_eq!(bidding.ahand[epi].cards().len(), N_CARDS_PER_PLAYER);
            for &card in bidding.ahand[epi].cards().iter() {
                assert!(!setcardb[card]);
                setcardb[card] = true;
            }
        }
        assert!(ECard::values().all(|card| setcardb[card]));
    }

    #[test]
    fn test_bidding() {
        let mut bidding = SBidding::new();
        assert_eq!(bidding.which_player_can_do_something(), Some(EPlayerIndex::EPI0));
        assert_eq!(bidding.bid_floor(), 7);
        // out of turn
        assert!(bidding.announce_bid(EPlayerIndex::EPI1, None).is_err());
        // out of range; state unchanged
        assert!(bidding.announce_bid(EPlayerIndex::EPI0, Some(6)).is_err());
        assert!(bidding.announce_bid(EPlayerIndex::EPI0, Some(14)).is_err());
        assert_eq!(bidding.bids.size(), 0);
        assert!(bidding.announce_bid(EPlayerIndex::EPI0, Some(8)).is_ok());
        assert_eq!(bidding.highest_bid(), Some((EPlayerIndex::EPI0, 8)));
        assert_eq!(bidding.bid_floor(), 8);
        // not strictly greater; state unchanged
        assert!(bidding.announce_bid(EPlayerIndex::EPI1, Some(8)).is_err());
        assert!(bidding.announce_bid(EPlayerIndex::EPI1, Some(7)).is_err());
        assert_eq!(bidding.bids.size(), 1);
        assert!(bidding.announce_bid(EPlayerIndex::EPI1, None).is_ok());
        assert!(bidding.announce_bid(EPlayerIndex::EPI2, Some(9)).is_ok());
        assert!(bidding.announce_bid(EPlayerIndex::EPI3, None).is_ok());
        assert_eq!(bidding.which_player_can_do_something(), None);
        match unwrap!(bidding.finish()) {
            VBiddingFinish::TrumpSelection(determinetrump) => {
                assert_eq!(determinetrump.epi_bidder, EPlayerIndex::EPI2);
                assert_eq!(determinetrump.n_bid, 9);
            },
            VBiddingFinish::NoBidder => panic!("expected a bid winner"),
        }
    }

    #[test]
    fn test_bidding_no_bidder() {
        let mut bidding = SBidding::new();
        for epi in EPlayerIndex::values() {
            unwrap!(bidding.announce_bid(epi, None));
        }
        match unwrap!(bidding.finish()) {
            VBiddingFinish::NoBidder => {},
            VBiddingFinish::TrumpSelection(_determinetrump) => panic!("expected no bidder"),
        }
    }

    #[test]
    fn test_determine_trump() {
        let mut determinetrump = SDetermineTrump {
            ahand: ahand_one_suit_each(),
            epi_bidder: EPlayerIndex::EPI1,
            n_bid: 7,
            oesuit_trump: None,
        };
        assert_eq!(determinetrump.which_player_can_do_something(), Some(EPlayerIndex::EPI1));
        assert!(determinetrump.select_trump(EPlayerIndex::EPI0, ESuit::Hearts).is_err());
        unwrap!(determinetrump.select_trump(EPlayerIndex::EPI1, ESuit::Spades));
        let game = unwrap!(determinetrump.finish());
        assert_eq!(game.rules.trump(), ESuit::Spades);
        // the bid winner leads the first trick
        assert_eq!(game.which_player_can_do_something(), Some(EPlayerIndex::EPI1));
    }

    #[test]
    fn test_suit_follow_enforcement() {
        let ahand = EPlayerIndex::map_from_fn(|epi| match epi {
            // seat 0 holds hearts 2..K and one spade; seat 1 holds the heart
            // ace and spades 3..A
            EPlayerIndex::EPI0 => SHand::new_from_iter(
                ERank::values().filter(|erank| *erank!=ERank::Ace).map(|erank| ECard::new(ESuit::Hearts, erank))
                    .chain([ECard::S2])
            ),
            EPlayerIndex::EPI1 => SHand::new_from_iter(
                [ECard::HA].into_iter()
                    .chain(ERank::values().filter(|erank| *erank!=ERank::Two).map(|erank| ECard::new(ESuit::Spades, erank)))
            ),
            EPlayerIndex::EPI2 => SHand::new_from_iter(ERank::values().map(|erank| ECard::new(ESuit::Diamonds, erank))),
            EPlayerIndex::EPI3 => SHand::new_from_iter(ERank::values().map(|erank| ECard::new(ESuit::Clubs, erank))),
        });
        let mut game = SGame::new(ahand, SRules::new(ESuit::Clubs), /*epi_bidder*/EPlayerIndex::EPI0, /*n_bid*/7);
        unwrap!(game.play_card(EPlayerIndex::EPI0, 0)); // leads H2
        // seat 1 holds a heart, so spades are rejected and nothing changes
        assert!(game.play_card(EPlayerIndex::EPI1, 1).is_err());
        assert_eq!(game.ahand[EPlayerIndex::EPI1].cards().len(), N_CARDS_PER_PLAYER);
        assert_eq!(game.which_player_can_do_something(), Some(EPlayerIndex::EPI1));
        // index out of range
        assert!(game.play_card(EPlayerIndex::EPI1, N_CARDS_PER_PLAYER).is_err());
        unwrap!(game.play_card(EPlayerIndex::EPI1, 0)); // HA follows suit
        // seat 2 is void in hearts: any card is legal
        unwrap!(game.play_card(EPlayerIndex::EPI2, 5));
        unwrap!(game.play_card(EPlayerIndex::EPI3, 12));
        // trump clubs beats the heart ace
        assert_eq!(game.trickseq.completed_tricks().len(), 1);
        assert_eq!(game.trickseq.current_trick().first_playerindex(), EPlayerIndex::EPI3);
        assert_eq!(game.an_tricks()[ETeam::Team2], 1);
    }

    #[test]
    fn test_full_deal_conservation() {
        let mut bidding = SBidding::new();
        unwrap!(bidding.announce_bid(EPlayerIndex::EPI0, Some(7)));
        for epi in [EPlayerIndex::EPI1, EPlayerIndex::EPI2, EPlayerIndex::EPI3] {
            unwrap!(bidding.announce_bid(epi, None));
        }
        let mut determinetrump = match unwrap!(bidding.finish()) {
            VBiddingFinish::TrumpSelection(determinetrump) => determinetrump,
            VBiddingFinish::NoBidder => panic!("expected a bid winner"),
        };
        unwrap!(determinetrump.select_trump(EPlayerIndex::EPI0, ESuit::Hearts));
        let mut game = unwrap!(determinetrump.finish());
        while let Some(epi) = game.which_player_can_do_something() {
            assert_eq!(
                game.trickseq.count_played_cards()
                    + EPlayerIndex::values().map(|epi| game.ahand[epi].cards().len()).sum::<usize>(),
                52
            );
            // play the first allowed card
            let veccard_allowed = game.rules.all_allowed_cards(game.trickseq.current_trick(), &game.ahand[epi]);
            let i_card = unwrap!(game.ahand[epi].cards().iter().position(|card| *card==veccard_allowed[0]));
            unwrap!(game.play_card(epi, i_card));
        }
        assert!(EPlayerIndex::values().all(|epi| game.ahand[epi].cards().is_empty()));
        let gameresult = unwrap!(game.finish());
        assert_eq!(gameresult.an_tricks.iter().sum::<isize>(), 13);
    }

    #[test]
    fn test_contract_scoring() {
        {
            // contract made: the trick count, not the bid, is added
            let gameresult = SGameResult {
                epi_bidder: EPlayerIndex::EPI0,
                n_bid: 9,
                an_tricks: ETeam::map_from_fn(|eteam| match eteam {
                    ETeam::Team1 => 10,
                    ETeam::Team2 => 3,
                }),
            };
            assert!(gameresult.contract_made());
            let mut scoreboard = SScoreBoard::new();
            gameresult.apply_payout(&mut scoreboard);
            assert_eq!(scoreboard.an_score[ETeam::Team1], 10);
            assert_eq!(scoreboard.an_score[ETeam::Team2], 0);
        }
        {
            // contract failed: bidders lose the bid, opponents bank their tricks
            let gameresult = SGameResult {
                epi_bidder: EPlayerIndex::EPI2,
                n_bid: 9,
                an_tricks: ETeam::map_from_fn(|eteam| match eteam {
                    ETeam::Team1 => 6,
                    ETeam::Team2 => 7,
                }),
            };
            assert!(!gameresult.contract_made());
            let mut scoreboard = SScoreBoard::new();
            gameresult.apply_payout(&mut scoreboard);
            assert_eq!(scoreboard.an_score[ETeam::Team1], -9);
            assert_eq!(scoreboard.an_score[ETeam::Team2], 7);
        }
        {
            // exactly meeting the bid counts as made
            let gameresult = SGameResult {
                epi_bidder: EPlayerIndex::EPI1,
                n_bid: 7,
                an_tricks: ETeam::map_from_fn(|eteam| match eteam {
                    ETeam::Team1 => 6,
                    ETeam::Team2 => 7,
                }),
            };
            assert!(gameresult.contract_made());
            let mut scoreboard = SScoreBoard::new();
            gameresult.apply_payout(&mut scoreboard);
            assert_eq!(scoreboard.an_score[ETeam::Team2], 7);
            assert_eq!(scoreboard.an_score[ETeam::Team1], 0);
        }
    }
}
