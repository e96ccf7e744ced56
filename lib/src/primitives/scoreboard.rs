use crate::primitives::eplayerindex::*;
use crate::util::*;
use std::fmt;

plain_enum_mod!(modeteam, ETeam {
    Team1, // seats 0 and 2
    Team2, // seats 1 and 3
});

impl ETeam {
    pub fn from_epi(epi: EPlayerIndex) -> ETeam {
        ETeam::wrapped_from_usize(epi.to_usize() % ETeam::SIZE)
    }
    pub fn other(self) -> ETeam {
        match self {
            ETeam::Team1 => ETeam::Team2,
            ETeam::Team2 => ETeam::Team1,
        }
    }
}

impl fmt::Display for ETeam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Team {}", self.to_usize() + 1)
    }
}

// Running match totals per team, updated only when a deal completes.
#[derive(Clone, Debug)]
pub struct SScoreBoard {
    pub an_score: EnumMap<ETeam, isize>,
}

impl SScoreBoard {
    pub fn new() -> SScoreBoard {
        SScoreBoard {
            an_score: ETeam::map_from_fn(|_eteam| 0),
        }
    }

    // The match is decided once a team has reached the target score with a
    // strictly higher total than the other team. If both totals were equal
    // at or above the target, another deal would be played.
    pub fn winner(&self, n_score_target: isize) -> Option<ETeam> {
        ETeam::values().find(|&eteam| {
            n_score_target<=self.an_score[eteam]
            && self.an_score[eteam.other()]<self.an_score[eteam]
        })
    }
}

#[test]
fn test_team_partition() {
    assert_eq!(ETeam::from_epi(EPlayerIndex::EPI0), ETeam::Team1);
    assert_eq!(ETeam::from_epi(EPlayerIndex::EPI1), ETeam::Team2);
    assert_eq!(ETeam::from_epi(EPlayerIndex::EPI2), ETeam::Team1);
    assert_eq!(ETeam::from_epi(EPlayerIndex::EPI3), ETeam::Team2);
}

#[test]
fn test_winner() {
    let mut scoreboard = SScoreBoard::new();
    assert_eq!(scoreboard.winner(60), None);
    scoreboard.an_score[ETeam::Team1] = 59;
    scoreboard.an_score[ETeam::Team2] = -7;
    assert_eq!(scoreboard.winner(60), None);
    scoreboard.an_score[ETeam::Team1] = 63;
    assert_eq!(scoreboard.winner(60), Some(ETeam::Team1));
    scoreboard.an_score[ETeam::Team2] = 63;
    assert_eq!(scoreboard.winner(60), None); // tied at the target decides nothing
    scoreboard.an_score[ETeam::Team2] = 64;
    assert_eq!(scoreboard.winner(60), Some(ETeam::Team2));
}
