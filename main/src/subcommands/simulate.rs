use crate::util::*;
use tarneeb_lib::{
    game::run::run_match,
    player::{playercomputer::SPlayerComputer, TPlayer},
    primitives::*,
};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::*;
    clap::Command::new(str_subcommand)
        .about("Run matches between computer players")
        .arg(ruleset_arg())
        .arg(clap_arg("nummatches", "4")
            .help("Number of matches to play")
        )
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let n_matches = unwrap!(clapmatches.value_of("nummatches")).parse::<usize>().unwrap_or(4);
    let mut an_wins = ETeam::map_from_fn(|_eteam| 0);
    for i_match in 0..n_matches {
        let (eteam_winner, scoreboard) = run_match(
            /*aplayer*/EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
                Box::new(SPlayerComputer::new(ruleset.astr_player_name[epi].clone()))
            }),
            &ruleset,
        );
        info!("Match {} won by {}", i_match, eteam_winner);
        println!(
            "Match {}: {} won {} to {}",
            i_match,
            eteam_winner,
            scoreboard.an_score[eteam_winner],
            scoreboard.an_score[eteam_winner.other()],
        );
        an_wins[eteam_winner] += 1;
    }
    println!("Results:");
    for eteam in ETeam::values() {
        println!("{} {}", eteam, an_wins[eteam]);
    }
    Ok(())
}
