mod playerhuman;
mod tui;

use crate::util::*;
use self::playerhuman::SPlayerHuman;
use tarneeb_lib::{
    game::run::run_match,
    player::{playercomputer::SPlayerComputer, TPlayer},
    primitives::*,
};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::*;
    clap::Command::new(str_subcommand)
        .about("Play in the terminal")
        .arg(ruleset_arg())
        .arg(clap_arg("humans", "0")
            .help("Comma-separated seat numbers (0-3) controlled by humans")
        )
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let vecepi_human = unwrap!(clapmatches.value_of("humans"))
        .split(',')
        .filter(|str_epi| !str_epi.trim().is_empty())
        .map(|str_epi| str_epi.trim().parse::<EPlayerIndex>()
            .map_err(|str_err| format_err!("{} ({})", str_err, str_epi))
        )
        .collect::<Result<Vec<_>, _>>()?;
    if vecepi_human.is_empty() {
        bail!("cli needs at least one human seat. Use the simulate subcommand for computer-only matches.");
    }
    let (eteam_winner, scoreboard) = run_match(
        /*aplayer*/EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
            if vecepi_human.contains(&epi) {
                Box::new(SPlayerHuman::new(
                    epi,
                    ruleset.astr_player_name.clone(),
                    /*b_announcer*/vecepi_human[0]==epi,
                ))
            } else {
                Box::new(SPlayerComputer::new(ruleset.astr_player_name[epi].clone()))
            }
        }),
        &ruleset,
    );
    println!(
        "{} won the match {} to {}.",
        eteam_winner,
        scoreboard.an_score[eteam_winner],
        scoreboard.an_score[eteam_winner.other()],
    );
    Ok(())
}
