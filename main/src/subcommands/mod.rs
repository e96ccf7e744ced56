pub mod cli;
pub mod simulate;

use crate::util::*;
use tarneeb_lib::rules::ruleset::SRuleSet;

pub fn clap_arg(str_long: &'static str, str_default: &'static str) -> clap::Arg<'static> {
    clap::Arg::new(str_long)
        .long(str_long)
        .takes_value(true)
        .default_value(str_default)
}

pub fn ruleset_arg() -> clap::Arg<'static> {
    clap_arg("ruleset", "tarneeb.toml")
        .help("Path to the match parameters file")
}

pub fn get_ruleset(clapmatches: &clap::ArgMatches) -> Result<SRuleSet, Error> {
    SRuleSet::from_file(std::path::Path::new(unwrap!(clapmatches.value_of("ruleset"))))
}
