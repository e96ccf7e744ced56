use crate::primitives::*;
use crate::util::*;
use std::{fs::File, io::prelude::*, path::Path};

pub const N_SCORE_TARGET_DEFAULT : isize = 60;

#[derive(Clone, Debug)]
pub struct SRuleSet {
    pub n_score_target : isize,
    pub astr_player_name : EnumMap<EPlayerIndex, String>,
}

impl SRuleSet {
    pub fn from_string(str_toml: &str) -> Result<SRuleSet, Error> {
        let tomltbl = str_toml.parse::<toml::Value>()?;
        let n_score_target = match tomltbl.get("score-target") {
            None => {
                info!("SRuleSet: Did not find score-target. Falling back to {}.", N_SCORE_TARGET_DEFAULT);
                N_SCORE_TARGET_DEFAULT
            },
            Some(&toml::Value::Integer(n_score_target)) if 0<n_score_target => n_score_target.as_num::<isize>(),
            Some(_) => bail!("score-target must be a positive integer"),
        };
        let astr_player_name = match tomltbl.get("players").and_then(|tomlval| tomlval.get("names")).and_then(|tomlval| tomlval.as_array()) {
            None => EPlayerIndex::map_from_fn(|epi| format!("Player {}", epi.to_usize()+1)),
            Some(vectomlval) => {
                if vectomlval.len()!=EPlayerIndex::SIZE {
                    bail!("players.names must list exactly {} names", EPlayerIndex::SIZE);
                }
                let vecstr_name = vectomlval.iter()
                    .map(|tomlval| tomlval.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| format_err!("players.names entries must be strings"))
                    )
                    .collect::<Result<Vec<_>, _>>()?;
                EPlayerIndex::map_from_fn(|epi| vecstr_name[epi.to_usize()].clone())
            },
        };
        Ok(SRuleSet{n_score_target, astr_player_name})
    }

    pub fn from_file(path: &Path) -> Result<SRuleSet, Error> {
        if !path.exists() {
            info!("SRuleSet: {:?} not found. Falling back to defaults.", path);
            return Self::from_string("");
        }
        let mut file = File::open(path)?;
        let mut str_toml = String::new();
        file.read_to_string(&mut str_toml)?;
        Self::from_string(&str_toml)
    }
}

#[test]
fn test_ruleset_defaults() {
    let ruleset = unwrap!(SRuleSet::from_string(""));
    assert_eq!(ruleset.n_score_target, 60);
    assert_eq!(ruleset.astr_player_name[EPlayerIndex::EPI0], "Player 1");
    assert_eq!(ruleset.astr_player_name[EPlayerIndex::EPI3], "Player 4");
}

#[test]
fn test_ruleset_from_string() {
    let ruleset = unwrap!(SRuleSet::from_string(r#"
        score-target=41
        [players]
        names=["N", "E", "S", "W"]
    "#));
    assert_eq!(ruleset.n_score_target, 41);
    assert_eq!(ruleset.astr_player_name[EPlayerIndex::EPI1], "E");
    assert!(SRuleSet::from_string("score-target=0").is_err());
    assert!(SRuleSet::from_string("score-target=\"high\"").is_err());
    assert!(SRuleSet::from_string(r#"
        [players]
        names=["only", "three", "names"]
    "#).is_err());
}
