//! Team identity resolution.
//!
//! Maps canonical upstream display names to short abbreviations and logo
//! file keys. The tables are closed curated sets keyed by exact name; an
//! unknown name falls back to a derived three-letter abbreviation and the
//! league's default logo. No fuzzy matching.

use crate::League;
use phf::phf_map;

struct TeamEntry {
    abbrev: &'static str,
    logo_key: &'static str,
}

static MLB_TEAMS: phf::Map<&'static str, TeamEntry> = phf_map! {
    "Boston Red Sox" => TeamEntry { abbrev: "BOS", logo_key: "BOS_RED" },
    "New York Yankees" => TeamEntry { abbrev: "NYY", logo_key: "NEW_YAN" },
    "Detroit Tigers" => TeamEntry { abbrev: "DET", logo_key: "DET_TIG" },
    "Cleveland Guardians" => TeamEntry { abbrev: "CLE", logo_key: "CLE_GUA" },
    "San Diego Padres" => TeamEntry { abbrev: "SD", logo_key: "SAN_PAD" },
    "Chicago Cubs" => TeamEntry { abbrev: "CHC", logo_key: "CHI_CUB" },
    "Houston Astros" => TeamEntry { abbrev: "HOU", logo_key: "HOU_AST" },
    "Texas Rangers" => TeamEntry { abbrev: "TEX", logo_key: "TEX_RAN" },
    "Los Angeles Dodgers" => TeamEntry { abbrev: "LAD", logo_key: "LOS_DOD" },
    "San Francisco Giants" => TeamEntry { abbrev: "SF", logo_key: "SF_GIA" },
    "Atlanta Braves" => TeamEntry { abbrev: "ATL", logo_key: "ATL_BRA" },
    "New York Mets" => TeamEntry { abbrev: "NYM", logo_key: "NY_MET" },
    "Philadelphia Phillies" => TeamEntry { abbrev: "PHI", logo_key: "PHI_PHI" },
    "Milwaukee Brewers" => TeamEntry { abbrev: "MIL", logo_key: "MIL_BRE" },
    "Arizona Diamondbacks" => TeamEntry { abbrev: "ARI", logo_key: "ARI_DIA" },
    "Colorado Rockies" => TeamEntry { abbrev: "COL", logo_key: "COL_ROC" },
    "Miami Marlins" => TeamEntry { abbrev: "MIA", logo_key: "MIA_MAR" },
    "Washington Nationals" => TeamEntry { abbrev: "WSH", logo_key: "WAS_NAT" },
    "Pittsburgh Pirates" => TeamEntry { abbrev: "PIT", logo_key: "PIT_PIR" },
    "Cincinnati Reds" => TeamEntry { abbrev: "CIN", logo_key: "CIN_RED" },
    "St. Louis Cardinals" => TeamEntry { abbrev: "STL", logo_key: "STL_CAR" },
    "Chicago White Sox" => TeamEntry { abbrev: "CWS", logo_key: "CHI_WHI" },
    "Minnesota Twins" => TeamEntry { abbrev: "MIN", logo_key: "MIN_TWI" },
    "Kansas City Royals" => TeamEntry { abbrev: "KC", logo_key: "KC_ROY" },
    "Oakland Athletics" => TeamEntry { abbrev: "OAK", logo_key: "OAK_ATH" },
    "Los Angeles Angels" => TeamEntry { abbrev: "LAA", logo_key: "LA_ANG" },
    "Seattle Mariners" => TeamEntry { abbrev: "SEA", logo_key: "SEA_MAR" },
    "Baltimore Orioles" => TeamEntry { abbrev: "BAL", logo_key: "BAL_ORI" },
    "Tampa Bay Rays" => TeamEntry { abbrev: "TB", logo_key: "TB_RAY" },
    "Toronto Blue Jays" => TeamEntry { abbrev: "TOR", logo_key: "TOR_BLU" },
};

static NFL_TEAMS: phf::Map<&'static str, TeamEntry> = phf_map! {
    "Arizona Cardinals" => TeamEntry { abbrev: "ARI", logo_key: "ARI_CAR" },
    "Atlanta Falcons" => TeamEntry { abbrev: "ATL", logo_key: "ATL_FAL" },
    "Baltimore Ravens" => TeamEntry { abbrev: "BAL", logo_key: "BAL_RAV" },
    "Buffalo Bills" => TeamEntry { abbrev: "BUF", logo_key: "BUF_BIL" },
    "Carolina Panthers" => TeamEntry { abbrev: "CAR", logo_key: "CAR_PAN" },
    "Chicago Bears" => TeamEntry { abbrev: "CHI", logo_key: "CHI_BEA" },
    "Cincinnati Bengals" => TeamEntry { abbrev: "CIN", logo_key: "CIN_BEN" },
    "Cleveland Browns" => TeamEntry { abbrev: "CLE", logo_key: "CLE_BRO" },
    "Dallas Cowboys" => TeamEntry { abbrev: "DAL", logo_key: "DAL_COW" },
    "Denver Broncos" => TeamEntry { abbrev: "DEN", logo_key: "DEN_BRO" },
    "Detroit Lions" => TeamEntry { abbrev: "DET", logo_key: "DET_LIO" },
    "Green Bay Packers" => TeamEntry { abbrev: "GB", logo_key: "GRE_PAC" },
    "Houston Texans" => TeamEntry { abbrev: "HOU", logo_key: "HOU_TEX" },
    "Indianapolis Colts" => TeamEntry { abbrev: "IND", logo_key: "IND_COL" },
    "Jacksonville Jaguars" => TeamEntry { abbrev: "JAX", logo_key: "JAX_JAG" },
    "Kansas City Chiefs" => TeamEntry { abbrev: "KC", logo_key: "KC_CHI" },
    "Las Vegas Raiders" => TeamEntry { abbrev: "LV", logo_key: "LV_RAI" },
    "Los Angeles Chargers" => TeamEntry { abbrev: "LAC", logo_key: "LAC_CHA" },
    "Los Angeles Rams" => TeamEntry { abbrev: "LAR", logo_key: "LAR_RAM" },
    "Miami Dolphins" => TeamEntry { abbrev: "MIA", logo_key: "MIA_DOL" },
    "Minnesota Vikings" => TeamEntry { abbrev: "MIN", logo_key: "MIN_VIK" },
    "New England Patriots" => TeamEntry { abbrev: "NE", logo_key: "NE_PAT" },
    "New Orleans Saints" => TeamEntry { abbrev: "NO", logo_key: "NO_SAI" },
    "New York Giants" => TeamEntry { abbrev: "NYG", logo_key: "NYG_GIA" },
    "New York Jets" => TeamEntry { abbrev: "NYJ", logo_key: "NEW_JET" },
    "Philadelphia Eagles" => TeamEntry { abbrev: "PHI", logo_key: "PHI_EAG" },
    "Pittsburgh Steelers" => TeamEntry { abbrev: "PIT", logo_key: "PIT_STE" },
    "San Francisco 49ers" => TeamEntry { abbrev: "SF", logo_key: "SAN_49E" },
    "Seattle Seahawks" => TeamEntry { abbrev: "SEA", logo_key: "SEA_SEA" },
    "Tampa Bay Buccaneers" => TeamEntry { abbrev: "TB", logo_key: "TAM_BUC" },
    "Tennessee Titans" => TeamEntry { abbrev: "TEN", logo_key: "TEN_TIT" },
    "Washington Commanders" => TeamEntry { abbrev: "WAS", logo_key: "WAS_COM" },
};

fn table(league: League) -> &'static phf::Map<&'static str, TeamEntry> {
    match league {
        League::Mlb => &MLB_TEAMS,
        League::Nfl => &NFL_TEAMS,
    }
}

/// Short abbreviation for a team. Unknown names get the first three
/// characters uppercased.
pub fn abbreviate(team_name: &str, league: League) -> String {
    match table(league).get(team_name) {
        Some(entry) => entry.abbrev.to_string(),
        None => team_name.chars().take(3).collect::<String>().to_uppercase(),
    }
}

/// Logo file key for a team, `None` when the name is not in the table.
pub fn logo_key(team_name: &str, league: League) -> Option<&'static str> {
    table(league).get(team_name).map(|entry| entry.logo_key)
}

/// Path to the team's logo asset, or the league default on a miss.
pub fn logo_path(team_name: &str, league: League) -> String {
    match logo_key(team_name, league) {
        Some(key) => format!("{}/{}.png", league.logo_path(), key),
        None => league.default_logo().to_string(),
    }
}
