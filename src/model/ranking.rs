use serde::Deserialize;

/// Top-level shape of the decoded `characterRankings` document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CharacterRankingsPage {
    #[serde(default)]
    pub rankings: Vec<CharacterRanking>,
}

/// A single placement in an encounter's character rankings.
///
/// Every field is optional in the payload the service returns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRanking {
    pub rank: Option<u64>,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub class: Option<String>,
    pub spec: Option<String>,
    pub duration: Option<u64>,
    pub start_time: Option<i64>,
    pub hard_mode_level: Option<u32>,
    /// Item level bracket the ranking was placed in.
    pub bracket_data: Option<f64>,
    pub faction: Option<u8>,
    pub guild: Option<Guild>,
    pub server: Option<Server>,
    pub report: Option<ReportRef>,
}

/// Guild the ranked character belonged to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Guild {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub faction: Option<u8>,
}

/// Realm the ranked character plays on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Server {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub region: Option<String>,
}

/// Combat log report the ranking was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRef {
    pub code: Option<String>,
    #[serde(rename = "fightID")]
    pub fight_id: Option<u32>,
    pub start_time: Option<i64>,
}

/// An encounter paired with its top character rankings, in service order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncounterRankings {
    pub encounter_name: Option<String>,
    pub rankings: Vec<CharacterRanking>,
}
