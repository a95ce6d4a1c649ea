use serde::Serialize;

/// Encounter ID of Gallywix, the final boss of the current raid tier.
pub const GALLYWIX_ENCOUNTER_ID: u32 = 3016;

/// Difficulty tier value the API uses for Mythic.
pub const MYTHIC_DIFFICULTY: u8 = 5;

/// Ranking metric accepted by `characterRankings` (`CharacterRankingMetricType`).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    #[default]
    Dps,
    Hps,
    BossDps,
    BossHps,
    Rdps,
    Ndps,
    Cdps,
    TankHps,
    Wdps,
    Krsi,
    PlayerScore,
    PlayerSpeed,
}

/// Variables bound into the character rankings query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankingsQuery {
    #[serde(rename = "encounterID")]
    pub encounter_id: u32,
    pub difficulty: u8,
    pub metric: Metric,
}

impl Default for RankingsQuery {
    fn default() -> Self {
        Self {
            encounter_id: GALLYWIX_ENCOUNTER_ID,
            difficulty: MYTHIC_DIFFICULTY,
            metric: Metric::Dps,
        }
    }
}
