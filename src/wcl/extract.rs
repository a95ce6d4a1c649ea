use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{RankingsError, Result};
use crate::model::{CharacterRankingsPage, EncounterRankings};

/// Number of rankings kept from the service's (already sorted) list.
pub const TOP_RANKINGS: usize = 10;

/// Pull the encounter name and top rankings out of a raw rankings response.
///
/// `characterRankings` arrives as a JSON document encoded inside a JSON
/// string, so it is decoded a second time here.
pub(crate) fn parse_rankings_response(response: &Value) -> Result<EncounterRankings> {
    let encounter = response
        .pointer("/data/worldData/encounter")
        .and_then(Value::as_object)
        .filter(|encounter| !encounter.is_empty())
        .ok_or(RankingsError::MissingEncounterData)?;

    let encounter_name = encounter
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let mut page = match encounter.get("characterRankings") {
        Some(Value::String(raw)) if !raw.is_empty() => {
            serde_json::from_str::<CharacterRankingsPage>(raw)?
        }
        Some(value) if value.as_object().is_some_and(|fields| !fields.is_empty()) => {
            CharacterRankingsPage::deserialize(value)?
        }
        Some(Value::Array(items)) if items.is_empty() => {
            return Err(RankingsError::NoRankingsFound)
        }
        None | Some(Value::Null | Value::String(_) | Value::Object(_)) => {
            return Err(RankingsError::NoRankingsFound)
        }
        Some(other) => {
            return Err(RankingsError::MalformedRankingsPayload(
                serde::de::Error::custom(format!(
                    "expected a JSON string or object, found {other}"
                )),
            ))
        }
    };

    let total = page.rankings.len();
    page.rankings.truncate(TOP_RANKINGS);
    debug!(
        total,
        kept = page.rankings.len(),
        encounter = encounter_name.as_deref().unwrap_or_default(),
        "parsed character rankings"
    );

    Ok(EncounterRankings {
        encounter_name,
        rankings: page.rankings,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response_with(character_rankings: Value) -> Value {
        json!({
            "data": {"worldData": {"encounter": {
                "name": "Test Boss",
                "characterRankings": character_rankings
            }}}
        })
    }

    #[test]
    fn test_parse_rankings_response_success() {
        let response = response_with(json!(
            r#"{"rankings": [{"name": "Player1", "amount": 100.0}]}"#
        ));
        let parsed = parse_rankings_response(&response).unwrap();

        assert_eq!(parsed.encounter_name.as_deref(), Some("Test Boss"));
        assert_eq!(parsed.rankings.len(), 1);
        assert_eq!(parsed.rankings[0].name.as_deref(), Some("Player1"));
        assert_eq!(parsed.rankings[0].amount, Some(100.0));
    }

    #[test]
    fn test_parse_rankings_response_full_record() {
        let response = response_with(json!(
            r#"{"rankings":[{"rank":1,"name":"PlayerA","amount":12345.67,"class":"Warrior","spec":"Fury","duration":312456,"startTime":1741900000000,"hardModeLevel":4,"bracketData":678.5,"faction":0,"guild":{"id":7,"name":"GuildA","faction":1},"server":{"id":3,"name":"ServerA","region":"EU"},"report":{"code":"abc1","fightID":12,"startTime":1741890000000}}],"hasMorePages":true}"#
        ));
        let parsed = parse_rankings_response(&response).unwrap();
        let ranking = &parsed.rankings[0];

        assert_eq!(ranking.rank, Some(1));
        assert_eq!(ranking.class.as_deref(), Some("Warrior"));
        assert_eq!(ranking.spec.as_deref(), Some("Fury"));
        assert_eq!(ranking.duration, Some(312456));
        assert_eq!(ranking.hard_mode_level, Some(4));
        assert_eq!(ranking.bracket_data, Some(678.5));
        assert_eq!(ranking.faction, Some(0));
        let guild = ranking.guild.as_ref().unwrap();
        assert_eq!(guild.name.as_deref(), Some("GuildA"));
        assert_eq!(guild.faction, Some(1));
        let server = ranking.server.as_ref().unwrap();
        assert_eq!(server.region.as_deref(), Some("EU"));
        let report = ranking.report.as_ref().unwrap();
        assert_eq!(report.code.as_deref(), Some("abc1"));
        assert_eq!(report.fight_id, Some(12));
    }

    #[test]
    fn test_parse_rankings_response_truncates_to_top_ten() {
        let rankings: Vec<Value> = (1..=15)
            .map(|i| json!({"name": format!("Player{i}"), "amount": 1000.0 - f64::from(i)}))
            .collect();
        let payload = json!({ "rankings": rankings }).to_string();
        let parsed = parse_rankings_response(&response_with(json!(payload))).unwrap();

        assert_eq!(parsed.rankings.len(), TOP_RANKINGS);
        let names: Vec<_> = parsed
            .rankings
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("Player{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_parse_rankings_response_keeps_short_lists() {
        let payload = r#"{"rankings": [{"name": "B"}, {"name": "A"}, {"name": "C"}]}"#;
        let parsed = parse_rankings_response(&response_with(json!(payload))).unwrap();
        let names: Vec<_> = parsed
            .rankings
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_parse_rankings_response_missing_encounter_data() {
        let cases = [
            json!({"data": {"worldData": {}}}),
            json!({"data": {"worldData": {"encounter": null}}}),
            json!({"data": {"worldData": {"encounter": {}}}}),
            json!({"data": null, "errors": [{"message": "Invalid encounter"}]}),
            json!({}),
        ];
        for response in cases {
            let err = parse_rankings_response(&response).unwrap_err();
            assert!(
                matches!(err, RankingsError::MissingEncounterData),
                "unexpected error for {response}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_rankings_response_missing_character_rankings() {
        let response = json!({"data": {"worldData": {"encounter": {"name": "Test Boss"}}}});
        let err = parse_rankings_response(&response).unwrap_err();
        assert!(matches!(err, RankingsError::NoRankingsFound));

        for empty in [json!(null), json!(""), json!({}), json!([])] {
            let err = parse_rankings_response(&response_with(empty.clone())).unwrap_err();
            assert!(
                matches!(err, RankingsError::NoRankingsFound),
                "unexpected error for {empty}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_rankings_response_invalid_json_string() {
        let response = response_with(json!("invalid json string"));
        let err = parse_rankings_response(&response).unwrap_err();
        assert!(matches!(err, RankingsError::MalformedRankingsPayload(_)));
    }

    #[test]
    fn test_parse_rankings_response_inner_document_not_an_object() {
        for payload in ["null", "42", r#""rankings""#] {
            let err = parse_rankings_response(&response_with(json!(payload))).unwrap_err();
            assert!(
                matches!(err, RankingsError::MalformedRankingsPayload(_)),
                "unexpected error for {payload}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_rankings_response_unexpected_field_type() {
        for payload in [json!(42), json!([{"name": "Player1"}])] {
            let err = parse_rankings_response(&response_with(payload)).unwrap_err();
            assert!(matches!(err, RankingsError::MalformedRankingsPayload(_)));
        }
    }

    #[test]
    fn test_parse_rankings_response_accepts_embedded_object() {
        let response = response_with(json!({"rankings": [{"name": "Player1"}]}));
        let parsed = parse_rankings_response(&response).unwrap();
        assert_eq!(parsed.rankings[0].name.as_deref(), Some("Player1"));
    }

    #[test]
    fn test_parse_rankings_response_without_rankings_key() {
        let parsed =
            parse_rankings_response(&response_with(json!(r#"{"page": 1}"#))).unwrap();
        assert!(parsed.rankings.is_empty());
        assert_eq!(parsed.encounter_name.as_deref(), Some("Test Boss"));
    }
}
