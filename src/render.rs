use itertools::Itertools;

use crate::model::CharacterRanking;

/// Returned instead of a table when there is nothing to show.
pub const NO_RANKINGS: &str = "No rankings to display.\n";

/// Shown for any value missing from a ranking.
pub const PLACEHOLDER: &str = "N/A";

const HEADERS: [&str; 8] = [
    "Rank", "Player", "DPS", "Class", "Spec", "Guild", "Server", "Report",
];
const DELIMITER: &str = " | ";

/// Render rankings as a Markdown table.
///
/// Pure and deterministic. An empty slice yields [`NO_RANKINGS`] rather than
/// a header-only table.
pub fn render_rankings(encounter_name: &str, rankings: &[CharacterRanking]) -> String {
    if rankings.is_empty() {
        return NO_RANKINGS.to_owned();
    }

    let mut lines = Vec::with_capacity(rankings.len() + 3);
    lines.push(format!(
        "## Top {} DPS Rankings for {encounter_name} (Mythic)\n",
        rankings.len()
    ));
    lines.push(HEADERS.join(DELIMITER));
    lines.push(HEADERS.iter().map(|_| "---").join(DELIMITER));
    lines.extend(
        rankings
            .iter()
            .enumerate()
            .map(|(idx, ranking)| render_row(idx + 1, ranking)),
    );
    lines.join("\n")
}

fn render_row(position: usize, ranking: &CharacterRanking) -> String {
    let rank = ranking
        .rank
        .map_or_else(|| position.to_string(), |rank| rank.to_string());
    let amount = format!("{:.2}", ranking.amount.unwrap_or(0.0));
    let guild = ranking.guild.as_ref().and_then(|g| g.name.as_deref());
    let server = ranking.server.as_ref().and_then(|s| s.name.as_deref());
    let report = ranking.report.as_ref().and_then(|r| r.code.as_deref());

    [
        rank.as_str(),
        or_placeholder(ranking.name.as_deref()),
        amount.as_str(),
        or_placeholder(ranking.class.as_deref()),
        or_placeholder(ranking.spec.as_deref()),
        or_placeholder(guild),
        or_placeholder(server),
        or_placeholder(report),
    ]
    .join(DELIMITER)
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}
