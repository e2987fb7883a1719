use anyhow::{Context, Result};
use serde_json::Value;

use crate::commands::parse_game_date;
use crate::data_provider::ScoreboardProvider;
use crate::date::GameDate;
use crate::scoreboard::Scoreboard;
use crate::table::{Column, Table};

/// Width of the report header separator line
const HEADER_SEPARATOR_WIDTH: usize = 60;

pub async fn run(client: &dyn ScoreboardProvider, date: Option<String>) -> Result<()> {
    let game_date = parse_game_date(date)?;

    let feed = client
        .miniscoreboard(game_date)
        .await
        .context("Failed to fetch miniscoreboard feed")?;

    let scoreboard =
        Scoreboard::from_feed(&feed).context("Unexpected miniscoreboard feed shape")?;

    print!("{}", format_scoreboard(game_date, &scoreboard));
    Ok(())
}

pub fn format_scoreboard(date: GameDate, scoreboard: &Scoreboard) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", "═".repeat(HEADER_SEPARATOR_WIDTH)));
    output.push_str(&format!("MLB SCORES - {}\n", date));
    output.push_str(&format!("{}\n\n", "═".repeat(HEADER_SEPARATOR_WIDTH)));

    output.push_str(&build_table(scoreboard).render());

    if scoreboard.is_empty() {
        output.push_str("\nNo games scheduled for this date.\n");
    }

    output
}

/// Project the scoreboard into its seven display columns, in feed order.
///
/// Both run columns print under the same "Score" header on purpose; home and
/// away are told apart by position, never by label.
fn build_table(scoreboard: &Scoreboard) -> Table {
    let mut table = Table::new(vec![
        Column::left("Home"),
        Column::right("Score"),
        Column::left("Away"),
        Column::right("Score"),
        Column::right("Inning"),
        Column::right("Outs"),
        Column::left("Status"),
    ]);

    for game in &scoreboard.games {
        table.push_row(vec![
            cell_text(&game.home_team_name),
            cell_text(&game.home_team_runs),
            cell_text(&game.away_team_name),
            cell_text(&game.away_team_runs),
            cell_text(&game.inning),
            cell_text(&game.outs),
            cell_text(&game.status),
        ]);
    }

    table
}

/// Render one feed value for display: strings print bare, everything else
/// in its JSON form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    fn fixed_date() -> GameDate {
        GameDate {
            year: 2024,
            month: 3,
            day: 7,
        }
    }

    #[test]
    fn test_format_scoreboard_output() {
        let scoreboard = Scoreboard::from_feed(&fixtures::feed_with_games()).unwrap();
        let output = format_scoreboard(fixed_date(), &scoreboard);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[2], "MLB SCORES - 2024-03-07");
        assert_eq!(
            lines[5],
            "Home     Score  Away       Score  Inning  Outs  Status"
        );
        assert_eq!(
            lines[6],
            "-------  -----  ---------  -----  ------  ----  -----------"
        );
        assert_eq!(
            lines[7],
            "Cubs         4  Cardinals      2       9     2  In Progress"
        );
        assert_eq!(
            lines[8],
            "Yankees      0  Red Sox        5       7     1  Final"
        );
        assert_eq!(
            lines[9],
            "Giants       0  Dodgers        0       0     0  Preview"
        );
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_format_scoreboard_empty_feed() {
        let scoreboard = Scoreboard::from_feed(&fixtures::feed_empty()).unwrap();
        let output = format_scoreboard(fixed_date(), &scoreboard);
        assert!(output.contains("Home  Score  Away  Score  Inning  Outs  Status"));
        assert!(output.contains("No games scheduled for this date."));
    }

    #[test]
    fn test_rows_follow_feed_order() {
        let scoreboard = Scoreboard::from_feed(&fixtures::feed_with_games()).unwrap();
        let output = format_scoreboard(fixed_date(), &scoreboard);
        let cubs = output.find("Cubs").unwrap();
        let yankees = output.find("Yankees").unwrap();
        let giants = output.find("Giants").unwrap();
        assert!(cubs < yankees);
        assert!(yankees < giants);
    }

    #[test]
    fn test_cell_text_renders_strings_bare() {
        assert_eq!(cell_text(&json!("Final")), "Final");
        assert_eq!(cell_text(&json!(0)), "0");
        assert_eq!(cell_text(&json!(null)), "null");
        assert_eq!(cell_text(&json!(true)), "true");
    }

    #[tokio::test]
    async fn test_run_with_mock_provider() {
        let provider = fixtures::MockProvider::new(fixtures::feed_with_games());
        let result = run(&provider, Some("2024-03-07".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_fails_on_missing_structural_key() {
        let provider = fixtures::MockProvider::new(fixtures::feed_missing_games_key());
        let result = run(&provider, Some("2024-03-07".to_string())).await;
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("feed is missing required key 'games'"));
    }

    #[tokio::test]
    async fn test_run_fails_on_bad_date() {
        let provider = fixtures::MockProvider::new(fixtures::feed_empty());
        let result = run(&provider, Some("07-03-2024".to_string())).await;
        assert!(result.is_err());
    }
}
