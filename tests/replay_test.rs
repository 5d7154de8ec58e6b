//! Tests for headless replay.

use monkey_banana::{GameSession, Mark, Outcome, Step, replay};

fn steps(input: &str) -> Vec<Step> {
    input
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect()
}

#[test]
fn test_win_then_draw_statistics() {
    let mut session = GameSession::new();
    let report = replay(&mut session, &steps("0 1 3 2 6 n 0 1 2 4 3 5 7 6 8"));

    assert_eq!(report.outcome, Outcome::Draw);
    assert_eq!(*report.statistics.total_games(), 2);
    assert_eq!(*report.statistics.monkey_win_rate(), 50);
    assert_eq!(*report.statistics.draws(), 1);
}

#[test]
fn test_reset_scores_mid_script() {
    let mut session = GameSession::new();
    let report = replay(&mut session, &steps("0 1 3 2 6 r 4"));

    // Board is locked after the win; the trailing move is ignored.
    assert_eq!(report.ignored_moves, 1);
    assert_eq!(report.outcome.winner(), Some(Mark::Monkey));
    assert_eq!(*report.statistics.total_games(), 0);
}

#[test]
fn test_report_text_and_json() {
    let mut session = GameSession::new();
    let report = replay(&mut session, &steps("0 1 3 2 6"));

    let text = report.to_string();
    assert!(text.contains("Congratulations! Monkey"));
    assert!(text.contains("Total Games: 1"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["statistics"]["monkey_win_rate"], 100);
    assert_eq!(json["ignored_moves"], 0);
}
